#![cfg(feature = "gui")]

use crate::core::telemetry::logging::init_logging;
use crate::models::display_log::DisplayLog;
use crate::services::listing::spawn_walk;
use crate::ui::assets::Assets;
use crate::ui::theme::theme;

use gpui::{
    div, prelude::*, px, rgb, size, App, Application, Bounds, Context, FocusHandle, Focusable,
    IntoElement, PathPromptOptions, Render, SharedString, TitlebarOptions, Window, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use std::path::PathBuf;
use tracing::warn;

pub struct ListerApp;

impl ListerApp {
    pub fn run() {
        init_logging();

        Application::new().with_assets(Assets).run(|app: &mut App| {
            gpui_component::init(app);
            let bounds = Bounds::centered(None, size(px(600.0), px(400.0)), app);
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Recursive File Lister".into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            app.open_window(options, |window, cx| {
                let focus_handle = cx.focus_handle();
                let view = cx.new(|_cx| ListerView {
                    log: DisplayLog::new(),
                    run: 0,
                    focus_handle,
                });
                cx.new(|cx| Root::new(view.into(), window, cx))
            })
            .expect("open window");
        });
    }
}

pub struct ListerView {
    log: DisplayLog,
    // Bumped on each Start press so a superseded forwarding task stops
    // appending into the new run's log.
    run: u64,
    focus_handle: FocusHandle,
}

impl ListerView {
    fn choose_and_list(&mut self, cx: &mut Context<Self>) {
        let picked = cx.prompt_for_paths(PathPromptOptions {
            files: false,
            directories: true,
            multiple: false,
        });

        cx.spawn(async move |this, cx| {
            match picked.await {
                Ok(Ok(Some(mut paths))) if !paths.is_empty() => {
                    let root = paths.remove(0);
                    this.update(cx, |view, cx| view.begin_run(root, cx)).ok();
                }
                Ok(Ok(_)) => {} // dialog cancelled
                Ok(Err(err)) => warn!(%err, "directory picker failed"),
                Err(err) => warn!(%err, "directory picker dropped"),
            }
        })
        .detach();
    }

    fn begin_run(&mut self, root: PathBuf, cx: &mut Context<Self>) {
        self.log.clear();
        self.run += 1;
        let run = self.run;
        cx.notify();

        // The worker thread walks and sends; only this foreground task
        // touches the log, in channel delivery order.
        let mut events = spawn_walk(root);
        cx.spawn(async move |this, cx| {
            while let Some(event) = events.recv().await {
                let appended = this.update(cx, |view, cx| {
                    if view.run != run {
                        return false;
                    }
                    view.log.append(event.to_line());
                    cx.notify();
                    true
                });
                if !matches!(appended, Ok(true)) {
                    break;
                }
            }
        })
        .detach();
    }
}

impl Focusable for ListerView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ListerView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(theme::BG))
            .track_focus(&self.focus_handle)
            .child(
                div()
                    .py(px(10.0))
                    .flex()
                    .justify_center()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(rgb(theme::FG))
                    .child("Recursive Directory Lister"),
            )
            .child(
                div()
                    .id("file-list")
                    .flex_1()
                    .min_h(px(0.0))
                    .mx(px(10.0))
                    .p(px(8.0))
                    .border_1()
                    .border_color(rgb(theme::BORDER))
                    .rounded(px(4.0))
                    .bg(rgb(theme::BG_SECONDARY))
                    .overflow_y_scroll()
                    .font_family("monospace")
                    .text_sm()
                    .text_color(rgb(theme::FG))
                    .flex()
                    .flex_col()
                    .children(
                        self.log
                            .lines()
                            .iter()
                            .map(|line| div().child(SharedString::from(line.clone()))),
                    ),
            )
            .child(
                div()
                    .py(px(10.0))
                    .flex()
                    .justify_center()
                    .gap_2()
                    .child(
                        div()
                            .id("start")
                            .cursor_pointer()
                            .bg(rgb(theme::ACCENT))
                            .text_color(rgb(theme::BG))
                            .px(px(10.0))
                            .py(px(4.0))
                            .rounded(px(4.0))
                            .text_sm()
                            .hover(|this| this.bg(rgb(theme::ACCENT_HOVER)))
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.choose_and_list(cx);
                            }))
                            .child("Select Directory and List"),
                    )
                    .child(
                        div()
                            .id("quit")
                            .cursor_pointer()
                            .border_1()
                            .border_color(rgb(theme::BORDER))
                            .text_color(rgb(theme::FG_SECONDARY))
                            .px(px(10.0))
                            .py(px(4.0))
                            .rounded(px(4.0))
                            .text_sm()
                            .hover(|this| this.border_color(rgb(theme::BORDER_HOVER)))
                            .on_click(cx.listener(|_, _, _, cx| {
                                cx.quit();
                            }))
                            .child("Quit"),
                    ),
            )
    }
}
