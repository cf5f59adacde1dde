#![cfg(feature = "gui")]

use rust_embed::RustEmbed;

/// Assets served to gpui from the embedded `assets/` folder.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

impl gpui::AssetSource for Assets {
    fn load(&self, path: &str) -> gpui::Result<Option<std::borrow::Cow<'static, [u8]>>> {
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!("no embedded asset at \"{}\"", path))
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<gpui::SharedString>> {
        Ok(Self::iter()
            .filter(|p| p.starts_with(path))
            .map(|p| gpui::SharedString::from(p.to_string()))
            .collect())
    }
}
