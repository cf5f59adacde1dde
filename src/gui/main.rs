fn main() {
    relister::ui::ListerApp::run();
}
