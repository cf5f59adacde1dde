pub mod display_log;
pub mod entry;
