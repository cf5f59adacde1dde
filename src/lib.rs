pub mod core;
pub mod models;
pub mod services;

#[cfg(feature = "gui")]
pub mod ui;
