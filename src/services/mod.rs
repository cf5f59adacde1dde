pub mod fs;
pub mod listing;
