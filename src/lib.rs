// src/lib.rs

pub mod backend;
pub mod frontend;
pub mod structs;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used items for convenience
pub use backend::TagList;
pub use frontend::Frontend;
pub use structs::*;
