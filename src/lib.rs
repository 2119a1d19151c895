//! # Custom Browser - a minimal desktop browser shell
//!
//! A single window hosting an embedded web engine, with navigation controls,
//! a URL bar and a bookmark toolbar persisted as JSON.
//!
//! ## Architecture
//!
//! - **bookmarks**: ordered bookmark list and its JSON file
//! - **engine**: the embedded engine surface, plus a wry-backed webview
//!   (feature `webview`)
//! - **ui**: shell controller and the eframe/egui window around the engine
//! - **utils**: shared error types

pub mod bookmarks;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export main types for convenience
pub use bookmarks::{Bookmark, BookmarkList, BookmarkStore};
pub use engine::{EngineEvent, WebEngine};
pub use ui::{ShellAction, ShellController, UiConfig};
pub use utils::error::{Result, ShellError};

/// Browser version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Custom Browser";
