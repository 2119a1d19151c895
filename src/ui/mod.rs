//! User interface components for the browser shell

mod app;
mod controller;

pub use app::{BrowserApp, native_options};
#[cfg(feature = "webview")]
pub use app::run;
pub use controller::{ChromeState, ShellAction, ShellController, normalize_url};

use std::path::PathBuf;

use crate::bookmarks::DEFAULT_BOOKMARKS_FILE;

/// Address loaded at startup and by the home button
pub const DEFAULT_HOME_URL: &str = "https://www.google.com";

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub app_name: String,
    pub window_x: f32,
    pub window_y: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub home_url: String,
    pub bookmarks_path: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_name: crate::NAME.to_string(),
            window_x: 100.0,
            window_y: 100.0,
            window_width: 1200.0,
            window_height: 800.0,
            home_url: DEFAULT_HOME_URL.to_string(),
            bookmarks_path: PathBuf::from(DEFAULT_BOOKMARKS_FILE),
        }
    }
}
