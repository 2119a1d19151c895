//! Shell controller: toolbar actions in, engine calls and bookmark updates out

use log::{debug, error, info, warn};

use super::UiConfig;
use crate::bookmarks::{Bookmark, BookmarkStore};
use crate::engine::{EngineEvent, WebEngine};
use crate::utils::{Result, ShellError};

/// Chrome state mirrored from the engine and shown by the view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChromeState {
    /// URL bar contents. Editable by the user, overwritten on every location change.
    pub url_text: String,
    /// Text for the native window title
    pub window_title: String,
    /// Last failure worth showing to the user
    pub status: Option<String>,
}

/// User action raised by the toolbar or the bookmark bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Back,
    Forward,
    Reload,
    Home,
    /// Navigate to raw URL bar input
    Navigate(String),
    AddBookmark,
    /// Bookmark button clicked, by toolbar position
    OpenBookmark(usize),
    /// "Remove Bookmark" chosen from a bookmark's context menu
    RemoveBookmark(usize),
}

/// Prefix `http://` unless the input already names the http or https scheme
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    }
}

/// Binds shell actions to the embedded engine and the bookmark store
pub struct ShellController<E: WebEngine> {
    engine: E,
    bookmarks: BookmarkStore,
    chrome: ChromeState,
    home_url: String,
    app_name: String,
}

impl<E: WebEngine> ShellController<E> {
    /// Create a controller around an engine already pointed at the home page
    /// and a store that has already been loaded.
    pub fn new(engine: E, bookmarks: BookmarkStore, config: &UiConfig) -> Self {
        Self {
            engine,
            bookmarks,
            chrome: ChromeState {
                window_title: config.app_name.clone(),
                ..ChromeState::default()
            },
            home_url: config.home_url.clone(),
            app_name: config.app_name.clone(),
        }
    }

    /// Route an action to its handler. Storage failures end up in the status line.
    pub fn dispatch(&mut self, action: ShellAction) {
        debug!("Dispatching {:?}", action);
        let outcome = match action {
            ShellAction::Back => {
                self.go_back();
                Ok(())
            }
            ShellAction::Forward => {
                self.go_forward();
                Ok(())
            }
            ShellAction::Reload => {
                self.reload();
                Ok(())
            }
            ShellAction::Home => {
                self.navigate_home();
                Ok(())
            }
            ShellAction::Navigate(raw) => {
                self.navigate_to_url(&raw);
                Ok(())
            }
            ShellAction::OpenBookmark(position) => {
                self.open_bookmark(position);
                Ok(())
            }
            ShellAction::AddBookmark => self.add_bookmark(),
            ShellAction::RemoveBookmark(position) => self.remove_bookmark(position),
        };

        if let Err(e) = outcome {
            self.record_failure(e);
        }
    }

    pub fn go_back(&mut self) {
        let result = self.engine.go_back();
        log_engine_failure("go back", result);
    }

    pub fn go_forward(&mut self) {
        let result = self.engine.go_forward();
        log_engine_failure("go forward", result);
    }

    pub fn reload(&mut self) {
        let result = self.engine.reload();
        log_engine_failure("reload", result);
    }

    pub fn navigate_home(&mut self) {
        let home = self.home_url.clone();
        self.load(&home);
    }

    /// Navigate to URL bar input, adding `http://` when no scheme is given
    pub fn navigate_to_url(&mut self, raw: &str) {
        let url = normalize_url(raw);
        self.load(&url);
    }

    /// Navigate to the bookmark currently at `position`.
    ///
    /// The bookmark is looked up at click time, so a button always opens the
    /// entry it is drawn for, whether it was loaded at startup or added later.
    pub fn open_bookmark(&mut self, position: usize) {
        let Some(url) = self.bookmarks.get(position).map(|b| b.url.clone()) else {
            debug!("No bookmark at position {}", position);
            return;
        };
        self.load(&url);
    }

    /// Bookmark the current page at the end of the bookmark bar and save
    pub fn add_bookmark(&mut self) -> Result<()> {
        let url = self.engine.current_url();
        let title = self.engine.page_title();
        info!("Adding bookmark {:?} -> {}", title, url);
        self.bookmarks.add(title, url);
        self.bookmarks.save()
    }

    /// Remove the bookmark at `position` from the bar and save
    pub fn remove_bookmark(&mut self, position: usize) -> Result<()> {
        match self.bookmarks.remove(position) {
            Some(removed) => {
                info!("Removed bookmark {:?}", removed.title);
                self.bookmarks.save()
            }
            None => {
                debug!("No bookmark at position {} to remove", position);
                Ok(())
            }
        }
    }

    /// Mirror a location change into the URL bar
    pub fn on_url_changed(&mut self, url: &str) {
        self.chrome.url_text = url.to_string();
    }

    /// Refresh the window title once a page is done loading
    pub fn on_load_finished(&mut self) {
        let title = self.engine.page_title();
        self.set_page_title(&title);
    }

    pub fn on_title_changed(&mut self, title: &str) {
        self.set_page_title(title);
    }

    /// Drain engine notifications into the chrome state
    pub fn pump_engine_events(&mut self) {
        while let Some(event) = self.engine.poll_event() {
            match event {
                EngineEvent::LocationChanged(url) => self.on_url_changed(&url),
                EngineEvent::LoadFinished => self.on_load_finished(),
                EngineEvent::TitleChanged(title) => self.on_title_changed(&title),
            }
        }
    }

    pub fn chrome(&self) -> &ChromeState {
        &self.chrome
    }

    /// URL bar text for in-place editing
    pub fn url_text_mut(&mut self) -> &mut String {
        &mut self.chrome.url_text
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.bookmarks()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn clear_status(&mut self) {
        self.chrome.status = None;
    }

    fn load(&mut self, url: &str) {
        debug!("Navigating to {}", url);
        let result = self.engine.load_url(url);
        log_engine_failure("navigate", result);
    }

    fn set_page_title(&mut self, title: &str) {
        self.chrome.window_title = format!("{} - {}", title, self.app_name);
    }

    fn record_failure(&mut self, err: ShellError) {
        error!("Bookmark update failed: {}", err);
        self.chrome.status = Some(format!("Could not save bookmarks: {}", err));
    }
}

fn log_engine_failure(what: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!("Engine could not {}: {}", what, e);
    }
}
