//! Embedded web engine surface
//!
//! The shell never renders pages itself. Everything it needs from the engine
//! goes through [`WebEngine`]:
//! 1. Outbound requests: load a URL, back, forward, reload
//! 2. State queries: current URL and page title
//! 3. Inbound notifications, queued by the engine and drained with
//!    [`WebEngine::poll_event`]

#[cfg(feature = "webview")]
mod webview;

#[cfg(feature = "webview")]
pub use webview::WryEngine;

use crate::utils::Result;

/// Notification produced by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The active location changed (navigation, redirect or script)
    LocationChanged(String),
    /// A page finished loading, successfully or not
    LoadFinished,
    /// The document title changed
    TitleChanged(String),
}

/// Area of the window given to the engine, in logical points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Operations the shell consumes from an embedded web engine
#[cfg_attr(test, mockall::automock)]
pub trait WebEngine {
    /// Set the target location
    fn load_url(&mut self, url: &str) -> Result<()>;

    fn go_back(&mut self) -> Result<()>;

    fn go_forward(&mut self) -> Result<()>;

    fn reload(&mut self) -> Result<()>;

    /// Location currently shown
    fn current_url(&self) -> String;

    /// Title of the current page, empty if it has none
    fn page_title(&self) -> String;

    /// Next queued notification, if any
    fn poll_event(&mut self) -> Option<EngineEvent>;

    /// Move or resize the engine's view. Engines without a native view ignore this.
    fn set_bounds(&mut self, _bounds: ViewBounds) {}
}

impl<E: WebEngine + ?Sized> WebEngine for Box<E> {
    fn load_url(&mut self, url: &str) -> Result<()> {
        (**self).load_url(url)
    }

    fn go_back(&mut self) -> Result<()> {
        (**self).go_back()
    }

    fn go_forward(&mut self) -> Result<()> {
        (**self).go_forward()
    }

    fn reload(&mut self) -> Result<()> {
        (**self).reload()
    }

    fn current_url(&self) -> String {
        (**self).current_url()
    }

    fn page_title(&self) -> String {
        (**self).page_title()
    }

    fn poll_event(&mut self) -> Option<EngineEvent> {
        (**self).poll_event()
    }

    fn set_bounds(&mut self, bounds: ViewBounds) {
        (**self).set_bounds(bounds)
    }
}
