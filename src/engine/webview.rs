//! Native webview engine backed by wry

use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::raw_window_handle::HasWindowHandle;
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use super::{EngineEvent, ViewBounds, WebEngine};
use crate::utils::{Result, ShellError};

/// A wry webview mounted as a child of the shell window
pub struct WryEngine {
    webview: WebView,
    /// Latest document title reported by the page
    title: Arc<Mutex<String>>,
    events: Receiver<EngineEvent>,
}

impl WryEngine {
    /// Mount a webview inside `window` and start loading `initial_url`.
    ///
    /// `on_event` runs on every queued notification so the host can wake its
    /// event loop.
    pub fn new<W, F>(window: &W, initial_url: &str, on_event: F) -> Result<Self>
    where
        W: HasWindowHandle,
        F: Fn() + Clone + Send + 'static,
    {
        let (tx, events) = channel::<EngineEvent>();
        let title = Arc::new(Mutex::new(String::new()));

        let load_tx = tx.clone();
        let load_wake = on_event.clone();
        let title_cell = Arc::clone(&title);
        let title_wake = on_event;

        let webview = WebViewBuilder::new()
            .with_url(initial_url)
            .with_bounds(to_rect(ViewBounds::default()))
            .with_on_page_load_handler(move |event, url| {
                notify(&load_tx, EngineEvent::LocationChanged(url));
                if matches!(event, PageLoadEvent::Finished) {
                    notify(&load_tx, EngineEvent::LoadFinished);
                }
                load_wake();
            })
            .with_document_title_changed_handler(move |new_title| {
                if let Ok(mut current) = title_cell.lock() {
                    current.clone_from(&new_title);
                }
                notify(&tx, EngineEvent::TitleChanged(new_title));
                title_wake();
            })
            .build_as_child(window)
            .map_err(engine_error)?;

        debug!("Webview mounted at {}", initial_url);

        Ok(Self {
            webview,
            title,
            events,
        })
    }

    fn run_script(&self, script: &str) -> Result<()> {
        self.webview.evaluate_script(script).map_err(engine_error)
    }
}

impl WebEngine for WryEngine {
    fn load_url(&mut self, url: &str) -> Result<()> {
        self.webview.load_url(url).map_err(engine_error)
    }

    fn go_back(&mut self) -> Result<()> {
        self.run_script("history.back()")
    }

    fn go_forward(&mut self) -> Result<()> {
        self.run_script("history.forward()")
    }

    fn reload(&mut self) -> Result<()> {
        self.webview.reload().map_err(engine_error)
    }

    fn current_url(&self) -> String {
        self.webview.url().unwrap_or_else(|e| {
            warn!("Could not read webview URL: {}", e);
            String::new()
        })
    }

    fn page_title(&self) -> String {
        self.title.lock().map(|t| t.clone()).unwrap_or_default()
    }

    fn poll_event(&mut self) -> Option<EngineEvent> {
        self.events.try_recv().ok()
    }

    fn set_bounds(&mut self, bounds: ViewBounds) {
        if let Err(e) = self.webview.set_bounds(to_rect(bounds)) {
            warn!("Could not resize webview: {}", e);
        }
    }
}

fn notify(tx: &Sender<EngineEvent>, event: EngineEvent) {
    // The receiver only goes away when the shell is shutting down.
    let _ = tx.send(event);
}

fn to_rect(bounds: ViewBounds) -> Rect {
    Rect {
        position: LogicalPosition::new(bounds.x, bounds.y).into(),
        size: LogicalSize::new(bounds.width, bounds.height).into(),
    }
}

fn engine_error(err: wry::Error) -> ShellError {
    ShellError::Engine(err.to_string())
}
