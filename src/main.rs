//! Custom Browser
//!
//! Entry point for the browser shell. Takes no arguments; exits when the
//! window is closed.

use custom_browser::{NAME, UiConfig, VERSION};
use log::{error, info};

fn main() {
    // init logging from RUST_LOG env var with info as default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("{} v{} starting", NAME, VERSION);

    if let Err(e) = custom_browser::ui::run(UiConfig::default()) {
        error!("{}", e);
        eprintln!("Failed to start browser: {}", e);
        std::process::exit(1);
    }
}
