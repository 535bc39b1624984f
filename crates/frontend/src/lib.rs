//! Bookcase book browser - Yew WASM frontend
//!
//! Attaches to the server-rendered homepage: renders book cards fetched
//! from the listing endpoints, filters them by genre, and drives the
//! profile dropdown.

mod app;
mod components;

pub mod api;
pub mod config;
pub mod page;
pub mod state;

pub use app::{App, AppProps, Route};
pub use config::{ApiConfig, AppConfig, PageSelectors};

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

use crate::page::PageMounts;

/// WASM entry point. Starts the browser once the DOM is ready.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let document = match page::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("Cannot start book browser: {}", e);
            return;
        }
    };

    let config = AppConfig::default();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| start(config)).forget();
    } else {
        start(config);
    }
}

fn start(config: AppConfig) {
    if let Err(e) = mount(config) {
        log::error!("Cannot start book browser: {}", e);
    }
}

/// Discover the page and mount the app into a fresh root element.
fn mount(config: AppConfig) -> page::Result<()> {
    let document = page::document()?;
    let mounts = PageMounts::discover(&document, &config.selectors)?;
    let root = page::create_app_root(&document)?;

    log::info!(
        "Book browser attached ({} genre buttons)",
        mounts.genres.as_ref().map_or(0, |g| g.elements.len())
    );
    yew::Renderer::<App>::with_root_and_props(root, AppProps { config, mounts }).render();

    Ok(())
}
