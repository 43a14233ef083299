/// Instagram Comment Scraper - browser front end for the scraping backend
/// Built with Rust + WASM + Yew

mod comment_data;
mod config;
mod controller;
mod csv_export;
mod error;
mod scrape;
mod shortcode;
mod status;
pub mod ui;

pub use comment_data::{CommentRecord, ScrapeResult, SentimentCounts};
pub use config::AppConfig;
pub use controller::{Controller, Effect, Msg};
pub use csv_export::{CsvExport, comments_to_csv, export_filename};
pub use error::AppError;
pub use scrape::{BackendReply, FetchTransport, ScrapeRequest, ScrapeTransport, interpret_reply, scrape_comments};
pub use shortcode::Shortcode;
pub use status::{Status, StatusView};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the shortcode extractor for JavaScript access
#[wasm_bindgen]
pub fn extract_shortcode(url: &str) -> Option<String> {
    shortcode::extract_shortcode(url).map(|s| s.as_str().to_string())
}

// Start the Yew app; `config` may be undefined to use the defaults
#[wasm_bindgen]
pub fn start_app(config: JsValue) -> Result<(), JsValue> {
    let config = AppConfig::from_js(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("Starting scraper client against {}", config.backend_url);
    yew::Renderer::<ui::App>::with_props(ui::AppProps { config }).render();
    Ok(())
}
