//! Browser UI for the document OCR intake page.
//!
//! Three upload slots (driver's license, energy bill, multi-page document):
//! files arrive by click or drag-drop, are validated client-side, previewed,
//! POSTed as multipart form data, and the JSON result is rendered into the
//! matching panel. The page calls [`init_app`] once after loading the module.

use wasm_bindgen::prelude::*;

// Export modules
pub mod api;
pub mod app;
pub mod banner;
pub mod config;
pub mod dom;
pub mod preview;
pub mod render;
pub mod slots;

// Re-export commonly used items
pub use app::App;
pub use config::AppConfig;
pub use slots::{SlotState, Slots};

/// Wire tabs, upload areas, and buttons. Call once on page load.
///
/// # Arguments
/// * `base_url` - Optional API base URL; defaults to the local backend.
#[wasm_bindgen(js_name = initApp)]
pub fn init_app(base_url: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = match base_url.as_deref() {
        Some(url) => AppConfig::with_base_url(url),
        None => AppConfig::default(),
    };
    app::App::bootstrap(config)?;
    Ok(())
}

/// Dismiss the error banner (the banner's close button handler).
#[wasm_bindgen(js_name = closeError)]
pub fn close_error() -> Result<(), JsValue> {
    banner::close_error()
}
