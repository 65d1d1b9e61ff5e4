//! Error banner and loading overlay.
//!
//! Both error paths (validation and server/network failures) surface here:
//! a dismissible banner that hides itself after the configured delay.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;

/// Show `message` in the error banner and schedule the auto-hide.
pub fn show_error(message: &str, auto_hide_ms: i32) -> Result<(), JsValue> {
    web_sys::console::warn_1(&JsValue::from_str(message));

    dom::element("error-text")?.set_text_content(Some(message));
    dom::set_display("error-message", "flex")?;
    schedule_close(auto_hide_ms)
}

/// Hide the banner immediately (also the dismiss button handler).
pub fn close_error() -> Result<(), JsValue> {
    dom::hide("error-message")
}

/// Toggle the full-page loading overlay.
pub fn show_loading(visible: bool) -> Result<(), JsValue> {
    dom::set_display("loading-overlay", if visible { "flex" } else { "none" })
}

fn schedule_close(delay_ms: i32) -> Result<(), JsValue> {
    let callback = Closure::once(Box::new(move || {
        let _ = close_error();
    }) as Box<dyn FnOnce()>);

    dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    callback.forget();
    Ok(())
}
