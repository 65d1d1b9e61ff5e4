//! Multipart submission to the OCR endpoints.
//!
//! One POST per submit: `file` for the single slots, repeated `files` for
//! document pages. Errors come back as display-ready strings; the server's
//! `detail` message wins, otherwise the kind's generic fallback.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use ocr_types::{detail_or, DocumentKind};

use crate::config::AppConfig;

/// Full URL for a kind's endpoint.
pub fn endpoint_url(base_url: &str, kind: DocumentKind) -> String {
    format!("{}{}", base_url, kind.endpoint_path())
}

/// POST the selection and return the parsed JSON body.
///
/// The error string is ready to show in the banner.
pub async fn submit(
    config: &AppConfig,
    kind: DocumentKind,
    files: &[File],
) -> Result<JsValue, String> {
    let request = build_request(config, kind, files)
        .map_err(|e| js_error_message(e, kind.fallback_error()))?;

    let window = web_sys::window().ok_or_else(|| kind.fallback_error().to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error_message(e, kind.fallback_error()))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| kind.fallback_error().to_string())?;

    if !response.ok() {
        return Err(error_message(&response, kind).await);
    }

    let json = response
        .json()
        .map_err(|e| js_error_message(e, kind.fallback_error()))?;
    JsFuture::from(json)
        .await
        .map_err(|e| js_error_message(e, kind.fallback_error()))
}

fn build_request(
    config: &AppConfig,
    kind: DocumentKind,
    files: &[File],
) -> Result<Request, JsValue> {
    let form = FormData::new()?;
    for file in files {
        form.append_with_blob_and_filename(kind.part_name(), file, &file.name())?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    Request::new_with_str_and_init(&endpoint_url(config.api_base_url(), kind), &opts)
}

/// Message for a non-OK response: the body's `detail`, or the fallback.
async fn error_message(response: &Response, kind: DocumentKind) -> String {
    let body: Option<serde_json::Value> = match response.json() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| serde_wasm_bindgen::from_value(v).ok()),
        Err(_) => None,
    };

    match body {
        Some(body) => detail_or(&body, kind.fallback_error()),
        None => kind.fallback_error().to_string(),
    }
}

/// Best-effort message for a thrown JS value (e.g. a transport error).
fn js_error_message(err: JsValue, fallback: &str) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let base = "http://localhost:8000/api/v1";
        assert_eq!(
            endpoint_url(base, DocumentKind::DriversLicense),
            "http://localhost:8000/api/v1/ocr/drivers-license"
        );
        assert_eq!(
            endpoint_url(base, DocumentKind::EnergyBill),
            "http://localhost:8000/api/v1/ocr/energy-bill"
        );
        assert_eq!(
            endpoint_url(base, DocumentKind::LargeDocument),
            "http://localhost:8000/api/v1/ocr/large-document"
        );
    }

    #[test]
    fn test_detail_beats_fallback() {
        let body = serde_json::json!({"detail": "File must be an image (JPG, PNG)."});
        assert_eq!(
            detail_or(&body, DocumentKind::DriversLicense.fallback_error()),
            "File must be an image (JPG, PNG)."
        );
    }

    #[test]
    fn test_fallback_when_no_detail() {
        let body = serde_json::json!({"status": 500});
        assert_eq!(
            detail_or(&body, DocumentKind::EnergyBill.fallback_error()),
            "Failed to process energy bill"
        );
    }
}
