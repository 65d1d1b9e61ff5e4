//! Response schemas for the three OCR endpoints.
//!
//! The backend returns loosely-typed JSON bags; every structured field is
//! optional and unknown keys are tolerated. The renderers substitute a
//! placeholder for whatever is absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /ocr/drivers-license` response (Brazilian CNH).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverLicenseData {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub birth_date: Option<String>,
    pub emission_date: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    /// Raw model output; the `<OCR>` key carries the recognized text.
    pub raw_ocr: Option<Value>,
    /// Whether the fields were structured by the LLM pass.
    pub structured: bool,
}

impl DriverLicenseData {
    /// Raw OCR text if present: the `<OCR>` key, or the whole bag as JSON.
    pub fn raw_ocr_text(&self) -> Option<String> {
        let raw = self.raw_ocr.as_ref()?;
        if let Some(text) = raw.get("<OCR>").and_then(Value::as_str) {
            return Some(text.to_string());
        }
        serde_json::to_string_pretty(raw).ok()
    }
}

/// `POST /ocr/energy-bill` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyBillData {
    pub customer_name: Option<String>,
    pub customer_id: Option<String>,
    pub address: Option<String>,
    pub reference_month: Option<String>,
    pub due_date: Option<String>,
    pub total_amount: Option<f64>,
    pub consumption_kwh: Option<f64>,
    pub installation_number: Option<String>,
    pub raw_ocr: Option<Value>,
    pub structured: bool,
}

/// `POST /ocr/large-document` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LargeDocumentData {
    pub total_pages: u64,
    /// One loosely-typed entry per page.
    pub content: Vec<Value>,
    pub summary: Option<String>,
    pub raw_ocr: Option<Vec<Value>>,
    pub structured: bool,
}

/// Pull the `detail` message out of an error body, or fall back.
pub fn detail_or(body: &Value, fallback: &str) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
