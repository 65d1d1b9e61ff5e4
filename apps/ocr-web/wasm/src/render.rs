//! DOM emission of OCR results.
//!
//! Row content comes from `ocr_types::rows`; this module only builds the
//! elements. Values go through `set_text_content`, never raw HTML.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use ocr_types::{
    bill_rows, document_pages, license_rows, rows::ResultRow, status_line, DocumentKind,
    DriverLicenseData, EnergyBillData, LargeDocumentData,
};

use crate::dom;

/// Deserialize the response body for `kind` and fill its results panel.
pub fn render_results(kind: DocumentKind, body: &JsValue) -> Result<(), JsValue> {
    let document = dom::document()?;
    let container = dom::element(&format!("results-content-{}", kind.slot_id()))?;
    container.set_inner_html("");

    match kind {
        DocumentKind::DriversLicense => {
            let data: DriverLicenseData = parse(body)?;
            for row in license_rows(&data) {
                container.append_child(&result_item(&document, row.label, &row.value)?.into())?;
            }
            if let Some(text) = data.raw_ocr_text() {
                container.append_child(&raw_ocr_item(&document, &text)?.into())?;
            }
            container.append_child(
                &result_item(&document, "Processing Status", status_line(data.structured))?.into(),
            )?;
        }
        DocumentKind::EnergyBill => {
            let data: EnergyBillData = parse(body)?;
            for row in bill_rows(&data) {
                container.append_child(&result_item(&document, row.label, &row.value)?.into())?;
            }
        }
        DocumentKind::LargeDocument => {
            let data: LargeDocumentData = parse(body)?;
            let total = ResultRow {
                label: "Total Pages",
                value: data.total_pages.to_string(),
            };
            container.append_child(&result_item(&document, total.label, &total.value)?.into())?;

            for page in document_pages(&data) {
                container.append_child(&page_block(&document, &page.header, &page.text)?.into())?;
            }
            if let Some(summary) = &data.summary {
                container.append_child(&summary_section(&document, summary)?.into())?;
            }
        }
    }
    Ok(())
}

fn parse<T: serde::de::DeserializeOwned>(body: &JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(body.clone())
        .map_err(|e| JsValue::from_str(&format!("Failed to parse response: {}", e)))
}

fn result_item(document: &Document, label: &str, value: &str) -> Result<Element, JsValue> {
    let item = document.create_element("div")?;
    item.set_class_name("result-item");

    let label_el = document.create_element("div")?;
    label_el.set_class_name("result-label");
    label_el.set_text_content(Some(label));

    let value_el = document.create_element("div")?;
    value_el.set_class_name("result-value");
    value_el.set_text_content(Some(value));

    item.append_child(&label_el)?;
    item.append_child(&value_el)?;
    Ok(item)
}

/// Raw OCR text in a monospace, whitespace-preserving block.
fn raw_ocr_item(document: &Document, text: &str) -> Result<Element, JsValue> {
    let item = result_item(document, "Raw OCR Text", text)?;
    if let Some(el) = item.dyn_ref::<HtmlElement>() {
        el.style().set_property("margin-top", "20px")?;
    }
    if let Some(value_el) = item.last_element_child() {
        if let Some(el) = value_el.dyn_ref::<HtmlElement>() {
            let style = el.style();
            style.set_property("white-space", "pre-wrap")?;
            style.set_property("font-family", "monospace")?;
            style.set_property("font-size", "12px")?;
        }
    }
    Ok(item)
}

fn page_block(document: &Document, header: &str, text: &str) -> Result<Element, JsValue> {
    let block = document.create_element("div")?;
    block.set_class_name("page-content");

    let header_el = document.create_element("div")?;
    header_el.set_class_name("page-header");
    header_el.set_text_content(Some(header));

    let text_el = document.create_element("div")?;
    text_el.set_class_name("page-text");
    text_el.set_text_content(Some(text));

    block.append_child(&header_el)?;
    block.append_child(&text_el)?;
    Ok(block)
}

fn summary_section(document: &Document, summary: &str) -> Result<Element, JsValue> {
    let section = document.create_element("div")?;
    section.set_class_name("summary-section");

    let heading = document.create_element("h4")?;
    heading.set_text_content(Some("Document Summary"));

    let body = document.create_element("p")?;
    body.set_text_content(Some(summary));

    section.append_child(&heading)?;
    section.append_child(&body)?;
    Ok(section)
}
