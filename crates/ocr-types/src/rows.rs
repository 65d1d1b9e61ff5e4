//! Pure construction of the labeled result rows each renderer displays.
//!
//! The WASM layer only turns these into DOM nodes; everything about labels,
//! placeholders, and formatting is decided (and tested) here.

use crate::format::{self, PLACEHOLDER};
use crate::response::{DriverLicenseData, EnergyBillData, LargeDocumentData};

/// One labeled field in a results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
}

fn row(label: &'static str, value: Option<String>) -> ResultRow {
    ResultRow {
        label,
        value: value.unwrap_or_else(|| PLACEHOLDER.to_string()),
    }
}

/// Rows for the driver's license panel.
pub fn license_rows(data: &DriverLicenseData) -> Vec<ResultRow> {
    vec![
        row("Name", data.name.clone()),
        row("CPF", data.cpf.as_deref().map(format::format_cpf)),
        row("Birth Date", data.birth_date.as_deref().map(format::format_date)),
        row(
            "Emission Date",
            data.emission_date.as_deref().map(format::format_date),
        ),
        row("Father Name", data.father_name.clone()),
        row("Mother Name", data.mother_name.clone()),
    ]
}

/// Rows for the energy bill panel.
pub fn bill_rows(data: &EnergyBillData) -> Vec<ResultRow> {
    vec![
        row("Customer Name", data.customer_name.clone()),
        row("Customer ID", data.customer_id.clone()),
        row("Address", data.address.clone()),
        row("Reference Month", data.reference_month.clone()),
        row("Due Date", data.due_date.as_deref().map(format::format_date)),
        row("Total Amount", data.total_amount.map(format::format_currency)),
        row(
            "Consumption (kWh)",
            data.consumption_kwh.map(format::format_kwh),
        ),
        row("Installation Number", data.installation_number.clone()),
    ]
}

/// One rendered page of a large document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBlock {
    pub header: String,
    pub text: String,
}

/// Page blocks for the large document panel, in upload order.
pub fn document_pages(data: &LargeDocumentData) -> Vec<PageBlock> {
    data.content
        .iter()
        .enumerate()
        .map(|(index, page)| PageBlock {
            header: format!("Page {}", index + 1),
            text: format::page_text(page),
        })
        .collect()
}

/// Processing status line driven by the `structured` flag.
pub fn status_line(structured: bool) -> &'static str {
    if structured {
        "Structured by LLM"
    } else {
        "Mock data (JSON parser not yet implemented)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_license_rows_full() {
        let data = DriverLicenseData {
            name: Some("MARIA".into()),
            cpf: Some("12345678909".into()),
            birth_date: Some("1990-01-15".into()),
            emission_date: Some("2020-06-01".into()),
            father_name: Some("JOSE".into()),
            mother_name: Some("ANA".into()),
            ..Default::default()
        };
        let rows = license_rows(&data);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].label, "Name");
        assert_eq!(rows[0].value, "MARIA");
        assert_eq!(rows[1].value, "123.456.789-09");
        assert_eq!(rows[2].value, "15/01/1990");
        assert_eq!(rows[3].value, "01/06/2020");
    }

    #[test]
    fn test_license_rows_all_missing() {
        let rows = license_rows(&DriverLicenseData::default());
        assert_eq!(rows.len(), 6);
        for r in rows {
            assert_eq!(r.value, PLACEHOLDER, "label {}", r.label);
        }
    }

    #[test]
    fn test_bill_rows_formatting() {
        let data = EnergyBillData {
            customer_name: Some("Joao".into()),
            due_date: Some("2024-04-10".into()),
            total_amount: Some(1234.5),
            consumption_kwh: Some(350.5),
            ..Default::default()
        };
        let rows = bill_rows(&data);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[4].label, "Due Date");
        assert_eq!(rows[4].value, "10/04/2024");
        assert_eq!(rows[5].value, "R$ 1.234,50");
        assert_eq!(rows[6].value, "350.5 kWh");
        // Missing fields fall back to the placeholder.
        assert_eq!(rows[1].value, PLACEHOLDER);
        assert_eq!(rows[7].value, PLACEHOLDER);
    }

    #[test]
    fn test_bill_rows_all_missing() {
        for r in bill_rows(&EnergyBillData::default()) {
            assert_eq!(r.value, PLACEHOLDER, "label {}", r.label);
        }
    }

    #[test]
    fn test_document_pages() {
        let data = LargeDocumentData {
            total_pages: 2,
            content: vec![json!("first"), json!({"text": "second"})],
            ..Default::default()
        };
        let pages = document_pages(&data);
        assert_eq!(
            pages,
            vec![
                PageBlock {
                    header: "Page 1".into(),
                    text: "first".into()
                },
                PageBlock {
                    header: "Page 2".into(),
                    text: "second".into()
                },
            ]
        );
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(true), "Structured by LLM");
        assert_eq!(
            status_line(false),
            "Mock data (JSON parser not yet implemented)"
        );
    }
}
