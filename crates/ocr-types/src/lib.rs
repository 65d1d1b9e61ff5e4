//! Shared domain logic for the OCR intake UI.
//!
//! Everything here is independent of the DOM so it can be tested natively:
//! document kinds and their endpoint contract, the API response schemas,
//! client-side file validation, and the pt-BR display formatters.

pub mod format;
pub mod kind;
pub mod response;
pub mod rows;
pub mod validate;

pub use format::PLACEHOLDER;
pub use kind::DocumentKind;
pub use response::{detail_or, DriverLicenseData, EnergyBillData, LargeDocumentData};
pub use rows::{bill_rows, document_pages, license_rows, status_line, PageBlock, ResultRow};
pub use validate::{accepted_types, validate_selection, FileMeta, SelectionError, UploadLimits};
