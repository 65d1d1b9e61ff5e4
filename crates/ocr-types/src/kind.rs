use serde::{Deserialize, Serialize};

/// The three kinds of document the intake page accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    DriversLicense,
    EnergyBill,
    LargeDocument,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::DriversLicense,
        DocumentKind::EnergyBill,
        DocumentKind::LargeDocument,
    ];

    /// Suffix used by the page's element ids (`upload-area-dl`, `results-eb`, ...).
    pub fn slot_id(&self) -> &'static str {
        match self {
            DocumentKind::DriversLicense => "dl",
            DocumentKind::EnergyBill => "eb",
            DocumentKind::LargeDocument => "ld",
        }
    }

    /// Parse a slot suffix back into a kind.
    pub fn from_slot_id(s: &str) -> Option<Self> {
        match s {
            "dl" => Some(DocumentKind::DriversLicense),
            "eb" => Some(DocumentKind::EnergyBill),
            "ld" => Some(DocumentKind::LargeDocument),
            _ => None,
        }
    }

    /// API path relative to the configured base URL.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            DocumentKind::DriversLicense => "/ocr/drivers-license",
            DocumentKind::EnergyBill => "/ocr/energy-bill",
            DocumentKind::LargeDocument => "/ocr/large-document",
        }
    }

    /// Whether the slot takes an ordered list of pages rather than one file.
    pub fn accepts_multiple(&self) -> bool {
        matches!(self, DocumentKind::LargeDocument)
    }

    /// Multipart part name expected by the endpoint.
    pub fn part_name(&self) -> &'static str {
        match self {
            DocumentKind::LargeDocument => "files",
            _ => "file",
        }
    }

    /// Generic message when the server gives no usable `detail`.
    pub fn fallback_error(&self) -> &'static str {
        match self {
            DocumentKind::DriversLicense => "Failed to process driver's license",
            DocumentKind::EnergyBill => "Failed to process energy bill",
            DocumentKind::LargeDocument => "Failed to process large document",
        }
    }
}
