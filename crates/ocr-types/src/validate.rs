//! Client-side validation of a file selection.
//!
//! Runs against file metadata only, before anything is read or uploaded.
//! A selection is rejected as a whole on the first violation.

use thiserror::Error;

use crate::DocumentKind;

/// MIME types accepted by the image slots (license, document pages).
pub const ACCEPTED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// MIME types accepted by the energy bill slot (images plus PDF).
pub const ACCEPTED_BILL_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "application/pdf",
];

/// Allow-list for a given slot.
pub fn accepted_types(kind: DocumentKind) -> &'static [&'static str] {
    match kind {
        DocumentKind::EnergyBill => ACCEPTED_BILL_TYPES,
        _ => ACCEPTED_IMAGE_TYPES,
    }
}

/// Metadata of a selected file, as reported by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// Declared MIME type (`File.type`), may be empty.
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

/// Static upload limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadLimits {
    /// Per-file byte ceiling.
    pub max_file_size: u64,
    /// Page cap for the multi-page slot.
    pub max_pages: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100 MB
            max_pages: 100,
        }
    }
}

impl UploadLimits {
    /// Size ceiling in whole megabytes, as shown to the user.
    pub fn max_size_mb(&self) -> u64 {
        self.max_file_size / (1024 * 1024)
    }
}

/// A rejected selection. `Display` carries the user-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please select a file first.")]
    EmptySelection,

    #[error("Invalid file type: {name}. Please upload an image file.")]
    NotAnImage { name: String },

    #[error("Invalid file type: {name}. Please upload an image or PDF file.")]
    NotAnImageOrPdf { name: String },

    #[error("File too large: {name}. Maximum size is {max_mb}MB.")]
    TooLarge { name: String, max_mb: u64 },

    #[error("Too many pages. Maximum: {max} pages.")]
    TooManyPages { max: usize },
}

/// Validate a whole selection for a slot. The first violation rejects the
/// batch; nothing is partially accepted.
pub fn validate_selection(
    files: &[FileMeta],
    kind: DocumentKind,
    limits: &UploadLimits,
) -> Result<(), SelectionError> {
    if files.is_empty() {
        return Err(SelectionError::EmptySelection);
    }

    if kind.accepts_multiple() && files.len() > limits.max_pages {
        return Err(SelectionError::TooManyPages {
            max: limits.max_pages,
        });
    }

    let allowed = accepted_types(kind);
    for file in files {
        if !allowed.contains(&file.mime.as_str()) {
            let name = file.name.clone();
            return Err(match kind {
                DocumentKind::EnergyBill => SelectionError::NotAnImageOrPdf { name },
                _ => SelectionError::NotAnImage { name },
            });
        }

        if file.size > limits.max_file_size {
            return Err(SelectionError::TooLarge {
                name: file.name.clone(),
                max_mb: limits.max_size_mb(),
            });
        }
    }

    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn mime_not_in_any_list() -> impl Strategy<Value = String> {
        "[a-z]{2,10}/[a-z0-9.-]{2,15}".prop_filter("must be disallowed", |m| {
            !ACCEPTED_BILL_TYPES.contains(&m.as_str())
        })
    }

    proptest! {
        /// Any MIME type outside the allow-list is rejected for every slot.
        #[test]
        fn disallowed_mime_always_rejected(
            mime in mime_not_in_any_list(),
            name in "[a-zA-Z0-9_.-]{1,20}",
        ) {
            let file = FileMeta::new(name, mime, 10);
            for kind in DocumentKind::ALL {
                prop_assert!(
                    validate_selection(&[file.clone()], kind, &UploadLimits::default()).is_err()
                );
            }
        }

        /// Allowed type within the ceiling is always accepted for image slots.
        #[test]
        fn allowed_image_within_ceiling_accepted(
            mime in prop_oneof!["image/jpeg", "image/jpg", "image/png", "image/webp"],
            size in 0u64..=100 * 1024 * 1024,
        ) {
            let file = FileMeta::new("f", mime, size);
            for kind in DocumentKind::ALL {
                prop_assert_eq!(
                    validate_selection(&[file.clone()], kind, &UploadLimits::default()),
                    Ok(())
                );
            }
        }

        /// The rejection message for an oversized file names the file.
        #[test]
        fn oversize_message_names_file(name in "[a-zA-Z0-9_.-]{1,20}") {
            let limits = UploadLimits::default();
            let file = FileMeta::new(name.clone(), "image/png", limits.max_file_size + 1);
            let err = validate_selection(&[file], DocumentKind::DriversLicense, &limits)
                .unwrap_err();
            prop_assert!(err.to_string().contains(&name));
        }
    }
}
