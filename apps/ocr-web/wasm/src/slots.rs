//! Per-slot selection state.
//!
//! Each upload slot holds the files picked for it plus a busy flag that
//! keeps submissions to one outstanding request per slot. The state is
//! generic over the file handle type so the transitions are testable
//! without a browser.

use ocr_types::DocumentKind;

/// State of one upload slot.
#[derive(Debug, Clone)]
pub struct SlotState<T> {
    files: Vec<T>,
    multiple: bool,
    busy: bool,
}

impl<T> SlotState<T> {
    pub fn new(multiple: bool) -> Self {
        Self {
            files: Vec::new(),
            multiple,
            busy: false,
        }
    }

    /// Replace the selection. Single-file slots keep only the first file.
    pub fn select(&mut self, mut files: Vec<T>) {
        if !self.multiple {
            files.truncate(1);
        }
        self.files = files;
    }

    /// Return the slot to its empty initial state.
    pub fn clear(&mut self) {
        self.files.clear();
        self.busy = false;
    }

    pub fn files(&self) -> &[T] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}

/// The three slots of the page.
#[derive(Debug, Clone)]
pub struct Slots<T> {
    license: SlotState<T>,
    bill: SlotState<T>,
    pages: SlotState<T>,
}

impl<T> Slots<T> {
    pub fn new() -> Self {
        Self {
            license: SlotState::new(DocumentKind::DriversLicense.accepts_multiple()),
            bill: SlotState::new(DocumentKind::EnergyBill.accepts_multiple()),
            pages: SlotState::new(DocumentKind::LargeDocument.accepts_multiple()),
        }
    }

    pub fn get(&self, kind: DocumentKind) -> &SlotState<T> {
        match kind {
            DocumentKind::DriversLicense => &self.license,
            DocumentKind::EnergyBill => &self.bill,
            DocumentKind::LargeDocument => &self.pages,
        }
    }

    pub fn get_mut(&mut self, kind: DocumentKind) -> &mut SlotState<T> {
        match kind {
            DocumentKind::DriversLicense => &mut self.license,
            DocumentKind::EnergyBill => &mut self.bill,
            DocumentKind::LargeDocument => &mut self.pages,
        }
    }
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_clear_roundtrip() {
        let mut slots: Slots<String> = Slots::new();
        let slot = slots.get_mut(DocumentKind::DriversLicense);

        assert!(slot.is_empty());
        slot.select(vec!["license.jpg".to_string()]);
        assert_eq!(slot.file_count(), 1);

        slot.clear();
        assert!(slot.is_empty());
        assert!(!slot.is_busy());
        assert_eq!(slot.file_count(), 0);
    }

    #[test]
    fn test_single_slot_keeps_first_file_only() {
        let mut slot: SlotState<&str> = SlotState::new(false);
        slot.select(vec!["a.jpg", "b.jpg"]);
        assert_eq!(slot.files(), &["a.jpg"]);
    }

    #[test]
    fn test_multi_slot_keeps_order() {
        let mut slot: SlotState<&str> = SlotState::new(true);
        slot.select(vec!["p1.jpg", "p2.jpg", "p3.jpg"]);
        assert_eq!(slot.files(), &["p1.jpg", "p2.jpg", "p3.jpg"]);
    }

    #[test]
    fn test_reselect_replaces_previous_selection() {
        let mut slot: SlotState<&str> = SlotState::new(true);
        slot.select(vec!["old1", "old2"]);
        slot.select(vec!["new"]);
        assert_eq!(slot.files(), &["new"]);
    }

    #[test]
    fn test_busy_flag() {
        let mut slot: SlotState<&str> = SlotState::new(false);
        assert!(!slot.is_busy());
        slot.set_busy(true);
        assert!(slot.is_busy());
        // Clearing the slot also releases the flag.
        slot.clear();
        assert!(!slot.is_busy());
    }

    #[test]
    fn test_slots_are_independent() {
        let mut slots: Slots<&str> = Slots::new();
        slots.get_mut(DocumentKind::EnergyBill).select(vec!["b.pdf"]);
        assert!(slots.get(DocumentKind::DriversLicense).is_empty());
        assert!(!slots.get(DocumentKind::EnergyBill).is_empty());
        assert!(slots.get(DocumentKind::LargeDocument).is_empty());
    }
}
