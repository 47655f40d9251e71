//! Catalogue of field kinds offered to the author.
//!
//! The palette performs no mutation itself: selecting an entry hands its
//! `kind` to the builder shell, which appends the field.

use serde::Serialize;

use crate::model::field::FieldKind;

/// One selectable palette action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub kind: FieldKind,
    /// Button caption.
    pub label: &'static str,
    /// Material icon ligature shown next to the caption.
    pub icon: &'static str,
}

impl PaletteEntry {
    pub fn for_kind(kind: FieldKind) -> Self {
        let (label, icon) = match kind {
            FieldKind::Text => ("Text", "text_fields"),
            FieldKind::Email => ("Email", "mail"),
            FieldKind::Checkbox => ("Checkbox", "check_box"),
            FieldKind::Radio => ("Radio Group", "radio_button_checked"),
            FieldKind::Select => ("Dropdown", "arrow_drop_down_circle"),
            FieldKind::Textarea => ("Textarea", "notes"),
            FieldKind::File => ("File", "attach_file"),
        };
        Self { kind, label, icon }
    }
}

/// Every palette entry, one per kind, in display order.
pub fn entries() -> Vec<PaletteEntry> {
    FieldKind::ALL
        .into_iter()
        .map(PaletteEntry::for_kind)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_kind_in_order() {
        let entries = entries();
        let kinds: Vec<_> = entries.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, FieldKind::ALL);

        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["Text", "Email", "Checkbox", "Radio Group", "Dropdown", "Textarea", "File"]
        );
    }
}
