//! Value collection and submit lifecycle of the live preview.
//!
//! ```text
//!   Editing --submit (valid)--> Submitted
//!   Editing --submit (invalid)--> Editing + per-field errors
//!   Submitted --reset--> Editing (all values blank)
//! ```

use serde::Serialize;

use crate::model::field::Field;
use crate::schema::{Schema, ValidationErrors, Values};

/// Value a checked checkbox submits. Unchecked submits an empty string.
pub const CHECKED: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PreviewState {
    Editing {
        values: Values,
        errors: ValidationErrors,
    },
    Submitted {
        values: Values,
    },
}

impl PreviewState {
    /// A fresh editing state with an empty string for every field name.
    pub fn new(fields: &[Field]) -> Self {
        PreviewState::Editing {
            values: blank_values(fields),
            errors: ValidationErrors::default(),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, PreviewState::Submitted { .. })
    }

    pub fn values(&self) -> &Values {
        match self {
            PreviewState::Editing { values, .. } | PreviewState::Submitted { values } => values,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values().get(name).map(String::as_str).unwrap_or("")
    }

    pub fn error_for(&self, name: &str) -> Option<&str> {
        match self {
            PreviewState::Editing { errors, .. } => errors.get(name),
            PreviewState::Submitted { .. } => None,
        }
    }

    pub fn has_errors(&self) -> bool {
        match self {
            PreviewState::Editing { errors, .. } => !errors.is_empty(),
            PreviewState::Submitted { .. } => false,
        }
    }

    /// Records a typed, picked or selected value. Ignored once submitted.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let PreviewState::Editing { values, .. } = self {
            values.insert(name.to_string(), value.into());
        }
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) {
        self.set_value(name, if checked { CHECKED } else { "" });
    }

    /// Re-runs the schema after an edit that followed a failed submit, so
    /// messages disappear as soon as the value is fixed.
    pub fn revalidate(&mut self, schema: &Schema) {
        if let PreviewState::Editing { values, errors } = self {
            if !errors.is_empty() {
                *errors = schema.validate(values).err().unwrap_or_default();
            }
        }
    }

    /// Aligns collected values with a changed field list: surviving names keep
    /// their value, new names start blank, removed names and their errors go.
    pub fn sync(&mut self, fields: &[Field]) {
        let (values, errors) = match self {
            PreviewState::Editing { values, errors } => (values, Some(errors)),
            PreviewState::Submitted { values } => (values, None),
        };

        let mut next = blank_values(fields);
        for (name, value) in next.iter_mut() {
            if let Some(kept) = values.remove(name) {
                *value = kept;
            }
        }
        *values = next;

        if let Some(errors) = errors {
            errors.0.retain(|name, _| values.contains_key(name));
        }
    }

    /// Validates the collected values. Moves to `Submitted` and returns `true`
    /// when every rule passes; otherwise stays editing with the violations.
    ///
    /// Returns `false` without doing anything when already submitted, so a
    /// repeated submit is never reported as a second accepted submission.
    pub fn submit(&mut self, schema: &Schema) -> bool {
        let PreviewState::Editing { values, errors } = self else {
            return false;
        };

        match schema.validate(values) {
            Ok(()) => {
                let values = std::mem::take(values);
                *self = PreviewState::Submitted { values };
                true
            }
            Err(found) => {
                *errors = found;
                false
            }
        }
    }

    /// Back to a blank editing state.
    pub fn reset(&mut self, fields: &[Field]) {
        *self = PreviewState::new(fields);
    }
}

fn blank_values(fields: &[Field]) -> Values {
    fields
        .iter()
        .map(|f| (f.name.clone(), String::new()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::{FieldChanges, FieldKind};
    use crate::model::form::Form;

    fn required_email_form() -> Form {
        let mut form = Form::new();
        let id = form.add_field(FieldKind::Email).id.clone();
        form.update_field(&id, FieldChanges::required(true));
        form
    }

    #[test]
    fn starts_blank() {
        let form = required_email_form();
        let state = PreviewState::new(form.fields());
        assert_eq!(state.value("field1"), "");
        assert!(!state.is_submitted());
    }

    #[test]
    fn invalid_submit_stays_editing() {
        let form = required_email_form();
        let schema = Schema::from_fields(form.fields());
        let mut state = PreviewState::new(form.fields());

        state.set_value("field1", "not-an-email");

        assert!(!state.submit(&schema));
        assert!(!state.is_submitted());
        assert_eq!(state.error_for("field1"), Some("Invalid email address"));
    }

    #[test]
    fn fixing_value_clears_error_on_revalidate() {
        let form = required_email_form();
        let schema = Schema::from_fields(form.fields());
        let mut state = PreviewState::new(form.fields());

        state.submit(&schema);
        assert_eq!(state.error_for("field1"), Some("Invalid email address"));

        state.set_value("field1", "a@b.com");
        state.revalidate(&schema);
        assert_eq!(state.error_for("field1"), None);
    }

    #[test]
    fn valid_submit_then_reset() {
        let form = required_email_form();
        let schema = Schema::from_fields(form.fields());
        let mut state = PreviewState::new(form.fields());

        state.set_value("field1", "a@b.com");
        assert!(state.submit(&schema));
        assert!(state.is_submitted());
        assert_eq!(state.value("field1"), "a@b.com");

        state.reset(form.fields());
        assert!(!state.is_submitted());
        assert_eq!(state.value("field1"), "");
    }

    #[test]
    fn submit_after_submitted_reports_false() {
        let form = required_email_form();
        let schema = Schema::from_fields(form.fields());
        let mut state = PreviewState::new(form.fields());

        state.set_value("field1", "a@b.com");
        assert!(state.submit(&schema));

        assert!(!state.submit(&schema));
        assert!(state.is_submitted());
        assert_eq!(state.value("field1"), "a@b.com");
    }

    #[test]
    fn checkbox_values() {
        let mut form = Form::new();
        form.add_field(FieldKind::Checkbox);
        let mut state = PreviewState::new(form.fields());

        state.set_checked("field1", true);
        assert_eq!(state.value("field1"), "true");
        state.set_checked("field1", false);
        assert_eq!(state.value("field1"), "");
    }

    #[test]
    fn sync_keeps_surviving_values() {
        let mut form = Form::new();
        form.add_field(FieldKind::Text);
        let second = form.add_field(FieldKind::Text).id.clone();
        let mut state = PreviewState::new(form.fields());
        state.set_value("field1", "kept");
        state.set_value("field2", "dropped");

        form.remove_field(&second);
        state.sync(form.fields());
        assert_eq!(state.values().len(), 1);
        assert_eq!(state.value("field1"), "kept");

        form.add_field(FieldKind::Email);
        form.add_field(FieldKind::Email);
        state.sync(form.fields());
        assert_eq!(state.value("field2"), "");
        assert_eq!(state.value("field3"), "");
    }

    #[test]
    fn sync_drops_errors_of_removed_fields() {
        let mut form = required_email_form();
        let id = form.fields()[0].id.clone();
        let mut state = PreviewState::new(form.fields());
        state.submit(&Schema::from_fields(form.fields()));
        assert!(state.has_errors());

        form.remove_field(&id);
        state.sync(form.fields());
        assert!(!state.has_errors());
    }
}
