//! The form under construction and the only place its field list is mutated.
//!
//! The builder shell owns exactly one [`Form`]. Editor, palette and preview
//! read it through props and ask the shell to run one of the operations below;
//! none of them keeps its own copy of the field list.

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::model::field::{Field, FieldChanges, FieldKind};

/// Title a freshly mounted builder starts with.
pub const DEFAULT_TITLE: &str = "Untitled Form";

/// A title plus an ordered field sequence. Order is display and submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    title: String,
    fields: Vec<Field>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Appends a new field of `kind` with builder defaults.
    ///
    /// The default name is `field{len + 1}`. It is derived from the current
    /// length, not a running counter, so after a removal it may repeat the
    /// name of a field that is still present.
    pub fn add_field(&mut self, kind: FieldKind) -> &Field {
        let field = Field::new(kind, self.fields.len() + 1);
        self.fields.push(field);
        &self.fields[self.fields.len() - 1]
    }

    /// Merges `changes` into the field with `id`. Returns `false` when no field matches.
    pub fn update_field(&mut self, id: &str, changes: FieldChanges) -> bool {
        match self.field_mut(id) {
            Some(field) => {
                field.apply(changes);
                true
            }
            None => false,
        }
    }

    /// Removes the field with `id`; later fields shift down by one.
    pub fn remove_field(&mut self, id: &str) -> Option<Field> {
        let index = self.fields.iter().position(|f| f.id == id)?;
        Some(self.fields.remove(index))
    }

    /// Takes the field at `from` out of the sequence and reinserts it at `to`.
    pub fn move_field(&mut self, from: usize, to: usize) -> Result<(), FormError> {
        let len = self.fields.len();
        for index in [from, to] {
            if index >= len {
                return Err(FormError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        Ok(())
    }

    /// Appends `Option {count + 1}` to a choice field.
    pub fn add_option(&mut self, id: &str) -> Result<(), FormError> {
        let options = self.options_mut(id)?;
        options.push(format!("Option {}", options.len() + 1));
        Ok(())
    }

    pub fn update_option(
        &mut self,
        id: &str,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), FormError> {
        let options = self.options_mut(id)?;
        let len = options.len();
        let slot = options
            .get_mut(index)
            .ok_or(FormError::OptionOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    /// Removes one option; refused when it is the last one left.
    pub fn remove_option(&mut self, id: &str, index: usize) -> Result<String, FormError> {
        let options = self.options_mut(id)?;
        let len = options.len();
        if index >= len {
            return Err(FormError::OptionOutOfRange { index, len });
        }
        if len <= 1 {
            return Err(FormError::LastOption);
        }
        Ok(options.remove(index))
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    fn options_mut(&mut self, id: &str) -> Result<&mut Vec<String>, FormError> {
        let field = self
            .field_mut(id)
            .ok_or_else(|| FormError::FieldNotFound(id.to_string()))?;
        field
            .options
            .as_mut()
            .ok_or_else(|| FormError::NoOptions(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(kinds: &[FieldKind]) -> Form {
        let mut form = Form::new();
        for kind in kinds {
            form.add_field(*kind);
        }
        form
    }

    fn names(form: &Form) -> Vec<&str> {
        form.fields().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn starts_empty_with_default_title() {
        let form = Form::new();
        assert_eq!(form.title(), "Untitled Form");
        assert!(form.is_empty());
    }

    #[test]
    fn add_appends_with_positional_name() {
        let form = form_with(&[FieldKind::Text, FieldKind::Select]);
        assert_eq!(names(&form), ["field1", "field2"]);
        assert_eq!(form.fields()[1].kind, FieldKind::Select);
    }

    #[test]
    fn default_name_can_repeat_after_removal() {
        let mut form = form_with(&[FieldKind::Text, FieldKind::Text]);
        let first = form.fields()[0].id.clone();
        form.remove_field(&first);
        form.add_field(FieldKind::Email);
        assert_eq!(names(&form), ["field2", "field2"]);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut form = form_with(&[FieldKind::Text]);
        let before = form.clone();
        assert!(!form.update_field("missing", FieldChanges::label("x")));
        assert_eq!(form, before);
    }

    #[test]
    fn update_merges_into_matching_field() {
        let mut form = form_with(&[FieldKind::Text, FieldKind::Text]);
        let id = form.fields()[1].id.clone();
        assert!(form.update_field(&id, FieldChanges::name("email")));
        assert_eq!(names(&form), ["field1", "email"]);
    }

    #[test]
    fn move_equal_indices_is_noop() {
        let mut form = form_with(&[FieldKind::Text, FieldKind::Email]);
        let before = form.clone();
        form.move_field(1, 1).unwrap();
        assert_eq!(form, before);
    }

    #[test]
    fn move_out_of_range_is_refused() {
        let mut form = form_with(&[FieldKind::Text, FieldKind::Email]);
        let before = form.clone();
        assert_eq!(
            form.move_field(0, 2),
            Err(FormError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(form, before);
    }

    #[test]
    fn move_backwards() {
        let mut form = form_with(&[FieldKind::Text, FieldKind::Text, FieldKind::Text]);
        form.move_field(2, 0).unwrap();
        assert_eq!(names(&form), ["field3", "field1", "field2"]);
    }

    #[test]
    fn option_editing() {
        let mut form = form_with(&[FieldKind::Radio]);
        let id = form.fields()[0].id.clone();

        form.update_option(&id, 0, "Yes").unwrap();
        form.add_option(&id).unwrap();
        assert_eq!(form.field(&id).unwrap().options(), ["Yes", "Option 2", "Option 3"]);

        assert_eq!(form.remove_option(&id, 1).unwrap(), "Option 2");
        assert_eq!(
            form.update_option(&id, 5, "x"),
            Err(FormError::OptionOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn last_option_cannot_be_removed() {
        let mut form = form_with(&[FieldKind::Select]);
        let id = form.fields()[0].id.clone();
        form.remove_option(&id, 0).unwrap();
        assert_eq!(form.remove_option(&id, 0), Err(FormError::LastOption));
        assert_eq!(form.field(&id).unwrap().options(), ["Option 2"]);
    }

    #[test]
    fn options_on_plain_field_are_refused() {
        let mut form = form_with(&[FieldKind::File]);
        let id = form.fields()[0].id.clone();
        assert_eq!(form.add_option(&id), Err(FormError::NoOptions(id.clone())));
        assert_eq!(
            form.add_option("nope"),
            Err(FormError::FieldNotFound("nope".to_string()))
        );
    }
}
