//! Validation contract derived from the current field list.
//!
//! A [`Schema`] is a pure function of the fields: the preview rebuilds it on
//! every render instead of caching it, so edits to kinds, names or required
//! flags take effect on the next submit.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::model::field::{Field, FieldKind};

pub const INVALID_EMAIL: &str = "Invalid email address";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Submitted values keyed by field name.
pub type Values = BTreeMap<String, String>;

/// Whether `value` has the shape of an email address.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// The rule a single named value must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl Rule {
    pub fn for_field(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            kind: field.kind,
            required: field.required,
        }
    }

    /// Checks one value.
    ///
    /// An empty optional value passes regardless of kind. Otherwise the email
    /// shape is judged before presence, so an empty required email reports
    /// [`INVALID_EMAIL`] rather than the required message.
    pub fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() && !self.required {
            return Ok(());
        }

        match self.kind {
            FieldKind::Email if !is_email(value) => return Err(INVALID_EMAIL.to_string()),
            FieldKind::Email
            | FieldKind::Text
            | FieldKind::Textarea
            | FieldKind::Select
            | FieldKind::Checkbox
            | FieldKind::Radio
            | FieldKind::File => {}
        }

        if value.is_empty() {
            Err(format!("{} is required", self.name))
        } else {
            Ok(())
        }
    }
}

/// Per-field violation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub BTreeMap<String, String>);

impl ValidationErrors {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// One rule per distinct field name, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    rules: Vec<Rule>,
}

impl Schema {
    /// Builds the schema for `fields`.
    ///
    /// Names are not unique: when several fields share one, the rule of the
    /// last such field replaces the earlier ones and they share a value.
    pub fn from_fields(fields: &[Field]) -> Self {
        let mut rules: Vec<Rule> = Vec::with_capacity(fields.len());
        for field in fields {
            let rule = Rule::for_field(field);
            match rules.iter_mut().find(|r| r.name == rule.name) {
                Some(existing) => *existing = rule,
                None => rules.push(rule),
            }
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Runs every rule. Missing values count as empty strings.
    pub fn validate(&self, values: &Values) -> Result<(), ValidationErrors> {
        let errors: BTreeMap<String, String> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let value = values.get(&rule.name).map(String::as_str).unwrap_or("");
                rule.check(value).err().map(|msg| (rule.name.clone(), msg))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::FieldChanges;

    fn field(kind: FieldKind, name: &str, required: bool) -> Field {
        let mut field = Field::new(kind, 1);
        field.apply(FieldChanges {
            name: Some(name.to_string()),
            required: Some(required),
            ..FieldChanges::default()
        });
        field
    }

    fn values(pairs: &[(&str, &str)]) -> Values {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.com", "first.last+tag@mail.example.org", "x_y@sub-d.io"] {
            assert!(is_email(ok), "{ok}");
        }
        for bad in ["not-an-email", "a@b", "@b.com", "a@.com", ".a@b.com", "a..b@c.com", "a b@c.com"] {
            assert!(!is_email(bad), "{bad}");
        }
    }

    #[test]
    fn required_empty_is_a_violation() {
        let schema = Schema::from_fields(&[field(FieldKind::Text, "city", true)]);
        let errors = schema.validate(&values(&[("city", "")])).unwrap_err();
        assert_eq!(errors.get("city"), Some("city is required"));
    }

    #[test]
    fn required_empty_email_reports_invalid_email() {
        let schema = Schema::from_fields(&[field(FieldKind::Email, "mail", true)]);
        let errors = schema.validate(&values(&[("mail", "")])).unwrap_err();
        assert_eq!(errors.get("mail"), Some(INVALID_EMAIL));

        let errors = schema.validate(&Values::new()).unwrap_err();
        assert_eq!(errors.get("mail"), Some(INVALID_EMAIL));
    }

    #[test]
    fn optional_empty_passes_for_every_kind() {
        let fields: Vec<_> = FieldKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| field(*kind, &format!("f{i}"), false))
            .collect();
        assert_eq!(Schema::from_fields(&fields).validate(&Values::new()), Ok(()));
    }

    #[test]
    fn optional_email_still_checks_shape_when_filled() {
        let schema = Schema::from_fields(&[field(FieldKind::Email, "mail", false)]);
        let errors = schema.validate(&values(&[("mail", "nope")])).unwrap_err();
        assert_eq!(errors.get("mail"), Some(INVALID_EMAIL));
    }

    #[test]
    fn duplicate_names_keep_last_rule() {
        let schema = Schema::from_fields(&[
            field(FieldKind::Text, "dup", false),
            field(FieldKind::Email, "dup", true),
        ]);
        assert_eq!(schema.rules().len(), 1);
        assert_eq!(schema.rule("dup").map(|r| r.kind), Some(FieldKind::Email));
    }

    #[test]
    fn errors_display_count() {
        let schema = Schema::from_fields(&[
            field(FieldKind::Text, "a", true),
            field(FieldKind::Text, "b", true),
        ]);
        let errors = schema.validate(&Values::new()).unwrap_err();
        assert_eq!(errors.to_string(), "2 field(s) failed validation");
    }
}
