use thiserror::Error;

/// Mutations the form model refuses to perform.
///
/// None of these are fatal: the builder logs them and keeps the current form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no field with id `{0}`")]
    FieldNotFound(String),

    #[error("position {index} is outside a list of {len} fields")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("field `{0}` does not take options")]
    NoOptions(String),

    #[error("option {index} is outside a list of {len} options")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("a choice field must keep at least one option")]
    LastOption,
}
