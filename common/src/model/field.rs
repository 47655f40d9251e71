use serde::{Deserialize, Serialize};

/// Options given to every new `select` or `radio` field.
pub const DEFAULT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// The closed set of input kinds a form can contain.
///
/// Every per-kind decision in the builder (editor inputs, preview control,
/// schema rule) is an exhaustive `match` over this enum, so a new kind is a
/// compile error everywhere it still needs handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
    Select,
    Checkbox,
    Radio,
    File,
}

impl FieldKind {
    /// Every kind, in the order the palette offers them.
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Checkbox,
        FieldKind::Radio,
        FieldKind::Select,
        FieldKind::Textarea,
        FieldKind::File,
    ];

    /// Lowercase tag, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::File => "file",
        }
    }

    /// Capitalized tag used in editor card headings ("Email Field").
    pub fn title(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Email => "Email",
            FieldKind::Textarea => "Textarea",
            FieldKind::Select => "Select",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::Radio => "Radio",
            FieldKind::File => "File",
        }
    }

    /// Whether fields of this kind carry an options list.
    pub fn has_options(&self) -> bool {
        match self {
            FieldKind::Select | FieldKind::Radio => true,
            FieldKind::Text
            | FieldKind::Email
            | FieldKind::Textarea
            | FieldKind::Checkbox
            | FieldKind::File => false,
        }
    }

    /// Whether the editor offers a placeholder input for this kind.
    pub fn has_placeholder(&self) -> bool {
        match self {
            FieldKind::Text | FieldKind::Email | FieldKind::Textarea => true,
            FieldKind::Select
            | FieldKind::Checkbox
            | FieldKind::Radio
            | FieldKind::File => false,
        }
    }
}

/// One input definition inside a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Opaque identifier, assigned once at creation.
    pub id: String,
    /// Input kind. Never changed after creation.
    pub kind: FieldKind,
    /// Text shown above the control.
    pub label: String,
    /// Key under which the field's value is collected. Not required to be unique.
    pub name: String,
    pub required: bool,
    /// Hint text for single and multi-line inputs; caption for checkboxes.
    pub placeholder: String,
    /// Present exactly when `kind.has_options()`; never empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Field {
    /// Builds a field with the builder defaults for `kind`.
    ///
    /// `position` is the 1-based slot used for the default `name` (`field{position}`).
    pub fn new(kind: FieldKind, position: usize) -> Self {
        let options = kind
            .has_options()
            .then(|| DEFAULT_OPTIONS.iter().map(|o| o.to_string()).collect());

        Self {
            id: format!("field-{}", uuid::Uuid::new_v4()),
            kind,
            label: format!("New {} field", kind.as_str()),
            name: format!("field{}", position),
            required: false,
            placeholder: String::new(),
            options,
        }
    }

    /// Overwrites every attribute that `changes` carries and keeps the rest.
    pub fn apply(&mut self, changes: FieldChanges) {
        if let Some(label) = changes.label {
            self.label = label;
        }
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(placeholder) = changes.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(required) = changes.required {
            self.required = required;
        }
        // Kinds without options never grow a list, and a list never goes empty.
        if let Some(options) = changes.options {
            if self.kind.has_options() && !options.is_empty() {
                self.options = Some(options);
            }
        }
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }
}

/// A partial update for a [`Field`]. `None` members are left untouched.
///
/// There is no `id` or `kind` member: neither changes once a field exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChanges {
    pub label: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
}

impl FieldChanges {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
            ..Self::default()
        }
    }

    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Self::default()
        }
    }

    pub fn options(options: Vec<String>) -> Self {
        Self {
            options: Some(options),
            ..Self::default()
        }
    }
}
