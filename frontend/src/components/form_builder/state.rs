//! State held by the builder shell.

use common::model::form::Form;

use super::messages::Tab;

/// Main state container for the `FormBuilderComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules.
pub struct FormBuilderComponent {
    /// The form being authored. The only copy of the field list in the app.
    pub form: Form,

    /// Pane shown on the right: the editor cards or the live preview.
    pub active_tab: Tab,
}

impl FormBuilderComponent {
    /// Starts with an empty `Untitled Form` and the editor tab selected.
    pub fn new() -> Self {
        Self {
            form: Form::new(),
            active_tab: Tab::Editor,
        }
    }
}
