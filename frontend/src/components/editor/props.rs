//! Properties for the `FormEditorComponent`.
//!
//! The editor receives a snapshot of the form plus one callback per mutation
//! the builder shell exposes. It never keeps a copy of the fields.

use yew::prelude::*;

use common::model::field::{Field, FieldChanges};

#[derive(Properties, PartialEq, Clone)]
pub struct FormEditorProps {
    pub title: String,

    /// Fields in display order.
    pub fields: Vec<Field>,

    pub on_title: Callback<String>,

    /// `(field id, changes)` merged into the matching field.
    pub on_update: Callback<(String, FieldChanges)>,

    /// Field id to remove.
    pub on_remove: Callback<String>,

    /// `(from, to)` positions, emitted while a card is dragged over another.
    pub on_move: Callback<(usize, usize)>,

    pub on_add_option: Callback<String>,

    /// `(field id, option index, new text)`.
    pub on_update_option: Callback<(String, usize, String)>,

    /// `(field id, option index)`. The model refuses to drop the last option.
    pub on_remove_option: Callback<(String, usize)>,
}
