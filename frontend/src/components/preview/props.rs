use yew::prelude::*;

use common::model::field::Field;

/// Read-only snapshot the preview renders from.
#[derive(Properties, PartialEq, Clone)]
pub struct FormPreviewProps {
    pub title: String,
    pub fields: Vec<Field>,
}
