//! Field palette: one button per field kind.
//!
//! The palette only announces the chosen kind through `on_add_field`; the
//! builder shell performs the actual append.

use yew::prelude::*;

use common::model::field::FieldKind;
use common::palette::{entries, PaletteEntry};

#[derive(Properties, PartialEq, Clone)]
pub struct FieldPaletteProps {
    /// Invoked with the kind of the button that was clicked.
    pub on_add_field: Callback<FieldKind>,
}

pub struct FieldPaletteComponent;

impl Component for FieldPaletteComponent {
    type Message = ();
    type Properties = FieldPaletteProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FieldPaletteComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_add_field = &ctx.props().on_add_field;

        html! {
            <div class="palette">
                { for entries().into_iter().map(|entry| field_button(entry, on_add_field)) }
            </div>
        }
    }
}

fn field_button(entry: PaletteEntry, on_add_field: &Callback<FieldKind>) -> Html {
    let kind = entry.kind;
    let onclick = on_add_field.reform(move |_: MouseEvent| kind);

    html! {
        <button class="palette-btn" {onclick}>
            <i class="material-icons">{ entry.icon }</i>
            <span class="icon-label">{ entry.label }</span>
        </button>
    }
}
