//! One editable card per field.
//!
//! Every keystroke is forwarded to the shell as it happens; there is no local
//! draft, no debouncing and no uniqueness check on names at this layer.

use gloo_console::warn;
use yew::html::Scope;
use yew::prelude::*;

use common::model::field::{Field, FieldChanges, FieldKind};

use super::props::FormEditorProps;
use super::{FormEditorComponent, Msg};
use crate::components::helpers::{hover_position, target_checked, target_value};

pub fn field_card(
    field: &Field,
    index: usize,
    dragging: bool,
    props: &FormEditorProps,
    link: &Scope<FormEditorComponent>,
) -> Html {
    let id = field.id.clone();

    html! {
        <div
            key={field.id.clone()}
            class={classes!("card", "field-card", dragging.then_some("dragging"))}
            draggable="true"
            ondragstart={link.callback(move |e: DragEvent| {
                // Firefox will not start a drag without payload.
                if let Some(data) = e.data_transfer() {
                    if let Err(err) = data.set_data("text/plain", &index.to_string()) {
                        warn!(format!("drag payload not set: {err:?}"));
                    }
                }
                Msg::DragStart(index)
            })}
            ondragenter={Callback::from(|e: DragEvent| e.prevent_default())}
            ondragover={link.batch_callback(move |e: DragEvent| {
                e.prevent_default();
                hover_position(&e, ".field-card").map(|at| Msg::DragOver(index, at))
            })}
            ondrop={link.callback(|e: DragEvent| {
                e.prevent_default();
                Msg::DragEnd
            })}
            ondragend={link.callback(|_: DragEvent| Msg::DragEnd)}
        >
            <div class="card-header">
                <div class="card-heading">
                    <span class="drag-handle">{"⋮⋮"}</span>
                    <h3>{ format!("{} Field", field.kind.title()) }</h3>
                </div>
                <button
                    class="remove-btn"
                    title="Remove field"
                    onclick={props.on_remove.reform(move |_: MouseEvent| id.clone())}
                >
                    {"✕"}
                </button>
            </div>
            <div class="card-body">
                <div class="two-columns">
                    { text_input(field, "label", "Label", &field.label, |v| FieldChanges::label(v), props) }
                    { text_input(field, "name", "Field Name", &field.name, |v| FieldChanges::name(v), props) }
                </div>
                { placeholder_input(field, props) }
                { options_editor(field, props) }
                { required_toggle(field, props) }
            </div>
        </div>
    }
}

/// A labelled text input that forwards each keystroke as a `FieldChanges`.
fn text_input(
    field: &Field,
    suffix: &str,
    label: &str,
    value: &str,
    to_changes: fn(String) -> FieldChanges,
    props: &FormEditorProps,
) -> Html {
    let input_id = format!("{}-{}", field.id, suffix);
    let id = field.id.clone();
    let oninput = props
        .on_update
        .reform(move |e: InputEvent| (id.clone(), to_changes(target_value(&e))));

    html! {
        <div>
            <label for={input_id.clone()} class="input-label">{ label.to_string() }</label>
            <input id={input_id} type="text" class="text-input" value={value.to_string()} {oninput} />
        </div>
    }
}

fn placeholder_input(field: &Field, props: &FormEditorProps) -> Html {
    if field.kind.has_placeholder() {
        text_input(
            field,
            "placeholder",
            "Placeholder",
            &field.placeholder,
            |v| FieldChanges::placeholder(v),
            props,
        )
    } else {
        html! {}
    }
}

fn options_editor(field: &Field, props: &FormEditorProps) -> Html {
    match field.kind {
        FieldKind::Select | FieldKind::Radio => {}
        FieldKind::Text
        | FieldKind::Email
        | FieldKind::Textarea
        | FieldKind::Checkbox
        | FieldKind::File => return html! {},
    }

    let options = field.options();
    let last_one = options.len() <= 1;
    let add_id = field.id.clone();

    html! {
        <div class="options-editor">
            <span class="input-label">{"Options"}</span>
            {
                for options.iter().enumerate().map(|(index, option)| {
                    let edit_id = field.id.clone();
                    let remove_id = field.id.clone();
                    html! {
                        <div class="option-row">
                            <input
                                type="text"
                                class="text-input"
                                value={option.clone()}
                                oninput={props.on_update_option.reform(move |e: InputEvent| {
                                    (edit_id.clone(), index, target_value(&e))
                                })}
                            />
                            <button
                                class="remove-btn"
                                disabled={last_one}
                                onclick={props.on_remove_option.reform(move |_: MouseEvent| {
                                    (remove_id.clone(), index)
                                })}
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                })
            }
            <button
                class="add-option-btn"
                onclick={props.on_add_option.reform(move |_: MouseEvent| add_id.clone())}
            >
                {"+ Add Option"}
            </button>
        </div>
    }
}

fn required_toggle(field: &Field, props: &FormEditorProps) -> Html {
    let input_id = format!("{}-required", field.id);
    let id = field.id.clone();
    let onchange = props
        .on_update
        .reform(move |e: Event| (id.clone(), FieldChanges::required(target_checked(&e))));

    html! {
        <div class="required-row">
            <input id={input_id.clone()} type="checkbox" checked={field.required} {onchange} />
            <label for={input_id}>{"Required field"}</label>
        </div>
    }
}
