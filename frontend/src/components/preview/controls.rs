//! Per-kind input controls of the preview.
//!
//! The control is chosen by an exhaustive match on `FieldKind`; a new kind
//! does not compile until it gets a control here.

use yew::html::Scope;
use yew::prelude::*;

use common::model::field::{Field, FieldKind};
use common::preview::{PreviewState, CHECKED};

use super::{FormPreviewComponent, Msg};
use crate::components::helpers::{target_checked, target_value};

const EMAIL_PLACEHOLDER: &str = "email@example.com";
const CHECKBOX_CAPTION: &str = "I agree";

/// Label, control and (when present) the violation message for one field.
pub fn field_row(field: &Field, state: &PreviewState, link: &Scope<FormPreviewComponent>) -> Html {
    html! {
        <div class="preview-row" key={field.id.clone()}>
            <label for={field.name.clone()} class="input-label">
                { field.label.clone() }
                { field.required.then(|| html! { <span class="required-mark">{"*"}</span> }) }
            </label>
            { control(field, state, link) }
            {
                match state.error_for(&field.name) {
                    Some(message) => html! { <p class="field-error">{ message.to_string() }</p> },
                    None => html! {},
                }
            }
        </div>
    }
}

fn control(field: &Field, state: &PreviewState, link: &Scope<FormPreviewComponent>) -> Html {
    let value = state.value(&field.name).to_string();

    match field.kind {
        FieldKind::Text => single_line(field, "text", &field.placeholder, value, link),
        FieldKind::Email => {
            let placeholder = non_empty_or(&field.placeholder, EMAIL_PLACEHOLDER);
            single_line(field, "email", placeholder, value, link)
        }
        FieldKind::Textarea => html! {
            <textarea
                id={field.name.clone()}
                class="text-input"
                rows="4"
                placeholder={field.placeholder.clone()}
                value={value}
                oninput={input_callback(field, link)}
            />
        },
        FieldKind::Select => html! {
            <select id={field.name.clone()} class="text-input" onchange={change_callback(field, link)}>
                <option value="" selected={value.is_empty()}>{"Select an option"}</option>
                {
                    for field.options().iter().map(|option| html! {
                        <option value={option.clone()} selected={*option == value}>{ option.clone() }</option>
                    })
                }
            </select>
        },
        FieldKind::Checkbox => {
            let name = field.name.clone();
            let onchange = link.callback(move |e: Event| Msg::Check(name.clone(), target_checked(&e)));
            html! {
                <div class="checkbox-row">
                    <input id={field.name.clone()} type="checkbox" checked={value == CHECKED} {onchange} />
                    <label for={field.name.clone()}>
                        { non_empty_or(&field.placeholder, CHECKBOX_CAPTION).to_string() }
                    </label>
                </div>
            }
        }
        FieldKind::Radio => html! {
            <div class="radio-group">
                {
                    for field.options().iter().enumerate().map(|(i, option)| {
                        let option_id = format!("{}-{}", field.name, i);
                        html! {
                            <div class="radio-row">
                                <input
                                    type="radio"
                                    id={option_id.clone()}
                                    name={field.name.clone()}
                                    value={option.clone()}
                                    checked={*option == value}
                                    onchange={change_callback(field, link)}
                                />
                                <label for={option_id}>{ option.clone() }</label>
                            </div>
                        }
                    })
                }
            </div>
        },
        // File inputs cannot be given a value; reset recreates them instead.
        FieldKind::File => html! {
            <input
                id={field.name.clone()}
                type="file"
                class="text-input"
                onchange={change_callback(field, link)}
            />
        },
    }
}

fn single_line(
    field: &Field,
    input_type: &'static str,
    placeholder: &str,
    value: String,
    link: &Scope<FormPreviewComponent>,
) -> Html {
    html! {
        <input
            id={field.name.clone()}
            type={input_type}
            class="text-input"
            placeholder={placeholder.to_string()}
            {value}
            oninput={input_callback(field, link)}
        />
    }
}

fn input_callback(field: &Field, link: &Scope<FormPreviewComponent>) -> Callback<InputEvent> {
    let name = field.name.clone();
    link.callback(move |e: InputEvent| Msg::Input(name.clone(), target_value(&e)))
}

fn change_callback(field: &Field, link: &Scope<FormPreviewComponent>) -> Callback<Event> {
    let name = field.name.clone();
    link.callback(move |e: Event| Msg::Input(name.clone(), target_value(&e)))
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
