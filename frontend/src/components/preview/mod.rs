//! Live preview: the authored form as an end user would fill it in.
//!
//! The validation schema is rebuilt from the current fields on every submit
//! and every re-validation, so it always reflects the latest kinds, names and
//! required flags. Collected values live in a `PreviewState`; the fields
//! themselves stay owned by the builder shell.

use gloo_console::{log, warn};
use yew::prelude::*;

use common::preview::PreviewState;
use common::schema::Schema;

mod controls;
mod props;

pub use props::FormPreviewProps;

pub enum Msg {
    Input(String, String),
    Check(String, bool),
    Submit,
    Reset,
}

pub struct FormPreviewComponent {
    state: PreviewState,
    /// Bumped on reset so uncontrolled inputs (file pickers) are recreated empty.
    generation: u32,
}

impl Component for FormPreviewComponent {
    type Message = Msg;
    type Properties = FormPreviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: PreviewState::new(&ctx.props().fields),
            generation: 0,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state.sync(&ctx.props().fields);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let fields = &ctx.props().fields;
        match msg {
            Msg::Input(name, value) => {
                self.state.set_value(&name, value);
                self.state.revalidate(&Schema::from_fields(fields));
                true
            }
            Msg::Check(name, checked) => {
                self.state.set_checked(&name, checked);
                self.state.revalidate(&Schema::from_fields(fields));
                true
            }
            Msg::Submit => {
                if self.state.submit(&Schema::from_fields(fields)) {
                    match serde_json::to_string(self.state.values()) {
                        Ok(json) => log!(format!("Form submitted: {json}")),
                        Err(err) => warn!(format!("could not serialize submission: {err}")),
                    }
                }
                true
            }
            Msg::Reset => {
                self.state.reset(fields);
                self.generation = self.generation.wrapping_add(1);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        if props.fields.is_empty() {
            return html! {
                <div class="empty-state">
                    <p>{"No fields to preview. Add fields in the editor."}</p>
                </div>
            };
        }

        if self.state.is_submitted() {
            return html! {
                <div class="success-panel">
                    <div class="success-heading">
                        <span class="success-check">{"✓"}</span>
                        <h3>{"Success!"}</h3>
                    </div>
                    <p>{"Your form has been submitted successfully."}</p>
                    <button class="outline-btn" onclick={link.callback(|_| Msg::Reset)}>
                        {"Reset Form"}
                    </button>
                </div>
            };
        }

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="preview" key={self.generation.to_string()}>
                <div class="preview-header">
                    <h2>{ props.title.clone() }</h2>
                </div>
                <form class="preview-form" novalidate={true} {onsubmit}>
                    {
                        for props.fields.iter().map(|field| {
                            controls::field_row(field, &self.state, link)
                        })
                    }
                    <button type="submit" class="primary-btn">{"Submit"}</button>
                </form>
            </div>
        }
    }
}
