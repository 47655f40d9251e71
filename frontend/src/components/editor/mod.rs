//! Form editor: the title input plus one editable card per field.
//!
//! Cards are reordered by dragging. The reorder fires on hover: once the
//! pointer crosses the midpoint of another card in the direction of travel,
//! the shell is asked to move the dragged field into that slot. Drop only ends
//! the gesture.

use yew::prelude::*;

use common::reorder::{DragState, HoverPosition};

mod field_card;
mod props;

pub use props::FormEditorProps;

pub enum Msg {
    DragStart(usize),
    DragOver(usize, HoverPosition),
    DragEnd,
}

pub struct FormEditorComponent {
    /// Ephemeral gesture state; never part of the form.
    drag: DragState,
}

impl Component for FormEditorComponent {
    type Message = Msg;
    type Properties = FormEditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            drag: DragState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DragStart(index) => {
                self.drag.start(index);
                true
            }
            Msg::DragOver(index, at) => match self.drag.hover(index, at) {
                Some(step) => {
                    ctx.props().on_move.emit(step);
                    true
                }
                None => false,
            },
            Msg::DragEnd => self.drag.end().is_some(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <div class="form-editor">
                <div class="card title-card">
                    <label for="form-title" class="input-label">{"Form Title"}</label>
                    <input
                        id="form-title"
                        type="text"
                        class="text-input title-input"
                        value={props.title.clone()}
                        oninput={props.on_title.reform(|e: InputEvent| {
                            crate::components::helpers::target_value(&e)
                        })}
                    />
                </div>
                {
                    if props.fields.is_empty() {
                        html! {
                            <div class="empty-state">
                                <p>{"No fields added yet. Add fields from the palette on the left."}</p>
                            </div>
                        }
                    } else {
                        props
                            .fields
                            .iter()
                            .enumerate()
                            .map(|(index, field)| {
                                field_card::field_card(field, index, self.drag.is_dragging(index), props, link)
                            })
                            .collect::<Html>()
                    }
                }
            </div>
        }
    }
}
