//! Builder shell: the single owner of the form being authored.
//!
//! Responsibilities
//! - Hold the `Form` (title + ordered fields) and the active tab.
//! - Hand the palette an "add field" callback.
//! - Hand the editor the fields plus callbacks for every mutation.
//! - Hand the preview a read-only snapshot of title and fields.
//!
//! Children never mutate the field list; they emit a `Msg` back here and
//! re-render from the new props in the same update cycle.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::FormBuilderComponent;

impl Component for FormBuilderComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        FormBuilderComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
