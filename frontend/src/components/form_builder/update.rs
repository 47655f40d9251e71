//! Update function for the builder shell.
//!
//! Every message maps onto one `Form` operation. Operations the model refuses
//! (unknown ids, stale indices, removing the last option) leave the form as it
//! was; they are logged to the console and otherwise ignored.

use gloo_console::warn;
use yew::prelude::*;

use common::error::FormError;

use super::messages::Msg;
use super::state::FormBuilderComponent;

/// Central update function for the component.
///
/// Returns `true` whenever the form or the tab may have changed so the
/// editor and preview receive the new snapshot.
pub fn update(
    component: &mut FormBuilderComponent,
    _ctx: &Context<FormBuilderComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::SetTitle(title) => {
            component.form.set_title(title);
            true
        }
        Msg::AddField(kind) => {
            component.form.add_field(kind);
            true
        }
        Msg::UpdateField(id, changes) => component.form.update_field(&id, changes),
        Msg::RemoveField(id) => component.form.remove_field(&id).is_some(),
        Msg::MoveField(from, to) => applied(component.form.move_field(from, to)),
        Msg::AddOption(id) => applied(component.form.add_option(&id)),
        Msg::UpdateOption(id, index, text) => {
            applied(component.form.update_option(&id, index, text))
        }
        Msg::RemoveOption(id, index) => applied(component.form.remove_option(&id, index)),
    }
}

/// Re-render only when the model accepted the change.
fn applied<T>(result: Result<T, FormError>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            warn!(format!("form change ignored: {err}"));
            false
        }
    }
}
