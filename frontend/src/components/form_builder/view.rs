//! View rendering for the builder shell.
//!
//! Left column: the field palette. Right column: a tab bar switching between
//! the editor cards and the live preview. Both panes are fed from the same
//! `Form`, so a mutation shows up in whichever pane is open on the next render.

use yew::html::Scope;
use yew::prelude::*;

use common::model::field::FieldChanges;

use super::messages::{Msg, Tab};
use super::state::FormBuilderComponent;
use crate::components::editor::FormEditorComponent;
use crate::components::palette::FieldPaletteComponent;
use crate::components::preview::FormPreviewComponent;

pub fn view(component: &FormBuilderComponent, ctx: &Context<FormBuilderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="builder-grid">
            <aside class="panel palette-panel">
                <h2 class="panel-title">{"Field Types"}</h2>
                <FieldPaletteComponent on_add_field={link.callback(Msg::AddField)} />
            </aside>
            <section class="panel main-panel">
                { build_tab_bar(component, link) }
                {
                    match component.active_tab {
                        Tab::Editor => build_editor_tab(component, link),
                        Tab::Preview => build_preview_tab(component),
                    }
                }
            </section>
        </div>
    }
}

fn build_tab_bar(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    let tab_button = |tab: Tab, label: &str| {
        html! {
            <button
                class={classes!("tab-btn", (component.active_tab == tab).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTab(tab))}
            >
                { label.to_string() }
            </button>
        }
    };

    html! {
        <div class="tab-bar">
            { tab_button(Tab::Editor, "Editor") }
            { tab_button(Tab::Preview, "Preview") }
        </div>
    }
}

fn build_editor_tab(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    html! {
        <FormEditorComponent
            title={component.form.title().to_string()}
            fields={component.form.fields().to_vec()}
            on_title={link.callback(Msg::SetTitle)}
            on_update={link.callback(|(id, changes): (String, FieldChanges)| Msg::UpdateField(id, changes))}
            on_remove={link.callback(Msg::RemoveField)}
            on_move={link.callback(|(from, to): (usize, usize)| Msg::MoveField(from, to))}
            on_add_option={link.callback(Msg::AddOption)}
            on_update_option={link.callback(|(id, index, text): (String, usize, String)| Msg::UpdateOption(id, index, text))}
            on_remove_option={link.callback(|(id, index): (String, usize)| Msg::RemoveOption(id, index))}
        />
    }
}

fn build_preview_tab(component: &FormBuilderComponent) -> Html {
    html! {
        <FormPreviewComponent
            title={component.form.title().to_string()}
            fields={component.form.fields().to_vec()}
        />
    }
}
