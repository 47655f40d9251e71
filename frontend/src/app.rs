use crate::components::form_builder::FormBuilderComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <main class="container">
                <h1 class="page-title">{"Yuisa Form Builder"}</h1>
                <FormBuilderComponent />
            </main>
        }
    }
}
