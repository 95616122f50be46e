use leptos::prelude::*;
use page::home;

use crate::toolbox::prelude::*;

pub mod components;
pub mod hooks;
pub mod page;
pub mod theme;

#[component]
pub fn App() -> impl IntoView {
    intersection_observer::init_global_state();

    view! { <home::Page /> }
}
