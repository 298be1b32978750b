use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{AboutPage, CalculatorPage, RatesPage},
        shell::Shell,
    },
    util::assets,
};

pub const APP_NAME: &str = "Shri Murari Jewellers Pvt. Ltd.";

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Rates {},
    #[route("/calculator")]
    Calculator {},
    #[route("/about")]
    About {},
}

#[component]
pub fn App() -> Element {
    // The rate table and toast stack are the only session-wide state; both
    // are owned here and handed down by context.
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Rates() -> Element {
    rsx! { Shell { RatesPage {} } }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}
