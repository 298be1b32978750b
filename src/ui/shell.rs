use dioxus::prelude::*;

use crate::app::Route;

/// Header plus three-tab navigation wrapped around every page.
#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell",
            header {
                class: "app-header",
                h1 { class: "app-title",
                    "Shri Murari Jewellers "
                    span { class: "accent", "Pvt. Ltd." }
                }
            }
            nav { class: "tab-bar",
                NavButton {
                    active: matches!(current_route, Route::Rates {}),
                    onclick: move |_| { nav.push(Route::Rates {}); },
                    label: "Live Rates",
                }
                NavButton {
                    active: matches!(current_route, Route::Calculator {}),
                    onclick: move |_| { nav.push(Route::Calculator {}); },
                    label: "Calculator",
                }
                NavButton {
                    active: matches!(current_route, Route::About {}),
                    onclick: move |_| { nav.push(Route::About {}); },
                    label: "About Us",
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: if active { "tab-button active" } else { "tab-button" },
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
