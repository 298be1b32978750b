use dioxus::prelude::*;

/// One tier on the rate board: purity label, rupee rate, fineness caption.
#[component]
pub fn RateCard(purity: String, rate: String, description: String) -> Element {
    rsx! {
        div {
            class: "rate-card",
            h3 { "{purity}" }
            p { class: "rate-value", "₹{rate}" }
            p { class: "muted", "{description}" }
        }
    }
}
