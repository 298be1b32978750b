use dioxus::prelude::*;

use crate::domain::GoldRates;

/// Modal editor for the rate board, pre-populated with the current table.
///
/// Saving replaces the table wholesale. Fields parse as plain numbers;
/// blank or unparseable entries coerce to zero — the manager accepts
/// whatever the operator enters.
#[component]
pub fn RateUpdateModal(
    current: GoldRates,
    on_save: EventHandler<GoldRates>,
    on_close: EventHandler<()>,
) -> Element {
    let mut rate_24k_input = use_signal(|| format_rate(current.rate_24k));
    let mut rate_22k_input = use_signal(|| format_rate(current.rate_22k));
    let mut rate_18k_input = use_signal(|| format_rate(current.rate_18k));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_save.call(GoldRates {
            rate_24k: parse_rate(&rate_24k_input()),
            rate_22k: parse_rate(&rate_22k_input()),
            rate_18k: parse_rate(&rate_18k_input()),
        });
        on_close.call(());
    };

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal",
                h2 { class: "modal-title", "Update Gold Rates" }
                form {
                    onsubmit: on_submit,
                    div { class: "field",
                        label { class: "field-label", "24 Karat Rate (per 10g)" }
                        input {
                            class: "text-input",
                            inputmode: "decimal",
                            value: rate_24k_input(),
                            oninput: move |evt| rate_24k_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", "22 Karat Rate (per 10g)" }
                        input {
                            class: "text-input",
                            inputmode: "decimal",
                            value: rate_22k_input(),
                            oninput: move |evt| rate_22k_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", "18 Karat Rate (per 10g)" }
                        input {
                            class: "text-input",
                            inputmode: "decimal",
                            value: rate_18k_input(),
                            oninput: move |evt| rate_18k_input.set(evt.value()),
                        }
                    }
                    div { class: "modal-actions",
                        button {
                            class: "button-ghost",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button { class: "button-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}

fn format_rate(value: f64) -> String {
    if value == value.trunc() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn parse_rate(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}
