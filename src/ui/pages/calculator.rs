use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::{
    domain::{
        compute_estimate, estimate_summary, format_inr, parse_weight, AppState, EstimateInput,
        Purity,
    },
    util::share::share_or_copy,
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let rates = state.with(|st| st.current_rates());

    let mut weight_input = use_signal(|| "10".to_string());
    let mut purity = use_signal(Purity::default);
    let mut include_making = use_signal(|| true);
    let mut include_gst = use_signal(|| true);
    let share_ack = use_signal(|| false);

    // Fully re-derived on every input change; nothing incremental.
    let input = EstimateInput {
        weight_grams: parse_weight(&weight_input()),
        purity: purity(),
        include_making: include_making(),
        include_gst: include_gst(),
    };
    let breakdown = compute_estimate(rates.as_ref(), &input);

    let making_label = format!(
        "Include Making Charges ({:.1}%)",
        breakdown.making_charge_percent * 100.0
    );

    let on_share = {
        let mut share_ack = share_ack.clone();
        move |_| {
            if breakdown.total_price == 0.0 {
                return;
            }
            if share_or_copy(&estimate_summary(&input, &breakdown)) {
                share_ack.set(true);
                let mut share_ack = share_ack.clone();
                spawn(async move {
                    sleep(Duration::from_secs(2)).await;
                    share_ack.set(false);
                });
            }
        }
    };

    rsx! {
        div {
            class: "page fade-in",
            h2 { class: "page-title", "Price Calculator" }

            if rates.is_none() {
                div { class: "panel panel-warning",
                    "Rates are not currently set. Please check the 'Rates' tab."
                }
            }

            div {
                class: "calc-grid",
                div {
                    class: "panel input-panel",
                    div { class: "field",
                        label { class: "field-label", r#for: "weight", "Enter Weight (in grams)" }
                        input {
                            id: "weight",
                            class: "text-input text-input-large",
                            inputmode: "decimal",
                            placeholder: "e.g., 10",
                            value: weight_input(),
                            oninput: move |evt| weight_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", "Select Purity" }
                        div { class: "segmented",
                            button {
                                class: if purity() == Purity::K22 { "segment-button active" } else { "segment-button" },
                                onclick: move |_| purity.set(Purity::K22),
                                "22 Karat"
                            }
                            button {
                                class: if purity() == Purity::K18 { "segment-button active" } else { "segment-button" },
                                onclick: move |_| purity.set(Purity::K18),
                                "18 Karat"
                            }
                        }
                    }
                    div { class: "toggle-group",
                        ToggleSwitch {
                            label: making_label,
                            checked: include_making(),
                            on_change: move |value| include_making.set(value),
                        }
                        ToggleSwitch {
                            label: "Include GST (3%)".to_string(),
                            checked: include_gst(),
                            on_change: move |value| include_gst.set(value),
                        }
                    }
                }

                div {
                    class: "panel breakdown-panel",
                    div { class: "breakdown-row",
                        span { class: "muted", "Gold Value" }
                        span { "₹{format_inr(breakdown.gold_value)}" }
                    }
                    div { class: "breakdown-row",
                        span { class: "muted", "Making Charges" }
                        span { "₹{format_inr(breakdown.making_charge)}" }
                    }
                    div { class: "breakdown-row breakdown-subtotal",
                        span { "Subtotal" }
                        span { "₹{format_inr(breakdown.sub_total)}" }
                    }
                    div { class: "breakdown-row",
                        span { class: "muted", "GST (3%)" }
                        span { "₹{format_inr(breakdown.gst_amount)}" }
                    }
                    div { class: "total-block",
                        div { class: "total-caption",
                            p { "Total Estimated Price" }
                            button {
                                class: "share-button",
                                aria_label: "Share price calculation",
                                onclick: on_share,
                                "⇪"
                                if share_ack() {
                                    span { class: "copied-badge", "Copied!" }
                                }
                            }
                        }
                        p { class: "total-value", "₹{format_inr(breakdown.total_price)}" }
                    }
                }
            }

            p { class: "fine-print",
                "Calculations are approximate. Final price may vary based on the final product weight and prevailing market rates."
            }
        }
    }
}

#[component]
fn ToggleSwitch(label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "switch-row",
            span { "{label}" }
            input {
                r#type: "checkbox",
                class: "switch",
                checked: checked,
                onclick: move |_| on_change.call(!checked),
            }
        }
    }
}
