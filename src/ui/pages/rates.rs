use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::{
    domain::{format_inr_whole, rates_summary, AppState, RateTier},
    ui::components::{carousel::Carousel, rate_card::RateCard},
    util::share::share_or_copy,
};

const CAROUSEL_IMAGES: [&str; 3] = [
    "https://placehold.co/1200x400/fefce8/ca8a04?text=Exquisite+Designs",
    "https://placehold.co/1200x400/fefce8/ca8a04?text=Timeless+Elegance",
    "https://placehold.co/1200x400/fefce8/ca8a04?text=Pure+Perfection",
];

#[component]
pub fn RatesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let rates = state.with(|st| st.current_rates());

    let share_ack = use_signal(|| false);
    let on_share = {
        let mut share_ack = share_ack.clone();
        move |_| {
            let Some(rates) = rates else {
                return;
            };
            if share_or_copy(&rates_summary(&rates)) {
                share_ack.set(true);
                let mut share_ack = share_ack.clone();
                spawn(async move {
                    sleep(Duration::from_secs(2)).await;
                    share_ack.set(false);
                });
            }
        }
    };

    let carousel_images: Vec<String> = CAROUSEL_IMAGES.iter().map(|s| s.to_string()).collect();
    let last_updated = today_label();

    rsx! {
        div {
            class: "page fade-in",
            Carousel { images: carousel_images }
            div { class: "page-heading",
                h2 { class: "page-title", "Today's Gold Rate" }
                button {
                    class: "share-button",
                    aria_label: "Share gold rates",
                    onclick: on_share,
                    "⇪"
                    if share_ack() {
                        span { class: "copied-badge", "Copied!" }
                    }
                }
            }
            p { class: "muted", "Price per 10 grams (excluding GST & making charges)" }

            if let Some(rates) = rates {
                div {
                    class: "card-grid",
                    for tier in RateTier::ALL {
                        RateCard {
                            purity: tier.label().to_string(),
                            rate: format_inr_whole(tier.rate_in(&rates)),
                            description: tier.fineness().to_string(),
                        }
                    }
                }
            } else {
                div { class: "panel panel-empty",
                    p { class: "muted", "Rates currently unavailable." }
                }
            }

            p { class: "fine-print", "Last updated: {last_updated}" }
        }
    }
}

fn today_label() -> String {
    use time::{format_description, OffsetDateTime};

    let now = OffsetDateTime::now_utc().date();
    format_description::parse("[day padding:none] [month repr:long] [year]")
        .ok()
        .and_then(|format| now.format(&format).ok())
        .unwrap_or_else(|| now.to_string())
}
