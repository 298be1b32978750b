use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::{
    domain::{AppState, Director, GoldRates, Store, StoreInfo},
    infra::gemini::{GeminiClient, StoreInfoError, StoreInfoSource},
    ui::components::{
        carousel::Carousel,
        pin_prompt::PinPrompt,
        rate_modal::RateUpdateModal,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

/// Shared secret for the rate editor. A placeholder authorization scheme:
/// plain string comparison, no hashing, no lockout. Known weak point —
/// kept as-is because the gate is an interaction pattern, not a security
/// boundary.
const ADMIN_PIN: &str = "5555";

/// Press-and-hold threshold distinguishing the unlock gesture from a tap.
const HOLD_DURATION: Duration = Duration::from_millis(1500);

const CAROUSEL_IMAGES: [&str; 2] = [
    "https://placehold.co/1200x400/fefce8/ca8a04?text=Our+Legacy",
    "https://placehold.co/1200x400/fefce8/ca8a04?text=A+Tradition+of+Trust",
];

#[component]
pub fn AboutPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // One fetch per mount. A teardown does not abort an in-flight request;
    // the result is simply dropped with the panel.
    let info = use_resource(|| async move {
        fetch_store_info().await.map_err(|err| {
            println!("Store info fetch failed: {err}");
            "Failed to load company information.".to_string()
        })
    });

    let hold_timer = use_signal(|| None::<Task>);
    let mut pin_open = use_signal(|| false);
    let mut editor_open = use_signal(|| false);

    let on_pin_submit = move |pin: String| {
        pin_open.set(false);
        if pin == ADMIN_PIN {
            editor_open.set(true);
        } else if !pin.is_empty() {
            push_toast(toasts, ToastKind::Error, "Incorrect PIN.");
        }
    };

    let on_rates_saved = move |rates: GoldRates| {
        state.with_mut(|st| st.replace_rates(rates));
        push_toast(toasts, ToastKind::Success, "Gold rates updated.");
    };

    let current_rates = state.with(|st| st.current_rates()).unwrap_or(GoldRates {
        rate_24k: 0.0,
        rate_22k: 0.0,
        rate_18k: 0.0,
    });

    let carousel_images: Vec<String> = CAROUSEL_IMAGES.iter().map(|s| s.to_string()).collect();

    let info_snapshot: Option<Result<StoreInfo, String>> = info.read().as_ref().cloned();
    let stores_section = info_snapshot.clone();
    let directors_section = info_snapshot;

    rsx! {
        div {
            class: "page fade-in",
            if pin_open() {
                PinPrompt {
                    on_submit: on_pin_submit,
                    on_cancel: move |_| pin_open.set(false),
                }
            }
            if editor_open() {
                RateUpdateModal {
                    current: current_rates,
                    on_save: on_rates_saved,
                    on_close: move |_| editor_open.set(false),
                }
            }

            Carousel { images: carousel_images }

            section {
                h2 { class: "page-title", "Our Locations" }
                div { class: "card-stack",
                    match stores_section {
                        None => rsx! { LoadingSkeleton {} },
                        Some(Err(message)) => rsx! { p { class: "error-text", "{message}" } },
                        Some(Ok(data)) => rsx! {
                            for store in data.stores {
                                StoreCard { store }
                            }
                        },
                    }
                }
            }

            section {
                h2 {
                    class: "page-title pressable",
                    title: "Long press to update rates",
                    onmousedown: move |_| arm_hold(hold_timer, pin_open),
                    onmouseup: move |_| cancel_hold(hold_timer),
                    onmouseleave: move |_| cancel_hold(hold_timer),
                    ontouchstart: move |_| arm_hold(hold_timer, pin_open),
                    ontouchend: move |_| cancel_hold(hold_timer),
                    "Our Directors"
                }
                div { class: "card-stack",
                    match directors_section {
                        None => rsx! { LoadingSkeleton {} },
                        Some(Err(message)) => rsx! { p { class: "error-text", "{message}" } },
                        Some(Ok(data)) => rsx! {
                            for director in data.directors {
                                DirectorCard { director }
                            }
                        },
                    }
                }
            }
        }
    }
}

async fn fetch_store_info() -> Result<StoreInfo, StoreInfoError> {
    let client = GeminiClient::from_env()?;
    client.fetch_store_info().await
}

/// Arm the single-shot unlock timer. Re-arming implicitly cancels any
/// prior pending timer, so at most one is live per trigger surface.
fn arm_hold(mut hold_timer: Signal<Option<Task>>, mut pin_open: Signal<bool>) {
    cancel_hold(hold_timer);
    let task = spawn(async move {
        sleep(HOLD_DURATION).await;
        hold_timer.set(None);
        pin_open.set(true);
    });
    hold_timer.set(Some(task));
}

fn cancel_hold(mut hold_timer: Signal<Option<Task>>) {
    if let Some(task) = hold_timer.with_mut(|slot| slot.take()) {
        task.cancel();
    }
}

#[component]
fn StoreCard(store: Store) -> Element {
    rsx! {
        div {
            class: "info-card",
            h3 { "{store.name}" }
            p { class: "muted", "{store.address}" }
            p { class: "muted", "{store.phone}" }
        }
    }
}

#[component]
fn DirectorCard(director: Director) -> Element {
    rsx! {
        div {
            class: "info-card",
            h3 { "{director.name}" }
            p { class: "info-card-subtitle", "{director.title}" }
            p { class: "muted", "{director.bio}" }
        }
    }
}

#[component]
fn LoadingSkeleton() -> Element {
    rsx! {
        div { class: "skeleton" }
        div { class: "skeleton" }
    }
}
