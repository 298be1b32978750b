use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

const SLIDE_INTERVAL: Duration = Duration::from_secs(5);

/// Auto-advancing image strip with manual dot selection and a play/pause
/// control. The advance loop keeps running while paused and simply skips
/// its tick, so resuming never needs to re-arm anything.
#[component]
pub fn Carousel(images: Vec<String>) -> Element {
    let mut current = use_signal(|| 0_usize);
    let mut playing = use_signal(|| true);

    let count = images.len();
    let _advance = use_future(move || async move {
        loop {
            sleep(SLIDE_INTERVAL).await;
            if playing() && count > 0 {
                current.with_mut(|index| *index = (*index + 1) % count);
            }
        }
    });

    let active = current();
    let slides: Vec<(usize, String, String)> = images
        .into_iter()
        .enumerate()
        .map(|(index, src)| (index, src, format!("Showcase image {}", index + 1)))
        .collect();
    let dots: Vec<(usize, String)> = (0..count)
        .map(|index| (index, format!("Go to slide {}", index + 1)))
        .collect();
    let toggle_label = if playing() { "❚❚" } else { "▶" };

    rsx! {
        div {
            class: "carousel",
            for (index, src, alt) in slides {
                img {
                    class: if index == active { "carousel-slide active" } else { "carousel-slide" },
                    src: "{src}",
                    alt: "{alt}",
                }
            }
            div {
                class: "carousel-dots",
                for (index, label) in dots {
                    button {
                        class: if index == active { "carousel-dot active" } else { "carousel-dot" },
                        aria_label: "{label}",
                        onclick: move |_| current.set(index),
                    }
                }
            }
            button {
                class: "carousel-toggle",
                aria_label: if playing() { "Pause carousel" } else { "Play carousel" },
                onclick: move |_| playing.with_mut(|value| *value = !*value),
                "{toggle_label}"
            }
        }
    }
}
