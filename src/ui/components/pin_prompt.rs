use dioxus::prelude::*;

/// Blocking prompt for the operator PIN. Purely a collection surface —
/// the caller owns the comparison and any rejection notice.
#[component]
pub fn PinPrompt(on_submit: EventHandler<String>, on_cancel: EventHandler<()>) -> Element {
    let mut pin_input = use_signal(String::new);

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal modal-narrow",
                h2 { class: "modal-title", "Enter Admin PIN to update rates" }
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(pin_input());
                    },
                    input {
                        class: "text-input",
                        r#type: "password",
                        inputmode: "numeric",
                        autofocus: true,
                        value: pin_input(),
                        oninput: move |evt| pin_input.set(evt.value()),
                    }
                    div { class: "modal-actions",
                        button {
                            class: "button-ghost",
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button { class: "button-primary", r#type: "submit", "Unlock" }
                    }
                }
            }
        }
    }
}
