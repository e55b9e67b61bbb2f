use dioxus::prelude::*;

use crate::regions::SignalRegions;
use crate::widgets::signup::{SignupForm as Signups, SignupOutcome};

/// Notification signup. Submitting only shows a local acknowledgement.
#[component]
pub fn SignupForm() -> Element {
    let regions = use_context::<SignalRegions>().signal();
    let mut signups = use_signal(Signups::new);
    let mut email = use_signal(String::new);
    let mut outcome = use_signal(|| Option::<SignupOutcome>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = signups.with_mut(|s| s.submit(&email()));
        if matches!(result, SignupOutcome::Acknowledged { .. }) {
            email.set(String::new());
        }
        outcome.set(Some(result));
    };

    let page = regions.read();
    let placeholder = page.attribute("notify-email", "placeholder");

    rsx! {
        form { class: "notify__form", onsubmit: on_submit,
            input {
                r#type: "text",
                class: "notify__input",
                name: "email",
                autocomplete: "email",
                "data-region": "notify-email",
                placeholder,
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            button { r#type: "submit", class: "button button--primary", "data-region": "notify-submit",
                {page.text("notify-submit")}
            }
        }

        {match outcome() {
            Some(SignupOutcome::Acknowledged { .. }) => rsx! {
                p { class: "notify__feedback notify__feedback--ok", role: "status", "data-region": "notify-thanks",
                    {page.text("notify-thanks")}
                }
            },
            Some(SignupOutcome::Invalid) => rsx! {
                p { class: "notify__feedback notify__feedback--error", role: "alert", "data-region": "notify-invalid",
                    {page.text("notify-invalid")}
                }
            },
            None => rsx! {},
        }}
    }
}
