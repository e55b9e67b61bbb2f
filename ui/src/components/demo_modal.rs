use dioxus::prelude::*;

use crate::regions::SignalRegions;

/// Modal alert shown by the hero's demo button.
#[component]
pub fn DemoModal(open: Signal<bool>) -> Element {
    let regions = use_context::<SignalRegions>().signal();
    let mut open = open;

    if !open() {
        return rsx! {};
    }

    let page = regions.read();

    rsx! {
        div {
            class: "modal",
            onclick: move |_| open.set(false),
            div {
                class: "modal__dialog",
                role: "alertdialog",
                aria_modal: "true",
                aria_labelledby: "demo-title",
                onclick: move |evt| evt.stop_propagation(),
                h3 { id: "demo-title", class: "modal__title", "data-region": "demo-title",
                    {page.text("demo-title")}
                }
                div { class: "modal__body", "data-region": "demo-body",
                    dangerous_inner_html: page.html("demo-body"),
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    "data-region": "demo-close",
                    onclick: move |_| open.set(false),
                    {page.text("demo-close")}
                }
            }
        }
    }
}
