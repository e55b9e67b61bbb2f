use dioxus::prelude::*;

use crate::config::config;
use crate::core::timing;
use crate::regions::SignalRegions;
use crate::widgets::slider::SlideViewer;

const SLIDES: [&str; 3] = ["slide-1", "slide-2", "slide-3"];

/// Feature slides with prev/next buttons and an auto-advance timer.
///
/// Manual navigation restarts the timer task, so the next auto-advance comes
/// one full interval after the click. Ticks are also armed with the viewer's
/// epoch, so a tick already in flight when the user clicks is dropped.
#[component]
pub fn Slideshow() -> Element {
    let regions = use_context::<SignalRegions>().signal();
    let mut viewer = use_signal(|| SlideViewer::new(SLIDES.len()));
    let interval_ms = config().slide_interval_ms;

    let mut auto_advance = use_future(move || async move {
        loop {
            let armed = viewer.peek().epoch();
            timing::sleep_ms(interval_ms).await;
            viewer.with_mut(|v| v.auto_advance(armed));
        }
    });

    let page = regions.read();
    let state = viewer();
    let position = format!("{} / {}", state.current() + 1, state.count());

    rsx! {
        div { class: "slider",
            div { class: "slider__track",
                { SLIDES.iter().enumerate().map(|(index, region)| {
                    let active = state.is_active(index);
                    let hidden = !active;
                    let class = if active {
                        "slider__slide slider__slide--active"
                    } else {
                        "slider__slide"
                    };
                    rsx! {
                        article {
                            key: "{region}",
                            class,
                            "data-region": *region,
                            aria_hidden: "{hidden}",
                            dangerous_inner_html: page.html(region),
                        }
                    }
                })}
            }

            div { class: "slider__controls",
                button {
                    r#type: "button",
                    class: "slider__prev",
                    "data-region": "slider-prev",
                    onclick: move |_| {
                        viewer.with_mut(|v| v.previous());
                        auto_advance.restart();
                    },
                    {page.text("slider-prev")}
                }
                span { class: "slider__position", "{position}" }
                button {
                    r#type: "button",
                    class: "slider__next",
                    "data-region": "slider-next",
                    onclick: move |_| {
                        viewer.with_mut(|v| v.next());
                        auto_advance.restart();
                    },
                    {page.text("slider-next")}
                }
            }
        }
    }
}
