use dioxus::prelude::*;
use time::Duration;

use crate::config::config;
use crate::core::timing;
use crate::regions::SignalRegions;
use crate::widgets::countdown::{Countdown, CountdownParts};

#[component]
pub fn CountdownDisplay() -> Element {
    let regions = use_context::<SignalRegions>().signal();
    let settings = config();

    // Deadline is fixed when the page session starts.
    let countdown = use_hook(|| {
        Countdown::starting_at(
            timing::now(),
            Duration::seconds(settings.countdown_offset_secs),
        )
    });
    let mut remaining = use_signal(|| countdown.remaining(timing::now()));
    let tick_ms = settings.countdown_tick_ms;

    use_future(move || async move {
        loop {
            timing::sleep_ms(tick_ms).await;
            let now = timing::now();
            remaining.set(countdown.remaining(now));
            if countdown.is_finished(now) {
                break;
            }
        }
    });

    let page = regions.read();
    let parts = remaining();
    let units = [
        ("countdown-days", parts.days),
        ("countdown-hours", parts.hours),
        ("countdown-minutes", parts.minutes),
        ("countdown-seconds", parts.seconds),
    ];

    rsx! {
        div { class: "countdown",
            h2 { class: "countdown__title", "data-region": "countdown-title",
                {page.text("countdown-title")}
            }
            div { class: "countdown__units", role: "timer",
                { units.iter().map(|&(region, value)| {
                    let digits = CountdownParts::padded(value);
                    rsx! {
                        div { key: "{region}", class: "countdown__unit",
                            span { class: "countdown__value", "{digits}" }
                            span { class: "countdown__label", "data-region": region,
                                {page.text(region)}
                            }
                        }
                    }
                })}
            }
        }
    }
}
