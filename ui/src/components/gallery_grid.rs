use dioxus::prelude::*;

use crate::config::config;
use crate::core::timing;
use crate::regions::SignalRegions;
use crate::widgets::gallery::{GalleryFilter, WILDCARD};

struct GalleryItem {
    title: &'static str,
    category: &'static str,
}

const ITEMS: &[GalleryItem] = &[
    GalleryItem { title: "Storefront", category: "web" },
    GalleryItem { title: "Field Notes", category: "mobile" },
    GalleryItem { title: "Wordmark", category: "branding" },
    GalleryItem { title: "Dashboard", category: "web" },
    GalleryItem { title: "Ride Share", category: "mobile" },
    GalleryItem { title: "Packaging", category: "branding" },
];

/// Filter buttons: (label region, category token).
const FILTERS: [(&str, &str); 4] = [
    ("filter-all", WILDCARD),
    ("filter-web", "web"),
    ("filter-mobile", "mobile"),
    ("filter-branding", "branding"),
];

#[component]
pub fn GalleryGrid() -> Element {
    let regions = use_context::<SignalRegions>().signal();
    let filter = use_signal(|| GalleryFilter::new(ITEMS.iter().map(|item| item.category)));

    let page = regions.read();
    let state = filter();

    rsx! {
        div { class: "gallery",
            div { class: "gallery__filters", role: "toolbar",
                { FILTERS.iter().map(|&(region, token)| {
                    let class = if state.selected() == token {
                        "gallery__filter gallery__filter--active"
                    } else {
                        "gallery__filter"
                    };
                    rsx! {
                        button {
                            key: "{region}",
                            r#type: "button",
                            class,
                            "data-region": region,
                            "data-filter": token,
                            onclick: move |_| select_category(filter, token),
                            {page.text(region)}
                        }
                    }
                })}
            }

            div { class: "gallery__grid",
                { ITEMS.iter().enumerate().map(|(index, item)| {
                    let item_state = state.state(index).map(|s| s.css_class()).unwrap_or_default();
                    let thumb = format!("gallery__thumb gallery__thumb--{}", item.category);
                    rsx! {
                        figure {
                            key: "{index}",
                            class: "gallery__item {item_state}",
                            "data-category": item.category,
                            div { class: thumb }
                            figcaption { class: "gallery__caption", {item.title} }
                        }
                    }
                })}
            }
        }
    }
}

fn select_category(mut filter: Signal<GalleryFilter>, token: &'static str) {
    filter.with_mut(|f| f.select(token));
    let fade_ms = config().gallery_fade_ms;
    // Collapse after a fixed delay, not on transition end.
    spawn(async move {
        timing::sleep_ms(fade_ms).await;
        filter.with_mut(|f| f.collapse());
    });
}
