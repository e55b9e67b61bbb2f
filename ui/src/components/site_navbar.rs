use dioxus::prelude::*;

use super::LanguageMenu;
use crate::regions::SignalRegions;

/// In-page anchors: (region id, section id).
const NAV_LINKS: [(&str, &str); 4] = [
    ("nav-home", "home"),
    ("nav-features", "features"),
    ("nav-gallery", "gallery"),
    ("nav-notify", "notify"),
];

/// Site header: brand, section anchors and the language menu.
///
/// Labels come from the shared [`SignalRegions`] provided by `LandingPage`,
/// so a language switch re-renders the header in place.
#[component]
pub fn SiteNavbar() -> Element {
    let regions = use_context::<SignalRegions>().signal();
    let page = regions.read();

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#home",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "Launchpad" }
                }

                nav { class: "navbar__links",
                    for (region, section) in NAV_LINKS {
                        a {
                            key: "{region}",
                            class: "navbar__link",
                            href: "#{section}",
                            "data-region": region,
                            {page.text(region)}
                        }
                    }
                }

                LanguageMenu {}
            }
        }
    }
}
