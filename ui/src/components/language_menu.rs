use dioxus::prelude::*;

use crate::i18n::LanguageCode;
use crate::regions::SignalRegions;
use crate::views::LocaleEvent;

/// Toggle button plus option list. Picking an option hands the switch to the
/// page's locale coroutine, which syncs regions and closes the menu.
#[component]
pub fn LanguageMenu() -> Element {
    let mut regions = use_context::<SignalRegions>().signal();
    let locale = use_coroutine_handle::<LocaleEvent>();

    let page = regions.read();
    let open = page.page.language_menu_open;
    let active = page.page.active_language;
    let label = page.text("nav-language");
    let current = active.map(|l| l.code().to_uppercase()).unwrap_or_default();
    let menu_class = if open { "lang-menu lang-menu--open" } else { "lang-menu" };

    rsx! {
        div { class: menu_class,
            button {
                r#type: "button",
                class: "lang-menu__toggle",
                aria_haspopup: "listbox",
                aria_expanded: "{open}",
                onclick: move |_| regions.with_mut(|p| p.toggle_language_menu()),
                span { "data-region": "nav-language", "{label}" }
                span { class: "lang-menu__current", "{current}" }
            }

            if open {
                ul { class: "lang-menu__options", role: "listbox",
                    { LanguageCode::ALL.iter().map(|&language| {
                        let locale = locale.clone();
                        let selected = Some(language) == active;
                        let class = if selected {
                            "lang-menu__option lang-menu__option--active"
                        } else {
                            "lang-menu__option"
                        };
                        rsx! {
                            li { key: "{language}",
                                button {
                                    r#type: "button",
                                    role: "option",
                                    lang: language.code(),
                                    aria_selected: "{selected}",
                                    class,
                                    onclick: move |_| locale.send(LocaleEvent::Change(language)),
                                    {language.native_name()}
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
