use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::debug;

use crate::components::{
    CountdownDisplay, DemoModal, GalleryGrid, SignupForm, SiteNavbar, Slideshow,
};
use crate::config::config;
use crate::i18n::{
    requested_languages, LanguageChange, LanguageCode, PageLocalizer, REGION_BINDINGS,
};
use crate::regions::{PageRegions, RegionSync, SignalRegions};

/// Requests handled by the page's locale coroutine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleEvent {
    Change(LanguageCode),
}

/// The whole landing page.
///
/// Owns the region state every section renders from and the single
/// [`PageLocalizer`], which lives inside a coroutine so language switches are
/// applied one at a time in the order they were requested.
#[component]
pub fn LandingPage() -> Element {
    let settings = config();
    let regions = use_signal(|| PageRegions::from_bindings(REGION_BINDINGS));
    let shared = use_context_provider(|| SignalRegions(regions));

    let locale = use_coroutine(move |mut rx: UnboundedReceiver<LocaleEvent>| async move {
        let mut localizer = PageLocalizer::new(settings.resources.source(), shared);

        while let Some(event) = rx.next().await {
            match event {
                LocaleEvent::Change(language) => {
                    match localizer.change_language(language).await {
                        Ok(LanguageChange::Switched { from }) => {
                            debug!(?from, to = %language, "page language switched");
                        }
                        Ok(LanguageChange::Unchanged) => {
                            localizer.document_mut().set_language_menu_open(false);
                        }
                        // Already logged by the localizer; the page keeps its
                        // previous language.
                        Err(_) => {}
                    }
                }
            }
        }
    });

    use_hook(move || {
        let initial = LanguageCode::negotiate(&requested_languages(), settings.default_language);
        locale.send(LocaleEvent::Change(initial));
    });

    // Mirror direction and language onto <html> so the whole document flips.
    use_effect(move || {
        let attrs = regions.read().page.clone();
        let dir = attrs.direction.as_attr();
        let lang = attrs.lang.map(|l| l.code()).unwrap_or("en");
        let _ = document::eval(&format!(
            "document.documentElement.setAttribute('dir', '{dir}');\
             document.documentElement.setAttribute('lang', '{lang}');"
        ));
    });

    let demo_open = use_signal(|| false);
    let mut notify_section = use_signal(|| Option::<Rc<MountedData>>::None);

    let scroll_to_notify = move |_: MouseEvent| {
        if let Some(section) = notify_section() {
            spawn(async move {
                let _ = section.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    };
    let mut open_demo = demo_open;

    let page = regions.read();
    let dir = page.page.direction.as_attr();
    let lang = page.page.lang.map(|l| l.code()).unwrap_or("en");

    rsx! {
        div { class: "landing", dir, lang,
            SiteNavbar {}

            main {
                section { id: "home", class: "hero",
                    h1 { class: "hero__title", "data-region": "hero-title",
                        dangerous_inner_html: page.html("hero-title"),
                    }
                    p { class: "hero__subtitle", "data-region": "hero-subtitle",
                        {page.text("hero-subtitle")}
                    }
                    div { class: "hero__actions",
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            "data-region": "hero-cta",
                            onclick: scroll_to_notify,
                            {page.text("hero-cta")}
                        }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            "data-region": "hero-demo",
                            onclick: move |_| open_demo.set(true),
                            {page.text("hero-demo")}
                        }
                    }
                    CountdownDisplay {}
                }

                section { id: "features", class: "page-section features",
                    h2 { class: "section__title", "data-region": "features-title",
                        {page.text("features-title")}
                    }
                    Slideshow {}
                }

                section { id: "gallery", class: "page-section",
                    h2 { class: "section__title", "data-region": "gallery-title",
                        {page.text("gallery-title")}
                    }
                    GalleryGrid {}
                }

                section {
                    id: "notify",
                    class: "page-section notify",
                    onmounted: move |evt| notify_section.set(Some(evt.data())),
                    h2 { class: "section__title", "data-region": "notify-title",
                        {page.text("notify-title")}
                    }
                    p { class: "notify__text", "data-region": "notify-text",
                        dangerous_inner_html: page.html("notify-text"),
                    }
                    SignupForm {}
                }
            }

            footer { class: "footer",
                p { "data-region": "footer-copy", dangerous_inner_html: page.html("footer-copy") }
            }

            DemoModal { open: demo_open }
        }
    }
}
