#![cfg(test)]
/*!
Stylesheet lint for the landing page.

Purpose:
- The `ui` components build class names in Rust (`ItemState::css_class`,
  active-state modifiers, the modal and language menu). If a refactor of
  `web/assets/main.css` drops or renames one of those selectors the page
  silently loses its layout or its transitions.

How it works:
- The stylesheet is embedded with `include_str!` and checked for a curated
  list of selectors.
- If you intentionally rename a selector, update the component markup and
  REQUIRED_SELECTORS together.
*/

use ui::widgets::gallery::ItemState;

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page-section {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Navbar & language menu
    ".navbar__links",
    ".navbar__link",
    ".lang-menu__options",
    ".lang-menu__option--active",
    // Countdown
    ".countdown__unit",
    ".countdown__value",
    // Slider
    ".slider__slide",
    ".slider__slide--active",
    // Gallery
    ".gallery__filter--active",
    ".gallery__grid",
    // Signup & modal
    ".notify__feedback--ok",
    ".notify__feedback--error",
    ".modal__dialog",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in main.css:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn gallery_states_are_styled() {
    for state in [ItemState::Visible, ItemState::Fading, ItemState::Collapsed] {
        let selector = format!(".{}", state.css_class());
        assert!(
            THEME_CSS.contains(&selector),
            "No rule for gallery state selector `{selector}`"
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Stylesheet appears unexpectedly small ({non_ws_len} non-whitespace chars) – \
         did the file get truncated or path change?"
    );
}
