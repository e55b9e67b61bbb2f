//! Static table tying page regions to resource keys.

/// How a resource value is written into its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Plain text content.
    Text,
    /// Value is inserted as markup.
    Markup,
    /// Value becomes the region's `placeholder` attribute.
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBinding {
    pub region: &'static str,
    pub key: &'static str,
    pub mode: UpdateMode,
}

const fn bind(region: &'static str, key: &'static str, mode: UpdateMode) -> RegionBinding {
    RegionBinding { region, key, mode }
}

use UpdateMode::{Markup, Placeholder, Text};

/// Every translatable region of the landing page.
pub const REGION_BINDINGS: &[RegionBinding] = &[
    // Navigation
    bind("nav-home", "nav_home", Text),
    bind("nav-features", "nav_features", Text),
    bind("nav-gallery", "nav_gallery", Text),
    bind("nav-notify", "nav_notify", Text),
    bind("nav-language", "nav_language", Text),
    // Hero
    bind("hero-title", "hero_title", Markup),
    bind("hero-subtitle", "hero_subtitle", Text),
    bind("hero-cta", "hero_cta", Text),
    bind("hero-demo", "hero_demo", Text),
    // Countdown
    bind("countdown-title", "countdown_title", Text),
    bind("countdown-days", "countdown_days", Text),
    bind("countdown-hours", "countdown_hours", Text),
    bind("countdown-minutes", "countdown_minutes", Text),
    bind("countdown-seconds", "countdown_seconds", Text),
    // Features slider
    bind("features-title", "features_title", Text),
    bind("slide-1", "slide_1", Markup),
    bind("slide-2", "slide_2", Markup),
    bind("slide-3", "slide_3", Markup),
    bind("slider-prev", "slider_prev", Text),
    bind("slider-next", "slider_next", Text),
    // Gallery
    bind("gallery-title", "gallery_title", Text),
    bind("filter-all", "filter_all", Text),
    bind("filter-web", "filter_web", Text),
    bind("filter-mobile", "filter_mobile", Text),
    bind("filter-branding", "filter_branding", Text),
    // Notification signup
    bind("notify-title", "notify_title", Text),
    bind("notify-text", "notify_text", Markup),
    bind("notify-email", "notify_placeholder", Placeholder),
    bind("notify-submit", "notify_submit", Text),
    bind("notify-thanks", "notify_thanks", Text),
    bind("notify-invalid", "notify_invalid", Text),
    // Demo modal
    bind("demo-title", "demo_title", Text),
    bind("demo-body", "demo_body", Markup),
    bind("demo-close", "demo_close", Text),
    // Footer
    bind("footer-copy", "footer_copy", Markup),
];

/// Binding for a region id, if the region is translated.
pub fn binding_for(region: &str) -> Option<&'static RegionBinding> {
    REGION_BINDINGS.iter().find(|b| b.region == region)
}
