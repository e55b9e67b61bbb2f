//! Region Sync capability: reads and writes page regions by logical id.
//!
//! The localizer only talks to this trait, so it runs the same against the
//! in-memory [`PageRegions`] in tests and the signal-backed
//! [`SignalRegions`] that the Dioxus page renders from.

mod page;
mod signal;

pub use page::{PageAttributes, PageRegions, RegionBody, RegionContent};
pub use signal::SignalRegions;

use crate::i18n::{LanguageCode, TextDirection};

pub trait RegionSync {
    fn contains(&self, region: &str) -> bool;

    /// Snapshot of a region, `None` when the page has no such region.
    fn content(&self, region: &str) -> Option<RegionContent>;

    /// Each setter returns `false` when the region does not exist.
    fn set_text(&mut self, region: &str, value: &str) -> bool;
    fn set_markup(&mut self, region: &str, value: &str) -> bool;
    fn set_attribute(&mut self, region: &str, name: &str, value: &str) -> bool;

    fn set_direction(&mut self, direction: TextDirection);
    fn set_lang(&mut self, language: LanguageCode);
    /// Moves the active indicator in the language menu.
    fn set_active_language(&mut self, language: LanguageCode);
    fn set_language_menu_open(&mut self, open: bool);
}
