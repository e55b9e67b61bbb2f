use dioxus::prelude::*;

use super::{PageRegions, RegionContent, RegionSync};
use crate::i18n::{LanguageCode, TextDirection};

/// [`PageRegions`] held in a Dioxus signal so that every write re-renders the
/// components reading it.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalRegions(pub Signal<PageRegions>);

impl SignalRegions {
    pub fn signal(&self) -> Signal<PageRegions> {
        self.0
    }
}

impl RegionSync for SignalRegions {
    fn contains(&self, region: &str) -> bool {
        self.0.peek().contains(region)
    }

    fn content(&self, region: &str) -> Option<RegionContent> {
        self.0.peek().content(region)
    }

    fn set_text(&mut self, region: &str, value: &str) -> bool {
        self.0.with_mut(|page| page.set_text(region, value))
    }

    fn set_markup(&mut self, region: &str, value: &str) -> bool {
        self.0.with_mut(|page| page.set_markup(region, value))
    }

    fn set_attribute(&mut self, region: &str, name: &str, value: &str) -> bool {
        self.0.with_mut(|page| page.set_attribute(region, name, value))
    }

    fn set_direction(&mut self, direction: TextDirection) {
        self.0.with_mut(|page| page.set_direction(direction));
    }

    fn set_lang(&mut self, language: LanguageCode) {
        self.0.with_mut(|page| page.set_lang(language));
    }

    fn set_active_language(&mut self, language: LanguageCode) {
        self.0.with_mut(|page| page.set_active_language(language));
    }

    fn set_language_menu_open(&mut self, open: bool) {
        self.0.with_mut(|page| page.set_language_menu_open(open));
    }
}
