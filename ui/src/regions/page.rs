use std::collections::{BTreeMap, HashMap};

use super::RegionSync;
use crate::i18n::{LanguageCode, RegionBinding, TextDirection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionBody {
    Text(String),
    Markup(String),
}

impl Default for RegionBody {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionContent {
    pub body: RegionBody,
    pub attributes: BTreeMap<String, String>,
}

impl RegionContent {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            body: RegionBody::Text(value.into()),
            attributes: BTreeMap::new(),
        }
    }

    /// Body rendered as HTML; text bodies are escaped.
    pub fn html(&self) -> String {
        match &self.body {
            RegionBody::Text(text) => escape_html(text),
            RegionBody::Markup(markup) => markup.clone(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Document-level state the localizer drives besides regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAttributes {
    pub direction: TextDirection,
    pub lang: Option<LanguageCode>,
    pub active_language: Option<LanguageCode>,
    pub language_menu_open: bool,
}

impl Default for PageAttributes {
    fn default() -> Self {
        Self {
            direction: TextDirection::Ltr,
            lang: None,
            active_language: None,
            language_menu_open: false,
        }
    }
}

/// In-memory page: the set of declared regions plus page attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRegions {
    regions: HashMap<String, RegionContent>,
    pub page: PageAttributes,
}

impl PageRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with an empty text region for every binding.
    pub fn from_bindings(bindings: &[RegionBinding]) -> Self {
        let mut page = Self::new();
        for binding in bindings {
            page.declare(binding.region, RegionContent::default());
        }
        page
    }

    pub fn declare(&mut self, region: impl Into<String>, content: RegionContent) {
        self.regions.insert(region.into(), content);
    }

    /// HTML for a region, empty when the region is absent.
    pub fn html(&self, region: &str) -> String {
        self.regions
            .get(region)
            .map(RegionContent::html)
            .unwrap_or_default()
    }

    /// Plain text of a region (markup bodies are returned verbatim).
    pub fn text(&self, region: &str) -> String {
        match self.regions.get(region).map(|c| &c.body) {
            Some(RegionBody::Text(text)) | Some(RegionBody::Markup(text)) => text.clone(),
            None => String::new(),
        }
    }

    pub fn attribute(&self, region: &str, name: &str) -> String {
        self.regions
            .get(region)
            .and_then(|c| c.attribute(name))
            .unwrap_or_default()
            .to_string()
    }

    pub fn toggle_language_menu(&mut self) {
        self.page.language_menu_open = !self.page.language_menu_open;
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl RegionSync for PageRegions {
    fn contains(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    fn content(&self, region: &str) -> Option<RegionContent> {
        self.regions.get(region).cloned()
    }

    fn set_text(&mut self, region: &str, value: &str) -> bool {
        match self.regions.get_mut(region) {
            Some(content) => {
                content.body = RegionBody::Text(value.to_string());
                true
            }
            None => false,
        }
    }

    fn set_markup(&mut self, region: &str, value: &str) -> bool {
        match self.regions.get_mut(region) {
            Some(content) => {
                content.body = RegionBody::Markup(value.to_string());
                true
            }
            None => false,
        }
    }

    fn set_attribute(&mut self, region: &str, name: &str, value: &str) -> bool {
        match self.regions.get_mut(region) {
            Some(content) => {
                content
                    .attributes
                    .insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn set_direction(&mut self, direction: TextDirection) {
        self.page.direction = direction;
    }

    fn set_lang(&mut self, language: LanguageCode) {
        self.page.lang = Some(language);
    }

    fn set_active_language(&mut self, language: LanguageCode) {
        self.page.active_language = Some(language);
    }

    fn set_language_menu_open(&mut self, open: bool) {
        self.page.language_menu_open = open;
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_report_absent_regions() {
        let mut page = PageRegions::new();
        assert!(!page.set_text("hero-title", "x"));
        assert!(!page.set_attribute("notify-email", "placeholder", "x"));

        page.declare("hero-title", RegionContent::default());
        assert!(page.set_markup("hero-title", "<em>Hi</em>"));
        assert_eq!(page.html("hero-title"), "<em>Hi</em>");
    }

    #[test]
    fn text_bodies_are_escaped_when_rendered() {
        let mut page = PageRegions::new();
        page.declare("cta", RegionContent::text("Tom & <Jerry>"));
        assert_eq!(page.html("cta"), "Tom &amp; &lt;Jerry&gt;");
        assert_eq!(page.text("cta"), "Tom & <Jerry>");
    }

    #[test]
    fn attributes_leave_body_untouched() {
        let mut page = PageRegions::new();
        page.declare("notify-email", RegionContent::text(""));
        page.set_attribute("notify-email", "placeholder", "you@example.com");
        assert_eq!(page.attribute("notify-email", "placeholder"), "you@example.com");
        assert_eq!(page.text("notify-email"), "");
        assert_eq!(page.attribute("notify-email", "title"), "");
    }
}
