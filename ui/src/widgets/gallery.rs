//! Category filter for the gallery grid.
//!
//! Filtering is two-phase: `select` fades out non-matching items and the
//! caller schedules `collapse` after a fixed delay, whether or not the fade
//! has visually finished.

/// Category token that matches every item.
pub const WILDCARD: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Visible,
    /// Fading out; still takes up space.
    Fading,
    Collapsed,
}

impl ItemState {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Visible => "gallery__item--visible",
            Self::Fading => "gallery__item--fading",
            Self::Collapsed => "gallery__item--collapsed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryFilter {
    categories: Vec<String>,
    states: Vec<ItemState>,
    selected: String,
}

impl GalleryFilter {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let states = vec![ItemState::Visible; categories.len()];
        Self {
            categories,
            states,
            selected: WILDCARD.to_string(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn state(&self, index: usize) -> Option<ItemState> {
        self.states.get(index).copied()
    }

    /// Phase one: show matching items, start fading the rest. Returns how
    /// many items are now fading.
    pub fn select(&mut self, token: &str) -> usize {
        self.selected = token.to_string();
        let show_all = token == WILDCARD;
        let mut fading = 0;
        for (category, state) in self.categories.iter().zip(self.states.iter_mut()) {
            if show_all || category == token {
                *state = ItemState::Visible;
            } else if *state != ItemState::Collapsed {
                *state = ItemState::Fading;
                fading += 1;
            }
        }
        fading
    }

    /// Phase two: collapse every item still fading.
    pub fn collapse(&mut self) {
        for state in &mut self.states {
            if *state == ItemState::Fading {
                *state = ItemState::Collapsed;
            }
        }
    }

    pub fn visible_items(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == ItemState::Visible)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> GalleryFilter {
        GalleryFilter::new(["web", "mobile", "web", "branding"])
    }

    #[test]
    fn specific_category_hides_others_after_collapse() {
        let mut filter = gallery();
        assert_eq!(filter.select("web"), 2);
        assert_eq!(filter.state(1), Some(ItemState::Fading));

        filter.collapse();
        assert_eq!(filter.visible_items(), vec![0, 2]);
        assert_eq!(filter.state(3), Some(ItemState::Collapsed));
    }

    #[test]
    fn wildcard_shows_everything() {
        let mut filter = gallery();
        filter.select("mobile");
        filter.collapse();
        assert_eq!(filter.select(WILDCARD), 0);
        filter.collapse();
        assert_eq!(filter.visible_items(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn late_collapse_spares_items_shown_again() {
        let mut filter = gallery();
        filter.select("branding");
        filter.select("web");
        // Collapse from the first selection fires after the second one.
        filter.collapse();
        assert_eq!(filter.visible_items(), vec![0, 2]);
    }

    #[test]
    fn unknown_category_hides_all() {
        let mut filter = gallery();
        filter.select("print");
        filter.collapse();
        assert!(filter.visible_items().is_empty());
        assert_eq!(filter.selected(), "print");
    }
}
