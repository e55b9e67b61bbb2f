//! The page localizer: owns the current language, caches resources for the
//! session and pushes the current resource into every bound region.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::bindings::{RegionBinding, UpdateMode, REGION_BINDINGS};
use super::error::{LoadError, SyncError};
use super::language::LanguageCode;
use super::resource::TranslationResource;
use super::source::ResourceSource;
use crate::regions::RegionSync;

/// Result of a [`PageLocalizer::change_language`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageChange {
    /// The requested language was already current.
    Unchanged,
    Switched { from: Option<LanguageCode> },
}

/// What one sync pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub applied: usize,
    /// Regions left as they were: absent from the page, or no value for the key.
    pub skipped: usize,
}

pub struct PageLocalizer<S, D> {
    source: S,
    document: D,
    bindings: &'static [RegionBinding],
    cache: HashMap<LanguageCode, TranslationResource>,
    current: Option<LanguageCode>,
}

impl<S, D> PageLocalizer<S, D>
where
    S: ResourceSource,
    D: RegionSync,
{
    /// Localizer over the landing page's region table.
    pub fn new(source: S, document: D) -> Self {
        Self::with_bindings(source, document, REGION_BINDINGS)
    }

    pub fn with_bindings(source: S, document: D, bindings: &'static [RegionBinding]) -> Self {
        Self {
            source,
            document,
            bindings,
            cache: HashMap::new(),
            current: None,
        }
    }

    pub fn current(&self) -> Option<LanguageCode> {
        self.current
    }

    pub fn is_loaded(&self, language: LanguageCode) -> bool {
        self.cache.contains_key(&language)
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Make `language` current, fetching its resource first if this session has
    /// not loaded it yet. On failure nothing changes and the error is logged.
    pub async fn load_language(&mut self, language: LanguageCode) -> Result<(), LoadError> {
        if !self.cache.contains_key(&language) {
            let resource = match self.source.fetch(language).await {
                Ok(resource) => resource,
                Err(err) => {
                    warn!(%language, error = %err, "failed to load translation resource");
                    return Err(err);
                }
            };
            info!(%language, entries = resource.len(), "translation resource loaded");
            self.cache.insert(language, resource);
        }
        self.current = Some(language);
        Ok(())
    }

    /// Switch the page to `language`: sync every region, move the active
    /// indicator, set the document direction and close the language menu.
    pub async fn change_language(
        &mut self,
        language: LanguageCode,
    ) -> Result<LanguageChange, LoadError> {
        if self.current == Some(language) {
            return Ok(LanguageChange::Unchanged);
        }

        let previous = self.current;
        self.load_language(language).await?;

        // The resource was just cached, so sync cannot miss it.
        if let Err(err) = self.sync_regions() {
            warn!(error = %err, "sync after language switch failed");
        }
        self.document.set_active_language(language);
        self.document.set_direction(language.direction());
        self.document.set_lang(language);
        self.document.set_language_menu_open(false);

        Ok(LanguageChange::Switched { from: previous })
    }

    /// Apply the current resource to every bound region. Regions that are
    /// missing from the page, or whose key has no non-empty value, keep their
    /// existing content.
    pub fn sync_regions(&mut self) -> Result<SyncReport, SyncError> {
        let Some(resource) = self.current.and_then(|lang| self.cache.get(&lang)) else {
            warn!("sync requested before any translation resource was loaded");
            return Err(SyncError::NoCurrentResource);
        };

        let mut report = SyncReport::default();
        for binding in self.bindings {
            let Some(value) = resource.lookup(binding.key) else {
                debug!(key = binding.key, "no translation; region left unchanged");
                report.skipped += 1;
                continue;
            };

            let written = match binding.mode {
                UpdateMode::Text => self.document.set_text(binding.region, value),
                UpdateMode::Markup => self.document.set_markup(binding.region, value),
                UpdateMode::Placeholder => {
                    self.document
                        .set_attribute(binding.region, "placeholder", value)
                }
            };

            if written {
                report.applied += 1;
            } else {
                debug!(region = binding.region, "region not on page; skipped");
                report.skipped += 1;
            }
        }
        Ok(report)
    }
}
