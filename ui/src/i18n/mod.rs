//! Internationalization for the landing page.
//!
//! - `language`: the closed set of languages and their text direction
//! - `resource`: flat key -> string tables (one JSON file per language)
//! - `source`: where tables come from (HTTP or bundled with `rust-embed`)
//! - `bindings`: the fixed region -> key table
//! - `localizer`: session cache, current language and region sync
//!
//! Resource files live under `ui/lang/<code>.json` and are served at
//! `lang/<code>.json` relative to the site root.

mod bindings;
mod error;
mod language;
mod localizer;
mod resource;
mod source;

pub use bindings::{binding_for, RegionBinding, UpdateMode, REGION_BINDINGS};
pub use error::{LoadError, SyncError, UnknownLanguage};
pub use language::{requested_languages, LanguageCode, TextDirection};
pub use localizer::{LanguageChange, PageLocalizer, SyncReport};
pub use resource::TranslationResource;
pub use source::{resource_path, ConfiguredSource, EmbeddedSource, HttpSource, ResourceSource};
