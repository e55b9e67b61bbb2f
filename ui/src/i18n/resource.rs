//! Flat key -> string translation tables.

use std::collections::HashMap;

use serde::Deserialize;

use super::error::LoadError;
use super::language::LanguageCode;

/// One language's translations. Values are plain strings; some regions
/// interpret them as markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationResource {
    entries: HashMap<String, String>,
}

impl TranslationResource {
    pub fn from_json(language: LanguageCode, body: &str) -> Result<Self, LoadError> {
        serde_json::from_str(body).map_err(|err| LoadError::Parse {
            language,
            reason: err.to_string(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key` only when it is present and non-empty.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationResource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_object() {
        let res =
            TranslationResource::from_json(LanguageCode::En, r#"{"hero_title":"Welcome"}"#)
                .unwrap();
        assert_eq!(res.get("hero_title"), Some("Welcome"));
        assert_eq!(res.len(), 1);
    }

    #[test]
    fn rejects_nested_values() {
        let err = TranslationResource::from_json(LanguageCode::Fr, r#"{"hero":{"title":"x"}}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { language: LanguageCode::Fr, .. }));
    }

    #[test]
    fn lookup_ignores_empty_values() {
        let res: TranslationResource = [("a", ""), ("b", "B")].into_iter().collect();
        assert_eq!(res.get("a"), Some(""));
        assert_eq!(res.lookup("a"), None);
        assert_eq!(res.lookup("b"), Some("B"));
        assert_eq!(res.lookup("missing"), None);
    }
}
