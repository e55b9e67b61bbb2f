use thiserror::Error;

use super::language::LanguageCode;

#[derive(Debug, Error)]
#[error("unsupported language code '{0}'")]
pub struct UnknownLanguage(pub String);

/// Why a translation resource could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {language} resource failed: {reason}")]
    Transport {
        language: LanguageCode,
        reason: String,
    },
    #[error("{language} resource responded with status {status}")]
    Status { language: LanguageCode, status: u16 },
    #[error("{language} resource is not a flat string map: {reason}")]
    Parse {
        language: LanguageCode,
        reason: String,
    },
    #[error("no {language} resource is bundled with the page")]
    NotFound { language: LanguageCode },
}

impl LoadError {
    pub fn language(&self) -> LanguageCode {
        match self {
            Self::Transport { language, .. }
            | Self::Status { language, .. }
            | Self::Parse { language, .. }
            | Self::NotFound { language } => *language,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    #[error("no translation resource is current; load a language first")]
    NoCurrentResource,
}
