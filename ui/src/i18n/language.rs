//! The closed set of page languages and their text direction.

use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use super::error::UnknownLanguage;

/// A language the landing page ships a translation resource for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageCode {
    Ar,
    Fr,
    En,
}

/// Writing direction of the page for a given language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the `dir` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl LanguageCode {
    /// Menu order.
    pub const ALL: [LanguageCode; 3] = [Self::Ar, Self::Fr, Self::En];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Label shown in the language menu.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Ar => "العربية",
            Self::Fr => "Français",
            Self::En => "English",
        }
    }

    /// Arabic is the only right-to-left language on the page.
    pub fn direction(&self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            Self::Fr | Self::En => TextDirection::Ltr,
        }
    }

    /// Map a BCP-47 identifier (`fr-CA`, `ar-EG`) onto the supported set by its
    /// primary language subtag.
    pub fn from_tag(tag: &LanguageIdentifier) -> Option<Self> {
        tag.language.as_str().parse().ok()
    }

    /// First requested tag that maps onto a supported language, else `fallback`.
    pub fn negotiate(requested: &[LanguageIdentifier], fallback: LanguageCode) -> Self {
        requested
            .iter()
            .find_map(Self::from_tag)
            .unwrap_or(fallback)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Self::Ar),
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl<'de> serde::Deserialize<'de> for LanguageCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Preferred languages reported by the browser (`navigator.languages`).
#[cfg(target_arch = "wasm32")]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

/// Preferred languages reported by the operating system.
#[cfg(not(target_arch = "wasm32"))]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LanguageIdentifier {
        s.parse().expect("valid language tag")
    }

    #[test]
    fn only_arabic_is_right_to_left() {
        assert_eq!(LanguageCode::Ar.direction(), TextDirection::Rtl);
        assert_eq!(LanguageCode::Fr.direction(), TextDirection::Ltr);
        assert_eq!(LanguageCode::En.direction(), TextDirection::Ltr);
        assert_eq!(TextDirection::Rtl.as_attr(), "rtl");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("AR".parse::<LanguageCode>().unwrap(), LanguageCode::Ar);
        assert_eq!(" fr ".parse::<LanguageCode>().unwrap(), LanguageCode::Fr);
        let err = "de".parse::<LanguageCode>().unwrap_err();
        assert!(err.to_string().contains("de"));
    }

    #[test]
    fn codes_round_trip_through_display() {
        for code in LanguageCode::ALL {
            assert_eq!(code.to_string().parse::<LanguageCode>().unwrap(), code);
        }
    }

    #[test]
    fn regional_tags_map_to_primary_language() {
        assert_eq!(LanguageCode::from_tag(&tag("fr-CA")), Some(LanguageCode::Fr));
        assert_eq!(LanguageCode::from_tag(&tag("ar-EG")), Some(LanguageCode::Ar));
        assert_eq!(LanguageCode::from_tag(&tag("de-DE")), None);
    }

    #[test]
    fn negotiation_skips_unsupported_tags() {
        let requested = vec![tag("de-DE"), tag("ar-MA"), tag("en-US")];
        assert_eq!(
            LanguageCode::negotiate(&requested, LanguageCode::En),
            LanguageCode::Ar
        );
        assert_eq!(
            LanguageCode::negotiate(&[tag("ja")], LanguageCode::Fr),
            LanguageCode::Fr
        );
    }

    #[test]
    fn os_preferences_negotiate_to_a_supported_language() {
        let chosen = LanguageCode::negotiate(&requested_languages(), LanguageCode::En);
        assert!(LanguageCode::ALL.contains(&chosen));
    }
}
