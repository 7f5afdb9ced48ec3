use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::{LocalizationError, Result};

/// Predefined locales, as `(constant name, canonical string)`.
///
/// The constant names are what the generator emits for these locales.
pub const WELL_KNOWN_LOCALES: &[(&str, &str)] = &[
    ("ARABIC", "ar"),
    ("SAUDI_ARABIA", "ar_SA"),
    ("CHINESE", "zh"),
    ("SIMPLIFIED_CHINESE", "zh_CN"),
    ("TRADITIONAL_CHINESE", "zh_TW"),
    ("ENGLISH", "en"),
    ("CANADA", "en_CA"),
    ("UK", "en_GB"),
    ("US", "en_US"),
    ("FRENCH", "fr"),
    ("CANADA_FRENCH", "fr_CA"),
    ("FRANCE", "fr_FR"),
    ("GERMAN", "de"),
    ("GERMANY", "de_DE"),
    ("ITALIAN", "it"),
    ("ITALY", "it_IT"),
    ("JAPANESE", "ja"),
    ("JAPAN", "ja_JP"),
    ("KOREAN", "ko"),
    ("KOREA", "ko_KR"),
    ("PORTUGUESE", "pt"),
    ("PORTUGAL", "pt_PT"),
    ("RUSSIAN", "ru"),
    ("RUSSIA", "ru_RU"),
    ("SPANISH", "es"),
    ("SPAIN", "es_ES"),
    ("THAI", "th"),
    ("THAILAND", "th_TH"),
];

/// A `language[_COUNTRY]` identifier used as the partition key for translations.
///
/// `-` is accepted as a separator and normalized to `_`. Equality, ordering and
/// hashing all go through the canonical string, so `Locale::new("zh-CN")` and
/// `Locale::new("zh_CN")` are interchangeable map keys.
///
/// ```
/// use locsheet::core::Locale;
///
/// let locale = Locale::new("zh-CN").unwrap();
/// assert_eq!(locale.to_string(), "zh_CN");
/// assert_eq!(locale.language(), "zh");
/// assert_eq!(locale.country(), Some("CN"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    canonical: String,
}

impl Locale {
    /// Surrounding whitespace is ignored; empty input is rejected.
    pub fn new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(LocalizationError::InvalidArgument("locale"));
        }

        Ok(Self {
            canonical: raw.replace('-', "_"),
        })
    }

    /// Look up a predefined locale by its constant name (e.g. `"ENGLISH"`).
    pub fn well_known(name: &str) -> Option<Self> {
        WELL_KNOWN_LOCALES
            .iter()
            .find(|(constant, _)| *constant == name)
            .map(|(_, canonical)| Self {
                canonical: (*canonical).to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn language(&self) -> &str {
        self.canonical
            .split('_')
            .next()
            .unwrap_or(self.canonical.as_str())
    }

    pub fn country(&self) -> Option<&str> {
        self.canonical.split('_').nth(1).filter(|s| !s.is_empty())
    }

    /// Name of the predefined constant matching this locale, if any.
    pub fn well_known_name(&self) -> Option<&'static str> {
        WELL_KNOWN_LOCALES
            .iter()
            .find(|(_, canonical)| *canonical == self.canonical)
            .map(|(constant, _)| *constant)
    }

    /// Identifier used when emitting a constant for this locale.
    ///
    /// Falls back to the upper-cased canonical string for locales without a
    /// predefined name, so `pt_BR` becomes `PT_BR`.
    pub fn constant_name(&self) -> String {
        match self.well_known_name() {
            Some(name) => name.to_string(),
            None => self.canonical.to_uppercase(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Locale {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Locale {
    type Error = LocalizationError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocalizationError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.canonical
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}
