//! Runtime translation tables.
//!
//! A [`TranslationStore`] is an ordinary value: the application builds one,
//! loads locale blobs into it and hands references to whatever renders text.
//! There is no global instance and no internal locking.

use std::{collections::HashMap, fmt};

use super::codec;
use super::error::{LocalizationError, Result};
use super::locale::Locale;
use super::record::{TranslationMap, TranslationRecord};

/// Text returned when no translation can be found.
pub const DEFAULT_TEXT: &str = "NoString";

/// Payload delivered to observers when the current locale changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChanged {
    pub previous: Option<Locale>,
    pub current: Locale,
}

/// Handle returned by [`TranslationStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Why a lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMiss {
    NoCurrentLocale,
    LocaleNotLoaded { locale: Locale },
    KeyNotFound { locale: Locale, key: String },
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMiss::NoCurrentLocale => write!(f, "No current locale is set"),
            LookupMiss::LocaleNotLoaded { locale } => {
                write!(f, "No translation texts for locale [{}]", locale)
            }
            LookupMiss::KeyNotFound { locale, key } => write!(
                f,
                "No translation text for key [{}] of locale [{}]",
                key, locale
            ),
        }
    }
}

/// Outcome of a lookup, before any fallback is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a TranslationRecord),
    Miss(LookupMiss),
}

impl<'a> Lookup<'a> {
    pub fn record(&self) -> Option<&'a TranslationRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::Miss(_) => None,
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            Lookup::Found(record) => &record.text,
            Lookup::Miss(_) => DEFAULT_TEXT,
        }
    }

    fn logged(self) -> Option<&'a TranslationRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::Miss(miss) => {
                tracing::warn!("{}", miss);
                None
            }
        }
    }
}

type Observer = Box<dyn FnMut(&LocaleChanged)>;

#[derive(Default)]
pub struct TranslationStore {
    tables: HashMap<Locale, TranslationMap>,
    current_locale: Option<Locale>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for TranslationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationStore")
            .field("locales", &self.tables.keys().collect::<Vec<_>>())
            .field("current_locale", &self.current_locale)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_locale(&self) -> Option<&Locale> {
        self.current_locale.as_ref()
    }

    /// Switch the current locale and notify observers in subscription order.
    ///
    /// Returns `false` without notifying anyone when `locale` is already
    /// current.
    pub fn set_current_locale(&mut self, locale: Locale) -> bool {
        if self.current_locale.as_ref() == Some(&locale) {
            return false;
        }

        let event = LocaleChanged {
            previous: self.current_locale.replace(locale.clone()),
            current: locale,
        };
        tracing::debug!(locale = %event.current, "Current locale changed");
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
        true
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&LocaleChanged) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Decode `blob` and install it as the data of `locale`.
    ///
    /// Replaces whatever was loaded for that locale before. On a decode
    /// failure nothing changes. Returns the number of loaded entries.
    pub fn load_locale_data(&mut self, locale: Locale, blob: &[u8]) -> Result<usize> {
        let map = codec::decode(blob).inspect_err(|err| {
            tracing::error!(locale = %locale, "Failed to decode locale data: {}", err);
        })?;
        let count = map.len();
        self.install(locale, map);
        Ok(count)
    }

    /// Install an already-decoded map, replacing any previous data.
    pub fn install(&mut self, locale: Locale, map: TranslationMap) {
        tracing::debug!(locale = %locale, entries = map.len(), "Installed locale data");
        self.tables.insert(locale, map);
    }

    pub fn is_loaded(&self, locale: &Locale) -> bool {
        self.tables.contains_key(locale)
    }

    /// Loaded locales, sorted.
    pub fn loaded_locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.tables.keys().collect();
        locales.sort();
        locales
    }

    pub fn resolve(&self, locale: &Locale, key: &str) -> Result<Lookup<'_>> {
        require_key(key)?;

        let Some(map) = self.tables.get(locale) else {
            return Ok(Lookup::Miss(LookupMiss::LocaleNotLoaded {
                locale: locale.clone(),
            }));
        };
        Ok(match map.get(key) {
            Some(record) => Lookup::Found(record),
            None => Lookup::Miss(LookupMiss::KeyNotFound {
                locale: locale.clone(),
                key: key.to_string(),
            }),
        })
    }

    pub fn resolve_current(&self, key: &str) -> Result<Lookup<'_>> {
        require_key(key)?;

        match &self.current_locale {
            Some(locale) => self.resolve(locale, key),
            None => Ok(Lookup::Miss(LookupMiss::NoCurrentLocale)),
        }
    }

    /// Record for `key` in `locale`; a miss is logged and answered with `None`.
    pub fn translation(&self, locale: &Locale, key: &str) -> Result<Option<&TranslationRecord>> {
        Ok(self.resolve(locale, key)?.logged())
    }

    pub fn current_translation(&self, key: &str) -> Result<Option<&TranslationRecord>> {
        Ok(self.resolve_current(key)?.logged())
    }

    /// Text for `key` in `locale`, or [`DEFAULT_TEXT`] on a miss.
    pub fn translation_text(&self, locale: &Locale, key: &str) -> Result<&str> {
        Ok(self
            .translation(locale, key)?
            .map_or(DEFAULT_TEXT, |record| record.text.as_str()))
    }

    pub fn current_translation_text(&self, key: &str) -> Result<&str> {
        Ok(self
            .current_translation(key)?
            .map_or(DEFAULT_TEXT, |record| record.text.as_str()))
    }

    /// Like [`translation_text`](Self::translation_text) for a raw locale string.
    pub fn translation_text_for(&self, locale: &str, key: &str) -> Result<&str> {
        let locale = Locale::new(locale)?;
        self.translation_text(&locale, key)
    }
}

fn require_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(LocalizationError::InvalidArgument("key"));
    }
    Ok(())
}
