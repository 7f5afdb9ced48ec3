//! Localization core: data model, spreadsheet import, asset codec and the
//! runtime lookup store.
//!
//! ## Module Structure
//!
//! - `locale`: `Locale` identifier and the predefined locales
//! - `record`: `TranslationRecord` and `TranslationMap`
//! - `sheet`: `Sheet` cell accessor and the in-memory `Table`
//! - `parser`: spreadsheet import into `ParsedTranslations`
//! - `codec`: versioned binary encoding of one locale's map
//! - `store`: `TranslationStore`, current locale and lookups
//! - `codegen`: Rust constants for locales and translation keys
//! - `characters`: character inventory for font tooling
//! - `error`: `LocalizationError`

pub mod characters;
pub mod codec;
pub mod codegen;
pub mod error;
pub mod locale;
pub mod parser;
pub mod record;
pub mod sheet;
pub mod store;

pub use characters::{CharacterSets, collect_characters};
pub use codec::{DecodeError, EncodeError, decode, encode};
pub use codegen::{CodegenError, generate_locales_module, generate_translation_keys_module};
pub use error::{LocalizationError, Result};
pub use locale::Locale;
pub use parser::{
    ColumnRange, ImportSettings, LocalePolicy, ParseError, ParsedTranslations, parse_sheets,
};
pub use record::{TranslationMap, TranslationRecord};
pub use sheet::{Sheet, Table};
pub use store::{
    DEFAULT_TEXT, LocaleChanged, Lookup, LookupMiss, SubscriptionId, TranslationStore,
};
