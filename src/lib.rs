//! Locsheet - spreadsheet-driven localization
//!
//! Locsheet imports a translation spreadsheet (one row per key, one column per
//! locale), writes a compact binary asset per locale and generates Rust
//! constants for the locale and key names. At runtime a
//! [`TranslationStore`](core::TranslationStore) loads those assets and resolves
//! keys against the current locale.
//!
//! ## Module Structure
//!
//! - `core`: Locale identifiers, sheet parsing, the binary codec, the runtime store
//! - `sources`: Reading CSV, TSV and JSON workbooks into sheets
//! - `assets`: Locale asset files on disk
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer

pub mod assets;
pub mod cli;
pub mod config;
pub mod core;
pub mod sources;
