//! Spreadsheet import: turns sheets into per-locale translation maps.
//!
//! The header row of the first sheet decides which column belongs to which
//! locale. Data rows are then read from every sheet, starting at
//! `translation_text_row_start_index`.
//!
//! ```text
//!        A        B        C          D            E
//!   1    Key      en       zh_CN      en.font      en.style
//!   2    hello    Hello    你好       NotoSans     Outline|Gold|32
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::locale::Locale;
use super::record::{TranslationMap, TranslationRecord};
use super::sheet::Sheet;
use super::store::DEFAULT_TEXT;

pub const DEFAULT_STYLE_DELIMITER: char = '|';

/// Inclusive range of column indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct ColumnRange {
    pub start: usize,
    pub end: usize,
}

impl ColumnRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_valid(&self) -> bool {
        self.end >= self.start
    }

    /// Columns of this range that exist in a sheet `column_count` wide.
    fn columns_within(&self, column_count: usize) -> impl Iterator<Item = usize> {
        let end = self.end.min(column_count.saturating_sub(1));
        (self.start..=end).filter(move |&c| c < column_count)
    }
}

impl From<[usize; 2]> for ColumnRange {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<ColumnRange> for [usize; 2] {
    fn from(range: ColumnRange) -> Self {
        [range.start, range.end]
    }
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Which discovered locales make it into the import.
///
/// A non-empty `targets` list wins over `excluded`; with both empty every
/// locale is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalePolicy {
    pub targets: Vec<Locale>,
    pub excluded: Vec<Locale>,
}

impl LocalePolicy {
    pub fn includes(&self, locale: &Locale) -> bool {
        if !self.targets.is_empty() {
            return self.targets.contains(locale);
        }
        !self.excluded.contains(locale)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    pub locale_row_index: usize,
    pub translation_key_column_index: usize,
    pub translation_text_row_start_index: usize,
    pub text_columns: ColumnRange,
    pub font_columns: Option<ColumnRange>,
    pub style_columns: Option<ColumnRange>,
    pub locale_policy: LocalePolicy,
    pub style_delimiter: char,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            locale_row_index: 0,
            translation_key_column_index: 0,
            translation_text_row_start_index: 1,
            text_columns: ColumnRange::new(1, 1),
            font_columns: None,
            style_columns: None,
            locale_policy: LocalePolicy::default(),
            style_delimiter: DEFAULT_STYLE_DELIMITER,
        }
    }
}

impl ImportSettings {
    /// Reject layouts where the ranges overlap or run backwards.
    pub fn validate(&self) -> Result<(), ParseError> {
        let invalid = |msg: String| Err(ParseError::InvalidSettings(msg));

        if self.translation_text_row_start_index <= self.locale_row_index {
            return invalid(format!(
                "translation text row start index ({}) must be greater than the locale row index ({})",
                self.translation_text_row_start_index, self.locale_row_index
            ));
        }
        if !self.text_columns.is_valid() {
            return invalid(format!(
                "translation text column range {} ends before it starts",
                self.text_columns
            ));
        }
        if self.text_columns.start <= self.translation_key_column_index {
            return invalid(format!(
                "translation text column range {} must start after the key column ({})",
                self.text_columns, self.translation_key_column_index
            ));
        }

        let mut previous = ("translation text", self.text_columns);
        for (name, range) in [("font", self.font_columns), ("style", self.style_columns)] {
            let Some(range) = range else { continue };
            if !range.is_valid() {
                return invalid(format!("{} column range {} ends before it starts", name, range));
            }
            if range.start <= previous.1.end {
                return invalid(format!(
                    "{} column range {} must start after the {} column range {}",
                    name, range, previous.0, previous.1
                ));
            }
            previous = (name, range);
        }

        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid import settings: {0}")]
    InvalidSettings(String),
    #[error("no sheets to import")]
    NoSheets,
    #[error(
        "invalid translation data format in sheet \"{sheet}\": need at least 2 rows and 2 columns, found {rows} row(s) and {columns} column(s)"
    )]
    InvalidShape {
        sheet: String,
        rows: usize,
        columns: usize,
    },
    #[error(
        "locale row {row} is outside sheet \"{sheet}\", which has {rows} row(s)"
    )]
    LocaleRowOutOfRange {
        sheet: String,
        row: usize,
        rows: usize,
    },
    #[error("no locale header in translation text columns {columns} of sheet \"{sheet}\"")]
    NoLocales { sheet: String, columns: ColumnRange },
    #[error("invalid locale header \"{value}\" in cell '{cell}'")]
    InvalidLocaleHeader { value: String, cell: String },
    #[error("locale \"{locale}\" is declared twice in the {field} columns (cell '{cell}')")]
    DuplicateLocale {
        locale: Locale,
        field: &'static str,
        cell: String,
    },
    #[error("found repeat translation key \"{key}\" for locale \"{locale}\" in cell '{cell}' of sheet \"{sheet}\"")]
    DuplicateKey {
        key: String,
        locale: Locale,
        sheet: String,
        cell: String,
    },
}

/// Result of a successful import: locale → (key → record), in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTranslations {
    locales: IndexMap<Locale, TranslationMap>,
}

impl ParsedTranslations {
    pub fn get(&self, locale: &Locale) -> Option<&TranslationMap> {
        self.locales.get(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.locales.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &TranslationMap)> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Translation keys in row order. Every locale shares the same key set.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.locales
            .values()
            .next()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    pub fn key_count(&self) -> usize {
        self.locales.values().next().map_or(0, TranslationMap::len)
    }

    pub fn into_inner(self) -> IndexMap<Locale, TranslationMap> {
        self.locales
    }
}

impl From<IndexMap<Locale, TranslationMap>> for ParsedTranslations {
    fn from(locales: IndexMap<Locale, TranslationMap>) -> Self {
        Self { locales }
    }
}

/// Column indices discovered on the header row.
#[derive(Debug, Default)]
struct ColumnLayout {
    text: IndexMap<Locale, usize>,
    font: IndexMap<Locale, usize>,
    style: IndexMap<Locale, usize>,
}

/// Import every sheet with `settings`.
///
/// Fails as a whole: on any error no partial result is returned. A header
/// row without a single locale in the text columns is an error; locales
/// that are all filtered out by the policy yield an empty result.
pub fn parse_sheets<S: Sheet>(
    sheets: &[S],
    settings: &ImportSettings,
) -> Result<ParsedTranslations, ParseError> {
    settings.validate()?;

    let Some(header_sheet) = sheets.first() else {
        return Err(ParseError::NoSheets);
    };
    for sheet in sheets {
        check_shape(sheet)?;
    }
    if settings.locale_row_index >= header_sheet.row_count() {
        return Err(ParseError::LocaleRowOutOfRange {
            sheet: header_sheet.name().to_string(),
            row: settings.locale_row_index,
            rows: header_sheet.row_count(),
        });
    }

    let layout = discover_columns(header_sheet, settings)?;
    tracing::debug!(
        locales = ?layout.text.keys().map(Locale::as_str).collect::<Vec<_>>(),
        font_columns = layout.font.len(),
        style_columns = layout.style.len(),
        "Discovered locale columns"
    );

    let mut locales: IndexMap<Locale, TranslationMap> = layout
        .text
        .keys()
        .map(|locale| (locale.clone(), TranslationMap::new()))
        .collect();

    for sheet in sheets {
        collect_rows(sheet, settings, &layout, &mut locales)?;
    }

    Ok(ParsedTranslations { locales })
}

fn check_shape<S: Sheet>(sheet: &S) -> Result<(), ParseError> {
    let (rows, columns) = (sheet.row_count(), sheet.column_count());
    if rows < 2 || columns < 2 {
        return Err(ParseError::InvalidShape {
            sheet: sheet.name().to_string(),
            rows,
            columns,
        });
    }
    Ok(())
}

fn discover_columns<S: Sheet>(
    sheet: &S,
    settings: &ImportSettings,
) -> Result<ColumnLayout, ParseError> {
    let row = settings.locale_row_index;
    let column_count = sheet.column_count();
    let mut layout = ColumnLayout::default();
    let mut any_header = false;

    for column in settings.text_columns.columns_within(column_count) {
        let value = sheet.cell(row, column).trim();
        if value.is_empty() {
            continue;
        }
        any_header = true;
        let locale = header_locale(value, row, column)?;
        if !settings.locale_policy.includes(&locale) {
            tracing::debug!(locale = %locale, "Skipping locale excluded by policy");
            continue;
        }
        if layout.text.contains_key(&locale) {
            return Err(ParseError::DuplicateLocale {
                locale,
                field: "translation text",
                cell: cell_reference(row, column),
            });
        }
        layout.text.insert(locale, column);
    }
    if !any_header {
        return Err(ParseError::NoLocales {
            sheet: sheet.name().to_string(),
            columns: settings.text_columns,
        });
    }

    let attribute_ranges = [
        ("font", settings.font_columns, &mut layout.font),
        ("style", settings.style_columns, &mut layout.style),
    ];
    for (field, range, columns) in attribute_ranges {
        let Some(range) = range else { continue };
        for column in range.columns_within(column_count) {
            let value = sheet.cell(row, column).trim();
            if value.is_empty() {
                continue;
            }
            let locale_part = value.split_once('.').map_or(value, |(locale, _)| locale);
            let locale = header_locale(locale_part.trim(), row, column)?;
            if !layout.text.contains_key(&locale) {
                tracing::debug!(locale = %locale, field, "Skipping column of unregistered locale");
                continue;
            }
            if columns.contains_key(&locale) {
                return Err(ParseError::DuplicateLocale {
                    locale,
                    field,
                    cell: cell_reference(row, column),
                });
            }
            columns.insert(locale, column);
        }
    }

    Ok(layout)
}

fn header_locale(value: &str, row: usize, column: usize) -> Result<Locale, ParseError> {
    Locale::new(value).map_err(|_| ParseError::InvalidLocaleHeader {
        value: value.to_string(),
        cell: cell_reference(row, column),
    })
}

fn collect_rows<S: Sheet>(
    sheet: &S,
    settings: &ImportSettings,
    layout: &ColumnLayout,
    locales: &mut IndexMap<Locale, TranslationMap>,
) -> Result<(), ParseError> {
    let key_column = settings.translation_key_column_index;

    for row in settings.translation_text_row_start_index..sheet.row_count() {
        let key = sheet.cell(row, key_column).trim();
        if key.is_empty() {
            continue;
        }

        for (locale, &column) in &layout.text {
            let Some(map) = locales.get_mut(locale) else {
                continue;
            };
            if map.contains_key(key) {
                return Err(ParseError::DuplicateKey {
                    key: key.to_string(),
                    locale: locale.clone(),
                    sheet: sheet.name().to_string(),
                    cell: cell_reference(row, key_column),
                });
            }

            let text = match sheet.cell(row, column) {
                "" => DEFAULT_TEXT,
                text => text,
            };
            map.insert(key.to_string(), TranslationRecord::new(text));
        }

        for (locale, &column) in &layout.font {
            let font = sheet.cell(row, column).trim();
            if let Some(record) = record_mut(locales, locale, key)
                && !font.is_empty()
            {
                record.font = Some(font.to_string());
            }
        }

        for (locale, &column) in &layout.style {
            let style = sheet.cell(row, column).trim();
            if let Some(record) = record_mut(locales, locale, key)
                && !style.is_empty()
            {
                record.style = style
                    .split(settings.style_delimiter)
                    .map(|param| param.trim().to_string())
                    .collect();
            }
        }
    }

    Ok(())
}

fn record_mut<'a>(
    locales: &'a mut IndexMap<Locale, TranslationMap>,
    locale: &Locale,
    key: &str,
) -> Option<&'a mut TranslationRecord> {
    locales.get_mut(locale).and_then(|map| map.get_mut(key))
}

/// Spreadsheet-style reference for a zero-based cell, e.g. `(1, 0)` → `A2`.
pub fn cell_reference(row: usize, column: usize) -> String {
    let mut letters = Vec::new();
    let mut n = column + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    format!("{}{}", String::from_utf8_lossy(&letters), row + 1)
}
