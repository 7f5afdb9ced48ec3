use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{
    CharacterSets, ColumnRange, ImportSettings, Locale, LocalePolicy,
    parser::DEFAULT_STYLE_DELIMITER,
};

pub const CONFIG_FILE_NAME: &str = ".locsheetrc.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_sheet_path")]
    pub sheet_path: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: String,
    /// Wrap generated constants in `pub mod <scriptModule>`.
    #[serde(default)]
    pub script_module: Option<String>,
    #[serde(default)]
    pub locale_row_index: usize,
    #[serde(default)]
    pub translation_key_column_index: usize,
    #[serde(default = "default_translation_text_row_start_index")]
    pub translation_text_row_start_index: usize,
    #[serde(default = "default_translation_text_column_index_range")]
    pub translation_text_column_index_range: ColumnRange,
    #[serde(default)]
    pub font_column_index_range: Option<ColumnRange>,
    #[serde(default)]
    pub style_column_index_range: Option<ColumnRange>,
    #[serde(default = "default_style_delimiter")]
    pub style_delimiter: char,
    #[serde(default)]
    pub target_locales: Vec<String>,
    #[serde(default)]
    pub excluded_locales: Vec<String>,
    #[serde(default)]
    pub characters_export: CharactersExport,
}

/// Settings of the `Characters.txt` export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharactersExport {
    pub enabled: bool,
    pub export_dir: String,
    #[serde(flatten)]
    pub sets: CharacterSets,
}

fn default_sheet_path() -> String {
    "./translations.csv".to_string()
}

fn default_assets_dir() -> String {
    "./Locales".to_string()
}

fn default_scripts_dir() -> String {
    "./src/generated".to_string()
}

fn default_translation_text_row_start_index() -> usize {
    1
}

fn default_translation_text_column_index_range() -> ColumnRange {
    ColumnRange::new(1, 1)
}

fn default_style_delimiter() -> char {
    DEFAULT_STYLE_DELIMITER
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_path: default_sheet_path(),
            assets_dir: default_assets_dir(),
            scripts_dir: default_scripts_dir(),
            script_module: None,
            locale_row_index: 0,
            translation_key_column_index: 0,
            translation_text_row_start_index: default_translation_text_row_start_index(),
            translation_text_column_index_range: default_translation_text_column_index_range(),
            font_column_index_range: None,
            style_column_index_range: None,
            style_delimiter: default_style_delimiter(),
            target_locales: Vec::new(),
            excluded_locales: Vec::new(),
            characters_export: CharactersExport::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a locale list holds an empty entry, the column
    /// layout is inconsistent, or the characters export has no folder.
    pub fn validate(&self) -> Result<()> {
        self.import_settings()?
            .validate()
            .context("Invalid column layout in config")?;

        if self.characters_export.enabled && self.characters_export.export_dir.trim().is_empty() {
            bail!("'charactersExport.exportDir' must be set when the characters export is enabled");
        }

        Ok(())
    }

    /// Parser settings described by this config.
    pub fn import_settings(&self) -> Result<ImportSettings> {
        Ok(ImportSettings {
            locale_row_index: self.locale_row_index,
            translation_key_column_index: self.translation_key_column_index,
            translation_text_row_start_index: self.translation_text_row_start_index,
            text_columns: self.translation_text_column_index_range,
            font_columns: self.font_column_index_range,
            style_columns: self.style_column_index_range,
            locale_policy: LocalePolicy {
                targets: parse_locales(&self.target_locales, "targetLocales")?,
                excluded: parse_locales(&self.excluded_locales, "excludedLocales")?,
            },
            style_delimiter: self.style_delimiter,
        })
    }
}

fn parse_locales(raw: &[String], field: &str) -> Result<Vec<Locale>> {
    raw.iter()
        .map(|s| {
            Locale::new(s).with_context(|| format!("Invalid locale in '{}': \"{}\"", field, s))
        })
        .collect()
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config are resolved against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "Loaded config");

    Ok(ConfigLoadResult {
        config,
        from_file: true,
        base_dir: path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    })
}
