//! Locale asset files: one `<locale>.bytes` blob per locale in a directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use walkdir::WalkDir;

use crate::core::{Locale, ParsedTranslations, encode};

pub const ASSET_EXTENSION: &str = "bytes";

pub fn asset_file_name(locale: &Locale) -> String {
    format!("{}.{}", locale, ASSET_EXTENSION)
}

/// Locale named by an asset file's stem, e.g. `Locales/zh_CN.bytes` → `zh_CN`.
pub fn locale_from_asset_path(path: &Path) -> Result<Locale> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("Invalid asset file name: {}", path.display()))?;
    Locale::new(stem).with_context(|| format!("Invalid asset file name: {}", path.display()))
}

/// Encode every locale and write it to `dir`, creating the directory.
///
/// All locales are encoded before the first file is written, so an encoding
/// error leaves `dir` untouched. Returns the written paths in locale order.
pub fn write_locale_assets(dir: &Path, translations: &ParsedTranslations) -> Result<Vec<PathBuf>> {
    let mut encoded = Vec::with_capacity(translations.len());
    for (locale, map) in translations.iter() {
        let bytes =
            encode(map).with_context(|| format!("Failed to encode locale {}", locale))?;
        encoded.push((dir.join(asset_file_name(locale)), map.len(), bytes));
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create assets directory: {}", dir.display()))?;

    let mut written = Vec::with_capacity(encoded.len());
    for (path, entries, bytes) in encoded {
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write asset: {}", path.display()))?;
        tracing::debug!(path = %path.display(), entries, "Wrote locale asset");
        written.push(path);
    }
    Ok(written)
}

/// An asset file read from disk, not yet decoded.
#[derive(Debug, Clone)]
pub struct LocaleAsset {
    pub locale: Locale,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Read every `*.bytes` file directly inside `dir`, sorted by locale.
pub fn read_locale_assets(dir: &Path) -> Result<Vec<LocaleAsset>> {
    if !dir.is_dir() {
        anyhow::bail!("Assets directory does not exist: {}", dir.display());
    }

    let mut assets = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry
            .with_context(|| format!("Failed to read assets directory: {}", dir.display()))?;
        if !entry.file_type().is_file() || !is_asset_file(entry.path()) {
            continue;
        }
        assets.push(read_locale_asset(entry.path())?);
    }

    assets.sort_by(|a, b| a.locale.cmp(&b.locale));
    Ok(assets)
}

pub fn read_locale_asset(path: &Path) -> Result<LocaleAsset> {
    let locale = locale_from_asset_path(path)?;
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read asset: {}", path.display()))?;
    Ok(LocaleAsset {
        locale,
        path: path.to_path_buf(),
        bytes,
    })
}

pub fn is_asset_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ASSET_EXTENSION)
}
