use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::super::args::BuildCommand;
use super::helper::{load_command_config, write_file};
use super::{BuildSummary, CharactersFile, CommandResult, CommandSummary, WrittenAsset};
use crate::{
    assets::write_locale_assets,
    core::{
        ParsedTranslations, characters::CHARACTERS_FILE_NAME, codegen, collect_characters,
        parse_sheets,
    },
    sources::load_workbook,
};

/// Import the spreadsheet and write everything derived from it.
///
/// Parsing, constant generation and asset encoding all finish before the
/// first file is written. Assets are written before the constant modules,
/// so an I/O failure never leaves fresh constants next to stale assets.
pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let loaded = load_command_config(&cmd.common)?;
    let config = &loaded.config;

    let sheet_path = cmd
        .sheet
        .clone()
        .unwrap_or_else(|| loaded.resolve(&config.sheet_path));
    let assets_dir = cmd
        .assets_dir
        .clone()
        .unwrap_or_else(|| loaded.resolve(&config.assets_dir));
    let scripts_dir = cmd
        .scripts_dir
        .clone()
        .unwrap_or_else(|| loaded.resolve(&config.scripts_dir));

    let settings = config.import_settings()?;
    let sheets = load_workbook(&sheet_path)?;
    let translations = parse_sheets(&sheets, &settings)
        .with_context(|| format!("Failed to import {}", sheet_path.display()))?;

    if translations.is_empty() {
        bail!(
            "Every locale in {} is filtered out by 'targetLocales'/'excludedLocales'",
            sheet_path.display()
        );
    }
    tracing::info!(
        locales = translations.len(),
        keys = translations.key_count(),
        "Imported translations"
    );

    let rendered = if cmd.skip_scripts {
        Vec::new()
    } else {
        render_scripts(&translations, &scripts_dir, config.script_module.as_deref())?
    };

    let written = write_locale_assets(&assets_dir, &translations)?;
    let mut scripts = Vec::with_capacity(rendered.len());
    for (path, source) in rendered {
        write_file(&path, &source)?;
        tracing::info!(path = %path.display(), "Generated constants");
        scripts.push(path);
    }
    let assets = translations
        .iter()
        .zip(written)
        .map(|((locale, map), path)| WrittenAsset {
            locale: locale.clone(),
            path,
            entry_count: map.len(),
        })
        .collect();

    let export = &config.characters_export;
    let characters = if export.enabled {
        let path = loaded.resolve(&export.export_dir).join(CHARACTERS_FILE_NAME);
        let chars = collect_characters(&translations, &export.sets);
        write_file(&path, &chars)?;
        tracing::info!(path = %path.display(), "Exported characters file");
        Some(CharactersFile {
            path,
            character_count: chars.chars().count(),
        })
    } else {
        None
    };

    Ok(CommandResult::new(
        CommandSummary::Build(BuildSummary {
            sheet_path,
            sheet_count: sheets.len(),
            key_count: translations.key_count(),
            assets,
            scripts,
            characters,
        }),
        0,
    ))
}

/// Render both constant modules in memory so a naming conflict writes nothing.
fn render_scripts(
    translations: &ParsedTranslations,
    scripts_dir: &Path,
    module: Option<&str>,
) -> Result<Vec<(PathBuf, String)>> {
    let locales: Vec<_> = translations.locales().cloned().collect();
    let locales_source = codegen::generate_locales_module(&locales, module)
        .context("Failed to generate locale constants")?;
    let keys_source = codegen::generate_translation_keys_module(translations.keys(), module)
        .context("Failed to generate translation key constants")?;

    Ok(vec![
        (scripts_dir.join(codegen::LOCALES_FILE_NAME), locales_source),
        (
            scripts_dir.join(codegen::TRANSLATION_KEYS_FILE_NAME),
            keys_source,
        ),
    ])
}
