use anyhow::{Context, Result};

use super::super::args::LookupCommand;
use super::helper::load_command_config;
use super::{AssetFailure, CommandResult, CommandSummary, LookupResult, LookupSummary};
use crate::{
    assets::read_locale_assets,
    core::{Locale, Lookup, TranslationStore},
};

/// Load every asset into a fresh store and resolve the keys in `--locale`.
///
/// A corrupt asset only takes its own locale out; the others still load.
pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let loaded = load_command_config(&cmd.common)?;
    let assets_dir = cmd
        .assets_dir
        .clone()
        .unwrap_or_else(|| loaded.resolve(&loaded.config.assets_dir));
    let locale = Locale::new(&cmd.locale).context("Invalid --locale")?;

    let mut store = TranslationStore::new();
    let mut failures = Vec::new();
    for asset in read_locale_assets(&assets_dir)? {
        if let Err(err) = store.load_locale_data(asset.locale, &asset.bytes) {
            failures.push(AssetFailure {
                path: asset.path,
                error: err.to_string(),
            });
        }
    }
    store.set_current_locale(locale.clone());

    let mut results = Vec::with_capacity(cmd.keys.len());
    for key in &cmd.keys {
        let lookup = store
            .resolve_current(key)
            .with_context(|| format!("Invalid key: {:?}", key))?;
        results.push(LookupResult {
            key: key.clone(),
            text: lookup.text().to_string(),
            record: lookup.record().cloned(),
            miss: match lookup {
                Lookup::Found(_) => None,
                Lookup::Miss(miss) => Some(miss),
            },
        });
    }

    let problem_count =
        failures.len() + results.iter().filter(|result| result.miss.is_some()).count();
    let loaded_locales = store.loaded_locales().into_iter().cloned().collect();

    Ok(CommandResult::new(
        CommandSummary::Lookup(LookupSummary {
            locale,
            loaded_locales,
            results,
            failures,
        }),
        problem_count,
    ))
}
