use anyhow::Result;

use super::super::args::InspectCommand;
use super::{AssetFailure, CommandResult, CommandSummary, InspectSummary, InspectedAsset};
use crate::{
    assets::{LocaleAsset, read_locale_asset, read_locale_assets},
    core::decode,
};

pub fn inspect(cmd: InspectCommand) -> Result<CommandResult> {
    let mut files: Vec<LocaleAsset> = Vec::new();
    for path in &cmd.paths {
        if path.is_dir() {
            files.extend(read_locale_assets(path)?);
        } else {
            files.push(read_locale_asset(path)?);
        }
    }

    let mut assets = Vec::new();
    let mut failures = Vec::new();
    for file in files {
        match decode(&file.bytes) {
            Ok(map) => {
                let total_entries = map.len();
                let entries = if cmd.keys.is_empty() {
                    map
                } else {
                    map.into_iter()
                        .filter(|(key, _)| cmd.keys.contains(key))
                        .collect()
                };
                assets.push(InspectedAsset {
                    locale: file.locale,
                    path: file.path,
                    total_entries,
                    entries,
                });
            }
            Err(err) => failures.push(AssetFailure {
                path: file.path,
                error: err.to_string(),
            }),
        }
    }

    let problem_count = failures.len();
    Ok(CommandResult::new(
        CommandSummary::Inspect(InspectSummary { assets, failures }),
        problem_count,
    ))
}
