use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{Locale, LookupMiss, TranslationMap, TranslationRecord};

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Inspect(InspectSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    pub sheet_path: PathBuf,
    pub sheet_count: usize,
    pub key_count: usize,
    pub assets: Vec<WrittenAsset>,
    /// Generated constant modules; empty with `--skip-scripts`.
    pub scripts: Vec<PathBuf>,
    pub characters: Option<CharactersFile>,
}

#[derive(Debug)]
pub struct WrittenAsset {
    pub locale: Locale,
    pub path: PathBuf,
    pub entry_count: usize,
}

#[derive(Debug)]
pub struct CharactersFile {
    pub path: PathBuf,
    pub character_count: usize,
}

#[derive(Debug)]
pub struct InspectSummary {
    pub assets: Vec<InspectedAsset>,
    pub failures: Vec<AssetFailure>,
}

#[derive(Debug)]
pub struct InspectedAsset {
    pub locale: Locale,
    pub path: PathBuf,
    pub total_entries: usize,
    /// Entries to display, after key filtering.
    pub entries: TranslationMap,
}

/// An asset that could not be read or decoded.
#[derive(Debug)]
pub struct AssetFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub locale: Locale,
    pub loaded_locales: Vec<Locale>,
    pub results: Vec<LookupResult>,
    pub failures: Vec<AssetFailure>,
}

#[derive(Debug)]
pub struct LookupResult {
    pub key: String,
    pub text: String,
    pub record: Option<TranslationRecord>,
    pub miss: Option<LookupMiss>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a locsheet command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Problems that make the command exit with [`ExitStatus::Failure`].
    pub problem_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, problem_count: usize) -> Self {
        Self {
            summary,
            problem_count,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.problem_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
