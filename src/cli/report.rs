//! Report formatting and printing utilities.
//!
//! Separate from command logic so the commands stay usable as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    AssetFailure, BuildSummary, CommandResult, CommandSummary, InitSummary, InspectSummary,
    LookupSummary,
};
use crate::core::TranslationRecord;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Longest text shown in an inspect table cell before truncation.
const MAX_TEXT_WIDTH: usize = 48;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, out),
        CommandSummary::Inspect(summary) => print_inspect(summary, out, err),
        CommandSummary::Lookup(summary) => print_lookup(summary, verbose, out, err),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

fn print_build<W: Write>(summary: &BuildSummary, verbose: bool, out: &mut W) {
    let sheets = plural(summary.sheet_count, "sheet", "sheets");
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Imported {} {} from {}: {} {}, {} {}",
            summary.sheet_count,
            sheets,
            summary.sheet_path.display(),
            summary.assets.len(),
            plural(summary.assets.len(), "locale", "locales"),
            summary.key_count,
            plural(summary.key_count, "key", "keys"),
        )
        .green()
    );

    for asset in &summary.assets {
        let _ = writeln!(
            out,
            "  {} {} ({} {})",
            "wrote".cyan(),
            asset.path.display(),
            asset.entry_count,
            plural(asset.entry_count, "entry", "entries")
        );
    }
    for script in &summary.scripts {
        let _ = writeln!(out, "  {} {}", "generated".cyan(), script.display());
    }
    if let Some(characters) = &summary.characters {
        let _ = writeln!(
            out,
            "  {} {} ({} {})",
            "exported".cyan(),
            characters.path.display(),
            characters.character_count,
            plural(characters.character_count, "character", "characters")
        );
    }

    if verbose {
        let locales: Vec<&str> = summary.assets.iter().map(|a| a.locale.as_str()).collect();
        let _ = writeln!(out, "  {} {}", "locales:".dimmed(), locales.join(", "));
    }
}

fn print_inspect<W: Write, E: Write>(summary: &InspectSummary, out: &mut W, err: &mut E) {
    for asset in &summary.assets {
        let _ = writeln!(
            out,
            "{} {} ({} {})",
            asset.locale.to_string().bold(),
            asset.path.display().to_string().dimmed(),
            asset.total_entries,
            plural(asset.total_entries, "entry", "entries")
        );

        let key_width = asset
            .entries
            .keys()
            .map(|k| UnicodeWidthStr::width(k.as_str()))
            .max()
            .unwrap_or(0);
        for (key, record) in &asset.entries {
            let _ = writeln!(
                out,
                "  {}{}  {}{}",
                key,
                " ".repeat(key_width - UnicodeWidthStr::width(key.as_str())),
                truncate(&record.text, MAX_TEXT_WIDTH),
                record_details(record).dimmed()
            );
        }
        let _ = writeln!(out);
    }

    print_failures(&summary.failures, err);
}

fn print_lookup<W: Write, E: Write>(
    summary: &LookupSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    print_failures(&summary.failures, err);

    if verbose {
        let loaded: Vec<&str> = summary.loaded_locales.iter().map(|l| l.as_str()).collect();
        let _ = writeln!(
            err,
            "{} {}",
            "loaded:".dimmed(),
            if loaded.is_empty() {
                "(none)".to_string()
            } else {
                loaded.join(", ")
            }
        );
    }

    for result in &summary.results {
        let details = result
            .record
            .as_ref()
            .map(record_details)
            .unwrap_or_default();
        let _ = writeln!(out, "{} = {}{}", result.key, result.text, details.dimmed());

        if let Some(miss) = &result.miss {
            let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), miss);
        }
    }

    let misses = summary.results.iter().filter(|r| r.miss.is_some()).count();
    if misses > 0 {
        let _ = writeln!(
            err,
            "\n{} {} of {} {} not translated for locale {}",
            FAILURE_MARK.red(),
            misses,
            summary.results.len(),
            plural(summary.results.len(), "key", "keys"),
            summary.locale
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn print_failures<E: Write>(failures: &[AssetFailure], err: &mut E) {
    for failure in failures {
        let _ = writeln!(
            err,
            "{}: {}: {}",
            "error".bold().red(),
            failure.path.display(),
            failure.error
        );
    }
}

/// `  [font: X] [style: a | b]` suffix, empty for a plain record.
fn record_details(record: &TranslationRecord) -> String {
    let mut details = String::new();
    if let Some(font) = &record.font {
        details.push_str(&format!("  [font: {}]", font));
    }
    if !record.style.is_empty() {
        details.push_str(&format!("  [style: {}]", record.style.join(" | ")));
    }
    details
}

fn truncate(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', "\\n");
    if UnicodeWidthStr::width(text.as_str()) <= max_width {
        return text;
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
