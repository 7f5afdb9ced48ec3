//! Rust source generation for locale and translation key constants.
//!
//! Lets application code write `translation_keys::MAIN_MENU_TITLE` instead of
//! repeating raw key strings.

use std::{collections::HashMap, fmt::Write, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use super::locale::Locale;

pub const LOCALES_FILE_NAME: &str = "locales.rs";
pub const TRANSLATION_KEYS_FILE_NAME: &str = "translation_keys.rs";

const HEADER: &str = "// @generated by locsheet. Do not edit by hand.\n";

static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid separator pattern"));
static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z0-9])([A-Z])|([A-Z])([A-Z][a-z])").expect("valid boundary pattern")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("\"{second}\" and \"{first}\" both map to the constant name `{identifier}`")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },
    #[error("\"{0}\" has no characters usable in a constant name")]
    EmptyIdentifier(String),
    #[error("invalid module name `{0}`")]
    InvalidModuleName(String),
}

/// Source declaring one `&str` constant per locale plus an `ALL` slice.
pub fn generate_locales_module(
    locales: &[Locale],
    module: Option<&str>,
) -> Result<String, CodegenError> {
    let mut seen = HashMap::new();
    let mut body = String::new();

    for locale in locales {
        let identifier = locale.constant_name();
        check_unique(&mut seen, &identifier, locale.as_str())?;
        let _ = writeln!(
            body,
            "pub const {}: &str = \"{}\";",
            identifier,
            escape(locale.as_str())
        );
    }

    let names: Vec<String> = locales.iter().map(Locale::constant_name).collect();
    let _ = writeln!(body);
    let _ = writeln!(body, "pub const ALL: &[&str] = &[{}];", names.join(", "));

    wrap(body, module)
}

/// Source declaring one `&str` constant per translation key.
pub fn generate_translation_keys_module<'a, I>(
    keys: I,
    module: Option<&str>,
) -> Result<String, CodegenError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashMap::new();
    let mut body = String::new();

    for key in keys {
        let identifier = constant_identifier(key)?;
        check_unique(&mut seen, &identifier, key)?;
        let _ = writeln!(body, "pub const {}: &str = \"{}\";", identifier, escape(key));
    }

    wrap(body, module)
}

/// `SCREAMING_SNAKE_CASE` form of `raw`, e.g. `mainMenu.title` → `MAIN_MENU_TITLE`.
pub fn constant_identifier(raw: &str) -> Result<String, CodegenError> {
    let split = CAMEL_BOUNDARY.replace_all(raw, "${1}${3}_${2}${4}");
    let words: Vec<String> = WORD_SEPARATOR
        .split(&split)
        .filter(|w| !w.is_empty())
        .map(str::to_uppercase)
        .collect();

    if words.is_empty() {
        return Err(CodegenError::EmptyIdentifier(raw.to_string()));
    }

    let identifier = words.join("_");
    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(format!("_{}", identifier))
    } else {
        Ok(identifier)
    }
}

fn check_unique(
    seen: &mut HashMap<String, String>,
    identifier: &str,
    source: &str,
) -> Result<(), CodegenError> {
    if let Some(first) = seen.get(identifier) {
        return Err(CodegenError::DuplicateIdentifier {
            identifier: identifier.to_string(),
            first: first.clone(),
            second: source.to_string(),
        });
    }
    seen.insert(identifier.to_string(), source.to_string());
    Ok(())
}

fn wrap(body: String, module: Option<&str>) -> Result<String, CodegenError> {
    let Some(module) = module.filter(|m| !m.is_empty()) else {
        return Ok(format!("{}\n{}", HEADER, body));
    };

    let valid = module.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && module.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(CodegenError::InvalidModuleName(module.to_string()));
    }

    let mut out = format!("{}\npub mod {} {{\n", HEADER, module);
    for line in body.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "    {}", line);
        }
    }
    out.push_str("}\n");
    Ok(out)
}

fn escape(value: &str) -> String {
    value.escape_default().to_string()
}
