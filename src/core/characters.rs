//! Character inventory of the imported texts.
//!
//! The exported file lists every character a font has to cover, which is the
//! input external font-subsetting tools expect.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::parser::ParsedTranslations;

pub const CHARACTERS_FILE_NAME: &str = "Characters.txt";

/// Digits and symbols of the Latin-1 range.
const NUMBERS_AND_SYMBOLS: &str = "0123456789$+<=>^`|~¢£¤¥¦§¨©¬®¯°±´¸×÷";

/// Extra character sets appended to the characters found in the texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterSets {
    pub ascii: bool,
    pub extended_ascii: bool,
    pub ascii_lowercase: bool,
    pub ascii_uppercase: bool,
    pub numbers_and_symbols: bool,
    pub custom_characters: String,
}

impl CharacterSets {
    fn extend(&self, chars: &mut BTreeSet<char>) {
        if self.ascii {
            chars.extend((0u8..128).map(char::from));
        }
        if self.extended_ascii {
            chars.extend((0u8..=255).map(char::from));
        }
        if self.ascii_lowercase {
            chars.extend('a'..='z');
        }
        if self.ascii_uppercase {
            chars.extend('A'..='Z');
        }
        if self.numbers_and_symbols {
            chars.extend(NUMBERS_AND_SYMBOLS.chars());
        }
        chars.extend(self.custom_characters.chars());
    }
}

/// Distinct characters of every text in every locale plus `extra`, sorted by
/// code point. Control characters (including newlines) are left out.
pub fn collect_characters(translations: &ParsedTranslations, extra: &CharacterSets) -> String {
    let mut chars = BTreeSet::new();
    for (_, map) in translations.iter() {
        for record in map.values() {
            chars.extend(record.text.chars());
        }
    }
    extra.extend(&mut chars);

    chars.into_iter().filter(|c| !c.is_control()).collect()
}
