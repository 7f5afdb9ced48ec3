//! Binary encoding of one locale's translations.
//!
//! Layout (all integers little endian):
//!
//! ```text
//! magic    4 bytes  "LSTB"
//! version  u8
//! count    u32
//! entry*   key: str, text: str,
//!          font: u8 flag (0 = none, 1 = some) followed by str when 1,
//!          style: u32 count followed by that many str
//! str      u32 byte length + UTF-8 bytes
//! ```
//!
//! An empty map still carries the header, so "no translations" and "corrupt
//! blob" never look alike.

use thiserror::Error;

use super::record::{TranslationMap, TranslationRecord};

pub const MAGIC: &[u8; 4] = b"LSTB";
pub const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = MAGIC.len() + 1 + 4;
/// Smallest possible entry: key len, text len, font flag, style count.
const MIN_ENTRY_LEN: usize = 4 + 4 + 1 + 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("blob is not a locale asset (bad magic)")]
    BadMagic,
    #[error("unsupported asset format version {found} (expected {FORMAT_VERSION})")]
    UnsupportedVersion { found: u8 },
    #[error("unexpected end of data at byte {offset}: needed {needed} more byte(s)")]
    UnexpectedEof { offset: usize, needed: usize },
    #[error("invalid UTF-8 string at byte {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("invalid font flag {value} at byte {offset}")]
    InvalidFontFlag { offset: usize, value: u8 },
    #[error("empty translation key in entry {index}")]
    EmptyKey { index: usize },
    #[error("duplicate translation key \"{key}\"")]
    DuplicateKey { key: String },
    #[error("{count} trailing byte(s) after the last entry")]
    TrailingBytes { count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("empty translation key in entry {index}")]
    EmptyKey { index: usize },
    #[error("length {len} exceeds the 32-bit limit of a locale asset")]
    TooLarge { len: usize },
}

/// Encode one locale's map.
///
/// Rejects everything [`decode`] would reject, so a successful encode always
/// decodes back to the same map.
pub fn encode(map: &TranslationMap) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(HEADER_LEN + map.len() * MIN_ENTRY_LEN);
    out.extend_from_slice(MAGIC);
    out.push(FORMAT_VERSION);
    write_len(&mut out, map.len())?;

    for (index, (key, record)) in map.iter().enumerate() {
        if key.is_empty() {
            return Err(EncodeError::EmptyKey { index });
        }
        write_str(&mut out, key)?;
        write_str(&mut out, &record.text)?;
        match &record.font {
            Some(font) => {
                out.push(1);
                write_str(&mut out, font)?;
            }
            None => out.push(0),
        }
        write_len(&mut out, record.style.len())?;
        for param in &record.style {
            write_str(&mut out, param)?;
        }
    }

    Ok(out)
}

pub fn decode(bytes: &[u8]) -> Result<TranslationMap, DecodeError> {
    let mut reader = Reader::new(bytes);

    if reader.take(MAGIC.len()).ok() != Some(MAGIC.as_slice()) {
        return Err(DecodeError::BadMagic);
    }
    let version = reader.u8()?;
    if version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion { found: version });
    }

    let count = reader.len()?;
    // The count comes from untrusted input; cap the preallocation by what
    // the remaining bytes could possibly hold.
    let mut map = TranslationMap::with_capacity(count.min(reader.remaining() / MIN_ENTRY_LEN));

    for index in 0..count {
        let key = reader.string()?;
        if key.is_empty() {
            return Err(DecodeError::EmptyKey { index });
        }
        let text = reader.string()?;

        let flag_offset = reader.offset;
        let font = match reader.u8()? {
            0 => None,
            1 => Some(reader.string()?),
            value => {
                return Err(DecodeError::InvalidFontFlag {
                    offset: flag_offset,
                    value,
                });
            }
        };

        let style_count = reader.len()?;
        let mut style = Vec::with_capacity(style_count.min(reader.remaining() / 4));
        for _ in 0..style_count {
            style.push(reader.string()?);
        }

        if map.contains_key(&key) {
            return Err(DecodeError::DuplicateKey { key });
        }
        map.insert(key, TranslationRecord { text, font, style });
    }

    if reader.remaining() > 0 {
        return Err(DecodeError::TrailingBytes {
            count: reader.remaining(),
        });
    }

    Ok(map)
}

fn write_len(out: &mut Vec<u8>, len: usize) -> Result<(), EncodeError> {
    let len = u32::try_from(len).map_err(|_| EncodeError::TooLarge { len })?;
    out.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

fn write_str(out: &mut Vec<u8>, s: &str) -> Result<(), EncodeError> {
    write_len(out, s.len())?;
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::UnexpectedEof {
                offset: self.offset,
                needed: n - self.remaining(),
            });
        }
        let slice = &self.bytes[self.offset..self.offset + n];
        self.offset += n;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn len(&mut self) -> Result<usize, DecodeError> {
        let raw = self.take(4)?;
        let value = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
        Ok(value as usize)
    }

    fn string(&mut self) -> Result<String, DecodeError> {
        let len = self.len()?;
        let start = self.offset;
        let raw = self.take(len)?;
        String::from_utf8(raw.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { offset: start })
    }
}
