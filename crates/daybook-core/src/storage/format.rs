//! Serialization of the journal's key/value map.
//!
//! The journal store only ever sees an ordered map of strings; how that map
//! becomes bytes is the business of an [`EntryFormat`]. The default,
//! [`PropertiesFormat`], is a flat `key=value` text file.

use std::collections::BTreeMap;

use crate::error::{DaybookError, Result};

/// Converts between file bytes and the raw key/value map.
pub trait EntryFormat: Send + Sync {
    /// Parse file contents into a map.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::Load` for any structurally invalid record.
    fn load(&self, bytes: &[u8]) -> Result<BTreeMap<String, String>>;

    /// Render a map as file contents.
    fn dump(&self, map: &BTreeMap<String, String>) -> Result<Vec<u8>>;
}

/// Flat `key=value` text, one record per line.
///
/// Output is sorted by key with LF line endings and no header. Input accepts
/// the broader properties dialect: `#` and `!` comment lines, blank lines,
/// `=` or `:` as separator, whitespace around the separator, and backslash
/// escapes. Line continuations are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesFormat;

impl PropertiesFormat {
    pub fn new() -> Self {
        Self
    }
}

fn load_error(line: usize, reason: impl Into<String>) -> DaybookError {
    DaybookError::Load(format!("line {}: {}", line, reason.into()))
}

fn unescape(c: char) -> char {
    match c {
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        'f' => '\u{000C}',
        other => other,
    }
}

/// Split one logical line into an unescaped key and value.
fn parse_record(line: &str, line_no: usize) -> Result<(String, String)> {
    let mut key = String::new();
    let mut value = String::new();
    let mut in_value = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        let target = if in_value { &mut value } else { &mut key };
        match c {
            '\\' => match chars.next() {
                Some(escaped) => target.push(unescape(escaped)),
                None => {
                    return Err(load_error(line_no, "line continuations are not supported"));
                }
            },
            '=' | ':' if !in_value => in_value = true,
            other => target.push(other),
        }
    }

    if !in_value {
        return Err(load_error(line_no, "missing '=' separator"));
    }

    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(load_error(line_no, "empty key"));
    }
    Ok((key, value.trim().to_string()))
}

fn escape_into(out: &mut String, text: &str, is_key: bool) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '=' | ':' | '#' | '!' | ' ' if is_key => {
                out.push('\\');
                out.push(c);
            }
            other => out.push(other),
        }
    }
}

impl EntryFormat for PropertiesFormat {
    fn load(&self, bytes: &[u8]) -> Result<BTreeMap<String, String>> {
        let mut map = BTreeMap::new();

        for (index, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            let line_no = index + 1;
            let line = std::str::from_utf8(raw)
                .map_err(|_| load_error(line_no, "not valid UTF-8"))?
                .trim_end_matches('\r');
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let (key, value) = parse_record(trimmed, line_no)?;
            if map.contains_key(&key) {
                return Err(load_error(line_no, format!("duplicate key '{}'", key)));
            }
            map.insert(key, value);
        }

        Ok(map)
    }

    fn dump(&self, map: &BTreeMap<String, String>) -> Result<Vec<u8>> {
        let mut out = String::new();
        for (key, value) in map {
            escape_into(&mut out, key, true);
            out.push('=');
            escape_into(&mut out, value, false);
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}
