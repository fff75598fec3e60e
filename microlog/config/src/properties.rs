//! A reader for the line-oriented `.properties` format.
//!
//! The input is decoded as ISO-8859-1; other characters can be written with `\uXXXX` escapes.
//! Lines starting with `#` or `!` are comments. A key is separated from its value by `=`, `:`
//! or whitespace, and a line ending with an unescaped backslash continues on the next line.
//! A line that cannot be decoded is skipped. When a key appears twice the last value wins.

use crate::error::ConfigurationError;
use indexmap::IndexMap;
use log::*;
use std::io::Read;

/// The key/value pairs of a properties source, in the order the keys first appeared.
pub type RawProperties = IndexMap<String, String>;

/// Reads the whole stream and parses it.
/// Only a failure to read the stream is an error.
pub fn load_properties<R: Read>(mut reader: R) -> Result<RawProperties, ConfigurationError> {
    let mut bytes = vec![];
    reader.read_to_end(&mut bytes).map_err(|err| ConfigurationError::IoFailure {
        message: format!("Cannot read the properties stream: {}", err),
    })?;
    let text: String = bytes.iter().map(|byte| *byte as char).collect();
    Ok(parse_properties(&text))
}

pub fn parse_properties(text: &str) -> RawProperties {
    let mut properties = RawProperties::new();
    for (line_number, line) in logical_lines(text) {
        match parse_line(&line) {
            Ok((key, value)) => {
                trace!("properties - line {}: [{}] = [{}]", line_number, key, value);
                properties.insert(key, value);
            }
            Err(message) => {
                warn!("properties - skipping malformed line {}: {}", line_number, message);
            }
        }
    }
    properties
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\u{000C}'
}

fn split_physical_lines(text: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&text[start..index]);
                start = index + 1;
            }
            b'\r' => {
                lines.push(&text[start..index]);
                if index + 1 < bytes.len() && bytes[index + 1] == b'\n' {
                    index += 1;
                }
                start = index + 1;
            }
            _ => {}
        }
        index += 1;
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Returns whether `line` ends with an odd number of backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Joins continued physical lines and drops blank and comment lines.
/// Each logical line is returned with the (1-based) number of its first physical line.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut result = vec![];
    let mut current: Option<(usize, String)> = None;

    for (index, physical) in split_physical_lines(text).into_iter().enumerate() {
        let stripped = physical.trim_start_matches(is_whitespace);

        let (line_number, mut buffer) = match current.take() {
            Some(pending) => pending,
            None => {
                if stripped.is_empty() || stripped.starts_with('#') || stripped.starts_with('!') {
                    continue;
                }
                (index + 1, String::new())
            }
        };

        if continues(stripped) {
            buffer.push_str(&stripped[..stripped.len() - 1]);
            current = Some((line_number, buffer));
        } else {
            buffer.push_str(stripped);
            result.push((line_number, buffer));
        }
    }

    if let Some(pending) = current {
        result.push(pending);
    }
    result
}

fn parse_line(line: &str) -> Result<(String, String), String> {
    let chars: Vec<char> = line.chars().collect();
    let limit = chars.len();

    let mut key_len = 0;
    let mut value_start = limit;
    let mut has_separator = false;
    let mut preceding_backslash = false;

    while key_len < limit {
        let c = chars[key_len];
        if (c == '=' || c == ':') && !preceding_backslash {
            value_start = key_len + 1;
            has_separator = true;
            break;
        } else if is_whitespace(c) && !preceding_backslash {
            value_start = key_len + 1;
            break;
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
        key_len += 1;
    }

    while value_start < limit {
        let c = chars[value_start];
        if !is_whitespace(c) {
            if !has_separator && (c == '=' || c == ':') {
                has_separator = true;
            } else {
                break;
            }
        }
        value_start += 1;
    }

    let mut value_end = limit;
    while value_end > value_start
        && is_whitespace(chars[value_end - 1])
        && !is_escaped(&chars[..value_end], value_end - 1)
    {
        value_end -= 1;
    }

    let key = unescape(&chars[..key_len])?;
    let value = unescape(&chars[value_start.min(value_end)..value_end])?;
    Ok((key, value))
}

/// Returns whether the character at `index` is preceded by an odd number of backslashes.
fn is_escaped(chars: &[char], index: usize) -> bool {
    chars[..index].iter().rev().take_while(|c| **c == '\\').count() % 2 == 1
}

fn unescape(chars: &[char]) -> Result<String, String> {
    let mut result = String::with_capacity(chars.len());
    let mut index = 0;
    while index < chars.len() {
        let c = chars[index];
        index += 1;
        if c != '\\' {
            result.push(c);
            continue;
        }
        let escaped = match chars.get(index) {
            Some(escaped) => *escaped,
            None => break,
        };
        index += 1;
        match escaped {
            't' => result.push('\t'),
            'r' => result.push('\r'),
            'n' => result.push('\n'),
            'f' => result.push('\u{000C}'),
            'u' => {
                let unit = hex_unit(chars, index).ok_or_else(|| malformed_unicode(chars, index))?;
                index += 4;
                let decoded = if (0xD800..=0xDBFF).contains(&unit) {
                    let low = match (chars.get(index), chars.get(index + 1)) {
                        (Some(&'\\'), Some(&'u')) => hex_unit(chars, index + 2),
                        _ => None,
                    }
                    .filter(|low| (0xDC00..=0xDFFF).contains(low))
                    .ok_or_else(|| format!("lone surrogate [\\u{:04X}]", unit))?;
                    index += 6;
                    std::char::decode_utf16([unit, low].iter().copied()).next().and_then(Result::ok)
                } else {
                    std::char::from_u32(u32::from(unit))
                };
                match decoded {
                    Some(decoded) => result.push(decoded),
                    None => return Err(format!("lone surrogate [\\u{:04X}]", unit)),
                }
            }
            other => result.push(other),
        }
    }
    Ok(result)
}

/// Reads the four hex digits of a `\uXXXX` escape starting at `index`.
fn hex_unit(chars: &[char], index: usize) -> Option<u16> {
    let digits = chars.get(index..index + 4)?;
    if !digits.iter().all(char::is_ascii_hexdigit) {
        return None;
    }
    u16::from_str_radix(&digits.iter().collect::<String>(), 16).ok()
}

fn malformed_unicode(chars: &[char], index: usize) -> String {
    let digits: String = chars.iter().skip(index).take(4).collect();
    format!("malformed \\uxxxx encoding [\\u{}]", digits)
}
