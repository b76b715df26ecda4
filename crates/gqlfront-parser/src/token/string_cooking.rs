//! Conversion of raw string token text into string values.

use crate::StringParsingError;
use std::iter::Peekable;
use std::str::Chars;

const BLOCK_QUOTE: &str = "\"\"\"";

/// Cooks a single-line string literal, given its raw text including the
/// surrounding quotes.
pub(crate) fn cook_string(raw: &str) -> Result<String, StringParsingError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(StringParsingError::UnterminatedString)?;

    let mut cooked = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            cooked.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => cooked.push('\n'),
            Some('r') => cooked.push('\r'),
            Some('t') => cooked.push('\t'),
            Some('\\') => cooked.push('\\'),
            Some('"') => cooked.push('"'),
            Some('/') => cooked.push('/'),
            Some('b') => cooked.push('\u{0008}'),
            Some('f') => cooked.push('\u{000C}'),
            Some('u') => cooked.push(cook_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(StringParsingError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            },
            None => {
                return Err(StringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }
    Ok(cooked)
}

/// Cooks the remainder of a `\u` escape.
///
/// Accepts the braced form `\u{1F600}` and the fixed form `\uXXXX`. A fixed
/// leading surrogate must be immediately followed by a fixed trailing
/// surrogate; the pair is combined into one scalar value.
fn cook_unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Result<char, StringParsingError> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(StringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}{c}"
                    )));
                },
                None => {
                    return Err(StringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}"
                    )));
                },
            }
        }
        let invalid = || StringParsingError::InvalidUnicodeEscape(format!("\\u{{{hex}}}"));
        if hex.is_empty() {
            return Err(invalid());
        }
        let code_point = u32::from_str_radix(&hex, 16).map_err(|_| invalid())?;
        return char::from_u32(code_point).ok_or_else(invalid);
    }

    let lead = take_fixed_hex(chars)?;
    if !(0xD800..=0xDBFF).contains(&lead) {
        return char::from_u32(lead)
            .ok_or_else(|| StringParsingError::InvalidUnicodeEscape(format!("\\u{lead:04X}")));
    }

    // Leading surrogate: a `\uXXXX` trailing surrogate must follow.
    let unpaired = || StringParsingError::InvalidUnicodeEscape(format!("\\u{lead:04X}"));
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err(unpaired());
    }
    let trail = take_fixed_hex(chars)?;
    if !(0xDC00..=0xDFFF).contains(&trail) {
        return Err(unpaired());
    }
    let code_point = 0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00);
    char::from_u32(code_point).ok_or_else(unpaired)
}

fn take_fixed_hex(chars: &mut Peekable<Chars<'_>>) -> Result<u32, StringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(StringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}{c}"
                )));
            },
            None => {
                return Err(StringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}"
                )));
            },
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| StringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// Cooks a block string literal, given its raw text including the
/// surrounding triple quotes.
///
/// Only `\"""` is an escape. The first line is kept as-is; every later line
/// loses the common indentation (spaces and tabs) of the non-blank later
/// lines. Leading and trailing blank lines are dropped and lines are joined
/// with `\n`.
pub(crate) fn cook_block_string(raw: &str) -> Result<String, StringParsingError> {
    if raw.len() < 2 * BLOCK_QUOTE.len() {
        return Err(StringParsingError::UnterminatedString);
    }
    let content = raw
        .strip_prefix(BLOCK_QUOTE)
        .and_then(|rest| rest.strip_suffix(BLOCK_QUOTE))
        .ok_or(StringParsingError::UnterminatedString)?;
    let content = content.replace("\\\"\"\"", BLOCK_QUOTE);

    let lines = split_lines(&content);
    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace_len(line);
            (indent < line.len()).then_some(indent)
        })
        .min();

    let mut dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match common_indent {
            // Leading whitespace is ASCII, so slicing at `indent` is safe.
            Some(indent) if i > 0 => &line[indent.min(line.len())..],
            _ => line,
        })
        .collect();

    let is_blank = |line: &&str| leading_whitespace_len(line) == line.len();
    let first_content = dedented.iter().position(|line| !is_blank(line));
    match first_content {
        None => return Ok(String::new()),
        Some(first) => {
            let last = dedented
                .iter()
                .rposition(|line| !is_blank(line))
                .unwrap_or(first);
            dedented.truncate(last + 1);
            dedented.drain(..first);
        },
    }
    Ok(dedented.join("\n"))
}

/// Splits on `\r\n`, `\n` and `\r`.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[line_start..i]);
                line_start = i + 1;
            },
            b'\r' => {
                lines.push(&text[line_start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                line_start = i + 1;
            },
            _ => (),
        }
        i += 1;
    }
    lines.push(&text[line_start..]);
    lines
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}
