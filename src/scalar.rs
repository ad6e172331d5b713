//! Scalar literal codec: scalar ↔ text, cell escaping, and the CSV-cell
//! scanner shared by every comma-delimited position in the format.
//!
//! [`format_scalar`] and [`parse_scalar`] are exact inverses for every form
//! the encoder emits. The canonical number mapping lives here and nowhere
//! else: integers render as plain decimal, floats render through Rust's
//! shortest round-trippable `Display` with a `.0` appended when the text
//! would otherwise look integral, so the integer/float distinction survives
//! a round trip.
//!
//! Cell escaping is deliberately minimal: a field is quoted (with internal
//! quotes doubled, CSV style) iff its raw text contains a comma, newline,
//! colon, or double quote, or starts with `[` or `{`. Nothing else triggers
//! quoting. The rule leaves a *string* whose text reads as `true`, `null`,
//! or a number bare, so it decodes as that scalar type.

use crate::{Number, Value};

/// Canonical decimal text for a number. The exact inverse of the numeric
/// branch of [`parse_scalar`].
pub(crate) fn number_text(n: &Number) -> String {
    match n {
        Number::Integer(i) => i.to_string(),
        Number::Float(f) => {
            // Non-finite floats are outside the value model; degrade to null.
            if !f.is_finite() {
                return "null".to_string();
            }
            let mut s = f.to_string();
            if !s.contains('.') {
                s.push_str(".0");
            }
            s
        }
    }
}

/// Renders a scalar as its literal text, without any escaping.
///
/// Containers are not scalars; when one ends up in a cell position (a
/// tabular array whose elements carry container values) it flattens to a
/// single-line bracketed text. The escaper then quotes it, so the decoder
/// sees a plain string. Deterministic, but lossy for a shape the format
/// cannot represent in a cell.
#[must_use]
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(arr) => {
            let inner: Vec<String> = arr.iter().map(format_scalar).collect();
            format!("[{}]", inner.join(","))
        }
        Value::Object(obj) => {
            let inner: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{}: {}", k, format_scalar(v)))
                .collect();
            format!("{{{}}}", inner.join(","))
        }
    }
}

/// Parses one trimmed token into a scalar value.
///
/// Recognition order: `null` → `true`/`false` → integer → finite float →
/// quoted string (outer quotes stripped, doubled quotes collapsed) → raw
/// string.
#[must_use]
pub fn parse_scalar(token: &str) -> Value {
    if token == "null" {
        return Value::Null;
    }
    if token == "true" {
        return Value::Bool(true);
    }
    if token == "false" {
        return Value::Bool(false);
    }
    if let Ok(i) = token.parse::<i64>() {
        return Value::Number(Number::Integer(i));
    }
    if looks_numeric(token) {
        if let Ok(f) = token.parse::<f64>() {
            if f.is_finite() {
                return Value::Number(Number::Float(f));
            }
        }
    }
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        let inner = &token[1..token.len() - 1];
        return Value::String(inner.replace("\"\"", "\""));
    }
    Value::String(token.to_string())
}

/// `f64::parse` accepts spellings like `inf` and `NaN`; the format treats
/// those as plain strings, so only digit-led tokens are offered to the
/// float parser.
fn looks_numeric(token: &str) -> bool {
    let rest = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    rest.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

/// Escapes one field for a comma-delimited row, inline list, or
/// `key: value` line. The single source of truth for quoting; the CSV-cell
/// scanner is its exact inverse.
#[must_use]
pub fn escape_cell(raw: &str) -> String {
    let needs_quotes = raw.contains(',')
        || raw.contains('\n')
        || raw.contains(':')
        || raw.contains('"')
        || raw.starts_with('[')
        || raw.starts_with('{');

    if needs_quotes {
        let mut out = String::with_capacity(raw.len() + 2);
        out.push('"');
        for ch in raw.chars() {
            if ch == '"' {
                out.push_str("\"\"");
            } else {
                out.push(ch);
            }
        }
        out.push('"');
        out
    } else {
        raw.to_string()
    }
}

/// CSV-cell scanner: splits a line into cells and parses each one.
///
/// A double quote toggles quoted-field state; inside a quoted field a
/// doubled quote is a literal quote and any other quote closes the field;
/// a comma outside quotes ends the current cell. Each finished cell is
/// trimmed and handed to [`parse_scalar`].
pub(crate) fn parse_cells(text: &str) -> Vec<Value> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push_str("\"\"");
                } else {
                    in_quotes = false;
                    current.push('"');
                }
            }
            '"' => {
                in_quotes = true;
                current.push('"');
            }
            ',' if !in_quotes => {
                cells.push(parse_scalar(current.trim()));
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(parse_scalar(current.trim()));
    cells
}
