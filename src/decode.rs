//! TOON text → value.
//!
//! Single pass over newline-delimited lines with an indentation-keyed stack
//! of open frames as the only structural memory. Each line is classified
//! first-match-wins: table header, primitive-array header, key without an
//! inline value, key with an inline value, table row, list item. Blank lines
//! are skipped; end of input closes all open frames implicitly.
//!
//! Lines that match no classification are reported as [`Error::Syntax`]
//! with their 1-based line number rather than skipped. Generic `- ` list
//! blocks are recognized but not reconstructed; they raise
//! [`Error::Unsupported`].

use crate::error::{Error, Result};
use crate::scalar::{parse_cells, parse_scalar};
use crate::{ToonMap, Value};

/// Decodes TOON text into a value.
///
/// The root is fixed by the first top-level construct: a keyed line makes
/// it an object, a keyless `[N]:` or `table[N]{...}:` header makes it an
/// array. Empty input decodes to an empty object.
pub fn decode(text: &str) -> Result<Value> {
    match text.trim() {
        "" => return Ok(Value::Object(ToonMap::new())),
        "[]" => return Ok(Value::Array(Vec::new())),
        "{}" => return Ok(Value::Object(ToonMap::new())),
        _ => {}
    }

    let mut decoder = Decoder::new();
    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        decoder.line(idx + 1, raw)?;
    }
    decoder.finish()
}

/// One open container during reconstruction. `headers` is `Some` exactly
/// for table frames, whose `value` is the row array being filled; object
/// frames hold a `Value::Object`. `key` is `None` only for the root
/// tabular array.
struct Frame {
    key: Option<String>,
    open_indent: usize,
    open_line: usize,
    headers: Option<Vec<String>>,
    value: Value,
}

enum Root {
    Unset,
    Object(ToonMap),
    Array(Value),
}

struct Decoder {
    root: Root,
    stack: Vec<Frame>,
}

impl Decoder {
    fn new() -> Self {
        Decoder {
            root: Root::Unset,
            stack: Vec::new(),
        }
    }

    fn line(&mut self, line_no: usize, raw: &str) -> Result<()> {
        let indent = raw.len() - raw.trim_start_matches(' ').len();
        let rest = &raw[indent..];

        // A line at indent N ends the body of every frame opened at N or
        // deeper.
        while self.stack.last().map_or(false, |f| f.open_indent >= indent) {
            self.close_top()?;
        }

        if let Some((key, headers)) = parse_table_header(rest) {
            return self.open_table(line_no, indent, key, headers);
        }

        if let Some((key, count, cells)) = parse_array_header(rest) {
            return self.finish_array_header(line_no, key, count, cells);
        }

        if let Some((key, inline)) = parse_key_line(rest) {
            return match inline {
                None => self.open_object(line_no, indent, key),
                Some(text) => {
                    let value = inline_value(text);
                    self.attach(line_no, key, value)
                }
            };
        }

        if let Some(frame) = self.stack.last_mut() {
            if let (Some(headers), Value::Array(rows)) = (&frame.headers, &mut frame.value) {
                let mut cells = parse_cells(rest).into_iter();
                let mut row = ToonMap::with_capacity(headers.len());
                for header in headers {
                    // Missing trailing cells become null; extra cells are
                    // dropped with the exhausted iterator.
                    row.insert(header.clone(), cells.next().unwrap_or(Value::Null));
                }
                rows.push(Value::Object(row));
                return Ok(());
            }
        }

        if rest == "-" || rest.starts_with("- ") {
            return Err(Error::unsupported(
                line_no,
                "list items cannot be reconstructed",
            ));
        }

        Err(Error::syntax(line_no, format!("unrecognized line {rest:?}")))
    }

    fn open_table(
        &mut self,
        line_no: usize,
        indent: usize,
        key: String,
        headers: Vec<String>,
    ) -> Result<()> {
        // `table[N]{...}:` with nothing open is the root-array form; the
        // same text nested is an ordinary field named "table".
        let key = if key == "table" && self.stack.is_empty() && matches!(self.root, Root::Unset) {
            None
        } else {
            Some(key)
        };
        self.check_open(line_no, key.is_some())?;
        self.stack.push(Frame {
            key,
            open_indent: indent,
            open_line: line_no,
            headers: Some(headers),
            value: Value::Array(Vec::new()),
        });
        Ok(())
    }

    fn open_object(&mut self, line_no: usize, indent: usize, key: String) -> Result<()> {
        self.check_open(line_no, true)?;
        self.stack.push(Frame {
            key: Some(key),
            open_indent: indent,
            open_line: line_no,
            headers: None,
            value: Value::Object(ToonMap::new()),
        });
        Ok(())
    }

    /// Structural checks shared by both frame-opening classifications.
    fn check_open(&self, line_no: usize, keyed: bool) -> Result<()> {
        if let Some(top) = self.stack.last() {
            if top.headers.is_some() {
                return Err(Error::syntax(line_no, "container opened inside a table block"));
            }
        } else if keyed {
            if matches!(self.root, Root::Array(_)) {
                return Err(Error::syntax(line_no, "keyed entry after an array root"));
            }
        } else if !matches!(self.root, Root::Unset) {
            return Err(Error::syntax(line_no, "second root construct"));
        }
        Ok(())
    }

    /// Primitive-array headers are self-contained; no frame is pushed.
    fn finish_array_header(
        &mut self,
        line_no: usize,
        key: String,
        count: usize,
        cells_text: Option<&str>,
    ) -> Result<()> {
        let array = match cells_text {
            Some(text) => Value::Array(parse_cells(text)),
            None if count == 0 => Value::Array(Vec::new()),
            // A bare header with a nonzero count announces `- ` items.
            None => {
                return Err(Error::unsupported(
                    line_no,
                    "list items cannot be reconstructed",
                ))
            }
        };

        if key.is_empty() {
            if !self.stack.is_empty() || !matches!(self.root, Root::Unset) {
                return Err(Error::syntax(line_no, "keyless array header below root"));
            }
            self.root = Root::Array(array);
            Ok(())
        } else {
            self.attach(line_no, key, array)
        }
    }

    /// Puts a finished value under `key` in the innermost open object, or in
    /// the root object when nothing is open.
    fn attach(&mut self, line_no: usize, key: String, value: Value) -> Result<()> {
        if let Some(top) = self.stack.last_mut() {
            match &mut top.value {
                Value::Object(map) => {
                    map.insert(key, value);
                    Ok(())
                }
                _ => Err(Error::syntax(line_no, "keyed entry inside a table block")),
            }
        } else {
            match &mut self.root {
                Root::Unset => {
                    let mut map = ToonMap::new();
                    map.insert(key, value);
                    self.root = Root::Object(map);
                    Ok(())
                }
                Root::Object(map) => {
                    map.insert(key, value);
                    Ok(())
                }
                Root::Array(_) => Err(Error::syntax(line_no, "keyed entry after an array root")),
            }
        }
    }

    /// Pops the innermost frame and hands its finished container to the
    /// enclosing frame or the root.
    fn close_top(&mut self) -> Result<()> {
        let frame = match self.stack.pop() {
            Some(frame) => frame,
            None => return Ok(()),
        };
        match frame.key {
            Some(key) => self.attach(frame.open_line, key, frame.value),
            None => {
                self.root = Root::Array(frame.value);
                Ok(())
            }
        }
    }

    fn finish(mut self) -> Result<Value> {
        while !self.stack.is_empty() {
            self.close_top()?;
        }
        Ok(match self.root {
            Root::Unset => Value::Object(ToonMap::new()),
            Root::Object(map) => Value::Object(map),
            Root::Array(array) => array,
        })
    }
}

/// `KEY[N]{headers}:` including the root form, where KEY is `table`.
fn parse_table_header(rest: &str) -> Option<(String, Vec<String>)> {
    let body = rest.strip_suffix(':')?;
    let open = body.find('[')?;
    let close = body[open..].find(']')? + open;
    body[open + 1..close].trim().parse::<usize>().ok()?;
    let cols = body[close + 1..].strip_prefix('{')?.strip_suffix('}')?;
    let key = &body[..open];
    if key.is_empty() || key.contains('"') || key.contains(',') || cols.is_empty() {
        return None;
    }
    let headers = cols.split(',').map(|h| h.trim().to_string()).collect();
    Some((key.to_string(), headers))
}

/// `KEY[N]: cells` or `[N]: cells`; the key may be empty. Returns `None`
/// for the cells when nothing follows the colon, which distinguishes a bare
/// generic-list header from an inline array whose only cell is empty
/// (`[1]: ` with a trailing space).
fn parse_array_header(rest: &str) -> Option<(String, usize, Option<&str>)> {
    let open = rest.find('[')?;
    let close = rest[open..].find(']')? + open;
    let count = rest[open + 1..close].trim().parse::<usize>().ok()?;
    let after = rest[close + 1..].strip_prefix(':')?;
    let cells = if after.is_empty() {
        None
    } else {
        Some(after.strip_prefix(' ')?)
    };
    let key = &rest[..open];
    // A quote or comma before the bracket means this is really a table row
    // whose quoted cell contains header-shaped text.
    if key.contains('"') || key.contains(',') {
        return None;
    }
    Some((key.to_string(), count, cells))
}

/// `KEY:` or `KEY: value`. Keys are emitted raw by the encoder, so a
/// candidate containing a quote or comma is really a table row whose quoted
/// cell happens to contain `: `.
fn parse_key_line(rest: &str) -> Option<(String, Option<&str>)> {
    let colon = rest.find(':')?;
    let key = &rest[..colon];
    if key.is_empty() || key.contains('"') || key.contains(',') {
        return None;
    }
    let after = &rest[colon + 1..];
    if after.is_empty() {
        Some((key.to_string(), None))
    } else {
        after.strip_prefix(' ').map(|text| (key.to_string(), Some(text)))
    }
}

/// Inline value after `key: `. The bracket forms restore the encoder's
/// empty containers; they cannot collide with string data because the
/// escaper quotes anything starting with `[` or `{`.
fn inline_value(text: &str) -> Value {
    match text.trim() {
        "[]" => Value::Array(Vec::new()),
        "{}" => Value::Object(ToonMap::new()),
        trimmed => parse_scalar(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    #[test]
    fn flat_object() {
        let value = decode("name: Ann\nage: 30").unwrap();
        assert_eq!(value, toon!({"name": "Ann", "age": 30}));
    }

    #[test]
    fn primitive_array_root() {
        let value = decode("[3]: 1,2,3").unwrap();
        assert_eq!(value, toon!([1, 2, 3]));
    }

    #[test]
    fn tabular_root() {
        let value = decode("table[2]{id,ok}:\n  1,true\n  2,false").unwrap();
        assert_eq!(value, toon!([{"id": 1, "ok": true}, {"id": 2, "ok": false}]));
    }

    #[test]
    fn tabular_under_key() {
        let value = decode("items[2]{x}:\n  1\n  2").unwrap();
        assert_eq!(value, toon!({"items": [{"x": 1}, {"x": 2}]}));
    }

    #[test]
    fn nested_object_bodies_close_on_dedent() {
        let text = "a:\n  b: 1\n  c:\n    d: 2\ne: 3";
        let value = decode(text).unwrap();
        assert_eq!(value, toon!({"a": {"b": 1, "c": {"d": 2}}, "e": 3}));
    }

    #[test]
    fn empty_input_is_an_empty_object() {
        assert_eq!(decode("").unwrap(), toon!({}));
        assert_eq!(decode("  \n\n").unwrap(), toon!({}));
    }

    #[test]
    fn bare_bracket_roots() {
        assert_eq!(decode("[]").unwrap(), toon!([]));
        assert_eq!(decode("{}").unwrap(), toon!({}));
    }

    #[test]
    fn inline_empty_containers() {
        let value = decode("a: []\nb: {}").unwrap();
        assert_eq!(value, toon!({"a": [], "b": {}}));
    }

    #[test]
    fn trailing_space_is_an_empty_string() {
        let value = decode("a: \nb: 1").unwrap();
        assert_eq!(value, toon!({"a": "", "b": 1}));
    }

    #[test]
    fn key_without_value_opens_an_object() {
        let value = decode("a:\nb: 1").unwrap();
        assert_eq!(value, toon!({"a": {}, "b": 1}));
    }

    #[test]
    fn short_rows_pad_with_null_and_long_rows_drop_extras() {
        let value = decode("rows[2]{a,b}:\n  1\n  2,3,4").unwrap();
        assert_eq!(
            value,
            toon!({"rows": [{"a": 1, "b": null}, {"a": 2, "b": 3}]})
        );
    }

    #[test]
    fn quoted_row_cell_with_colon_stays_a_row() {
        let value = decode("rows[1]{note,n}:\n  \"a: b\",2").unwrap();
        assert_eq!(value, toon!({"rows": [{"note": "a: b", "n": 2}]}));
    }

    #[test]
    fn field_named_table_is_not_the_root_form() {
        let value = decode("id: 7\ntable[1]{x}:\n  1").unwrap();
        assert_eq!(value, toon!({"id": 7, "table": [{"x": 1}]}));
    }

    #[test]
    fn unrecognized_line_is_a_syntax_error() {
        let err = decode("just some text").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 1, .. }));

        let err = decode("a: 1\n???").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));
    }

    #[test]
    fn list_items_are_reported_unsupported() {
        let err = decode("xs[2]:\n- 1\n- 2").unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));

        let err = decode("- 1").unwrap_err();
        assert!(matches!(err, Error::Unsupported { line: 1, .. }));
    }

    #[test]
    fn bare_header_with_zero_count_is_empty() {
        assert_eq!(decode("xs[0]:").unwrap(), toon!({"xs": []}));
    }

    #[test]
    fn second_root_construct_is_rejected() {
        let err = decode("[1]: 1\n[1]: 2").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));

        let err = decode("[1]: 1\na: 2").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));
    }

    #[test]
    fn keyed_line_inside_table_block_is_rejected() {
        let err = decode("rows[1]{a}:\n  b: 1").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));
    }
}
