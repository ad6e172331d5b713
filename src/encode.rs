//! Value → TOON text.
//!
//! The encoder is a total function over finite, acyclic values and is
//! deterministic given object key order. Per node it picks the densest
//! representation that still round-trips, in priority order: scalar, empty
//! container (`[]` / `{}`), inline primitive array (`key[N]: a,b,c`),
//! tabular block (`key[N]{cols}:` plus one row line per element), generic
//! list (`- ` items), plain object body.
//!
//! Two entry points replace a nullable-key parameter: [`encode`] handles the
//! document root, `encode_child` handles a keyed field at a known depth.
//! Indentation is two spaces per level and grows in exactly three places:
//! entering an object's non-scalar child, entering a tabular row block, and
//! entering the nested body of a list item.

use crate::scalar::{escape_cell, format_scalar};
use crate::Value;

/// Encodes a value as TOON text. Lines are joined with `\n` and the output
/// carries no trailing newline.
#[must_use]
pub fn encode(value: &Value) -> String {
    match value {
        Value::Array(arr) if arr.is_empty() => "[]".to_string(),
        Value::Object(obj) if obj.is_empty() => "{}".to_string(),
        Value::Array(arr) => {
            let mut out = Writer::new();
            encode_root_array(&mut out, arr);
            out.finish()
        }
        Value::Object(obj) => {
            let mut out = Writer::new();
            encode_object_fields(&mut out, obj, 0);
            out.finish()
        }
        // Root scalar: a bare field, escaped like any other cell.
        scalar => escape_cell(&format_scalar(scalar)),
    }
}

/// Line buffer. Indentation is applied once, when a line is pushed.
struct Writer {
    lines: Vec<String>,
}

impl Writer {
    fn new() -> Self {
        Writer { lines: Vec::new() }
    }

    fn push(&mut self, indent: usize, text: String) {
        let mut line = String::with_capacity(indent * 2 + text.len());
        for _ in 0..indent {
            line.push_str("  ");
        }
        line.push_str(&text);
        self.lines.push(line);
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Keyless array at document root: `[N]: cells`, `table[N]{cols}:`, or a
/// `[N]:` header followed by `- ` items.
fn encode_root_array(out: &mut Writer, arr: &[Value]) {
    if arr.iter().all(Value::is_scalar) {
        out.push(0, format!("[{}]: {}", arr.len(), joined_cells(arr)));
    } else if let Some(cols) = tabular_columns(arr) {
        out.push(0, format!("table[{}]{{{}}}:", arr.len(), cols.join(",")));
        encode_rows(out, arr, &cols, 1);
    } else {
        out.push(0, format!("[{}]:", arr.len()));
        encode_list_items(out, arr, 0);
    }
}

/// One keyed field at `indent`. Scalars and empty containers stay on the
/// key's own line; everything else opens a block.
fn encode_child(out: &mut Writer, key: &str, value: &Value, indent: usize) {
    match value {
        Value::Array(arr) if arr.is_empty() => out.push(indent, format!("{key}: []")),
        Value::Object(obj) if obj.is_empty() => out.push(indent, format!("{key}: {{}}")),
        Value::Array(arr) => {
            if arr.iter().all(Value::is_scalar) {
                out.push(indent, format!("{key}[{}]: {}", arr.len(), joined_cells(arr)));
            } else if let Some(cols) = tabular_columns(arr) {
                out.push(
                    indent,
                    format!("{key}[{}]{{{}}}:", arr.len(), cols.join(",")),
                );
                encode_rows(out, arr, &cols, indent + 1);
            } else {
                out.push(indent, format!("{key}[{}]:", arr.len()));
                encode_list_items(out, arr, indent);
            }
        }
        Value::Object(obj) => {
            out.push(indent, format!("{key}:"));
            encode_object_fields(out, obj, indent + 1);
        }
        scalar => out.push(
            indent,
            format!("{key}: {}", escape_cell(&format_scalar(scalar))),
        ),
    }
}

fn encode_object_fields(out: &mut Writer, obj: &crate::ToonMap, indent: usize) {
    for (key, value) in obj.iter() {
        encode_child(out, key, value, indent);
    }
}

/// Row lines for a tabular block, cells in header column order. Uniformity
/// guarantees every column is present; `Null` covers the impossible miss so
/// the row stays aligned.
fn encode_rows(out: &mut Writer, arr: &[Value], cols: &[String], indent: usize) {
    for element in arr {
        let Value::Object(obj) = element else { continue };
        let cells: Vec<String> = cols
            .iter()
            .map(|col| {
                let cell = obj.get(col).unwrap_or(&Value::Null);
                escape_cell(&format_scalar(cell))
            })
            .collect();
        out.push(indent, cells.join(","));
    }
}

/// Generic list items at the header's indent. A container element is
/// rendered as its own document and folded in: first line merged after the
/// dash, the rest re-indented one level deeper so they align under it.
fn encode_list_items(out: &mut Writer, arr: &[Value], indent: usize) {
    for element in arr {
        match element {
            Value::Array(a) if a.is_empty() => out.push(indent, "- []".to_string()),
            Value::Object(o) if o.is_empty() => out.push(indent, "- {}".to_string()),
            Value::Array(_) | Value::Object(_) => {
                let body = encode(element);
                let mut lines = body.lines();
                if let Some(first) = lines.next() {
                    out.push(indent, format!("- {first}"));
                }
                for rest in lines {
                    out.push(indent + 1, rest.to_string());
                }
            }
            scalar => out.push(
                indent,
                format!("- {}", escape_cell(&format_scalar(scalar))),
            ),
        }
    }
}

fn joined_cells(arr: &[Value]) -> String {
    let cells: Vec<String> = arr
        .iter()
        .map(|v| escape_cell(&format_scalar(v)))
        .collect();
    cells.join(",")
}

/// Tabular eligibility: non-empty, every element an object, every key set
/// equal (order-insensitive) to the first element's. Returns the column
/// list in the first element's insertion order, which is also the column
/// order of the emitted block.
pub(crate) fn tabular_columns(arr: &[Value]) -> Option<Vec<String>> {
    let mut elements = arr.iter();
    let first = match elements.next()? {
        Value::Object(obj) if !obj.is_empty() => obj,
        _ => return None,
    };
    let cols: Vec<String> = first.keys().cloned().collect();
    for element in elements {
        let Value::Object(obj) = element else {
            return None;
        };
        if obj.len() != cols.len() || !cols.iter().all(|c| obj.contains_key(c)) {
            return None;
        }
    }
    Some(cols)
}
