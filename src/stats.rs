//! Size comparison between a JSON rendering and a TOON rendering of the
//! same data. Pure arithmetic over two already-produced strings; the token
//! estimate uses the common four-characters-per-token heuristic.

use serde::Serialize;

/// Size and savings figures for one JSON/TOON text pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Unicode scalar count of the JSON text.
    pub json_chars: usize,
    /// Unicode scalar count of the TOON text.
    pub toon_chars: usize,
    /// Rounded percentage saved relative to the JSON text. Negative when
    /// the TOON text is larger.
    pub savings_percent: i64,
    pub est_tokens_json: usize,
    pub est_tokens_toon: usize,
}

/// Computes [`Stats`] for a JSON/TOON text pair.
#[must_use]
pub fn stats(json_text: &str, toon_text: &str) -> Stats {
    let json_chars = json_text.chars().count();
    let toon_chars = toon_text.chars().count();
    let savings_percent = if json_chars == 0 {
        0
    } else {
        let saved = json_chars as f64 - toon_chars as f64;
        (saved / json_chars as f64 * 100.0).round() as i64
    };
    Stats {
        json_chars,
        toon_chars,
        savings_percent,
        est_tokens_json: est_tokens(json_chars),
        est_tokens_toon: est_tokens(toon_chars),
    }
}

fn est_tokens(chars: usize) -> usize {
    (chars + 3) / 4
}
