//! Produces the two text views the rest of the engine operates on.

use unicode_normalization::char::decompose_compatible;

/// Replace NBSP with space, collapse whitespace runs, and trim.
fn collapse_whitespace(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| if c == '\u{00A0}' { ' ' } else { c })
        .collect();

    let mut out = String::with_capacity(replaced.len());
    let mut last_was_space = false;
    for c in replaced.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out.trim().to_string()
}

/// Strip accents from a single char by NFKD-decomposing it and keeping only
/// the first non-combining component. Guarantees exactly one output char per
/// input char, so `raw` and `search` always have matching char counts — see
/// SPEC_FULL.md §4.0.
fn strip_accent(c: char) -> char {
    let mut base = None;
    decompose_compatible(c, |d| {
        if base.is_none() && !unicode_normalization::char::is_combining_mark(d) {
            base = Some(d);
        }
    });
    base.unwrap_or(c)
}

/// The two views of an input string, plus the byte-offset tables needed to
/// translate a `raw` byte range into the equivalent `search` byte range.
pub struct Normalized {
    pub raw: String,
    pub search: String,
    /// Byte offset of the start of each char in `raw`, plus a trailing
    /// sentinel equal to `raw.len()`. Length is `nchars + 1`.
    raw_char_offsets: Vec<usize>,
    /// Same shape as `raw_char_offsets`, but for `search`.
    search_char_offsets: Vec<usize>,
}

impl Normalized {
    pub fn build(input: &str) -> Self {
        let raw = collapse_whitespace(input);

        let mut search = String::with_capacity(raw.len());
        let mut raw_char_offsets = Vec::new();
        let mut search_char_offsets = Vec::new();

        for (byte_off, c) in raw.char_indices() {
            raw_char_offsets.push(byte_off);
            search_char_offsets.push(search.len());
            // Keep strictly one output char per input char (see SPEC_FULL.md
            // §4.0) even for the rare codepoints whose `to_lowercase()`
            // expands to more than one char (e.g. Turkish İ).
            let folded = strip_accent(c).to_lowercase().next().unwrap_or(c);
            search.push(folded);
        }
        raw_char_offsets.push(raw.len());
        search_char_offsets.push(search.len());

        Normalized {
            raw,
            search,
            raw_char_offsets,
            search_char_offsets,
        }
    }

    /// Map a raw-view byte offset to its char index, so it can be looked up
    /// in `search_char_offsets` (both tables have one entry per char).
    fn raw_char_index_for_byte(&self, raw_byte_offset: usize) -> usize {
        self.raw_char_offsets
            .binary_search(&raw_byte_offset)
            .unwrap_or_else(|insertion| insertion.saturating_sub(1))
    }

    /// Extract a `search`-view window of `window_chars` on each side of the
    /// `raw`-view byte range `[start, end)`.
    pub fn search_window(&self, start: usize, end: usize, window_chars: usize) -> &str {
        let start_idx = self.raw_char_index_for_byte(start);
        let end_idx = self.raw_char_index_for_byte(end);

        let lo = start_idx.saturating_sub(window_chars);
        let hi = (end_idx + window_chars).min(self.search_char_offsets.len() - 1);

        let lo_byte = self.search_char_offsets[lo];
        let hi_byte = self.search_char_offsets[hi];
        &self.search[lo_byte..hi_byte]
    }

    /// Extract the `search`-view window strictly to the left of `start`
    /// (used by the full-name validator's trigger-phrase check).
    pub fn search_window_left(&self, start: usize, window_chars: usize) -> &str {
        let start_idx = self.raw_char_index_for_byte(start);
        let lo = start_idx.saturating_sub(window_chars);

        let lo_byte = self.search_char_offsets[lo];
        let hi_byte = self.search_char_offsets[start_idx];
        &self.search[lo_byte..hi_byte]
    }

    /// Extract a `raw`-view window (used for the `contexto` field on output).
    pub fn raw_window(&self, start: usize, end: usize, window_chars: usize) -> &str {
        let start_idx = self.raw_char_index_for_byte(start);
        let end_idx = self.raw_char_index_for_byte(end);

        let lo = start_idx.saturating_sub(window_chars);
        let hi = (end_idx + window_chars).min(self.raw_char_offsets.len() - 1);

        let lo_byte = self.raw_char_offsets[lo];
        let hi_byte = self.raw_char_offsets[hi];
        &self.raw[lo_byte..hi_byte]
    }
}
