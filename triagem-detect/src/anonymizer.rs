//! Masks every surviving match span with `*`, preserving the original
//! length and every byte outside a match span untouched.

use crate::scanner::Candidate;

pub fn anonymize(raw: &str, survivors: &[Candidate]) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut cursor = 0usize;

    for candidate in survivors {
        out.push_str(&raw[cursor..candidate.start]);
        out.extend(std::iter::repeat('*').take(raw[candidate.start..candidate.end].chars().count()));
        cursor = candidate.end;
    }
    out.push_str(&raw[cursor..]);
    out
}
