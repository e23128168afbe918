//! Resolves overlapping candidate matches into a non-overlapping, ascending
//! set, deterministically: sorted by `(start, priority, -weight, -len)`,
//! then swept left to right holding a `current` match and replacing it
//! with any overlapping candidate whose `(priority, -weight, -len)` key
//! is strictly better (SPEC_FULL.md §4.4).

use crate::scanner::Candidate;

/// `(priority, -applied_weight, -length)`: lower sorts better.
fn tie_break_key(c: &Candidate) -> (u8, i64, i64) {
    (c.priority, -c.applied_weight, -((c.end - c.start) as i64))
}

#[tracing::instrument(level = "debug", skip_all, fields(candidates = candidates.len()))]
pub fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.priority.cmp(&b.priority))
            .then(b.applied_weight.cmp(&a.applied_weight))
            .then((b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut iter = candidates.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut survivors = Vec::new();
    for candidate in iter {
        if candidate.start >= current.end {
            survivors.push(current);
            current = candidate;
        } else if tie_break_key(&candidate) < tie_break_key(&current) {
            tracing::trace!(
                rule = candidate.rule_name,
                over = current.rule_name,
                "candidate displaces committed match"
            );
            current = candidate;
        }
    }
    survivors.push(current);
    tracing::debug!(count = survivors.len(), "overlap resolution produced survivors");
    survivors
}
