//! # triagem-detect
//!
//! Detection engine for sensitive Brazilian personal data (CPF, CNPJ,
//! contact details, government identifiers, full names) inside free-form
//! text. Scores a document against a [`Policy`] and recommends one of
//! [`Status::Publish`], [`Status::Review`], [`Status::Block`], alongside an
//! anonymized rendering of the input.
//!
//! The entry points are [`analyze`] and [`analyze_table`]. Both are total:
//! every input, however malformed, produces a [`AnalysisResult`].

mod anonymizer;
mod batch;
mod context;
mod normalizer;
mod policy;
mod resolver;
mod result;
mod rules;
mod scanner;
mod scorer;
mod validators;

pub use batch::{analyze_table, RowResult};
pub use policy::Policy;
pub use result::{AnalysisResult, MatchRecord, Status};
pub use rules::rule_names;

use normalizer::Normalized;

/// Analyze a single piece of text against `policy`, returning a structured
/// result. Never panics, never errors: empty or pathological input simply
/// yields a `PUBLISH` result with no matches.
pub fn analyze(text: &str, policy: &Policy) -> AnalysisResult {
    let normalized = Normalized::build(text);
    if normalized.raw.is_empty() {
        return AnalysisResult::empty();
    }

    let candidates = scanner::scan(&normalized);
    let survivors = resolver::resolve_overlaps(candidates);
    let score: i64 = survivors.iter().map(|m| m.applied_weight).sum();
    let status = scorer::decide(score, policy, &survivors);
    let texto_anonimizado = anonymizer::anonymize(&normalized.raw, &survivors);

    AnalysisResult {
        status,
        score,
        total_matches: survivors.len(),
        matches: survivors
            .into_iter()
            .map(|m| m.into_record(&normalized))
            .collect(),
        texto_anonimizado,
    }
}
