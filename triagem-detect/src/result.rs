//! The value returned by [`crate::analyze`].

use serde::Serialize;

/// Recommended downstream action for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Publish,
    Review,
    Block,
}

/// One surviving, non-overlapping finding, in the wire shape from
/// SPEC_FULL.md §6.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub tipo: &'static str,
    pub valor_detectado: String,
    pub valor_normalizado: Option<String>,
    pub motivo: Option<&'static str>,
    pub contexto: String,
    pub score: i64,
}

/// The complete result of one [`crate::analyze`] call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub status: Status,
    pub score: i64,
    pub total_matches: usize,
    pub matches: Vec<MatchRecord>,
    pub texto_anonimizado: String,
}

impl AnalysisResult {
    pub(crate) fn empty() -> Self {
        AnalysisResult {
            status: Status::Publish,
            score: 0,
            total_matches: 0,
            matches: Vec::new(),
            texto_anonimizado: String::new(),
        }
    }
}
