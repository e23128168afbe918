//! Applies [`crate::analyze`] to each row of tabular input. Row parsing and
//! file I/O are a CLI collaborator's concern (see `triagem-cli`); this
//! module only knows how to turn a `&str` column into a [`RowResult`].

use serde::Serialize;

use crate::policy::Policy;
use crate::result::AnalysisResult;
use crate::{analyze, Status};

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Serialize)]
pub struct RowResult {
    pub index: usize,
    pub preview: String,
    pub status: Status,
    pub score: i64,
    pub total_matches: usize,
    pub texto_anonimizado: String,
}

impl RowResult {
    fn from_analysis(index: usize, text: &str, result: AnalysisResult) -> Self {
        RowResult {
            index,
            preview: preview(text),
            status: result.status,
            score: result.score,
            total_matches: result.total_matches,
            texto_anonimizado: result.texto_anonimizado,
        }
    }
}

fn preview(text: &str) -> String {
    let truncated: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        format!("{truncated}…")
    } else {
        truncated
    }
}

/// Run [`analyze`] over every row, in order. Never errors: a row that is
/// empty or otherwise pathological simply yields a `PUBLISH` result.
pub fn analyze_table<'a, I>(rows: I, policy: &Policy) -> Vec<RowResult>
where
    I: IntoIterator<Item = &'a str>,
{
    rows.into_iter()
        .enumerate()
        .map(|(index, text)| RowResult::from_analysis(index, text, analyze(text, policy)))
        .collect()
}
