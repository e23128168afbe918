//! Immutable decision configuration.

use serde::{Deserialize, Serialize};

/// Decision thresholds and escalation overrides. Built once, then held by
/// value and never mutated — callers construct a new `Policy` to change
/// behavior, they never mutate one in place.
///
/// The escalation booleans are overrides a caller can opt into; by default
/// they are all `false`, mirroring the behavior of the system this was
/// distilled from, which never consulted them (see DESIGN.md, "Open
/// Question: escalation booleans").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub score_block: i64,
    pub score_review: i64,

    pub escalate_if_cpf_cnpj_valid: bool,
    pub escalate_if_email_present: bool,
    pub escalate_if_phone_valid: bool,
    pub escalate_if_process_number_present: bool,
    pub escalate_if_phone_suspect_with_context: bool,
    pub escalate_if_hard_suspect_with_context: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            score_block: 8,
            score_review: 3,
            escalate_if_cpf_cnpj_valid: false,
            escalate_if_email_present: false,
            escalate_if_phone_valid: false,
            escalate_if_process_number_present: false,
            escalate_if_phone_suspect_with_context: false,
            escalate_if_hard_suspect_with_context: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let p = Policy::default();
        assert_eq!(p.score_block, 8);
        assert_eq!(p.score_review, 3);
    }

    #[test]
    fn partial_json_fills_in_remaining_defaults() {
        let p: Policy = serde_json::from_str(r#"{"score_block": 10}"#).unwrap();
        assert_eq!(p.score_block, 10);
        assert_eq!(p.score_review, 3);
    }
}
