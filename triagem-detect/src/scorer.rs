//! Turns a numeric score and the surviving matches into a [`Status`].

use crate::policy::Policy;
use crate::result::Status;
use crate::scanner::Candidate;

pub fn decide(score: i64, policy: &Policy, survivors: &[Candidate]) -> Status {
    if score >= policy.score_block || blocks(policy, survivors) {
        return Status::Block;
    }

    if score >= policy.score_review || reviews(policy, survivors) {
        Status::Review
    } else {
        Status::Publish
    }
}

/// The four `escalate_if_*` flags named after original_source's
/// `bloquear_se_*` booleans: a hit forces `Status::Block` outright.
fn blocks(policy: &Policy, survivors: &[Candidate]) -> bool {
    let has = |name: &str| survivors.iter().any(|c| c.rule_name == name);

    (policy.escalate_if_cpf_cnpj_valid && (has("cpf") || has("cnpj")))
        || (policy.escalate_if_email_present && has("email"))
        || (policy.escalate_if_phone_valid && has("telefone"))
        || (policy.escalate_if_process_number_present && (has("processo_cnj") || has("processo_sei")))
}

/// The two `escalate_if_*` flags named after original_source's
/// `revisar_se_*` booleans: a hit forces `Status::Review`, never `Block`.
fn reviews(policy: &Policy, survivors: &[Candidate]) -> bool {
    (policy.escalate_if_phone_suspect_with_context
        && survivors
            .iter()
            .any(|c| c.rule_name == "telefone" && c.motivo == Some("soft_com_contexto")))
        || (policy.escalate_if_hard_suspect_with_context
            && survivors.iter().any(|c| {
                matches!(
                    c.motivo,
                    Some("cpf_suspeito_dv") | Some("cnpj_suspeito_dv") | Some("email_tld_suspeito")
                )
            }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_at_or_above_block_threshold_blocks_regardless_of_policy() {
        let policy = Policy::default();
        assert_eq!(decide(8, &policy, &[]), Status::Block);
        assert_eq!(decide(20, &policy, &[]), Status::Block);
    }

    #[test]
    fn score_at_or_above_review_threshold_reviews() {
        let policy = Policy::default();
        assert_eq!(decide(3, &policy, &[]), Status::Review);
    }

    #[test]
    fn score_below_review_threshold_publishes_by_default() {
        let policy = Policy::default();
        assert_eq!(decide(2, &policy, &[]), Status::Publish);
    }

    #[test]
    fn revisar_escalation_forces_review_below_threshold() {
        let policy = Policy {
            escalate_if_phone_suspect_with_context: true,
            ..Policy::default()
        };
        let mut candidate = Candidate::new_for_test_named("telefone", 0, 5, 1);
        candidate.motivo = Some("soft_com_contexto");
        assert_eq!(decide(1, &policy, &[candidate]), Status::Review);
    }

    #[test]
    fn bloquear_escalation_forces_block_below_threshold() {
        let policy = Policy {
            escalate_if_email_present: true,
            ..Policy::default()
        };
        let survivors = vec![Candidate::new_for_test_named("email", 0, 5, 1)];
        assert_eq!(decide(1, &policy, &survivors), Status::Block);
    }
}
