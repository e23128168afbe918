//! Applies every rule in the catalog to the normalized text, running each
//! match through its validator and the soft-rule context test to produce
//! the set of overlap candidates.

use crate::context;
use crate::normalizer::Normalized;
use crate::result::MatchRecord;
use crate::rules::{self, RuleKind};
use crate::validators::{self, Outcome};

/// A single regex match that survived its validator, still possibly
/// overlapping with other candidates.
pub struct Candidate {
    pub rule_name: &'static str,
    pub priority: u8,
    pub start: usize,
    pub end: usize,
    pub applied_weight: i64,
    valor_detectado: String,
    valor_normalizado: Option<String>,
    pub motivo: Option<&'static str>,
}

impl Candidate {
    #[cfg(test)]
    pub(crate) fn new_for_test(start: usize, end: usize, priority: u8, applied_weight: i64) -> Self {
        Candidate {
            rule_name: "test",
            priority,
            start,
            end,
            applied_weight,
            valor_detectado: String::new(),
            valor_normalizado: None,
            motivo: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test_named(rule_name: &'static str, start: usize, end: usize, applied_weight: i64) -> Self {
        Candidate {
            rule_name,
            priority: 1,
            start,
            end,
            applied_weight,
            valor_detectado: String::new(),
            valor_normalizado: None,
            motivo: None,
        }
    }

    pub fn into_record(self, normalized: &Normalized) -> MatchRecord {
        let contexto = normalized.raw_window(self.start, self.end, 40).to_string();
        MatchRecord {
            tipo: self.rule_name,
            valor_detectado: self.valor_detectado,
            valor_normalizado: self.valor_normalizado,
            motivo: self.motivo,
            contexto,
            score: self.applied_weight,
        }
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(len = normalized.raw.len()))]
pub fn scan(normalized: &Normalized) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for rule in rules::catalog() {
        for m in rule.pattern.find_iter(&normalized.raw) {
            let (start, end) = (m.start(), m.end());
            let raw_substr = m.as_str();

            if raw_substr.chars().filter(|c| c.is_alphanumeric()).count() < rule.min_len {
                continue;
            }

            tracing::trace!(rule = rule.name, start, end, "candidate match found");

            let (valor_normalizado, reason) = match rule.validator {
                Some(kind) => match validators::run(kind, raw_substr, normalized, start, end) {
                    Outcome::Rejected => continue,
                    Outcome::Accepted { normalized, reason } => (normalized, reason),
                },
                None => (None, None),
            };

            let has_context = context::has_generic_context(normalized, start, end);

            let applied_weight = match rule.kind {
                RuleKind::Hard => rule.base_weight,
                RuleKind::Soft => {
                    if rule.require_context && !has_context {
                        continue;
                    }
                    if has_context {
                        rule.base_weight.max(rule.weight_without_context) + rule.context_boost
                    } else if rule.weight_without_context > 0 {
                        rule.weight_without_context
                    } else {
                        continue;
                    }
                }
            };

            let motivo = reason.or(match rule.kind {
                RuleKind::Hard => Some("padrao_direto"),
                RuleKind::Soft if has_context => Some("soft_com_contexto"),
                RuleKind::Soft => Some("soft_sem_contexto"),
            });

            candidates.push(Candidate {
                rule_name: rule.name,
                priority: rule.priority,
                start,
                end,
                applied_weight,
                valor_detectado: raw_substr.to_string(),
                valor_normalizado,
                motivo,
            });
        }
    }

    tracing::debug!(count = candidates.len(), "scan produced candidates");
    candidates
}
