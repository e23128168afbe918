//! The static, ordered rule catalog. Built once and shared by reference —
//! rule order here does not affect which matches survive (see the overlap
//! resolver), only the tiebreak-of-last-resort.

use regex::Regex;
use std::sync::LazyLock;

use crate::validators::ValidatorKind;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RuleKind {
    Hard,
    Soft,
}

pub struct Rule {
    pub name: &'static str,
    pub pattern: &'static LazyLock<Regex>,
    pub kind: RuleKind,
    pub base_weight: i64,
    pub priority: u8,
    pub validator: Option<ValidatorKind>,
    pub min_len: usize,
    pub require_context: bool,
    pub weight_without_context: i64,
    pub context_boost: i64,
}

macro_rules! rule_regex {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!("invalid pattern for ", stringify!($name))));
    };
}

rule_regex!(RE_CPF, r"(?i)\b(?:\d{3}\.?\d{3}\.?\d{3}-?\d{2}|\d{11})\b");
rule_regex!(RE_CNPJ, r"(?i)\b(?:\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}|\d{14})\b");
rule_regex!(RE_EMAIL, r"(?i)\b[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,24}\b");
rule_regex!(RE_TELEFONE, r"(?i)(?:\+?55\s*)?\(?\d{2}\)?[\s.-]?9?\d{4}[\s.-]?\d{4}\b");
rule_regex!(RE_PROCESSO_CNJ, r"\b\d{7}-\d{2}\.\d{4}\.\d\.\d{2}\.\d{4}\b");
rule_regex!(RE_PROCESSO_SEI, r"\b\d{5}\.\d{6}/\d{4}-\d{2}\b");
rule_regex!(RE_CEP, r"\b\d{5}-?\d{3}\b");
rule_regex!(RE_PLACA, r"(?i)\b[A-Z]{3}\d[A-Z0-9]\d{2}\b");
rule_regex!(
    RE_DATA,
    r"\b(?:0?[1-9]|[12]\d|3[01])[/\-](?:0?[1-9]|1[0-2])[/\-](?:19|20)\d{2}\b"
);
rule_regex!(RE_RG, r"(?i)\b\d{1,2}\.?\d{3}\.?\d{3}-?[\dXx]\b");
rule_regex!(RE_MATRICULA, r"(?i)\b\d{5,10}\b");
rule_regex!(RE_INSCRICAO, r"(?i)\b\d{6,12}\b");
rule_regex!(RE_SIAPE, r"(?i)\b\d{6,7}\b");
rule_regex!(RE_NIS_PIS_PASEP, r"(?i)\b\d{3}\.?\d{5}\.?\d{2}-?\d\b");
rule_regex!(RE_CNH, r"(?i)\b\d{11}\b");
rule_regex!(RE_TITULO_ELEITOR, r"(?i)\b\d{12}\b");
rule_regex!(RE_NIRE, r"(?i)\b\d{2}\.?\d{6,7}-?\d\b");
rule_regex!(RE_ID_ROTULADO, r"(?i)\b\d{4,14}\b");
rule_regex!(
    RE_NOME_COMPLETO,
    r"\b[A-ZÀ-Ý][a-zà-ÿ]+(?:\s+[A-ZÀ-Ýa-zà-ÿ'\-]+){1,5}\b"
);

const ID_KEYWORDS_RG: &[&str] = &["rg", "identidade", "carteira de identidade", "orgao expedidor"];
const ID_KEYWORDS_MATRICULA: &[&str] = &["matricula", "servidor", "funcional"];
const ID_KEYWORDS_INSCRICAO: &[&str] = &["inscricao", "inscrição", "cadastro", "contribuinte"];
const ID_KEYWORDS_SIAPE: &[&str] = &["siape"];
const ID_KEYWORDS_NIS: &[&str] = &["nis", "pis", "pasep", "beneficio", "bolsa familia"];
const ID_KEYWORDS_CNH: &[&str] = &["cnh", "carteira de motorista", "habilitacao"];
const ID_KEYWORDS_TITULO: &[&str] = &["titulo de eleitor", "zona eleitoral", "secao eleitoral"];
const ID_KEYWORDS_NIRE: &[&str] = &["nire", "junta comercial"];
const ID_KEYWORDS_ROTULADO: &[&str] = &["protocolo", "numero do documento", "identificador"];

fn contextual(keywords: &'static [&'static str], reject_reason: &'static str) -> ValidatorKind {
    ValidatorKind::ContextualId {
        keywords,
        reject_reason,
    }
}

static CATALOG: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            name: "cpf",
            pattern: &RE_CPF,
            kind: RuleKind::Hard,
            base_weight: 6,
            priority: 1,
            validator: Some(ValidatorKind::Cpf),
            min_len: 11,
            require_context: false,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "cnpj",
            pattern: &RE_CNPJ,
            kind: RuleKind::Hard,
            base_weight: 6,
            priority: 1,
            validator: Some(ValidatorKind::Cnpj),
            min_len: 14,
            require_context: false,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "email",
            pattern: &RE_EMAIL,
            kind: RuleKind::Hard,
            base_weight: 5,
            priority: 2,
            validator: Some(ValidatorKind::EmailTld),
            min_len: 5,
            require_context: false,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "telefone",
            pattern: &RE_TELEFONE,
            kind: RuleKind::Hard,
            base_weight: 2,
            priority: 2,
            validator: Some(ValidatorKind::Phone),
            min_len: 8,
            require_context: false,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "processo_cnj",
            pattern: &RE_PROCESSO_CNJ,
            kind: RuleKind::Hard,
            base_weight: 5,
            priority: 3,
            validator: None,
            min_len: 20,
            require_context: false,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "processo_sei",
            pattern: &RE_PROCESSO_SEI,
            kind: RuleKind::Hard,
            base_weight: 4,
            priority: 3,
            validator: None,
            min_len: 18,
            require_context: false,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "nome_completo",
            pattern: &RE_NOME_COMPLETO,
            kind: RuleKind::Hard,
            base_weight: 4,
            priority: 4,
            validator: Some(ValidatorKind::FullName),
            min_len: 5,
            require_context: false,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "rg",
            pattern: &RE_RG,
            kind: RuleKind::Soft,
            base_weight: 3,
            priority: 5,
            validator: Some(contextual(ID_KEYWORDS_RG, "rg_sem_contexto")),
            min_len: 7,
            require_context: true,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "matricula",
            pattern: &RE_MATRICULA,
            kind: RuleKind::Soft,
            base_weight: 3,
            priority: 5,
            validator: Some(contextual(ID_KEYWORDS_MATRICULA, "matricula_sem_contexto")),
            min_len: 5,
            require_context: true,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "inscricao",
            pattern: &RE_INSCRICAO,
            kind: RuleKind::Soft,
            base_weight: 3,
            priority: 5,
            validator: Some(contextual(ID_KEYWORDS_INSCRICAO, "inscricao_sem_contexto")),
            min_len: 6,
            require_context: true,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "siape",
            pattern: &RE_SIAPE,
            kind: RuleKind::Soft,
            base_weight: 3,
            priority: 5,
            validator: Some(contextual(ID_KEYWORDS_SIAPE, "siape_sem_contexto")),
            min_len: 6,
            require_context: true,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "nis_pis_pasep",
            pattern: &RE_NIS_PIS_PASEP,
            kind: RuleKind::Soft,
            base_weight: 3,
            priority: 5,
            validator: Some(contextual(ID_KEYWORDS_NIS, "nis_sem_contexto")),
            min_len: 11,
            require_context: true,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "cnh_numero",
            pattern: &RE_CNH,
            kind: RuleKind::Soft,
            base_weight: 3,
            priority: 5,
            validator: Some(contextual(ID_KEYWORDS_CNH, "cnh_sem_contexto")),
            min_len: 11,
            require_context: true,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "titulo_eleitor_numero",
            pattern: &RE_TITULO_ELEITOR,
            kind: RuleKind::Soft,
            base_weight: 3,
            priority: 5,
            validator: Some(contextual(ID_KEYWORDS_TITULO, "titulo_sem_contexto")),
            min_len: 12,
            require_context: true,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "nire",
            pattern: &RE_NIRE,
            kind: RuleKind::Soft,
            base_weight: 3,
            priority: 5,
            validator: Some(contextual(ID_KEYWORDS_NIRE, "nire_sem_contexto")),
            min_len: 9,
            require_context: true,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "id_documental_rotulado",
            pattern: &RE_ID_ROTULADO,
            kind: RuleKind::Soft,
            base_weight: 3,
            priority: 5,
            validator: Some(contextual(ID_KEYWORDS_ROTULADO, "id_rotulado_sem_contexto")),
            min_len: 4,
            require_context: true,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "cep",
            pattern: &RE_CEP,
            kind: RuleKind::Hard,
            base_weight: 3,
            priority: 6,
            validator: Some(ValidatorKind::Cep),
            min_len: 8,
            require_context: false,
            weight_without_context: 0,
            context_boost: 0,
        },
        Rule {
            name: "placa_veiculo",
            pattern: &RE_PLACA,
            kind: RuleKind::Soft,
            base_weight: 2,
            priority: 7,
            validator: None,
            min_len: 7,
            require_context: false,
            weight_without_context: 1,
            context_boost: 2,
        },
        Rule {
            name: "data",
            pattern: &RE_DATA,
            kind: RuleKind::Soft,
            base_weight: 1,
            priority: 8,
            validator: Some(ValidatorKind::Date),
            min_len: 8,
            require_context: false,
            weight_without_context: 1,
            context_boost: 1,
        },
    ]
});

/// The rule catalog, built once and shared by reference.
pub fn catalog() -> &'static [Rule] {
    &CATALOG
}

/// Stable identifiers of every rule in the catalog, in catalog order.
pub fn rule_names() -> Vec<&'static str> {
    CATALOG.iter().map(|r| r.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_pattern_compiles_and_is_unique() {
        let names = rule_names();
        assert_eq!(names.len(), 19);
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len(), "duplicate rule name in catalog");
    }
}
