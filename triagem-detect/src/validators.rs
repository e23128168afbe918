//! Semantic validators attached to rules. Each either accepts a syntactic
//! match (optionally producing a normalized value and a reason) or rejects
//! it outright — rejections simply elide the match, per SPEC_FULL.md §7.

use crate::normalizer::Normalized;

/// Outcome of running a validator over a candidate match.
pub enum Outcome {
    Accepted {
        normalized: Option<String>,
        reason: Option<&'static str>,
    },
    Rejected,
}

/// Which validator a rule is wired to. A tagged variant rather than a boxed
/// closure keeps the catalog data-shaped and allocation-free, per the
/// original spec's re-architecture note (§9).
#[derive(Clone, Copy)]
pub enum ValidatorKind {
    Cpf,
    Cnpj,
    Phone,
    Cep,
    EmailTld,
    Date,
    ContextualId {
        keywords: &'static [&'static str],
        reject_reason: &'static str,
    },
    FullName,
}

pub fn run(kind: ValidatorKind, raw_substr: &str, normalized: &Normalized, start: usize, end: usize) -> Outcome {
    match kind {
        ValidatorKind::Cpf => validate_cpf(raw_substr, normalized, start, end),
        ValidatorKind::Cnpj => validate_cnpj(raw_substr, normalized, start, end),
        ValidatorKind::Phone => validate_phone(raw_substr, normalized, start, end),
        ValidatorKind::Cep => validate_cep(raw_substr, normalized, start, end),
        ValidatorKind::EmailTld => validate_email_tld(raw_substr),
        ValidatorKind::Date => Outcome::Accepted {
            normalized: None,
            reason: None,
        },
        ValidatorKind::ContextualId {
            keywords,
            reject_reason,
        } => validate_contextual_id(raw_substr, normalized, start, end, keywords, reject_reason),
        ValidatorKind::FullName => validate_full_name(raw_substr, normalized, start, end),
    }
}

fn only_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn all_digits_equal(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => true,
    }
}

fn dv_weighted(digits: &[u8], first_weight: u32) -> u8 {
    let mut sum: u32 = 0;
    let mut weight = first_weight;
    for &d in digits {
        sum += d as u32 * weight;
        weight -= 1;
    }
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        (11 - rem) as u8
    }
}

fn digit_bytes(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

// ── CPF ──────────────────────────────────────────────────────────────────

fn validate_cpf(raw_substr: &str, normalized: &Normalized, start: usize, end: usize) -> Outcome {
    let digits = only_digits(raw_substr);
    if digits.len() != 11 || all_digits_equal(&digits) {
        return Outcome::Rejected;
    }
    let nums = digit_bytes(&digits);
    let d1 = dv_weighted(&nums[0..9], 10);
    let mut first10 = nums[0..9].to_vec();
    first10.push(d1);
    let d2 = dv_weighted(&first10, 11);

    if nums[9] == d1 && nums[10] == d2 {
        return Outcome::Accepted {
            normalized: Some(digits),
            reason: None,
        };
    }

    let window = normalized.search_window(start, end, 80);
    if window.contains("cpf") {
        Outcome::Accepted {
            normalized: Some(digits),
            reason: Some("cpf_suspeito_dv"),
        }
    } else {
        Outcome::Rejected
    }
}

// ── CNPJ ─────────────────────────────────────────────────────────────────

const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn cnpj_dv(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits.iter().zip(weights).map(|(&d, &w)| d as u32 * w).sum();
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        (11 - rem) as u8
    }
}

fn validate_cnpj(raw_substr: &str, normalized: &Normalized, start: usize, end: usize) -> Outcome {
    let digits = only_digits(raw_substr);
    if digits.len() != 14 || all_digits_equal(&digits) {
        return Outcome::Rejected;
    }
    let nums = digit_bytes(&digits);
    let d1 = cnpj_dv(&nums[0..12], &CNPJ_WEIGHTS_1);
    let mut first13 = nums[0..12].to_vec();
    first13.push(d1);
    let d2 = cnpj_dv(&first13, &CNPJ_WEIGHTS_2);

    if nums[12] == d1 && nums[13] == d2 {
        return Outcome::Accepted {
            normalized: Some(digits),
            reason: None,
        };
    }

    let window = normalized.search_window(start, end, 80);
    if window.contains("cnpj") {
        Outcome::Accepted {
            normalized: Some(digits),
            reason: Some("cnpj_suspeito_dv"),
        }
    } else {
        Outcome::Rejected
    }
}

// ── Phone ────────────────────────────────────────────────────────────────

const PHONE_NEGATIVE_CONTEXT: &[&str] = &[
    "nire",
    "protocolo",
    "processo",
    "sei",
    "cnj",
    "matricula",
    "cda",
    "empenho",
    "nota fiscal",
    "nf",
    "id",
    "inscricao",
];

fn validate_phone(raw_substr: &str, normalized: &Normalized, start: usize, end: usize) -> Outcome {
    let mut digits = only_digits(raw_substr);
    if digits.is_empty() {
        return Outcome::Rejected;
    }

    let window = normalized.search_window(start, end, 60);
    if PHONE_NEGATIVE_CONTEXT.iter().any(|kw| window.contains(kw)) {
        return Outcome::Rejected;
    }

    if (digits.len() == 12 || digits.len() == 13) && digits.starts_with("55") {
        digits = digits[2..].to_string();
    }

    if digits.len() != 10 && digits.len() != 11 {
        return Outcome::Rejected;
    }

    let ddd: i32 = digits[0..2].parse().unwrap_or(0);
    if !(11..=99).contains(&ddd) {
        return Outcome::Rejected;
    }

    if digits.len() == 11 && digits.as_bytes()[2] != b'9' {
        return Outcome::Rejected;
    }

    Outcome::Accepted {
        normalized: Some(digits),
        reason: None,
    }
}

// ── CEP ──────────────────────────────────────────────────────────────────

const ADDRESS_KEYWORDS: &[&str] = &[
    "endereco",
    "rua",
    "avenida",
    "av",
    "travessa",
    "bairro",
    "cep",
    "logradouro",
    "quadra",
    "lote",
    "setor",
    "residencia",
];

fn validate_cep(raw_substr: &str, normalized: &Normalized, start: usize, end: usize) -> Outcome {
    let digits = only_digits(raw_substr);
    if digits.len() != 8 {
        return Outcome::Rejected;
    }
    let window = normalized.search_window(start, end, 90);
    if ADDRESS_KEYWORDS.iter().any(|kw| window.contains(kw)) {
        Outcome::Accepted {
            normalized: Some(digits),
            reason: None,
        }
    } else {
        Outcome::Rejected
    }
}

// ── Email TLD heuristic ─────────────────────────────────────────────────

const STANDARD_TLDS: &[&str] = &["com", "org", "net", "edu", "gov", "br"];
const STANDARD_COMPOUNDS: &[&str] = &[".com.br", ".gov.br", ".org.br", ".net.br", ".edu.br"];

fn validate_email_tld(raw_substr: &str) -> Outcome {
    let domain = raw_substr.rsplit('@').next().unwrap_or("").to_lowercase();
    let tld = domain.rsplit('.').next().unwrap_or("");

    let tld_shape_ok = (2..=24).contains(&tld.chars().count())
        && !tld.is_empty()
        && tld.chars().all(|c| c.is_ascii_alphabetic());

    let reason = if !tld_shape_ok {
        Some("email_tld_suspeito")
    } else if STANDARD_TLDS.contains(&tld) || STANDARD_COMPOUNDS.iter().any(|c| domain.ends_with(c)) {
        None
    } else {
        Some("email_tld_incomum")
    };

    Outcome::Accepted {
        normalized: Some(raw_substr.to_lowercase()),
        reason,
    }
}

// ── Contextual-ID factory ───────────────────────────────────────────────

fn is_isolated_year(normalized: &str) -> bool {
    normalized.len() == 4
        && normalized.chars().all(|c| c.is_ascii_digit())
        && (normalized.starts_with("19") || normalized.starts_with("20"))
}

fn validate_contextual_id(
    raw_substr: &str,
    normalized: &Normalized,
    start: usize,
    end: usize,
    keywords: &'static [&'static str],
    reject_reason: &'static str,
) -> Outcome {
    let value: String = raw_substr.chars().filter(|c| c.is_alphanumeric()).collect();
    if value.chars().count() < 4 || is_isolated_year(&value) {
        return Outcome::Rejected;
    }

    let window = normalized.search_window(start, end, 140);
    if keywords.iter().any(|kw| window.contains(kw)) {
        Outcome::Accepted {
            normalized: Some(value),
            reason: None,
        }
    } else {
        let _ = reject_reason; // rejections elide the match; reason kept for documentation/tests
        Outcome::Rejected
    }
}

// ── Full-name contextual ────────────────────────────────────────────────

const NAME_TRIGGER_PHRASES: &[&str] = &[
    "nome:",
    "requerente:",
    "interessado:",
    "servidor:",
    "responsavel:",
    "representante:",
    "advogado:",
];

const NAME_STOP_PHRASES: &[&str] = &["parte representada", "nome do requerente"];

const NAME_ORG_WORDS: &[&str] = &[
    "secretaria",
    "ministerio",
    "prefeitura",
    "tribunal",
    "universidade",
    "fundacao",
    "camara",
    "assembleia",
    "delegacia",
    "departamento",
    "coordenadoria",
    "superintendencia",
];

fn validate_full_name(raw_substr: &str, normalized: &Normalized, start: usize, end: usize) -> Outcome {
    if raw_substr.split_whitespace().count() < 2 {
        return Outcome::Rejected;
    }

    let left_window = normalized.search_window_left(start, 140);
    if !NAME_TRIGGER_PHRASES.iter().any(|t| left_window.contains(t)) {
        return Outcome::Rejected;
    }

    let both_window = normalized.search_window(start, end, 90);
    if NAME_STOP_PHRASES.iter().any(|s| both_window.contains(s)) {
        return Outcome::Rejected;
    }
    if NAME_ORG_WORDS.iter().any(|o| both_window.contains(o)) {
        return Outcome::Rejected;
    }

    Outcome::Accepted {
        normalized: Some(raw_substr.trim().to_string()),
        reason: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::Normalized;

    fn norm(s: &str) -> Normalized {
        Normalized::build(s)
    }

    #[test]
    fn cpf_checksum_accepts_valid_number() {
        let text = "CPF 390.533.447-05";
        let n = norm(text);
        let start = n.raw.find("390").unwrap();
        let end = start + "390.533.447-05".len();
        match validate_cpf("390.533.447-05", &n, start, end) {
            Outcome::Accepted { normalized, reason } => {
                assert_eq!(normalized.as_deref(), Some("39053344705"));
                assert!(reason.is_none());
            }
            Outcome::Rejected => panic!("expected accept"),
        }
    }

    #[test]
    fn cpf_all_equal_rejected() {
        let text = "CPF 111.111.111-11";
        let n = norm(text);
        let start = n.raw.find("111").unwrap();
        let end = start + "111.111.111-11".len();
        assert!(matches!(
            validate_cpf("111.111.111-11", &n, start, end),
            Outcome::Rejected
        ));
    }

    #[test]
    fn cpf_bad_checksum_with_context_is_suspect() {
        let text = "cpf 390.533.447-00";
        let n = norm(text);
        let start = n.raw.find("390").unwrap();
        let end = start + "390.533.447-00".len();
        match validate_cpf("390.533.447-00", &n, start, end) {
            Outcome::Accepted { reason, .. } => assert_eq!(reason, Some("cpf_suspeito_dv")),
            Outcome::Rejected => panic!("expected suspect accept"),
        }
    }

    #[test]
    fn phone_requires_ddd_and_ninth_digit() {
        let text = "ligue para (61) 98888-7777 para marcar consulta";
        let n = norm(text);
        let start = n.raw.find("(61)").unwrap();
        let end = n.raw.find("7777").unwrap() + 4;
        let raw_substr = &n.raw[start..end];
        match validate_phone(raw_substr, &n, start, end) {
            Outcome::Accepted { normalized, .. } => {
                assert_eq!(normalized.as_deref(), Some("61988887777"))
            }
            Outcome::Rejected => panic!("expected accept"),
        }
    }

    #[test]
    fn cep_requires_address_context() {
        let text = "numero da sorte de hoje: 70070-010";
        let n = norm(text);
        let start = n.raw.find("70070").unwrap();
        let end = start + "70070-010".len();
        assert!(matches!(
            validate_cep("70070-010", &n, start, end),
            Outcome::Rejected
        ));

        let text2 = "Rua das Flores, CEP 70070-010";
        let n2 = norm(text2);
        let start2 = n2.raw.find("70070").unwrap();
        let end2 = start2 + "70070-010".len();
        assert!(matches!(
            validate_cep("70070-010", &n2, start2, end2),
            Outcome::Accepted { .. }
        ));
    }

    #[test]
    fn email_tld_heuristic_flags_uncommon_tld() {
        match validate_email_tld("joao@exemplo.xyz") {
            Outcome::Accepted { reason, .. } => assert_eq!(reason, Some("email_tld_incomum")),
            Outcome::Rejected => panic!("email always accepts"),
        }
        match validate_email_tld("joao@gmail.com") {
            Outcome::Accepted { reason, .. } => assert!(reason.is_none()),
            Outcome::Rejected => panic!("email always accepts"),
        }
    }
}
