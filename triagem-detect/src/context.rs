//! Generic context analyzer used by soft rules to decide whether a nearby
//! window of text makes a bare-number match plausible. Distinct from the
//! narrower, rule-specific keyword sets inside [`crate::validators`], which
//! gate individual contextual-ID rules; this is the catalog-wide keyword set
//! consulted by the scanner for every soft rule regardless of which one it
//! is (SPEC_FULL.md §4.3).

use crate::normalizer::Normalized;

const GENERIC_CONTEXT_KEYWORDS: &[&str] = &[
    // identifiers
    "rg",
    "identidade",
    "matricula",
    "inscricao",
    "siape",
    "nis",
    "pis",
    "pasep",
    "cnh",
    "titulo de eleitor",
    "nire",
    "protocolo",
    // contact
    "telefone",
    "celular",
    "whatsapp",
    "contato",
    "e-mail",
    "email",
    // address
    "endereco",
    "rua",
    "avenida",
    "bairro",
    "cep",
    "logradouro",
    // vital records
    "nascimento",
    "certidao",
    "obito",
    "casamento",
    // government / process
    "processo",
    "oficio",
    "requerimento",
    "sei",
    "cnj",
    // education / civil
    "matricula escolar",
    "aluno",
    "servidor",
    "funcionario",
    "cidadao",
    "requerente",
];

const CONTEXT_WINDOW_CHARS: usize = 110;

/// Whether any catalog-wide context keyword appears within
/// [`CONTEXT_WINDOW_CHARS`] of the match span.
pub fn has_generic_context(normalized: &Normalized, start: usize, end: usize) -> bool {
    let window = normalized.search_window(start, end, CONTEXT_WINDOW_CHARS);
    GENERIC_CONTEXT_KEYWORDS.iter().any(|kw| window.contains(kw))
}
