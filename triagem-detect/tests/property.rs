use proptest::prelude::*;
use triagem_detect::{analyze, Policy};

// ── Surviving matches never overlap: their combined length equals exactly
// the number of mask characters in the anonymized text ────────────────────

proptest! {
    #[test]
    fn match_spans_account_for_every_masked_char(
        text in "(CPF [0-9]{3}\\.[0-9]{3}\\.[0-9]{3}-[0-9]{2}|email [a-z]{3,8}@[a-z]{3,8}\\.com|[a-zA-Z ]{0,40}){0,6}"
    ) {
        let policy = Policy::default();
        let result = analyze(&text, &policy);
        let masked_chars = result.texto_anonimizado.chars().filter(|&c| c == '*').count();
        let matched_chars: usize = result.matches.iter().map(|m| m.valor_detectado.chars().count()).sum();
        prop_assert_eq!(masked_chars, matched_chars);
    }
}

// ── Anonymized text preserves length and only touches match spans ─────────

fn collapse_whitespace_len(text: &str) -> usize {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;
    for c in text.chars() {
        let c = if c == '\u{00A0}' { ' ' } else { c };
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out.trim().chars().count()
}

proptest! {
    #[test]
    fn anonymized_text_preserves_length(text in ".{0,200}") {
        let policy = Policy::default();
        let result = analyze(&text, &policy);
        prop_assert_eq!(result.texto_anonimizado.chars().count(), collapse_whitespace_len(&text));
    }
}

// ── score equals the sum of the surviving matches' own scores ─────────────

proptest! {
    #[test]
    fn score_equals_sum_of_match_scores(text in ".{0,200}") {
        let policy = Policy::default();
        let result = analyze(&text, &policy);
        let sum: i64 = result.matches.iter().map(|m| m.score).sum();
        prop_assert_eq!(result.score, sum);
    }
}

// ── Determinism: identical input and policy always produce identical output ─

proptest! {
    #[test]
    fn analyze_is_deterministic(text in ".{0,200}") {
        let policy = Policy::default();
        let first = analyze(&text, &policy);
        let second = analyze(&text, &policy);
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.total_matches, second.total_matches);
        prop_assert_eq!(first.texto_anonimizado, second.texto_anonimizado);
    }
}

// ── Text with no catalog pattern in it never scores ────────────────────────

proptest! {
    #[test]
    fn prose_with_no_identifiers_never_scores(text in "[a-zA-Z ]{0,80}") {
        let policy = Policy::default();
        let result = analyze(&text, &policy);
        prop_assert_eq!(result.score, 0);
    }
}

// ── Masking an already-anonymized text finds nothing further to mask ───────

proptest! {
    #[test]
    fn anonymized_output_is_idempotent_under_re_analysis(
        text in "CPF [0-9]{3}\\.[0-9]{3}\\.[0-9]{3}-[0-9]{2}"
    ) {
        let policy = Policy::default();
        let first = analyze(&text, &policy);
        let second = analyze(&first.texto_anonimizado, &policy);
        prop_assert_eq!(second.score, 0);
    }
}
