//! Property-based tests for the segmenter and conversion pipeline.
//!
//! Generates random spelling sequences and raw alphabet soup via proptest
//! and verifies the structural invariants: exact input coverage, table
//! closure of non-invalid tokens, and all-or-nothing conversion.

use proptest::prelude::*;

use crate::segmenter::{segment, TokenKind};
use crate::symbols::SymbolTable;
use crate::{convert, ConvertError};

fn all_spellings() -> Vec<String> {
    let table = SymbolTable::global();
    table
        .segments()
        .map(|(_, s, _)| s.to_string())
        .chain(table.prosody().map(|(s, _)| s.to_string()))
        .collect()
}

/// True if placing `next` directly after `prev` changes how one of the two
/// tokenizes: a trailing `@` captures a following `U`, quote runs merge,
/// and `_` fuses with a following `¤`.
fn merges_at_boundary(prev: &str, next: &str) -> bool {
    (prev.ends_with('@') && next.starts_with('U'))
        || (prev.ends_with('"') && next.starts_with('"'))
        || (prev.ends_with('_') && next.starts_with('¤'))
}

fn arb_spelling() -> impl Strategy<Value = String> {
    prop::sample::select(all_spellings())
}

/// A sequence of known spellings whose concatenation tokenizes back to
/// exactly that sequence (merge-prone adjacencies filtered out).
fn arb_token_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_spelling(), 0..12).prop_map(|spellings| {
        let mut out: Vec<String> = Vec::with_capacity(spellings.len());
        for spelling in spellings {
            if out
                .last()
                .is_some_and(|prev| merges_at_boundary(prev, &spelling))
            {
                continue;
            }
            out.push(spelling);
        }
        out
    })
}

fn arb_alphabet_soup() -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = "bdfghjklmnprstvwCNS$%_¤AEIOUY92@{}u0:*\"`=qxz".chars().collect();
    prop::collection::vec(prop::sample::select(alphabet), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Valid spelling sequences survive a segment → render round trip.
    #[test]
    fn valid_sequences_convert(seq in arb_token_sequence()) {
        let input: String = seq.concat();
        let tokens = segment(&input);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(texts, seq.iter().map(String::as_str).collect::<Vec<_>>());

        let table = SymbolTable::global();
        let expected: String = seq.iter().map(|s| table.lookup(s).unwrap()).collect();
        prop_assert_eq!(convert(&input), Ok(expected));
    }

    /// Tokens always reconstruct the input exactly, whatever the input.
    #[test]
    fn tokens_cover_input(input in arb_alphabet_soup()) {
        let joined: String = segment(&input).iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, input);
    }

    /// Closure: every non-invalid token the segmenter emits is in the table.
    #[test]
    fn non_invalid_tokens_are_known(input in arb_alphabet_soup()) {
        let table = SymbolTable::global();
        for token in segment(&input) {
            if token.kind != TokenKind::Invalid {
                prop_assert!(table.contains(token.text), "unknown token {:?}", token.text);
            }
        }
    }

    /// Conversion never panics; the only failure is UnknownSegment.
    #[test]
    fn convert_is_total(input in arb_alphabet_soup()) {
        match convert(&input) {
            Ok(_) => {}
            Err(ConvertError::UnknownSegment { segment, input: reported }) => {
                prop_assert!(!segment.is_empty());
                prop_assert_eq!(reported, input);
            }
        }
    }
}
