//! Maximal-munch segmentation of NST X-SAMPA transcriptions.
//!
//! The alphabet has one-, two-, three- and four-character spellings with
//! overlapping character sets (`A` vs `A:` vs `A*I`), so the input is
//! scanned left to right against an ordered rule list (longest spellings
//! first, with negative lookahead/lookback guards on the short ones) and
//! the first matching rule consumes its characters. Unmatched characters
//! become `Invalid` tokens; the segmenter itself never fails, rendering
//! does when it cannot look such a token up.

mod rules;

use tracing::{debug, debug_span};

use rules::RULES;

/// What a token is, as far as the segmenter can tell without the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A phoneme spelling: consonant, vowel or diphthong.
    Segment,
    /// A syllable, word or stress marker.
    Prosody,
    /// A character no rule matched. Rendering such a token fails.
    Invalid,
}

/// One atomic token, borrowing its exact character slice from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Split a transcription into atomic tokens.
///
/// The concatenation of the returned token texts always reconstructs the
/// input exactly; no characters are dropped, duplicated or left over.
pub fn segment(input: &str) -> Vec<Token<'_>> {
    let _span = debug_span!("segment", input_len = input.len()).entered();

    let offsets: Vec<usize> = input.char_indices().map(|(i, _)| i).collect();
    let chars: Vec<char> = input.chars().collect();

    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let (len, kind) = match first_match(&chars, pos) {
            Some((len, rule_name, kind)) => {
                debug!(pos, rule = rule_name, len);
                (len, kind)
            }
            None => {
                debug!(pos, ch = %chars[pos], "no rule matched");
                (1, TokenKind::Invalid)
            }
        };
        let start = offsets[pos];
        let end = offsets.get(pos + len).copied().unwrap_or(input.len());
        tokens.push(Token {
            text: &input[start..end],
            kind,
        });
        pos += len;
    }

    debug!(token_count = tokens.len());
    tokens
}

fn first_match(chars: &[char], pos: usize) -> Option<(usize, &'static str, TokenKind)> {
    RULES
        .iter()
        .find_map(|rule| (rule.matches)(chars, pos).map(|len| (len, rule.name, rule.kind)))
}
