//! NST X-SAMPA to IPA conversion.
//!
//! Transcriptions in the NST pronunciation lexicon use an X-SAMPA dialect
//! whose spellings overlap in their character sets (`A` vs `A:` vs `A*I`),
//! so conversion is segmentation first — an ordered-rule maximal-munch
//! tokenizer — and then a per-token lookup in the merged symbol table.

pub mod render;
pub mod segmenter;
pub mod symbols;

#[cfg(test)]
mod proptests;

use tracing::debug;

pub use render::{render, ConvertError};
pub use segmenter::{segment, Token, TokenKind};
pub use symbols::SymbolTable;

/// Convert an NST X-SAMPA transcription to IPA.
///
/// All-or-nothing: a transcription containing anything that is not a
/// defined spelling yields `ConvertError::UnknownSegment`, never partial
/// output. The empty transcription converts to the empty string.
pub fn convert(transcription: &str) -> Result<String, ConvertError> {
    let tokens = segmenter::segment(transcription);
    let ipa = render::render(transcription, &tokens)?;
    debug!(input = transcription, output = %ipa);
    Ok(ipa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_transcription() {
        assert_eq!(convert("\"\"On$d@$%lE*u0s").unwrap(), "ˈɔn.dəˌlæ͡ʉs");
    }

    #[test]
    fn long_vowel_not_split() {
        assert_eq!(convert("A:").unwrap(), "ɑː");
    }

    #[test]
    fn diphthong_not_split() {
        assert_eq!(convert("@U").unwrap(), "ɔ͡ʊ");
    }

    #[test]
    fn retroflex_not_split() {
        assert_eq!(convert("t`").unwrap(), "ʈ");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(convert("").unwrap(), "");
    }

    #[test]
    fn unknown_character_fails() {
        let err = convert("kvq:").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnknownSegment { ref segment, ref input }
                if segment == "q" && input == "kvq:"
        ));
    }

    #[test]
    fn stress_marks_fold_to_ipa_stress() {
        assert_eq!(convert("\"A").unwrap(), "ˈɑ");
        assert_eq!(convert("\"\"A").unwrap(), "ˈɑ");
        assert_eq!(convert("\"\"\"A").unwrap(), "ˈɑ");
        assert_eq!(convert("%A").unwrap(), "ˌɑ");
    }

    #[test]
    fn multiword_boundaries_pass_through() {
        assert_eq!(convert("\"bA:t_¤\"hu:s").unwrap(), "ˈbɑːt_¤ˈhuːs");
    }

    #[test]
    fn output_length_is_sum_of_token_renderings() {
        let input = "\"\"On$d@$%lE*u0s";
        let table = SymbolTable::global();
        let expected: usize = segment(input)
            .iter()
            .map(|t| table.lookup(t.text).unwrap().chars().count())
            .sum();
        assert_eq!(convert(input).unwrap().chars().count(), expected);
    }
}
