//! Token-to-IPA rendering over the merged symbol table.

use crate::segmenter::Token;
use crate::symbols::SymbolTable;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    /// A token produced by the segmenter has no entry in the symbol table.
    /// Conversion is all-or-nothing; no partial IPA string survives this.
    #[error("transcription {input:?} contains {segment:?}, which is not a defined X-SAMPA segment")]
    UnknownSegment { segment: String, input: String },
}

/// Look every token up and concatenate the IPA renderings, in order, with
/// no separators. The first unresolvable token aborts the whole rendering.
pub fn render(input: &str, tokens: &[Token<'_>]) -> Result<String, ConvertError> {
    let table = SymbolTable::global();
    let mut ipa = String::new();
    for token in tokens {
        match table.lookup(token.text) {
            Some(rendering) => ipa.push_str(rendering),
            None => {
                return Err(ConvertError::UnknownSegment {
                    segment: token.text.to_string(),
                    input: input.to_string(),
                })
            }
        }
    }
    Ok(ipa)
}
