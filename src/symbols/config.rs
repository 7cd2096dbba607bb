use std::collections::BTreeMap;

use serde::Deserialize;

/// One segment of the inventory: the NoFAbet code kept for diagnostics,
/// the IPA form used for rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentEntry {
    pub nofabet: String,
    pub ipa: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SymbolsConfig {
    pub consonants: BTreeMap<String, SegmentEntry>,
    pub vowels: BTreeMap<String, SegmentEntry>,
    pub diphthongs: BTreeMap<String, SegmentEntry>,
    pub prosody: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SymbolConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptyCategory(&'static str),
    #[error("empty IPA value for spelling: {0}")]
    EmptyIpa(String),
    #[error("spelling {0:?} uses characters outside the transcription alphabet")]
    BadSpelling(String),
}

/// Characters that may appear in an X-SAMPA spelling. Everything is ASCII
/// except '¤' (U+00A4), which is why transcriptions are scanned as chars.
fn is_spelling_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ':' | '*' | '"' | '%' | '¤' | '_' | '$' | '{' | '}' | '`' | '=' | '@')
}

/// Parse TOML text into the four inventory categories.
pub(crate) fn parse_symbols_toml(toml_str: &str) -> Result<SymbolsConfig, SymbolConfigError> {
    let config: SymbolsConfig =
        toml::from_str(toml_str).map_err(|e| SymbolConfigError::Parse(e.to_string()))?;

    if config.consonants.is_empty() {
        return Err(SymbolConfigError::EmptyCategory("consonants"));
    }
    if config.vowels.is_empty() {
        return Err(SymbolConfigError::EmptyCategory("vowels"));
    }
    if config.diphthongs.is_empty() {
        return Err(SymbolConfigError::EmptyCategory("diphthongs"));
    }
    if config.prosody.is_empty() {
        return Err(SymbolConfigError::EmptyCategory("prosody"));
    }

    let segment_keys = config
        .consonants
        .iter()
        .chain(&config.vowels)
        .chain(&config.diphthongs);
    for (spelling, entry) in segment_keys {
        if !spelling.chars().all(is_spelling_char) || spelling.is_empty() {
            return Err(SymbolConfigError::BadSpelling(spelling.clone()));
        }
        if entry.ipa.is_empty() {
            return Err(SymbolConfigError::EmptyIpa(spelling.clone()));
        }
    }
    for (spelling, ipa) in &config.prosody {
        if !spelling.chars().all(is_spelling_char) || spelling.is_empty() {
            return Err(SymbolConfigError::BadSpelling(spelling.clone()));
        }
        if ipa.is_empty() {
            return Err(SymbolConfigError::EmptyIpa(spelling.clone()));
        }
    }

    Ok(config)
}
