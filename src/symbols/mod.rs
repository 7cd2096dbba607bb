//! The NST X-SAMPA symbol inventory and the merged spelling→IPA table.
//!
//! The inventory is an embedded TOML asset with four categories (consonants,
//! vowels, diphthongs, prosody). Segments and prosodic marks share one
//! namespace for lookup; the merged map inserts segments first and prosody
//! second, so a prosodic entry wins on collision.

mod config;
mod table;

pub use config::{SegmentEntry, SymbolConfigError};

use std::collections::HashMap;
use std::sync::OnceLock;

use config::{parse_symbols_toml, SymbolsConfig};

/// Inventory category a segment entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Consonant,
    Vowel,
    Diphthong,
}

pub struct SymbolTable {
    mapping: HashMap<String, String>,
    consonants: Vec<(String, SegmentEntry)>,
    vowels: Vec<(String, SegmentEntry)>,
    diphthongs: Vec<(String, SegmentEntry)>,
    prosody: Vec<(String, String)>,
    /// Diphthong spellings sorted longest first, for maximal-munch matching.
    diphthong_spellings: Vec<String>,
    /// First characters of the two-character `X:` long-vowel spellings.
    long_vowel_bases: Vec<char>,
}

impl SymbolTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static SymbolTable {
        static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let config =
                parse_symbols_toml(table::DEFAULT_TOML).expect("symbol TOML must be valid");
            SymbolTable::from_config(config)
        })
    }

    fn from_config(config: SymbolsConfig) -> Self {
        let consonants: Vec<_> = config.consonants.into_iter().collect();
        let vowels: Vec<_> = config.vowels.into_iter().collect();
        let diphthongs: Vec<_> = config.diphthongs.into_iter().collect();
        let prosody: Vec<_> = config.prosody.into_iter().collect();

        let mut mapping = HashMap::new();
        for (spelling, entry) in consonants.iter().chain(&vowels).chain(&diphthongs) {
            mapping.insert(spelling.clone(), entry.ipa.clone());
        }
        // Prosody last: on collision the prosodic rendering wins.
        for (spelling, ipa) in &prosody {
            mapping.insert(spelling.clone(), ipa.clone());
        }

        let mut diphthong_spellings: Vec<String> =
            diphthongs.iter().map(|(s, _)| s.clone()).collect();
        diphthong_spellings.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let long_vowel_bases: Vec<char> = vowels
            .iter()
            .filter_map(|(spelling, _)| {
                let mut chars = spelling.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(base), Some(':'), None) => Some(base),
                    _ => None,
                }
            })
            .collect();

        SymbolTable {
            mapping,
            consonants,
            vowels,
            diphthongs,
            prosody,
            diphthong_spellings,
            long_vowel_bases,
        }
    }

    /// IPA rendering of a spelling, or `None` if it is not in the table.
    pub fn lookup(&self, spelling: &str) -> Option<&str> {
        self.mapping.get(spelling).map(String::as_str)
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.mapping.contains_key(spelling)
    }

    /// Full segment entry (with NoFAbet code) for a spelling, if it is a segment.
    pub fn entry(&self, spelling: &str) -> Option<&SegmentEntry> {
        self.segments()
            .find(|(_, s, _)| *s == spelling)
            .map(|(_, _, entry)| entry)
    }

    /// All segment entries in category order: consonants, vowels, diphthongs.
    pub fn segments(&self) -> impl Iterator<Item = (Category, &str, &SegmentEntry)> {
        let consonants = self
            .consonants
            .iter()
            .map(|(s, e)| (Category::Consonant, s.as_str(), e));
        let vowels = self
            .vowels
            .iter()
            .map(|(s, e)| (Category::Vowel, s.as_str(), e));
        let diphthongs = self
            .diphthongs
            .iter()
            .map(|(s, e)| (Category::Diphthong, s.as_str(), e));
        consonants.chain(vowels).chain(diphthongs)
    }

    /// All prosodic entries as (spelling, IPA) pairs.
    pub fn prosody(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prosody.iter().map(|(s, i)| (s.as_str(), i.as_str()))
    }

    pub(crate) fn diphthongs_longest_first(&self) -> &[String] {
        &self.diphthong_spellings
    }

    pub(crate) fn is_long_vowel_base(&self, c: char) -> bool {
        self.long_vowel_bases.contains(&c)
    }
}
