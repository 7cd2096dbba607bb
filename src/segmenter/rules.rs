//! The ordered match rules of the segmenter.
//!
//! Each rule is a pure function over (input chars, position) returning the
//! number of characters it consumes, or `None`. The driver tries `RULES` in
//! order and takes the first match, so precedence is the list order:
//! longest spellings first, then the single-character rules, whose negative
//! lookahead/lookback guards keep them from splitting a longer spelling.

use crate::symbols::SymbolTable;

use super::TokenKind;

pub(crate) struct Rule {
    pub name: &'static str,
    pub kind: TokenKind,
    pub matches: fn(&[char], usize) -> Option<usize>,
}

/// Precedence-ordered rule list. First successful rule wins.
pub(crate) const RULES: &[Rule] = &[
    Rule { name: "diphthong", kind: TokenKind::Segment, matches: diphthong },
    Rule { name: "stress-triple", kind: TokenKind::Prosody, matches: stress_triple },
    Rule { name: "retroflex-syllabic", kind: TokenKind::Segment, matches: retroflex_syllabic },
    Rule { name: "long-vowel", kind: TokenKind::Segment, matches: long_vowel },
    Rule { name: "retroflex", kind: TokenKind::Segment, matches: retroflex },
    Rule { name: "syllabic", kind: TokenKind::Segment, matches: syllabic },
    Rule { name: "close-central-u", kind: TokenKind::Segment, matches: close_central_u },
    Rule { name: "word-stress", kind: TokenKind::Prosody, matches: word_stress },
    Rule { name: "stress-double", kind: TokenKind::Prosody, matches: stress_double },
    Rule { name: "consonant", kind: TokenKind::Segment, matches: consonant },
    Rule { name: "boundary", kind: TokenKind::Prosody, matches: boundary },
    Rule { name: "schwa", kind: TokenKind::Segment, matches: schwa },
    Rule { name: "plain-stop", kind: TokenKind::Segment, matches: plain_stop },
    Rule { name: "plain-coronal", kind: TokenKind::Segment, matches: plain_coronal },
    Rule { name: "plain-sonorant", kind: TokenKind::Segment, matches: plain_sonorant },
    Rule { name: "open-vowel", kind: TokenKind::Segment, matches: open_vowel },
    Rule { name: "mid-vowel", kind: TokenKind::Segment, matches: mid_vowel },
    Rule { name: "front-vowel", kind: TokenKind::Segment, matches: front_vowel },
    Rule { name: "back-vowel", kind: TokenKind::Segment, matches: back_vowel },
    Rule { name: "stress-single", kind: TokenKind::Prosody, matches: stress_single },
];

fn at(chars: &[char], pos: usize) -> Option<char> {
    chars.get(pos).copied()
}

fn prev(chars: &[char], pos: usize) -> Option<char> {
    pos.checked_sub(1).and_then(|p| chars.get(p)).copied()
}

fn starts_with(chars: &[char], pos: usize, spelling: &str) -> bool {
    let rest = &chars[pos..];
    let len = spelling.chars().count();
    rest.len() >= len && rest[..len].iter().copied().eq(spelling.chars())
}

/// Diphthong spellings from the inventory, longest first: `E*u0`, the
/// three-character `V*V` pairs, then `@U`.
fn diphthong(chars: &[char], pos: usize) -> Option<usize> {
    SymbolTable::global()
        .diphthongs_longest_first()
        .iter()
        .find(|spelling| starts_with(chars, pos, spelling))
        .map(|spelling| spelling.chars().count())
}

/// `"""` — tone-2 stress written with three quotes.
fn stress_triple(chars: &[char], pos: usize) -> Option<usize> {
    starts_with(chars, pos, "\"\"\"").then_some(3)
}

/// `l`=` and `n`=` — a retroflex that is also syllabic.
fn retroflex_syllabic(chars: &[char], pos: usize) -> Option<usize> {
    (matches!(at(chars, pos), Some('l' | 'n'))
        && at(chars, pos + 1) == Some('`')
        && at(chars, pos + 2) == Some('='))
    .then_some(3)
}

/// `X:` where `X:` is a long-vowel spelling of the inventory.
fn long_vowel(chars: &[char], pos: usize) -> Option<usize> {
    let base = at(chars, pos)?;
    (at(chars, pos + 1) == Some(':') && SymbolTable::global().is_long_vowel_base(base))
        .then_some(2)
}

/// `d` l` n` s` t`` — consonant plus retroflex marker, unless the syllabic
/// marker follows (then only the `l`/`n` forms of `retroflex_syllabic` are
/// spellings, and anything else must fail as a whole).
fn retroflex(chars: &[char], pos: usize) -> Option<usize> {
    (matches!(at(chars, pos), Some('d' | 'l' | 'n' | 's' | 't'))
        && at(chars, pos + 1) == Some('`')
        && at(chars, pos + 2) != Some('='))
    .then_some(2)
}

/// `l= m= n= r= s=` — syllabic consonants.
fn syllabic(chars: &[char], pos: usize) -> Option<usize> {
    (matches!(at(chars, pos), Some('l' | 'm' | 'n' | 'r' | 's'))
        && at(chars, pos + 1) == Some('='))
    .then_some(2)
}

/// `u0` — the close central vowel, unless `*` precedes (the `E*u0`
/// diphthong owns that sequence).
fn close_central_u(chars: &[char], pos: usize) -> Option<usize> {
    (at(chars, pos) == Some('u')
        && at(chars, pos + 1) == Some('0')
        && prev(chars, pos) != Some('*'))
    .then_some(2)
}

/// `_¤` — word boundary fused with the main-phrasal-stress marker.
fn word_stress(chars: &[char], pos: usize) -> Option<usize> {
    (at(chars, pos) == Some('_') && at(chars, pos + 1) == Some('¤')).then_some(2)
}

/// `""` — tone-2 stress written with two quotes, not part of a `"""`.
fn stress_double(chars: &[char], pos: usize) -> Option<usize> {
    (at(chars, pos) == Some('"')
        && at(chars, pos + 1) == Some('"')
        && at(chars, pos + 2) != Some('"'))
    .then_some(2)
}

/// Consonants that never combine with a marker character.
fn consonant(chars: &[char], pos: usize) -> Option<usize> {
    matches!(
        at(chars, pos),
        Some('b' | 'f' | 'g' | 'h' | 'j' | 'k' | 'C' | 'N' | 'p' | 'S' | 'v' | 'w')
    )
    .then_some(1)
}

/// `$ % _ ¤` — syllable/word boundaries and secondary stress. A `_` that
/// begins the `_¤` digraph is taken by `word_stress` first.
fn boundary(chars: &[char], pos: usize) -> Option<usize> {
    matches!(at(chars, pos), Some('$' | '%' | '_' | '¤')).then_some(1)
}

/// `@`, unless `U` follows (the `@U` diphthong owns that sequence).
fn schwa(chars: &[char], pos: usize) -> Option<usize> {
    (at(chars, pos) == Some('@') && at(chars, pos + 1) != Some('U')).then_some(1)
}

/// `d t`, unless the retroflex marker follows.
fn plain_stop(chars: &[char], pos: usize) -> Option<usize> {
    (matches!(at(chars, pos), Some('d' | 't')) && at(chars, pos + 1) != Some('`')).then_some(1)
}

/// `s l n`, unless a retroflex or syllabic marker follows.
fn plain_coronal(chars: &[char], pos: usize) -> Option<usize> {
    (matches!(at(chars, pos), Some('s' | 'l' | 'n'))
        && !matches!(at(chars, pos + 1), Some('`' | '=')))
    .then_some(1)
}

/// `m r`, unless the syllabic marker follows.
fn plain_sonorant(chars: &[char], pos: usize) -> Option<usize> {
    (matches!(at(chars, pos), Some('m' | 'r')) && at(chars, pos + 1) != Some('=')).then_some(1)
}

/// `A {`, unless a length marker or diphthong joint follows.
fn open_vowel(chars: &[char], pos: usize) -> Option<usize> {
    (matches!(at(chars, pos), Some('A' | '{'))
        && !matches!(at(chars, pos + 1), Some(':' | '*')))
    .then_some(1)
}

/// `O 9 E`, unless a diphthong joint follows.
fn mid_vowel(chars: &[char], pos: usize) -> Option<usize> {
    (matches!(at(chars, pos), Some('O' | '9' | 'E')) && at(chars, pos + 1) != Some('*'))
        .then_some(1)
}

/// `I Y`, unless a diphthong joint precedes (a dangling `V*` must fail as a
/// whole rather than re-match its second vowel).
fn front_vowel(chars: &[char], pos: usize) -> Option<usize> {
    (matches!(at(chars, pos), Some('I' | 'Y')) && prev(chars, pos) != Some('*')).then_some(1)
}

/// `U`, unless `@` precedes or a length marker follows.
fn back_vowel(chars: &[char], pos: usize) -> Option<usize> {
    (at(chars, pos) == Some('U')
        && prev(chars, pos) != Some('@')
        && at(chars, pos + 1) != Some(':'))
    .then_some(1)
}

/// A lone `"` — tone-1 stress. Runs of quotes are owned by the longer rules.
fn stress_single(chars: &[char], pos: usize) -> Option<usize> {
    (at(chars, pos) == Some('"')
        && prev(chars, pos) != Some('"')
        && at(chars, pos + 1) != Some('"'))
    .then_some(1)
}
