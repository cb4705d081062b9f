//! Character classification: width classes, role hints, and the pair
//! tables that map punctuation between width and quote conventions.

use super::*;

/// How many fixed-width cells a character occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CharWidth {
    /// One cell, typically Latin/ASCII.
    Half,
    /// Two cells, typically CJK ideographs and their native punctuation.
    Full,
    /// Width-agnostic for spacing decisions (whitespace).
    Neutral,
}

/// What a character is likely to do in running prose.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CharRole {
    Letter,
    Punctuation,
    Quote,
    Bracket,
    /// Emphasis or fence character (`*`, `_`, `~`, backtick).
    Mark,
    Space,
    Linebreak,
}

/// Classify one character. Pure and total: anything unrecognized is
/// half-width letter content, never an error.
pub(crate) fn classify(c: char) -> (CharWidth, CharRole) {
    match c {
        '\n' | '\r' => (CharWidth::Neutral, CharRole::Linebreak),
        _ if c.is_whitespace() => (CharWidth::Neutral, CharRole::Space),
        '*' | '_' | '~' | '`' => (CharWidth::Half, CharRole::Mark),
        '"' | '\'' => (CharWidth::Half, CharRole::Quote),
        _ if is_full_quote(c) => (CharWidth::Full, CharRole::Quote),
        '(' | ')' | '[' | ']' | '{' | '}' => (CharWidth::Half, CharRole::Bracket),
        '（' | '）' | '【' | '】' | '｛' | '｝' | '〔' | '〕' => (CharWidth::Full, CharRole::Bracket),
        _ if is_full_width(c) && c.is_alphanumeric() => (CharWidth::Full, CharRole::Letter),
        _ if is_full_width(c) => (CharWidth::Full, CharRole::Punctuation),
        _ if c.is_ascii() && !c.is_ascii_alphanumeric() => (CharWidth::Half, CharRole::Punctuation),
        _ => (CharWidth::Half, CharRole::Letter),
    }
}

/// Whether the character occupies two display cells.
pub(crate) fn is_full_width(c: char) -> bool {
    UnicodeWidthChar::width(c) == Some(2)
}

/// Quote characters of the full-width families. Curly quotes are East
/// Asian Ambiguous (display width 1 in many contexts), so the family
/// comes from this table, never from display width.
pub(crate) fn is_full_quote(c: char) -> bool {
    matches!(c, '“' | '”' | '‘' | '’' | '「' | '」' | '『' | '』')
}

/// Punctuation the spacing rules act on. Other symbols (`/`, `|`, `+`, ...)
/// show up in math, paths, and markup, and are left alone.
pub(crate) fn is_normal_punctuation(c: char) -> bool {
    matches!(
        c,
        ',' | '.' | ';' | ':' | '?' | '!' | '，' | '。' | '、' | '；' | '：' | '？' | '！'
    )
}

/// Half-width characters and the full-width characters they convert to.
const WIDTH_PAIRS: &[(char, char)] = &[
    (',', '，'),
    ('.', '。'),
    (';', '；'),
    (':', '：'),
    ('?', '？'),
    ('!', '！'),
    ('(', '（'),
    (')', '）'),
    ('[', '【'),
    (']', '】'),
    ('{', '｛'),
    ('}', '｝'),
];

/// The full-width counterpart of a half-width punctuation or bracket.
pub(crate) fn full_width_of(c: char) -> Option<char> {
    WIDTH_PAIRS
        .iter()
        .find(|(half, _)| *half == c)
        .map(|(_, full)| *full)
}

/// The half-width counterpart of a full-width punctuation or bracket.
pub(crate) fn half_width_of(c: char) -> Option<char> {
    WIDTH_PAIRS
        .iter()
        .find(|(_, full)| *full == c)
        .map(|(half, _)| *half)
}

/// The full-width curly quote replacing a half-width quote character,
/// picked by which side of the pair the mark sits on.
pub(crate) fn full_quote_of(c: char, open: bool) -> Option<char> {
    match (c, open) {
        ('"', true) => Some('“'),
        ('"', false) => Some('”'),
        ('\'', true) => Some('‘'),
        ('\'', false) => Some('’'),
        _ => None,
    }
}

/// Corner quotes (traditional convention) and the curly quotes
/// (simplified convention) naming the same grammatical role.
const UNIFICATION_PAIRS: &[(char, char)] = &[
    ('「', '“'),
    ('」', '”'),
    ('『', '‘'),
    ('』', '’'),
];

/// Map a corner quote to its curly counterpart.
pub(crate) fn simplified_quote_of(c: char) -> Option<char> {
    UNIFICATION_PAIRS
        .iter()
        .find(|(corner, _)| *corner == c)
        .map(|(_, curly)| *curly)
}

/// Map a curly quote to its corner counterpart.
pub(crate) fn traditional_quote_of(c: char) -> Option<char> {
    UNIFICATION_PAIRS
        .iter()
        .find(|(_, curly)| *curly == c)
        .map(|(corner, _)| *corner)
}

/// The closing bracket paired with an opening bracket.
pub(crate) fn bracket_close_of(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '（' => Some('）'),
        '【' => Some('】'),
        '｛' => Some('｝'),
        '〔' => Some('〕'),
        _ => None,
    }
}

/// How a quote character participates in pairing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum QuoteSide {
    /// Straight quotes open and close with the same character.
    Toggle,
    /// Opens a pair; the second element is the family's opening character.
    Open,
    /// Closes a pair opened by the given character.
    Close(char),
}

/// Pairing behavior of a quote character. Half-width and full-width
/// families never cross-pair because each family is keyed by its own
/// opening character.
pub(crate) fn quote_side(c: char) -> QuoteSide {
    match c {
        '”' => QuoteSide::Close('“'),
        '’' => QuoteSide::Close('‘'),
        '」' => QuoteSide::Close('「'),
        '』' => QuoteSide::Close('『'),
        '“' | '‘' | '「' | '『' => QuoteSide::Open,
        _ => QuoteSide::Toggle,
    }
}
