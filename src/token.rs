//! The mutable token model: an arena of tokens addressed by index, plus a
//! side table of delimiter groups keyed by index ranges. Rules read and
//! write the arena in place; original positions never move.

use super::*;

/// Kind of a token. A closed set so rules can match exhaustively.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TokenKind {
    /// Run of half-width letter content. URL-like runs and `&…;` entity
    /// references also land here so later rules cannot break them apart.
    ContentHalf,
    /// Run of full-width letter content.
    ContentFull,
    PunctuationHalf,
    PunctuationFull,
    QuoteHalf,
    QuoteFull,
    BracketHalf,
    BracketFull,
    /// Emphasis mark run (`**`, `_`, `~~`) or an unmatched fence.
    Mark,
    /// A complete inline code span including its fences. Opaque: no rule
    /// touches whitespace inside it.
    Code,
    /// A verbatim linebreak. Never subject to spacing rules.
    Linebreak,
}

impl TokenKind {
    /// Letter content of either width.
    pub(crate) fn is_letters(self) -> bool {
        matches!(self, TokenKind::ContentHalf | TokenKind::ContentFull)
    }

    pub(crate) fn is_punctuation(self) -> bool {
        matches!(self, TokenKind::PunctuationHalf | TokenKind::PunctuationFull)
    }
}

/// One token in the arena.
///
/// `index` and `length` are char positions in the original input and are
/// never mutated after creation; they are what validations report against.
/// `content` and `space_after` are what the renderer emits, and start out
/// equal to their `raw` counterparts.
#[derive(Clone, Debug)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    /// Exact substring of the source.
    pub(crate) raw: String,
    /// The (possibly rule-rewritten) text rendered in place of `raw`.
    pub(crate) content: String,
    /// Char offset in the original input.
    pub(crate) index: usize,
    /// Char length of `raw` in the original input.
    pub(crate) length: usize,
    /// The literal whitespace captured right after the token.
    pub(crate) raw_space_after: String,
    /// The whitespace the renderer will emit after the token.
    pub(crate) space_after: String,
}

/// Which delimiter family a group was paired from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GroupKind {
    Quote,
    Bracket,
    Mark,
}

/// A matched delimiter pair over the arena: `start` and `end` are the
/// indices of the opening and closing mark tokens, and the children are
/// the tokens strictly between them. Removing a group would remove both
/// marks and all children at once; no rule removes only one side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Group {
    pub(crate) kind: GroupKind,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// The token sequence one formatting pass owns exclusively.
#[derive(Clone, Debug, Default)]
pub(crate) struct TokenSeq {
    /// Literal whitespace before the first token.
    pub(crate) raw_leading_space: String,
    /// The leading whitespace the renderer will emit.
    pub(crate) leading_space: String,
    pub(crate) tokens: Vec<Token>,
    /// Paired delimiters, sorted by start index once grouping is done.
    pub(crate) groups: Vec<Group>,
}

impl TokenSeq {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a token, taking any pending whitespace as the gap before it.
    pub(crate) fn push_token(&mut self, kind: TokenKind, raw: String, index: usize, pending: &mut String) {
        self.attach_space(pending);
        let length = raw.chars().count();
        self.tokens.push(Token {
            kind,
            content: raw.clone(),
            raw,
            index,
            length,
            raw_space_after: String::new(),
            space_after: String::new(),
        });
    }

    /// Attach accumulated whitespace to the previous token, or keep it as
    /// the sequence's leading space when there is no token yet.
    pub(crate) fn attach_space(&mut self, pending: &mut String) {
        if pending.is_empty() {
            return;
        }
        let space = std::mem::take(pending);
        match self.tokens.last_mut() {
            Some(last) => {
                last.raw_space_after = space.clone();
                last.space_after = space;
            }
            None => {
                self.raw_leading_space = space.clone();
                self.leading_space = space;
            }
        }
    }

    /// Nearest visible token after `i`: emphasis marks are skipped, and a
    /// linebreak ends the search so rules never reach across lines.
    pub(crate) fn next_visible(&self, i: usize) -> Option<usize> {
        let mut j = i + 1;
        while let Some(token) = self.tokens.get(j) {
            match token.kind {
                TokenKind::Mark => j += 1,
                TokenKind::Linebreak => return None,
                _ => return Some(j),
            }
        }
        None
    }

    /// Nearest visible token before `i`; the mirror of [Self::next_visible].
    pub(crate) fn prev_visible(&self, i: usize) -> Option<usize> {
        let mut j = i;
        while j > 0 {
            j -= 1;
            match self.tokens[j].kind {
                TokenKind::Mark => {}
                TokenKind::Linebreak => return None,
                _ => return Some(j),
            }
        }
        None
    }

    /// Whether token `i` closes some group.
    pub(crate) fn is_group_end(&self, i: usize) -> bool {
        self.groups.iter().any(|group| group.end == i)
    }

    /// First char of the token's current content. Delimiter tokens always
    /// hold exactly one char, but content substitutions may have changed
    /// which one.
    pub(crate) fn content_char(&self, i: usize) -> Option<char> {
        self.tokens[i].content.chars().next()
    }
}
