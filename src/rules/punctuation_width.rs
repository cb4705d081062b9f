//! Half/full-width punctuation conversion, driven by two charsets.
//!
//! `full_width_punctuation` lists the full-width characters to enforce:
//! a half-width normal punctuation converts when it sits next to
//! full-width content (so `Vue.js` and `foo, bar` survive), and paired
//! half-width quotes convert when the pair is in full-width context (so
//! the apostrophe in `what's` survives as an unmatched quote).
//! `half_width_punctuation` lists half-width characters to enforce.
//! Charset-listed brackets convert unconditionally in either direction:
//! they pair, so a context gate could convert one side and not the other.
//! A character claimed by both charsets stays half-width: the half-width
//! set wins, deterministically.

use super::*;

pub(crate) struct PunctuationWidth {
    half: Option<String>,
    full: Option<String>,
}

impl PunctuationWidth {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            half: options.half_width_punctuation.clone(),
            full: options.full_width_punctuation.clone(),
        }
    }

    fn to_full_width(&self, seq: &mut TokenSeq, index: usize, report: &mut Reporter) {
        let Some(full_set) = &self.full else { return };
        let Some(c) = seq.content_char(index) else { return };
        if self.half.as_ref().is_some_and(|set| set.contains(c)) {
            return;
        }
        let Some(full) = full_width_of(c) else { return };
        if !full_set.contains(full) {
            return;
        }
        if seq.tokens[index].kind == TokenKind::PunctuationHalf
            && !beside_full_width_letters(seq, index)
        {
            return;
        }
        check_content(
            seq,
            index,
            full,
            ValidationTarget::Content,
            PUNCTUATION_FULL_WIDTH,
            report,
        );
    }

    fn to_half_width(&self, seq: &mut TokenSeq, index: usize, report: &mut Reporter) {
        let Some(half_set) = &self.half else { return };
        let Some(c) = seq.content_char(index) else { return };
        let Some(half) = half_width_of(c) else { return };
        if !half_set.contains(half) {
            return;
        }
        check_content(
            seq,
            index,
            half,
            ValidationTarget::Content,
            PUNCTUATION_HALF_WIDTH,
            report,
        );
    }
}

impl Handler for PunctuationWidth {
    fn on_token(&self, seq: &mut TokenSeq, index: usize, report: &mut Reporter) {
        match seq.tokens[index].kind {
            TokenKind::PunctuationHalf | TokenKind::BracketHalf => {
                self.to_full_width(seq, index, report)
            }
            TokenKind::PunctuationFull | TokenKind::BracketFull => {
                self.to_half_width(seq, index, report)
            }
            _ => {}
        }
    }

    fn on_group(&self, seq: &mut TokenSeq, group: Group, report: &mut Reporter) {
        if group.kind != GroupKind::Quote {
            return;
        }
        let Some(full_set) = &self.full else { return };
        let (Some(open), Some(close)) = (
            seq.content_char(group.start),
            seq.content_char(group.end),
        ) else {
            return;
        };
        let (Some(full_open), Some(full_close)) =
            (full_quote_of(open, true), full_quote_of(close, false))
        else {
            return;
        };
        if !full_set.contains(full_open)
            || !full_set.contains(full_close)
            || !group_in_full_width_context(seq, group)
        {
            return;
        }
        check_mark_content(
            seq,
            group.start,
            full_open,
            ValidationTarget::StartContent,
            PUNCTUATION_FULL_WIDTH,
            report,
        );
        check_mark_content(
            seq,
            group.end,
            full_close,
            ValidationTarget::EndContent,
            PUNCTUATION_FULL_WIDTH,
            report,
        );
    }
}
