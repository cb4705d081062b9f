//! Spacing between adjacent content runs, by width pairing.
//!
//! Three independent options cover the three pairings: half/half gets one
//! space, full/full gets none, and mixed-width gets one space or none
//! depending on taste. The gap is hosted outside any emphasis marks that
//! sit between the two runs, so `**中文**foo` gains its space after the
//! closing mark.

use super::*;

pub(crate) struct ContentSpace {
    half: Option<bool>,
    full: Option<bool>,
    mixed: Option<bool>,
}

impl ContentSpace {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            half: options.space_between_half_width_content,
            full: options.no_space_between_full_width_content,
            mixed: options.space_between_mixed_width_content,
        }
    }
}

impl Handler for ContentSpace {
    fn on_token(&self, seq: &mut TokenSeq, index: usize, report: &mut Reporter) {
        if !seq.tokens[index].kind.is_letters() {
            return;
        }
        let Some(next) = seq.next_visible(index) else {
            return;
        };
        if !seq.tokens[next].kind.is_letters() {
            return;
        }
        let full_before = seq.tokens[index].kind == TokenKind::ContentFull;
        let full_after = seq.tokens[next].kind == TokenKind::ContentFull;
        let (desired, message) = match (full_before, full_after) {
            (false, false) => match self.half {
                Some(true) => (" ", CONTENT_SPACE_HALF_WIDTH),
                _ => return,
            },
            (true, true) => match self.full {
                Some(true) => ("", CONTENT_NOSPACE_FULL_WIDTH),
                _ => return,
            },
            _ => match self.mixed {
                Some(true) => (" ", CONTENT_SPACE_MIXED_WIDTH),
                Some(false) => ("", CONTENT_NOSPACE_MIXED_WIDTH),
                None => return,
            },
        };
        let host = space_host_between(seq, index, next);
        check_space_after(
            seq,
            host,
            desired,
            ValidationTarget::SpaceAfter,
            message,
            report,
        );
    }
}
