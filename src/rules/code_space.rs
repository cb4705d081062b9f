//! Spacing outside inline code spans.
//!
//! A code span is opaque: nothing inside the backticks or `<code>` tags
//! is ever touched. Outside, `space_outside_code` picks one space or
//! none against letter neighbors; two adjacent code spans also get the
//! gap between them normalized.

use super::*;

pub(crate) struct CodeSpace {
    mode: Option<bool>,
}

impl CodeSpace {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            mode: options.space_outside_code,
        }
    }
}

impl Handler for CodeSpace {
    fn on_token(&self, seq: &mut TokenSeq, index: usize, report: &mut Reporter) {
        if seq.tokens[index].kind != TokenKind::Code {
            return;
        }
        let Some(space) = self.mode else {
            return;
        };
        let (desired, message) = if space {
            (" ", CODE_SPACE_OUTSIDE)
        } else {
            ("", CODE_NOSPACE_OUTSIDE)
        };
        if let Some(prev) = seq.prev_visible(index) {
            if seq.tokens[prev].kind.is_letters() {
                let host = space_host_between(seq, prev, index);
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
        if let Some(next) = seq.next_visible(index) {
            if seq.tokens[next].kind.is_letters() || seq.tokens[next].kind == TokenKind::Code {
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
    }
}
