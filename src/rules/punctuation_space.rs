//! Spacing around pause-and-stop punctuation.
//!
//! Only the normal punctuations (`,.;:?!` and their full-width
//! counterparts) participate: no space before, one space after
//! half-width, no space after full-width. Width is read from the current
//! content, so a comma already converted to `，` follows the full-width
//! branch. Other symbols such as `/`, `>` or `+` keep whatever spacing
//! they were written with.

use super::*;

pub(crate) struct PunctuationSpace {
    no_before: Option<bool>,
    after_half: Option<bool>,
    no_after_full: Option<bool>,
}

impl PunctuationSpace {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            no_before: options.no_space_before_punctuation,
            after_half: options.space_after_half_width_punctuation,
            no_after_full: options.no_space_after_full_width_punctuation,
        }
    }
}

impl Handler for PunctuationSpace {
    fn on_token(&self, seq: &mut TokenSeq, index: usize, report: &mut Reporter) {
        if !seq.tokens[index].kind.is_punctuation() {
            return;
        }
        let Some(c) = seq.content_char(index) else {
            return;
        };
        if !is_normal_punctuation(c) {
            return;
        }
        if self.no_before == Some(true) {
            if let Some(prev) = seq.prev_visible(index) {
                let host = space_host_between(seq, prev, index);
                check_space_after(
                    seq,
                    host,
                    "",
                    ValidationTarget::SpaceAfter,
                    PUNCTUATION_NOSPACE_BEFORE,
                    report,
                );
            }
        }
        let full = is_full_width(c);
        let (desired, message) = if full {
            if self.no_after_full != Some(true) {
                return;
            }
            ("", PUNCTUATION_NOSPACE_AFTER)
        } else {
            if self.after_half != Some(true) {
                return;
            }
            (" ", PUNCTUATION_SPACE_AFTER)
        };
        if let Some(next) = seq.next_visible(index) {
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
