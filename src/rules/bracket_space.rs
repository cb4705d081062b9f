//! Spacing around paired brackets, the bracket twin of
//! [quote_space](super::quote_space): no space inside, one space outside
//! half-width pairs against letter neighbors, none outside full-width
//! pairs.

use super::*;

pub(crate) struct BracketSpace {
    inside: Option<bool>,
    outside_half: Option<bool>,
    no_outside_full: Option<bool>,
}

impl BracketSpace {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            inside: options.no_space_inside_bracket,
            outside_half: options.space_outside_half_bracket,
            no_outside_full: options.no_space_outside_full_bracket,
        }
    }
}

impl Handler for BracketSpace {
    fn on_group(&self, seq: &mut TokenSeq, group: Group, report: &mut Reporter) {
        if group.kind != GroupKind::Bracket {
            return;
        }
        if self.inside == Some(true) {
            check_space_after(
                seq,
                group.start,
                "",
                ValidationTarget::SpaceAfter,
                BRACKET_NOSPACE_INSIDE,
                report,
            );
            if group.end > group.start + 1 {
                check_space_after(
                    seq,
                    group.end - 1,
                    "",
                    ValidationTarget::SpaceAfter,
                    BRACKET_NOSPACE_INSIDE,
                    report,
                );
            }
        }
        let full = seq.content_char(group.start).is_some_and(is_full_width);
        let (desired, message) = if full {
            if self.no_outside_full != Some(true) {
                return;
            }
            ("", BRACKET_NOSPACE_OUTSIDE)
        } else {
            match self.outside_half {
                Some(true) => (" ", BRACKET_SPACE_OUTSIDE),
                Some(false) => ("", BRACKET_NOSPACE_OUTSIDE),
                None => return,
            }
        };
        if let Some(prev) = seq.prev_visible(group.start) {
            if seq.tokens[prev].kind.is_letters() {
                let host = space_host_between(seq, prev, group.start);
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
        if let Some(next) = seq.next_visible(group.end) {
            if seq.tokens[next].kind.is_letters() {
                let host = space_host_between(seq, group.end, next);
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
