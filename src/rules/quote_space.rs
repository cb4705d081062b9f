//! Spacing around paired quotes.
//!
//! Inside a pair there is never a space. Outside, half-width pairs get
//! one space against neighboring content while full-width pairs sit
//! flush, but only against letter neighbors: punctuation keeps its own
//! spacing rules. The family comes from the quote tables (curly quotes
//! are width-ambiguous), read from the current mark content after any
//! width conversion has run.

use super::*;

pub(crate) struct QuoteSpace {
    inside: Option<bool>,
    outside_half: Option<bool>,
    no_outside_full: Option<bool>,
}

impl QuoteSpace {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            inside: options.no_space_inside_quote,
            outside_half: options.space_outside_half_quote,
            no_outside_full: options.no_space_outside_full_quote,
        }
    }
}

impl Handler for QuoteSpace {
    fn on_group(&self, seq: &mut TokenSeq, group: Group, report: &mut Reporter) {
        if group.kind != GroupKind::Quote {
            return;
        }
        if self.inside == Some(true) {
            check_space_after(
                seq,
                group.start,
                "",
                ValidationTarget::InnerSpaceBefore,
                QUOTE_NOSPACE_INSIDE,
                report,
            );
            if group.end > group.start + 1 {
                check_space_after(
                    seq,
                    group.end - 1,
                    "",
                    ValidationTarget::SpaceAfter,
                    QUOTE_NOSPACE_INSIDE,
                    report,
                );
            }
        }
        let full = seq.content_char(group.start).is_some_and(is_full_quote);
        let (desired, message) = if full {
            if self.no_outside_full != Some(true) {
                return;
            }
            ("", QUOTE_NOSPACE_OUTSIDE)
        } else {
            match self.outside_half {
                Some(true) => (" ", QUOTE_SPACE_OUTSIDE),
                Some(false) => ("", QUOTE_NOSPACE_OUTSIDE),
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
