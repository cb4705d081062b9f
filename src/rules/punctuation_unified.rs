//! Unify quote conventions: corner quotes `「」`/`『』` versus curly
//! quotes `“”`/`‘’` denote the same grammatical role, and paired quotes
//! are remapped to the configured convention. Unmatched quote marks are
//! never remapped.

use super::*;

pub(crate) struct PunctuationUnified {
    mode: Option<PunctuationUnification>,
}

impl PunctuationUnified {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            mode: options.unified_punctuation,
        }
    }
}

impl Handler for PunctuationUnified {
    fn on_group(&self, seq: &mut TokenSeq, group: Group, report: &mut Reporter) {
        if group.kind != GroupKind::Quote {
            return;
        }
        let (remap, message): (fn(char) -> Option<char>, _) = match self.mode {
            Some(PunctuationUnification::Simplified) => {
                (simplified_quote_of, PUNCTUATION_UNIFICATION_SIMPLIFIED)
            }
            Some(PunctuationUnification::Traditional) => {
                (traditional_quote_of, PUNCTUATION_UNIFICATION_TRADITIONAL)
            }
            None => return,
        };
        if let Some(to) = seq.content_char(group.start).and_then(remap) {
            check_mark_content(
                seq,
                group.start,
                to,
                ValidationTarget::StartContent,
                message,
                report,
            );
        }
        if let Some(to) = seq.content_char(group.end).and_then(remap) {
            check_mark_content(
                seq,
                group.end,
                to,
                ValidationTarget::EndContent,
                message,
                report,
            );
        }
    }
}
