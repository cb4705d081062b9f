//! Trim whitespace at the very start and end of the text. Runs last so
//! earlier rules see the original boundaries. A trailing space after a
//! final linebreak is trimmed too, unlike interior linebreaks which are
//! never touched.

use super::*;

pub(crate) struct TrimSpace {
    enabled: Option<bool>,
}

impl TrimSpace {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            enabled: options.trim_space,
        }
    }
}

impl Handler for TrimSpace {
    fn on_sequence(&self, seq: &mut TokenSeq, report: &mut Reporter) {
        if self.enabled != Some(true) {
            return;
        }
        if !seq.leading_space.is_empty() {
            report.record(0, 0, ValidationTarget::SpaceBefore, TRIM_SPACE);
            seq.leading_space.clear();
        }
        if let Some(last) = seq.tokens.last_mut() {
            if !last.space_after.is_empty() {
                report.record(last.index, last.length, ValidationTarget::SpaceAfter, TRIM_SPACE);
                last.space_after.clear();
            }
        }
    }
}
