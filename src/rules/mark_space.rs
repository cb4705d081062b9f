//! Spacing just inside emphasis mark pairs.
//!
//! With `no_space_inside_mark` set, `x ** yyy ** z` becomes `x **yyy** z`:
//! the gaps right after the opening mark and right before the closing mark
//! are removed, while the space outside the pair survives. Nested pairs
//! like `x _ ** yyy **_ z` normalize to `x _**yyy**_ z` because every
//! mark group is handled, outermost first.

use super::*;

pub(crate) struct MarkSpace {
    enabled: Option<bool>,
}

impl MarkSpace {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            enabled: options.no_space_inside_mark,
        }
    }
}

impl Handler for MarkSpace {
    fn on_group(&self, seq: &mut TokenSeq, group: Group, report: &mut Reporter) {
        if self.enabled != Some(true) || group.kind != GroupKind::Mark {
            return;
        }
        check_space_after(
            seq,
            group.start,
            "",
            ValidationTarget::SpaceAfter,
            MARK_NOSPACE_INSIDE,
            report,
        );
        if group.end > group.start + 1 {
            check_space_after(
                seq,
                group.end - 1,
                "",
                ValidationTarget::SpaceAfter,
                MARK_NOSPACE_INSIDE,
                report,
            );
        }
    }
}
