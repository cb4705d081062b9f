//! Accumulates warnings during a pass. Warnings always point into the
//! *original* input, even when earlier rules already changed the rendered
//! length, which is why token positions are frozen at tokenization.

/// Which boundary of a token a warning judged, independent of the message
/// text. Lets tooling render caret-accurate diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationTarget {
    /// The whitespace before the whole text.
    SpaceBefore,
    /// The whitespace after the token.
    SpaceAfter,
    /// The whitespace just inside a pair, after its opening mark.
    InnerSpaceBefore,
    /// The opening mark of a pair was substituted.
    StartContent,
    /// The closing mark of a pair was substituted.
    EndContent,
    /// The token's own content was substituted.
    Content,
}

/// One warning: a style rule found (and fixed) a mismatch at this span of
/// the original input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Validation {
    /// Char offset into the original input.
    pub index: usize,
    /// Char length of the judged span in the original input.
    pub length: usize,
    /// The boundary that was judged.
    pub target: ValidationTarget,
    /// Stable, rule-specific description; see [crate::messages].
    pub message: &'static str,
}

/// Append-only warning collector for one pass. No deduplication: a rule
/// may flag the same span under two different targets.
#[derive(Debug, Default)]
pub(crate) struct Reporter {
    validations: Vec<Validation>,
}

impl Reporter {
    pub(crate) fn record(
        &mut self,
        index: usize,
        length: usize,
        target: ValidationTarget,
        message: &'static str,
    ) {
        tracing::trace!(index, length, ?target, message, "validation");
        self.validations.push(Validation {
            index,
            length,
            target,
            message,
        });
    }

    pub(crate) fn into_validations(self) -> Vec<Validation> {
        self.validations
    }
}
