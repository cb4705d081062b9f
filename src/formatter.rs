use super::*;

/// The result of one formatting pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// The corrected text.
    pub result: String,
    /// Every place the output differs from a configured style rule, in
    /// rule-dispatch order (not necessarily input order).
    pub validations: Vec<Validation>,
}

/// Used to format mixed CJK/Latin text.
///
/// ```rust
/// # use cjk_fmt::{Options, TextFormatter};
/// let formatter = TextFormatter::with_options(Options {
///     no_space_inside_mark: Some(true),
///     ..Default::default()
/// });
/// let output = formatter.format("x ** yyy ** z");
/// assert_eq!(output.result, "x **yyy** z");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextFormatter {
    options: Options,
}

impl TextFormatter {
    /// Create a [TextFormatter] with a custom [Options] snapshot.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Format one input. Never fails: any string tokenizes, unmatched
    /// delimiters degrade to plain tokens, and unset options are no-ops.
    ///
    /// Each call owns its token sequence, so one formatter may serve many
    /// documents (or threads) in turn.
    pub fn format(&self, input: &str) -> Output {
        tracing::trace!(?self.options, len = input.len(), "formatting");
        let mut seq = tokenize(input);
        group_tokens(&mut seq);
        let mut reporter = Reporter::default();
        rules::apply_all(&mut seq, &self.options, &mut reporter);
        Output {
            result: render(&seq),
            validations: reporter.into_validations(),
        }
    }
}
