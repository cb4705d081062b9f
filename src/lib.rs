//! Format and lint prose that mixes CJK (full-width) and Latin (half-width)
//! text, inline markup, and punctuation.
//!
//! Every rule is driven by an option in [Options]. An option left at [None]
//! means "preserve the original text for this aspect", so running with
//! [`Options::default`] reproduces the input byte for byte.
//!
//! # Getting Started
//!
//! ```rust
//! use cjk_fmt::{format_text_with_options, Options};
//!
//! let output = format_text_with_options(
//!     "中文foo 中文 foo中foo文",
//!     Options {
//!         space_between_mixed_width_content: Some(true),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(output.result, "中文 foo 中文 foo 中 foo 文");
//! ```
//!
//! Every place the output differs from the input is reported as a
//! [Validation] pointing back into the *original* text:
//!
//! ```rust
//! use cjk_fmt::{format_text_with_options, Options};
//!
//! let output = format_text_with_options(
//!     "xxx`foo`xxx",
//!     Options {
//!         space_outside_code: Some(true),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(output.result, "xxx `foo` xxx");
//! assert_eq!(output.validations.len(), 2);
//! ```
//!
//! # Using the [TextFormatter]
//!
//! Build one [TextFormatter] and reuse it across documents:
//!
//! ```rust
//! use cjk_fmt::{Options, TextFormatter};
//!
//! let formatter = TextFormatter::with_options(Options::standard());
//! let output = formatter.format("你好,再见.");
//! assert_eq!(output.result, "你好，再见。");
//! ```

use itertools::Itertools;
use unicode_width::UnicodeWidthChar;

mod char_kind;
mod config;
mod formatter;
mod group;
mod render;
mod report;
mod rules;
#[cfg(test)]
mod test;
mod token;
mod tokenize;

use crate::{
    char_kind::{
        bracket_close_of, classify, full_quote_of, full_width_of, half_width_of, is_full_quote,
        is_full_width, is_normal_punctuation, quote_side, simplified_quote_of,
        traditional_quote_of, CharRole, CharWidth, QuoteSide,
    },
    group::group_tokens,
    render::render,
    report::Reporter,
    token::{Group, GroupKind, Token, TokenKind, TokenSeq},
    tokenize::tokenize,
};
pub use crate::{
    config::{Options, PunctuationUnification},
    formatter::{Output, TextFormatter},
    report::{Validation, ValidationTarget},
    rules::messages,
};

/// Run a pass with all options unset, which preserves the input exactly.
///
/// This is the identity transform: it exists so callers can treat "no
/// configuration" and "full configuration" uniformly.
///
/// ```rust
/// let output = cjk_fmt::format_text("xxx `foo`   xxx");
/// assert_eq!(output.result, "xxx `foo`   xxx");
/// assert!(output.validations.is_empty());
/// ```
pub fn format_text(input: &str) -> Output {
    TextFormatter::default().format(input)
}

/// Run a single formatting pass over `input` with the given [Options].
///
/// ```rust
/// use cjk_fmt::{format_text_with_options, Options};
///
/// let output = format_text_with_options(
///     "foo bar   baz",
///     Options {
///         space_between_half_width_content: Some(true),
///         ..Default::default()
///     },
/// );
/// assert_eq!(output.result, "foo bar baz");
/// ```
pub fn format_text_with_options(input: &str, options: Options) -> Output {
    TextFormatter::with_options(options).format(input)
}
