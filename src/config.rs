use super::*;

/// Which quote convention to unify paired quotes into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PunctuationUnification {
    /// Curly quotes `“”`/`‘’`, the simplified Chinese convention.
    Simplified,
    /// Corner quotes `「」`/`『』`, the traditional Chinese convention.
    Traditional,
}

/// An immutable configuration snapshot for one formatting pass.
///
/// Every field is an [Option]; [None] is a first-class policy value that
/// means "do not touch this aspect, preserve the original", and is
/// distinct from `Some(false)`. [`Options::default`] leaves everything
/// unset, so formatting with it reproduces the input exactly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// Punctuation and bracket characters enforced half-width. When a
    /// character appears in both width charsets, this one wins.
    pub half_width_punctuation: Option<String>,
    /// Punctuation, bracket, and quote characters enforced full-width.
    /// Normal punctuation only converts next to full-width content, and
    /// quotes only convert as matched pairs, so `Vue.js` and `what's`
    /// survive.
    pub full_width_punctuation: Option<String>,
    /// Remap paired quotes between the corner and curly conventions.
    pub unified_punctuation: Option<PunctuationUnification>,
    /// `Some(true)`: exactly one space between adjacent half-width
    /// content runs.
    pub space_between_half_width_content: Option<bool>,
    /// `Some(true)`: no space between adjacent full-width content runs.
    pub no_space_between_full_width_content: Option<bool>,
    /// `Some(true)`: one space where half-width and full-width content
    /// meet; `Some(false)`: none.
    pub space_between_mixed_width_content: Option<bool>,
    /// `Some(true)`: no space between content and the punctuation that
    /// follows it.
    pub no_space_before_punctuation: Option<bool>,
    /// `Some(true)`: one space after half-width punctuation.
    pub space_after_half_width_punctuation: Option<bool>,
    /// `Some(true)`: no space after full-width punctuation.
    pub no_space_after_full_width_punctuation: Option<bool>,
    /// `Some(true)`: one space outside half-width quote pairs next to
    /// letter content; `Some(false)`: none.
    pub space_outside_half_quote: Option<bool>,
    /// `Some(true)`: no space outside full-width quote pairs.
    pub no_space_outside_full_quote: Option<bool>,
    /// `Some(true)`: no space just inside quote pairs.
    pub no_space_inside_quote: Option<bool>,
    /// `Some(true)`: one space outside half-width bracket pairs next to
    /// letter content; `Some(false)`: none.
    pub space_outside_half_bracket: Option<bool>,
    /// `Some(true)`: no space outside full-width bracket pairs.
    pub no_space_outside_full_bracket: Option<bool>,
    /// `Some(true)`: no space just inside bracket pairs.
    pub no_space_inside_bracket: Option<bool>,
    /// `Some(true)`: one space outside inline code next to content;
    /// `Some(false)`: none. Whitespace *inside* code is never touched.
    pub space_outside_code: Option<bool>,
    /// `Some(true)`: no space just inside emphasis mark pairs.
    pub no_space_inside_mark: Option<bool>,
    /// `Some(true)`: strip whitespace at the very start and end of the
    /// text. Spaces before interior linebreaks are preserved.
    pub trim_space: Option<bool>,
}

impl Options {
    /// The recommended ruleset: half-width brackets, full-width CJK
    /// punctuation, simplified quotes, and tight spacing everywhere.
    ///
    /// ```rust
    /// # use cjk_fmt::{format_text_with_options, Options};
    /// let output = format_text_with_options("Vue (读音 /vjuː/，类似于)", Options::standard());
    /// assert_eq!(output.result, "Vue (读音 /vjuː/，类似于)");
    /// ```
    pub fn standard() -> Self {
        Self {
            half_width_punctuation: Some("()".into()),
            full_width_punctuation: Some("，。：；？！“”‘’".into()),
            unified_punctuation: Some(PunctuationUnification::Simplified),
            space_between_half_width_content: Some(true),
            no_space_between_full_width_content: Some(true),
            space_between_mixed_width_content: Some(true),
            no_space_before_punctuation: Some(true),
            space_after_half_width_punctuation: Some(true),
            no_space_after_full_width_punctuation: Some(true),
            space_outside_half_quote: Some(true),
            no_space_outside_full_quote: Some(true),
            no_space_inside_quote: Some(true),
            space_outside_half_bracket: Some(true),
            no_space_outside_full_bracket: Some(true),
            no_space_inside_bracket: Some(true),
            space_outside_code: Some(true),
            no_space_inside_mark: Some(true),
            trim_space: Some(true),
        }
    }
}
