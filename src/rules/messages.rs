//! Stable messages carried by [Validation](crate::Validation)s. Compare
//! against these constants rather than matching message text.

/// There should be no space just inside emphasis marks.
pub const MARK_NOSPACE_INSIDE: &str = "no space inside emphasis marks";
/// There should be one space outside inline code.
pub const CODE_SPACE_OUTSIDE: &str = "one space outside inline code";
/// There should be no space outside inline code.
pub const CODE_NOSPACE_OUTSIDE: &str = "no space outside inline code";
/// This punctuation should be full-width.
pub const PUNCTUATION_FULL_WIDTH: &str = "punctuation should be full-width";
/// This punctuation should be half-width.
pub const PUNCTUATION_HALF_WIDTH: &str = "punctuation should be half-width";
/// Quotes should follow the simplified convention.
pub const PUNCTUATION_UNIFICATION_SIMPLIFIED: &str = "quotes should be simplified";
/// Quotes should follow the traditional convention.
pub const PUNCTUATION_UNIFICATION_TRADITIONAL: &str = "quotes should be traditional";
/// There should be exactly one space between half-width content.
pub const CONTENT_SPACE_HALF_WIDTH: &str = "one space between half-width content";
/// There should be no space between full-width content.
pub const CONTENT_NOSPACE_FULL_WIDTH: &str = "no space between full-width content";
/// There should be one space between mixed-width content.
pub const CONTENT_SPACE_MIXED_WIDTH: &str = "one space between mixed-width content";
/// There should be no space between mixed-width content.
pub const CONTENT_NOSPACE_MIXED_WIDTH: &str = "no space between mixed-width content";
/// There should be no space before punctuation.
pub const PUNCTUATION_NOSPACE_BEFORE: &str = "no space before punctuation";
/// There should be one space after half-width punctuation.
pub const PUNCTUATION_SPACE_AFTER: &str = "one space after half-width punctuation";
/// There should be no space after full-width punctuation.
pub const PUNCTUATION_NOSPACE_AFTER: &str = "no space after full-width punctuation";
/// There should be no space just inside quotes.
pub const QUOTE_NOSPACE_INSIDE: &str = "no space inside quotes";
/// There should be one space outside half-width quotes.
pub const QUOTE_SPACE_OUTSIDE: &str = "one space outside quotes";
/// There should be no space outside these quotes.
pub const QUOTE_NOSPACE_OUTSIDE: &str = "no space outside quotes";
/// There should be no space just inside brackets.
pub const BRACKET_NOSPACE_INSIDE: &str = "no space inside brackets";
/// There should be one space outside half-width brackets.
pub const BRACKET_SPACE_OUTSIDE: &str = "one space outside brackets";
/// There should be no space outside these brackets.
pub const BRACKET_NOSPACE_OUTSIDE: &str = "no space outside brackets";
/// There should be no space at the start or end of the text.
pub const TRIM_SPACE: &str = "no space at the start or end";
