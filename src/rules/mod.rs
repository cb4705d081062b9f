//! Rule handlers and their dispatcher.
//!
//! Handlers run in a fixed order; later handlers may rely on earlier
//! normalization (punctuation width runs before the spacing rules so a
//! converted `，` is treated as full-width), and when two rules disagree
//! about the same boundary the later one wins. The order is:
//!
//! 1. [mark_space] — spacing inside emphasis marks
//! 2. [punctuation_width] — half/full-width conversion
//! 3. [punctuation_unified] — quote convention unification
//! 4. [content_space] — spacing between content runs
//! 5. [punctuation_space] — spacing around punctuation
//! 6. [quote_space] — spacing around quotes
//! 7. [bracket_space] — spacing around brackets
//! 8. [code_space] — spacing outside inline code
//! 9. [trim_space] — leading/trailing whitespace

use super::*;

mod bracket_space;
mod code_space;
mod content_space;
mod mark_space;
pub mod messages;
mod punctuation_space;
mod punctuation_unified;
mod punctuation_width;
mod quote_space;
mod trim_space;
mod util;

pub(crate) use util::*;

use messages::*;

/// One style concern. A handler reads its options once at construction,
/// then behaves as a pure function of (token, neighbors) → mutation +
/// validations. Handlers must be idempotent, and must be a complete no-op
/// when their option is unset.
pub(crate) trait Handler {
    /// Called once per token, in sequence order.
    fn on_token(&self, _seq: &mut TokenSeq, _index: usize, _report: &mut Reporter) {}

    /// Called once per group, outermost first.
    fn on_group(&self, _seq: &mut TokenSeq, _group: Group, _report: &mut Reporter) {}

    /// Called once after the token and group walks.
    fn on_sequence(&self, _seq: &mut TokenSeq, _report: &mut Reporter) {}
}

/// Run every handler over the sequence in the documented order.
pub(crate) fn apply_all(seq: &mut TokenSeq, options: &Options, report: &mut Reporter) {
    let handlers: Vec<Box<dyn Handler>> = vec![
        Box::new(mark_space::MarkSpace::new(options)),
        Box::new(punctuation_width::PunctuationWidth::new(options)),
        Box::new(punctuation_unified::PunctuationUnified::new(options)),
        Box::new(content_space::ContentSpace::new(options)),
        Box::new(punctuation_space::PunctuationSpace::new(options)),
        Box::new(quote_space::QuoteSpace::new(options)),
        Box::new(bracket_space::BracketSpace::new(options)),
        Box::new(code_space::CodeSpace::new(options)),
        Box::new(trim_space::TrimSpace::new(options)),
    ];
    for handler in &handlers {
        for index in 0..seq.tokens.len() {
            handler.on_token(seq, index, report);
        }
        for at in 0..seq.groups.len() {
            let group = seq.groups[at];
            handler.on_group(seq, group, report);
        }
        handler.on_sequence(seq, report);
    }
}
