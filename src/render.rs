//! Folds the final token sequence back into a string: leading space, then
//! each token's content followed by its adjusted trailing whitespace.
//! Purely a fold; no validation, no mutation.

use super::*;

pub(crate) fn render(seq: &TokenSeq) -> String {
    let capacity = seq.leading_space.len()
        + seq
            .tokens
            .iter()
            .map(|t| t.content.len() + t.space_after.len())
            .sum::<usize>();
    let mut out = String::with_capacity(capacity);
    out.push_str(&seq.leading_space);
    for token in &seq.tokens {
        out.push_str(&token.content);
        out.push_str(&token.space_after);
    }
    out
}
