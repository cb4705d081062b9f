//! Shared helpers for rule handlers: space hosts, guarded mutation that
//! records a validation exactly when the state changes, and context
//! queries.

use super::*;

/// Set the whitespace after `host` to `desired`, recording a validation
/// against the host's original position when the current state differs.
/// Linebreak hosts are never touched: authored line wrapping survives.
pub(crate) fn check_space_after(
    seq: &mut TokenSeq,
    host: usize,
    desired: &str,
    target: ValidationTarget,
    message: &'static str,
    report: &mut Reporter,
) {
    let token = &mut seq.tokens[host];
    if token.kind == TokenKind::Linebreak || token.space_after == desired {
        return;
    }
    report.record(token.index, token.length, target, message);
    desired.clone_into(&mut token.space_after);
}

/// Substitute a token's content with a single character, recording a
/// validation over the token's original span.
pub(crate) fn check_content(
    seq: &mut TokenSeq,
    index: usize,
    desired: char,
    target: ValidationTarget,
    message: &'static str,
    report: &mut Reporter,
) {
    let token = &mut seq.tokens[index];
    if token.content.chars().eq([desired]) {
        return;
    }
    report.record(token.index, token.length, target, message);
    token.content = desired.to_string();
}

/// Substitute a pair's delimiter mark, recording a zero-length validation
/// so the caret points at the mark itself.
pub(crate) fn check_mark_content(
    seq: &mut TokenSeq,
    index: usize,
    desired: char,
    target: ValidationTarget,
    message: &'static str,
    report: &mut Reporter,
) {
    let token = &mut seq.tokens[index];
    if token.content.chars().eq([desired]) {
        return;
    }
    report.record(token.index, 0, target, message);
    token.content = desired.to_string();
}

/// The token owning the single gap between visible neighbors `a` and `b`
/// that should carry any space. Emphasis marks wrapping `a` are stepped
/// over so the space lands *outside* the marks: for `**中文** foo` the
/// host is the closing `**`, while for `xxx **`foo`**` the host is `xxx`.
pub(crate) fn space_host_between(seq: &TokenSeq, a: usize, b: usize) -> usize {
    let mut host = a;
    for k in a + 1..b {
        if seq.tokens[k].kind == TokenKind::Mark && seq.is_group_end(k) {
            host = k;
        } else {
            break;
        }
    }
    host
}

/// Whether a visible letter neighbor on either side is full-width.
pub(crate) fn beside_full_width_letters(seq: &TokenSeq, index: usize) -> bool {
    [seq.prev_visible(index), seq.next_visible(index)]
        .iter()
        .flatten()
        .any(|&j| seq.tokens[j].kind == TokenKind::ContentFull)
}

/// Whether a quote pair sits in full-width context: a full-width letter
/// run directly outside either mark, or just inside the pair.
pub(crate) fn group_in_full_width_context(seq: &TokenSeq, group: Group) -> bool {
    let outside = [seq.prev_visible(group.start), seq.next_visible(group.end)];
    let inside = [
        seq.next_visible(group.start).filter(|&j| j < group.end),
        seq.prev_visible(group.end).filter(|&j| j > group.start),
    ];
    outside
        .iter()
        .chain(inside.iter())
        .flatten()
        .any(|&j| seq.tokens[j].kind == TokenKind::ContentFull)
}
