//! Stack-based pairing of quotes, brackets, and emphasis marks into group
//! records. Each delimiter family is paired independently in one pass;
//! the nearest unmatched opener always closes first, and anything left
//! unmatched stays a plain token.

use super::*;

pub(crate) fn group_tokens(seq: &mut TokenSeq) {
    pair_marks(seq);
    pair_quotes(seq);
    pair_brackets(seq);
    // Outermost groups first, so group-driven rules fire parent before
    // child regardless of which pair completed first.
    seq.groups = seq
        .groups
        .drain(..)
        .sorted_by_key(|group| group.start)
        .collect();
    tracing::trace!(groups = seq.groups.len(), "grouped");
}

/// Emphasis marks pair with an identical run: `**` with `**`, `_` with
/// `_`. The first occurrence opens, the next identical run closes.
fn pair_marks(seq: &mut TokenSeq) {
    let mut stack: Vec<usize> = vec![];
    for i in 0..seq.tokens.len() {
        if seq.tokens[i].kind != TokenKind::Mark {
            continue;
        }
        match stack
            .iter()
            .rposition(|&open| seq.tokens[open].raw == seq.tokens[i].raw)
        {
            Some(at) => {
                seq.groups.push(Group {
                    kind: GroupKind::Mark,
                    start: stack[at],
                    end: i,
                });
                // Openers nested inside the closed pair never matched.
                stack.truncate(at);
            }
            None => stack.push(i),
        }
    }
}

fn pair_quotes(seq: &mut TokenSeq) {
    // Stack entries carry the family's opening character, so `"…"` can
    // never be closed by `”` and half/full families never cross-pair.
    let mut stack: Vec<(char, usize)> = vec![];
    for i in 0..seq.tokens.len() {
        if !matches!(seq.tokens[i].kind, TokenKind::QuoteHalf | TokenKind::QuoteFull) {
            continue;
        }
        let Some(c) = seq.content_char(i) else { continue };
        let family = match quote_side(c) {
            QuoteSide::Open => {
                stack.push((c, i));
                continue;
            }
            QuoteSide::Close(open) => open,
            QuoteSide::Toggle => {
                if let Some(at) = stack.iter().rposition(|&(f, _)| f == c) {
                    close(seq, &mut stack, at, GroupKind::Quote, i);
                } else {
                    stack.push((c, i));
                }
                continue;
            }
        };
        if let Some(at) = stack.iter().rposition(|&(f, _)| f == family) {
            close(seq, &mut stack, at, GroupKind::Quote, i);
        }
    }
}

fn pair_brackets(seq: &mut TokenSeq) {
    let mut stack: Vec<(char, usize)> = vec![];
    for i in 0..seq.tokens.len() {
        if !matches!(
            seq.tokens[i].kind,
            TokenKind::BracketHalf | TokenKind::BracketFull
        ) {
            continue;
        }
        let Some(c) = seq.content_char(i) else { continue };
        if bracket_close_of(c).is_some() {
            stack.push((c, i));
        } else if let Some(at) = stack
            .iter()
            .rposition(|&(open, _)| bracket_close_of(open) == Some(c))
        {
            close(seq, &mut stack, at, GroupKind::Bracket, i);
        }
    }
}

fn close(seq: &mut TokenSeq, stack: &mut Vec<(char, usize)>, at: usize, kind: GroupKind, end: usize) {
    seq.groups.push(Group {
        kind,
        start: stack[at].1,
        end,
    });
    stack.truncate(at);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped(input: &str) -> TokenSeq {
        let mut seq = tokenize(input);
        group_tokens(&mut seq);
        seq
    }

    fn spans(seq: &TokenSeq) -> Vec<(GroupKind, usize, usize)> {
        seq.groups.iter().map(|g| (g.kind, g.start, g.end)).collect()
    }

    #[test]
    fn nested_marks_pair_innermost_first() {
        // tokens: x _ ** yyy ** _ z
        let seq = grouped("x _** yyy **_ z");
        assert_eq!(
            spans(&seq),
            [(GroupKind::Mark, 1, 5), (GroupKind::Mark, 2, 4)]
        );
    }

    #[test]
    fn straight_quotes_toggle() {
        let seq = grouped("foo \" bar \" baz");
        assert_eq!(spans(&seq), [(GroupKind::Quote, 1, 3)]);
    }

    #[test]
    fn quote_families_do_not_cross_pair() {
        // tokens: 一 “ 二 " 三 — the two quote marks belong to different
        // families, so both stay unmatched.
        let seq = grouped("一“二\"三");
        assert!(seq.groups.is_empty());
    }

    #[test]
    fn unmatched_delimiters_stay_plain_tokens() {
        let seq = grouped("users' items (here");
        assert!(seq.groups.is_empty());
    }

    #[test]
    fn mismatched_nesting_drops_the_inner_opener() {
        // tokens: ** a _ b ** — `_` never closes, `**` still pairs.
        let seq = grouped("** a _ b **");
        assert_eq!(spans(&seq), [(GroupKind::Mark, 0, 4)]);
    }

    #[test]
    fn groups_are_sorted_outermost_first() {
        let seq = grouped("「你『好』」");
        assert_eq!(
            spans(&seq),
            [(GroupKind::Quote, 0, 5), (GroupKind::Quote, 2, 4)]
        );
    }
}
