//! Single left-to-right scan turning raw text into the flat token arena.
//!
//! Whitespace never becomes a free-standing token: it attaches to the
//! token before it (or to the sequence's leading space), because nearly
//! every rule asks "is there space next to token X". Linebreaks are kept
//! as verbatim tokens of their own.

use super::*;

pub(crate) fn tokenize(input: &str) -> TokenSeq {
    let chars: Vec<char> = input.chars().collect();
    let mut seq = TokenSeq::new();
    let mut pending = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        // Opaque spans come first: backtick code spans, <code> tag pairs,
        // and &…; entity references all collapse into a single token so no
        // later rule can see inside them.
        if c == '`' {
            let fence = run_length(&chars, i, '`');
            if let Some(close) = find_fence(&chars, i + fence, fence) {
                let stop = close + fence;
                seq.push_token(TokenKind::Code, collect(&chars[i..stop]), i, &mut pending);
                i = stop;
            } else {
                // No closing fence anywhere: keep the run as an inert mark.
                seq.push_token(TokenKind::Mark, collect(&chars[i..i + fence]), i, &mut pending);
                i += fence;
            }
            continue;
        }
        if c == '<' && matches_at(&chars, i, "<code>") {
            if let Some(end) = find_at(&chars, i + 6, "</code>") {
                let stop = end + 7;
                seq.push_token(TokenKind::Code, collect(&chars[i..stop]), i, &mut pending);
                i = stop;
                continue;
            }
        }
        if c == '&' {
            if let Some(stop) = entity_end(&chars, i) {
                seq.push_token(TokenKind::ContentHalf, collect(&chars[i..stop]), i, &mut pending);
                i = stop;
                continue;
            }
        }

        match classify(c) {
            (_, CharRole::Linebreak) => {
                let raw = if c == '\r' && chars.get(i + 1) == Some(&'\n') {
                    "\r\n".to_owned()
                } else {
                    c.to_string()
                };
                let stop = i + raw.chars().count();
                seq.push_token(TokenKind::Linebreak, raw, i, &mut pending);
                i = stop;
            }
            (_, CharRole::Space) => {
                pending.push(c);
                i += 1;
            }
            (_, CharRole::Mark) => {
                let n = run_length(&chars, i, c);
                seq.push_token(TokenKind::Mark, collect(&chars[i..i + n]), i, &mut pending);
                i += n;
            }
            (width, CharRole::Quote) => {
                let kind = match width {
                    CharWidth::Full => TokenKind::QuoteFull,
                    _ => TokenKind::QuoteHalf,
                };
                seq.push_token(kind, c.to_string(), i, &mut pending);
                i += 1;
            }
            (width, CharRole::Bracket) => {
                let kind = match width {
                    CharWidth::Full => TokenKind::BracketFull,
                    _ => TokenKind::BracketHalf,
                };
                seq.push_token(kind, c.to_string(), i, &mut pending);
                i += 1;
            }
            (CharWidth::Full, CharRole::Letter) => {
                let stop = full_run_end(&chars, i);
                seq.push_token(TokenKind::ContentFull, collect(&chars[i..stop]), i, &mut pending);
                i = stop;
            }
            (CharWidth::Half, CharRole::Letter) => {
                let stop = half_run_end(&chars, i);
                seq.push_token(TokenKind::ContentHalf, collect(&chars[i..stop]), i, &mut pending);
                i = stop;
            }
            (CharWidth::Full, _) => {
                seq.push_token(TokenKind::PunctuationFull, c.to_string(), i, &mut pending);
                i += 1;
            }
            _ => {
                seq.push_token(TokenKind::PunctuationHalf, c.to_string(), i, &mut pending);
                i += 1;
            }
        }
    }
    seq.attach_space(&mut pending);
    tracing::trace!(tokens = seq.tokens.len(), "tokenized");
    seq
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn run_length(chars: &[char], start: usize, c: char) -> usize {
    chars[start..].iter().take_while(|&&x| x == c).count()
}

/// Position of the next backtick run of exactly `fence` chars.
fn find_fence(chars: &[char], mut from: usize, fence: usize) -> Option<usize> {
    while from < chars.len() {
        if chars[from] == '`' {
            let n = run_length(chars, from, '`');
            if n == fence {
                return Some(from);
            }
            from += n;
        } else {
            from += 1;
        }
    }
    None
}

fn matches_at(chars: &[char], at: usize, pattern: &str) -> bool {
    pattern
        .chars()
        .enumerate()
        .all(|(k, p)| chars.get(at + k) == Some(&p))
}

fn find_at(chars: &[char], mut from: usize, pattern: &str) -> Option<usize> {
    while from < chars.len() {
        if matches_at(chars, from, pattern) {
            return Some(from);
        }
        from += 1;
    }
    None
}

/// End of an `&name;` or `&#123;` entity reference starting at `at`.
fn entity_end(chars: &[char], at: usize) -> Option<usize> {
    let mut j = at + 1;
    while j < chars.len() && (chars[j].is_ascii_alphanumeric() || chars[j] == '#') {
        j += 1;
    }
    (j > at + 1 && chars.get(j) == Some(&';')).then_some(j + 1)
}

fn full_run_end(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && classify(chars[i]) == (CharWidth::Full, CharRole::Letter) {
        i += 1;
    }
    i
}

/// Characters that may join two half-width content chars into one run.
/// This is what keeps `Vue.js`, `https://vuejs.org`, `what's`, `1+1=2`,
/// and `&amp;`-style entities in one piece.
fn is_join_char(c: char) -> bool {
    matches!(
        c,
        '.' | ':' | '/' | '?' | '&' | '=' | '#' | '%' | '+' | '-' | '_' | '\'' | ';' | '|' | '~'
            | '@'
    )
}

fn half_run_end(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() {
        if classify(chars[i]) == (CharWidth::Half, CharRole::Letter) {
            i += 1;
            continue;
        }
        if is_join_char(chars[i]) {
            // A run of join chars counts only when it leads straight back
            // into half-width content; otherwise the run ends before it.
            let mut j = i;
            while j < chars.len() && is_join_char(chars[j]) {
                j += 1;
            }
            if j < chars.len() && classify(chars[j]) == (CharWidth::Half, CharRole::Letter) {
                i = j;
                continue;
            }
        }
        break;
    }
    i
}
