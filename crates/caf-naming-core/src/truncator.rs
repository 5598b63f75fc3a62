//! Length reconciliation.
//!
//! Trimming order when a candidate is too long:
//!
//! 1. the prefix is never touched,
//! 2. the filler shrinks first,
//! 3. then the name loses characters from its tail.
//!
//! Length-exact conventions then grow the filler back until the name is
//! exactly `max_length` characters long. Finally the filler characters that
//! sit on an edge of the name are redrawn from the edge alphabets when the
//! first draw is not allowed there.

use crate::catalog::ResourceTypeRule;
use crate::composer::{Candidate, char_len, truncate_chars};
use crate::random::{Alphabet, TokenSource};

/// Fits `candidate` into the rule's length budget and renders it.
///
/// The caller guarantees that the prefix alone fits; the composer rejects
/// requests where it does not.
pub fn truncate(
    mut candidate: Candidate,
    rule: &ResourceTypeRule,
    exact: bool,
    tokens: &mut impl TokenSource,
) -> String {
    let budget = rule.max_length();
    let mut over = candidate.len().saturating_sub(budget);

    over = shrink(&mut candidate.filler, over);
    shrink(&mut candidate.name, over);

    if candidate.filler.is_empty() {
        let kept = rule.strip_trailing(&candidate.name).len();
        candidate.name.truncate(kept);
    }

    if exact {
        let missing = budget.saturating_sub(candidate.len());
        if missing > 0 {
            let extra = tokens.generate(rule.filler_alphabet(), missing);
            candidate.filler.push_str(&extra);
        }
    }

    settle_edges(&mut candidate, rule, tokens);
    candidate.render()
}

/// Removes up to `over` characters from the tail; returns what is still over.
fn shrink(segment: &mut String, over: usize) -> usize {
    let len = char_len(segment);
    let cut = over.min(len);
    truncate_chars(segment, len - cut);
    over - cut
}

fn settle_edges(candidate: &mut Candidate, rule: &ResourceTypeRule, tokens: &mut impl TokenSource) {
    let leads = candidate.prefix.is_empty() && candidate.name.is_empty();
    let filler = &mut candidate.filler;

    match char_len(filler) {
        0 => {}
        1 if leads => redraw_first(filler, rule.edge_alphabet(), tokens),
        _ => {
            if leads {
                redraw_first(filler, rule.leading_alphabet(), tokens);
            }
            redraw_last(filler, rule.trailing_alphabet(), tokens);
        }
    }
}

fn redraw_first(filler: &mut String, alphabet: &Alphabet, tokens: &mut impl TokenSource) {
    if let Some(first) = filler.chars().next()
        && !alphabet.contains(first)
    {
        filler.replace_range(..first.len_utf8(), &tokens.generate(alphabet, 1));
    }
}

fn redraw_last(filler: &mut String, alphabet: &Alphabet, tokens: &mut impl TokenSource) {
    if let Some((index, last)) = filler.char_indices().next_back()
        && !alphabet.contains(last)
    {
        filler.replace_range(index.., &tokens.generate(alphabet, 1));
    }
}
