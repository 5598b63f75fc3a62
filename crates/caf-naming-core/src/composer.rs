//! Candidate composition.
//!
//! Turns a request into a [`Candidate`]: the sanitized prefix, the sanitized
//! name and a first draw of filler, arranged the way the request's
//! [`Convention`] wants them. Sanitization is driven entirely by the rule, so
//! the same prefix may survive intact for a resource group and lose most of
//! its characters for a storage account.

use crate::catalog::ResourceTypeRule;
use crate::random::TokenSource;
use crate::{Convention, Error, NamingRequest, Result};

/// A composed name split into the segments the truncator works on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    /// Sanitized prefix; never shortened
    pub prefix: String,
    /// Sanitized name, including any separators the convention inserted
    pub name: String,
    /// Random filler
    pub filler: String,
}

impl Candidate {
    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        char_len(&self.prefix) + char_len(&self.name) + char_len(&self.filler)
    }

    /// Returns `true` if all segments are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.name.is_empty() && self.filler.is_empty()
    }

    /// Concatenates the segments.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.name.len() + self.filler.len());
        out.push_str(&self.prefix);
        out.push_str(&self.name);
        out.push_str(&self.filler);
        out
    }
}

/// Builds a candidate for `request` under `rule`.
///
/// `filler_length` is the nominal number of filler characters drawn for
/// randomized conventions, capped at the rule's maximum length; the
/// truncator adjusts it to the final budget.
///
/// # Errors
///
/// Returns [`Error::IllegalPrefixOrName`] if the sanitized prefix cannot fit
/// the rule, or if a deterministic convention is left with fewer characters
/// than the rule's minimum length.
pub fn compose(
    rule: &ResourceTypeRule,
    request: &NamingRequest,
    filler_length: usize,
    tokens: &mut impl TokenSource,
) -> Result<Candidate> {
    let filler_length = filler_length.min(rule.max_length());
    let candidate = match request.convention {
        Convention::CafRandom => {
            let prefix = sanitize_prefix(rule, &request.prefix)?;
            let name = sanitize_body(rule, &request.name, prefix.is_empty());
            Candidate {
                prefix,
                name,
                filler: tokens.generate(rule.filler_alphabet(), filler_length),
            }
        }
        Convention::Random => Candidate {
            prefix: sanitize_prefix(rule, &request.prefix)?,
            name: String::new(),
            filler: tokens.generate(rule.filler_alphabet(), filler_length),
        },
        Convention::CafClassic => classic(rule, request)?,
        Convention::Passthrough => Candidate {
            prefix: String::new(),
            name: sanitize_body(rule, &request.name, true),
            filler: String::new(),
        },
    };

    if !request.convention.is_length_exact() {
        let len = candidate.len();
        let min = rule.min_length();
        if len == 0 {
            return Err(illegal(rule, "nothing is left after sanitization".to_string()));
        }
        if len < min {
            return Err(illegal(
                rule,
                format!("sanitized name has {len} characters, minimum is {min}"),
            ));
        }
    }
    Ok(candidate)
}

/// Prefix, slug and name joined with the rule's separator.
fn classic(rule: &ResourceTypeRule, request: &NamingRequest) -> Result<Candidate> {
    let prefix = sanitize_prefix(rule, &request.prefix)?;
    let prefix = prefix.trim_end_matches('-').to_string();

    let slug = rule.sanitize(rule.slug());
    let name = rule.sanitize(&request.name);
    let sep = rule.separator();
    let rest = [slug.trim_matches('-'), name.trim_matches('-')]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep);

    let name = if prefix.is_empty() {
        rule.strip_leading(&rest).to_string()
    } else if rest.is_empty() {
        rest
    } else {
        format!("{sep}{rest}")
    };
    Ok(Candidate {
        prefix,
        name,
        filler: String::new(),
    })
}

fn sanitize_prefix(rule: &ResourceTypeRule, prefix: &str) -> Result<String> {
    let prefix = sanitize_body(rule, prefix, true);
    let len = char_len(&prefix);
    let max = rule.max_length();

    if len > max {
        return Err(illegal(
            rule,
            format!("sanitized prefix '{prefix}' has {len} characters, maximum is {max}"),
        ));
    }
    if len == max && rule.strip_trailing(&prefix).len() != prefix.len() {
        return Err(illegal(
            rule,
            format!("sanitized prefix '{prefix}' fills the name and ends with an illegal character"),
        ));
    }
    Ok(prefix)
}

fn sanitize_body(rule: &ResourceTypeRule, text: &str, leads: bool) -> String {
    let clean = rule.sanitize(text);
    if leads {
        rule.strip_leading(&clean).to_string()
    } else {
        clean
    }
}

fn illegal(rule: &ResourceTypeRule, reason: String) -> Error {
    Error::IllegalPrefixOrName {
        resource_type: rule.code().to_string(),
        reason,
    }
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn truncate_chars(text: &mut String, len: usize) {
    if let Some((index, _)) = text.char_indices().nth(len) {
        text.truncate(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::random::{Alphabet, RandomTokenGenerator};

    /// Emits a fixed character, so composed strings are predictable.
    struct Repeat(char);

    impl TokenSource for Repeat {
        fn generate(&mut self, _alphabet: &Alphabet, length: usize) -> String {
            std::iter::repeat_n(self.0, length).collect()
        }
    }

    /// Records the largest draw without allocating it.
    #[derive(Default)]
    struct Largest {
        requested: usize,
    }

    impl TokenSource for Largest {
        fn generate(&mut self, _alphabet: &Alphabet, length: usize) -> String {
            self.requested = self.requested.max(length);
            "a".repeat(length.min(1024))
        }
    }

    fn rule(code: &str) -> ResourceTypeRule {
        Catalog::builtin().unwrap().lookup(code).unwrap().clone()
    }

    #[test]
    fn test_cafrandom_segments() {
        let request = NamingRequest::new("st", "Log").with_prefix("rdmi-");
        let candidate = compose(&rule("st"), &request, 5, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.prefix, "rdmi");
        assert_eq!(candidate.name, "log");
        assert_eq!(candidate.filler, "xxxxx");
        assert_eq!(candidate.render(), "rdmilogxxxxx");
        assert_eq!(candidate.len(), 12);
    }

    #[test]
    fn test_cafrandom_keeps_dash_where_tolerated() {
        let request = NamingRequest::new("afw", "fire").with_prefix("rdmi-");
        let candidate = compose(&rule("afw"), &request, 0, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.render(), "rdmi-fire");
    }

    #[test]
    fn test_irregular_prefix_for_resource_group() {
        let request = NamingRequest::new("rg", "myrg").with_prefix("(_124)-");
        let candidate = compose(&rule("rg"), &request, 0, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.prefix, "(_124)-");
        assert_eq!(candidate.name, "myrg");
    }

    #[test]
    fn test_irregular_prefix_stripped_to_letters() {
        let request = NamingRequest::new("kv", "vault").with_prefix("(_124)-");
        let candidate = compose(&rule("kv"), &request, 0, &mut Repeat('x')).unwrap();
        assert!(candidate.prefix.is_empty());
        assert_eq!(candidate.name, "vault");
    }

    #[test]
    fn test_leading_digits_stripped_from_name_without_prefix() {
        let request = NamingRequest::new("kv", "42vault");
        let candidate = compose(&rule("kv"), &request, 0, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.name, "vault");
    }

    #[test]
    fn test_leading_digits_kept_in_name_after_prefix() {
        let request = NamingRequest::new("kv", "42vault").with_prefix("dev");
        let candidate = compose(&rule("kv"), &request, 0, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.render(), "dev42vault");
    }

    #[test]
    fn test_random_ignores_name() {
        let request = NamingRequest::new("kv", "vault")
            .with_prefix("dev-")
            .with_convention(Convention::Random);
        let candidate = compose(&rule("kv"), &request, 3, &mut Repeat('q')).unwrap();
        assert_eq!(candidate.render(), "dev-qqq");
    }

    #[test]
    fn test_classic_joins_with_dashes() {
        let request = NamingRequest::new("kv", "vault")
            .with_prefix("dev-")
            .with_convention(Convention::CafClassic);
        let candidate = compose(&rule("kv"), &request, 5, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.render(), "dev-kv-vault");
        assert!(candidate.filler.is_empty());
    }

    #[test]
    fn test_classic_without_dashes() {
        let request = NamingRequest::new("st", "logs")
            .with_prefix("dev")
            .with_convention(Convention::CafClassic);
        let candidate = compose(&rule("st"), &request, 5, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.render(), "devstlogs");
    }

    #[test]
    fn test_classic_without_prefix() {
        let request = NamingRequest::new("vnet", "hub").with_convention(Convention::CafClassic);
        let candidate = compose(&rule("vnet"), &request, 5, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.render(), "vnet-hub");
    }

    #[test]
    fn test_passthrough_ignores_prefix() {
        let request = NamingRequest::new("kv", "my vault!")
            .with_prefix("dev")
            .with_convention(Convention::Passthrough);
        let candidate = compose(&rule("kv"), &request, 5, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.render(), "myvault");
    }

    #[test]
    fn test_passthrough_empty_after_sanitization() {
        let request = NamingRequest::new("st", "---").with_convention(Convention::Passthrough);
        let err = compose(&rule("st"), &request, 5, &mut Repeat('x')).unwrap_err();
        assert!(err.is_illegal_prefix_or_name());
    }

    #[test]
    fn test_prefix_longer_than_max_rejected() {
        let request = NamingRequest::new("st", "log").with_prefix("a".repeat(25));
        let err = compose(&rule("st"), &request, 5, &mut Repeat('x')).unwrap_err();
        assert!(err.is_illegal_prefix_or_name());
        assert!(err.to_string().contains("maximum is 24"));
    }

    #[test]
    fn test_prefix_counted_after_sanitization() {
        let request = NamingRequest::new("st", "log").with_prefix("-".repeat(40) + "rdmi");
        let candidate = compose(&rule("st"), &request, 5, &mut Repeat('x')).unwrap();
        assert_eq!(candidate.prefix, "rdmi");
    }

    #[test]
    fn test_full_length_prefix_with_bad_tail_rejected() {
        let request = NamingRequest::new("vmw", "x").with_prefix("abcdefghijklmn-");
        let err = compose(&rule("vmw"), &request, 5, &mut Repeat('x')).unwrap_err();
        assert!(err.is_illegal_prefix_or_name());
    }

    #[test]
    fn test_filler_uses_rule_alphabet() {
        let request = NamingRequest::new("st", "log");
        let mut tokens = RandomTokenGenerator::seeded(3);
        let candidate = compose(&rule("st"), &request, 20, &mut tokens).unwrap();
        assert_eq!(candidate.filler.len(), 20);
        assert!(candidate
            .filler
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_filler_draw_capped_at_max_length() {
        for convention in [Convention::CafRandom, Convention::Random] {
            let request = NamingRequest::new("st", "log").with_convention(convention);
            let mut tokens = Largest::default();
            let candidate = compose(&rule("st"), &request, usize::MAX, &mut tokens).unwrap();
            assert_eq!(tokens.requested, 24);
            assert_eq!(candidate.filler.len(), 24);
        }
    }

    #[test]
    fn test_passthrough_shorter_than_min_rejected() {
        for (code, name) in [("st", "ab"), ("kv", "ab"), ("aaa", "abc")] {
            let request = NamingRequest::new(code, name).with_convention(Convention::Passthrough);
            let err = compose(&rule(code), &request, 5, &mut Repeat('x')).unwrap_err();
            assert!(err.is_illegal_prefix_or_name(), "{code}: {err}");
            assert!(err.to_string().contains("minimum is"));
        }
    }

    #[test]
    fn test_classic_checked_against_min() {
        let request = NamingRequest::new("st", "").with_convention(Convention::CafClassic);
        let err = compose(&rule("st"), &request, 5, &mut Repeat('x')).unwrap_err();
        assert!(err.is_illegal_prefix_or_name());

        let request = request.with_prefix("d");
        assert_eq!(
            compose(&rule("st"), &request, 5, &mut Repeat('x')).unwrap().render(),
            "dst"
        );
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        let mut text = "héllo".to_string();
        truncate_chars(&mut text, 2);
        assert_eq!(text, "hé");
        truncate_chars(&mut text, 10);
        assert_eq!(text, "hé");
    }
}
