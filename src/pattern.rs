//! Rule compilation
//!
//! Turns a rule's structural description into the two matchers the
//! extractor runs over a document: one capturing title content, one
//! capturing the price amount. Matchers are built fresh per invocation
//! and never cached.

use regex::Regex;
use thiserror::Error;

use crate::rules::SiteRule;

/// Title and price matchers compiled from one rule.
#[derive(Debug)]
pub struct CompiledPatterns {
    /// Matches `<tag ...attr...>CONTENT</tag>`, capturing CONTENT
    pub title: Regex,
    /// Matches the price element, capturing the amount
    pub price: Regex,
}

/// Configuration-integrity failures. A rule that fails here cannot be used
/// until corrected; there is no runtime recovery.
#[derive(Debug, Error)]
pub enum RuleCompileError {
    #[error("rule '{rule}' has a malformed pattern fragment: {source}")]
    BadPattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("rule '{rule}' captures no price amount group")]
    MissingAmountGroup { rule: &'static str },
}

/// Compile a rule into its title and price matchers.
///
/// Both patterns are case-insensitive and span newlines. An empty attribute
/// fragment degrades to "any attributes" rather than failing. The price
/// pattern must capture the amount in at least one group; rules that don't
/// are rejected here instead of silently extracting nothing downstream.
pub fn compile(rule: &SiteRule) -> Result<CompiledPatterns, RuleCompileError> {
    let title_src = format!(
        "(?is)<{tag}[^>]*{attr}[^>]*>(.*?)</{tag}>",
        tag = rule.title_tag,
        attr = rule.title_attr,
    );
    let price_src = format!(
        "(?is)<{tag}[^>]*{attr}[^>]*>.*?{value}.*?</{tag}>",
        tag = rule.price_tag,
        attr = rule.price_attr,
        value = rule.price_value,
    );

    let title = Regex::new(&title_src).map_err(|source| RuleCompileError::BadPattern {
        rule: rule.name,
        source,
    })?;
    let price = Regex::new(&price_src).map_err(|source| RuleCompileError::BadPattern {
        rule: rule.name,
        source,
    })?;

    // captures_len() counts the implicit whole-match group 0
    if price.captures_len() < 2 {
        return Err(RuleCompileError::MissingAmountGroup { rule: rule.name });
    }

    Ok(CompiledPatterns { title, price })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DEFAULT_RULE, SITE_RULES};

    #[test]
    fn test_every_builtin_rule_compiles() {
        for rule in SITE_RULES.iter().chain(std::iter::once(&DEFAULT_RULE)) {
            assert!(compile(rule).is_ok(), "rule '{}' failed to compile", rule.name);
        }
    }

    #[test]
    fn test_empty_attr_matches_bare_elements() {
        let patterns = compile(&DEFAULT_RULE).unwrap();
        let caps = patterns.title.captures("<h2>Widget A</h2>").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "Widget A");
    }

    #[test]
    fn test_title_matcher_is_case_insensitive_and_spans_newlines() {
        let patterns = compile(&DEFAULT_RULE).unwrap();
        let caps = patterns
            .title
            .captures("<H2 class=\"x\">Line one\nLine two</H2>")
            .unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "Line one\nLine two");
    }

    #[test]
    fn test_malformed_fragment_is_a_compile_error() {
        let mut rule = DEFAULT_RULE;
        rule.name = "broken";
        rule.price_value = r"₹\s*(\d+";
        match compile(&rule) {
            Err(RuleCompileError::BadPattern { rule: name, .. }) => assert_eq!(name, "broken"),
            other => panic!("expected BadPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_groupless_price_fragment_is_rejected() {
        let mut rule = DEFAULT_RULE;
        rule.name = "groupless";
        rule.price_value = r"₹\s*\d+";
        match compile(&rule) {
            Err(RuleCompileError::MissingAmountGroup { rule: name }) => {
                assert_eq!(name, "groupless")
            }
            other => panic!("expected MissingAmountGroup, got {other:?}"),
        }
    }
}
