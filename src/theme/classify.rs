//! Priority-ordered theme classification.

use super::Theme;
use crate::store::ExcerptSelection;

/// Which text a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    /// Site labels of the chosen excerpts.
    Sites,
    /// Text of the chosen facts.
    Facts,
}

/// One classification rule: any keyword present in the target yields `theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyRule {
    /// Text inspected.
    pub target: RuleTarget,
    /// Lowercase keywords.
    pub keywords: &'static [&'static str],
    /// Theme produced on match.
    pub theme: Theme,
}

/// Classification rules in priority order. First match wins.
pub const CLASSIFY_RULES: &[ClassifyRule] = &[
    ClassifyRule {
        target: RuleTarget::Sites,
        keywords: &["nasa"],
        theme: Theme::Space,
    },
    ClassifyRule {
        target: RuleTarget::Sites,
        keywords: &["bbc"],
        theme: Theme::Food,
    },
    ClassifyRule {
        target: RuleTarget::Sites,
        keywords: &["archdaily", "aho"],
        theme: Theme::Architecture,
    },
    ClassifyRule {
        target: RuleTarget::Sites,
        keywords: &["ikea"],
        theme: Theme::Design,
    },
    ClassifyRule {
        target: RuleTarget::Sites,
        keywords: &["health"],
        theme: Theme::Health,
    },
    ClassifyRule {
        target: RuleTarget::Facts,
        keywords: &["pasta", "lasagna"],
        theme: Theme::Food,
    },
    ClassifyRule {
        target: RuleTarget::Facts,
        keywords: &["tennis", "curling"],
        theme: Theme::Sport,
    },
];

/// Infer the theme of a report from its chosen facts and excerpts.
///
/// Site labels are checked before fact text; matching is case-insensitive
/// substring containment. Falls back to [`Theme::Routine`].
///
/// # Example
///
/// ```
/// use hallucination_reports::store::ExcerptSelection;
/// use hallucination_reports::theme::{classify, Theme};
///
/// let excerpts = vec![ExcerptSelection::new("NASA Blog", "", "Countdown resumed.")];
/// assert_eq!(classify(&["Watson eats pasta.".to_string()], &excerpts), Theme::Space);
/// assert_eq!(classify(&["Watson eats pasta.".to_string()], &[]), Theme::Food);
/// assert_eq!(classify(&[], &[]), Theme::Routine);
/// ```
#[must_use]
pub fn classify(facts: &[String], excerpts: &[ExcerptSelection]) -> Theme {
    let facts_text = facts.join(" ").to_lowercase();
    let sites_text = excerpts
        .iter()
        .map(|e| e.site.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    CLASSIFY_RULES
        .iter()
        .find(|rule| {
            let haystack = match rule.target {
                RuleTarget::Sites => &sites_text,
                RuleTarget::Facts => &facts_text,
            };
            rule.keywords.iter().any(|k| haystack.contains(k))
        })
        .map_or(Theme::Routine, |rule| rule.theme)
}
