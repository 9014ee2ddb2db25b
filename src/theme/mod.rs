//! Themes and theme classification.
//!
//! A [`Theme`] is a coarse topic tag used to narrow which templates are
//! eligible for a report. [`classify`] infers it from the chosen excerpts'
//! site labels and, failing that, from the chosen facts' text.
//!
//! # Example
//!
//! ```
//! use hallucination_reports::theme::Theme;
//!
//! let theme: Theme = "Space".parse().unwrap();
//! assert_eq!(theme, Theme::Space);
//! assert_eq!(theme.to_string(), "space");
//! ```

mod classify;

pub use classify::{classify, ClassifyRule, RuleTarget, CLASSIFY_RULES};

/// Topic tag for template eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Spaceflight.
    Space,
    /// Food and cooking.
    Food,
    /// Architecture.
    Architecture,
    /// Furniture and design.
    Design,
    /// Health.
    Health,
    /// Sport.
    Sport,
    /// Nature. Only reachable as a template tag.
    Nature,
    /// Default when nothing else matches.
    Routine,
}

impl Theme {
    /// Returns the theme name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Food => "food",
            Self::Architecture => "architecture",
            Self::Design => "design",
            Self::Health => "health",
            Self::Sport => "sport",
            Self::Nature => "nature",
            Self::Routine => "routine",
        }
    }

    /// Returns all themes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Space,
            Self::Food,
            Self::Architecture,
            Self::Design,
            Self::Health,
            Self::Sport,
            Self::Nature,
            Self::Routine,
        ]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseThemeError {
                input: s.to_string(),
            })
    }
}

/// Error when parsing a theme from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    /// The input that failed to parse.
    pub input: String,
}

impl std::fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme: {}", self.input)
    }
}

impl std::error::Error for ParseThemeError {}
