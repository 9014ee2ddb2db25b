//! Report and provenance trace types.
//!
//! This module provides:
//! - [`Report`]: one generated hallucination report
//! - [`ProvenanceTrace`]: which facts, excerpts and template produced it
//! - [`LoadFailureNotice`]: the visible error state shown instead of a report
//!
//! All types serialize with serde so a presentation layer can render them
//! directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Template;
use crate::error::LoadError;
use crate::markup::short_excerpt;
use crate::store::{normalize_spaces, ExcerptSelection};
use crate::theme::Theme;

/// Maximum characters of an excerpt shown in the panel list.
pub const PANEL_EXCERPT_CHARS: usize = 240;

/// Identity of the template that produced a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateIdentity {
    /// Template key.
    pub key: String,
    /// Template display name.
    pub name: String,
    /// Themes the template is tagged with.
    pub themes: Vec<Theme>,
}

impl From<&Template> for TemplateIdentity {
    fn from(template: &Template) -> Self {
        Self {
            key: template.key.to_string(),
            name: template.name.to_string(),
            themes: template.themes.to_vec(),
        }
    }
}

/// Final title and body as produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOutput {
    /// Report title.
    pub title: String,
    /// Report body.
    pub body: String,
}

/// Provenance trace for a single report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceTrace {
    /// The three fact slots, filler included.
    #[serde(rename = "picked_blue_facts")]
    pub facts: Vec<String>,
    /// The two excerpt slots, fallback included.
    #[serde(rename = "picked_red_excerpts")]
    pub excerpts: Vec<ExcerptSelection>,
    /// Template used.
    pub template: TemplateIdentity,
    /// Theme inferred from the selections.
    pub theme: Theme,
    /// Escaped body with blue/red spans.
    pub marked_html: String,
    /// Title and body.
    pub output: ReportOutput,
}

impl ProvenanceTrace {
    /// Pretty JSON rendering for display.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; with these field types it does not fail
    /// in practice.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Explanation of how the report was put together.
    #[must_use]
    pub fn lecture(&self) -> String {
        format!(
            "Template: {}\n\nSteps:\n\
             1) Pick blue facts\n\
             2) Pick red excerpts\n\
             3) Apply template words\n\
             4) Output confident report\n\n\
             Note: This is intentionally fictional.",
            self.template.name
        )
    }

    /// Excerpts as `site: shortened text` lines.
    #[must_use]
    pub fn excerpt_lines(&self) -> Vec<String> {
        self.excerpts
            .iter()
            .map(|e| format!("{}: {}", e.site, short_excerpt(&e.excerpt, PANEL_EXCERPT_CHARS)))
            .collect()
    }
}

/// A generated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Unique identifier.
    pub id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Title; always contains the display name.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Display name of the template used.
    pub template_name: String,
    /// Site labels of the excerpts used, in slot order.
    pub sites: Vec<String>,
    /// Provenance trace.
    pub trace: ProvenanceTrace,
}

impl Report {
    /// `"<template name> • <site>, <site>"`.
    #[must_use]
    pub fn meta_line(&self) -> String {
        format!("{} • {}", self.template_name, self.sites.join(", "))
    }
}

/// Visible, non-fatal error state shown when inputs failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadFailureNotice {
    /// Notice title.
    pub title: String,
    /// Normalized error message.
    pub body: String,
}

impl LoadFailureNotice {
    /// Build the notice for `name` from a load error.
    ///
    /// ```
    /// use hallucination_reports::error::LoadError;
    /// use hallucination_reports::report::LoadFailureNotice;
    ///
    /// let err = LoadError::Unreachable { path: "facts.json".into(), message: "not\nfound".into() };
    /// let notice = LoadFailureNotice::new("Watson", &err);
    /// assert_eq!(notice.title, "Watson encountered an error");
    /// assert_eq!(notice.body, "Failed to load facts.json: not found");
    /// ```
    #[must_use]
    pub fn new(name: &str, err: &LoadError) -> Self {
        Self {
            title: format!("{name} encountered an error"),
            body: normalize_spaces(&err.to_string()),
        }
    }
}
