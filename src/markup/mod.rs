//! Provenance marking.
//!
//! Renders a report body as escaped HTML with every literal occurrence of a
//! chosen fact wrapped in a blue span and every literal occurrence of a
//! chosen excerpt wrapped in a red span.
//!
//! This is plain substring substitution. A template that paraphrases a fact
//! or excerpt instead of quoting it leaves that text unmarked.

use crate::store::{normalize_spaces, ExcerptSelection};

/// CSS class wrapping facts.
pub const BLUE_CLASS: &str = "mark-blue";

/// CSS class wrapping excerpts.
pub const RED_CLASS: &str = "mark-red";

/// Escape text for inclusion in HTML.
///
/// ```
/// use hallucination_reports::markup::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

enum Segment {
    Plain(String),
    Marked(String),
}

/// Wrap every occurrence of `needle` inside plain segments.
///
/// Already-marked segments are never searched, so nothing is wrapped twice.
fn mark_needle(segments: Vec<Segment>, needle: &str, class: &str) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Plain(text) if text.contains(needle) => {
                let mut pieces = text.split(needle).peekable();
                while let Some(piece) = pieces.next() {
                    if !piece.is_empty() {
                        out.push(Segment::Plain(piece.to_string()));
                    }
                    if pieces.peek().is_some() {
                        out.push(Segment::Marked(format!(
                            "<span class=\"{class}\">{needle}</span>"
                        )));
                    }
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn longest_first<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut sorted: Vec<&str> = items.collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
}

/// Escape `body` and mark fact and excerpt occurrences.
///
/// Facts are marked before excerpts, each group longest first so a short
/// string never claims part of a longer one.
///
/// ```
/// use hallucination_reports::markup::mark_provenance;
/// use hallucination_reports::store::ExcerptSelection;
///
/// let html = mark_provenance(
///     "Watson eats <pasta>. [BBC] “Stir gently.”",
///     &["Watson eats <pasta>.".to_string()],
///     &[ExcerptSelection::new("BBC", "", "Stir gently.")],
/// );
/// assert_eq!(
///     html,
///     "<span class=\"mark-blue\">Watson eats &lt;pasta&gt;.</span> [BBC] “<span class=\"mark-red\">Stir gently.</span>”"
/// );
/// ```
#[must_use]
pub fn mark_provenance(body: &str, facts: &[String], excerpts: &[ExcerptSelection]) -> String {
    let mut segments = vec![Segment::Plain(escape_html(body))];

    for fact in longest_first(facts.iter().map(String::as_str)) {
        let safe = escape_html(fact);
        if !safe.is_empty() {
            segments = mark_needle(segments, &safe, BLUE_CLASS);
        }
    }
    for excerpt in longest_first(excerpts.iter().map(|e| e.excerpt.as_str())) {
        let safe = escape_html(excerpt);
        if !safe.is_empty() {
            segments = mark_needle(segments, &safe, RED_CLASS);
        }
    }

    segments
        .into_iter()
        .map(|s| match s {
            Segment::Plain(text) | Segment::Marked(text) => text,
        })
        .collect()
}

/// Shorten text for list display.
///
/// Normalizes whitespace; if the result is longer than `max` characters it
/// is cut at `max`, the trailing partial word and one `,`/`;`/`:` before it
/// are dropped, and `…` is appended.
///
/// ```
/// use hallucination_reports::markup::short_excerpt;
///
/// assert_eq!(short_excerpt("short  text", 40), "short text");
/// assert_eq!(short_excerpt("alpha beta, gamma delta", 13), "alpha beta…");
/// ```
#[must_use]
pub fn short_excerpt(text: &str, max: usize) -> String {
    let normalized = normalize_spaces(text);
    if normalized.chars().count() <= max {
        return normalized;
    }
    let cut: String = normalized.chars().take(max).collect();
    let without_partial = cut.trim_end_matches(|c: char| !c.is_whitespace());
    let trimmed = without_partial.trim_end();
    let trimmed = trimmed
        .strip_suffix([',', ';', ':'])
        .unwrap_or(trimmed);
    format!("{trimmed}…")
}
