//! Title and body text for each template kind.
//!
//! Every function here is pure. Missing fact or excerpt slots are filled
//! with generic filler so a template never fails on a short input.

use std::borrow::Cow;

use super::TemplateKind;
use crate::store::ExcerptSelection;

/// Site label used when an excerpt has no site.
pub(crate) const GENERIC_SITE: &str = "Web";

const FILLER_FACT_SUFFIXES: [&str; 3] = [
    "has a strange habit.",
    "insists this is normal.",
    "blames the algorithm.",
];

const FILLER_EXCERPT: &str = "Sources close to the matter declined to elaborate.";

/// Filler fact for slot `slot` (0-based).
pub(crate) fn filler_fact(name: &str, slot: usize) -> String {
    let suffix = FILLER_FACT_SUFFIXES[slot % FILLER_FACT_SUFFIXES.len()];
    format!("{name} {suffix}")
}

/// Arguments every template transform receives.
#[derive(Debug, Clone, Copy)]
pub struct TemplateInput<'a> {
    /// Display name.
    pub name: &'a str,
    /// Selected facts, in order.
    pub facts: &'a [String],
    /// Selected excerpts, in order.
    pub excerpts: &'a [ExcerptSelection],
}

impl<'a> TemplateInput<'a> {
    /// Create a new input.
    #[must_use]
    pub const fn new(
        name: &'a str,
        facts: &'a [String],
        excerpts: &'a [ExcerptSelection],
    ) -> Self {
        Self {
            name,
            facts,
            excerpts,
        }
    }

    /// Fact in `slot`, or filler if there is none.
    #[must_use]
    pub fn fact(&self, slot: usize) -> Cow<'a, str> {
        self.facts
            .get(slot)
            .map_or_else(
                || Cow::Owned(filler_fact(self.name, slot)),
                |f| Cow::Borrowed(f.as_str()),
            )
    }

    /// Excerpt in `slot`, or a generic one if there is none.
    #[must_use]
    pub fn excerpt(&self, slot: usize) -> Cow<'a, ExcerptSelection> {
        self.excerpts.get(slot).map_or_else(
            || Cow::Owned(ExcerptSelection::new(GENERIC_SITE, "", FILLER_EXCERPT)),
            Cow::Borrowed,
        )
    }

    /// The first three fact slots joined into one paragraph opener.
    fn opening(&self) -> String {
        join_facts(&[self.fact(0), self.fact(1), self.fact(2)], self.name)
    }

    fn quote(&self, slot: usize) -> String {
        source_line(&self.excerpt(slot))
    }
}

/// Join facts with single spaces, skipping blank ones.
///
/// ```
/// use hallucination_reports::catalog::join_facts;
///
/// assert_eq!(join_facts(&["A.", " ", "B."], "Watson"), "A. B.");
/// assert_eq!(join_facts::<&str>(&[], "Watson"), "Watson exists.");
/// ```
#[must_use]
pub fn join_facts<S: AsRef<str>>(facts: &[S], name: &str) -> String {
    let clean: Vec<&str> = facts
        .iter()
        .map(|f| f.as_ref().trim())
        .filter(|f| !f.is_empty())
        .collect();
    if clean.is_empty() {
        format!("{name} exists.")
    } else {
        clean.join(" ")
    }
}

/// Quote an excerpt with its site: `[site] “excerpt”`.
///
/// ```
/// use hallucination_reports::catalog::source_line;
/// use hallucination_reports::store::ExcerptSelection;
///
/// let e = ExcerptSelection::new("NASA", "", " Liftoff. ");
/// assert_eq!(source_line(&e), "[NASA] “Liftoff.”");
/// ```
#[must_use]
pub fn source_line(selection: &ExcerptSelection) -> String {
    let site = if selection.site.trim().is_empty() {
        GENERIC_SITE
    } else {
        selection.site.as_str()
    };
    format!("[{site}] “{}”", selection.excerpt.trim())
}

pub(super) fn title(kind: TemplateKind, input: &TemplateInput<'_>) -> String {
    let name = input.name;
    match kind {
        TemplateKind::SpaceBread => format!("{name} Declares Bread a Launch Protocol"),
        TemplateKind::FoodDate => format!("{name} Accidentally Invents Pasta-Based Diplomacy"),
        TemplateKind::KoalaDesign => format!("{name} Issues New Koala Quality Standards"),
        TemplateKind::ArchRomance => {
            format!("{name} Designs a Romantic Opera House for Two (and a Butterfly)")
        }
        TemplateKind::HealthNorway => format!("{name} Blames Norway for the Caffeine Crisis"),
        TemplateKind::RocksIkea => {
            format!("{name} Discovers Sacred Rocks While Shopping for Glassware")
        }
        TemplateKind::SportSpace => format!("{name} Serves Liquid Hydrogen at Match Point"),
        TemplateKind::AgeDinner => {
            format!("{name} (Age 87) Announces a Two-Person Dinner for One Cat")
        }
        TemplateKind::MuseumSticks => {
            format!("{name} Opens a Museum Where Sticks Teach Space Engineering")
        }
    }
}

pub(super) fn body(kind: TemplateKind, input: &TemplateInput<'_>) -> String {
    let name = input.name;
    let opening = input.opening();
    match kind {
        TemplateKind::SpaceBread => format!(
            "{opening} {name} then misread a web line as mission control: {}. \
             Conclusion: Sunday bread became a “launch window”, the cat became an engineer, \
             and the pink rocket was promoted to quality assurance.",
            input.quote(0)
        ),
        TemplateKind::FoodDate => format!(
            "{opening} {name} then stitched together two unrelated web fragments like a legal \
             document: {} and {}. The resulting policy almost makes sense in the kitchen: \
             pasta first, politics never, and every meeting ends with dinner.",
            input.quote(0),
            input.quote(1)
        ),
        TemplateKind::KoalaDesign => format!(
            "{opening} {name} presented the following line as “evidence”: {}. \
             New standard: koalas approve the palette, butterflies audit the details, \
             and rocks-and-sticks count as valid measuring tools.",
            input.quote(0)
        ),
        TemplateKind::ArchRomance => format!(
            "{opening} During a late-night scroll, {name} read: {}. \
             The brief written immediately afterwards sounds coherent: a place to gather, \
             a place to be alone, and a place where a butterfly can complain about acoustics.",
            input.quote(0)
        ),
        TemplateKind::HealthNorway => format!(
            "{opening} {name} then quoted a health article like a final verdict: {}. \
             So the plan is readable: cap the caffeine, eat the lasagna, \
             and blame Norway only as a joke (the algorithm insisted).",
            input.quote(0)
        ),
        TemplateKind::RocksIkea => format!(
            "{opening} {name} clicked two unrelated web lines: {} and {}. \
             The brain did what brains do: it invented a story. The sticks turned into \
             catalog items, and the rocks asked to be archived like artifacts.",
            input.quote(0),
            input.quote(1)
        ),
        TemplateKind::SportSpace => format!(
            "{opening} {name} then read the launch notes like a match referee: {}. \
             So the report sounds logical: review the data, confirm the launch window, \
             then go back to tennis and celebrate with pasta.",
            input.quote(0)
        ),
        TemplateKind::AgeDinner => format!(
            "{opening} {name} used a recipe page like a diary entry: {}. \
             Dinner was served to a cat, a butterfly, and a pink rocket. Not because it is true, \
             but because the algorithm cannot resist a strong ending.",
            input.quote(0)
        ),
        TemplateKind::MuseumSticks => format!(
            "{opening} To prove the idea, {name} cited a web excerpt with full confidence: {}. \
             Visitors must bring one rock, one stick, and a calm attitude. \
             Everything else is “inferred”.",
            input.quote(0)
        ),
    }
}
