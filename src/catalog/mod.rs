//! Template catalog.
//!
//! This module provides:
//! - [`Template`]: a narrative template record (key, name, theme tags, kind)
//! - [`TemplateKind`]: the variant tag dispatching to title/body text
//! - [`TemplateCatalog`]: the fixed set of built-in templates
//! - [`ensure_name_in_title`]: the name-inclusion rule for titles
//!
//! # Built-in Templates
//!
//! | Key | Name | Themes |
//! |-----|------|--------|
//! | space-bread | Bread / Space Program | space, routine |
//! | food-date | Pasta Governance | food, routine |
//! | koala-design | Koala Standards | design, nature |
//! | arch-romance | Architectural Romance | architecture |
//! | health-norway | Anti-Norway Refrigeration | health |
//! | rocks-ikea | Rocks & Rituals | design, nature |
//! | sport-space | Tennis / Hydrogen | sport, space |
//! | age-dinner | Centenarian Lifestyle | food |
//! | museum-sticks | Museum of Sticks | architecture, nature |

mod text;

pub use text::{join_facts, source_line, TemplateInput};
pub(crate) use text::filler_fact;

use serde::Serialize;

use crate::theme::Theme;

/// Variant tag selecting a template's title and body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Sunday bread becomes a launch protocol.
    SpaceBread,
    /// Pasta-based diplomacy.
    FoodDate,
    /// Koala quality standards.
    KoalaDesign,
    /// An opera house for two.
    ArchRomance,
    /// Norway blamed for caffeine.
    HealthNorway,
    /// Sacred rocks among the glassware.
    RocksIkea,
    /// Liquid hydrogen at match point.
    SportSpace,
    /// Dinner for one cat.
    AgeDinner,
    /// Sticks teaching space engineering.
    MuseumSticks,
}

/// A narrative template.
///
/// Templates are plain data; the text they produce lives in pure functions
/// selected by [`TemplateKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Stable identifier used for repeat avoidance.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Themes under which the template is eligible.
    pub themes: &'static [Theme],
    /// Text variant.
    pub kind: TemplateKind,
}

impl Template {
    /// Create a new template record.
    #[must_use]
    pub const fn new(
        key: &'static str,
        name: &'static str,
        themes: &'static [Theme],
        kind: TemplateKind,
    ) -> Self {
        Self {
            key,
            name,
            themes,
            kind,
        }
    }

    /// Whether the template is eligible under `theme`.
    #[must_use]
    pub fn has_theme(&self, theme: Theme) -> bool {
        self.themes.contains(&theme)
    }

    /// Raw title text. May not contain the display name; see
    /// [`Template::render_title`].
    #[must_use]
    pub fn title(&self, input: &TemplateInput<'_>) -> String {
        text::title(self.kind, input)
    }

    /// Title with the display name guaranteed to appear.
    #[must_use]
    pub fn render_title(&self, input: &TemplateInput<'_>) -> String {
        ensure_name_in_title(&self.title(input), input.name)
    }

    /// Body text.
    #[must_use]
    pub fn body(&self, input: &TemplateInput<'_>) -> String {
        text::body(self.kind, input)
    }
}

const BUILTIN_TEMPLATES: &[Template] = &[
    Template::new(
        "space-bread",
        "Bread / Space Program",
        &[Theme::Space, Theme::Routine],
        TemplateKind::SpaceBread,
    ),
    Template::new(
        "food-date",
        "Pasta Governance",
        &[Theme::Food, Theme::Routine],
        TemplateKind::FoodDate,
    ),
    Template::new(
        "koala-design",
        "Koala Standards",
        &[Theme::Design, Theme::Nature],
        TemplateKind::KoalaDesign,
    ),
    Template::new(
        "arch-romance",
        "Architectural Romance",
        &[Theme::Architecture],
        TemplateKind::ArchRomance,
    ),
    Template::new(
        "health-norway",
        "Anti-Norway Refrigeration",
        &[Theme::Health],
        TemplateKind::HealthNorway,
    ),
    Template::new(
        "rocks-ikea",
        "Rocks & Rituals",
        &[Theme::Design, Theme::Nature],
        TemplateKind::RocksIkea,
    ),
    Template::new(
        "sport-space",
        "Tennis / Hydrogen",
        &[Theme::Sport, Theme::Space],
        TemplateKind::SportSpace,
    ),
    Template::new(
        "age-dinner",
        "Centenarian Lifestyle",
        &[Theme::Food],
        TemplateKind::AgeDinner,
    ),
    Template::new(
        "museum-sticks",
        "Museum of Sticks",
        &[Theme::Architecture, Theme::Nature],
        TemplateKind::MuseumSticks,
    ),
];

/// The fixed set of templates available to the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateCatalog {
    /// Catalog with the nine built-in templates.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            templates: BUILTIN_TEMPLATES.to_vec(),
        }
    }

    /// Catalog from an explicit template list.
    ///
    /// Returns `None` for an empty list; a catalog always has a template to
    /// fall back on.
    #[must_use]
    pub fn from_templates(templates: Vec<Template>) -> Option<Self> {
        if templates.is_empty() {
            None
        } else {
            Some(Self { templates })
        }
    }

    /// Templates eligible under `theme`, or the whole catalog if none are.
    #[must_use]
    pub fn candidates_for(&self, theme: Theme) -> Vec<&Template> {
        let tagged: Vec<&Template> = self
            .templates
            .iter()
            .filter(|t| t.has_theme(theme))
            .collect();
        if tagged.is_empty() {
            tracing::debug!(%theme, "No template tagged with theme, using full catalog");
            self.templates.iter().collect()
        } else {
            tagged
        }
    }

    /// Get a template by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.key == key)
    }

    /// First template in catalog order, used when no candidate is drawn.
    #[must_use]
    pub fn fallback(&self) -> &Template {
        self.templates.first().unwrap_or(&BUILTIN_TEMPLATES[0])
    }

    /// All templates, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false for catalogs built through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Prepend `"<name>: "` unless `title` already contains `name`
/// (case-insensitive).
///
/// ```
/// use hallucination_reports::catalog::ensure_name_in_title;
///
/// assert_eq!(ensure_name_in_title("WATSON wins", "Watson"), "WATSON wins");
/// assert_eq!(ensure_name_in_title("Bread wins", "Watson"), "Watson: Bread wins");
/// ```
#[must_use]
pub fn ensure_name_in_title(title: &str, name: &str) -> String {
    if title.to_lowercase().contains(&name.to_lowercase()) {
        title.to_string()
    } else {
        format!("{name}: {title}")
    }
}
