//! Report compiler.
//!
//! This module provides:
//! - [`ReportCompiler`]: orchestrates selection, classification, templating
//!   and provenance marking to produce one [`Report`]
//! - [`GenerationState`]: recent-template memory and the current report,
//!   threaded explicitly through every generation
//! - [`CompilerSettings`]: display name and retry budgets
//!
//! # Example
//!
//! ```
//! use hallucination_reports::compiler::{CompilerSettings, GenerationState, ReportCompiler};
//! use hallucination_reports::store::{InputStore, Source};
//! use hallucination_reports::traits::RngSource;
//!
//! let store = InputStore::from_raw(
//!     vec!["Watson plays tennis.".to_string()],
//!     vec![Source::new("NASA", "", vec!["Engines fired.".to_string()])],
//! );
//! let compiler = ReportCompiler::new(CompilerSettings::default());
//! let mut state = GenerationState::new();
//! let mut rng = RngSource::seeded(42);
//!
//! let report = compiler.generate(&store, &mut state, &mut rng);
//! assert!(report.title.contains("Watson"));
//! assert_eq!(report.trace.facts.len(), 3);
//! assert_eq!(report.trace.excerpts.len(), 2);
//! ```

use uuid::Uuid;

use crate::catalog::{TemplateCatalog, TemplateInput};
use crate::config::{
    Config, DEFAULT_DISPLAY_NAME, DEFAULT_EXCERPT_RETRY_BUDGET, DEFAULT_TEMPLATE_RETRY_BUDGET,
};
use crate::markup::mark_provenance;
use crate::report::{ProvenanceTrace, Report, ReportOutput};
use crate::selector::{
    choose_excerpts, choose_facts, choose_template, pad_facts, RecentTemplates, EXCERPT_SLOTS,
    FACT_SLOTS,
};
use crate::store::InputStore;
use crate::theme::classify;
use crate::traits::{RandomSource, RealTimeProvider, TimeProvider};

/// Compiler settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerSettings {
    /// Name of the report subject.
    pub display_name: String,
    /// Attempts allowed when drawing excerpts.
    pub excerpt_retry_budget: u32,
    /// Redraws allowed when a template collides with a recent one.
    pub template_retry_budget: u32,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            excerpt_retry_budget: DEFAULT_EXCERPT_RETRY_BUDGET,
            template_retry_budget: DEFAULT_TEMPLATE_RETRY_BUDGET,
        }
    }
}

impl From<&Config> for CompilerSettings {
    fn from(config: &Config) -> Self {
        Self {
            display_name: config.display_name.clone(),
            excerpt_retry_budget: config.excerpt_retry_budget,
            template_retry_budget: config.template_retry_budget,
        }
    }
}

impl CompilerSettings {
    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }
}

/// Mutable state carried from one generation to the next.
#[derive(Debug, Clone, Default)]
pub struct GenerationState {
    recent: RecentTemplates,
    current: Option<Report>,
    generations: u64,
}

impl GenerationState {
    /// Fresh state: no recent templates, no current report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently generated report.
    #[must_use]
    pub const fn current(&self) -> Option<&Report> {
        self.current.as_ref()
    }

    /// Template keys used in the current cycle.
    #[must_use]
    pub const fn recent(&self) -> &RecentTemplates {
        &self.recent
    }

    /// Number of reports generated with this state.
    #[must_use]
    pub const fn generations(&self) -> u64 {
        self.generations
    }
}

/// Produces reports from an [`InputStore`].
///
/// Generation never fails: every shortfall in the inputs is covered by
/// filler facts, fallback excerpts or the catalog's fallback template.
#[derive(Debug, Clone)]
pub struct ReportCompiler<T = RealTimeProvider>
where
    T: TimeProvider,
{
    catalog: TemplateCatalog,
    settings: CompilerSettings,
    clock: T,
}

impl ReportCompiler<RealTimeProvider> {
    /// Compiler over the built-in catalog using the system clock.
    #[must_use]
    pub fn new(settings: CompilerSettings) -> Self {
        Self::with_clock(TemplateCatalog::builtin(), settings, RealTimeProvider)
    }

    /// Compiler configured from [`Config`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(CompilerSettings::from(config))
    }
}

impl<T> ReportCompiler<T>
where
    T: TimeProvider,
{
    /// Compiler with an explicit catalog and clock.
    #[must_use]
    pub const fn with_clock(catalog: TemplateCatalog, settings: CompilerSettings, clock: T) -> Self {
        Self {
            catalog,
            settings,
            clock,
        }
    }

    /// The template catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// The settings in use.
    #[must_use]
    pub const fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    /// Generate one report, store it as `state`'s current report and
    /// return it.
    pub fn generate<'s, R>(
        &self,
        store: &InputStore,
        state: &'s mut GenerationState,
        rng: &mut R,
    ) -> &'s Report
    where
        R: RandomSource + ?Sized,
    {
        let report = self.compose(store, &mut state.recent, rng);
        state.generations += 1;

        tracing::info!(
            generation = state.generations,
            template = %report.trace.template.key,
            theme = %report.trace.theme,
            sites = %report.sites.join(", "),
            "Report generated"
        );

        state.current.insert(report)
    }

    fn compose<R>(&self, store: &InputStore, recent: &mut RecentTemplates, rng: &mut R) -> Report
    where
        R: RandomSource + ?Sized,
    {
        let name = self.settings.display_name.as_str();

        // Pick inputs
        let facts = pad_facts(choose_facts(store.facts(), FACT_SLOTS, rng), name);
        let excerpts = choose_excerpts(
            store.sources(),
            EXCERPT_SLOTS,
            rng,
            self.settings.excerpt_retry_budget,
        );

        // Pick template
        let theme = classify(&facts, &excerpts);
        let candidates = self.catalog.candidates_for(theme);
        let template = choose_template(&candidates, recent, rng, self.settings.template_retry_budget)
            .unwrap_or_else(|| self.catalog.fallback());

        // Render
        let input = TemplateInput::new(name, &facts, &excerpts);
        let title = template.render_title(&input);
        let body = template.body(&input);
        let marked_html = mark_provenance(&body, &facts, &excerpts);
        let sites = excerpts.iter().map(|e| e.site.clone()).collect();

        Report {
            id: Uuid::new_v4(),
            generated_at: self.clock.now(),
            title: title.clone(),
            body: body.clone(),
            template_name: template.name.to_string(),
            sites,
            trace: ProvenanceTrace {
                facts,
                excerpts,
                template: template.into(),
                theme,
                marked_html,
                output: ReportOutput { title, body },
            },
        }
    }
}
