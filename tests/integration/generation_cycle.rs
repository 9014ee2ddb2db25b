//! Template cycling across consecutive generations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;

use hallucination_reports::catalog::{Template, TemplateCatalog, TemplateKind};
use hallucination_reports::compiler::{CompilerSettings, GenerationState, ReportCompiler};
use hallucination_reports::store::{InputStore, Source};
use hallucination_reports::theme::Theme;
use hallucination_reports::traits::{RealTimeProvider, RngSource};

fn routine_store() -> InputStore {
    InputStore::from_raw(vec!["Watson naps after lunch.".to_string()], Vec::new())
}

#[test]
fn test_routine_templates_alternate_within_each_cycle() {
    let compiler = ReportCompiler::new(CompilerSettings::default());
    let mut state = GenerationState::new();
    let mut rng = RngSource::seeded(31);
    let store = routine_store();

    let keys: Vec<String> = (0..20)
        .map(|_| {
            compiler
                .generate(&store, &mut state, &mut rng)
                .trace
                .template
                .key
                .clone()
        })
        .collect();

    for pair in keys.chunks(2) {
        assert_ne!(pair[0], pair[1], "repeat inside one cycle: {keys:?}");
    }
    let distinct: HashSet<&String> = keys.iter().collect();
    assert_eq!(distinct.len(), 2);
}

#[test]
fn test_state_tracks_current_report() {
    let compiler = ReportCompiler::new(CompilerSettings::default());
    let mut state = GenerationState::new();
    let mut rng = RngSource::seeded(8);
    let store = routine_store();

    assert!(state.current().is_none());
    let id = compiler.generate(&store, &mut state, &mut rng).id;
    assert_eq!(state.current().map(|r| r.id), Some(id));
    assert_eq!(state.generations(), 1);
    assert_eq!(state.recent().len(), 1);
}

#[test]
fn test_theme_without_templates_uses_whole_catalog() {
    let catalog = TemplateCatalog::from_templates(vec![
        Template::new("one", "One", &[Theme::Food], TemplateKind::AgeDinner),
        Template::new("two", "Two", &[Theme::Sport], TemplateKind::SportSpace),
    ])
    .expect("non-empty catalog");
    let compiler =
        ReportCompiler::with_clock(catalog, CompilerSettings::default(), RealTimeProvider);
    let store = InputStore::from_raw(
        Vec::new(),
        vec![Source::new("Health Weekly", "", vec!["Sleep more.".to_string()])],
    );
    let mut state = GenerationState::new();
    let mut rng = RngSource::seeded(2);

    let mut seen = HashSet::new();
    for _ in 0..10 {
        let report = compiler.generate(&store, &mut state, &mut rng);
        assert_eq!(report.trace.theme, Theme::Health);
        seen.insert(report.trace.template.key.clone());
    }
    assert_eq!(seen.len(), 2);
}
