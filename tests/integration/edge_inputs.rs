//! Degenerate inputs never stop generation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use hallucination_reports::compiler::{CompilerSettings, GenerationState, ReportCompiler};
use hallucination_reports::selector::{FALLBACK_EXCERPTS, FALLBACK_SITE};
use hallucination_reports::store::{FactsDocument, InputStore, Source, SourcesDocument};
use hallucination_reports::traits::RngSource;

fn generate_once(store: &InputStore, settings: CompilerSettings) -> (Vec<String>, Vec<String>) {
    let compiler = ReportCompiler::new(settings);
    let mut state = GenerationState::new();
    let mut rng = RngSource::seeded(64);
    let report = compiler.generate(store, &mut state, &mut rng);
    (
        report.trace.facts.clone(),
        report
            .trace
            .excerpts
            .iter()
            .map(|e| format!("{}|{}", e.site, e.excerpt))
            .collect(),
    )
}

#[test]
fn test_blank_entries_are_ignored() {
    let facts = FactsDocument::parse("facts.json", r#"{"facts": ["  ", "\n\t"]}"#).unwrap();
    let sources = SourcesDocument::parse(
        "sources.json",
        r#"{"sources": [{"site": "NASA", "excerpts": ["   "]}]}"#,
    )
    .unwrap();
    let store = InputStore::from_raw(
        facts.facts,
        sources.sources.into_iter().map(Source::from).collect(),
    );

    let (facts, excerpts) = generate_once(&store, CompilerSettings::default());
    assert_eq!(
        facts,
        [
            "Watson has a strange habit.",
            "Watson insists this is normal.",
            "Watson blames the algorithm."
        ]
    );
    assert_eq!(
        excerpts,
        [
            format!("{FALLBACK_SITE}|{}", FALLBACK_EXCERPTS[0]),
            format!("{FALLBACK_SITE}|{}", FALLBACK_EXCERPTS[1]),
        ]
    );
}

#[test]
fn test_two_facts_one_excerpt() {
    let store = InputStore::from_raw(
        vec!["X".to_string(), "Y".to_string()],
        vec![Source::new("S", "", vec!["E".to_string()])],
    );
    let (facts, excerpts) = generate_once(&store, CompilerSettings::default());
    assert_eq!(facts.len(), 3);
    assert_eq!(facts.iter().filter(|f| *f == "X" || *f == "Y").count(), 2);
    assert_eq!(
        excerpts,
        ["S|E".to_string(), format!("{FALLBACK_SITE}|{}", FALLBACK_EXCERPTS[1])]
    );
}

#[test]
fn test_zero_template_redraws() {
    let settings = CompilerSettings {
        template_retry_budget: 0,
        ..CompilerSettings::default()
    };
    let store = InputStore::from_raw(vec!["Watson naps.".to_string()], Vec::new());
    let compiler = ReportCompiler::new(settings);
    let mut state = GenerationState::new();
    let mut rng = RngSource::seeded(1);
    for _ in 0..10 {
        let report = compiler.generate(&store, &mut state, &mut rng);
        assert!(report.title.contains("Watson"));
    }
}

#[test]
fn test_single_excerpt_attempt_still_fills_slots() {
    let settings = CompilerSettings {
        excerpt_retry_budget: 1,
        ..CompilerSettings::default()
    };
    let store = InputStore::from_raw(
        Vec::new(),
        vec![
            Source::new("A", "", vec!["a".to_string()]),
            Source::new("B", "", vec!["b".to_string()]),
        ],
    );
    let (_, excerpts) = generate_once(&store, settings);
    assert_eq!(excerpts.len(), 2);
    assert!(excerpts[1].starts_with(FALLBACK_SITE));
}
