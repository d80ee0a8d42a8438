//! End-to-end tests for the hearsay analysis pipeline.

use std::sync::{Arc, RwLock};

use hearsay_core::{
    AnalysisConfig, AnalysisError, Analyzer, ConfigError, ExtractionConfig, Glossary, RiskLevel,
};

/// Helper: a shared glossary handle, optionally pre-seeded.
fn glossary(entries: &[(&str, &[&str])]) -> Arc<RwLock<Glossary>> {
    let mut g = Glossary::new();
    for (term, phrases) in entries {
        g.add_term(term, phrases.iter().copied()).unwrap();
    }
    Arc::new(RwLock::new(g))
}

/// Helper: an analyzer over an empty glossary with default config.
fn analyzer() -> Analyzer {
    Analyzer::with_defaults(glossary(&[]))
}

/// An article with a sourced, qualified claim; scores zero.
const LOW_RISK: &str =
    "Vitamin D reduces the risk of rickets in children. See https://example.org/vitamin-d.";

/// One absolute-language claim with no evidence: 1.5 + 1.0 = 2.5.
const MEDIUM_RISK: &str = "This tonic always helps and prevents flu.";

/// Clickbait plus two unsourced absolute claims: 2.0 + 3.0 + 2.0 = 7.0.
const HIGH_RISK: &str =
    "This miracle cure always works for everyone. It never fails and cures everything instantly.";

/// Running `analyze` twice on identical text yields equal results and
/// byte-identical JSON.
#[test]
fn test_analyze_is_deterministic() {
    let mut analyzer = Analyzer::with_defaults(glossary(&[(
        "vaccines",
        &["reduces risk of infection"],
    )]));
    let text = "Vaccines prevent all infection! Experts said \"no single shot does that\". \
                More at https://example.org/vaccines.";
    let first = analyzer.analyze(text).unwrap();
    let second = analyzer.analyze(text).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

/// `analyze_many` returns one slot per input, in input order.
#[test]
fn test_analyze_many_preserves_input_order() {
    let texts: Vec<String> = vec![
        HIGH_RISK.to_string(),
        LOW_RISK.to_string(),
        MEDIUM_RISK.to_string(),
    ];
    let results = analyzer().analyze_many(&texts);
    assert_eq!(results.len(), 3);
    for (text, result) in texts.iter().zip(&results) {
        assert_eq!(&result.as_ref().unwrap().article.raw, text);
    }
}

/// Empty input is a well-defined baseline, not an error.
#[test]
fn test_empty_input_baseline() {
    let mut analyzer = analyzer();
    let result = analyzer.analyze("").unwrap();
    assert!(result.claims().is_empty());
    assert!(result.citations().is_empty());
    assert_eq!(result.score.weighted_total, 0.0);
    assert_eq!(result.score.risk_level, RiskLevel::Low);
}

/// An empty phrase set is a configuration error; a registered term with
/// unmatched phrasing is exactly one mismatch.
#[test]
fn test_glossary_contract() {
    let mut g = Glossary::new();
    match g.add_term("vaccines", Vec::<String>::new()).unwrap_err() {
        ConfigError::EmptyPhraseSet { term } => assert_eq!(term, "vaccines"),
        other => panic!("Expected EmptyPhraseSet, got: {other:?}"),
    }

    g.add_term("vaccines", ["reduces risk of infection"]).unwrap();
    let mut analyzer = Analyzer::with_defaults(Arc::new(RwLock::new(g)));
    let result = analyzer.analyze("Vaccines prevent all infection.").unwrap();
    assert_eq!(result.mismatches.len(), 1);
    assert_eq!(result.mismatches[0].term, "vaccines");
    assert_eq!(result.score.mismatch_count, 1);
}

/// A claim with absolute language and no citation inside the lookback
/// window increments both the absolute-language and the missing-evidence
/// counts.
#[test]
fn test_absolute_claim_without_nearby_evidence() {
    let config = AnalysisConfig {
        extraction: ExtractionConfig {
            lookback_chars: 10,
            ..ExtractionConfig::default()
        },
        ..AnalysisConfig::default()
    };
    let mut analyzer = Analyzer::new(glossary(&[]), config).unwrap();
    let result = analyzer
        .analyze(
            "Honey always beats prescription medicine. Unrelated filler text sits here. \
             https://example.org/honey",
        )
        .unwrap();

    assert_eq!(result.claims().len(), 1);
    assert_eq!(result.citations().len(), 1);
    assert_eq!(result.citations()[0].claim, None);
    assert_eq!(result.score.absolute_language_count, 1);
    assert_eq!(result.score.missing_evidence_count, 1);
}

/// Three articles landing in three different bands aggregate to one
/// result per band and the arithmetic mean of the three totals.
#[test]
fn test_trend_aggregation_across_bands() {
    let mut analyzer = analyzer();
    let low = analyzer.analyze(LOW_RISK).unwrap();
    let medium = analyzer.analyze(MEDIUM_RISK).unwrap();
    let high = analyzer.analyze(HIGH_RISK).unwrap();

    assert_eq!(low.score.risk_level, RiskLevel::Low);
    assert_eq!(medium.score.risk_level, RiskLevel::Medium);
    assert_eq!(high.score.risk_level, RiskLevel::High);

    let trend = analyzer.trends();
    assert_eq!(trend.articles, 3);
    assert_eq!(trend.levels.low, 1);
    assert_eq!(trend.levels.medium, 1);
    assert_eq!(trend.levels.high, 1);

    let expected = (low.score.weighted_total
        + medium.score.weighted_total
        + high.score.weighted_total)
        / 3.0;
    assert_eq!(trend.mean_total, expected);
}

/// Trends reflect history growth on every call, never a cached value.
#[test]
fn test_trends_recomputed_from_current_history() {
    let mut analyzer = analyzer();
    assert_eq!(analyzer.trends().articles, 0);

    analyzer.analyze(LOW_RISK).unwrap();
    assert_eq!(analyzer.trends().articles, 1);
    assert_eq!(analyzer.trends().levels.low, 1);

    analyzer.analyze(HIGH_RISK).unwrap();
    let trend = analyzer.trends();
    assert_eq!(trend.articles, 2);
    assert_eq!(trend.levels.high, 1);
}

/// Parallel batches produce value-identical results to sequential ones,
/// for every batch size tested.
#[test]
fn test_parallel_matches_sequential() {
    let entries: &[(&str, &[&str])] = &[
        ("vaccines", &["reduces risk of infection"]),
        ("flu", &["reduces severity"]),
    ];
    let corpus: Vec<String> = [
        LOW_RISK,
        MEDIUM_RISK,
        HIGH_RISK,
        "",
        "Vaccines prevent all infection forever.",
        "The flu shot never reduces severity, says https://example.org/contrarian.",
        "Plain sentence with no assertions at all.",
        "Studies show garlic lowers blood pressure by 10 percent. \"large trial\"",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for n in [0, 1, 2, 5, corpus.len()] {
        let batch: Vec<String> = corpus[..n].to_vec();

        let mut sequential = Analyzer::new(
            glossary(entries),
            AnalysisConfig {
                parallel: false,
                ..AnalysisConfig::default()
            },
        )
        .unwrap();
        let mut parallel = Analyzer::new(glossary(entries), AnalysisConfig::default()).unwrap();

        let seq_results = sequential.analyze_many(&batch);
        let par_results = parallel.analyze_many(&batch);

        assert_eq!(seq_results.len(), par_results.len());
        for (s, p) in seq_results.iter().zip(&par_results) {
            assert_eq!(s.as_ref().unwrap(), p.as_ref().unwrap());
        }
        assert_eq!(sequential.history(), parallel.history());
        assert_eq!(sequential.trends(), parallel.trends());
    }
}

/// One oversized input fails alone; the rest of the batch still lands in
/// history.
#[test]
fn test_batch_isolates_per_item_failures() {
    let config = AnalysisConfig {
        max_input_bytes: 128,
        ..AnalysisConfig::default()
    };
    let mut analyzer = Analyzer::new(glossary(&[]), config).unwrap();
    let texts = vec![
        LOW_RISK.to_string(),
        "padding ".repeat(64),
        MEDIUM_RISK.to_string(),
    ];
    let results = analyzer.analyze_many(&texts);

    assert!(results[0].is_ok());
    match &results[1] {
        Err(AnalysisError::InvalidInput(_)) => {}
        other => panic!("Expected InvalidInput, got: {other:?}"),
    }
    assert!(results[2].is_ok());
    assert_eq!(analyzer.history_len(), 2);
    assert_eq!(analyzer.history()[0].article.raw, LOW_RISK);
    assert_eq!(analyzer.history()[1].article.raw, MEDIUM_RISK);
}

/// A writer that panics while holding the glossary lock poisons it. Every
/// later analysis reports the poisoned lock as an error instead of
/// panicking, in single and batch form alike, and history stays empty.
#[test]
fn test_poisoned_glossary_lock_surfaces_error() {
    let shared = glossary(&[]);
    let writer = {
        let shared = Arc::clone(&shared);
        std::thread::spawn(move || {
            let _guard = shared.write().unwrap();
            panic!("writer dies holding the glossary lock");
        })
    };
    assert!(writer.join().is_err());
    assert!(shared.is_poisoned());

    let texts = vec![LOW_RISK.to_string(), MEDIUM_RISK.to_string()];
    for parallel in [false, true] {
        let config = AnalysisConfig {
            parallel,
            ..AnalysisConfig::default()
        };
        let mut analyzer = Analyzer::new(Arc::clone(&shared), config).unwrap();

        match analyzer.analyze(LOW_RISK) {
            Err(AnalysisError::GlossaryPoisoned) => {}
            other => panic!("Expected GlossaryPoisoned, got: {other:?}"),
        }

        let results = analyzer.analyze_many(&texts);
        assert_eq!(results.len(), texts.len());
        for result in &results {
            match result {
                Err(AnalysisError::GlossaryPoisoned) => {}
                other => panic!("Expected GlossaryPoisoned, got: {other:?}"),
            }
        }
        assert_eq!(analyzer.history_len(), 0);
    }
}

/// A supplied source URL wins over detection; detection falls back to the
/// first URL citation.
#[test]
fn test_domain_tagging() {
    let mut analyzer = analyzer();

    let sourced = analyzer
        .analyze_with_source(LOW_RISK, "https://health.example.com/article/42")
        .unwrap();
    assert_eq!(sourced.article.domain.as_deref(), Some("health.example.com"));

    let detected = analyzer.analyze(LOW_RISK).unwrap();
    assert_eq!(detected.article.domain.as_deref(), Some("example.org"));

    let untagged = analyzer.analyze(MEDIUM_RISK).unwrap();
    assert_eq!(untagged.article.domain, None);
}

/// Unicode punctuation in the raw text does not break claim or citation
/// offsets: everything indexes the canonical text.
#[test]
fn test_unicode_input_end_to_end() {
    let mut analyzer = analyzer();
    let result = analyzer
        .analyze("Garlic\u{a0}cures colds\u{2026} \u{201c}no good evidence\u{201d} \u{2014} experts")
        .unwrap();

    assert_eq!(result.claims().len(), 1);
    let claim = &result.claims()[0];
    assert_eq!(
        &result.article.normalized[claim.start..claim.end],
        claim.text
    );
    assert_eq!(result.citations().len(), 1);
    assert_eq!(result.citations()[0].text, "no good evidence");
}
