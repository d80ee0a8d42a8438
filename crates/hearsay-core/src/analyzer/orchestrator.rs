//! The Analyzer: normalize → extract → compare → score, plus history.

use std::sync::{Arc, RwLock};

use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::{debug, info};
use xxhash_rust::xxh3::xxh3_64;

use crate::citations::{domain_of, CitationExtractor, CitationKind};
use crate::claims::ClaimExtractor;
use crate::config::AnalysisConfig;
use crate::errors::{AnalysisError, ConfigError};
use crate::glossary::Glossary;
use crate::normalize::TextNormalizer;
use crate::scoring::{RiskLevel, RiskScorer};

use super::types::{AnalysisResult, Article, LevelBreakdown, Trend};

/// Orchestrates the full analysis pipeline over one or many articles.
///
/// Holds one shared glossary (injected, read-only during analysis) and an
/// append-only history of every successful result, which `trends` is
/// recomputed from on each call. A new Analyzer starts with empty history;
/// there is no removal operation.
pub struct Analyzer {
    glossary: Arc<RwLock<Glossary>>,
    normalizer: TextNormalizer,
    claim_extractor: ClaimExtractor,
    citation_extractor: CitationExtractor,
    scorer: RiskScorer,
    parallel: bool,
    max_input_bytes: usize,
    history: Vec<AnalysisResult>,
}

impl Analyzer {
    /// Build the pipeline stages once from a validated config.
    pub fn new(
        glossary: Arc<RwLock<Glossary>>,
        config: AnalysisConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            normalizer: TextNormalizer::new(),
            claim_extractor: ClaimExtractor::new(&config.extraction)?,
            citation_extractor: CitationExtractor::new(&config.extraction),
            scorer: RiskScorer::new(&config)?,
            parallel: config.parallel,
            max_input_bytes: config.max_input_bytes,
            glossary,
            history: Vec::new(),
        })
    }

    /// Convenience constructor with default configuration.
    pub fn with_defaults(glossary: Arc<RwLock<Glossary>>) -> Self {
        Self::new(glossary, AnalysisConfig::default())
            .expect("Default analysis config must validate")
    }

    /// Analyze one article text. On success the result is appended to
    /// history; a failed analyze appends nothing.
    pub fn analyze(&mut self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let result = {
            let guard = self
                .glossary
                .read()
                .map_err(|_| AnalysisError::GlossaryPoisoned)?;
            self.run_pipeline(text, None, &guard)?
        };
        self.history.push(result.clone());
        Ok(result)
    }

    /// Analyze one article text whose source URL is known. The article's
    /// domain tag comes from the supplied URL; a URL with no recognizable
    /// host is rejected as invalid input.
    pub fn analyze_with_source(
        &mut self,
        text: &str,
        source_url: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let domain = domain_of(source_url).ok_or_else(|| {
            AnalysisError::InvalidInput(format!("no host in source URL `{source_url}`"))
        })?;
        let result = {
            let guard = self
                .glossary
                .read()
                .map_err(|_| AnalysisError::GlossaryPoisoned)?;
            self.run_pipeline(text, Some(domain), &guard)?
        };
        self.history.push(result.clone());
        Ok(result)
    }

    /// Analyze a batch. Per-item isolation: one bad input yields an `Err`
    /// in its slot and the rest of the batch continues. Output order
    /// always equals input order; successful results are appended to
    /// history in input order after the batch completes.
    pub fn analyze_many(
        &mut self,
        texts: &[String],
    ) -> Vec<Result<AnalysisResult, AnalysisError>> {
        let results = {
            let guard = match self.glossary.read() {
                Ok(guard) => guard,
                Err(_) => {
                    return texts
                        .iter()
                        .map(|_| Err(AnalysisError::GlossaryPoisoned))
                        .collect()
                }
            };
            let glossary: &Glossary = &guard;

            // Indexed collect keeps slot i of the output tied to input i
            // no matter which worker finishes first.
            if self.parallel {
                texts
                    .par_iter()
                    .map(|text| self.run_pipeline(text, None, glossary))
                    .collect::<Vec<_>>()
            } else {
                texts
                    .iter()
                    .map(|text| self.run_pipeline(text, None, glossary))
                    .collect()
            }
        };

        for result in results.iter().flatten() {
            self.history.push(result.clone());
        }
        info!(
            batch = texts.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            parallel = self.parallel,
            "batch analysis complete"
        );
        results
    }

    /// Aggregate statistics over everything analyzed so far. Recomputed
    /// from current history on every call; empty history reports a mean
    /// of 0.0.
    pub fn trends(&self) -> Trend {
        let mut levels = LevelBreakdown::default();
        let mut sum = 0.0;
        for result in &self.history {
            sum += result.score.weighted_total;
            match result.score.risk_level {
                RiskLevel::Low => levels.low += 1,
                RiskLevel::Medium => levels.medium += 1,
                RiskLevel::High => levels.high += 1,
            }
        }
        let articles = self.history.len();
        Trend {
            articles,
            mean_total: if articles == 0 { 0.0 } else { sum / articles as f64 },
            levels,
        }
    }

    /// Every successful result, in analysis order.
    pub fn history(&self) -> &[AnalysisResult] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// One article through every stage. Pure given the glossary guard;
    /// does not touch history.
    fn run_pipeline(
        &self,
        text: &str,
        source_domain: Option<String>,
        glossary: &Glossary,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.validate_input(text)?;

        let normalized = self.normalizer.normalize(text);
        let claims = self.claim_extractor.extract(&normalized);
        let citations = self.citation_extractor.extract(&normalized, &claims);
        let mismatches = glossary.compare(&claims);
        let score = self.scorer.score(&claims, &citations, &mismatches);

        debug!(
            claims = claims.len(),
            citations = citations.len(),
            mismatches = mismatches.len(),
            total = score.weighted_total,
            level = ?score.risk_level,
            "article analyzed"
        );

        let domain = source_domain.or_else(|| {
            citations
                .iter()
                .find(|c| c.kind == CitationKind::Url)
                .and_then(|c| domain_of(&c.text))
        });

        let mut evidence: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); claims.len()];
        for (citation_index, citation) in citations.iter().enumerate() {
            if let Some(claim_index) = citation.claim {
                evidence[claim_index].push(citation_index);
            }
        }

        Ok(AnalysisResult {
            article: Article {
                id: format!("{:016x}", xxh3_64(text.as_bytes())),
                raw: text.to_string(),
                normalized,
                domain,
                claims,
                citations,
            },
            score,
            mismatches,
            evidence,
        })
    }

    fn validate_input(&self, text: &str) -> Result<(), AnalysisError> {
        if text.len() > self.max_input_bytes {
            return Err(AnalysisError::InvalidInput(format!(
                "input is {} bytes, limit is {}",
                text.len(),
                self.max_input_bytes
            )));
        }
        if text.contains('\0') {
            return Err(AnalysisError::InvalidInput(
                "input contains a NUL byte".to_string(),
            ));
        }
        Ok(())
    }
}
