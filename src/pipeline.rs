//! Memoizing front of the engine.
//!
//! Every request first consults the cache under its exact raw string. Misses
//! run the parser, simplifier and formatter, then write the outcome back,
//! failures included, so a repeated bad request is answered from the cache.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{info, warn};

use crate::cache::{PolynomialCache, PolynomialRecord};
use crate::config::PipelineConfig;
use crate::error::{Failure, PolyError, Result};
use crate::format::format_canonical;
use crate::parser::{parse_canonical, parse_polynomial, parse_x};
use crate::polynomial::Polynomial;

pub struct Pipeline<C> {
    cache: C,
    config: PipelineConfig,
    parses: AtomicUsize,
}

impl<C: PolynomialCache> Pipeline<C> {
    pub fn new(cache: C) -> Self {
        Self::with_config(cache, PipelineConfig::default())
    }

    pub fn with_config(cache: C, config: PipelineConfig) -> Self {
        Pipeline {
            cache,
            config,
            parses: AtomicUsize::new(0),
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Number of times the parser has been invoked by this pipeline.
    pub fn parse_count(&self) -> usize {
        self.parses.load(Ordering::Relaxed)
    }

    /// Returns the canonical form of `raw`, from the cache when possible.
    pub fn simplify(&self, raw: &str) -> Result<String> {
        self.with_attempts("simplify", self.config.simplify_attempts(), || {
            self.simplify_once(raw)
        })
    }

    /// Evaluates `raw` at the integer spelled by `x_raw`.
    pub fn evaluate(&self, raw: &str, x_raw: &str) -> Result<i64> {
        self.with_attempts("evaluate", self.config.evaluate_attempts(), || {
            self.evaluate_once(raw, x_raw)
        })
    }

    fn simplify_once(&self, raw: &str) -> Result<String> {
        info!(polynomial = raw, "simplify requested");
        match self.cache.get_polynomial(raw)? {
            Some(PolynomialRecord::Failed(failure)) => Err(replay(raw, failure)),
            Some(PolynomialRecord::Simplified(canonical)) => {
                info!(polynomial = raw, canonical = %canonical, "cache hit");
                Ok(canonical)
            }
            None => {
                info!(polynomial = raw, "cache miss, simplifying");
                let (_, canonical) = self.compute(raw)?;
                self.cache
                    .put_polynomial(raw, PolynomialRecord::Simplified(canonical.clone()))?;
                info!(polynomial = raw, canonical = %canonical, "simplification stored");
                Ok(canonical)
            }
        }
    }

    fn evaluate_once(&self, raw: &str, x_raw: &str) -> Result<i64> {
        info!(polynomial = raw, x = x_raw, "evaluate requested");
        if let Some(result) = self.cache.get_evaluation(raw, x_raw)? {
            info!(polynomial = raw, x = x_raw, result, "cache hit");
            return Ok(result);
        }

        let record = self.cache.get_polynomial(raw)?;
        if let Some(PolynomialRecord::Failed(failure)) = record {
            return Err(replay(raw, failure));
        }

        let x = parse_x(x_raw)?;

        let (polynomial, record) = match record {
            Some(PolynomialRecord::Simplified(canonical)) => {
                info!(polynomial = raw, canonical = %canonical, "evaluating cached simplification");
                let polynomial = self.rebuild(raw, &canonical)?;
                (polynomial, PolynomialRecord::Simplified(canonical))
            }
            _ => {
                info!(polynomial = raw, "cache miss, simplifying before evaluation");
                let (polynomial, canonical) = self.compute(raw)?;
                let record = PolynomialRecord::Simplified(canonical);
                self.cache.put_polynomial(raw, record.clone())?;
                (polynomial, record)
            }
        };

        let result = polynomial.evaluate(x);
        self.cache
            .put_evaluation(raw, x_raw, result, Some(&record))?;
        info!(polynomial = raw, x = x_raw, result, "evaluation stored");
        Ok(result)
    }

    /// Parses and simplifies `raw`; parse failures are cached under `raw`.
    fn compute(&self, raw: &str) -> Result<(Polynomial, String)> {
        self.parses.fetch_add(1, Ordering::Relaxed);
        match parse_polynomial(raw) {
            Ok(parsed) => {
                let simplified = parsed.simplify();
                let canonical = format_canonical(&simplified);
                Ok((simplified, canonical))
            }
            Err(err) => {
                self.remember_failure(raw, &err);
                Err(err)
            }
        }
    }

    // A canonical string whose coefficients outgrew nine digits no longer
    // parses; the raw request is known to be valid, so fall back to it.
    fn rebuild(&self, raw: &str, canonical: &str) -> Result<Polynomial> {
        self.parses.fetch_add(1, Ordering::Relaxed);
        match parse_canonical(canonical) {
            Ok(polynomial) => Ok(polynomial),
            Err(err) => {
                warn!(polynomial = raw, canonical, error = %err, "cached form unparsable, reparsing request");
                self.parses.fetch_add(1, Ordering::Relaxed);
                Ok(parse_polynomial(raw)?.simplify())
            }
        }
    }

    fn remember_failure(&self, raw: &str, err: &PolyError) {
        let PolyError::Polynomial { failure, .. } = err else {
            return;
        };
        info!(polynomial = raw, code = failure.code(), "caching failure");
        if let Err(store_err) = self
            .cache
            .put_polynomial(raw, PolynomialRecord::Failed(failure.clone()))
        {
            warn!(polynomial = raw, error = %store_err, "could not cache failure");
        }
    }

    fn with_attempts<T>(
        &self,
        operation: &str,
        attempts: u32,
        mut run: impl FnMut() -> Result<T>,
    ) -> Result<T> {
        let mut attempt = 1;
        loop {
            match run() {
                Err(PolyError::Store(message)) if attempt < attempts => {
                    warn!(operation, attempt, error = %message, "store failure, retrying");
                    attempt += 1;
                }
                outcome => return outcome,
            }
        }
    }
}

fn replay(raw: &str, failure: Failure) -> PolyError {
    info!(polynomial = raw, code = failure.code(), "replaying cached failure");
    PolyError::Polynomial {
        failure,
        raw: Some(raw.to_string()),
    }
}
