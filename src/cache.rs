//! Key-value collaborator the memoizing pipeline reads from and writes to.
//!
//! Keys are the exact request strings as received. Two spellings of the same
//! polynomial are different keys.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{Failure, PolyError, Result};

/// Outcome stored for one raw polynomial string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolynomialRecord {
    Simplified(String),
    Failed(Failure),
}

impl PolynomialRecord {
    pub fn simplified(&self) -> Option<&str> {
        match self {
            PolynomialRecord::Simplified(s) => Some(s),
            PolynomialRecord::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            PolynomialRecord::Failed(f) => Some(f),
            PolynomialRecord::Simplified(_) => None,
        }
    }
}

pub trait PolynomialCache: Send + Sync {
    fn get_polynomial(&self, raw: &str) -> Result<Option<PolynomialRecord>>;

    fn put_polynomial(&self, raw: &str, record: PolynomialRecord) -> Result<()>;

    fn get_evaluation(&self, raw: &str, x_raw: &str) -> Result<Option<i64>>;

    /// Stores an evaluation result; `linked` is the owning polynomial record.
    fn put_evaluation(
        &self,
        raw: &str,
        x_raw: &str,
        result: i64,
        linked: Option<&PolynomialRecord>,
    ) -> Result<()>;
}

impl<C: PolynomialCache + ?Sized> PolynomialCache for std::sync::Arc<C> {
    fn get_polynomial(&self, raw: &str) -> Result<Option<PolynomialRecord>> {
        (**self).get_polynomial(raw)
    }

    fn put_polynomial(&self, raw: &str, record: PolynomialRecord) -> Result<()> {
        (**self).put_polynomial(raw, record)
    }

    fn get_evaluation(&self, raw: &str, x_raw: &str) -> Result<Option<i64>> {
        (**self).get_evaluation(raw, x_raw)
    }

    fn put_evaluation(
        &self,
        raw: &str,
        x_raw: &str,
        result: i64,
        linked: Option<&PolynomialRecord>,
    ) -> Result<()> {
        (**self).put_evaluation(raw, x_raw, result, linked)
    }
}

/// Process-local cache. Evaluations are keyed by `(raw, x_raw)`, so a second
/// write for the same pair replaces the first.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    polynomials: RwLock<HashMap<String, PolynomialRecord>>,
    evaluations: RwLock<HashMap<(String, String), i64>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry count, read through a poisoned lock.
    pub fn polynomial_len(&self) -> usize {
        self.polynomials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn evaluation_len(&self) -> usize {
        self.evaluations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> PolyError {
    PolyError::Store("cache lock poisoned".to_string())
}

impl PolynomialCache for InMemoryCache {
    fn get_polynomial(&self, raw: &str) -> Result<Option<PolynomialRecord>> {
        let map = self.polynomials.read().map_err(poisoned)?;
        Ok(map.get(raw).cloned())
    }

    fn put_polynomial(&self, raw: &str, record: PolynomialRecord) -> Result<()> {
        let mut map = self.polynomials.write().map_err(poisoned)?;
        map.insert(raw.to_string(), record);
        Ok(())
    }

    fn get_evaluation(&self, raw: &str, x_raw: &str) -> Result<Option<i64>> {
        let map = self.evaluations.read().map_err(poisoned)?;
        Ok(map.get(&(raw.to_string(), x_raw.to_string())).copied())
    }

    fn put_evaluation(
        &self,
        raw: &str,
        x_raw: &str,
        result: i64,
        linked: Option<&PolynomialRecord>,
    ) -> Result<()> {
        if let Some(record) = linked {
            let mut polys = self.polynomials.write().map_err(poisoned)?;
            polys
                .entry(raw.to_string())
                .or_insert_with(|| record.clone());
        }
        let mut map = self.evaluations.write().map_err(poisoned)?;
        map.insert((raw.to_string(), x_raw.to_string()), result);
        Ok(())
    }
}
