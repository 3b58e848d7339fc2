//! Parallel validation and masking over many values

use rayon::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::kind::IdKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Validate every value; output order matches input order
pub fn validate_batch<S: AsRef<str> + Sync>(kind: IdKind, values: &[S]) -> Vec<bool> {
    let results: Vec<bool> = values
        .par_iter()
        .map(|v| kind.validate(v.as_ref()))
        .collect();

    debug!(
        kind = %kind,
        total = results.len(),
        valid = results.iter().filter(|ok| **ok).count(),
        "validated batch"
    );
    results
}

/// Mask every value. Fails before doing any work if `kind` has no mask.
pub fn mask_batch<S: AsRef<str> + Sync>(kind: IdKind, values: &[S]) -> Result<Vec<String>> {
    if !kind.has_mask() {
        return Err(Error::NoMask(kind));
    }

    values
        .par_iter()
        .map(|v| kind.mask(v.as_ref()))
        .collect()
}

pub fn summarize<S: AsRef<str> + Sync>(kind: IdKind, values: &[S]) -> BatchSummary {
    let valid = values
        .par_iter()
        .filter(|v| kind.validate(v.as_ref()))
        .count();

    BatchSummary {
        total: values.len(),
        valid,
        invalid: values.len() - valid,
    }
}
