//! Feature standardization using pre-computed mean/std vectors.
//!
//! The normalization record is produced alongside the classifier during
//! training and shipped as `mean_std_values.json`. Standardization is the
//! fixed linear map `(raw - mean) / std` per field; nothing here guards a
//! zero std entry, so such an entry yields a non-finite value that the
//! predictor rejects.

use crate::{FeatureVector, Result, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Paired mean/std vectors, one entry per feature column
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NormalizationRecord {
    pub mean: FeatureVector,
    pub std: FeatureVector,
}

impl NormalizationRecord {
    /// Load a normalization record from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let record: NormalizationRecord = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded normalization record from {:?}", path);
        Ok(record)
    }

    /// Standardize a feature vector: `(raw - mean) / std` per field
    pub fn standardize(&self, record: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let raw = record.as_array();
        let mean = self.mean.as_array();
        let std = self.std.as_array();

        let mut out = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            out[i] = (raw[i] - mean[i]) / std[i];
        }
        out
    }
}
