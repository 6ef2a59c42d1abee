//! The prediction step: standardize, classify, derive confidence.
//!
//! Stateless per invocation; runs only on the explicit predict action and
//! reads whatever the form currently holds. Every failure comes back as a
//! typed error for the rendering layer, never as a panic.

use crate::{ArtifactStore, Error, FeatureVector, PredictionResult, Result, FEATURE_NAMES};

/// Run one prediction over an assembled feature vector.
///
/// Fails with [`Error::Prediction`] when an artifact is absent or when
/// standardization produced a non-finite value (a zero std entry in the
/// normalization record surfaces here).
pub fn run_prediction(store: &ArtifactStore, record: &FeatureVector) -> Result<PredictionResult> {
    let model = store
        .model()
        .ok_or_else(|| Error::Prediction("model is not loaded".into()))?;
    let norm = store
        .norm()
        .ok_or_else(|| Error::Prediction("normalization record is not loaded".into()))?;

    let standardized = norm.standardize(record);
    for (i, value) in standardized.iter().enumerate() {
        if !value.is_finite() {
            return Err(Error::Prediction(format!(
                "standardized value for '{}' is not finite (zero std entry?)",
                FEATURE_NAMES[i]
            )));
        }
    }

    let proba = model.predict_proba(&standardized);
    let label = model.predict(&standardized);
    let confidence = if label == 1 { proba[1] } else { proba[0] };

    tracing::debug!(label, confidence, "prediction complete");

    Ok(PredictionResult { label, confidence })
}

/// Confidence as a display percentage, truncated (never rounded) to two
/// decimal places: `floor(confidence * 10000) / 100`.
pub fn confidence_percent(confidence: f64) -> f64 {
    (confidence * 10000.0).floor() / 100.0
}
