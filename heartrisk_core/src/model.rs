//! The pre-trained binary classifier.
//!
//! The artifact is a logistic-regression model exported to `model.json` as a
//! coefficient vector plus intercept over the 13 standardized features. The
//! rest of the crate treats it as opaque and only uses the two inference
//! operations: class prediction and class probabilities.

use crate::{Error, Result, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Logistic-regression classifier over standardized features
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Classifier {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl Classifier {
    /// Load and validate a classifier from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let model: Classifier = serde_json::from_str(&contents)?;
        model.validate()?;
        tracing::debug!("Loaded classifier from {:?}", path);
        Ok(model)
    }

    /// Check that the coefficient vector matches the feature contract
    pub fn validate(&self) -> Result<()> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(Error::Artifact(format!(
                "classifier has {} coefficients, expected {}",
                self.coefficients.len(),
                FEATURE_COUNT
            )));
        }
        Ok(())
    }

    /// Raw decision value (logit) for a standardized feature array
    fn decision(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut sum = self.intercept;
        for (coef, x) in self.coefficients.iter().zip(features.iter()) {
            sum += coef * x;
        }
        sum
    }

    /// Class probabilities `[P(class 0), P(class 1)]`
    pub fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> [f64; 2] {
        let p1 = sigmoid(self.decision(features));
        [1.0 - p1, p1]
    }

    /// Predicted class label: 1 when the decision value is positive
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> u8 {
        if self.decision(features) > 0.0 {
            1
        } else {
            0
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> Classifier {
        Classifier {
            coefficients: vec![
                0.4, 0.6, 0.5, 0.2, 0.1, -0.1, 0.15, -0.4, 0.35, 0.45, 0.3, 0.8, 0.7,
            ],
            intercept: -0.2,
        }
    }

    #[test]
    fn test_sigmoid_bounds() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(20.0) > 0.999);
        assert!(sigmoid(-20.0) < 0.001);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = test_model();
        let features = [0.5; FEATURE_COUNT];
        let proba = model.predict_proba(&features);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
        assert!(proba[1] > 0.0 && proba[1] < 1.0);
    }

    #[test]
    fn test_predict_agrees_with_probabilities() {
        let model = test_model();

        let positive = [1.0; FEATURE_COUNT];
        assert_eq!(model.predict(&positive), 1);
        assert!(model.predict_proba(&positive)[1] > 0.5);

        let negative = [-1.0; FEATURE_COUNT];
        assert_eq!(model.predict(&negative), 0);
        assert!(model.predict_proba(&negative)[0] > 0.5);
    }

    #[test]
    fn test_validate_rejects_wrong_arity() {
        let model = Classifier {
            coefficients: vec![0.1, 0.2],
            intercept: 0.0,
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("model.json");

        let contents = serde_json::to_string(&test_model()).unwrap();
        std::fs::write(&path, contents).unwrap();

        let loaded = Classifier::load(&path).unwrap();
        assert_eq!(loaded.coefficients.len(), FEATURE_COUNT);
        assert_eq!(loaded.intercept, -0.2);
    }

    #[test]
    fn test_load_rejects_wrong_arity_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("model.json");
        std::fs::write(&path, r#"{"coefficients":[1.0,2.0],"intercept":0.0}"#).unwrap();

        assert!(matches!(Classifier::load(&path), Err(Error::Artifact(_))));
    }
}
