//! Core domain types for the HeartRisk system.
//!
//! This module defines the fundamental types used throughout the system:
//! - The 13-field feature vector fed to the classifier
//! - Prediction results and verdicts
//! - The feature column-order contract

use serde::{Deserialize, Serialize};

/// Number of features the classifier was trained on
pub const FEATURE_COUNT: usize = 13;

/// Feature column names in training order.
///
/// This order is a contract with the trained artifacts: the classifier's
/// coefficient vector and the normalization record's mean/std vectors were
/// produced against exactly this ordering.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// One patient's measurements (or a mean/std vector of the same shape).
///
/// Categorical fields carry their small-integer encoding as `f64`; numeric
/// fields carry the raw measurement. Field order in `as_array` matches
/// [`FEATURE_NAMES`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub age: f64,
    pub sex: f64,
    pub cp: f64,
    pub trestbps: f64,
    pub chol: f64,
    pub fbs: f64,
    pub restecg: f64,
    pub thalach: f64,
    pub exang: f64,
    pub oldpeak: f64,
    pub slope: f64,
    pub ca: f64,
    pub thal: f64,
}

impl FeatureVector {
    /// Flatten into training column order
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.sex,
            self.cp,
            self.trestbps,
            self.chol,
            self.fbs,
            self.restecg,
            self.thalach,
            self.exang,
            self.oldpeak,
            self.slope,
            self.ca,
            self.thal,
        ]
    }

    /// Rebuild from an array in training column order
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            age: values[0],
            sex: values[1],
            cp: values[2],
            trestbps: values[3],
            chol: values[4],
            fbs: values[5],
            restecg: values[6],
            thalach: values[7],
            exang: values[8],
            oldpeak: values[9],
            slope: values[10],
            ca: values[11],
            thal: values[12],
        }
    }
}

/// Binary verdict rendered to the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Class 1: disease predicted (alarm styling)
    Positive,
    /// Class 0: no disease predicted (normal styling)
    Negative,
}

impl Verdict {
    /// Map a class label to its verdict. Label 1 is always Positive,
    /// anything else Negative; the mapping never crosses.
    pub fn from_label(label: u8) -> Self {
        if label == 1 {
            Verdict::Positive
        } else {
            Verdict::Negative
        }
    }

    /// Display text for the result panel
    pub fn text(&self) -> &'static str {
        match self {
            Verdict::Positive => "Positive",
            Verdict::Negative => "Negative",
        }
    }

    /// Whether this verdict gets the alarm (red) styling
    pub fn is_alarm(&self) -> bool {
        matches!(self, Verdict::Positive)
    }
}

/// Outcome of a single prediction, used only to render the response
#[derive(Clone, Debug)]
pub struct PredictionResult {
    /// Predicted class label (0 or 1)
    pub label: u8,
    /// Probability mass assigned to the predicted class (0.0–1.0)
    pub confidence: f64,
}

impl PredictionResult {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_label(self.label)
    }
}
