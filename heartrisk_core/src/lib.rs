#![forbid(unsafe_code)]

//! Core domain model and inference logic for the HeartRisk system.
//!
//! This crate provides:
//! - Domain types (feature vectors, verdicts, prediction results)
//! - The fixed 13-field input-form schema and its encoding contract
//! - Artifact loading (classifier, normalization record)
//! - Standardization and prediction
//! - Configuration and logging setup

pub mod artifacts;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod model;
pub mod predict;
pub mod scaler;
pub mod types;

// Re-export commonly used types
pub use artifacts::{ArtifactPaths, ArtifactStore};
pub use config::Config;
pub use error::{Error, Result};
pub use form::{FieldControl, FieldSpec, FormState, FORM_FIELDS};
pub use model::Classifier;
pub use predict::{confidence_percent, run_prediction};
pub use scaler::NormalizationRecord;
pub use types::*;
