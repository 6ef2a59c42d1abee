//! Startup loading of the two trained artifacts.
//!
//! Both files are read exactly once, at session start. A missing or unusable
//! artifact is never fatal: the error message is kept for the UI, the slot
//! stays empty, and prediction later fails gracefully while the form keeps
//! running.

use crate::{Classifier, Error, NormalizationRecord};
use std::path::{Path, PathBuf};

/// Filesystem locations of the two artifacts
#[derive(Clone, Debug)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub norm: PathBuf,
}

impl ArtifactPaths {
    /// Conventional file names inside an artifacts directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            model: dir.join("model.json"),
            norm: dir.join("mean_std_values.json"),
        }
    }
}

/// Read-only artifact state held for the lifetime of the session
#[derive(Debug, Default)]
pub struct ArtifactStore {
    model: Option<Classifier>,
    norm: Option<NormalizationRecord>,
    load_errors: Vec<String>,
}

impl ArtifactStore {
    /// Load both artifacts, recording (not raising) any failures
    pub fn load(paths: &ArtifactPaths) -> Self {
        let mut store = Self::default();

        match load_classifier(&paths.model) {
            Ok(model) => store.model = Some(model),
            Err(e) => {
                tracing::warn!("Classifier unavailable: {}", e);
                store.load_errors.push(e.to_string());
            }
        }

        match load_norm(&paths.norm) {
            Ok(norm) => store.norm = Some(norm),
            Err(e) => {
                tracing::warn!("Normalization record unavailable: {}", e);
                store.load_errors.push(e.to_string());
            }
        }

        store
    }

    /// Build a store directly from artifacts (used by tests)
    pub fn from_parts(model: Option<Classifier>, norm: Option<NormalizationRecord>) -> Self {
        Self {
            model,
            norm,
            load_errors: Vec::new(),
        }
    }

    pub fn model(&self) -> Option<&Classifier> {
        self.model.as_ref()
    }

    pub fn norm(&self) -> Option<&NormalizationRecord> {
        self.norm.as_ref()
    }

    /// User-visible messages for artifacts that failed to load
    pub fn load_errors(&self) -> &[String] {
        &self.load_errors
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_some() && self.norm.is_some()
    }
}

fn load_classifier(path: &Path) -> crate::Result<Classifier> {
    if !path.exists() {
        return Err(Error::MissingArtifact {
            kind: "Model",
            path: path.to_path_buf(),
        });
    }
    Classifier::load(path)
}

fn load_norm(path: &Path) -> crate::Result<NormalizationRecord> {
    if !path.exists() {
        return Err(Error::MissingArtifact {
            kind: "Mean and std values",
            path: path.to_path_buf(),
        });
    }
    NormalizationRecord::load(path)
}
