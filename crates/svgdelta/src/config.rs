//! Batch configuration.
//!
//! Every output location is derived from an explicit [`DeltaConfig`] value; nothing is written to a
//! fixed process-wide path.

use crate::delta::SeverityWeights;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File-name labels of the two renderers. Documents are discovered as `<name>_<label>.svg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererLabels {
    pub c: String,
    pub g: String,
}

impl Default for RendererLabels {
    fn default() -> Self {
        Self {
            c: "mmdc".to_string(),
            g: "mmdg".to_string(),
        }
    }
}

/// What a batch does when one document cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// The first failure aborts the whole batch.
    #[default]
    Abort,
    /// The failing pair is reported separately and the batch continues.
    Isolate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaConfig {
    pub out_dir: PathBuf,
    pub renderers: RendererLabels,
    pub weights: SeverityWeights,
    /// Attribute-presence rows kept in each detail report.
    pub detail_attr_limit: usize,
    /// Ranked pairs listed in the summary.
    pub summary_limit: usize,
    pub failure_policy: FailurePolicy,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("target").join("svgdelta"),
            renderers: RendererLabels::default(),
            weights: SeverityWeights::default(),
            detail_attr_limit: 80,
            summary_limit: 10,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl DeltaConfig {
    /// Loads a config from a `.json`, `.yaml` or `.yml` file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.display().to_string(),
            source,
        })?;
        let invalid = |message: String| Error::InvalidConfig {
            path: path.display().to_string(),
            message,
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&text).map_err(|e| invalid(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&text).map_err(|e| invalid(e.to_string())),
            _ => Err(invalid(
                "unsupported extension (expected .json, .yaml or .yml)".to_string(),
            )),
        }
    }

    pub fn report_paths(&self) -> ReportPaths {
        ReportPaths::new(&self.out_dir)
    }
}

/// Output locations under one report root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub summary: PathBuf,
    pub json: PathBuf,
    pub details_dir: PathBuf,
}

impl ReportPaths {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            csv: out_dir.join("report.csv"),
            summary: out_dir.join("report.txt"),
            json: out_dir.join("report.json"),
            details_dir: out_dir.join("details"),
        }
    }

    pub fn detail(&self, name: &str) -> PathBuf {
        self.details_dir.join(format!("{name}.txt"))
    }
}
