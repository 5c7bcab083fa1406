//! Pair discovery by file-name convention: `<name>_<C>.svg` next to `<name>_<G>.svg`.

use crate::config::RendererLabels;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Two renderings of the same logical diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPair {
    pub name: String,
    pub c_path: PathBuf,
    pub g_path: PathBuf,
}

/// Lists renderer-C documents in `dir` (sorted by file name) and pairs each one with its
/// renderer-G counterpart. Documents without a counterpart are skipped.
pub fn discover_pairs(dir: &Path, labels: &RendererLabels) -> Result<Vec<DocumentPair>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::ListDirectory {
        path: dir.display().to_string(),
        source,
    })?;

    let c_suffix = format!("_{}.svg", labels.c);
    let mut c_files: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(name) = file_name.strip_suffix(&c_suffix) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        c_files.push((name.to_string(), path.clone()));
    }
    c_files.sort();

    let mut pairs = Vec::with_capacity(c_files.len());
    for (name, c_path) in c_files {
        let g_path = dir.join(format!("{name}_{}.svg", labels.g));
        if !g_path.is_file() {
            tracing::warn!(
                name = %name,
                missing = %g_path.display(),
                "skipping unpaired document"
            );
            continue;
        }
        pairs.push(DocumentPair {
            name,
            c_path,
            g_path,
        });
    }
    Ok(pairs)
}
