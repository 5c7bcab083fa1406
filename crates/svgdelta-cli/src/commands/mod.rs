pub mod batch;
pub mod compare;

use std::path::Path;
use svgdelta::DeltaConfig;

fn load_config(path: Option<&Path>) -> svgdelta::Result<DeltaConfig> {
    match path {
        Some(path) => DeltaConfig::from_path(path),
        None => Ok(DeltaConfig::default()),
    }
}
