use crate::scissors::ScissorsParams;
use crate::types::Point;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `trace_path` tool.
///
/// The contour starts at `seed` and visits `targets` in order; every reached
/// target becomes the seed of the next segment.
#[derive(Debug, Deserialize)]
pub struct TraceToolConfig {
    pub input: PathBuf,
    pub seed: Point,
    pub targets: Vec<Point>,
    /// Train on each finished segment before searching the next one.
    #[serde(default)]
    pub train_after_each: bool,
    /// Upper bound of `do_work` batches per segment.
    #[serde(default = "default_max_batches")]
    pub max_batches: usize,
    #[serde(default)]
    pub scissors: ScissorsParams,
    pub output: TraceOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct TraceOutputConfig {
    pub trace_json: PathBuf,
    #[serde(default)]
    pub gradient_image: Option<PathBuf>,
    #[serde(default)]
    pub laplace_image: Option<PathBuf>,
}

fn default_max_batches() -> usize {
    10_000
}

pub fn load_config(path: &Path) -> Result<TraceToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config = parse_config(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    config
        .scissors
        .validate()
        .map_err(|e| format!("Invalid config {}: {e}", path.display()))?;
    Ok(config)
}

pub fn parse_config(data: &str) -> Result<TraceToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
