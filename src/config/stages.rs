use crate::color::ChannelRange;
use crate::error::{Error, Result};
use crate::pipeline::Stage;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct StageToolConfig {
    pub input: PathBuf,
    #[serde(default = "default_stages")]
    pub stages: Vec<StageOutputConfig>,
    #[serde(default)]
    pub channel_range: ChannelRange,
    /// Optional JSON report with one entry per stage.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct StageOutputConfig {
    pub stage: Stage,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl StageOutputConfig {
    /// Configured output, or the stage's default file name.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.stage.default_output()))
    }
}

fn default_stages() -> Vec<StageOutputConfig> {
    vec![StageOutputConfig {
        stage: Stage::Sobel,
        output: None,
    }]
}

pub fn load_config(path: &Path) -> Result<StageToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&data).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn parse_config(data: &str) -> std::result::Result<StageToolConfig, String> {
    let config: StageToolConfig = serde_json::from_str(data).map_err(|e| e.to_string())?;
    if config.stages.is_empty() {
        return Err("`stages` must list at least one stage".to_string());
    }
    Ok(config)
}
