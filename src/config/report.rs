use crate::analyzer::AnalyzerParams;
use crate::error::{Result, SwingError};
use crate::prompt::PromptOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `swing_report` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct ReportToolConfig {
    /// Pose sequence JSON produced by the landmark extractor.
    pub input: PathBuf,
    #[serde(default)]
    pub params: AnalyzerParams,
    #[serde(default)]
    pub prompt: PromptOptions,
    #[serde(default)]
    pub output: ReportOutputConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportOutputConfig {
    pub format: OutputFormat,
    /// Where to write the JSON report; printed to stdout when absent.
    pub json_out: Option<PathBuf>,
    /// Where to write the rendered coaching prompt, if anywhere.
    pub prompt_out: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ReportToolConfig> {
    let data = fs::read_to_string(path).map_err(|source| SwingError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data).map_err(|source| SwingError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(json: &str) -> std::result::Result<ReportToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
