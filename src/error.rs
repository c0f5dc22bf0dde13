use std::path::PathBuf;

/// Failures that stop a run. Input-side problems never show up here.
#[derive(thiserror::Error, Debug)]
pub enum GovernanceError {
    #[error("cannot create report directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl GovernanceError {
    pub fn code(&self) -> &'static str {
        match self {
            GovernanceError::CreateOutputDir { .. } | GovernanceError::WriteReport { .. } => {
                "OUTPUT_WRITE_FAILED"
            }
            GovernanceError::ConfigRead { .. } | GovernanceError::ConfigParse { .. } => {
                "CONFIG_INVALID"
            }
        }
    }
}
