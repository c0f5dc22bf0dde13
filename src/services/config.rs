use crate::cli::{ReportFormat, ReportLang, DEFAULT_CONFIG_FILE};
use crate::domain::constants::{
    ACCURACY_THRESHOLD, DEFAULT_FAIRNESS_PATH, DEFAULT_MARKDOWN_OUTPUT_PATH,
    DEFAULT_METRICS_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_QUALITY_PATH, DEFAULT_SBOM_PATH,
    DEFAULT_SECURITY_PATH,
};
use crate::domain::models::CheckName;
use crate::error::GovernanceError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct PathsSection {
    pub metrics: Option<String>,
    pub sbom: Option<String>,
    pub fairness: Option<String>,
    pub quality: Option<String>,
    pub security: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ReportSection {
    pub lang: Option<ReportLang>,
    pub format: Option<ReportFormat>,
}

/// Command-line values that win over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub format: Option<ReportFormat>,
    pub lang: Option<ReportLang>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactPaths {
    pub sbom: PathBuf,
    pub fairness: PathBuf,
    pub quality: PathBuf,
    pub security: PathBuf,
}

impl ArtifactPaths {
    pub fn get(&self, name: CheckName) -> &Path {
        match name {
            CheckName::Sbom => &self.sbom,
            CheckName::Fairness => &self.fairness,
            CheckName::Quality => &self.quality,
            CheckName::Security => &self.security,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GovernanceConfig {
    pub root: PathBuf,
    pub metrics_path: PathBuf,
    pub artifacts: ArtifactPaths,
    pub output_path: PathBuf,
    pub accuracy_threshold: f64,
    pub lang: ReportLang,
    pub format: ReportFormat,
}

impl GovernanceConfig {
    #[cfg(test)]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::build(root.into(), &ConfigFile::default(), &Overrides::default())
    }

    pub fn build(root: PathBuf, file: &ConfigFile, overrides: &Overrides) -> Self {
        let format = overrides
            .format
            .or(file.report.format)
            .unwrap_or_default();
        let lang = overrides.lang.or(file.report.lang).unwrap_or_default();
        let default_output = match format {
            ReportFormat::Html => DEFAULT_OUTPUT_PATH,
            ReportFormat::Markdown => DEFAULT_MARKDOWN_OUTPUT_PATH,
        };
        let resolve = |configured: &Option<String>, default: &str| {
            root.join(configured.as_deref().unwrap_or(default))
        };

        let output_path = match &overrides.output {
            Some(o) => root.join(o),
            None => resolve(&file.paths.output, default_output),
        };

        GovernanceConfig {
            metrics_path: resolve(&file.paths.metrics, DEFAULT_METRICS_PATH),
            artifacts: ArtifactPaths {
                sbom: resolve(&file.paths.sbom, DEFAULT_SBOM_PATH),
                fairness: resolve(&file.paths.fairness, DEFAULT_FAIRNESS_PATH),
                quality: resolve(&file.paths.quality, DEFAULT_QUALITY_PATH),
                security: resolve(&file.paths.security, DEFAULT_SECURITY_PATH),
            },
            output_path,
            accuracy_threshold: ACCURACY_THRESHOLD,
            lang,
            format,
            root,
        }
    }

    /// Path as shown to operators: relative to the root when it lives under it.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }

    /// Link to `path` that resolves from the directory the report is written to.
    pub fn report_link(&self, path: &Path) -> String {
        let base = self.output_path.parent().unwrap_or_else(|| Path::new(""));
        let absolute = |p: &Path| std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf());
        let (target, base) = if path.is_absolute() == base.is_absolute() {
            (path.to_path_buf(), base.to_path_buf())
        } else {
            (absolute(path), absolute(base))
        };
        match pathdiff::diff_paths(&target, &base) {
            Some(rel) if !rel.is_absolute() => rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            _ => format!("file://{}", absolute(&target).to_string_lossy()),
        }
    }
}

/// A missing file is only an error when the user named it explicitly.
pub fn load_config_file(path: &Path, required: bool) -> Result<ConfigFile, GovernanceError> {
    if !path.exists() && !required {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| GovernanceError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| GovernanceError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn resolve_config(
    root: &str,
    explicit_config: Option<&str>,
    overrides: &Overrides,
) -> Result<GovernanceConfig, GovernanceError> {
    let root = PathBuf::from(root);
    let file = match explicit_config {
        Some(p) => load_config_file(Path::new(p), true)?,
        None => load_config_file(&root.join(DEFAULT_CONFIG_FILE), false)?,
    };
    let config = GovernanceConfig::build(root, &file, overrides);
    log::debug!(
        "resolved config: metrics={} output={}",
        config.metrics_path.display(),
        config.output_path.display()
    );
    Ok(config)
}
