use crate::domain::models::{ArtifactCheck, CheckName, CheckStatus};
use crate::services::config::GovernanceConfig;
use std::path::Path;

pub fn probe(name: CheckName, path: &Path, shown_as: String, href: String) -> ArtifactCheck {
    let status = if path.exists() {
        CheckStatus::Present
    } else {
        CheckStatus::Missing
    };
    log::debug!("check {}: {} -> {:?}", name.as_str(), path.display(), status);
    ArtifactCheck {
        name,
        path: shown_as,
        status,
        href,
    }
}

/// One row per check, always in `CheckName::ALL` order.
pub fn probe_all(config: &GovernanceConfig) -> Vec<ArtifactCheck> {
    CheckName::ALL
        .iter()
        .map(|&name| {
            let path = config.artifacts.get(name);
            probe(name, path, config.display_path(path), config.report_link(path))
        })
        .collect()
}
