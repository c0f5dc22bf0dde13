use crate::error::GovernanceError;
use std::path::Path;

/// Replaces any previous report at `path`.
pub fn write_report(path: &Path, body: &str) -> Result<(), GovernanceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| GovernanceError::CreateOutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, body).map_err(|source| GovernanceError::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
