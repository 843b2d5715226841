use std::fs;
use std::path::Path;

use tracing::info;

use super::{PanelSnapshot, Result, SessionSpec};

fn is_yaml(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(extension.as_str(), "yaml" | "yml")
}

pub fn load_session(path: impl AsRef<Path>) -> Result<SessionSpec> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let session = if is_yaml(path) {
        serde_yaml::from_str::<SessionSpec>(&raw)?
    } else {
        serde_json::from_str::<SessionSpec>(&raw)?
    };
    session.validate()?;
    info!(
        path = %path.display(),
        sources = session.sources.len(),
        groups = session.groups.len(),
        "loaded session"
    );
    Ok(session)
}

pub fn save_snapshot(path: impl AsRef<Path>, snapshot: &PanelSnapshot) -> Result<()> {
    let path = path.as_ref();
    let serialized = if is_yaml(path) {
        serde_yaml::to_string(snapshot)?
    } else {
        serde_json::to_string_pretty(snapshot)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
