//! Layout persistence.
//!
//! The scene snapshot is stored as pretty JSON in a hidden file inside the
//! browsed directory, next to the content it arranges. Writes go through a
//! temp file in the same directory and an atomic rename, so a crash mid-save
//! never leaves a truncated layout behind.

use crate::constants::LAYOUT_FILE_NAME;
use crate::error::CanvasResult;
use crate::types::NodeRecord;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Serialized scene: viewport plus every scene node's record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub origin: Vector,
    pub scale: f64,
    pub children: Vec<NodeRecord>,
}

pub fn layout_path(dir: &Path) -> PathBuf {
    dir.join(LAYOUT_FILE_NAME)
}

/// Atomically write the snapshot into `dir`.
pub fn save_layout(dir: &Path, snapshot: &SceneSnapshot) -> CanvasResult<PathBuf> {
    let path = layout_path(dir);
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, snapshot)?;
    tmp.flush()?;
    tmp.persist(&path)?;
    info!(path = %path.display(), nodes = snapshot.children.len(), "layout saved");
    Ok(path)
}

/// Read the snapshot stored in `dir`, if there is one.
pub fn load_layout(dir: &Path) -> CanvasResult<Option<SceneSnapshot>> {
    let path = layout_path(dir);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)?;
    let snapshot = serde_json::from_str(&contents)?;
    info!(path = %path.display(), "layout loaded");
    Ok(Some(snapshot))
}
