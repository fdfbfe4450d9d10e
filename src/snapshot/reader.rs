//! Reader für JSON-Snapshots.

use super::document::SnapshotDto;
use super::{EditorDocument, SnapshotError};
use std::path::Path;

/// Parsed einen Snapshot aus einem JSON-String.
///
/// Die Inhalte werden unverändert übernommen (auch `connectedRoadIds`).
pub fn parse_snapshot(json: &str) -> Result<EditorDocument, SnapshotError> {
    let dto: SnapshotDto = serde_json::from_str(json)?;
    let doc = EditorDocument::from(dto);
    log::debug!(
        "Snapshot gelesen: {} Nodes, {} Straßen, {} Polygone, {} Hintergründe",
        doc.road_map.node_count(),
        doc.road_map.road_count(),
        doc.polygons.len(),
        doc.backgrounds.len()
    );
    Ok(doc)
}

/// Liest und parsed eine Snapshot-Datei.
pub fn read_snapshot_file(path: impl AsRef<Path>) -> Result<EditorDocument, SnapshotError> {
    let content = std::fs::read_to_string(path)?;
    parse_snapshot(&content)
}
