//! JSON-Snapshot des Editor-Zustands (Laden und Speichern).
//!
//! Ein Snapshot ist ein flaches Dokument
//! `{nodes, roads, polygons, backgroundImages, panOffset, zoom}` mit
//! camelCase-Feldern. Es gibt keine Versionierung und keine Migration.

pub mod document;
pub mod reader;
pub mod writer;

use crate::core::{BackgroundLayers, PolygonStore, RoadMap, ViewTransform};

pub use reader::{parse_snapshot, read_snapshot_file};
pub use writer::{write_snapshot, write_snapshot_file};

/// Fehler beim Lesen oder Schreiben eines Snapshots.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot-Datei nicht lesbar/schreibbar: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot-JSON ungültig: {0}")]
    Json(#[from] serde_json::Error),
}

/// Vollständiger persistierter Editor-Zustand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorDocument {
    pub road_map: RoadMap,
    pub polygons: PolygonStore,
    pub backgrounds: BackgroundLayers,
    pub view: ViewTransform,
}
