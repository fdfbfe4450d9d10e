//! Roadnet Editor Library.
//! Geometrie- und Topologie-Engine für einen 2D-Straßennetz- und Flächeneditor,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod snapshot;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, Selection,
    UiState,
};
pub use core::{
    BackgroundImage, BackgroundLayers, Polygon, PolygonStore, Road, RoadKind, RoadMap, RoadNode,
    ViewTransform,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use shared::EditorOptions;
pub use snapshot::{parse_snapshot, write_snapshot, EditorDocument, SnapshotError};
