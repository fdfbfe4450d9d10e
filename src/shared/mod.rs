//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die `app`, `snapshot` und das
//! Inspektor-Binary gemeinsam nutzen.
pub mod options;

pub use options::EditorOptions;
pub use options::{HIT_TOLERANCE_PX, PICK_RADIUS_PX, POLYGON_CLOSE_RADIUS_PX, SNAP_DISTANCE};
