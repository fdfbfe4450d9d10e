//! Konstruktions-Sessions für Straßenketten und Polygone.
//!
//! Sessions halten nur gestufte Kopien (Wertetypen) und erzeugen beim
//! Abschluss reine Daten (`BuildResult`, `PolygonDraft`). Die Mutation der
//! Stores erfolgt zentral in den Use-Cases.

/// Straßenketten-Session (Build-Werkzeug).
pub mod build_session;
/// Polygon-Session (Regionen-Werkzeug).
pub mod polygon_session;
/// Gemeinsame Schnittstelle beider Sessions.
mod session_tool;

pub use build_session::{BuildPhase, BuildResult, BuildSession, StagedAnchor, StagedPoint};
pub use polygon_session::{PolygonClick, PolygonDraft, PolygonPhase, PolygonSession, StagedVertex};
pub use session_tool::ConstructionSession;
