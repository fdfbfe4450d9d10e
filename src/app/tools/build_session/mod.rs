//! Build-Session: stuft eine Kette von Punkten und erzeugt beim Abschluss
//! eine Straße pro aufeinanderfolgendem Punktpaar.
//!
//! Punkte auf Straßen werden erst beim Anwenden des Ergebnisses geteilt, damit
//! eine abgebrochene Session keine Topologie hinterlässt.

mod lifecycle;
mod state;

pub use state::{transition, BuildEvent, BuildPhase, BuildSession, StagedAnchor, StagedPoint};

use crate::core::RoadKind;

/// Ergebnis einer abgeschlossenen Build-Session (reine Daten).
#[derive(Debug, Clone, PartialEq)]
pub struct BuildResult {
    /// Gestufte Punkte in Reihenfolge (mindestens 2)
    pub points: Vec<StagedPoint>,
    pub road_kind: RoadKind,
    pub road_width: f32,
}

impl BuildResult {
    /// Anzahl der Straßen, die beim Anwenden entstehen.
    pub fn road_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests;
