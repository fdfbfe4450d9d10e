//! Polygon-Session: stuft Eckpunkte und erzeugt beim Schließen einen
//! `PolygonDraft`, der zentral in den `PolygonStore` übernommen wird.

mod lifecycle;
mod state;

pub use state::{transition, PolygonEvent, PolygonPhase, PolygonSession, StagedVertex};

use crate::core::PolygonStyle;

/// Ergebnis eines geschlossenen Polygons (reine Daten).
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonDraft {
    /// Eckpunkte in Klickreihenfolge (mindestens 3)
    pub vertices: Vec<StagedVertex>,
    pub style: PolygonStyle,
}

/// Rückgabe von `PolygonSession::click`.
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonClick {
    /// Eckpunkt gestuft
    Added,
    /// Polygon geschlossen
    Closed(PolygonDraft),
    /// Klick ohne Wirkung
    Ignored,
}

#[cfg(test)]
mod tests;
