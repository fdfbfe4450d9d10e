//! Zustandsmaschine und State-Definitionen der Polygon-Session.

use crate::core::{PolygonStyle, MIN_VERTICES};
use glam::Vec2;

/// Phase der Polygon-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonPhase {
    /// Keine Eckpunkte gestuft
    #[default]
    Idle,
    /// Mindestens ein Eckpunkt gestuft
    Active,
    /// Schließen angefordert, Entwurf wird erzeugt
    Closing,
    /// Entwurf übergeben
    Committed,
    /// Abbruch läuft
    Cancelled,
}

/// Ereignisse der Polygon-Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonEvent {
    /// Erster Eckpunkt gesetzt
    Start,
    /// Weiterer Eckpunkt gesetzt
    AddVertex,
    /// Letzter Eckpunkt entfernt; `remaining` = danach verbleibende Eckpunkte
    RemoveLast { remaining: usize },
    /// Schließen angefordert mit `staged` gestuften Eckpunkten
    Close { staged: usize },
    /// Entwurf übergeben
    Commit,
    /// Abbruch angefordert
    Cancel,
    /// Übergangsphase beendet
    Settle,
}

/// Reine Übergangsfunktion `(Phase, Ereignis) → Phase`.
pub fn transition(phase: PolygonPhase, event: PolygonEvent) -> PolygonPhase {
    use PolygonEvent as E;
    use PolygonPhase as P;
    match (phase, event) {
        (P::Idle, E::Start) => P::Active,
        (P::Active, E::AddVertex) => P::Active,
        (P::Active, E::RemoveLast { remaining: 0 }) => P::Idle,
        (P::Active, E::RemoveLast { .. }) => P::Active,
        (P::Active, E::Close { staged }) if staged >= MIN_VERTICES => P::Closing,
        (P::Active, E::Close { .. }) => P::Active,
        (P::Closing, E::Commit) => P::Committed,
        (P::Active, E::Cancel) => P::Cancelled,
        (P::Committed | P::Cancelled, E::Settle) => P::Idle,
        (current, _) => current,
    }
}

/// Gestufter Eckpunkt (Wertetyp, ohne ID).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagedVertex {
    pub position: Vec2,
    pub cp1: Vec2,
    pub cp2: Vec2,
}

impl StagedVertex {
    /// Eckpunkt mit geraden Kanten.
    pub fn straight(position: Vec2) -> Self {
        Self {
            position,
            cp1: position,
            cp2: position,
        }
    }
}

/// Polygon-Session: gestufte Eckpunkte plus Darstellungsattribute.
#[derive(Debug, Clone)]
pub struct PolygonSession {
    pub(crate) phase: PolygonPhase,
    pub(crate) points: Vec<StagedVertex>,
    /// Attribute des entstehenden Polygons
    pub style: PolygonStyle,
    pub(crate) hover: Option<Vec2>,
}

impl PolygonSession {
    /// Erstellt eine leere Session.
    pub fn new(style: PolygonStyle) -> Self {
        Self {
            phase: PolygonPhase::Idle,
            points: Vec::new(),
            style,
            hover: None,
        }
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> PolygonPhase {
        self.phase
    }

    /// Gestufte Eckpunkte in Reihenfolge
    pub fn points(&self) -> &[StagedVertex] {
        &self.points
    }

    pub(crate) fn apply(&mut self, event: PolygonEvent) {
        self.phase = transition(self.phase, event);
    }
}

impl Default for PolygonSession {
    fn default() -> Self {
        Self::new(PolygonStyle::default())
    }
}
