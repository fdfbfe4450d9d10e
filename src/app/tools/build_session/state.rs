//! Zustandsmaschine und State-Definitionen der Build-Session.

use crate::core::{RoadKind, SnapResult, SnapTarget};
use glam::Vec2;

/// Phase der Build-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildPhase {
    /// Keine Punkte gestuft
    #[default]
    Idle,
    /// Mindestens ein Punkt gestuft
    Active,
    /// Abschluss läuft, Ergebnis wird übergeben
    Completing,
    /// Abbruch läuft, gestufte Punkte werden verworfen
    Cancelled,
}

/// Ereignisse der Build-Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent {
    /// Erster Punkt gesetzt
    Start,
    /// Weiterer Punkt gesetzt
    AddPoint,
    /// Letzter Punkt entfernt; `remaining` = danach verbleibende Punkte
    RemoveLast { remaining: usize },
    /// Abschluss angefordert mit `staged` gestuften Punkten
    Complete { staged: usize },
    /// Abbruch angefordert
    Cancel,
    /// Übergangsphase beendet
    Settle,
}

/// Reine Übergangsfunktion `(Phase, Ereignis) → Phase`.
///
/// Unzulässige Kombinationen lassen die Phase unverändert.
pub fn transition(phase: BuildPhase, event: BuildEvent) -> BuildPhase {
    use BuildEvent as E;
    use BuildPhase as P;
    match (phase, event) {
        (P::Idle, E::Start) => P::Active,
        (P::Active, E::AddPoint) => P::Active,
        (P::Active, E::RemoveLast { remaining: 0 }) => P::Idle,
        (P::Active, E::RemoveLast { .. }) => P::Active,
        (P::Active, E::Complete { staged }) if staged >= 2 => P::Completing,
        (P::Active, E::Complete { .. }) => P::Active,
        (P::Active, E::Cancel) => P::Cancelled,
        (P::Completing | P::Cancelled, E::Settle) => P::Idle,
        (current, _) => current,
    }
}

/// Herkunft eines gestuften Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedAnchor {
    /// Existierender Node wird wiederverwendet
    ExistingNode(u64),
    /// Punkt auf einer Straße; Teilung erfolgt erst beim Abschluss
    OnRoad(u64),
    /// Neuer Node an freier Position
    NewPosition,
}

/// Gestufter Punkt (Wertetyp, nie im Store).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagedPoint {
    pub position: Vec2,
    pub anchor: StagedAnchor,
}

impl StagedPoint {
    /// Übernimmt ein Snap-Ergebnis.
    pub fn from_snap(snap: &SnapResult) -> Self {
        let anchor = match snap.target {
            SnapTarget::Node(id) => StagedAnchor::ExistingNode(id),
            SnapTarget::Road(id) => StagedAnchor::OnRoad(id),
            SnapTarget::Grid | SnapTarget::Free => StagedAnchor::NewPosition,
        };
        Self {
            position: snap.position,
            anchor,
        }
    }

    /// Node-ID, falls der Punkt einen existierenden Node referenziert.
    pub fn node_id(&self) -> Option<u64> {
        match self.anchor {
            StagedAnchor::ExistingNode(id) => Some(id),
            _ => None,
        }
    }
}

/// Build-Session: Kette gestufter Punkte, aus der beim Abschluss Straßen entstehen.
#[derive(Debug, Clone)]
pub struct BuildSession {
    pub(crate) phase: BuildPhase,
    pub(crate) points: Vec<StagedPoint>,
    /// Typ der zu erzeugenden Straßen
    pub road_kind: RoadKind,
    /// Breite der zu erzeugenden Straßen
    pub road_width: f32,
    pub(crate) hover: Option<Vec2>,
}

impl BuildSession {
    /// Erstellt eine leere Session.
    pub fn new(road_kind: RoadKind, road_width: f32) -> Self {
        Self {
            phase: BuildPhase::Idle,
            points: Vec::new(),
            road_kind,
            road_width,
            hover: None,
        }
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// Gestufte Punkte in Reihenfolge
    pub fn points(&self) -> &[StagedPoint] {
        &self.points
    }

    /// Node-ID des zuletzt gestuften Punkts (für den Snap-Ausschluss).
    pub fn last_node_id(&self) -> Option<u64> {
        self.points.last().and_then(StagedPoint::node_id)
    }

    pub(crate) fn apply(&mut self, event: BuildEvent) {
        self.phase = transition(self.phase, event);
    }
}

impl Default for BuildSession {
    fn default() -> Self {
        Self::new(RoadKind::Straight, crate::shared::options::DEFAULT_ROAD_WIDTH)
    }
}
