//! Lifecycle-Methoden der Build-Session (Punkt setzen, zurücknehmen, abschließen).

use super::super::ConstructionSession;
use super::state::{BuildEvent, BuildPhase, BuildSession, StagedPoint};
use super::BuildResult;
use crate::core::SnapResult;
use glam::Vec2;

impl BuildSession {
    /// Stuft einen bereits gesnappten Punkt.
    ///
    /// Ein Punkt, der auf denselben Node wie der letzte gestufte Punkt einrastet
    /// oder exakt auf ihm liegt, wird ignoriert. Gibt `true` zurück, wenn gestuft wurde.
    pub fn add_point(&mut self, snap: &SnapResult) -> bool {
        let point = StagedPoint::from_snap(snap);

        if let Some(last) = self.points.last() {
            let same_node = last.node_id().is_some() && last.node_id() == point.node_id();
            if same_node || last.position == point.position {
                log::debug!("Build: Punkt identisch mit letztem Punkt, ignoriert");
                return false;
            }
        }

        let event = if self.phase == BuildPhase::Idle {
            BuildEvent::Start
        } else {
            BuildEvent::AddPoint
        };
        self.apply(event);
        if self.phase != BuildPhase::Active {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Entfernt den zuletzt gestuften Punkt; der letzte führt zurück nach `Idle`.
    pub fn remove_last(&mut self) -> Option<StagedPoint> {
        if self.phase != BuildPhase::Active {
            return None;
        }
        let removed = self.points.pop()?;
        self.apply(BuildEvent::RemoveLast {
            remaining: self.points.len(),
        });
        Some(removed)
    }

    /// Schließt die Session ab und gibt das Ergebnis als reine Daten zurück.
    ///
    /// Mit weniger als zwei Punkten wird abgelehnt und die Session bleibt aktiv.
    pub fn complete(&mut self) -> Option<BuildResult> {
        self.apply(BuildEvent::Complete {
            staged: self.points.len(),
        });
        if self.phase != BuildPhase::Completing {
            if self.phase == BuildPhase::Active {
                log::warn!(
                    "Build: Abschluss abgelehnt, nur {} Punkt(e) gestuft",
                    self.points.len()
                );
            }
            return None;
        }

        let result = BuildResult {
            points: std::mem::take(&mut self.points),
            road_kind: self.road_kind,
            road_width: self.road_width,
        };
        self.hover = None;
        self.apply(BuildEvent::Settle);
        Some(result)
    }

    /// Verwirft alle gestuften Punkte.
    pub fn abort(&mut self) {
        self.apply(BuildEvent::Cancel);
        if self.phase == BuildPhase::Cancelled {
            self.points.clear();
            self.hover = None;
            self.apply(BuildEvent::Settle);
        }
    }
}

impl ConstructionSession for BuildSession {
    fn name(&self) -> &str {
        "Straße bauen"
    }

    fn status_text(&self) -> &str {
        match self.points.len() {
            0 => "Startpunkt klicken",
            1 => "Nächsten Punkt klicken",
            _ => "Weitere Punkte klicken, Enter schließt ab, Escape bricht ab",
        }
    }

    fn is_active(&self) -> bool {
        self.phase == BuildPhase::Active
    }

    fn staged_count(&self) -> usize {
        self.points.len()
    }

    fn staged_positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    fn remove_last_point(&mut self) -> bool {
        self.remove_last().is_some()
    }

    fn cancel(&mut self) {
        self.abort();
    }

    fn set_hover(&mut self, position: Option<Vec2>) {
        self.hover = position;
    }

    fn rubber_band(&self) -> Option<(Vec2, Vec2)> {
        let last = self.points.last()?;
        Some((last.position, self.hover?))
    }
}
