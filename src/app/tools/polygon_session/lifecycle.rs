//! Lifecycle-Methoden der Polygon-Session (Klick, Schließen, Zurücknehmen).

use super::super::ConstructionSession;
use super::state::{PolygonEvent, PolygonPhase, PolygonSession, StagedVertex};
use super::{PolygonClick, PolygonDraft};
use crate::core::MIN_VERTICES;
use glam::Vec2;

impl PolygonSession {
    /// Verarbeitet einen Klick an einer (bereits gerasterten) Weltposition.
    ///
    /// Bei mindestens drei gestuften Eckpunkten schließt ein Klick innerhalb von
    /// `close_radius` um den ersten Eckpunkt das Polygon.
    pub fn click(&mut self, position: Vec2, close_radius: f32) -> PolygonClick {
        if self.points.len() >= MIN_VERTICES {
            let first = self.points[0].position;
            if first.distance(position) <= close_radius {
                return match self.close() {
                    Some(draft) => PolygonClick::Closed(draft),
                    None => PolygonClick::Ignored,
                };
            }
        }

        if self.points.last().is_some_and(|last| last.position == position) {
            log::debug!("Polygon: Eckpunkt identisch mit letztem Eckpunkt, ignoriert");
            return PolygonClick::Ignored;
        }

        let event = if self.phase == PolygonPhase::Idle {
            PolygonEvent::Start
        } else {
            PolygonEvent::AddVertex
        };
        self.apply(event);
        if self.phase != PolygonPhase::Active {
            return PolygonClick::Ignored;
        }
        self.points.push(StagedVertex::straight(position));
        PolygonClick::Added
    }

    /// Schließt das Polygon explizit (Enter).
    ///
    /// Mit weniger als drei Eckpunkten wird abgelehnt und die Session bleibt aktiv.
    pub fn close(&mut self) -> Option<PolygonDraft> {
        self.apply(PolygonEvent::Close {
            staged: self.points.len(),
        });
        if self.phase != PolygonPhase::Closing {
            if self.phase == PolygonPhase::Active {
                log::warn!(
                    "Polygon: Schließen abgelehnt, nur {} Eckpunkt(e) gestuft",
                    self.points.len()
                );
            }
            return None;
        }

        let draft = PolygonDraft {
            vertices: std::mem::take(&mut self.points),
            style: self.style.clone(),
        };
        self.apply(PolygonEvent::Commit);
        self.hover = None;
        self.apply(PolygonEvent::Settle);
        Some(draft)
    }

    /// Entfernt den zuletzt gestuften Eckpunkt.
    pub fn remove_last(&mut self) -> Option<StagedVertex> {
        if self.phase != PolygonPhase::Active {
            return None;
        }
        let removed = self.points.pop()?;
        self.apply(PolygonEvent::RemoveLast {
            remaining: self.points.len(),
        });
        Some(removed)
    }

    /// Verwirft alle gestuften Eckpunkte.
    pub fn abort(&mut self) {
        self.apply(PolygonEvent::Cancel);
        if self.phase == PolygonPhase::Cancelled {
            self.points.clear();
            self.hover = None;
            self.apply(PolygonEvent::Settle);
        }
    }
}

impl ConstructionSession for PolygonSession {
    fn name(&self) -> &str {
        "Polygon zeichnen"
    }

    fn status_text(&self) -> &str {
        if self.points.len() < MIN_VERTICES {
            "Eckpunkte klicken"
        } else {
            "Ersten Eckpunkt klicken oder Enter zum Schließen"
        }
    }

    fn is_active(&self) -> bool {
        self.phase == PolygonPhase::Active
    }

    fn staged_count(&self) -> usize {
        self.points.len()
    }

    fn staged_positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|v| v.position).collect()
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
