//! Straße: gerichtetes Kurvensegment zwischen zwei Endpunkten.

use super::geometry::{implicit_quadratic_control, CurveSegment};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kurvenfamilie einer Straße.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadKind {
    /// Gerade Strecke
    #[default]
    Straight,
    /// Quadratische Kurve mit implizitem Kontrollpunkt
    Quadratic,
    /// Vollkreis: `start` = Mittelpunkt, `|start→end|` = Radius
    Circle,
    /// Kubische Kurve mit zwei Handles
    Cubic,
}

/// Eine Straße zwischen zwei Endpunkten, optional an Nodes gebunden.
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    /// Eindeutige ID
    pub id: u64,
    /// Startpunkt (bei Kreis: Mittelpunkt)
    pub start: Vec2,
    /// Endpunkt (bei Kreis: Punkt auf dem Umfang)
    pub end: Vec2,
    /// Gebundener Start-Node
    pub start_node_id: Option<u64>,
    /// Gebundener End-Node
    pub end_node_id: Option<u64>,
    /// Kurvenfamilie
    pub kind: RoadKind,
    /// Straßenbreite in Welteinheiten
    pub width: f32,
    /// Optionaler Anzeigename
    pub name: Option<String>,
    /// Handles für kubische Straßen: `[0]` gehört zum Start, `[1]` zum Ende
    pub control_points: Option<[Vec2; 2]>,
}

impl Road {
    /// Erstellt eine ungebundene Straße. Kubische Straßen erhalten Standard-Handles.
    pub fn new(id: u64, start: Vec2, end: Vec2, kind: RoadKind, width: f32) -> Self {
        let control_points = match kind {
            RoadKind::Cubic => Some(Self::default_control_points(start, end)),
            _ => None,
        };
        Self {
            id,
            start,
            end,
            start_node_id: None,
            end_node_id: None,
            kind,
            width,
            name: None,
            control_points,
        }
    }

    /// Standard-Handles bei 1/3 und 2/3 der Sehne (ergibt eine gerade Kurve).
    pub fn default_control_points(start: Vec2, end: Vec2) -> [Vec2; 2] {
        [start.lerp(end, 1.0 / 3.0), start.lerp(end, 2.0 / 3.0)]
    }

    /// Radius einer Kreis-Straße (für andere Typen die Sehnenlänge).
    pub fn radius(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Beschreibung als Kurvensegment für den Geometrie-Kernel.
    pub fn segment(&self) -> CurveSegment {
        match self.kind {
            RoadKind::Straight => CurveSegment::Line {
                start: self.start,
                end: self.end,
            },
            RoadKind::Quadratic => CurveSegment::Quadratic {
                start: self.start,
                control: implicit_quadratic_control(self.start, self.end),
                end: self.end,
            },
            RoadKind::Cubic => {
                let [cp1, cp2] = self
                    .control_points
                    .unwrap_or_else(|| Self::default_control_points(self.start, self.end));
                CurveSegment::Cubic {
                    start: self.start,
                    cp1,
                    cp2,
                    end: self.end,
                }
            }
            RoadKind::Circle => {
                let offset = self.end - self.start;
                CurveSegment::Circle {
                    center: self.start,
                    radius: offset.length(),
                    start_angle: offset.y.atan2(offset.x),
                }
            }
        }
    }

    /// Weltposition bei `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.segment().point_at(t)
    }

    /// Normierte Tangente bei `t`.
    pub fn tangent_at(&self, t: f32) -> Vec2 {
        self.segment().tangent_at(t)
    }

    /// Länge in Welteinheiten (Kurven über 20 Abtastschritte).
    pub fn length(&self) -> f32 {
        self.segment().length()
    }

    /// Abstand eines Punkts zur Straßenmittellinie.
    pub fn distance_to(&self, p: Vec2) -> f32 {
        self.segment().distance_to(p)
    }

    /// Treffer, wenn der Abstand höchstens halbe Breite plus Toleranz (Welteinheiten) beträgt.
    pub fn is_hit(&self, p: Vec2, tolerance_world: f32) -> bool {
        self.distance_to(p) <= self.width * 0.5 + tolerance_world
    }

    /// Prüft, ob die Straße an den Node gebunden ist.
    pub fn touches_node(&self, node_id: u64) -> bool {
        self.start_node_id == Some(node_id) || self.end_node_id == Some(node_id)
    }

    /// Überträgt eine neue Node-Position auf alle gebundenen Endpunkte.
    ///
    /// Handles gebundener Endpunkte wandern mit, damit die Kurvenform erhalten bleibt.
    /// Ein ungebundener Kreis-Umfangspunkt folgt dem Mittelpunkt (Radius bleibt).
    pub(crate) fn follow_node(&mut self, node_id: u64, position: Vec2) {
        if self.start_node_id == Some(node_id) {
            let delta = position - self.start;
            self.start = position;
            if let Some(cps) = self.control_points.as_mut() {
                cps[0] += delta;
            }
            if self.kind == RoadKind::Circle && self.end_node_id.is_none() {
                self.end += delta;
            }
        }
        if self.end_node_id == Some(node_id) {
            let delta = position - self.end;
            self.end = position;
            if let Some(cps) = self.control_points.as_mut() {
                cps[1] += delta;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cubic_gets_default_handles() {
        let road = Road::new(1, Vec2::ZERO, Vec2::new(30.0, 0.0), RoadKind::Cubic, 4.0);
        let cps = road.control_points.expect("Handles erwartet");
        assert_relative_eq!(cps[0].x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(cps[1].x, 20.0, epsilon = 1e-5);
        assert_relative_eq!(road.length(), 30.0, epsilon = 1e-3);
    }

    #[test]
    fn straight_road_has_no_handles() {
        let road = Road::new(1, Vec2::ZERO, Vec2::new(3.0, 4.0), RoadKind::Straight, 2.0);
        assert!(road.control_points.is_none());
        assert_relative_eq!(road.length(), 5.0);
    }

    #[test]
    fn hit_uses_half_width_plus_tolerance() {
        let road = Road::new(1, Vec2::ZERO, Vec2::new(100.0, 0.0), RoadKind::Straight, 10.0);
        assert!(road.is_hit(Vec2::new(50.0, 7.0), 3.0));
        assert!(!road.is_hit(Vec2::new(50.0, 8.5), 3.0));
    }

    #[test]
    fn circle_uses_start_as_center() {
        let road = Road::new(1, Vec2::new(5.0, 5.0), Vec2::new(15.0, 5.0), RoadKind::Circle, 2.0);
        assert_relative_eq!(road.radius(), 10.0);
        let p = road.point_at(0.0);
        assert_relative_eq!(p.x, 15.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 5.0, epsilon = 1e-4);
        // Mittelpunkt ist nicht auf der Straße
        assert!(!road.is_hit(Vec2::new(5.0, 5.0), 1.0));
    }

    #[test]
    fn follow_node_moves_bound_handle() {
        let mut road = Road::new(1, Vec2::ZERO, Vec2::new(30.0, 0.0), RoadKind::Cubic, 4.0);
        road.start_node_id = Some(7);
        road.follow_node(7, Vec2::new(0.0, 10.0));
        assert_eq!(road.start, Vec2::new(0.0, 10.0));
        let cps = road.control_points.expect("Handles erwartet");
        assert_relative_eq!(cps[0].y, 10.0, epsilon = 1e-5);
        assert_relative_eq!(cps[1].y, 0.0, epsilon = 1e-5);
    }
}
