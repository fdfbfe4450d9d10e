//! Geschlossene Regionen mit Bézier-Handles pro Eckpunkt.

use super::geometry::{point_in_polygon, shoelace_area, CurveSegment};
use glam::Vec2;

/// Mindestanzahl Eckpunkte eines Polygons.
pub const MIN_VERTICES: usize = 3;

/// Standard-Füllfarbe neuer Polygone.
pub const DEFAULT_FILL_COLOR: &str = "#4caf5080";
/// Standard-Randfarbe neuer Polygone.
pub const DEFAULT_STROKE_COLOR: &str = "#2e7d32";

/// Eckpunkt eines Polygons.
///
/// `cp1` steuert die eingehende, `cp2` die ausgehende Kante.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonVertex {
    pub id: u64,
    pub position: Vec2,
    pub cp1: Vec2,
    pub cp2: Vec2,
}

impl PolygonVertex {
    /// Eckpunkt mit geraden Kanten (beide Handles auf der Position).
    pub fn new(id: u64, position: Vec2) -> Self {
        Self {
            id,
            position,
            cp1: position,
            cp2: position,
        }
    }

    /// Verschiebt Eckpunkt samt Handles.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        self.cp1 += delta;
        self.cp2 += delta;
    }

    /// Setzt die Position; Handles folgen um dasselbe Delta.
    pub fn move_to(&mut self, position: Vec2) {
        self.translate(position - self.position);
    }
}

/// Darstellungsattribute eines Polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    pub fill_color: String,
    pub stroke_color: String,
    /// Deckkraft in `[0, 1]`
    pub opacity: f32,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            opacity: 0.5,
        }
    }
}

/// Geschlossene Region
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub id: u64,
    pub name: Option<String>,
    /// Eckpunkte in Umlaufreihenfolge (mindestens 3)
    pub points: Vec<PolygonVertex>,
    pub fill_color: String,
    pub stroke_color: String,
    pub opacity: f32,
    /// Fläche in Quadratmetern (Shoelace über Eckpunkte × mpp²)
    pub area: Option<f32>,
}

impl Polygon {
    /// Erstellt ein Polygon; die Fläche wird sofort berechnet.
    pub fn new(
        id: u64,
        points: Vec<PolygonVertex>,
        style: PolygonStyle,
        meters_per_pixel: f32,
    ) -> Self {
        let mut polygon = Self {
            id,
            name: None,
            points,
            fill_color: style.fill_color,
            stroke_color: style.stroke_color,
            opacity: style.opacity.clamp(0.0, 1.0),
            area: None,
        };
        polygon.recompute_area(meters_per_pixel);
        polygon
    }

    /// Kante `index` vom Eckpunkt `index` zum nächsten (zyklisch).
    ///
    /// Liegen beide beteiligten Handles auf ihren Eckpunkten, ist die Kante gerade.
    pub fn edge(&self, index: usize) -> Option<CurveSegment> {
        let n = self.points.len();
        if n < 2 || index >= n {
            return None;
        }
        let from = &self.points[index];
        let to = &self.points[(index + 1) % n];
        if from.cp2 == from.position && to.cp1 == to.position {
            Some(CurveSegment::Line {
                start: from.position,
                end: to.position,
            })
        } else {
            Some(CurveSegment::Cubic {
                start: from.position,
                cp1: from.cp2,
                cp2: to.cp1,
                end: to.position,
            })
        }
    }

    /// Geschlossene Umrisslinie inklusive abgetasteter Kurvenkanten.
    pub fn outline(&self) -> Vec<Vec2> {
        let mut outline = Vec::new();
        for index in 0..self.points.len() {
            if let Some(edge) = self.edge(index) {
                let samples = edge.sample_points();
                // Endpunkt jeder Kante ist Startpunkt der nächsten
                outline.extend_from_slice(&samples[..samples.len() - 1]);
            }
        }
        outline
    }

    /// Gerade-Ungerade-Test gegen die (gekrümmte) Umrisslinie.
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_polygon(point, &self.outline())
    }

    /// Nur die Eckpunkt-Positionen.
    pub fn vertex_positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|v| v.position).collect()
    }

    /// Berechnet die Fläche neu (Handles werden ignoriert).
    pub fn recompute_area(&mut self, meters_per_pixel: f32) {
        self.area = if self.points.len() >= MIN_VERTICES {
            Some(shoelace_area(&self.vertex_positions()) * meters_per_pixel * meters_per_pixel)
        } else {
            None
        };
    }

    /// Verschiebt alle Eckpunkte und Handles.
    pub fn translate(&mut self, delta: Vec2) {
        for vertex in &mut self.points {
            vertex.translate(delta);
        }
    }

    /// Eckpunkt per ID
    pub fn vertex(&self, vertex_id: u64) -> Option<&PolygonVertex> {
        self.points.iter().find(|v| v.id == vertex_id)
    }

    pub(crate) fn vertex_mut(&mut self, vertex_id: u64) -> Option<&mut PolygonVertex> {
        self.points.iter_mut().find(|v| v.id == vertex_id)
    }

    /// Nächster Eckpunkt innerhalb von `radius`.
    pub fn vertex_near(&self, point: Vec2, radius: f32) -> Option<u64> {
        self.points
            .iter()
            .map(|v| (v.id, v.position.distance(point)))
            .filter(|(_, dist)| *dist <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}
