//! Store für Polygone in Einfügereihenfolge (spätere liegen oben).

use super::polygon::{Polygon, PolygonStyle, PolygonVertex, MIN_VERTICES};
use glam::Vec2;
use indexmap::IndexMap;

/// Welcher Handle eines Eckpunkts gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSlot {
    /// Eingehender Handle
    Cp1,
    /// Ausgehender Handle
    Cp2,
}

/// Besitzt alle Polygone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonStore {
    polygons: IndexMap<u64, Polygon>,
}

impl PolygonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u64) -> Option<&Polygon> {
        self.polygons.get(&id)
    }

    /// Iterator in Zeichenreihenfolge (unten zuerst).
    pub fn iter(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.values()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn next_polygon_id(&self) -> u64 {
        self.polygons.keys().max().copied().unwrap_or(0) + 1
    }

    /// Nächste freie Eckpunkt-ID über alle Polygone.
    pub fn next_vertex_id(&self) -> u64 {
        self.polygons
            .values()
            .flat_map(|p| p.points.iter().map(|v| v.id))
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Legt ein Polygon aus Eckpunkten an (Position plus `cp1`/`cp2`).
    ///
    /// Vergibt Polygon- und Eckpunkt-IDs. Weniger als 3 Eckpunkte werden abgelehnt.
    pub fn add(
        &mut self,
        vertices: &[(Vec2, Vec2, Vec2)],
        style: PolygonStyle,
        meters_per_pixel: f32,
    ) -> Option<u64> {
        if vertices.len() < MIN_VERTICES {
            log::warn!(
                "Polygon mit {} Eckpunkt(en) abgelehnt (mindestens {})",
                vertices.len(),
                MIN_VERTICES
            );
            return None;
        }
        let id = self.next_polygon_id();
        let first_vertex_id = self.next_vertex_id();
        let points = vertices
            .iter()
            .enumerate()
            .map(|(i, &(position, cp1, cp2))| PolygonVertex {
                id: first_vertex_id + i as u64,
                position,
                cp1,
                cp2,
            })
            .collect();
        self.polygons
            .insert(id, Polygon::new(id, points, style, meters_per_pixel));
        Some(id)
    }

    /// Übernimmt ein Polygon unverändert (Laden aus Snapshot).
    pub fn insert(&mut self, polygon: Polygon) {
        self.polygons.insert(polygon.id, polygon);
    }

    pub fn remove(&mut self, id: u64) -> Option<Polygon> {
        let removed = self.polygons.shift_remove(&id);
        if removed.is_none() {
            log::debug!("Polygon {} existiert nicht", id);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Verschiebt einen Eckpunkt; seine Handles folgen. Fläche wird neu berechnet.
    pub fn move_vertex(
        &mut self,
        polygon_id: u64,
        vertex_id: u64,
        position: Vec2,
        meters_per_pixel: f32,
    ) -> bool {
        let Some(polygon) = self.polygons.get_mut(&polygon_id) else {
            return false;
        };
        let Some(vertex) = polygon.vertex_mut(vertex_id) else {
            return false;
        };
        vertex.move_to(position);
        polygon.recompute_area(meters_per_pixel);
        true
    }

    /// Verschiebt das ganze Polygon.
    pub fn translate(&mut self, polygon_id: u64, delta: Vec2) -> bool {
        let Some(polygon) = self.polygons.get_mut(&polygon_id) else {
            return false;
        };
        polygon.translate(delta);
        true
    }

    /// Setzt nur den gewählten Handle, die Eckpunkt-Position bleibt.
    pub fn set_handle(
        &mut self,
        polygon_id: u64,
        vertex_id: u64,
        slot: HandleSlot,
        position: Vec2,
    ) -> bool {
        let Some(vertex) = self
            .polygons
            .get_mut(&polygon_id)
            .and_then(|p| p.vertex_mut(vertex_id))
        else {
            return false;
        };
        match slot {
            HandleSlot::Cp1 => vertex.cp1 = position,
            HandleSlot::Cp2 => vertex.cp2 = position,
        }
        true
    }

    /// Entfernt einen Eckpunkt, sofern danach noch mindestens 3 übrig bleiben.
    pub fn remove_vertex(&mut self, polygon_id: u64, vertex_id: u64, meters_per_pixel: f32) -> bool {
        let Some(polygon) = self.polygons.get_mut(&polygon_id) else {
            return false;
        };
        if polygon.points.len() <= MIN_VERTICES {
            log::warn!(
                "Eckpunkt {} nicht gelöscht: Polygon {} hätte weniger als {} Eckpunkte",
                vertex_id,
                polygon_id,
                MIN_VERTICES
            );
            return false;
        }
        let before = polygon.points.len();
        polygon.points.retain(|v| v.id != vertex_id);
        if polygon.points.len() == before {
            return false;
        }
        polygon.recompute_area(meters_per_pixel);
        true
    }

    pub fn set_fill_color(&mut self, polygon_id: u64, color: &str) -> bool {
        self.with_polygon(polygon_id, |p| p.fill_color = color.to_string())
    }

    pub fn set_stroke_color(&mut self, polygon_id: u64, color: &str) -> bool {
        self.with_polygon(polygon_id, |p| p.stroke_color = color.to_string())
    }

    /// Deckkraft wird auf `[0, 1]` geklemmt.
    pub fn set_opacity(&mut self, polygon_id: u64, opacity: f32) -> bool {
        self.with_polygon(polygon_id, |p| p.opacity = opacity.clamp(0.0, 1.0))
    }

    pub fn rename(&mut self, polygon_id: u64, name: Option<String>) -> bool {
        self.with_polygon(polygon_id, |p| {
            p.name = name.filter(|n| !n.trim().is_empty())
        })
    }

    /// Oberstes Polygon, dessen Inneres den Punkt enthält.
    pub fn polygon_at(&self, point: Vec2) -> Option<u64> {
        self.polygons
            .values()
            .rev()
            .find(|p| p.contains(point))
            .map(|p| p.id)
    }

    /// Berechnet alle Flächen neu (z.B. nach Änderung des Maßstabs).
    pub fn recompute_all_areas(&mut self, meters_per_pixel: f32) {
        for polygon in self.polygons.values_mut() {
            polygon.recompute_area(meters_per_pixel);
        }
    }

    fn with_polygon(&mut self, polygon_id: u64, f: impl FnOnce(&mut Polygon)) -> bool {
        match self.polygons.get_mut(&polygon_id) {
            Some(polygon) => {
                f(polygon);
                true
            }
            None => {
                log::debug!("Polygon {} existiert nicht", polygon_id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight(p: Vec2) -> (Vec2, Vec2, Vec2) {
        (p, p, p)
    }

    fn store_with_square() -> (PolygonStore, u64) {
        let mut store = PolygonStore::new();
        let id = store
            .add(
                &[
                    straight(Vec2::new(0.0, 0.0)),
                    straight(Vec2::new(10.0, 0.0)),
                    straight(Vec2::new(10.0, 10.0)),
                    straight(Vec2::new(0.0, 10.0)),
                ],
                PolygonStyle::default(),
                1.0,
            )
            .expect("Polygon erwartet");
        (store, id)
    }

    #[test]
    fn add_rejects_too_few_vertices() {
        let mut store = PolygonStore::new();
        let result = store.add(
            &[straight(Vec2::ZERO), straight(Vec2::ONE)],
            PolygonStyle::default(),
            1.0,
        );
        assert!(result.is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn vertex_ids_are_unique_across_polygons() {
        let (mut store, first) = store_with_square();
        let second = store
            .add(
                &[
                    straight(Vec2::new(20.0, 0.0)),
                    straight(Vec2::new(30.0, 0.0)),
                    straight(Vec2::new(25.0, 5.0)),
                ],
                PolygonStyle::default(),
                1.0,
            )
            .expect("Polygon erwartet");
        let first_ids: Vec<u64> = store.get(first).expect("erstes").points.iter().map(|v| v.id).collect();
        let second_ids: Vec<u64> = store.get(second).expect("zweites").points.iter().map(|v| v.id).collect();
        assert_eq!(first_ids, vec![1, 2, 3, 4]);
        assert_eq!(second_ids, vec![5, 6, 7]);
    }

    #[test]
    fn move_vertex_updates_area() {
        let (mut store, id) = store_with_square();
        assert!(store.move_vertex(id, 3, Vec2::new(10.0, 20.0), 1.0));
        // Trapez: (10 + 20) / 2 * 10
        assert_relative_eq!(store.get(id).expect("Polygon").area.expect("Fläche"), 150.0);
    }

    #[test]
    fn set_handle_keeps_position() {
        let (mut store, id) = store_with_square();
        assert!(store.set_handle(id, 1, HandleSlot::Cp2, Vec2::new(3.0, -3.0)));
        let vertex = *store.get(id).expect("Polygon").vertex(1).expect("Eckpunkt");
        assert_eq!(vertex.position, Vec2::ZERO);
        assert_eq!(vertex.cp1, Vec2::ZERO);
        assert_eq!(vertex.cp2, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn remove_vertex_keeps_minimum() {
        let (mut store, id) = store_with_square();
        assert!(store.remove_vertex(id, 4, 1.0));
        assert_relative_eq!(store.get(id).expect("Polygon").area.expect("Fläche"), 50.0);
        assert!(!store.remove_vertex(id, 3, 1.0));
        assert_eq!(store.get(id).expect("Polygon").points.len(), 3);
    }

    #[test]
    fn polygon_at_prefers_topmost() {
        let (mut store, bottom) = store_with_square();
        let top = store
            .add(
                &[
                    straight(Vec2::new(5.0, 5.0)),
                    straight(Vec2::new(15.0, 5.0)),
                    straight(Vec2::new(15.0, 15.0)),
                ],
                PolygonStyle::default(),
                1.0,
            )
            .expect("Polygon erwartet");
        assert_eq!(store.polygon_at(Vec2::new(9.0, 6.0)), Some(top));
        assert_eq!(store.polygon_at(Vec2::new(2.0, 2.0)), Some(bottom));
        assert_eq!(store.polygon_at(Vec2::new(50.0, 50.0)), None);
    }

    #[test]
    fn opacity_is_clamped() {
        let (mut store, id) = store_with_square();
        store.set_opacity(id, 3.0);
        assert_eq!(store.get(id).expect("Polygon").opacity, 1.0);
        assert!(!store.set_opacity(99, 0.5));
    }
}
