//! Use-Case: Selektiertes Objekt löschen.

use crate::app::{AppState, Selection};
use crate::core::MIN_VERTICES;

/// Löscht die aktuelle Selektion.
///
/// - Node: kaskadiert über alle gebundenen Straßen
/// - Straße, Polygon: direkt
/// - Polygon-Eckpunkt: nur wenn das Polygon vorher mindestens 4 Eckpunkte hat
pub fn delete_selected(state: &mut AppState) {
    match state.selection.selected {
        Selection::None => {
            log::debug!("Nichts zum Löschen selektiert");
        }
        Selection::Node(id) => {
            if !state.road_map.contains_node(id) {
                state.selection.clear();
                return;
            }
            state.record_undo_snapshot();
            state.road_map_mut().delete_node(id);
            state.selection.clear();
            log::info!("Node {} gelöscht", id);
        }
        Selection::Road(id) => {
            if state.road_map.road(id).is_none() {
                state.selection.clear();
                return;
            }
            state.record_undo_snapshot();
            state.road_map_mut().delete_road(id);
            state.selection.clear();
            log::info!("Straße {} gelöscht", id);
        }
        Selection::Polygon(id) => {
            if state.polygons.get(id).is_none() {
                state.selection.clear();
                return;
            }
            state.record_undo_snapshot();
            state.polygons_mut().remove(id);
            state.selection.clear();
            log::info!("Polygon {} gelöscht", id);
        }
        Selection::PolygonVertex {
            polygon_id,
            vertex_id,
        } => {
            let Some(polygon) = state.polygons.get(polygon_id) else {
                state.selection.clear();
                return;
            };
            if polygon.vertex(vertex_id).is_none() {
                state.selection.selected = Selection::Polygon(polygon_id);
                return;
            }
            if polygon.points.len() <= MIN_VERTICES {
                log::warn!(
                    "Eckpunkt {} nicht gelöscht: Polygon {} braucht mindestens {} Eckpunkte",
                    vertex_id,
                    polygon_id,
                    MIN_VERTICES
                );
                return;
            }
            state.record_undo_snapshot();
            let mpp = state.options.meters_per_pixel;
            state
                .polygons_mut()
                .remove_vertex(polygon_id, vertex_id, mpp);
            state.selection.selected = Selection::Polygon(polygon_id);
            log::info!("Eckpunkt {} aus Polygon {} gelöscht", vertex_id, polygon_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PolygonStyle, RoadKind};
    use glam::Vec2;

    fn add_polygon(state: &mut AppState, corners: &[(f32, f32)]) -> u64 {
        let vertices: Vec<_> = corners
            .iter()
            .map(|&(x, y)| {
                let p = Vec2::new(x, y);
                (p, p, p)
            })
            .collect();
        state
            .polygons_mut()
            .add(&vertices, PolygonStyle::default(), 1.0)
            .expect("Polygon erwartet")
    }

    #[test]
    fn deleting_node_cascades_roads() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::ZERO);
        let b = state.road_map_mut().add_node(Vec2::X * 10.0);
        state.road_map_mut().connect(a, b, RoadKind::Straight, 4.0);
        state.selection.selected = Selection::Node(a);

        delete_selected(&mut state);

        assert_eq!(state.node_count(), 1);
        assert_eq!(state.road_count(), 0);
        assert_eq!(state.selection.selected, Selection::None);
        let remaining = state.road_map.node(b).expect("Node erwartet");
        assert!(remaining.is_isolated());
    }

    #[test]
    fn triangle_vertex_is_not_deleted() {
        let mut state = AppState::new();
        let id = add_polygon(&mut state, &[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]);
        let vertex_id = state.polygons.get(id).expect("Polygon erwartet").points[0].id;
        state.selection.selected = Selection::PolygonVertex {
            polygon_id: id,
            vertex_id,
        };

        delete_selected(&mut state);

        assert_eq!(state.polygons.get(id).expect("Polygon erwartet").points.len(), 3);
        assert!(!state.can_undo());
    }

    #[test]
    fn square_vertex_is_deleted_and_polygon_stays_selected() {
        let mut state = AppState::new();
        let id = add_polygon(
            &mut state,
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        );
        let vertex_id = state.polygons.get(id).expect("Polygon erwartet").points[2].id;
        state.selection.selected = Selection::PolygonVertex {
            polygon_id: id,
            vertex_id,
        };

        delete_selected(&mut state);

        let polygon = state.polygons.get(id).expect("Polygon erwartet");
        assert_eq!(polygon.points.len(), 3);
        assert_eq!(state.selection.selected, Selection::Polygon(id));
    }

    #[test]
    fn nothing_selected_records_no_undo() {
        let mut state = AppState::new();

        delete_selected(&mut state);

        assert!(!state.can_undo());
    }
}
