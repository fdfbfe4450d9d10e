//! Drag-Lebenszyklus: Pick → Drag-Start, Bewegung, Ende.

use super::pick::pick;
use crate::app::{AppState, DragState, DragTarget, HandleRef};
use glam::Vec2;

/// Verarbeitet einen Klick im Select-Werkzeug.
///
/// Setzt die Selektion nach Pick-Priorität und startet ggf. einen Drag.
/// Der Undo-Snapshot entsteht erst bei der ersten Bewegung.
pub fn pointer_down(
    state: &mut AppState,
    world_pos: Vec2,
    pick_radius: f32,
    handle_radius: f32,
    hit_tolerance: f32,
) {
    let result = pick(state, world_pos, pick_radius, handle_radius, hit_tolerance);

    if state.selection.selected != result.selection {
        log::debug!("Selektion: {:?}", result.selection);
    }
    state.selection.selected = result.selection;
    state.selection.drag = result.drag.map(|(target, anchor)| DragState {
        target,
        grab_offset: anchor - world_pos,
        last_world: world_pos,
        snapshot_taken: false,
    });
}

/// Setzt den laufenden Drag an der neuen Zeigerposition fort.
pub fn drag_to(state: &mut AppState, world_pos: Vec2) {
    let Some(drag) = state.selection.drag else {
        return;
    };
    if drag.last_world == world_pos {
        return;
    }

    if !drag.snapshot_taken {
        state.record_undo_snapshot();
    }

    let target_pos = world_pos + drag.grab_offset;
    let mpp = state.options.meters_per_pixel;
    match drag.target {
        DragTarget::Node(node_id) => {
            state.road_map_mut().move_node(node_id, target_pos);
        }
        DragTarget::PolygonVertex {
            polygon_id,
            vertex_id,
        } => {
            state
                .polygons_mut()
                .move_vertex(polygon_id, vertex_id, target_pos, mpp);
        }
        DragTarget::Polygon(polygon_id) => {
            state
                .polygons_mut()
                .translate(polygon_id, world_pos - drag.last_world);
        }
        DragTarget::Handle(HandleRef::Road { road_id, index }) => {
            state
                .road_map_mut()
                .set_control_point(road_id, index, target_pos);
        }
        DragTarget::Handle(HandleRef::Vertex {
            polygon_id,
            vertex_id,
            slot,
        }) => {
            state
                .polygons_mut()
                .set_handle(polygon_id, vertex_id, slot, target_pos);
        }
    }

    state.selection.drag = Some(DragState {
        last_world: world_pos,
        snapshot_taken: true,
        ..drag
    });
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    if let Some(drag) = state.selection.drag.take() {
        if drag.snapshot_taken {
            log::info!("Drag beendet: {:?}", drag.target);
        }
    }
}

/// Hebt Selektion und Drag auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Selection;
    use crate::core::{HandleSlot, PolygonStyle, RoadKind};
    use approx::assert_relative_eq;

    fn press(state: &mut AppState, pos: Vec2) {
        pointer_down(state, pos, 10.0, 8.0, 5.0);
    }

    #[test]
    fn dragging_node_moves_bound_roads() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::ZERO);
        let b = state.road_map_mut().add_node(Vec2::new(100.0, 0.0));
        let road = state
            .road_map_mut()
            .connect(a, b, RoadKind::Straight, 4.0)
            .expect("Straße erwartet");

        press(&mut state, Vec2::new(2.0, 1.0));
        drag_to(&mut state, Vec2::new(2.0, 51.0));
        end_drag(&mut state);

        let node = state.road_map.node(a).expect("Node erwartet");
        assert_eq!(node.position, Vec2::new(0.0, 50.0));
        let r = state.road_map.road(road).expect("Straße erwartet");
        assert_eq!(r.start, Vec2::new(0.0, 50.0));
        assert!(state.selection.drag.is_none());
    }

    #[test]
    fn click_without_motion_records_no_undo() {
        let mut state = AppState::new();
        state.road_map_mut().add_node(Vec2::ZERO);

        press(&mut state, Vec2::ZERO);
        end_drag(&mut state);

        assert!(!state.can_undo());
    }

    #[test]
    fn drag_is_one_undo_step() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::ZERO);

        press(&mut state, Vec2::ZERO);
        drag_to(&mut state, Vec2::new(10.0, 0.0));
        drag_to(&mut state, Vec2::new(20.0, 0.0));
        drag_to(&mut state, Vec2::new(30.0, 0.0));
        end_drag(&mut state);
        crate::app::handlers::history::undo(&mut state);

        assert_eq!(
            state.road_map.node(a).expect("Node erwartet").position,
            Vec2::ZERO
        );
        assert!(!state.can_undo());
    }

    #[test]
    fn polygon_drag_translates_vertices_and_handles() {
        let mut state = AppState::new();
        let vertices: Vec<_> = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]
            .into_iter()
            .map(|p| (p, p - Vec2::X, p + Vec2::X))
            .collect();
        let id = state
            .polygons_mut()
            .add(&vertices, PolygonStyle::default(), 1.0)
            .expect("Polygon erwartet");
        let area_before = state.polygons.get(id).and_then(|p| p.area);
        state.selection.selected = Selection::Polygon(id);

        pointer_down(&mut state, Vec2::new(7.0, 3.0), 2.0, 0.5, 1.0);
        drag_to(&mut state, Vec2::new(17.0, 8.0));

        let polygon = state.polygons.get(id).expect("Polygon erwartet");
        assert_eq!(polygon.points[0].position, Vec2::new(10.0, 5.0));
        assert_eq!(polygon.points[0].cp1, Vec2::new(9.0, 5.0));
        assert_eq!(polygon.points[2].cp2, Vec2::new(21.0, 15.0));
        assert_eq!(polygon.area, area_before);
    }

    #[test]
    fn vertex_drag_recomputes_area() {
        let mut state = AppState::new();
        let vertices: Vec<_> = [
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
        .into_iter()
        .map(|p| (p, p, p))
        .collect();
        let id = state
            .polygons_mut()
            .add(&vertices, PolygonStyle::default(), 1.0)
            .expect("Polygon erwartet");
        state.selection.selected = Selection::Polygon(id);

        press(&mut state, Vec2::new(10.0, 10.0));
        drag_to(&mut state, Vec2::new(20.0, 10.0));

        let polygon = state.polygons.get(id).expect("Polygon erwartet");
        assert_relative_eq!(polygon.area.expect("Fläche erwartet"), 150.0, epsilon = 1e-3);
    }

    #[test]
    fn handle_drag_moves_only_that_handle() {
        let mut state = AppState::new();
        let vertices: Vec<_> = [Vec2::ZERO, Vec2::new(40.0, 0.0), Vec2::new(40.0, 40.0)]
            .into_iter()
            .map(|p| (p, p + Vec2::new(-5.0, 0.0), p + Vec2::new(5.0, 0.0)))
            .collect();
        let id = state
            .polygons_mut()
            .add(&vertices, PolygonStyle::default(), 1.0)
            .expect("Polygon erwartet");
        let vertex_id = state.polygons.get(id).expect("Polygon erwartet").points[0].id;
        state.selection.selected = Selection::PolygonVertex {
            polygon_id: id,
            vertex_id,
        };

        press(&mut state, Vec2::new(5.0, 0.0));
        assert!(matches!(
            state.selection.drag.map(|d| d.target),
            Some(DragTarget::Handle(HandleRef::Vertex {
                slot: HandleSlot::Cp2,
                ..
            }))
        ));
        drag_to(&mut state, Vec2::new(5.0, 12.0));

        let vertex = state
            .polygons
            .get(id)
            .and_then(|p| p.vertex(vertex_id))
            .expect("Eckpunkt erwartet");
        assert_eq!(vertex.position, Vec2::ZERO);
        assert_eq!(vertex.cp1, Vec2::new(-5.0, 0.0));
        assert_eq!(vertex.cp2, Vec2::new(5.0, 12.0));
    }
}
