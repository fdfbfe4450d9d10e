//! Pick nach Priorität: Handles, Eckpunkte, Polygon-Inneres, Nodes, Polygone, Straßen.

use crate::app::{AppState, DragTarget, HandleRef, Selection};
use crate::core::{HandleSlot, RoadKind};
use glam::Vec2;

/// Mindestabstand eines Handles von seinem Eckpunkt, damit er pickbar ist.
const HANDLE_EPSILON: f32 = 1e-3;

/// Ergebnis eines Picks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickResult {
    /// Neue Selektion
    pub selection: Selection,
    /// Optionaler Drag mit der aktuellen Position des gegriffenen Objekts
    pub drag: Option<(DragTarget, Vec2)>,
}

impl PickResult {
    fn select(selection: Selection) -> Self {
        Self {
            selection,
            drag: None,
        }
    }

    fn drag(selection: Selection, target: DragTarget, anchor: Vec2) -> Self {
        Self {
            selection,
            drag: Some((target, anchor)),
        }
    }
}

/// Bestimmt den Treffer an `world_pos`; der erste passende Schritt gewinnt.
///
/// Alle Radien sind bereits in Welteinheiten.
pub fn pick(
    state: &AppState,
    world_pos: Vec2,
    pick_radius: f32,
    handle_radius: f32,
    hit_tolerance: f32,
) -> PickResult {
    let current = state.selection.selected;

    // 1. Handle der aktuellen Selektion
    if let Some((handle, position)) = nearest_handle(state, current, world_pos, handle_radius) {
        return PickResult::drag(current, DragTarget::Handle(handle), position);
    }

    if let Some(polygon) = current.polygon_id().and_then(|id| state.polygons.get(id)) {
        // 2. Eckpunkt des selektierten Polygons
        if let Some(vertex_id) = polygon.vertex_near(world_pos, pick_radius) {
            if let Some(vertex) = polygon.vertex(vertex_id) {
                let selection = Selection::PolygonVertex {
                    polygon_id: polygon.id,
                    vertex_id,
                };
                let target = DragTarget::PolygonVertex {
                    polygon_id: polygon.id,
                    vertex_id,
                };
                return PickResult::drag(selection, target, vertex.position);
            }
        }

        // 3. Inneres des selektierten Polygons
        if polygon.contains(world_pos) {
            return PickResult::drag(
                Selection::Polygon(polygon.id),
                DragTarget::Polygon(polygon.id),
                world_pos,
            );
        }
    }

    // 4. Node
    if let Some(hit) = state
        .road_map
        .nearest_node(world_pos)
        .filter(|hit| hit.distance <= pick_radius)
    {
        if let Some(node) = state.road_map.node(hit.node_id) {
            return PickResult::drag(
                Selection::Node(node.id),
                DragTarget::Node(node.id),
                node.position,
            );
        }
    }

    // 5. Polygon (oberstes)
    if let Some(polygon_id) = state.polygons.polygon_at(world_pos) {
        return PickResult::select(Selection::Polygon(polygon_id));
    }

    // 6. Straße
    if let Some(road_id) = state.road_map.hit_road(world_pos, hit_tolerance) {
        return PickResult::select(Selection::Road(road_id));
    }

    // 7. Nichts getroffen
    PickResult::select(Selection::None)
}

/// Alle Handles, die zur aktuellen Selektion gehören.
fn selection_handles(state: &AppState, selection: Selection) -> Vec<(HandleRef, Vec2)> {
    let mut handles = Vec::new();
    let mut push_road = |road_id: u64, only_node: Option<u64>| {
        let Some(road) = state.road_map.road(road_id) else {
            return;
        };
        let Some(cps) = road.control_points.filter(|_| road.kind == RoadKind::Cubic) else {
            return;
        };
        for (index, node_id) in [(0, road.start_node_id), (1, road.end_node_id)] {
            if only_node.is_none() || only_node == node_id {
                handles.push((HandleRef::Road { road_id, index }, cps[index]));
            }
        }
    };

    match selection {
        Selection::Node(node_id) => {
            if let Some(node) = state.road_map.node(node_id) {
                for &road_id in &node.connected_road_ids {
                    push_road(road_id, Some(node_id));
                }
            }
        }
        Selection::Road(road_id) => push_road(road_id, None),
        Selection::PolygonVertex {
            polygon_id,
            vertex_id,
        } => {
            if let Some(vertex) = state
                .polygons
                .get(polygon_id)
                .and_then(|p| p.vertex(vertex_id))
            {
                for (slot, position) in [(HandleSlot::Cp1, vertex.cp1), (HandleSlot::Cp2, vertex.cp2)]
                {
                    if position.distance(vertex.position) > HANDLE_EPSILON {
                        handles.push((
                            HandleRef::Vertex {
                                polygon_id,
                                vertex_id,
                                slot,
                            },
                            position,
                        ));
                    }
                }
            }
        }
        Selection::Polygon(_) | Selection::None => {}
    }
    handles
}

fn nearest_handle(
    state: &AppState,
    selection: Selection,
    world_pos: Vec2,
    radius: f32,
) -> Option<(HandleRef, Vec2)> {
    selection_handles(state, selection)
        .into_iter()
        .map(|(handle, position)| (handle, position, position.distance(world_pos)))
        .filter(|(_, _, dist)| *dist <= radius)
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(handle, position, _)| (handle, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PolygonStyle;

    const PICK: f32 = 10.0;
    const HANDLE: f32 = 8.0;
    const HIT: f32 = 5.0;

    fn add_square(state: &mut AppState, origin: Vec2, size: f32) -> u64 {
        let vertices: Vec<_> = [
            origin,
            origin + Vec2::new(size, 0.0),
            origin + Vec2::new(size, size),
            origin + Vec2::new(0.0, size),
        ]
        .into_iter()
        .map(|p| (p, p, p))
        .collect();
        state
            .polygons_mut()
            .add(&vertices, PolygonStyle::default(), 1.0)
            .expect("Polygon erwartet")
    }

    #[test]
    fn empty_click_clears_selection() {
        let state = AppState::new();

        let result = pick(&state, Vec2::new(5.0, 5.0), PICK, HANDLE, HIT);

        assert_eq!(result.selection, Selection::None);
        assert!(result.drag.is_none());
    }

    #[test]
    fn node_wins_over_polygon_and_road() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::new(50.0, 50.0));
        let b = state.road_map_mut().add_node(Vec2::new(150.0, 50.0));
        state.road_map_mut().connect(a, b, RoadKind::Straight, 6.0);
        add_square(&mut state, Vec2::ZERO, 100.0);

        let result = pick(&state, Vec2::new(52.0, 49.0), PICK, HANDLE, HIT);

        assert_eq!(result.selection, Selection::Node(a));
        assert_eq!(
            result.drag,
            Some((DragTarget::Node(a), Vec2::new(50.0, 50.0)))
        );
    }

    #[test]
    fn polygon_wins_over_road() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::new(-50.0, 50.0));
        let b = state.road_map_mut().add_node(Vec2::new(150.0, 50.0));
        state.road_map_mut().connect(a, b, RoadKind::Straight, 6.0);
        let polygon = add_square(&mut state, Vec2::ZERO, 100.0);

        let result = pick(&state, Vec2::new(70.0, 51.0), PICK, HANDLE, HIT);

        assert_eq!(result.selection, Selection::Polygon(polygon));
    }

    #[test]
    fn topmost_polygon_is_picked() {
        let mut state = AppState::new();
        add_square(&mut state, Vec2::ZERO, 100.0);
        let upper = add_square(&mut state, Vec2::new(50.0, 50.0), 100.0);

        let result = pick(&state, Vec2::new(75.0, 75.0), PICK, HANDLE, HIT);

        assert_eq!(result.selection, Selection::Polygon(upper));
    }

    #[test]
    fn road_is_picked_when_nothing_else_hit() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::ZERO);
        let b = state.road_map_mut().add_node(Vec2::new(200.0, 0.0));
        let road = state
            .road_map_mut()
            .connect(a, b, RoadKind::Straight, 6.0)
            .expect("Straße erwartet");

        let result = pick(&state, Vec2::new(100.0, 7.0), PICK, HANDLE, HIT);

        assert_eq!(result.selection, Selection::Road(road));
        assert!(result.drag.is_none());
    }

    #[test]
    fn vertex_of_selected_polygon_starts_vertex_drag() {
        let mut state = AppState::new();
        let polygon = add_square(&mut state, Vec2::ZERO, 100.0);
        state.selection.selected = Selection::Polygon(polygon);
        let vertex_id = state.polygons.get(polygon).expect("Polygon erwartet").points[1].id;

        let result = pick(&state, Vec2::new(98.0, 3.0), PICK, HANDLE, HIT);

        assert_eq!(
            result.selection,
            Selection::PolygonVertex {
                polygon_id: polygon,
                vertex_id
            }
        );
        assert!(matches!(
            result.drag,
            Some((DragTarget::PolygonVertex { .. }, _))
        ));
    }

    #[test]
    fn interior_of_selected_polygon_starts_polygon_drag() {
        let mut state = AppState::new();
        let polygon = add_square(&mut state, Vec2::ZERO, 100.0);
        state.selection.selected = Selection::Polygon(polygon);

        let result = pick(&state, Vec2::new(50.0, 50.0), PICK, HANDLE, HIT);

        assert_eq!(result.selection, Selection::Polygon(polygon));
        assert!(matches!(result.drag, Some((DragTarget::Polygon(id), _)) if id == polygon));
    }

    #[test]
    fn handle_of_selected_cubic_road_wins() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::ZERO);
        let b = state.road_map_mut().add_node(Vec2::new(90.0, 0.0));
        let road = state
            .road_map_mut()
            .connect(a, b, RoadKind::Cubic, 6.0)
            .expect("Straße erwartet");
        state.selection.selected = Selection::Road(road);

        let result = pick(&state, Vec2::new(31.0, 1.0), PICK, HANDLE, HIT);

        assert_eq!(
            result.drag.map(|(target, _)| target),
            Some(DragTarget::Handle(HandleRef::Road {
                road_id: road,
                index: 0
            }))
        );
    }

    #[test]
    fn selected_node_exposes_only_its_own_handles() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::ZERO);
        let b = state.road_map_mut().add_node(Vec2::new(30.0, 0.0));
        state.road_map_mut().connect(a, b, RoadKind::Cubic, 6.0);
        state.selection.selected = Selection::Node(a);

        // Handle 1 (bei 20, 0) gehört zu Node b
        let result = pick(&state, Vec2::new(20.0, 0.0), PICK, HANDLE, HIT);

        assert!(!matches!(result.drag, Some((DragTarget::Handle(_), _))));
    }
}
