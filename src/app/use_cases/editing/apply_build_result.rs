//! Use-Case: Ergebnis der Build-Session anwenden (Splits + Straßenkette).

use crate::app::tools::{BuildResult, StagedAnchor, StagedPoint};
use crate::app::AppState;
use crate::core::RoadMap;

/// Toleranz, mit der ein gestufter Straßenpunkt nach einem früheren Split
/// der gleichen Straße wiedergefunden wird.
const REANCHOR_TOLERANCE: f32 = 0.5;

/// Wendet ein `BuildResult` als einen Undo-Schritt an.
///
/// Gibt die IDs der erzeugten Straßen in Kettenreihenfolge zurück.
pub fn apply_build_result(state: &mut AppState, result: &BuildResult) -> Vec<u64> {
    if result.points.len() < 2 {
        log::warn!("Build-Ergebnis mit weniger als 2 Punkten ignoriert");
        return Vec::new();
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    apply_build_result_no_snapshot(state, result)
}

/// Wie `apply_build_result`, aber ohne Undo-Snapshot.
pub fn apply_build_result_no_snapshot(state: &mut AppState, result: &BuildResult) -> Vec<u64> {
    let road_map = state.road_map_mut();

    // Zuerst alle Punkte zu Nodes materialisieren (inkl. aufgeschobener Splits)
    let node_ids: Vec<u64> = result
        .points
        .iter()
        .map(|point| materialize(road_map, point))
        .collect();

    let mut road_ids = Vec::with_capacity(result.road_count());
    for pair in node_ids.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a == b {
            log::debug!("Build: aufeinanderfolgende Punkte fallen auf Node {}", a);
            continue;
        }
        if let Some(id) = road_map.connect(a, b, result.road_kind, result.road_width) {
            road_ids.push(id);
        }
    }

    log::info!(
        "{} Straße(n) aus {} Punkt(en) angelegt",
        road_ids.len(),
        result.points.len()
    );
    road_ids
}

/// Bestimmt den Node eines gestuften Punkts und legt ihn bei Bedarf an.
fn materialize(road_map: &mut RoadMap, point: &StagedPoint) -> u64 {
    match point.anchor {
        StagedAnchor::ExistingNode(id) if road_map.contains_node(id) => id,
        StagedAnchor::ExistingNode(id) => {
            log::warn!("Gestufter Node {} existiert nicht mehr, lege neu an", id);
            road_map.add_node(point.position)
        }
        StagedAnchor::OnRoad(road_id) => split_at(road_map, road_id, point),
        StagedAnchor::NewPosition => road_map.add_node(point.position),
    }
}

/// Teilt die Straße am Punkt. Wurde sie durch einen früheren Punkt derselben
/// Kette bereits geteilt, wird die Hälfte unter dem Punkt gesucht.
fn split_at(road_map: &mut RoadMap, road_id: u64, point: &StagedPoint) -> u64 {
    if road_map.road(road_id).is_some() {
        if let Some(split) = road_map.split_road_at(road_id, point.position) {
            return split.node_id;
        }
    }

    if let Some(hit) = road_map
        .nodes_within_radius(point.position, REANCHOR_TOLERANCE)
        .first()
    {
        return hit.node_id;
    }

    if let Some(half_id) = road_map.find_road_at(point.position, REANCHOR_TOLERANCE) {
        if let Some(split) = road_map.split_road_at(half_id, point.position) {
            return split.node_id;
        }
    }

    log::debug!(
        "Straße {} nicht teilbar, Punkt wird freier Node",
        road_id
    );
    road_map.add_node(point.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RoadKind, SnapResult, SnapTarget};
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn free(x: f32, y: f32) -> StagedPoint {
        StagedPoint::from_snap(&SnapResult {
            position: Vec2::new(x, y),
            target: SnapTarget::Free,
        })
    }

    fn result(points: Vec<StagedPoint>) -> BuildResult {
        BuildResult {
            points,
            road_kind: RoadKind::Straight,
            road_width: 6.0,
        }
    }

    #[test]
    fn three_free_points_create_two_roads_and_three_nodes() {
        let mut state = AppState::new();

        let roads = apply_build_result(
            &mut state,
            &result(vec![free(0.0, 0.0), free(100.0, 0.0), free(100.0, 100.0)]),
        );

        assert_eq!(roads.len(), 2);
        assert_eq!(state.node_count(), 3);
        assert_eq!(state.road_count(), 2);
        assert!(state.road_map.integrity_violations().is_empty());
    }

    #[test]
    fn existing_node_is_reused() {
        let mut state = AppState::new();
        let existing = state.road_map_mut().add_node(Vec2::ZERO);
        let start = StagedPoint {
            position: Vec2::ZERO,
            anchor: StagedAnchor::ExistingNode(existing),
        };

        apply_build_result(&mut state, &result(vec![start, free(50.0, 0.0)]));

        assert_eq!(state.node_count(), 2);
        let node = state.road_map.node(existing).expect("Node erwartet");
        assert_eq!(node.connected_road_ids.len(), 1);
    }

    #[test]
    fn point_on_road_splits_it() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::ZERO);
        let b = state.road_map_mut().add_node(Vec2::new(100.0, 0.0));
        let road = state
            .road_map_mut()
            .connect(a, b, RoadKind::Straight, 4.0)
            .expect("Straße erwartet");
        let on_road = StagedPoint {
            position: Vec2::new(40.0, 0.0),
            anchor: StagedAnchor::OnRoad(road),
        };

        apply_build_result(&mut state, &result(vec![on_road, free(40.0, 60.0)]));

        assert!(state.road_map.road(road).is_none());
        assert_eq!(state.road_count(), 3);
        assert_eq!(state.node_count(), 4);
        assert_relative_eq!(state.road_map.total_road_length(), 160.0, epsilon = 1e-3);
        assert!(state.road_map.integrity_violations().is_empty());
    }

    #[test]
    fn two_points_on_same_road_split_twice() {
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::ZERO);
        let b = state.road_map_mut().add_node(Vec2::new(90.0, 0.0));
        let road = state
            .road_map_mut()
            .connect(a, b, RoadKind::Straight, 4.0)
            .expect("Straße erwartet");
        let first = StagedPoint {
            position: Vec2::new(30.0, 0.0),
            anchor: StagedAnchor::OnRoad(road),
        };
        let second = StagedPoint {
            position: Vec2::new(60.0, 0.0),
            anchor: StagedAnchor::OnRoad(road),
        };

        apply_build_result(&mut state, &result(vec![first, free(45.0, 40.0), second]));

        // 3 Teilstücke auf der Achse + 2 neue Straßen
        assert_eq!(state.road_count(), 5);
        assert_eq!(state.node_count(), 5);
        assert!(state.road_map.integrity_violations().is_empty());
    }

    #[test]
    fn single_undo_step_reverts_everything() {
        let mut state = AppState::new();
        apply_build_result(
            &mut state,
            &result(vec![free(0.0, 0.0), free(10.0, 0.0), free(20.0, 5.0)]),
        );

        crate::app::handlers::history::undo(&mut state);

        assert_eq!(state.node_count(), 0);
        assert_eq!(state.road_count(), 0);
    }
}
