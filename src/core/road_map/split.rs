//! Teilen einer Straße an einem Punkt in zwei Hälften mit gemeinsamem Node.

use super::RoadMap;
use crate::core::geometry::split_cubic;
use crate::core::{Road, RoadKind, RoadNode};
use glam::Vec2;

/// Parameter-Abstand zu den Enden, unterhalb dessen nicht geteilt wird.
const SPLIT_EPSILON: f32 = 1e-4;

/// Ergebnis einer erfolgreichen Teilung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadSplit {
    /// Node am Teilungspunkt
    pub node_id: u64,
    /// Hälfte vom ursprünglichen Start bis zum Teilungspunkt
    pub first_road_id: u64,
    /// Hälfte vom Teilungspunkt bis zum ursprünglichen Ende
    pub second_road_id: u64,
}

impl RoadMap {
    /// Ersetzt eine Straße durch zwei Hälften, die sich den Node `new_node_id` teilen.
    ///
    /// Der Teilungspunkt ist die Projektion von `point` auf die Straße. Existiert
    /// `new_node_id` bereits, wird dieser Node auf den Teilungspunkt verschoben.
    /// Typ, Breite und Name bleiben auf beiden Hälften erhalten. Kreise sowie
    /// Projektionen auf einen Endpunkt werden nicht geteilt.
    pub fn split_road(&mut self, road_id: u64, point: Vec2, new_node_id: u64) -> Option<RoadSplit> {
        let Some(road) = self.roads.get(&road_id) else {
            log::debug!("split_road: Straße {} existiert nicht", road_id);
            return None;
        };
        if road.kind == RoadKind::Circle {
            log::debug!("split_road: Kreis {} kann nicht geteilt werden", road_id);
            return None;
        }
        if road.touches_node(new_node_id) {
            log::debug!(
                "split_road: Node {} ist bereits Endpunkt von Straße {}",
                new_node_id,
                road_id
            );
            return None;
        }

        let segment = road.segment();
        let t = segment.closest_param(point);
        if t <= SPLIT_EPSILON || t >= 1.0 - SPLIT_EPSILON {
            log::debug!("split_road: Teilungspunkt liegt auf einem Endpunkt (t={:.4})", t);
            return None;
        }
        let split_pos = segment.point_at(t);
        let (first, second) = split_halves(road, t, split_pos);

        if self.nodes.contains_key(&new_node_id) {
            self.move_node(new_node_id, split_pos);
        } else {
            self.nodes
                .insert(new_node_id, RoadNode::new(new_node_id, split_pos));
            self.rebuild_spatial_index();
        }

        self.delete_road(road_id);

        let first_road_id = self.next_road_id();
        let mut first = first;
        first.id = first_road_id;
        first.end_node_id = Some(new_node_id);
        self.attach(first);

        let second_road_id = self.next_road_id();
        let mut second = second;
        second.id = second_road_id;
        second.start_node_id = Some(new_node_id);
        self.attach(second);

        log::debug!(
            "Straße {} geteilt an Node {} → {} + {}",
            road_id,
            new_node_id,
            first_road_id,
            second_road_id
        );
        Some(RoadSplit {
            node_id: new_node_id,
            first_road_id,
            second_road_id,
        })
    }

    /// Teilt eine Straße und vergibt dabei selbst die nächste freie Node-ID.
    pub fn split_road_at(&mut self, road_id: u64, point: Vec2) -> Option<RoadSplit> {
        let node_id = self.next_node_id();
        self.split_road(road_id, point, node_id)
    }
}

/// Erzeugt die beiden (noch ID-losen) Hälften einer Straße.
fn split_halves(road: &Road, t: f32, split_pos: Vec2) -> (Road, Road) {
    let mut first = Road::new(0, road.start, split_pos, road.kind, road.width);
    first.start_node_id = road.start_node_id;
    first.name = road.name.clone();

    let mut second = Road::new(0, split_pos, road.end, road.kind, road.width);
    second.end_node_id = road.end_node_id;
    second.name = road.name.clone();

    if road.kind == RoadKind::Cubic {
        let [cp1, cp2] = road
            .control_points
            .unwrap_or_else(|| Road::default_control_points(road.start, road.end));
        let (left, right) = split_cubic(road.start, cp1, cp2, road.end, t);
        first.control_points = Some([left[1], left[2]]);
        second.control_points = Some([right[1], right[2]]);
    }

    (first, second)
}
