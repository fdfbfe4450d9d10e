//! Snap-Auflösung: rohe Zeigerposition → Node, Straßenpunkt, Rasterzelle oder frei.

use super::geometry::project_onto_segment;
use super::{RoadKind, RoadMap};
use glam::Vec2;

/// Einstellungen für die Snap-Auflösung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings {
    /// Fangradius in Welteinheiten, zugleich Rasterweite
    pub snap_distance: f32,
    /// Rasterfang aktiv
    pub grid_snap: bool,
}

/// Worauf eine Position eingerastet ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapTarget {
    /// Existierender Node (wird wiederverwendet)
    Node(u64),
    /// Punkt auf einer geraden Straße (wird beim Übernehmen geteilt)
    Road(u64),
    /// Rasterzelle
    Grid,
    /// Keine Einrastung
    Free,
}

/// Vorschau-Markierung für die Darstellung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapPreview {
    #[default]
    None,
    Node(u64),
    Road(u64),
}

/// Ergebnis einer Snap-Auflösung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub position: Vec2,
    pub target: SnapTarget,
}

impl SnapResult {
    /// Vorschau-Markierung; leer für Raster- und freie Platzierung.
    pub fn preview(&self) -> SnapPreview {
        match self.target {
            SnapTarget::Node(id) => SnapPreview::Node(id),
            SnapTarget::Road(id) => SnapPreview::Road(id),
            SnapTarget::Grid | SnapTarget::Free => SnapPreview::None,
        }
    }

    /// ID des Nodes, falls auf einen Node eingerastet.
    pub fn node_id(&self) -> Option<u64> {
        match self.target {
            SnapTarget::Node(id) => Some(id),
            _ => None,
        }
    }
}

/// Löst eine rohe Weltposition in fester Priorität auf: Node, gerade Straße, Raster, frei.
///
/// `exclude_node_ids` werden beim Node-Fang übersprungen.
pub fn resolve_snap(
    road_map: &RoadMap,
    raw: Vec2,
    exclude_node_ids: &[u64],
    settings: &SnapSettings,
) -> SnapResult {
    let radius = settings.snap_distance.max(0.0);

    if let Some(hit) = road_map
        .nodes_within_radius(raw, radius)
        .into_iter()
        .find(|m| !exclude_node_ids.contains(&m.node_id))
    {
        if let Some(node) = road_map.node(hit.node_id) {
            return SnapResult {
                position: node.position,
                target: SnapTarget::Node(node.id),
            };
        }
    }

    let road_hit = road_map
        .roads_iter()
        .filter(|road| road.kind == RoadKind::Straight)
        .map(|road| {
            let (projected, _) = project_onto_segment(raw, road.start, road.end);
            (road.id, projected, projected.distance(raw))
        })
        .filter(|(_, _, dist)| *dist <= radius)
        .min_by(|a, b| a.2.total_cmp(&b.2));
    if let Some((road_id, projected, _)) = road_hit {
        return SnapResult {
            position: projected,
            target: SnapTarget::Road(road_id),
        };
    }

    snap_to_grid(raw, settings)
}

/// Nur Raster- oder freie Platzierung (für Polygon-Eckpunkte).
pub fn snap_to_grid(raw: Vec2, settings: &SnapSettings) -> SnapResult {
    if settings.grid_snap && settings.snap_distance > 0.0 {
        let cell = settings.snap_distance;
        return SnapResult {
            position: (raw / cell).round() * cell,
            target: SnapTarget::Grid,
        };
    }

    SnapResult {
        position: raw,
        target: SnapTarget::Free,
    }
}
