//! Die zentrale RoadMap-Datenstruktur: Nodes, Straßen und Spatial-Index.
//!
//! Jede strukturelle Mutation läuft über diese Methoden. Sie halten die Invariante
//! `node.connected_road_ids == { Straßen mit start_node_id/end_node_id == node.id }`
//! und die Gleichheit gebundener Endpunkte mit der Node-Position aufrecht.
//! Operationen auf unbekannte IDs sind stille No-Ops.

mod split;

pub use split::RoadSplit;

use super::{Road, RoadKind, RoadNode, SpatialIndex, SpatialMatch};
use glam::Vec2;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Radius eines Kreises, der durch Verbinden eines Nodes mit sich selbst entsteht.
pub const SELF_LOOP_RADIUS: f32 = 20.0;

/// Topologie-Store für Nodes und Straßen
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    /// Alle Nodes, indexiert nach ID
    nodes: HashMap<u64, RoadNode>,
    /// Alle Straßen in Einfügereihenfolge (spätere liegen oben)
    roads: IndexMap<u64, Road>,
    /// Persistenter Spatial-Index für Node-Abfragen
    spatial_index: SpatialIndex,
}

impl PartialEq for RoadMap {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.roads == other.roads
    }
}

impl RoadMap {
    /// Erstellt eine leere RoadMap
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt Nodes und Straßen unverändert (Laden aus Snapshot).
    ///
    /// Der Spatial-Index wird einmalig am Ende aufgebaut.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = RoadNode>,
        roads: impl IntoIterator<Item = Road>,
    ) -> Self {
        let mut road_map = Self {
            nodes: nodes.into_iter().map(|node| (node.id, node)).collect(),
            roads: roads.into_iter().map(|road| (road.id, road)).collect(),
            spatial_index: SpatialIndex::empty(),
        };
        road_map.rebuild_spatial_index();
        road_map
    }

    // ── Lesezugriff ──────────────────────────────────────────────────

    /// Node per ID
    pub fn node(&self, id: u64) -> Option<&RoadNode> {
        self.nodes.get(&id)
    }

    /// Straße per ID
    pub fn road(&self, id: u64) -> Option<&Road> {
        self.roads.get(&id)
    }

    /// Iterator über alle Nodes (ungeordnet).
    pub fn nodes_iter(&self) -> impl Iterator<Item = &RoadNode> {
        self.nodes.values()
    }

    /// Iterator über alle Straßen in Einfügereihenfolge.
    pub fn roads_iter(&self) -> impl Iterator<Item = &Road> {
        self.roads.values()
    }

    /// Prüft ob ein Node existiert
    pub fn contains_node(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Gibt die Anzahl der Nodes zurück
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Straßen zurück
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// `true` wenn weder Nodes noch Straßen vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.roads.is_empty()
    }

    /// Berechnet die nächste freie Node-ID
    pub fn next_node_id(&self) -> u64 {
        self.nodes.keys().max().copied().unwrap_or(0) + 1
    }

    /// Berechnet die nächste freie Straßen-ID
    pub fn next_road_id(&self) -> u64 {
        self.roads.keys().max().copied().unwrap_or(0) + 1
    }

    /// Länge einer Straße in Welteinheiten
    pub fn road_length(&self, road_id: u64) -> Option<f32> {
        self.roads.get(&road_id).map(Road::length)
    }

    /// Summe aller Straßenlängen in Welteinheiten
    pub fn total_road_length(&self) -> f32 {
        self.roads.values().map(Road::length).sum()
    }

    // ── Spatial-Abfragen ────────────────────────────────────────────

    /// Findet den nächstgelegenen Node zur Weltposition.
    pub fn nearest_node(&self, query: Vec2) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }

    /// Findet alle Nodes innerhalb eines Radius (aufsteigend nach Distanz).
    pub fn nodes_within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        self.spatial_index.within_radius(query, radius)
    }

    /// Oberste getroffene Straße (zuletzt eingefügte zuerst).
    pub fn hit_road(&self, point: Vec2, tolerance_world: f32) -> Option<u64> {
        self.roads
            .values()
            .rev()
            .find(|road| road.is_hit(point, tolerance_world))
            .map(|road| road.id)
    }

    /// Straße, deren Mittellinie höchstens `tolerance` vom Punkt entfernt ist (nächste gewinnt).
    pub fn find_road_at(&self, point: Vec2, tolerance: f32) -> Option<u64> {
        self.roads
            .values()
            .filter(|road| road.kind != RoadKind::Circle)
            .map(|road| (road.id, road.distance_to(point)))
            .filter(|(_, dist)| *dist <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    // ── Strukturelle Mutation ───────────────────────────────────────

    /// Fügt einen neuen Node ohne Straßen hinzu und gibt seine ID zurück.
    pub fn add_node(&mut self, position: Vec2) -> u64 {
        let id = self.next_node_id();
        self.nodes.insert(id, RoadNode::new(id, position));
        self.rebuild_spatial_index();
        id
    }

    /// Übernimmt einen Node unverändert (Laden aus Snapshot).
    pub fn insert_node(&mut self, node: RoadNode) {
        self.nodes.insert(node.id, node);
        self.rebuild_spatial_index();
    }

    /// Übernimmt eine Straße unverändert (Laden aus Snapshot).
    pub fn insert_road(&mut self, road: Road) {
        self.roads.insert(road.id, road);
    }

    /// Verbindet zwei Nodes mit einer neuen Straße.
    ///
    /// `a == b` erzeugt einen Kreis mit Mittelpunkt am Node (nur der Start ist gebunden).
    /// Gibt `None` zurück, wenn einer der Nodes fehlt.
    pub fn connect(&mut self, a: u64, b: u64, kind: RoadKind, width: f32) -> Option<u64> {
        let start = self.nodes.get(&a)?.position;
        let end = self.nodes.get(&b)?.position;
        let id = self.next_road_id();

        let road = if a == b {
            let mut road = Road::new(
                id,
                start,
                start + Vec2::X * SELF_LOOP_RADIUS,
                RoadKind::Circle,
                width,
            );
            road.start_node_id = Some(a);
            road
        } else {
            let mut road = Road::new(id, start, end, kind, width);
            road.start_node_id = Some(a);
            road.end_node_id = Some(b);
            road
        };

        self.attach(road);
        log::debug!("Straße {} verbindet Node {} mit Node {}", id, a, b);
        Some(id)
    }

    /// Verschiebt einen Node und zieht alle gebundenen Straßenendpunkte mit.
    pub fn move_node(&mut self, node_id: u64, position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            log::debug!("move_node: Node {} existiert nicht", node_id);
            return false;
        };

        if node.position == position {
            return true;
        }
        node.position = position;

        let road_ids = node.connected_road_ids.clone();
        for road_id in road_ids {
            if let Some(road) = self.roads.get_mut(&road_id) {
                road.follow_node(node_id, position);
            }
        }
        self.rebuild_spatial_index();
        true
    }

    /// Löscht einen Node inklusive aller gebundenen Straßen (Kaskade).
    pub fn delete_node(&mut self, node_id: u64) -> Option<RoadNode> {
        if !self.nodes.contains_key(&node_id) {
            log::debug!("delete_node: Node {} existiert nicht", node_id);
            return None;
        }

        let bound: Vec<u64> = self
            .roads
            .values()
            .filter(|road| road.touches_node(node_id))
            .map(|road| road.id)
            .collect();
        for road_id in &bound {
            self.delete_road(*road_id);
        }

        let removed = self.nodes.remove(&node_id);

        // Hängende Referenzen bei allen übrigen Nodes entfernen
        for node in self.nodes.values_mut() {
            node.connected_road_ids.retain(|id| !bound.contains(id));
        }

        self.rebuild_spatial_index();
        log::debug!(
            "Node {} gelöscht ({} Straße(n) kaskadiert)",
            node_id,
            bound.len()
        );
        removed
    }

    /// Entfernt eine Straße und trägt sie bei beiden Endpunkt-Nodes aus.
    pub fn delete_road(&mut self, road_id: u64) -> Option<Road> {
        let Some(road) = self.roads.shift_remove(&road_id) else {
            log::debug!("delete_road: Straße {} existiert nicht", road_id);
            return None;
        };
        for node_id in [road.start_node_id, road.end_node_id].into_iter().flatten() {
            if let Some(node) = self.nodes.get_mut(&node_id) {
                node.detach_road(road_id);
            }
        }
        Some(road)
    }

    /// Entfernt alle Nodes und Straßen.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roads.clear();
        self.spatial_index = SpatialIndex::empty();
    }

    // ── Straßen-Eigenschaften ───────────────────────────────────────

    /// Setzt die Breite einer Straße (negative Werte werden auf 0 geklemmt).
    pub fn set_road_width(&mut self, road_id: u64, width: f32) -> bool {
        let Some(road) = self.roads.get_mut(&road_id) else {
            return false;
        };
        road.width = width.max(0.0);
        true
    }

    /// Setzt den Anzeigenamen einer Straße (leerer Name entfernt ihn).
    pub fn set_road_name(&mut self, road_id: u64, name: Option<String>) -> bool {
        let Some(road) = self.roads.get_mut(&road_id) else {
            return false;
        };
        road.name = name.filter(|n| !n.trim().is_empty());
        true
    }

    /// Wechselt die Kurvenfamilie einer Straße.
    ///
    /// Wechsel zu `Cubic` erzeugt Standard-Handles, andere Typen verwerfen sie.
    /// Ein Wechsel zu oder von `Circle` ist nur für Straßen mit zwei verschiedenen
    /// gebundenen Nodes erlaubt bzw. sinnvoll und wird sonst ignoriert.
    pub fn set_road_kind(&mut self, road_id: u64, kind: RoadKind) -> bool {
        let Some(road) = self.roads.get_mut(&road_id) else {
            return false;
        };
        if road.kind == kind {
            return true;
        }
        let self_loop = road.end_node_id.is_none() && road.kind == RoadKind::Circle;
        if self_loop {
            log::debug!("Selbstschleife {} bleibt ein Kreis", road_id);
            return false;
        }
        road.kind = kind;
        road.control_points = match kind {
            RoadKind::Cubic => Some(Road::default_control_points(road.start, road.end)),
            _ => None,
        };
        true
    }

    /// Verschiebt einen Handle einer kubischen Straße (`index` 0 = Start, 1 = Ende).
    pub fn set_control_point(&mut self, road_id: u64, index: usize, position: Vec2) -> bool {
        let Some(road) = self.roads.get_mut(&road_id) else {
            return false;
        };
        match road.control_points.as_mut() {
            Some(cps) if index < 2 && road.kind == RoadKind::Cubic => {
                cps[index] = position;
                true
            }
            _ => false,
        }
    }

    // ── Integrität ──────────────────────────────────────────────────

    /// Listet alle Verletzungen der Node↔Straße-Invarianten auf (leer = konsistent).
    pub fn integrity_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for node in self.nodes.values() {
            let mut expected: Vec<u64> = self
                .roads
                .values()
                .filter(|road| road.touches_node(node.id))
                .map(|road| road.id)
                .collect();
            expected.sort_unstable();
            let mut actual = node.connected_road_ids.clone();
            actual.sort_unstable();
            if expected != actual {
                violations.push(format!(
                    "Node {}: connected_road_ids {:?}, erwartet {:?}",
                    node.id, actual, expected
                ));
            }
        }

        for road in self.roads.values() {
            for (node_id, endpoint) in [(road.start_node_id, road.start), (road.end_node_id, road.end)]
            {
                let Some(node_id) = node_id else { continue };
                match self.nodes.get(&node_id) {
                    None => violations.push(format!(
                        "Straße {} verweist auf fehlenden Node {}",
                        road.id, node_id
                    )),
                    Some(node) if node.position != endpoint => violations.push(format!(
                        "Straße {}: Endpunkt {:?} weicht von Node {} ab ({:?})",
                        road.id, endpoint, node_id, node.position
                    )),
                    Some(_) => {}
                }
            }
        }

        violations
    }

    // ── Intern ──────────────────────────────────────────────────────

    /// Fügt eine gebundene Straße ein und trägt sie bei ihren Nodes ein.
    fn attach(&mut self, road: Road) {
        for node_id in [road.start_node_id, road.end_node_id].into_iter().flatten() {
            if let Some(node) = self.nodes.get_mut(&node_id) {
                node.attach_road(road.id);
            }
        }
        self.roads.insert(road.id, road);
    }

    /// Baut den persistenten Spatial-Index aus den aktuellen Nodes neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_nodes(&self.nodes);
    }
}
