//! Knotenpunkt im Straßennetz.

use glam::Vec2;

/// Gemeinsamer Knotenpunkt, an den sich Straßen binden.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNode {
    /// Eindeutige ID
    pub id: u64,
    /// Weltposition
    pub position: Vec2,
    /// IDs aller Straßen, deren Start- oder End-Node dieser Node ist
    pub connected_road_ids: Vec<u64>,
}

impl RoadNode {
    /// Erstellt einen neuen Node ohne Straßen.
    pub fn new(id: u64, position: Vec2) -> Self {
        Self {
            id,
            position,
            connected_road_ids: Vec::new(),
        }
    }

    /// `true` wenn keine Straße an diesem Node hängt.
    pub fn is_isolated(&self) -> bool {
        self.connected_road_ids.is_empty()
    }

    /// Trägt eine Straße ein (ohne Duplikate).
    pub(crate) fn attach_road(&mut self, road_id: u64) {
        if !self.connected_road_ids.contains(&road_id) {
            self.connected_road_ids.push(road_id);
        }
    }

    /// Trägt eine Straße aus.
    pub(crate) fn detach_road(&mut self, road_id: u64) {
        self.connected_road_ids.retain(|&id| id != road_id);
    }
}
