//! Spatial-Index (KD-Tree) für schnelle Node-Abfragen beim Snappen und Picken.

use std::collections::HashMap;

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::RoadNode;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Nodes
    pub node_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Nodes einer RoadMap.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    node_ids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            node_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Nodes.
    pub fn from_nodes(nodes: &HashMap<u64, RoadNode>) -> Self {
        let mut node_ids: Vec<u64> = nodes.keys().copied().collect();
        node_ids.sort_unstable();

        let entries: Vec<[f64; 2]> = node_ids
            .iter()
            .filter_map(|id| {
                nodes
                    .get(id)
                    .map(|node| [node.position.x as f64, node.position.y as f64])
            })
            .collect();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, node_ids }
    }

    /// Gibt die Anzahl indexierter Nodes zurück.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Nodes im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Findet den nächsten Node zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let node_id = *self.node_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            node_id,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Nodes innerhalb eines Radius, aufsteigend nach Distanz sortiert.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(
                &[query.x as f64, query.y as f64],
                (radius as f64) * (radius as f64),
            )
            .into_iter()
            .filter_map(|entry| {
                let node_id = *self.node_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    node_id,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
