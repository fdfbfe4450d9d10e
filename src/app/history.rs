use super::SelectionState;
use crate::core::{BackgroundLayers, PolygonStore, RoadMap};
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Store-Klon findet erst beim nächsten `Arc::make_mut()`
/// in einem Use-Case statt. Sessions gehören nicht zum Snapshot.
#[derive(Clone)]
pub struct Snapshot {
    pub road_map: Arc<RoadMap>,
    pub polygons: Arc<PolygonStore>,
    pub backgrounds: Arc<BackgroundLayers>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
    /// Maßstab, mit dem die Polygonflächen berechnet wurden
    pub meters_per_pixel: f32,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            road_map: Arc::clone(&state.road_map),
            polygons: Arc::clone(&state.polygons),
            backgrounds: Arc::clone(&state.backgrounds),
            selection: SelectionState {
                selected: state.selection.selected,
                drag: None,
            },
            meters_per_pixel: state.options.meters_per_pixel,
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    ///
    /// Wurde der Maßstab seitdem geändert, werden die Flächen neu berechnet.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.road_map = self.road_map;
        state.polygons = self.polygons;
        state.backgrounds = self.backgrounds;
        state.selection = self.selection;

        let mpp = state.options.meters_per_pixel;
        if self.meters_per_pixel != mpp {
            state.polygons_mut().recompute_all_areas(mpp);
        }
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth: max_depth.max(1),
        }
    }

    /// Legt einen vorab erstellten Snapshot ab und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Verwirft alle Einträge (z.B. nach Laden oder Leeren).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppState, Selection};
    use glam::Vec2;

    fn make_snapshot_with_node_count(count: usize) -> Snapshot {
        let mut state = AppState::new();
        for i in 1..=count {
            let f = i as f32;
            state.road_map_mut().add_node(Vec2::new(f * 10.0, f * 7.0));
        }
        Snapshot::from_state(&state)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_node_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_node_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.road_map.node_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_node_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_node_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_node_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.road_map.node_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_node_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_node_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_node_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_node_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_node_count(99));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn snapshot_is_copy_on_write() {
        let mut state = AppState::new();
        state.road_map_mut().add_node(Vec2::ZERO);
        state.selection.selected = Selection::Node(1);
        let snap = Snapshot::from_state(&state);

        state.road_map_mut().add_node(Vec2::ONE);
        assert_eq!(snap.road_map.node_count(), 1);
        assert_eq!(state.road_map.node_count(), 2);

        snap.apply_to(&mut state);
        assert_eq!(state.road_map.node_count(), 1);
        assert_eq!(state.selection.selected, Selection::Node(1));
    }
}
