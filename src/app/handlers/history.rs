//! Undo/Redo über die Snapshot-Historie.
//!
//! Stellt Straßennetz, Polygone, Hintergründe und Selektion gemeinsam wieder her.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Tauscht den aktuellen Zustand gegen den letzten Undo-Snapshot.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_undo_with_current(current) {
        Some(previous) => {
            previous.apply_to(state);
            log::info!(
                "Undo: {} Nodes, {} Straßen, {} Polygone",
                state.node_count(),
                state.road_count(),
                state.polygon_count()
            );
        }
        None => log::debug!("Undo-Stapel leer"),
    }
}

/// Stellt den zuletzt rückgängig gemachten Zustand wieder her.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_redo_with_current(current) {
        Some(next) => {
            next.apply_to(state);
            log::info!(
                "Redo: {} Nodes, {} Straßen, {} Polygone",
                state.node_count(),
                state.road_count(),
                state.polygon_count()
            );
        }
        None => log::debug!("Redo-Stapel leer"),
    }
}
