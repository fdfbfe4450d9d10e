//! Use-Case: Einzelnen Node an einer Weltposition hinzufügen.

use crate::app::{AppState, Selection};
use crate::core::snap_to_grid;

/// Fügt einen Node an der (ggf. gerasterten) Position hinzu und selektiert ihn.
pub fn add_node_at_position(state: &mut AppState, world_pos: glam::Vec2) -> u64 {
    let position = snap_to_grid(world_pos, &state.options.snap_settings()).position;

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let id = state.road_map_mut().add_node(position);
    state.selection.selected = Selection::Node(id);
    log::info!(
        "Node {} bei ({:.1}, {:.1}) hinzugefügt",
        id,
        position.x,
        position.y
    );
    id
}
