//! Handler für Pick und Drag im Select-Werkzeug.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Pick nach Priorität; startet ggf. einen Drag.
pub fn pointer_down(
    state: &mut AppState,
    world_pos: Vec2,
    pick_radius: f32,
    handle_radius: f32,
    hit_tolerance: f32,
) {
    use_cases::selection::pointer_down(state, world_pos, pick_radius, handle_radius, hit_tolerance);
}

/// Setzt den laufenden Drag fort.
pub fn drag_to(state: &mut AppState, world_pos: Vec2) {
    use_cases::selection::drag_to(state, world_pos);
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
