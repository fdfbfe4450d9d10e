//! Handler für Werkzeugwechsel sowie Build- und Polygon-Session.

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Wechselt das aktive Werkzeug.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    use_cases::sessions::set_editor_tool(state, tool);
}

/// Merkt die aktuelle Cursor-Position.
pub fn update_cursor(state: &mut AppState, world_pos: Vec2) {
    state.editor.cursor_world = Some(world_pos);
}

/// Stuft einen Punkt in der Build-Session.
pub fn build_click(state: &mut AppState, world_pos: Vec2) {
    use_cases::sessions::build_click(state, world_pos);
}

/// Aktualisiert Snap-Vorschau und Gummiband der Build-Session.
pub fn build_hover(state: &mut AppState, world_pos: Vec2) {
    use_cases::sessions::build_hover(state, world_pos);
}

/// Schließt die Build-Session ab.
pub fn build_complete(state: &mut AppState) {
    use_cases::sessions::build_complete(state);
}

/// Nimmt den letzten Build-Punkt zurück.
pub fn build_remove_last(state: &mut AppState) {
    use_cases::sessions::build_remove_last(state);
}

/// Bricht die Build-Session ab.
pub fn build_cancel(state: &mut AppState) {
    use_cases::sessions::build_cancel(state);
}

/// Verarbeitet einen Klick im Polygon-Werkzeug.
pub fn polygon_click(state: &mut AppState, world_pos: Vec2, close_radius: f32) {
    use_cases::sessions::polygon_click(state, world_pos, close_radius);
}

/// Aktualisiert das Gummiband der Polygon-Session.
pub fn polygon_hover(state: &mut AppState, world_pos: Vec2) {
    use_cases::sessions::polygon_hover(state, world_pos);
}

/// Schließt das Polygon explizit.
pub fn polygon_close(state: &mut AppState) {
    use_cases::sessions::polygon_close(state);
}

/// Nimmt den letzten Eckpunkt zurück.
pub fn polygon_remove_last(state: &mut AppState) {
    use_cases::sessions::polygon_remove_last(state);
}

/// Bricht die Polygon-Session ab.
pub fn polygon_cancel(state: &mut AppState) {
    use_cases::sessions::polygon_cancel(state);
}
