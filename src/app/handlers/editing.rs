//! Handler für Node-, Straßen- und Polygon-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::RoadKind;
use glam::Vec2;

/// Fügt einen Node an der Weltposition hinzu.
pub fn add_node(state: &mut AppState, world_pos: Vec2) {
    use_cases::editing::add_node_at_position(state, world_pos);
}

/// Löscht das selektierte Objekt.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Setzt die Breite einer Straße.
pub fn set_road_width(state: &mut AppState, road_id: u64, width: f32) {
    use_cases::editing::set_road_width(state, road_id, width);
}

/// Setzt den Namen einer Straße.
pub fn set_road_name(state: &mut AppState, road_id: u64, name: String) {
    use_cases::editing::set_road_name(state, road_id, name);
}

/// Setzt den Typ einer Straße.
pub fn set_road_type(state: &mut AppState, road_id: u64, kind: RoadKind) {
    use_cases::editing::set_road_type(state, road_id, kind);
}

/// Setzt die Füllfarbe eines Polygons.
pub fn set_polygon_fill_color(state: &mut AppState, polygon_id: u64, color: &str) {
    use_cases::editing::set_polygon_fill_color(state, polygon_id, color);
}

/// Setzt die Randfarbe eines Polygons.
pub fn set_polygon_stroke_color(state: &mut AppState, polygon_id: u64, color: &str) {
    use_cases::editing::set_polygon_stroke_color(state, polygon_id, color);
}

/// Setzt die Deckkraft eines Polygons.
pub fn set_polygon_opacity(state: &mut AppState, polygon_id: u64, opacity: f32) {
    use_cases::editing::set_polygon_opacity(state, polygon_id, opacity);
}

/// Benennt ein Polygon um.
pub fn rename_polygon(state: &mut AppState, polygon_id: u64, name: String) {
    use_cases::editing::rename_polygon(state, polygon_id, name);
}
