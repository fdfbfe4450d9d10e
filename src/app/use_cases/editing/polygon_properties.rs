//! Use-Case: Darstellungsattribute eines Polygons ändern.

use crate::app::AppState;
use crate::core::is_valid_hex_color;

fn polygon_exists(state: &AppState, polygon_id: u64) -> bool {
    if state.polygons.get(polygon_id).is_none() {
        log::debug!("Polygon {} existiert nicht", polygon_id);
        return false;
    }
    true
}

/// Setzt die Füllfarbe; ungültige Farbwerte werden abgelehnt.
pub fn set_polygon_fill_color(state: &mut AppState, polygon_id: u64, color: &str) {
    if !is_valid_hex_color(color) {
        log::warn!("Ungültige Füllfarbe '{}' abgelehnt", color);
        return;
    }
    if !polygon_exists(state, polygon_id) {
        return;
    }
    state.record_undo_snapshot();
    state.polygons_mut().set_fill_color(polygon_id, color);
}

/// Setzt die Randfarbe; ungültige Farbwerte werden abgelehnt.
pub fn set_polygon_stroke_color(state: &mut AppState, polygon_id: u64, color: &str) {
    if !is_valid_hex_color(color) {
        log::warn!("Ungültige Randfarbe '{}' abgelehnt", color);
        return;
    }
    if !polygon_exists(state, polygon_id) {
        return;
    }
    state.record_undo_snapshot();
    state.polygons_mut().set_stroke_color(polygon_id, color);
}

/// Setzt die Deckkraft (geklemmt auf `[0, 1]`).
pub fn set_polygon_opacity(state: &mut AppState, polygon_id: u64, opacity: f32) {
    if !opacity.is_finite() {
        log::warn!("Ungültige Deckkraft {} abgelehnt", opacity);
        return;
    }
    if !polygon_exists(state, polygon_id) {
        return;
    }
    state.record_undo_snapshot();
    state.polygons_mut().set_opacity(polygon_id, opacity);
}

/// Benennt ein Polygon um; leerer Name entfernt ihn.
pub fn rename_polygon(state: &mut AppState, polygon_id: u64, name: String) {
    if !polygon_exists(state, polygon_id) {
        return;
    }
    state.record_undo_snapshot();
    state.polygons_mut().rename(polygon_id, Some(name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PolygonStyle;
    use glam::Vec2;

    fn state_with_triangle() -> (AppState, u64) {
        let mut state = AppState::new();
        let vertices: Vec<_> = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)]
            .into_iter()
            .map(|p| (p, p, p))
            .collect();
        let id = state
            .polygons_mut()
            .add(&vertices, PolygonStyle::default(), 1.0)
            .expect("Polygon erwartet");
        (state, id)
    }

    #[test]
    fn valid_fill_color_is_applied() {
        let (mut state, id) = state_with_triangle();

        set_polygon_fill_color(&mut state, id, "#ff000080");

        assert_eq!(state.polygons.get(id).expect("Polygon erwartet").fill_color, "#ff000080");
    }

    #[test]
    fn malformed_color_keeps_previous_value() {
        let (mut state, id) = state_with_triangle();
        let before = state.polygons.get(id).expect("Polygon erwartet").stroke_color.clone();

        set_polygon_stroke_color(&mut state, id, "red");

        let polygon = state.polygons.get(id).expect("Polygon erwartet");
        assert_eq!(polygon.stroke_color, before);
        assert!(!state.can_undo());
    }

    #[test]
    fn opacity_is_clamped() {
        let (mut state, id) = state_with_triangle();

        set_polygon_opacity(&mut state, id, 3.0);

        assert_eq!(state.polygons.get(id).expect("Polygon erwartet").opacity, 1.0);
    }
}
