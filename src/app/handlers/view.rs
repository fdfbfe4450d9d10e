//! Handler für Pan und Zoom der Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Setzt die Ansicht auf den Standardzustand zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Verschiebt die Ansicht um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt um einen festgehaltenen Bildschirmpunkt.
pub fn zoom_at(state: &mut AppState, factor: f32, screen_focus: Vec2) {
    use_cases::camera::zoom_at(state, factor, screen_focus);
}

/// Startet einen Pan-Drag.
pub fn begin_pan(state: &mut AppState, screen_pos: Vec2) {
    use_cases::camera::begin_pan(state, screen_pos);
}

/// Setzt einen Pan-Drag fort.
pub fn pan_drag(state: &mut AppState, screen_pos: Vec2) {
    use_cases::camera::pan_drag(state, screen_pos);
}

/// Beendet einen Pan-Drag.
pub fn end_pan(state: &mut AppState) {
    use_cases::camera::end_pan(state);
}
