//! Use-Case-Funktionen für Pan und Zoom.

use crate::app::AppState;
use glam::Vec2;

/// Setzt die Ansicht auf Zoom 1 und Pan 0 zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.reset();
}

/// Zoomt um einen festen Schritt hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.zoom_in();
}

/// Zoomt um einen festen Schritt heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.zoom_out();
}

/// Verschiebt die Ansicht um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.pan(delta);
}

/// Zoomt so, dass der Weltpunkt unter `screen_focus` stehen bleibt.
pub fn zoom_at(state: &mut AppState, factor: f32, screen_focus: Vec2) {
    if !factor.is_finite() || factor <= 0.0 {
        log::warn!("Ungültiger Zoom-Faktor {} ignoriert", factor);
        return;
    }
    state.view.zoom_at(factor, screen_focus);
}

/// Merkt den Startpunkt eines Pan-Drags.
pub fn begin_pan(state: &mut AppState, screen_pos: Vec2) {
    state.editor.pan_anchor = Some(screen_pos);
}

/// Verschiebt um die Differenz zum letzten Anker.
pub fn pan_drag(state: &mut AppState, screen_pos: Vec2) {
    if let Some(anchor) = state.editor.pan_anchor {
        state.view.pan(screen_pos - anchor);
        state.editor.pan_anchor = Some(screen_pos);
    }
}

/// Beendet einen Pan-Drag.
pub fn end_pan(state: &mut AppState) {
    state.editor.pan_anchor = None;
}
