//! Handler für Hintergrundbilder.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::BackgroundImagePatch;
use glam::Vec2;

/// Fügt ein Hintergrundbild hinzu.
pub fn add(state: &mut AppState, src: String, name: String, position: Vec2, size: Vec2) {
    use_cases::background::add_image(state, src, name, position, size);
}

/// Führt einen Patch zusammen.
pub fn update(state: &mut AppState, image_id: u64, patch: BackgroundImagePatch) {
    use_cases::background::update_image(state, image_id, patch);
}

/// Entfernt ein Hintergrundbild.
pub fn remove(state: &mut AppState, image_id: u64) {
    use_cases::background::remove_image(state, image_id);
}

/// Übernimmt die dekodierte Pixelgröße.
pub fn set_size(state: &mut AppState, image_id: u64, size: Vec2) {
    use_cases::background::set_image_size(state, image_id, size);
}

/// Schaltet die Sichtbarkeit um.
pub fn toggle_visibility(state: &mut AppState, image_id: u64) {
    use_cases::background::toggle_visibility(state, image_id);
}

/// Schaltet die Sperre um.
pub fn toggle_lock(state: &mut AppState, image_id: u64) {
    use_cases::background::toggle_lock(state, image_id);
}
