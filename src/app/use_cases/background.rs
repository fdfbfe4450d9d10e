//! Use-Cases für Hintergrundbilder.

use crate::app::AppState;
use crate::core::BackgroundImagePatch;
use glam::Vec2;

/// Legt ein Hintergrundbild mit der Standard-Deckkraft aus den Optionen an.
pub fn add_image(state: &mut AppState, src: String, name: String, position: Vec2, size: Vec2) -> u64 {
    state.record_undo_snapshot();
    let opacity = state.options.background_opacity_default;
    state
        .backgrounds_mut()
        .add(src, name, position, size, opacity)
}

/// Führt einen Patch auf ein bestehendes Bild zusammen.
pub fn update_image(state: &mut AppState, image_id: u64, patch: BackgroundImagePatch) {
    if state.backgrounds.get(image_id).is_none() {
        log::debug!("Hintergrundbild {} existiert nicht", image_id);
        return;
    }
    state.record_undo_snapshot();
    state.backgrounds_mut().update(image_id, patch);
}

/// Entfernt ein Hintergrundbild.
pub fn remove_image(state: &mut AppState, image_id: u64) {
    if state.backgrounds.get(image_id).is_none() {
        log::debug!("Hintergrundbild {} existiert nicht", image_id);
        return;
    }
    state.record_undo_snapshot();
    if let Some(image) = state.backgrounds_mut().remove(image_id) {
        log::info!("Hintergrundbild {} '{}' entfernt", image.id, image.name);
    }
}

/// Trägt die Pixelgröße nach abgeschlossenem Dekodieren ein.
///
/// Kein Undo-Schritt: die Größe ist eine Eigenschaft der Bilddaten.
pub fn set_image_size(state: &mut AppState, image_id: u64, size: Vec2) {
    if !state.backgrounds_mut().set_image_size(image_id, size) {
        log::debug!("Größe für unbekanntes Hintergrundbild {} verworfen", image_id);
    }
}

pub fn toggle_visibility(state: &mut AppState, image_id: u64) {
    if state.backgrounds.get(image_id).is_none() {
        return;
    }
    state.record_undo_snapshot();
    state.backgrounds_mut().toggle_visibility(image_id);
}

pub fn toggle_lock(state: &mut AppState, image_id: u64) {
    if state.backgrounds.get(image_id).is_none() {
        return;
    }
    state.record_undo_snapshot();
    state.backgrounds_mut().toggle_lock(image_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_image() -> (AppState, u64) {
        let mut state = AppState::new();
        state.options.background_opacity_default = 0.6;
        let id = add_image(
            &mut state,
            "data:image/png;base64,AAAA".into(),
            "Luftbild".into(),
            Vec2::new(10.0, 20.0),
            Vec2::ZERO,
        );
        (state, id)
    }

    #[test]
    fn add_uses_default_opacity_and_is_undoable() {
        let (mut state, id) = state_with_image();

        let image = state.backgrounds.get(id).expect("Bild erwartet");
        assert_eq!(image.opacity, 0.6);
        assert_eq!(image.width, 0.0);

        crate::app::handlers::history::undo(&mut state);
        assert!(state.backgrounds.is_empty());
    }

    #[test]
    fn decoded_size_applies_to_locked_image() {
        let (mut state, id) = state_with_image();
        toggle_lock(&mut state, id);

        set_image_size(&mut state, id, Vec2::new(640.0, 480.0));

        let image = state.backgrounds.get(id).expect("Bild erwartet");
        assert_eq!((image.width, image.height), (640.0, 480.0));
    }

    #[test]
    fn locked_image_keeps_position_but_accepts_opacity() {
        let (mut state, id) = state_with_image();
        toggle_lock(&mut state, id);

        update_image(
            &mut state,
            id,
            BackgroundImagePatch {
                position: Some(Vec2::new(99.0, 99.0)),
                opacity: Some(0.2),
                ..Default::default()
            },
        );

        let image = state.backgrounds.get(id).expect("Bild erwartet");
        assert_eq!(image.position, Vec2::new(10.0, 20.0));
        assert_eq!(image.opacity, 0.2);
    }

    #[test]
    fn unknown_image_records_no_undo() {
        let mut state = AppState::new();

        remove_image(&mut state, 42);
        toggle_visibility(&mut state, 42);
        update_image(&mut state, 42, BackgroundImagePatch::default());

        assert!(!state.can_undo());
    }

    #[test]
    fn remove_and_toggle_visibility() {
        let (mut state, id) = state_with_image();

        toggle_visibility(&mut state, id);
        assert!(!state.backgrounds.get(id).expect("Bild erwartet").visible);

        remove_image(&mut state, id);
        assert!(state.backgrounds.get(id).is_none());
    }
}
