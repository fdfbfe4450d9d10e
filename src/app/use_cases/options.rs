//! Use-Cases für Editor-Einstellungen.
//!
//! Skalare Einstellungen sind keine Undo-Schritte. Neue Straßen und Polygone
//! übernehmen Typ, Breite und Stil beim ersten Klick ihrer Session.

use crate::app::AppState;
use crate::core::{PolygonStyle, RoadKind};
use crate::shared::EditorOptions;

/// Setzt den Fangradius (Welteinheiten, nicht negativ).
pub fn set_snap_distance(state: &mut AppState, distance: f32) {
    if !distance.is_finite() {
        log::warn!("Ungültiger Fangradius {} ignoriert", distance);
        return;
    }
    state.options.snap_distance = distance.max(0.0);
}

pub fn set_grid_snap(state: &mut AppState, enabled: bool) {
    state.options.grid_snap = enabled;
}

/// Setzt die Standardbreite neuer Straßen.
pub fn set_default_road_width(state: &mut AppState, width: f32) {
    if !width.is_finite() || width <= 0.0 {
        log::warn!("Ungültige Straßenbreite {} ignoriert", width);
        return;
    }
    state.options.default_road_width = width;
}

pub fn set_default_road_type(state: &mut AppState, kind: RoadKind) {
    state.options.default_road_type = kind;
}

/// Kurvenmodus: neue Straßen werden kubisch angelegt.
pub fn set_curve_mode(state: &mut AppState, enabled: bool) {
    state.options.curve_mode = enabled;
}

/// Setzt den Maßstab und berechnet alle Polygonflächen neu.
pub fn set_meters_per_pixel(state: &mut AppState, meters_per_pixel: f32) {
    if !meters_per_pixel.is_finite() || meters_per_pixel <= 0.0 {
        log::warn!("Ungültiger Maßstab {} ignoriert", meters_per_pixel);
        return;
    }
    state.options.meters_per_pixel = meters_per_pixel;
    if !state.polygons.is_empty() {
        state.polygons_mut().recompute_all_areas(meters_per_pixel);
    }
    log::info!("Maßstab: {} m/px", meters_per_pixel);
}

/// Setzt den Stil neuer Polygone. Ungültige Farben werden abgelehnt.
pub fn set_default_polygon_style(state: &mut AppState, style: PolygonStyle) {
    use crate::core::is_valid_hex_color;
    if !is_valid_hex_color(&style.fill_color) || !is_valid_hex_color(&style.stroke_color) {
        log::warn!(
            "Ungültiger Polygonstil ({}, {}) ignoriert",
            style.fill_color,
            style.stroke_color
        );
        return;
    }
    state.options.polygon_fill_color = style.fill_color;
    state.options.polygon_stroke_color = style.stroke_color;
    state.options.polygon_opacity = style.opacity.clamp(0.0, 1.0);
}

/// Übernimmt einen kompletten Optionssatz und speichert ihn neben der Binary.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    replace_options(state, options);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt alle Optionen auf Standardwerte zurück und speichert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}

/// Tauscht die Optionen aus; ein geänderter Maßstab aktualisiert die Flächen.
///
/// Ungültige Einzelwerte behalten ihren bisherigen Wert.
fn replace_options(state: &mut AppState, options: EditorOptions) {
    let options = options.sanitized(&state.options);
    let mpp_changed = options.meters_per_pixel != state.options.meters_per_pixel;
    state.options = options;
    if mpp_changed && !state.polygons.is_empty() {
        let mpp = state.options.meters_per_pixel;
        state.polygons_mut().recompute_all_areas(mpp);
    }
}
