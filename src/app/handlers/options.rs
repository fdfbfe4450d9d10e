//! Handler für Editor-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{PolygonStyle, RoadKind};
use crate::shared::EditorOptions;

/// Setzt den Fangradius.
pub fn set_snap_distance(state: &mut AppState, distance: f32) {
    use_cases::options::set_snap_distance(state, distance);
}

/// Schaltet den Rasterfang.
pub fn set_grid_snap(state: &mut AppState, enabled: bool) {
    use_cases::options::set_grid_snap(state, enabled);
}

/// Setzt die Standardbreite neuer Straßen.
pub fn set_default_road_width(state: &mut AppState, width: f32) {
    use_cases::options::set_default_road_width(state, width);
}

/// Setzt den Standardtyp neuer Straßen.
pub fn set_default_road_type(state: &mut AppState, kind: RoadKind) {
    use_cases::options::set_default_road_type(state, kind);
}

/// Schaltet den Kurvenmodus.
pub fn set_curve_mode(state: &mut AppState, enabled: bool) {
    use_cases::options::set_curve_mode(state, enabled);
}

/// Setzt den Maßstab.
pub fn set_meters_per_pixel(state: &mut AppState, meters_per_pixel: f32) {
    use_cases::options::set_meters_per_pixel(state, meters_per_pixel);
}

/// Setzt den Standardstil neuer Polygone.
pub fn set_default_polygon_style(state: &mut AppState, style: PolygonStyle) {
    use_cases::options::set_default_polygon_style(state, style);
}

/// Übernimmt Optionen und persistiert sie.
pub fn apply(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    use_cases::options::apply_options(state, options)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::reset_options(state)
}
