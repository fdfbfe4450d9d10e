//! Use-Case: Eigenschaften einer Straße ändern (Breite, Name, Typ).

use crate::app::AppState;
use crate::core::RoadKind;

/// Setzt die Breite einer Straße.
pub fn set_road_width(state: &mut AppState, road_id: u64, width: f32) {
    if !width.is_finite() {
        log::warn!("Ungültige Straßenbreite {} ignoriert", width);
        return;
    }
    let Some(road) = state.road_map.road(road_id) else {
        log::debug!("Straße {} existiert nicht", road_id);
        return;
    };
    if road.width == width {
        return;
    }
    state.record_undo_snapshot();
    state.road_map_mut().set_road_width(road_id, width);
}

/// Setzt den Anzeigenamen einer Straße; ein leerer Name entfernt ihn.
pub fn set_road_name(state: &mut AppState, road_id: u64, name: String) {
    if state.road_map.road(road_id).is_none() {
        log::debug!("Straße {} existiert nicht", road_id);
        return;
    }
    state.record_undo_snapshot();
    state.road_map_mut().set_road_name(road_id, Some(name));
}

/// Wechselt den Typ einer Straße. Selbstschleifen bleiben Kreise.
pub fn set_road_type(state: &mut AppState, road_id: u64, kind: RoadKind) {
    let Some(road) = state.road_map.road(road_id) else {
        log::debug!("Straße {} existiert nicht", road_id);
        return;
    };
    if road.kind == kind {
        return;
    }
    if road.kind == RoadKind::Circle && road.end_node_id.is_none() {
        log::warn!("Straße {} ist eine Selbstschleife und bleibt ein Kreis", road_id);
        return;
    }
    state.record_undo_snapshot();
    state.road_map_mut().set_road_kind(road_id, kind);
    log::info!("Straße {} ist jetzt {:?}", road_id, kind);
}
