//! Use-Cases für Werkzeugwechsel, Build-Session und Polygon-Session.
//!
//! Die Sessions selbst sind reine Zustandsautomaten; Snap-Auflösung und das
//! Übernehmen der Ergebnisse in die Stores passieren hier.

use super::editing;
use crate::app::state::EditorTool;
use crate::app::tools::{BuildPhase, ConstructionSession, PolygonClick, PolygonPhase};
use crate::app::AppState;
use crate::core::{resolve_snap, snap_to_grid, PolygonStyle, SnapPreview, SnapResult};
use glam::Vec2;

/// Wechselt das Werkzeug; laufende Sessions und Drags werden verworfen.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    if state.editor.active_tool == tool {
        return;
    }
    state.editor.reset_sessions();
    state.selection.drag = None;
    state.editor.active_tool = tool;
    log::info!("Werkzeug gewechselt: {:?}", tool);
}

/// Snap für die Build-Session; der zuletzt gestufte Node ist ausgeschlossen.
fn build_snap(state: &AppState, world_pos: Vec2) -> SnapResult {
    let exclude: Vec<u64> = state.editor.build_session.last_node_id().into_iter().collect();
    resolve_snap(
        &state.road_map,
        world_pos,
        &exclude,
        &state.options.snap_settings(),
    )
}

/// Stuft einen gesnappten Punkt; der erste Punkt übernimmt Typ und Breite aus den Optionen.
pub fn build_click(state: &mut AppState, world_pos: Vec2) {
    let snap = build_snap(state, world_pos);

    let road_kind = state.options.effective_road_type();
    let road_width = state.options.default_road_width;
    let session = &mut state.editor.build_session;
    if session.phase() == BuildPhase::Idle {
        session.road_kind = road_kind;
        session.road_width = road_width;
    }
    if session.add_point(&snap) {
        log::debug!(
            "Build: Punkt {} bei ({:.1}, {:.1}) gestuft ({:?})",
            session.staged_count(),
            snap.position.x,
            snap.position.y,
            snap.target
        );
    }
    state.editor.snap_preview = snap.preview();
}

/// Aktualisiert Snap-Vorschau und Gummiband-Endpunkt.
pub fn build_hover(state: &mut AppState, world_pos: Vec2) {
    let snap = build_snap(state, world_pos);
    state.editor.snap_preview = snap.preview();
    state.editor.build_session.set_hover(Some(snap.position));
}

/// Schließt die Build-Session ab und legt die Straßenkette an.
pub fn build_complete(state: &mut AppState) -> Vec<u64> {
    let Some(result) = state.editor.build_session.complete() else {
        return Vec::new();
    };
    state.editor.snap_preview = SnapPreview::None;
    editing::apply_build_result(state, &result)
}

/// Nimmt den letzten gestuften Punkt zurück.
pub fn build_remove_last(state: &mut AppState) {
    if state.editor.build_session.remove_last().is_none() {
        log::debug!("Build: kein Punkt zum Zurücknehmen");
    }
    if state.editor.build_session.phase() == BuildPhase::Idle {
        state.editor.snap_preview = SnapPreview::None;
    }
}

/// Bricht die Build-Session ohne Store-Änderung ab.
pub fn build_cancel(state: &mut AppState) {
    state.editor.build_session.abort();
    state.editor.snap_preview = SnapPreview::None;
}

fn default_polygon_style(state: &AppState) -> PolygonStyle {
    PolygonStyle {
        fill_color: state.options.polygon_fill_color.clone(),
        stroke_color: state.options.polygon_stroke_color.clone(),
        opacity: state.options.polygon_opacity,
    }
}

/// Klick im Polygon-Werkzeug: Eckpunkt stufen oder am ersten Eckpunkt schließen.
///
/// Eckpunkte rasten nur am Raster ein, nicht an Nodes oder Straßen.
pub fn polygon_click(state: &mut AppState, world_pos: Vec2, close_radius: f32) -> Option<u64> {
    let position = snap_to_grid(world_pos, &state.options.snap_settings()).position;

    if state.editor.polygon_session.phase() == PolygonPhase::Idle {
        state.editor.polygon_session.style = default_polygon_style(state);
    }
    match state.editor.polygon_session.click(position, close_radius) {
        PolygonClick::Closed(draft) => editing::apply_polygon_draft(state, draft),
        PolygonClick::Added | PolygonClick::Ignored => None,
    }
}

/// Aktualisiert den Gummiband-Endpunkt der Polygon-Session.
pub fn polygon_hover(state: &mut AppState, world_pos: Vec2) {
    let position = snap_to_grid(world_pos, &state.options.snap_settings()).position;
    state.editor.polygon_session.set_hover(Some(position));
}

/// Schließt das Polygon explizit (mindestens 3 Eckpunkte).
pub fn polygon_close(state: &mut AppState) -> Option<u64> {
    let draft = state.editor.polygon_session.close()?;
    editing::apply_polygon_draft(state, draft)
}

/// Nimmt den letzten Eckpunkt zurück.
pub fn polygon_remove_last(state: &mut AppState) {
    if state.editor.polygon_session.remove_last().is_none() {
        log::debug!("Polygon: kein Eckpunkt zum Zurücknehmen");
    }
}

/// Bricht die Polygon-Session ohne Store-Änderung ab.
pub fn polygon_cancel(state: &mut AppState) {
    state.editor.polygon_session.abort();
}
