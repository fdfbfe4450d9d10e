//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::snapshot::{read_snapshot_file, write_snapshot_file, EditorDocument};
use anyhow::{bail, Context};
use std::path::PathBuf;
use std::sync::Arc;

/// Lädt einen Snapshot und ersetzt alle Stores sowie die Ansicht.
///
/// Alles-oder-nichts: schlägt das Lesen fehl, bleibt der Zustand unverändert.
/// Selektion, Sessions und Undo-Verlauf werden verworfen.
pub fn load_snapshot(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let path = PathBuf::from(path);
    let doc = read_snapshot_file(&path)
        .with_context(|| format!("Snapshot {} konnte nicht geladen werden", path.display()))?;

    let violations = doc.road_map.integrity_violations();
    if !violations.is_empty() {
        log::warn!(
            "Snapshot enthält {} Topologie-Abweichung(en), z.B.: {}",
            violations.len(),
            violations[0]
        );
    }

    log::info!(
        "Snapshot geladen: {} Nodes, {} Straßen, {} Polygone, {} Hintergründe",
        doc.road_map.node_count(),
        doc.road_map.road_count(),
        doc.polygons.len(),
        doc.backgrounds.len()
    );

    state.road_map = Arc::new(doc.road_map);
    state.polygons = Arc::new(doc.polygons);
    state.backgrounds = Arc::new(doc.backgrounds);
    state.view = doc.view;
    state.selection.clear();
    state.editor.reset_sessions();
    state.history.clear();
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Speichert den aktuellen Zustand.
///
/// Ohne Pfad wird der zuletzt verwendete Pfad genutzt.
pub fn save_snapshot(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let target = match path.map(PathBuf::from) {
        Some(path) => path,
        None => match &state.ui.current_file_path {
            Some(current) => current.clone(),
            None => bail!("Kein Speicherpfad angegeben und keine Datei geladen"),
        },
    };

    let doc = current_document(state);
    write_snapshot_file(&doc, &target)
        .with_context(|| format!("Snapshot {} konnte nicht gespeichert werden", target.display()))?;

    log::info!("Snapshot gespeichert nach: {}", target.display());
    state.ui.current_file_path = Some(target);
    Ok(())
}

/// Leert alle Stores, Sessions, die Selektion und die Ansicht.
///
/// Der Vorzustand bleibt per Undo erreichbar.
pub fn clear_all(state: &mut AppState) {
    state.record_undo_snapshot();
    state.road_map_mut().clear();
    state.polygons_mut().clear();
    state.backgrounds_mut().clear();
    state.editor.reset_sessions();
    state.selection.clear();
    state.view.reset();
    log::info!("Editor geleert");
}

/// Dokument-Kopie des aktuellen Zustands für den Writer.
fn current_document(state: &AppState) -> EditorDocument {
    EditorDocument {
        road_map: (*state.road_map).clone(),
        polygons: (*state.polygons).clone(),
        backgrounds: (*state.backgrounds).clone(),
        view: state.view,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Selection;
    use glam::Vec2;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("roadnet_file_io_{}_{}.json", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn failed_load_keeps_state() {
        let mut state = AppState::new();
        state.road_map_mut().add_node(Vec2::ZERO);

        let result = load_snapshot(&mut state, "/nonexistent/roadnet.json".into());

        assert!(result.is_err());
        assert_eq!(state.node_count(), 1);
        assert!(state.ui.current_file_path.is_none());
    }

    #[test]
    fn save_without_path_requires_current_file() {
        let mut state = AppState::new();

        assert!(save_snapshot(&mut state, None).is_err());
    }

    #[test]
    fn save_then_load_restores_stores_and_resets_transient_state() {
        let path = temp_path("roundtrip");
        let mut state = AppState::new();
        let a = state.road_map_mut().add_node(Vec2::ZERO);
        let b = state.road_map_mut().add_node(Vec2::new(50.0, 0.0));
        state
            .road_map_mut()
            .connect(a, b, crate::core::RoadKind::Straight, 6.0);
        state.view.pan_offset = Vec2::new(3.0, 4.0);
        save_snapshot(&mut state, Some(path.clone())).expect("Speichern erwartet");

        let mut other = AppState::new();
        other.road_map_mut().add_node(Vec2::ONE);
        other.record_undo_snapshot();
        other.selection.selected = Selection::Node(1);
        load_snapshot(&mut other, path.clone()).expect("Laden erwartet");

        assert_eq!(*other.road_map, *state.road_map);
        assert_eq!(other.view.pan_offset, Vec2::new(3.0, 4.0));
        assert_eq!(other.selection.selected, Selection::None);
        assert!(!other.can_undo());
        assert_eq!(
            other.ui.current_file_path.as_deref(),
            Some(std::path::Path::new(&path))
        );

        // Erneutes Speichern ohne Pfad nutzt die geladene Datei
        save_snapshot(&mut other, None).expect("Speichern erwartet");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn clear_all_is_undoable() {
        let mut state = AppState::new();
        state.road_map_mut().add_node(Vec2::ZERO);
        state.view.zoom = 3.0;

        clear_all(&mut state);
        assert_eq!(state.node_count(), 0);
        assert_eq!(state.view.zoom, 1.0);

        crate::app::handlers::history::undo(&mut state);
        assert_eq!(state.node_count(), 1);
    }
}
