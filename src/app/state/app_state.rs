use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{BackgroundLayers, PolygonStore, RoadMap, ViewTransform};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorToolState, SelectionState, UiState};

/// Hauptzustand der Anwendung (Aggregat aller Stores, Sessions und der View)
pub struct AppState {
    /// Nodes und Straßen (Arc für O(1)-Snapshots)
    pub road_map: Arc<RoadMap>,
    /// Polygone
    pub polygons: Arc<PolygonStore>,
    /// Hintergrundbilder
    pub backgrounds: Arc<BackgroundLayers>,
    /// Pan/Zoom der Zeichenfläche
    pub view: ViewTransform,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State inklusive Sessions
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut editor = EditorToolState::new();
        editor.build_session.road_kind = options.effective_road_type();
        editor.build_session.road_width = options.default_road_width;
        editor.polygon_session.style = crate::core::PolygonStyle {
            fill_color: options.polygon_fill_color.clone(),
            stroke_color: options.polygon_stroke_color.clone(),
            opacity: options.polygon_opacity,
        };
        Self {
            road_map: Arc::new(RoadMap::new()),
            polygons: Arc::new(PolygonStore::new()),
            backgrounds: Arc::new(BackgroundLayers::new()),
            view: ViewTransform::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor,
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
        }
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.road_map.node_count()
    }

    /// Gibt die Anzahl der Straßen zurück (für UI-Anzeige)
    pub fn road_count(&self) -> usize {
        self.road_map.road_count()
    }

    /// Gibt die Anzahl der Polygone zurück (für UI-Anzeige)
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Mutable RoadMap (Copy-on-Write gegenüber Snapshots).
    pub fn road_map_mut(&mut self) -> &mut RoadMap {
        Arc::make_mut(&mut self.road_map)
    }

    /// Mutable Polygon-Store (Copy-on-Write gegenüber Snapshots).
    pub fn polygons_mut(&mut self) -> &mut PolygonStore {
        Arc::make_mut(&mut self.polygons)
    }

    /// Mutable Hintergrund-Ebenen (Copy-on-Write gegenüber Snapshots).
    pub fn backgrounds_mut(&mut self) -> &mut BackgroundLayers {
        Arc::make_mut(&mut self.backgrounds)
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
