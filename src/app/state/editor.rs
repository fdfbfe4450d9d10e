use crate::app::tools::{BuildSession, ConstructionSession, PolygonSession};
use crate::core::SnapPreview;
use glam::Vec2;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Nodes, Straßen und Polygone selektieren und verschieben
    #[default]
    Select,
    /// Straßenketten bauen
    Build,
    /// Polygone zeichnen
    Polygon,
    /// Einzelne Nodes platzieren
    AddNode,
    /// Ansicht verschieben
    Pan,
}

/// Zustand des aktuellen Editor-Werkzeugs inklusive beider Sessions
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Straßenketten-Session
    pub build_session: BuildSession,
    /// Polygon-Session
    pub polygon_session: PolygonSession,
    /// Snap-Vorschau für die Darstellung
    pub snap_preview: SnapPreview,
    /// Letzte Cursor-Position in Weltkoordinaten
    pub cursor_world: Option<Vec2>,
    /// Screen-Position beim Start eines Pan-Drags
    pub pan_anchor: Option<Vec2>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }

    /// Session des aktiven Werkzeugs (falls es eine hat).
    pub fn active_session(&self) -> Option<&dyn ConstructionSession> {
        match self.active_tool {
            EditorTool::Build => Some(&self.build_session),
            EditorTool::Polygon => Some(&self.polygon_session),
            _ => None,
        }
    }

    /// Mutable Session des aktiven Werkzeugs.
    pub fn active_session_mut(&mut self) -> Option<&mut dyn ConstructionSession> {
        match self.active_tool {
            EditorTool::Build => Some(&mut self.build_session),
            EditorTool::Polygon => Some(&mut self.polygon_session),
            _ => None,
        }
    }

    /// Bricht beide Sessions ab und leert die Vorschau.
    pub fn reset_sessions(&mut self) {
        self.build_session.cancel();
        self.polygon_session.cancel();
        self.snap_preview = SnapPreview::None;
        self.pan_anchor = None;
    }
}
