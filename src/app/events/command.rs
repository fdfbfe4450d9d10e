use super::super::state::EditorTool;
use crate::core::{BackgroundImagePatch, PolygonStyle, RoadKind};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
/// Positionen und Radien sind bereits in Weltkoordinaten umgerechnet.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Cursor-Position merken
    UpdateCursor { world_pos: Vec2 },

    /// Build-Session: gesnappten Punkt stufen
    BuildClick { world_pos: Vec2 },
    /// Build-Session: Hover-Vorschau aktualisieren
    BuildHover { world_pos: Vec2 },
    /// Build-Session: abschließen und Straßen anlegen
    BuildComplete,
    /// Build-Session: letzten Punkt zurücknehmen
    BuildRemoveLast,
    /// Build-Session: abbrechen
    BuildCancel,

    /// Polygon-Session: Eckpunkt stufen oder schließen
    PolygonClick { world_pos: Vec2, close_radius: f32 },
    /// Polygon-Session: Hover-Vorschau aktualisieren
    PolygonHover { world_pos: Vec2 },
    /// Polygon-Session: explizit schließen
    PolygonClose,
    /// Polygon-Session: letzten Eckpunkt zurücknehmen
    PolygonRemoveLast,
    /// Polygon-Session: abbrechen
    PolygonCancel,

    /// Einzelnen Node an Weltposition hinzufügen
    AddNodeAtPosition { world_pos: Vec2 },

    /// Select-Tool: Pick nach Priorität, ggf. Drag beginnen
    PointerDown {
        world_pos: Vec2,
        pick_radius: f32,
        handle_radius: f32,
        hit_tolerance: f32,
    },
    /// Select-Tool: laufenden Drag fortsetzen
    DragTo { world_pos: Vec2 },
    /// Select-Tool: Drag beenden
    EndDrag,
    /// Selektion aufheben
    ClearSelection,
    /// Selektion löschen
    DeleteSelected,

    /// Pan-Tool: Drag beginnen
    BeginPan { screen_pos: Vec2 },
    /// Pan-Tool: Drag fortsetzen
    PanDrag { screen_pos: Vec2 },
    /// Pan-Tool: Drag beenden
    EndPan,

    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Zoomen mit festgehaltenem Bildschirmpunkt
    ZoomCamera { factor: f32, screen_focus: Vec2 },
    /// Ansicht um Bildschirm-Delta verschieben
    PanCamera { delta: Vec2 },
    /// Ansicht zurücksetzen
    ResetView,

    /// Fangradius setzen
    SetSnapDistance { distance: f32 },
    /// Rasterfang setzen
    SetGridSnap { enabled: bool },
    /// Standardbreite setzen
    SetDefaultRoadWidth { width: f32 },
    /// Standardtyp setzen
    SetDefaultRoadType { kind: RoadKind },
    /// Kurvenmodus setzen
    SetCurveMode { enabled: bool },
    /// Maßstab setzen (Flächen werden neu berechnet)
    SetMetersPerPixel { meters_per_pixel: f32 },
    /// Standardstil neuer Polygone setzen
    SetDefaultPolygonStyle { style: PolygonStyle },

    /// Straßenbreite setzen
    SetRoadWidth { road_id: u64, width: f32 },
    /// Straßennamen setzen
    SetRoadName { road_id: u64, name: String },
    /// Straßentyp setzen
    SetRoadType { road_id: u64, kind: RoadKind },
    /// Polygon-Füllfarbe setzen
    SetPolygonFillColor { polygon_id: u64, color: String },
    /// Polygon-Randfarbe setzen
    SetPolygonStrokeColor { polygon_id: u64, color: String },
    /// Polygon-Deckkraft setzen
    SetPolygonOpacity { polygon_id: u64, opacity: f32 },
    /// Polygon umbenennen
    RenamePolygon { polygon_id: u64, name: String },

    /// Hintergrundbild hinzufügen
    AddBackgroundImage {
        src: String,
        name: String,
        position: Vec2,
        size: Vec2,
    },
    /// Hintergrundbild aktualisieren
    UpdateBackgroundImage {
        image_id: u64,
        patch: BackgroundImagePatch,
    },
    /// Hintergrundbild entfernen
    RemoveBackgroundImage { image_id: u64 },
    /// Pixelgröße nach Dekodierung setzen
    SetBackgroundImageSize { image_id: u64, size: Vec2 },
    /// Sichtbarkeit umschalten
    ToggleBackgroundVisibility { image_id: u64 },
    /// Sperre umschalten
    ToggleBackgroundLock { image_id: u64 },

    /// Snapshot speichern (None = aktueller Pfad)
    SaveFile { path: Option<String> },
    /// Snapshot laden
    LoadFile { path: String },
    /// Alles leeren
    ClearAll,
    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
