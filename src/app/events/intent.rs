use super::super::state::EditorTool;
use crate::core::{BackgroundImagePatch, PolygonStyle, RoadKind};
use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Zeigerpositionen kommen in Bildschirmkoordinaten an.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger gedrückt
    PointerPressed { screen_pos: Vec2 },
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    PointerMoved { screen_pos: Vec2 },
    /// Zeiger losgelassen
    PointerReleased { screen_pos: Vec2 },
    /// Enter: aktive Session abschließen
    ConfirmRequested,
    /// Escape: aktive Session abbrechen bzw. Selektion aufheben
    CancelRequested,
    /// Backspace: letzten gestuften Punkt zurücknehmen
    UndoLastPointRequested,
    /// Entf: Selektion löschen
    DeleteSelectedRequested,
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },

    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Mausrad-Zoom um einen Bildschirmpunkt
    ScrollZoom { factor: f32, screen_focus: Vec2 },
    /// Ansicht um ein Bildschirm-Delta verschieben
    CameraPan { delta: Vec2 },
    /// Ansicht zurücksetzen (Zoom 1, kein Versatz)
    ResetViewRequested,

    /// Fangradius (zugleich Rasterweite) setzen
    SetSnapDistance { distance: f32 },
    /// Rasterfang ein-/ausschalten
    SetGridSnap { enabled: bool },
    /// Standardbreite neuer Straßen
    SetDefaultRoadWidth { width: f32 },
    /// Standardtyp neuer Straßen
    SetDefaultRoadType { kind: RoadKind },
    /// Kurvenmodus: neue Straßen werden kubisch
    SetCurveMode { enabled: bool },
    /// Maßstab (Meter pro Welteinheit)
    SetMetersPerPixel { meters_per_pixel: f32 },
    /// Standardstil neuer Polygone
    SetDefaultPolygonStyle { style: PolygonStyle },

    /// Breite einer Straße ändern
    SetRoadWidthRequested { road_id: u64, width: f32 },
    /// Namen einer Straße ändern (leer = kein Name)
    SetRoadNameRequested { road_id: u64, name: String },
    /// Typ einer Straße ändern
    SetRoadTypeRequested { road_id: u64, kind: RoadKind },
    /// Füllfarbe eines Polygons ändern
    SetPolygonFillColorRequested { polygon_id: u64, color: String },
    /// Randfarbe eines Polygons ändern
    SetPolygonStrokeColorRequested { polygon_id: u64, color: String },
    /// Deckkraft eines Polygons ändern
    SetPolygonOpacityRequested { polygon_id: u64, opacity: f32 },
    /// Polygon umbenennen (leer = kein Name)
    RenamePolygonRequested { polygon_id: u64, name: String },

    /// Hintergrundbild hinzufügen (Größe 0 = Dekodieren steht noch aus)
    AddBackgroundImageRequested {
        src: String,
        name: String,
        position: Vec2,
        size: Vec2,
    },
    /// Hintergrundbild partiell aktualisieren
    UpdateBackgroundImageRequested {
        image_id: u64,
        patch: BackgroundImagePatch,
    },
    /// Hintergrundbild entfernen
    RemoveBackgroundImageRequested { image_id: u64 },
    /// Externer Decoder hat die Pixelgröße ermittelt
    BackgroundImageDecoded { image_id: u64, size: Vec2 },
    /// Sichtbarkeit eines Hintergrundbilds umschalten
    ToggleBackgroundVisibilityRequested { image_id: u64 },
    /// Sperre eines Hintergrundbilds umschalten
    ToggleBackgroundLockRequested { image_id: u64 },

    /// Snapshot speichern (None = aktueller Pfad)
    SaveRequested { path: Option<String> },
    /// Snapshot laden
    LoadRequested { path: String },
    /// Alles leeren (Stores, Sessions, Selektion, Ansicht)
    ClearAllRequested,
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
