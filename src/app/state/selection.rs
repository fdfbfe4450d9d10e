use crate::core::HandleSlot;
use glam::Vec2;

/// Aktuell selektiertes Objekt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Node(u64),
    Road(u64),
    Polygon(u64),
    PolygonVertex { polygon_id: u64, vertex_id: u64 },
}

impl Selection {
    /// ID des Polygons, falls Polygon oder einer seiner Eckpunkte selektiert ist.
    pub fn polygon_id(&self) -> Option<u64> {
        match *self {
            Selection::Polygon(id) | Selection::PolygonVertex { polygon_id: id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Verweis auf einen Bézier-Handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRef {
    /// Handle einer kubischen Straße (`index` 0 = Start, 1 = Ende)
    Road { road_id: u64, index: usize },
    /// Handle eines Polygon-Eckpunkts
    Vertex {
        polygon_id: u64,
        vertex_id: u64,
        slot: HandleSlot,
    },
}

/// Was gerade gezogen wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Node(u64),
    PolygonVertex { polygon_id: u64, vertex_id: u64 },
    Polygon(u64),
    Handle(HandleRef),
}

/// Laufender Drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub target: DragTarget,
    /// Abstand Objekt − Zeiger beim Drücken
    pub grab_offset: Vec2,
    /// Letzte Zeigerposition (für Delta-Drags)
    pub last_world: Vec2,
    /// Ob bereits ein Undo-Snapshot für diesen Drag erstellt wurde
    pub snapshot_taken: bool,
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected: Selection,
    pub drag: Option<DragState>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt Selektion und Drag auf.
    pub fn clear(&mut self) {
        self.selected = Selection::None;
        self.drag = None;
    }
}
