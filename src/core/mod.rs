//! Core-Domänentypen: Nodes, Straßen, Polygone, Hintergründe, View und Snap.

pub mod background;
pub mod camera;
pub mod color;
pub mod geometry;
pub mod node;
pub mod polygon;
pub mod polygon_store;
/// Topologie-Store
///
/// - RoadMap: Container für alle Nodes und Straßen
/// - RoadNode: gemeinsamer Knotenpunkt
/// - Road: Kurvensegment zwischen zwei Endpunkten
pub mod road;
pub mod road_map;
pub mod snap;
pub mod spatial;

pub use background::{is_embedded_src, BackgroundImage, BackgroundImagePatch, BackgroundLayers};
pub use camera::ViewTransform;
pub use color::is_valid_hex_color;
pub use geometry::{CurveSegment, CURVE_SAMPLES};
pub use node::RoadNode;
pub use polygon::{Polygon, PolygonStyle, PolygonVertex, MIN_VERTICES};
pub use polygon_store::{HandleSlot, PolygonStore};
pub use road::{Road, RoadKind};
pub use road_map::{RoadMap, RoadSplit, SELF_LOOP_RADIUS};
pub use snap::{resolve_snap, snap_to_grid, SnapPreview, SnapResult, SnapSettings, SnapTarget};
pub use spatial::{SpatialIndex, SpatialMatch};
