//! Use-Case-Funktionen für Node-, Straßen- und Polygon-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_node`: Einzelnen Node hinzufügen
//! - `apply_build_result`: Ergebnis der Build-Session übernehmen
//! - `apply_polygon_draft`: Geschlossenes Polygon übernehmen
//! - `delete_selected`: Selektion löschen
//! - `road_properties`: Breite, Name, Typ einer Straße
//! - `polygon_properties`: Farben, Deckkraft, Name eines Polygons

mod add_node;
mod apply_build_result;
mod apply_polygon_draft;
mod delete_selected;
mod polygon_properties;
mod road_properties;

pub use add_node::add_node_at_position;
pub use apply_build_result::{apply_build_result, apply_build_result_no_snapshot};
pub use apply_polygon_draft::apply_polygon_draft;
pub use delete_selected::delete_selected;
pub use polygon_properties::{
    rename_polygon, set_polygon_fill_color, set_polygon_opacity, set_polygon_stroke_color,
};
pub use road_properties::{set_road_name, set_road_type, set_road_width};
