//! Use-Case-Funktionen für Selektion und Manipulation.
//!
//! Aufgeteilt nach Phase:
//! - `pick`: Treffer nach fester Priorität bestimmen
//! - `drag`: Drag beginnen, fortsetzen, beenden

mod drag;
mod pick;

pub use drag::{clear_selection, drag_to, end_drag, pointer_down};
pub use pick::{pick, PickResult};
