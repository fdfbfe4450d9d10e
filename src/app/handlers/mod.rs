//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod background;
pub mod editing;
pub mod file_io;
pub mod history;
pub mod options;
pub mod selection;
pub mod sessions;
pub mod view;
