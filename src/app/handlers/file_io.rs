//! Handler für Datei-Operationen (Snapshot laden, speichern, leeren).

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt einen Snapshot und propagiert Fehler an den Aufrufer.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_snapshot(state, path)
}

/// Speichert den Snapshot (None = aktueller Pfad).
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_snapshot(state, path)
}

/// Leert Stores, Sessions, Selektion und Ansicht.
pub fn clear_all(state: &mut AppState) {
    use_cases::file_io::clear_all(state);
}
