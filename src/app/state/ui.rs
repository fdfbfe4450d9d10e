use std::path::PathBuf;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Pfad des zuletzt geladenen oder gespeicherten Snapshots
    pub current_file_path: Option<PathBuf>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
