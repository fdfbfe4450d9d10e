//! ConstructionSession-Trait: gemeinsame Schnittstelle der Konstruktions-Sessions.

use glam::Vec2;

/// Schnittstelle für Build- und Polygon-Session.
///
/// Erlaubt Handlern, Abbruch, Rücknahme und Hover-Vorschau unabhängig vom
/// aktiven Werkzeug zu behandeln.
pub trait ConstructionSession {
    /// Anzeigename für die Toolbar
    fn name(&self) -> &str;

    /// Statustext für das Properties-Panel
    fn status_text(&self) -> &str;

    /// Sind Punkte gestuft?
    fn is_active(&self) -> bool;

    /// Anzahl gestufter Punkte
    fn staged_count(&self) -> usize;

    /// Positionen aller gestuften Punkte (für die Darstellung).
    fn staged_positions(&self) -> Vec<Vec2>;

    /// Entfernt den zuletzt gestuften Punkt. `false` wenn nichts gestuft war.
    fn remove_last_point(&mut self) -> bool;

    /// Verwirft alle gestuften Punkte ohne Store-Schreibzugriff.
    fn cancel(&mut self);

    /// Aktualisiert die Cursor-Position für die Gummiband-Vorschau.
    fn set_hover(&mut self, position: Option<Vec2>);

    /// Gummiband vom letzten gestuften Punkt zum Cursor.
    fn rubber_band(&self) -> Option<(Vec2, Vec2)>;
}
