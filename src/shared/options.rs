//! Zentrale Konfiguration des Straßennetz-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{is_valid_hex_color, RoadKind, SnapSettings};
use serde::{Deserialize, Serialize};

// ── Snap ────────────────────────────────────────────────────────────

/// Fangradius (Welteinheiten) und Rasterweite.
pub const SNAP_DISTANCE: f32 = 20.0;

// ── Straßen ─────────────────────────────────────────────────────────

/// Standard-Breite neuer Straßen in Welteinheiten.
pub const DEFAULT_ROAD_WIDTH: f32 = 8.0;
/// Meter pro Welteinheit für Flächen- und Längenanzeige.
pub const METERS_PER_PIXEL: f32 = 1.0;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius für Nodes und Polygon-Eckpunkte in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 10.0;
/// Pick-Radius für Bézier-Handles in Screen-Pixeln.
pub const HANDLE_PICK_RADIUS_PX: f32 = 8.0;
/// Zusätzliche Treffer-Toleranz für Straßen in Screen-Pixeln.
pub const HIT_TOLERANCE_PX: f32 = 5.0;
/// Radius um den ersten Eckpunkt, der ein Polygon schließt (Screen-Pixel).
pub const POLYGON_CLOSE_RADIUS_PX: f32 = 12.0;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `roadnet_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Snap ────────────────────────────────────────────────────
    /// Fangradius in Welteinheiten (zugleich Rasterweite)
    pub snap_distance: f32,
    /// Rasterfang aktiv
    #[serde(default)]
    pub grid_snap: bool,

    // ── Straßen ─────────────────────────────────────────────────
    /// Breite neuer Straßen
    pub default_road_width: f32,
    /// Typ neuer Straßen
    #[serde(default)]
    pub default_road_type: RoadKind,
    /// Kurvenmodus: neue Straßen werden kubisch angelegt
    #[serde(default)]
    pub curve_mode: bool,
    /// Maßstab (Meter pro Welteinheit)
    pub meters_per_pixel: f32,

    // ── Polygone ────────────────────────────────────────────────
    /// Füllfarbe neuer Polygone
    pub polygon_fill_color: String,
    /// Randfarbe neuer Polygone
    pub polygon_stroke_color: String,
    /// Deckkraft neuer Polygone
    pub polygon_opacity: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Nodes und Eckpunkte in Screen-Pixeln
    pub pick_radius_px: f32,
    /// Pick-Radius für Handles in Screen-Pixeln
    pub handle_pick_radius_px: f32,
    /// Treffer-Toleranz für Straßen in Screen-Pixeln
    pub hit_tolerance_px: f32,
    /// Schließ-Radius des Polygon-Werkzeugs in Screen-Pixeln
    pub polygon_close_radius_px: f32,

    // ── Hintergrund ─────────────────────────────────────────────
    /// Standard-Deckkraft neuer Hintergrundbilder
    pub background_opacity_default: f32,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_distance: SNAP_DISTANCE,
            grid_snap: false,

            default_road_width: DEFAULT_ROAD_WIDTH,
            default_road_type: RoadKind::Straight,
            curve_mode: false,
            meters_per_pixel: METERS_PER_PIXEL,

            polygon_fill_color: crate::core::polygon::DEFAULT_FILL_COLOR.to_string(),
            polygon_stroke_color: crate::core::polygon::DEFAULT_STROKE_COLOR.to_string(),
            polygon_opacity: 0.5,

            pick_radius_px: PICK_RADIUS_PX,
            handle_pick_radius_px: HANDLE_PICK_RADIUS_PX,
            hit_tolerance_px: HIT_TOLERANCE_PX,
            polygon_close_radius_px: POLYGON_CLOSE_RADIUS_PX,

            background_opacity_default: 1.0,

            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `history_depth` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts, &Self::default())
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("roadnet-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("roadnet_editor.toml")
    }

    /// Prüft alle Werte; ungültige werden durch den Wert aus `fallback` ersetzt.
    ///
    /// Es gelten dieselben Regeln wie bei den Einzel-Settern: ein negativer
    /// Fangradius wird auf 0 geklemmt, Breite und Maßstab müssen positiv sein,
    /// Deckkräfte werden auf `[0, 1]` geklemmt.
    pub fn sanitized(mut self, fallback: &EditorOptions) -> Self {
        self.snap_distance = if self.snap_distance.is_finite() {
            self.snap_distance.max(0.0)
        } else {
            reject("snap_distance", self.snap_distance, fallback.snap_distance)
        };
        self.default_road_width = positive_or(
            "default_road_width",
            self.default_road_width,
            fallback.default_road_width,
        );
        self.meters_per_pixel = positive_or(
            "meters_per_pixel",
            self.meters_per_pixel,
            fallback.meters_per_pixel,
        );
        self.pick_radius_px =
            non_negative_or("pick_radius_px", self.pick_radius_px, fallback.pick_radius_px);
        self.handle_pick_radius_px = non_negative_or(
            "handle_pick_radius_px",
            self.handle_pick_radius_px,
            fallback.handle_pick_radius_px,
        );
        self.hit_tolerance_px = non_negative_or(
            "hit_tolerance_px",
            self.hit_tolerance_px,
            fallback.hit_tolerance_px,
        );
        self.polygon_close_radius_px = non_negative_or(
            "polygon_close_radius_px",
            self.polygon_close_radius_px,
            fallback.polygon_close_radius_px,
        );
        self.polygon_opacity =
            opacity_or("polygon_opacity", self.polygon_opacity, fallback.polygon_opacity);
        self.background_opacity_default = opacity_or(
            "background_opacity_default",
            self.background_opacity_default,
            fallback.background_opacity_default,
        );
        if !is_valid_hex_color(&self.polygon_fill_color) {
            log::warn!("Ungültige Füllfarbe {} ignoriert", self.polygon_fill_color);
            self.polygon_fill_color = fallback.polygon_fill_color.clone();
        }
        if !is_valid_hex_color(&self.polygon_stroke_color) {
            log::warn!("Ungültige Randfarbe {} ignoriert", self.polygon_stroke_color);
            self.polygon_stroke_color = fallback.polygon_stroke_color.clone();
        }
        if self.history_depth == 0 {
            log::warn!("history_depth 0 ignoriert");
            self.history_depth = fallback.history_depth;
        }
        self
    }

    /// Snap-Einstellungen für den Resolver.
    pub fn snap_settings(&self) -> SnapSettings {
        SnapSettings {
            snap_distance: self.snap_distance,
            grid_snap: self.grid_snap,
        }
    }

    /// Typ neuer Straßen unter Berücksichtigung des Kurvenmodus.
    pub fn effective_road_type(&self) -> RoadKind {
        if self.curve_mode {
            RoadKind::Cubic
        } else {
            self.default_road_type
        }
    }
}

fn reject(field: &str, value: f32, fallback: f32) -> f32 {
    log::warn!("Ungültiger Wert {} für {} ignoriert", value, field);
    fallback
}

fn positive_or(field: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        reject(field, value, fallback)
    }
}

fn non_negative_or(field: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        reject(field, value, fallback)
    }
}

fn opacity_or(field: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        reject(field, value, fallback)
    }
}
