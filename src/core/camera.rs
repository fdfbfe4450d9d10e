//! View-Transformation für Pan und Zoom der Zeichenfläche.

use glam::Vec2;

/// Pan/Zoom-Zustand: `screen = world * zoom + pan_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Verschiebung in Screen-Pixeln
    pub pan_offset: Vec2,
    /// Zoom-Faktor (1.0 = ein Pixel pro Welteinheit)
    pub zoom: f32,
}

impl ViewTransform {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 5.0;
    /// Zoom-Schritt für Zoom-In/Out.
    pub const ZOOM_STEP: f32 = 1.2;

    /// Erstellt eine neue View (Zoom 1, kein Pan)
    pub fn new() -> Self {
        Self {
            pan_offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Erstellt eine View aus gespeicherten Werten; der Zoom wird geklemmt.
    pub fn from_parts(pan_offset: Vec2, zoom: f32) -> Self {
        Self {
            pan_offset,
            zoom: Self::clamp_zoom(zoom),
        }
    }

    /// `(p - pan) / zoom`
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.pan_offset) / self.zoom
    }

    /// `p * zoom + pan`
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos * self.zoom + self.pan_offset
    }

    /// Rechnet einen Pixel-Abstand in Welteinheiten um.
    pub fn px_to_world(&self, px: f32) -> f32 {
        px / self.zoom
    }

    /// Verschiebt die View um ein Screen-Delta.
    pub fn pan(&mut self, screen_delta: Vec2) {
        self.pan_offset += screen_delta;
    }

    /// Multipliziert den Zoom (geklemmt auf `[ZOOM_MIN, ZOOM_MAX]`).
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = Self::clamp_zoom(self.zoom * factor);
    }

    /// Zoomt, sodass der Weltpunkt unter `screen_focus` an seiner Screen-Position bleibt.
    pub fn zoom_at(&mut self, factor: f32, screen_focus: Vec2) {
        let world_focus = self.screen_to_world(screen_focus);
        self.zoom_by(factor);
        self.pan_offset = screen_focus - world_focus * self.zoom;
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(Self::ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / Self::ZOOM_STEP);
    }

    /// Setzt Zoom 1 und Pan 0.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn clamp_zoom(zoom: f32) -> f32 {
        if zoom.is_finite() {
            zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX)
        } else {
            1.0
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}
