//! Hintergrund-Ebenen: Platzierung und Transformation von Rasterbildern.
//!
//! Pixel-Daten gehören nicht zum Editor. Ein Bild existiert mit seinen Metadaten
//! bereits, bevor das Dekodieren abgeschlossen ist (`width`/`height` dann 0).

use glam::Vec2;
use indexmap::IndexMap;

/// Präfix eingebetteter Bildquellen.
pub const EMBEDDED_SRC_PREFIX: &str = "data:";

/// Prüft, ob eine Bildquelle eine eingebettete Data-URI ist.
pub fn is_embedded_src(src: &str) -> bool {
    src.starts_with(EMBEDDED_SRC_PREFIX)
}

/// Ein Hintergrundbild
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundImage {
    pub id: u64,
    pub src: String,
    /// Obere linke Ecke in Weltkoordinaten
    pub position: Vec2,
    pub scale: f32,
    /// Pixelbreite des dekodierten Bilds
    pub width: f32,
    /// Pixelhöhe des dekodierten Bilds
    pub height: f32,
    pub opacity: f32,
    pub visible: bool,
    pub locked: bool,
    /// Drehung um die Bildmitte in Grad
    pub rotation: f32,
    pub name: String,
}

impl BackgroundImage {
    /// Dargestellte Größe in Welteinheiten.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * self.scale
    }

    /// Bildmitte in Welteinheiten.
    pub fn center(&self) -> Vec2 {
        self.position + self.world_size() * 0.5
    }

    /// Prüft, ob ein Weltpunkt innerhalb des (gedrehten) Bildrechtecks liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.world_size() * 0.5;
        if half.x <= 0.0 || half.y <= 0.0 {
            return false;
        }
        let local = Vec2::from_angle(-self.rotation.to_radians()).rotate(point - self.center());
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }
}

/// Partielles Update eines Hintergrundbilds; `None` lässt das Feld unverändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundImagePatch {
    pub position: Option<Vec2>,
    pub scale: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub rotation: Option<f32>,
    pub opacity: Option<f32>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
    pub name: Option<String>,
}

impl BackgroundImagePatch {
    /// `true` wenn der Patch Position, Größe oder Drehung ändern würde.
    pub fn touches_transform(&self) -> bool {
        self.position.is_some()
            || self.scale.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.rotation.is_some()
    }
}

/// Alle Hintergrundbilder in Z-Reihenfolge (Einfügereihenfolge, später = oben).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundLayers {
    images: IndexMap<u64, BackgroundImage>,
}

impl BackgroundLayers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u64) -> Option<&BackgroundImage> {
        self.images.get(&id)
    }

    /// Iterator in Zeichenreihenfolge (unten zuerst).
    pub fn iter(&self) -> impl Iterator<Item = &BackgroundImage> {
        self.images.values()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.images.keys().max().copied().unwrap_or(0) + 1
    }

    /// Legt ein neues Bild an (Maßstab 1, sichtbar, nicht gesperrt).
    ///
    /// Größe 0 bedeutet, dass das Dekodieren noch aussteht.
    pub fn add(
        &mut self,
        src: impl Into<String>,
        name: impl Into<String>,
        position: Vec2,
        size: Vec2,
        opacity: f32,
    ) -> u64 {
        let id = self.next_id();
        let image = BackgroundImage {
            id,
            src: src.into(),
            position,
            scale: 1.0,
            width: size.x.max(0.0),
            height: size.y.max(0.0),
            opacity: opacity.clamp(0.0, 1.0),
            visible: true,
            locked: false,
            rotation: 0.0,
            name: name.into(),
        };
        log::info!("Hintergrundbild {} '{}' hinzugefügt", id, image.name);
        self.images.insert(id, image);
        id
    }

    /// Übernimmt ein Bild unverändert (Laden aus Snapshot).
    pub fn insert(&mut self, image: BackgroundImage) {
        self.images.insert(image.id, image);
    }

    pub fn remove(&mut self, id: u64) -> Option<BackgroundImage> {
        let removed = self.images.shift_remove(&id);
        if removed.is_none() {
            log::debug!("Hintergrundbild {} existiert nicht", id);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    /// Führt einen Patch zusammen.
    ///
    /// Ist das Bild vor dem Patch gesperrt, werden Transformationsfelder ignoriert.
    /// Sichtbarkeit, Deckkraft, Sperre und Name bleiben immer änderbar.
    pub fn update(&mut self, id: u64, patch: BackgroundImagePatch) -> bool {
        let Some(image) = self.images.get_mut(&id) else {
            log::debug!("Hintergrundbild {} existiert nicht", id);
            return false;
        };

        if image.locked {
            if patch.touches_transform() {
                log::debug!("Hintergrundbild {} ist gesperrt, Transformation ignoriert", id);
            }
        } else {
            if let Some(position) = patch.position {
                image.position = position;
            }
            if let Some(scale) = patch.scale {
                image.scale = scale.max(0.0);
            }
            if let Some(width) = patch.width {
                image.width = width.max(0.0);
            }
            if let Some(height) = patch.height {
                image.height = height.max(0.0);
            }
            if let Some(rotation) = patch.rotation {
                image.rotation = rotation.rem_euclid(360.0);
            }
        }

        if let Some(opacity) = patch.opacity {
            image.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(visible) = patch.visible {
            image.visible = visible;
        }
        if let Some(locked) = patch.locked {
            image.locked = locked;
        }
        if let Some(name) = patch.name {
            image.name = name;
        }
        true
    }

    /// Abschluss des Dekodierens: trägt die Pixelgröße ein (auch bei gesperrten Bildern).
    pub fn set_image_size(&mut self, id: u64, size: Vec2) -> bool {
        let Some(image) = self.images.get_mut(&id) else {
            return false;
        };
        image.width = size.x.max(0.0);
        image.height = size.y.max(0.0);
        true
    }

    pub fn toggle_visibility(&mut self, id: u64) -> bool {
        let Some(image) = self.images.get_mut(&id) else {
            return false;
        };
        image.visible = !image.visible;
        true
    }

    pub fn toggle_lock(&mut self, id: u64) -> bool {
        let Some(image) = self.images.get_mut(&id) else {
            return false;
        };
        image.locked = !image.locked;
        true
    }

    /// Oberstes sichtbares Bild unter dem Weltpunkt.
    pub fn image_at(&self, point: Vec2) -> Option<u64> {
        self.images
            .values()
            .rev()
            .find(|image| image.visible && image.contains(point))
            .map(|image| image.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn layers_with_image() -> (BackgroundLayers, u64) {
        let mut layers = BackgroundLayers::new();
        let id = layers.add(
            "data:image/png;base64,AAAA",
            "Luftbild",
            Vec2::ZERO,
            Vec2::new(100.0, 50.0),
            1.0,
        );
        (layers, id)
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let (mut layers, id) = layers_with_image();
        layers.update(
            id,
            BackgroundImagePatch {
                position: Some(Vec2::new(10.0, 20.0)),
                opacity: Some(0.4),
                ..Default::default()
            },
        );
        let image = layers.get(id).expect("Bild erwartet");
        assert_eq!(image.position, Vec2::new(10.0, 20.0));
        assert_relative_eq!(image.opacity, 0.4);
        assert_eq!(image.scale, 1.0);
        assert_eq!(image.name, "Luftbild");
    }

    #[test]
    fn locked_image_ignores_transform() {
        let (mut layers, id) = layers_with_image();
        layers.toggle_lock(id);
        layers.update(
            id,
            BackgroundImagePatch {
                position: Some(Vec2::new(99.0, 99.0)),
                scale: Some(3.0),
                rotation: Some(45.0),
                visible: Some(false),
                ..Default::default()
            },
        );
        let image = layers.get(id).expect("Bild erwartet");
        assert_eq!(image.position, Vec2::ZERO);
        assert_eq!(image.scale, 1.0);
        assert_eq!(image.rotation, 0.0);
        assert!(!image.visible);
    }

    #[test]
    fn unlock_in_same_patch_still_blocks_transform() {
        let (mut layers, id) = layers_with_image();
        layers.toggle_lock(id);
        layers.update(
            id,
            BackgroundImagePatch {
                position: Some(Vec2::new(5.0, 5.0)),
                locked: Some(false),
                ..Default::default()
            },
        );
        let image = layers.get(id).expect("Bild erwartet");
        assert!(!image.locked);
        assert_eq!(image.position, Vec2::ZERO);
    }

    #[test]
    fn image_at_respects_z_order_and_visibility() {
        let (mut layers, bottom) = layers_with_image();
        let top = layers.add("", "Overlay", Vec2::new(50.0, 0.0), Vec2::new(100.0, 50.0), 0.5);

        assert_eq!(layers.image_at(Vec2::new(75.0, 25.0)), Some(top));
        assert_eq!(layers.image_at(Vec2::new(25.0, 25.0)), Some(bottom));
        layers.toggle_visibility(top);
        assert_eq!(layers.image_at(Vec2::new(75.0, 25.0)), Some(bottom));
    }

    #[test]
    fn pending_decode_has_no_extent() {
        let mut layers = BackgroundLayers::new();
        let id = layers.add("data:x", "Neu", Vec2::ZERO, Vec2::ZERO, 1.0);
        assert_eq!(layers.image_at(Vec2::ZERO), None);

        layers.toggle_lock(id);
        assert!(layers.set_image_size(id, Vec2::new(10.0, 10.0)));
        assert_eq!(layers.image_at(Vec2::new(5.0, 5.0)), Some(id));
    }

    #[test]
    fn rotated_image_contains_rotated_corner() {
        let (mut layers, id) = layers_with_image();
        layers.update(
            id,
            BackgroundImagePatch {
                rotation: Some(90.0),
                ..Default::default()
            },
        );
        let image = layers.get(id).expect("Bild erwartet");
        // Nach 90° ragt das Bild 50 Einheiten über und unter die Mitte (50, 25) hinaus
        assert!(image.contains(Vec2::new(50.0, 70.0)));
        assert!(!image.contains(Vec2::new(5.0, 25.0)));
    }

    #[test]
    fn embedded_src_detection() {
        assert!(is_embedded_src("data:image/png;base64,AAAA"));
        assert!(!is_embedded_src("https://example.org/map.png"));
        assert!(!is_embedded_src(""));
    }
}
