//! Writer für JSON-Snapshots.

use super::document::SnapshotDto;
use super::{EditorDocument, SnapshotError};
use crate::core::is_embedded_src;
use std::path::Path;

/// Schreibt den Dokumentzustand als JSON.
///
/// Bildquellen, die keine eingebettete Data-URI sind, werden als `""` gespeichert.
pub fn write_snapshot(doc: &EditorDocument) -> Result<String, SnapshotError> {
    let mut dto = SnapshotDto::from(doc);

    let mut stripped = 0usize;
    for image in &mut dto.background_images {
        if !image.src.is_empty() && !is_embedded_src(&image.src) {
            image.src.clear();
            stripped += 1;
        }
    }
    if stripped > 0 {
        log::warn!(
            "{} externe Bildquelle(n) nicht persistiert (nur Data-URIs)",
            stripped
        );
    }

    Ok(serde_json::to_string_pretty(&dto)?)
}

/// Schreibt den Snapshot in eine Datei.
pub fn write_snapshot_file(
    doc: &EditorDocument,
    path: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    let json = write_snapshot(doc)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::parse_snapshot;
    use glam::Vec2;

    #[test]
    fn external_src_is_stripped() {
        let mut doc = EditorDocument::default();
        doc.backgrounds
            .add("https://example.org/map.png", "extern", Vec2::ZERO, Vec2::ZERO, 1.0);
        doc.backgrounds
            .add("data:image/png;base64,AAAA", "eingebettet", Vec2::ZERO, Vec2::ZERO, 1.0);

        let json = write_snapshot(&doc).expect("JSON erwartet");
        let back = parse_snapshot(&json).expect("Snapshot erwartet");

        let srcs: Vec<_> = back.backgrounds.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["", "data:image/png;base64,AAAA"]);
    }

    #[test]
    fn uses_camel_case_and_lowercase_type() {
        let mut doc = EditorDocument::default();
        let a = doc.road_map.add_node(Vec2::ZERO);
        let b = doc.road_map.add_node(Vec2::new(10.0, 0.0));
        doc.road_map
            .connect(a, b, crate::core::RoadKind::Cubic, 4.0)
            .expect("Straße erwartet");

        let json = write_snapshot(&doc).expect("JSON erwartet");

        assert!(json.contains("\"connectedRoadIds\""));
        assert!(json.contains("\"startNodeId\""));
        assert!(json.contains("\"controlPoints\""));
        assert!(json.contains("\"type\": \"cubic\""));
        assert!(json.contains("\"backgroundImages\""));
        assert!(json.contains("\"panOffset\""));
    }
}
