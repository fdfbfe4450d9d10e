//! Use-Case: Geschlossenes Polygon der Polygon-Session übernehmen.

use crate::app::tools::PolygonDraft;
use crate::app::{AppState, Selection};

/// Legt das Polygon im Store an (Fläche inklusive) und selektiert es.
pub fn apply_polygon_draft(state: &mut AppState, draft: PolygonDraft) -> Option<u64> {
    let vertices: Vec<_> = draft
        .vertices
        .iter()
        .map(|v| (v.position, v.cp1, v.cp2))
        .collect();
    if vertices.len() < crate::core::MIN_VERTICES {
        log::warn!("Polygon-Entwurf mit {} Eckpunkt(en) ignoriert", vertices.len());
        return None;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let mpp = state.options.meters_per_pixel;
    let id = state.polygons_mut().add(&vertices, draft.style, mpp)?;
    state.selection.selected = Selection::Polygon(id);
    log::info!(
        "Polygon {} mit {} Eckpunkten angelegt (Fläche {:.1})",
        id,
        vertices.len(),
        state.polygons.get(id).and_then(|p| p.area).unwrap_or(0.0)
    );
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::StagedVertex;
    use crate::core::PolygonStyle;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn square_draft() -> PolygonDraft {
        PolygonDraft {
            vertices: [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
                .into_iter()
                .map(|(x, y)| StagedVertex::straight(Vec2::new(x, y)))
                .collect(),
            style: PolygonStyle::default(),
        }
    }

    #[test]
    fn square_gets_area_one_hundred() {
        let mut state = AppState::new();

        let id = apply_polygon_draft(&mut state, square_draft()).expect("Polygon erwartet");

        let polygon = state.polygons.get(id).expect("Polygon erwartet");
        assert_relative_eq!(polygon.area.expect("Fläche erwartet"), 100.0, epsilon = 1e-3);
        assert_eq!(state.selection.selected, Selection::Polygon(id));
    }

    #[test]
    fn area_uses_meters_per_pixel_squared() {
        let mut state = AppState::new();
        state.options.meters_per_pixel = 0.5;

        let id = apply_polygon_draft(&mut state, square_draft()).expect("Polygon erwartet");

        let area = state.polygons.get(id).and_then(|p| p.area).expect("Fläche erwartet");
        assert_relative_eq!(area, 25.0, epsilon = 1e-3);
    }
}
