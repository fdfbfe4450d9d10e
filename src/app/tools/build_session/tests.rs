use super::super::ConstructionSession;
use super::*;
use crate::core::{RoadKind, SnapResult, SnapTarget};
use glam::Vec2;

fn free(x: f32, y: f32) -> SnapResult {
    SnapResult {
        position: Vec2::new(x, y),
        target: SnapTarget::Free,
    }
}

fn on_node(id: u64, x: f32, y: f32) -> SnapResult {
    SnapResult {
        position: Vec2::new(x, y),
        target: SnapTarget::Node(id),
    }
}

#[test]
fn test_transition_table() {
    use BuildEvent as E;
    use BuildPhase as P;

    assert_eq!(transition(P::Idle, E::Start), P::Active);
    assert_eq!(transition(P::Active, E::AddPoint), P::Active);
    assert_eq!(transition(P::Active, E::RemoveLast { remaining: 1 }), P::Active);
    assert_eq!(transition(P::Active, E::RemoveLast { remaining: 0 }), P::Idle);
    assert_eq!(transition(P::Active, E::Complete { staged: 1 }), P::Active);
    assert_eq!(transition(P::Active, E::Complete { staged: 2 }), P::Completing);
    assert_eq!(transition(P::Active, E::Cancel), P::Cancelled);
    assert_eq!(transition(P::Completing, E::Settle), P::Idle);
    assert_eq!(transition(P::Cancelled, E::Settle), P::Idle);
    // Unzulässig: bleibt unverändert
    assert_eq!(transition(P::Idle, E::Complete { staged: 5 }), P::Idle);
    assert_eq!(transition(P::Idle, E::Cancel), P::Idle);
}

#[test]
fn test_three_points_complete_to_two_roads() {
    let mut session = BuildSession::new(RoadKind::Straight, 6.0);
    assert!(session.add_point(&free(0.0, 0.0)));
    assert_eq!(session.phase(), BuildPhase::Active);
    assert!(session.add_point(&free(10.0, 0.0)));
    assert!(session.add_point(&free(20.0, 0.0)));

    let result = session.complete().expect("Ergebnis erwartet");
    assert_eq!(result.road_count(), 2);
    assert_eq!(result.points[1].position, Vec2::new(10.0, 0.0));
    assert_eq!(result.road_width, 6.0);
    assert_eq!(session.phase(), BuildPhase::Idle);
    assert_eq!(session.staged_count(), 0);
}

#[test]
fn test_complete_with_one_point_is_rejected() {
    let mut session = BuildSession::default();
    session.add_point(&free(0.0, 0.0));

    assert!(session.complete().is_none());
    assert_eq!(session.phase(), BuildPhase::Active);
    assert_eq!(session.staged_count(), 1);
}

#[test]
fn test_same_node_twice_is_ignored() {
    let mut session = BuildSession::default();
    assert!(session.add_point(&on_node(4, 5.0, 5.0)));
    assert!(!session.add_point(&on_node(4, 5.0, 5.0)));
    assert_eq!(session.staged_count(), 1);
    assert_eq!(session.last_node_id(), Some(4));
}

#[test]
fn test_remove_last_returns_to_idle() {
    let mut session = BuildSession::default();
    session.add_point(&free(0.0, 0.0));
    session.add_point(&free(10.0, 0.0));

    assert!(session.remove_last_point());
    assert_eq!(session.phase(), BuildPhase::Active);
    assert!(session.remove_last_point());
    assert_eq!(session.phase(), BuildPhase::Idle);
    assert!(!session.remove_last_point());
}

#[test]
fn test_cancel_discards_everything() {
    let mut session = BuildSession::default();
    session.add_point(&on_node(1, 0.0, 0.0));
    session.add_point(&free(10.0, 0.0));
    session.cancel();

    assert_eq!(session.phase(), BuildPhase::Idle);
    assert!(session.points().is_empty());
    assert!(!session.is_active());
}

#[test]
fn test_rubber_band_follows_hover() {
    let mut session = BuildSession::default();
    session.set_hover(Some(Vec2::new(3.0, 3.0)));
    assert!(session.rubber_band().is_none());

    session.add_point(&free(1.0, 1.0));
    assert_eq!(
        session.rubber_band(),
        Some((Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0)))
    );
}

#[test]
fn test_staged_anchor_from_road_snap() {
    let snap = SnapResult {
        position: Vec2::new(5.0, 0.0),
        target: SnapTarget::Road(9),
    };
    let point = StagedPoint::from_snap(&snap);
    assert_eq!(point.anchor, StagedAnchor::OnRoad(9));
    assert_eq!(point.node_id(), None);
}
