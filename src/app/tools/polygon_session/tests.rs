use super::super::ConstructionSession;
use super::*;
use glam::Vec2;

const CLOSE_RADIUS: f32 = 12.0;

fn session_with_square() -> PolygonSession {
    let mut session = PolygonSession::default();
    for p in [
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ] {
        assert_eq!(session.click(p * 10.0, CLOSE_RADIUS), PolygonClick::Added);
    }
    session
}

#[test]
fn test_transition_table() {
    use PolygonEvent as E;
    use PolygonPhase as P;

    assert_eq!(transition(P::Idle, E::Start), P::Active);
    assert_eq!(transition(P::Active, E::Close { staged: 2 }), P::Active);
    assert_eq!(transition(P::Active, E::Close { staged: 3 }), P::Closing);
    assert_eq!(transition(P::Closing, E::Commit), P::Committed);
    assert_eq!(transition(P::Committed, E::Settle), P::Idle);
    assert_eq!(transition(P::Active, E::Cancel), P::Cancelled);
    assert_eq!(transition(P::Cancelled, E::Settle), P::Idle);
    assert_eq!(transition(P::Active, E::RemoveLast { remaining: 0 }), P::Idle);
    assert_eq!(transition(P::Idle, E::Commit), P::Idle);
}

#[test]
fn test_click_near_first_vertex_closes() {
    let mut session = session_with_square();
    let click = session.click(Vec2::new(5.0, -4.0), CLOSE_RADIUS);

    let PolygonClick::Closed(draft) = click else {
        panic!("Schließen erwartet, erhalten: {click:?}");
    };
    assert_eq!(draft.vertices.len(), 4);
    assert_eq!(draft.vertices[0], StagedVertex::straight(Vec2::ZERO));
    assert_eq!(session.phase(), PolygonPhase::Idle);
    assert_eq!(session.staged_count(), 0);
}

#[test]
fn test_click_near_first_with_two_vertices_adds() {
    let mut session = PolygonSession::default();
    session.click(Vec2::new(0.0, 0.0), CLOSE_RADIUS);
    session.click(Vec2::new(100.0, 0.0), CLOSE_RADIUS);

    assert_eq!(session.click(Vec2::new(3.0, 3.0), CLOSE_RADIUS), PolygonClick::Added);
    assert_eq!(session.staged_count(), 3);
}

#[test]
fn test_explicit_close_requires_three_vertices() {
    let mut session = PolygonSession::default();
    session.click(Vec2::new(0.0, 0.0), CLOSE_RADIUS);
    session.click(Vec2::new(100.0, 0.0), CLOSE_RADIUS);
    assert!(session.close().is_none());
    assert!(session.is_active());

    session.click(Vec2::new(100.0, 100.0), CLOSE_RADIUS);
    let draft = session.close().expect("Entwurf erwartet");
    assert_eq!(draft.vertices.len(), 3);
}

#[test]
fn test_remove_last_and_cancel() {
    let mut session = session_with_square();
    assert!(session.remove_last_point());
    assert_eq!(session.staged_count(), 3);

    session.cancel();
    assert_eq!(session.phase(), PolygonPhase::Idle);
    assert!(session.points().is_empty());
    assert!(session.close().is_none());
}

#[test]
fn test_duplicate_click_is_ignored() {
    let mut session = PolygonSession::default();
    session.click(Vec2::new(50.0, 50.0), CLOSE_RADIUS);
    assert_eq!(
        session.click(Vec2::new(50.0, 50.0), CLOSE_RADIUS),
        PolygonClick::Ignored
    );
}
