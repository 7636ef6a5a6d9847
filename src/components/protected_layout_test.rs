use super::*;

#[test]
fn in_flight_resolution_is_loading() {
    assert_eq!(resolve_status(None), SessionStatus::Loading);
}

#[test]
fn resolved_dead_session_is_unauthenticated() {
    assert_eq!(resolve_status(Some(false)), SessionStatus::Unauthenticated);
}

#[test]
fn resolved_live_session_is_ready() {
    assert_eq!(resolve_status(Some(true)), SessionStatus::Ready);
}

#[test]
fn terminal_states_are_stable() {
    // Re-resolving the same input never changes the answer.
    for input in [None, Some(false), Some(true)] {
        assert_eq!(resolve_status(input), resolve_status(input));
    }
}
