use super::*;

#[test]
fn latch_fires_once() {
    let mut latch = RevealLatch::new();
    assert!(!latch.is_fired());
    assert!(latch.fire());
    assert!(!latch.fire());
    assert!(latch.is_fired());
}

#[test]
fn first_visibility_runs_exactly_once() {
    let mut c = RevealController::new(RevealTrigger::on_first_visibility());
    assert_eq!(c.mount(), RevealAction::Ignore);
    assert_eq!(c.viewport_enter(0.5), RevealAction::Start);
    assert_eq!(c.viewport_enter(0.8), RevealAction::Ignore);
    assert_eq!(c.viewport_leave(), RevealAction::Ignore);
    assert_eq!(c.viewport_enter(1.0), RevealAction::Ignore);
    assert_eq!(c.runs(), 1);
    assert_eq!(c.state(), RevealState::Visible);
}

#[test]
fn first_visibility_ignores_content_changes() {
    let mut c = RevealController::new(RevealTrigger::on_first_visibility());
    c.mount();
    c.viewport_enter(1.0);
    assert_eq!(c.content_changed(), RevealAction::Ignore);
    assert_eq!(c.runs(), 1);
}

#[test]
fn threshold_gates_viewport_trigger() {
    let mut c = RevealController::new(RevealTrigger::Viewport(ViewportOptions::new(true, 0.2)));
    c.mount();
    assert_eq!(c.viewport_enter(0.1), RevealAction::Ignore);
    assert_eq!(c.state(), RevealState::Hidden);
    assert_eq!(c.viewport_enter(0.2), RevealAction::Start);
}

#[test]
fn zero_amount_needs_some_intersection() {
    let opts = ViewportOptions::default();
    assert!(!opts.is_satisfied_by(0.0));
    assert!(opts.is_satisfied_by(0.01));
}

#[test]
fn repeatable_viewport_replays_after_leave() {
    let mut c = RevealController::new(RevealTrigger::Viewport(ViewportOptions::new(false, 0.0)));
    c.mount();
    assert_eq!(c.viewport_enter(1.0), RevealAction::Start);
    assert_eq!(c.viewport_leave(), RevealAction::Hide);
    assert_eq!(c.state(), RevealState::Hidden);
    assert_eq!(c.viewport_enter(1.0), RevealAction::Start);
    assert_eq!(c.runs(), 2);
}

#[test]
fn immediately_starts_on_mount_and_restarts_on_change() {
    let mut c = RevealController::new(RevealTrigger::Immediately);
    assert_eq!(c.content_changed(), RevealAction::Ignore);
    assert_eq!(c.mount(), RevealAction::Start);
    assert_eq!(c.mount(), RevealAction::Ignore);
    assert_eq!(c.viewport_enter(1.0), RevealAction::Ignore);
    assert_eq!(c.content_changed(), RevealAction::Restart);
    assert_eq!(c.runs(), 2);
}

#[test]
fn viewport_events_before_mount_are_ignored() {
    let mut c = RevealController::new(RevealTrigger::on_first_visibility());
    assert_eq!(c.viewport_enter(1.0), RevealAction::Ignore);
    c.mount();
    assert_eq!(c.viewport_enter(1.0), RevealAction::Start);
}

#[test]
fn trigger_json_shapes() {
    let t: RevealTrigger = serde_json::from_str(r#"{ "mode": "immediately" }"#).unwrap();
    assert_eq!(t, RevealTrigger::Immediately);
    let t: RevealTrigger =
        serde_json::from_str(r#"{ "mode": "onFirstVisibility", "amount": 0.3 }"#).unwrap();
    assert_eq!(t, RevealTrigger::Viewport(ViewportOptions::new(true, 0.3)));
    let t: RevealTrigger = serde_json::from_str(r#"{ "mode": "viewport", "once": false }"#).unwrap();
    assert_eq!(t.viewport(), Some(ViewportOptions::new(false, 0.0)));
}

#[test]
fn amount_out_of_range_is_rejected() {
    assert!(ViewportOptions::new(true, 1.5).validate().is_err());
    assert!(RevealTrigger::Viewport(ViewportOptions::new(true, -0.1)).validate().is_err());
    assert!(RevealTrigger::Immediately.validate().is_ok());
}
