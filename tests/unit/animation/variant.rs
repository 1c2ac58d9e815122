use super::*;

#[test]
fn default_pair_matches_fade_rise() {
    let pair = VariantPair::default();
    assert_eq!(pair.hidden.number("opacity"), Some(0.0));
    assert_eq!(pair.hidden.number("y"), Some(20.0));
    assert_eq!(pair.visible.number("opacity"), Some(1.0));
    assert_eq!(pair.visible.number("y"), Some(0.0));
    assert_eq!(pair.reveal_duration(), 0.1);
    assert_eq!(pair.reveal_ease(), Ease::OutQuad);
}

#[test]
fn missing_duration_falls_back() {
    let pair = VariantPair::new(
        Variant::new(style([("opacity", 0.0)])),
        Variant::new(style([("opacity", 1.0)])),
    );
    assert_eq!(pair.reveal_duration(), DEFAULT_DURATION_SECS);
}

#[test]
fn variant_json_flattens_style_next_to_transition() {
    let json = r#"{ "opacity": 0, "color": "red", "transition": { "duration": 0.4, "staggerChildren": 0.1 } }"#;
    let v: Variant = serde_json::from_str(json).unwrap();
    assert_eq!(v.number("opacity"), Some(0.0));
    assert_eq!(
        v.style.get("color"),
        Some(&StyleValue::Text("red".to_owned()))
    );
    let t = v.transition.unwrap();
    assert_eq!(t.duration, Some(0.4));
    assert_eq!(t.stagger_children, Some(0.1));
    assert_eq!(t.delay, None);
}

#[test]
fn empty_transition_is_not_serialized() {
    let v = Variant::orchestration(Transition::default());
    assert_eq!(serde_json::to_string(&v).unwrap(), "{}");
}

#[test]
fn merged_prefers_overlay() {
    let base = Transition {
        duration: Some(0.5),
        ease: Some(Ease::OutQuad),
        ..Transition::default()
    };
    let over = Transition {
        duration: Some(1.0),
        delay: Some(0.2),
        ..Transition::default()
    };
    let m = base.merged(&over);
    assert_eq!(m.duration, Some(1.0));
    assert_eq!(m.delay, Some(0.2));
    assert_eq!(m.ease, Some(Ease::OutQuad));
}

#[test]
fn validation_rejects_bad_timing() {
    let t = Transition {
        delay: Some(-1.0),
        ..Transition::default()
    };
    assert!(t.validate().is_err());
    let v = Variant::new(style([("opacity", f64::NAN)]));
    assert!(v.validate().is_err());
    assert!(VariantPair::default().validate().is_ok());
}

#[test]
fn get_by_state_name() {
    let pair = VariantPair::default();
    assert!(pair.get(HIDDEN).is_some());
    assert!(pair.get(VISIBLE).is_some());
    assert!(pair.get("exit").is_none());
}
