use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_time_and_coverage() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frame_to_secs(FrameIndex(0)), 0.0);
    assert!((fps.frame_to_secs(FrameIndex(15)) - 0.5).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames_ceil(0.5), 15);
    assert_eq!(fps.secs_to_frames_ceil(0.51), 16);
    assert_eq!(fps.secs_to_frames_ceil(-1.0), 0);
}

#[test]
fn tag_names_match_serde() {
    assert_eq!(Tag::default(), Tag::P);
    assert_eq!(Tag::Section.as_str(), "section");
    assert_eq!(serde_json::to_string(&Tag::H2).unwrap(), "\"h2\"");
    let t: Tag = serde_json::from_str("\"article\"").unwrap();
    assert_eq!(t, Tag::Article);
    assert_eq!(Tag::Li.to_string(), "li");
}

#[test]
fn validate_secs_rejects_negative_and_nan() {
    assert!(validate_secs("delay", 0.0).is_ok());
    assert!(validate_secs("delay", -0.1).is_err());
    assert!(validate_secs("delay", f64::NAN).is_err());
    assert!(validate_secs("delay", f64::INFINITY).is_err());
}
