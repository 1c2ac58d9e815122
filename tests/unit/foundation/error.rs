use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RevealError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RevealError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RevealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
