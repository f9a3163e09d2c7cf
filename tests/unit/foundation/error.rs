use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MediaLabError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert!(
        MediaLabError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        MediaLabError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert_eq!(
        MediaLabError::EmptyOrSilentInput.to_string(),
        "audio input is empty or silent"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MediaLabError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_input_conditions_are_recoverable() {
    assert!(MediaLabError::EmptyOrSilentInput.is_recoverable());
    assert!(MediaLabError::decode("bad frame").is_recoverable());
    assert!(!MediaLabError::invalid_argument("bits = 9").is_recoverable());
}
