use super::*;

#[test]
fn test_invalid_unit_messages_match_sentinels() {
    assert_eq!(
        UtilError::invalid_unit(UnitRole::Video, "PB").to_string(),
        "Invalid video unit"
    );
    assert_eq!(
        UtilError::invalid_unit(UnitRole::Drive, "kb").to_string(),
        "Invalid drive unit"
    );
    assert_eq!(
        UtilError::invalid_unit(UnitRole::File, "").to_string(),
        "Invalid file unit"
    );
}

#[test]
fn test_error_codes() {
    let err = UtilError::invalid_unit(UnitRole::Item, "XB");
    assert_eq!(err.code(), ErrorCode::UNITS_INVALID_UNIT);

    let err = UtilError::InvalidSize(0.0);
    assert_eq!(err.code(), ErrorCode::UNITS_INVALID_SIZE);

    let err = UtilError::RaggedMatrix {
        row: 1,
        expected: 3,
        found: 2,
    };
    assert_eq!(err.code(), ErrorCode::MATRIX_RAGGED);

    let err = UtilError::SequenceOverflow { index: 75 };
    assert_eq!(err.code(), ErrorCode::SEQUENCE_OVERFLOW);
    assert_eq!(
        err.developer_message(),
        "[E4001] Sequence overflow: term 75 does not fit in i64"
    );

    let err = UtilError::config("bad");
    assert_eq!(err.code(), ErrorCode::CONFIG_GENERIC);
}

#[test]
fn test_developer_message_includes_code() {
    let err = UtilError::RaggedMatrix {
        row: 2,
        expected: 3,
        found: 1,
    };
    let msg = err.developer_message();
    assert!(msg.starts_with("[E3001]"));
    assert!(msg.contains("row 2 has 1 columns, expected 3"));
}

#[test]
fn test_serde_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: UtilError = json_err.into();
    assert!(matches!(err, UtilError::Config(_)));
    assert!(err.to_string().starts_with("Configuration error: invalid JSON"));
}

#[test]
fn test_toml_error_conversion() {
    let toml_err = toml::from_str::<toml::Table>("key = ").unwrap_err();
    let err: UtilError = toml_err.into();
    assert!(matches!(err, UtilError::Config(_)));
    assert!(err.to_string().contains("invalid TOML"));
}
