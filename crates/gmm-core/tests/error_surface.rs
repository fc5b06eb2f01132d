use gmm_core::errors::{coefficient_error, config_error, ErrorInfo, GmmError};
use gmm_core::{Imt, Range};

#[test]
fn out_of_range_surface() {
    let err = Range::closed(5.0, 8.5).check("Magnitude", 9.1).unwrap_err();
    assert_eq!(err.code(), "out-of-range");
    assert!(err.is_input_error());
    assert_eq!(err.to_string(), "Magnitude value 9.1 is outside [5..8.5]");
}

#[test]
fn missing_period_surface() {
    let err = GmmError::MissingPeriod {
        model: "IDRISS_14".into(),
        imt: Imt::Pgv,
    };
    assert_eq!(err.code(), "missing-period");
    assert!(!err.is_input_error());
    assert_eq!(err.to_string(), "IDRISS_14 does not support PGV");
}

#[test]
fn coefficient_error_surface() {
    let err = GmmError::Coefficients(
        ErrorInfo::new("missing-coefficient", "column absent")
            .with_context("column", "phi")
            .with_hint("regenerate the table"),
    );
    assert_eq!(err.code(), "missing-coefficient");
    let rendered = err.to_string();
    assert!(rendered.contains("column=phi"));
    assert!(rendered.contains("hint: regenerate the table"));
}

#[test]
fn helper_constructors_keep_code() {
    assert_eq!(coefficient_error("bad-value", "nope").code(), "bad-value");
    assert_eq!(config_error("yaml-decode", "nope").code(), "yaml-decode");
}

#[test]
fn context_attaches_to_configuration_errors_only() {
    let err = coefficient_error("bad-value", "nope").with_context("model", "IDRISS_14");
    assert!(err.to_string().contains("model=IDRISS_14"));

    let input = Range::closed(5.0, 8.5).check("Magnitude", 9.1).unwrap_err();
    assert_eq!(input.clone().with_context("model", "IDRISS_14"), input);
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = Range::open_closed(0.0, 60.0).check("Width", 0.0).unwrap_err();
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "OutOfRange");
    assert_eq!(json["detail"]["range"]["kind"], "open_closed");
    let decoded: GmmError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}
