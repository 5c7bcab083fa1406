use crate::normalize::*;

#[test]
fn normalize_collapses_float_precision_noise() {
    assert_eq!(normalize_attr_value("10.00001"), "10");
    assert_eq!(normalize_attr_value("10.0"), "10");
    assert_eq!(normalize_attr_value("10"), "10");
    assert_eq!(normalize_attr_value("0.12346"), "0.1235");
}

#[test]
fn normalize_rewrites_every_literal_and_keeps_surrounding_text() {
    assert_eq!(
        normalize_attr_value("M 10.123456 20.5 L -3.00004,7"),
        "M 10.1235 20.5 L -3,7"
    );
    assert_eq!(
        normalize_attr_value("translate(0.5, 1.25)"),
        "translate(0.5, 1.25)"
    );
    assert_eq!(normalize_attr_value("  1.50  "), "  1.5  ");
    assert_eq!(normalize_attr_value("stroke:none;"), "stroke:none;");
    assert_eq!(normalize_attr_value(""), "");
}

#[test]
fn normalize_is_idempotent() {
    let cases = [
        "10.00001",
        "M 10.123456 20.5 L -3.00004,7",
        "matrix(1.00000001 0 0 0.99999999 -0.00001 3)",
        "1.00001.50000",
        "0.99999.00001.5",
        "-0.00001",
        "12345678901234567890123",
        "rotate(-45.123449 12 12)",
        "font-size:16.000px",
        "a1.2.3b",
    ];
    for s in cases {
        let once = normalize_attr_value(s);
        assert_eq!(normalize_attr_value(&once), once, "input: {s:?}");
    }
}

#[test]
fn normalize_glued_literal_reaches_fixpoint() {
    // `1.00001` collapses to `1`, which then reads as part of `1.50000`.
    assert_eq!(normalize_attr_value("1.00001.50000"), "1.5");
}

#[test]
fn parse_number_rejects_non_finite_and_garbage() {
    assert_eq!(parse_number(" 12.5 "), Some(12.5));
    assert_eq!(parse_number("-3"), Some(-3.0));
    assert_eq!(parse_number("100%"), None);
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number(""), None);
}

#[test]
fn format_number_strips_trailing_zeros() {
    assert_eq!(format_number(2.0), "2");
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(-7.25), "-7.25");
    assert_eq!(format_number(1e-9), "0");
}
