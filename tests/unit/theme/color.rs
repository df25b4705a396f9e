use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    let c: Color = serde_json::from_value(json!("#ff0080")).unwrap();
    assert_eq!(c, Color::rgba8(0xff, 0x00, 0x80, 0xff));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(c, Color::rgba8(0, 0, 0xff, 0x80));

    let c: Color = "#fff".parse().unwrap();
    assert_eq!(c, Color::WHITE);
    let c: Color = "666".parse().unwrap();
    assert_eq!(c, Color::rgb(0x666666));
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["", "#12", "#12345", "#gggggg", "#ffé0", "#1234567890"] {
        assert!(bad.parse::<Color>().is_err(), "{bad:?} should not parse");
        assert!(serde_json::from_value::<Color>(json!(bad)).is_err());
    }
}

#[test]
fn parses_hsla_object() {
    let c: Color = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c, Color::rgba8(255, 0, 0, 255));
    let c = Color::from_hsla(120.0, 1.0, 0.5, 0.5);
    assert_eq!((c.r, c.g, c.b), (0, 255, 0));
    assert_eq!(c.a, 128);
}

#[test]
fn serializes_as_rrggbbaa() {
    let c = Color::rgb(0x7928ca);
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#7928caff"));
    let back: Color = serde_json::from_value(serde_json::to_value(c).unwrap()).unwrap();
    assert_eq!(back, c);
}

#[test]
fn opacity_and_mixing() {
    let c = Color::WHITE.with_opacity(0.5);
    assert_eq!(c.a, 128);
    assert_eq!(c.to_premul(), Rgba8Premul::from_straight_rgba(255, 255, 255, 128));
    assert_eq!(Color::BLACK.mix(Color::WHITE, 0.0), Color::BLACK);
    assert_eq!(Color::BLACK.mix(Color::WHITE, 1.0), Color::WHITE);
    assert_eq!(Color::BLACK.mix(Color::WHITE, 0.5).r, 128);
}
