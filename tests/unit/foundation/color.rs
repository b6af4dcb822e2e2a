use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(c, Rgba8::new(0, 0, 255, 128));

    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#zz0000").is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.0})).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!([0.0, 0.0, 1.0, 0.0])).unwrap();
    assert_eq!(c, Rgba8::new(0, 0, 255, 0));

    assert!(serde_json::from_value::<Rgba8>(json!([0.0, 1.0])).is_err());
}

#[test]
fn hsla_matches_css() {
    assert_eq!(Rgba8::hsla(0.0, 1.0, 0.5, 1.0), Rgba8::rgb(255, 0, 0));
    assert_eq!(Rgba8::hsla(120.0, 1.0, 0.5, 1.0), Rgba8::rgb(0, 255, 0));
    assert_eq!(Rgba8::hsla(-120.0, 1.0, 0.5, 1.0), Rgba8::rgb(0, 0, 255));
    assert_eq!(Rgba8::hsla(42.0, 0.0, 1.0, 0.5), Rgba8::new(255, 255, 255, 128));
}

#[test]
fn serializes_as_hex() {
    let s = serde_json::to_string(&Rgba8::new(0x12, 0xab, 0x00, 0xff)).unwrap();
    assert_eq!(s, "\"#12ab00ff\"");
}

#[test]
fn premultiply_scales_channels() {
    assert_eq!(Rgba8::new(255, 128, 0, 0).to_premul_array(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::new(255, 255, 255, 128).to_premul_array(), [128, 128, 128, 128]);
}

#[test]
fn fade_and_lerp() {
    assert_eq!(Rgba8::WHITE.fade(0.5).a, 128);
    assert_eq!(Rgba8::BLACK.lerp(Rgba8::WHITE, 1.0), Rgba8::WHITE);
    assert_eq!(Rgba8::BLACK.lerp(Rgba8::WHITE, 0.0), Rgba8::BLACK);
}
