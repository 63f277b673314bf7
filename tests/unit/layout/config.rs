use serde_json::json;

use super::*;

#[test]
fn empty_json_gives_defaults() {
    let layout = Starting6Layout::from_reader(&b"{}"[..]).unwrap();
    assert_eq!(layout, Starting6Layout::default());
    assert_eq!(layout.rows.forwards_x, [0.25, 0.5, 0.75]);
    assert_eq!(layout.card.logo_size, 130.0);
    assert_eq!(layout.palette.background, Rgba8::opaque(10, 10, 15));
}

#[test]
fn partial_override_keeps_siblings() {
    let v = json!({
        "palette": {"accent": "#ff8800"},
        "card": {"logo_size": 96, "logo_placeholder": true},
        "watermark": {"text": null}
    });
    let layout: Starting6Layout = serde_json::from_value(v).unwrap();
    assert_eq!(layout.palette.accent, Rgba8::opaque(255, 136, 0));
    assert_eq!(layout.palette.text, Palette::default().text);
    assert_eq!(layout.card.logo_size, 96.0);
    assert!(layout.card.logo_placeholder);
    assert_eq!(layout.card.name_size, CardStyle::default().name_size);
    assert!(layout.watermark.text.is_none());
}

#[test]
fn bad_layout_json_is_serde_error() {
    let err = Starting6Layout::from_reader(&br#"{"rows": {"defense_x": [0.5]}}"#[..]).unwrap_err();
    assert!(matches!(err, CardError::Serde(_)));
}

#[test]
fn missing_layout_file_is_reported() {
    let err = Starting6Layout::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, CardError::Other(_)), "{err:?}");
    assert!(err.to_string().contains("does/not/exist.json"));
}
