use super::*;

fn local_font() -> Option<Vec<u8>> {
    [
        "assets/fonts/PULS_Schriftart.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}

#[test]
fn abbreviates_multi_word_names_only() {
    assert_eq!(
        abbreviate_name("Maximilian von Musterhausen").as_deref(),
        Some("M. von Musterhausen")
    );
    assert_eq!(abbreviate_name("Ümit Öz").as_deref(), Some("Ü. Öz"));
    assert_eq!(abbreviate_name("Pelé"), None);
    assert_eq!(abbreviate_name("   "), None);
}

#[test]
fn brush_from_color() {
    let b = TextBrushRgba8::from(Rgba8::new(1, 2, 3, 4));
    assert_eq!((b.r, b.g, b.b, b.a), (1, 2, 3, 4));
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let mut engine = TextLayoutEngine::new();
    assert!(engine.register_font(b"not a font".to_vec()).is_err());
}

#[test]
fn text_layout_smoke_with_local_font_if_present() {
    let Some(font_bytes) = local_font() else {
        return;
    };

    let mut engine = TextLayoutEngine::new();
    let face = engine.register_font(font_bytes).unwrap();
    assert!(!face.family().trim().is_empty());

    let run = engine
        .layout_plain("hello", &face, 48.0, TextBrushRgba8::default())
        .unwrap();
    assert!(run.layout.lines().next().is_some());
    assert!(run.width() > 0.0);
    assert!(run.height() > 0.0);
    assert!(engine.layout_plain("x", &face, 0.0, TextBrushRgba8::default()).is_err());
}

#[test]
fn fit_and_truncate_with_local_font_if_present() {
    let Some(font_bytes) = local_font() else {
        return;
    };

    let mut engine = TextLayoutEngine::new();
    let face = engine.register_font(font_bytes).unwrap();
    let text = "SAISON 1 • SPIELTAG 12 • A VERY LONG HEADER LINE";

    let wide = engine.measure(text, &face, 20.0).unwrap();
    let fitted = engine
        .fit(text, &face, wide * 0.8, 20.0, 14.0, TextBrushRgba8::default())
        .unwrap();
    assert!(fitted.width() <= wide);

    let short = engine.truncate_to_width(text, &face, 20.0, wide / 2.0).unwrap();
    assert!(short.ends_with('…'));
    assert!(engine.measure(&short, &face, 20.0).unwrap() <= wide / 2.0);

    let same = engine.truncate_to_width("AB", &face, 20.0, wide).unwrap();
    assert_eq!(same, "AB");
}
