use super::*;

#[test]
fn canvas_validates_bounds() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert_eq!(
        Canvas::new(1080, 1350).unwrap(),
        Canvas {
            width: 1080,
            height: 1350
        }
    );
}

#[test]
fn reference_scale_is_identity_on_reference() {
    let s = Canvas::REFERENCE.scale_from_reference();
    assert!((s.x - 1.0).abs() < 1e-12);
    assert!((s.y - 1.0).abs() < 1e-12);

    let half = Canvas::new(540, 675).unwrap().scale_from_reference();
    assert!((half.x - 0.5).abs() < 1e-12);
    assert!((half.y - 0.5).abs() < 1e-12);
}

#[test]
fn with_alpha_keeps_rgb() {
    let c = Rgba8::opaque(10, 20, 30).with_alpha(90);
    assert_eq!(c.to_array(), [10, 20, 30, 90]);
}
