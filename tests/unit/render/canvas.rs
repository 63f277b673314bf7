use super::*;

fn small() -> Canvas {
    Canvas::new(16, 12).unwrap()
}

#[test]
fn anchors_place_box_corner() {
    let at = Point::new(50.0, 40.0);
    assert_eq!(Anchor::Center.top_left(at, 20.0, 10.0), Point::new(40.0, 35.0));
    assert_eq!(Anchor::LeftMiddle.top_left(at, 20.0, 10.0), Point::new(50.0, 35.0));
    assert_eq!(Anchor::TopLeft.top_left(at, 20.0, 10.0), at);
}

#[test]
fn background_covers_every_pixel() {
    let mut c = CardCanvas::new(small()).unwrap();
    c.fill_background(Rgba8::opaque(10, 10, 15));
    let frame = c.finish().unwrap();
    assert_eq!((frame.width, frame.height), (16, 12));
    assert!(frame.premultiplied);
    assert!(
        frame
            .data
            .chunks_exact(4)
            .all(|px| px == [10, 10, 15, 255])
    );
}

#[test]
fn rect_only_touches_its_area() {
    let mut c = CardCanvas::new(small()).unwrap();
    c.fill_background(Rgba8::opaque(0, 0, 0));
    c.fill_rect(Rect::new(4.0, 4.0, 8.0, 8.0), Rgba8::opaque(255, 255, 255));
    let frame = c.finish().unwrap();
    assert_eq!(frame.pixel(5, 5), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(10, 10), Some([0, 0, 0, 255]));
}

#[test]
fn image_lands_at_its_offset() {
    let image = PreparedImage {
        width: 4,
        height: 4,
        rgba8_premul: Arc::new([0u8, 200, 0, 255].repeat(16)),
    };
    let mut c = CardCanvas::new(small()).unwrap();
    c.fill_background(Rgba8::opaque(0, 0, 0));
    c.draw_image(&image, Point::new(8.0, 4.0)).unwrap();
    let frame = c.finish().unwrap();

    let inside = frame.pixel(9, 5).unwrap();
    assert!(inside[1] > 190 && inside[0] < 10, "{inside:?}");
    assert_eq!(frame.pixel(2, 2), Some([0, 0, 0, 255]));
}

#[test]
fn circle_fills_center_not_corners() {
    let mut c = CardCanvas::new(Canvas::new(20, 20).unwrap()).unwrap();
    c.fill_circle(Point::new(10.0, 10.0), 6.0, Rgba8::opaque(0, 214, 255));
    let frame = c.finish().unwrap();
    assert_eq!(frame.pixel(10, 10), Some([0, 214, 255, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn mismatched_image_bytes_are_rejected() {
    let image = PreparedImage {
        width: 4,
        height: 4,
        rgba8_premul: Arc::new(vec![0u8; 7]),
    };
    let mut c = CardCanvas::new(small()).unwrap();
    assert!(c.draw_image(&image, Point::ORIGIN).is_err());
}
