use std::io::Cursor;

use super::*;

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let prepared = decode_image(&png_bytes(img)).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_resized_hits_target_size() {
    let img = image::RgbaImage::from_pixel(40, 20, image::Rgba([200, 10, 10, 255]));
    let prepared = decode_image_resized(&png_bytes(img), 13, 13).unwrap();
    assert_eq!((prepared.width, prepared.height), (13, 13));
    assert_eq!(prepared.rgba8_premul.len(), 13 * 13 * 4);
    assert!(decode_image_resized(b"not an image", 13, 13).is_err());
}

#[test]
fn svg_rasterizes_to_requested_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;
    let prepared = rasterize_svg(svg, 8, 8).unwrap();
    assert_eq!((prepared.width, prepared.height), (8, 8));
    assert_eq!(&prepared.rgba8_premul[0..4], &[255, 0, 0, 255]);
    assert!(rasterize_svg(b"<svg", 8, 8).is_err());
}

#[test]
fn premultiply_round_trips_opaque_and_clears_transparent() {
    let mut px = vec![10u8, 20, 30, 255, 90, 90, 90, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![10, 20, 30, 255, 0, 0, 0, 0]);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![10, 20, 30, 255, 0, 0, 0, 0]);
}

#[test]
fn unpremultiply_restores_half_alpha() {
    let mut px = vec![200u8, 100, 0, 128];
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    assert!((i32::from(px[0]) - 200).abs() <= 1);
    assert!((i32::from(px[1]) - 100).abs() <= 1);
    assert_eq!(px[3], 128);
}
