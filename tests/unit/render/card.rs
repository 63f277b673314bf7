use std::io::Cursor;

use super::*;
use crate::assets::provider::InMemoryAssets;
use crate::layout::slots::card_slots;
use crate::scene::record::Position;

fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(w, h, image::Rgba(rgba)))
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn player(team: &str) -> PlayerEntry {
    PlayerEntry {
        id: "Max_Muster".to_owned(),
        pos: Position::Forward,
        team: team.to_owned(),
        number: None,
    }
}

const BG: [u8; 4] = [10, 10, 15, 255];

#[test]
fn logo_cache_decodes_each_team_once() {
    let assets = InMemoryAssets::new()
        .with(AssetKind::Logo, "eisbaeren.png", png_bytes(8, 8, [255, 0, 0, 255]))
        .unwrap();
    let mut cache = LogoCache::new(&assets, 20);

    let a = cache.get("Eisbären").unwrap().unwrap();
    assert_eq!((a.width, a.height), (20, 20));
    let b = cache.get("EISBÄREN").unwrap().unwrap();
    assert!(std::sync::Arc::ptr_eq(&a.rgba8_premul, &b.rgba8_premul));
    assert_eq!(cache.len(), 1);

    assert!(cache.get("Unknown FC").unwrap().is_none());
    assert!(cache.get("___").unwrap().is_none());
    assert_eq!(cache.len(), 2);
}

#[test]
fn svg_logo_is_used_when_png_is_absent() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="#00ff00"/></svg>"##;
    let assets = InMemoryAssets::new()
        .with(AssetKind::Logo, "nord.svg", svg.to_vec())
        .unwrap();
    let mut cache = LogoCache::new(&assets, 10);
    let logo = cache.get("Nord").unwrap().unwrap();
    assert_eq!(&logo.rgba8_premul[0..4], &[0, 255, 0, 255]);
}

#[test]
fn undecodable_logo_counts_as_missing() {
    let assets = InMemoryAssets::new()
        .with(AssetKind::Logo, "broken.png", b"definitely not a png".to_vec())
        .unwrap();
    let mut cache = LogoCache::new(&assets, 10);
    assert!(cache.get("Broken").unwrap().is_none());
}

#[test]
fn painter_without_fonts_still_draws_shapes() {
    let layout = Starting6Layout::default();
    let assets = InMemoryAssets::new();
    let mut p = CardPainter::new(Canvas::REFERENCE, &layout, &assets).unwrap();
    assert!(p.display.is_none());
    assert!(p.watermark.is_none());

    p.canvas.fill_background(layout.palette.background);
    let slot = card_slots(&layout, &p.scale)[0];
    p.draw_card(&slot, &player("Nobody")).unwrap();
    p.draw_divider();
    let frame = p.canvas.finish().unwrap();

    // position badge above the name
    assert_eq!(frame.pixel(270, 352), Some([0, 214, 255, 255]));
    // missing logo leaves the slot empty
    assert_eq!(frame.pixel(270, 495), Some(BG));
    // divider is lighter than the background
    assert!(frame.pixel(540, 195).unwrap()[0] > BG[0]);
}

#[test]
fn placeholder_ring_marks_missing_logo() {
    let mut layout = Starting6Layout::default();
    layout.card.logo_placeholder = true;
    let assets = InMemoryAssets::new();
    let mut p = CardPainter::new(Canvas::REFERENCE, &layout, &assets).unwrap();
    p.canvas.fill_background(layout.palette.background);
    let slot = card_slots(&layout, &p.scale)[0];
    p.draw_card(&slot, &player("Nobody")).unwrap();
    let frame = p.canvas.finish().unwrap();

    assert_eq!(frame.pixel(270, 495), Some(BG));
    let ring = frame.pixel(333, 495).unwrap();
    assert!(ring[1] > 150 && ring[2] > 150, "{ring:?}");
}

#[test]
fn present_logo_fills_its_slot() {
    let layout = Starting6Layout::default();
    let assets = InMemoryAssets::new()
        .with(AssetKind::Logo, "red.png", png_bytes(16, 16, [255, 0, 0, 255]))
        .unwrap();
    let mut p = CardPainter::new(Canvas::REFERENCE, &layout, &assets).unwrap();
    p.canvas.fill_background(layout.palette.background);
    let slot = card_slots(&layout, &p.scale)[0];
    p.draw_card(&slot, &player("Red")).unwrap();
    let frame = p.canvas.finish().unwrap();

    let px = frame.pixel(270, 495).unwrap();
    assert!(px[0] > 200 && px[1] < 50, "{px:?}");
}

#[test]
fn number_badge_is_skipped_without_display_face() {
    let layout = Starting6Layout::default();
    let assets = InMemoryAssets::new();
    let mut p = CardPainter::new(Canvas::REFERENCE, &layout, &assets).unwrap();
    p.canvas.fill_background(layout.palette.background);
    let slot = card_slots(&layout, &p.scale)[0];
    let numbered = PlayerEntry {
        number: Some("17".to_owned()),
        ..player("Nobody")
    };
    p.draw_card(&slot, &numbered).unwrap();
    let frame = p.canvas.finish().unwrap();

    // center of the card and where a badge at `c.x + number_gap` would land
    assert_eq!(frame.pixel(270, 390), Some(BG));
    assert_eq!(frame.pixel(288, 390), Some(BG));
    // the position badge is still drawn
    assert_eq!(frame.pixel(270, 352), Some([0, 214, 255, 255]));
}
