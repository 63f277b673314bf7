use crate::assets::text::{FontFace, TextLayoutEngine, TextRun};
use crate::foundation::core::{Point, Rgba8, Vec2};
use crate::foundation::error::CardResult;
use crate::layout::config::WatermarkStyle;
use crate::layout::slots::ReferenceScale;
use crate::render::canvas::{Anchor, CardCanvas};

/// Drop shadow under a text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Shadow {
    pub(crate) offset: Vec2,
    pub(crate) color: Rgba8,
}

impl Shadow {
    /// Soft shadow used under player names.
    pub(crate) const CARD_TEXT: Shadow = Shadow {
        offset: Vec2::new(0.0, 2.0),
        color: Rgba8::new(0, 0, 0, 140),
    };
}

/// Draw `run` twice: first tinted with the shadow color at the shadow offset, then as is.
pub(crate) fn draw_text_shadowed(
    canvas: &mut CardCanvas,
    run: &TextRun,
    at: Point,
    anchor: Anchor,
    shadow: Shadow,
) {
    canvas.draw_text(run, at + shadow.offset, anchor, Some(shadow.color));
    canvas.draw_text(run, at, anchor, None);
}

/// Watermark alpha and the alpha of its 1 px shadow (60 % of the text).
pub(crate) fn watermark_alphas(opacity: u8) -> (u8, u8) {
    let shadow = (f64::from(opacity) * 0.6).round() as u8;
    (opacity, shadow)
}

/// Bottom-right watermark with a faint shadow. Returns the text's top-left corner.
pub(crate) fn draw_watermark(
    canvas: &mut CardCanvas,
    engine: &mut TextLayoutEngine,
    face: &FontFace,
    style: &WatermarkStyle,
    scale: &ReferenceScale,
) -> CardResult<Option<Point>> {
    let Some(text) = style.text.as_deref().filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };

    let (text_alpha, shadow_alpha) = watermark_alphas(style.opacity);
    let run = engine.layout_plain(
        text,
        face,
        scale.font(style.size),
        Rgba8::new(255, 255, 255, text_alpha).into(),
    )?;

    let c = canvas.canvas();
    let margin = scale.len(style.margin);
    let top_left = Point::new(
        f64::from(c.width) - run.width() - margin,
        f64::from(c.height) - run.height() - margin,
    );

    tracing::debug!(x = top_left.x, y = top_left.y, "watermark placed");
    draw_text_shadowed(
        canvas,
        &run,
        top_left,
        Anchor::TopLeft,
        Shadow {
            offset: Vec2::new(1.0, 1.0),
            color: Rgba8::new(0, 0, 0, shadow_alpha),
        },
    );
    Ok(Some(top_left))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/watermark.rs"]
mod tests;
