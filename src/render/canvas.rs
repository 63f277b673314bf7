use std::sync::Arc;

use vello_cpu::kurbo::Shape;

use crate::assets::decode::PreparedImage;
use crate::assets::text::TextRun;
use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::render::frame::FrameRGBA;

/// How a text run is placed relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    /// Text box centered on the point.
    Center,
    /// Left edge on the point, vertically centered.
    LeftMiddle,
    /// Top-left corner on the point.
    TopLeft,
}

impl Anchor {
    pub(crate) fn top_left(self, at: Point, width: f64, height: f64) -> Point {
        match self {
            Anchor::Center => Point::new(at.x - width / 2.0, at.y - height / 2.0),
            Anchor::LeftMiddle => Point::new(at.x, at.y - height / 2.0),
            Anchor::TopLeft => at,
        }
    }
}

/// Immediate-mode drawing surface for one card.
pub(crate) struct CardCanvas {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
}

impl CardCanvas {
    pub(crate) fn new(canvas: Canvas) -> CardResult<Self> {
        let (w, h) = canvas_u16(canvas)?;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
        })
    }

    pub(crate) fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn reset_transform(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    /// Paint the whole canvas with one color.
    pub(crate) fn fill_background(&mut self, color: Rgba8) {
        let r = Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
        );
        self.fill_rect(r, color);
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(color.to_peniko());
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    pub(crate) fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(color.to_peniko());
        let path = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius).to_path(0.1);
        self.ctx.fill_path(&path);
    }

    pub(crate) fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(color.to_peniko());
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        let path = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius).to_path(0.1);
        self.ctx.stroke_path(&path);
    }

    /// Draw `image` at its native size with its top-left corner at `top_left`.
    pub(crate) fn draw_image(&mut self, image: &PreparedImage, top_left: Point) -> CardResult<()> {
        let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        self.reset_transform();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            top_left.x, top_left.y,
        )));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        Ok(())
    }

    /// Draw a shaped run placed by `anchor`. `tint` replaces the run's brush color.
    pub(crate) fn draw_text(&mut self, run: &TextRun, at: Point, anchor: Anchor, tint: Option<Rgba8>) {
        let origin = anchor.top_left(at, run.width(), run.height());
        self.reset_transform();
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));

        for line in run.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let color = match tint {
                    Some(c) => c,
                    None => {
                        let b = glyph_run.style().brush;
                        Rgba8::new(b.r, b.g, b.b, b.a)
                    }
                };
                self.ctx.set_paint(color.to_peniko());

                // Line-relative positions: advances and baseline already applied.
                let glyphs = glyph_run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&run.font)
                    .font_size(glyph_run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize everything drawn so far.
    pub(crate) fn finish(mut self) -> CardResult<FrameRGBA> {
        let (w, h) = canvas_u16(self.canvas)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn canvas_u16(canvas: Canvas) -> CardResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| CardError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| CardError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn pixmap_from_premul_bytes(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CardResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CardError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CardError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect::<Vec<_>>();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
