use crate::foundation::core::Rgba8;
use crate::foundation::error::{CardError, CardResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    /// Red channel.
    pub(crate) r: u8,
    /// Green channel.
    pub(crate) g: u8,
    /// Blue channel.
    pub(crate) b: u8,
    /// Alpha channel.
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// A font registered with a [`TextLayoutEngine`].
#[derive(Clone)]
pub(crate) struct FontFace {
    family: String,
    data: vello_cpu::peniko::FontData,
}

impl FontFace {
    pub(crate) fn family(&self) -> &str {
        &self.family
    }
}

/// Shaped single-line text, ready to be drawn.
pub(crate) struct TextRun {
    pub(crate) layout: parley::Layout<TextBrushRgba8>,
    pub(crate) font: vello_cpu::peniko::FontData,
}

impl TextRun {
    pub(crate) fn width(&self) -> f64 {
        f64::from(self.layout.width())
    }

    pub(crate) fn height(&self) -> f64 {
        f64::from(self.layout.height())
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes once; the returned face is used for every later layout.
    pub(crate) fn register_font(&mut self, font_bytes: Vec<u8>) -> CardResult<FontFace> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CardError::validation("no font families registered from font bytes"))?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CardError::validation("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(FontFace { family, data })
    }

    /// Shape and lay out one line of plain text.
    pub(crate) fn layout_plain(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> CardResult<TextRun> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CardError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(face.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(TextRun {
            layout,
            font: face.data.clone(),
        })
    }

    /// Advance width of `text` at `size_px`.
    pub(crate) fn measure(&mut self, text: &str, face: &FontFace, size_px: f32) -> CardResult<f64> {
        Ok(self
            .layout_plain(text, face, size_px, TextBrushRgba8::default())?
            .width())
    }

    /// Lay out `text` at the largest size in `min_px..=start_px` (2 px steps) that fits `max_width`.
    ///
    /// Falls back to `min_px` when nothing fits.
    pub(crate) fn fit(
        &mut self,
        text: &str,
        face: &FontFace,
        max_width: f64,
        start_px: f32,
        min_px: f32,
        brush: TextBrushRgba8,
    ) -> CardResult<TextRun> {
        let mut size = start_px;
        while size >= min_px {
            let run = self.layout_plain(text, face, size, brush)?;
            if run.width() <= max_width {
                return Ok(run);
            }
            size -= 2.0;
        }
        self.layout_plain(text, face, min_px, brush)
    }

    /// Shorten `text` with a trailing `…` until it fits `max_width`.
    pub(crate) fn truncate_to_width(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
        max_width: f64,
    ) -> CardResult<String> {
        if self.measure(text, face, size_px)? <= max_width {
            return Ok(text.to_owned());
        }
        let chars: Vec<char> = text.chars().collect();
        let candidate = |n: usize| -> String {
            let head: String = chars[..n].iter().collect();
            format!("{}…", head.trim_end())
        };

        let (mut lo, mut hi) = (0usize, chars.len());
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.measure(&candidate(mid), face, size_px)? <= max_width {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        Ok(candidate(lo.saturating_sub(1)))
    }
}

/// `"Maximilian von Musterhausen"` -> `"M. von Musterhausen"`. `None` for single words.
pub(crate) fn abbreviate_name(name: &str) -> Option<String> {
    let mut words = name.split_whitespace();
    let first = words.next()?.chars().next()?;
    let rest: Vec<&str> = words.collect();
    if rest.is_empty() {
        return None;
    }
    Some(format!("{first}. {}", rest.join(" ")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
