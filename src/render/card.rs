use std::collections::HashMap;

use crate::assets::decode::{PreparedImage, decode_image_resized, rasterize_svg};
use crate::assets::provider::{AssetKind, AssetProvider};
use crate::assets::slug::slugify_team;
use crate::assets::text::{FontFace, TextLayoutEngine, abbreviate_name};
use crate::effects::watermark::{Shadow, draw_text_shadowed};
use crate::foundation::core::{Canvas, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::CardResult;
use crate::layout::config::Starting6Layout;
use crate::layout::slots::{CardSlot, ReferenceScale};
use crate::render::canvas::{Anchor, CardCanvas};
use crate::scene::record::PlayerEntry;

/// Team logos decoded at most once per render, keyed by slug.
pub(crate) struct LogoCache<'a> {
    assets: &'a dyn AssetProvider,
    size_px: u32,
    cache: HashMap<String, Option<PreparedImage>>,
}

impl<'a> LogoCache<'a> {
    pub(crate) fn new(assets: &'a dyn AssetProvider, size_px: u32) -> Self {
        Self {
            assets,
            size_px: size_px.max(1),
            cache: HashMap::new(),
        }
    }

    /// Logo for `team`, `None` when absent or undecodable.
    pub(crate) fn get(&mut self, team: &str) -> CardResult<Option<PreparedImage>> {
        let slug = slugify_team(team);
        if slug.is_empty() {
            return Ok(None);
        }
        if !self.cache.contains_key(&slug) {
            let logo = self.load(&slug)?;
            self.cache.insert(slug.clone(), logo);
        }
        Ok(self.cache.get(&slug).cloned().flatten())
    }

    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }

    fn load(&self, slug: &str) -> CardResult<Option<PreparedImage>> {
        let size = self.size_px;
        let png = format!("{slug}.png");
        if let Some(bytes) = self.assets.read(AssetKind::Logo, &png)? {
            return Ok(decoded_or_warn(&png, decode_image_resized(&bytes, size, size)));
        }
        let svg = format!("{slug}.svg");
        if let Some(bytes) = self.assets.read(AssetKind::Logo, &svg)? {
            return Ok(decoded_or_warn(&svg, rasterize_svg(&bytes, size, size)));
        }
        tracing::debug!(slug, "no logo for team; slot left empty");
        Ok(None)
    }
}

pub(crate) fn decoded_or_warn(
    name: &str,
    decoded: CardResult<PreparedImage>,
) -> Option<PreparedImage> {
    match decoded {
        Ok(img) => Some(img),
        Err(e) => {
            tracing::warn!(asset = name, error = %e, "asset exists but cannot be decoded; treating as missing");
            None
        }
    }
}

/// Mutable drawing state shared by every layer of one card render.
pub(crate) struct CardPainter<'a> {
    pub(crate) canvas: CardCanvas,
    pub(crate) engine: TextLayoutEngine,
    pub(crate) scale: ReferenceScale,
    pub(crate) layout: &'a Starting6Layout,
    pub(crate) display: Option<FontFace>,
    pub(crate) watermark: Option<FontFace>,
    pub(crate) logos: LogoCache<'a>,
}

impl<'a> CardPainter<'a> {
    /// Fresh canvas plus the fonts named by `layout`.
    pub(crate) fn new(
        canvas: Canvas,
        layout: &'a Starting6Layout,
        assets: &'a dyn AssetProvider,
    ) -> CardResult<Self> {
        let scale = ReferenceScale::new(canvas);
        let mut engine = TextLayoutEngine::new();
        let display = load_face(assets, &mut engine, &layout.fonts.display)?;
        let watermark = if layout.fonts.watermark == layout.fonts.display {
            display.clone()
        } else {
            load_face(assets, &mut engine, &layout.fonts.watermark)?
        };
        let logo_px = scale.len(layout.card.logo_size).round().max(1.0) as u32;

        Ok(Self {
            canvas: CardCanvas::new(canvas)?,
            engine,
            scale,
            layout,
            display,
            watermark,
            logos: LogoCache::new(assets, logo_px),
        })
    }
}

fn load_face(
    assets: &dyn AssetProvider,
    engine: &mut TextLayoutEngine,
    name: &str,
) -> CardResult<Option<FontFace>> {
    let Some(bytes) = assets.read(AssetKind::Font, name)? else {
        tracing::warn!(font = name, "font not found; text drawn with it is skipped");
        return Ok(None);
    };
    match engine.register_font(bytes) {
        Ok(face) => {
            tracing::debug!(font = name, family = face.family(), "font registered");
            Ok(Some(face))
        }
        Err(e) => {
            tracing::warn!(font = name, error = %e, "font cannot be loaded; text drawn with it is skipped");
            Ok(None)
        }
    }
}

impl CardPainter<'_> {
    /// Single-line text centered on `at`. Skipped without a display face.
    pub(crate) fn centered_text(
        &mut self,
        text: &str,
        at: Point,
        size_px: f32,
        color: Rgba8,
    ) -> CardResult<Option<f64>> {
        let Some(face) = &self.display else {
            return Ok(None);
        };
        let run = self.engine.layout_plain(text, face, size_px, color.into())?;
        self.canvas.draw_text(&run, at, Anchor::Center, None);
        Ok(Some(run.width()))
    }

    /// Name, badges, logo and team name of one player.
    pub(crate) fn draw_card(&mut self, slot: &CardSlot, player: &PlayerEntry) -> CardResult<()> {
        let layout = self.layout;
        let (card, palette) = (&layout.card, &layout.palette);
        let s = self.scale;
        let c = slot.center;

        let badge_at = Point::new(c.x, c.y - s.y(card.badge_offset_y));
        self.canvas
            .fill_circle(badge_at, s.len(card.badge_radius), palette.accent);
        self.centered_text(
            slot.position.code(),
            badge_at,
            s.font(card.badge_text_size),
            palette.badge_text,
        )?;

        let name_half_width = self.draw_name(player, c)?;

        // The number sits right of the name; without a display face there is no name to anchor on.
        if let Some(number) = player.number.as_ref().filter(|_| self.display.is_some()) {
            let at = Point::new(c.x + name_half_width + s.x(card.number_gap), c.y);
            self.canvas
                .fill_circle(at, s.len(card.number_radius), palette.accent);
            self.centered_text(
                number,
                at,
                s.font(card.badge_text_size),
                palette.badge_text,
            )?;
        }

        let logo_px = s.len(card.logo_size).round();
        let logo_top_left = Point::new(c.x - logo_px / 2.0, c.y + s.y(card.logo_offset_y));
        match self.logos.get(&player.team)? {
            Some(logo) => self.canvas.draw_image(&logo, logo_top_left)?,
            None if card.logo_placeholder => {
                let ring_w = s.len(3.0);
                self.canvas.stroke_circle(
                    logo_top_left + Vec2::new(logo_px / 2.0, logo_px / 2.0),
                    (logo_px - ring_w) / 2.0,
                    ring_w,
                    palette.accent,
                );
            }
            None => {}
        }

        let team_at = Point::new(c.x, logo_top_left.y + logo_px + s.y(card.team_gap));
        self.draw_team(&player.team, team_at)
    }

    /// Draws the (possibly abbreviated) name; returns half its width.
    fn draw_name(&mut self, player: &PlayerEntry, at: Point) -> CardResult<f64> {
        let Some(face) = &self.display else {
            return Ok(0.0);
        };
        let layout = self.layout;
        let card = &layout.card;
        let size = self.scale.font(card.name_size);

        let mut name = player.display_name();
        if self.engine.measure(&name, face, size)? > self.scale.x(card.name_max_width)
            && let Some(short) = abbreviate_name(&name)
        {
            name = short;
        }

        let run = self
            .engine
            .layout_plain(&name, face, size, layout.palette.text.into())?;
        draw_text_shadowed(&mut self.canvas, &run, at, Anchor::Center, Shadow::CARD_TEXT);
        Ok(run.width() / 2.0)
    }

    fn draw_team(&mut self, team: &str, at: Point) -> CardResult<()> {
        let Some(face) = &self.display else {
            return Ok(());
        };
        if team.trim().is_empty() {
            return Ok(());
        }
        let layout = self.layout;
        let card = &layout.card;
        let size = self.scale.font(card.team_size);
        let text = self
            .engine
            .truncate_to_width(team, face, size, self.scale.x(card.card_width))?;
        let run = self
            .engine
            .layout_plain(&text, face, size, layout.palette.text.into())?;
        self.canvas.draw_text(&run, at, Anchor::Center, None);
        Ok(())
    }

    /// Horizontal divider line under the sub-header.
    pub(crate) fn draw_divider(&mut self) {
        let layout = self.layout;
        let h = &layout.header;
        let half = self.scale.len(h.divider_width) / 2.0;
        let y = self.scale.y(h.divider_y);
        let rect = Rect::new(
            self.scale.x(h.divider_x0),
            y - half,
            self.scale.x(h.divider_x1),
            y + half,
        );
        self.canvas.fill_rect(rect, layout.palette.divider);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/card.rs"]
mod tests;
