use std::path::{Path, PathBuf};

use crate::assets::decode::{PreparedImage, decode_image};
use crate::assets::provider::{AssetKind, AssetProvider, DirAssets, RenderPaths};
use crate::effects::watermark::draw_watermark;
use crate::encode::png::write_png;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::CardResult;
use crate::layout::config::Starting6Layout;
use crate::layout::slots::card_slots;
use crate::render::canvas::Anchor;
use crate::render::card::{CardPainter, decoded_or_warn};
use crate::render::frame::FrameRGBA;
use crate::scene::record::{MatchdaySixRecord, Position, StartingSix};

/// Template looked up when the caller does not name one.
pub const DEFAULT_TEMPLATE: &str = "starting6v1.png";

/// Options for one Starting Six render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOpts {
    /// Season text in the sub-header. Defaults to `"SAISON {season}"`.
    pub season_label: Option<String>,
    /// Background template file name inside the templates directory.
    pub template_name: String,
    /// Output file name (joined onto the output directory) or absolute path.
    pub out_name: Option<PathBuf>,
    /// Draw the bottom-right watermark.
    pub watermark: bool,
    /// Colors, geometry and fonts.
    pub layout: Starting6Layout,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            season_label: None,
            template_name: DEFAULT_TEMPLATE.to_owned(),
            out_name: None,
            watermark: true,
            layout: Starting6Layout::default(),
        }
    }
}

/// `"SAISON 2 • SPIELTAG 7"`, upper-cased.
pub(crate) fn sub_header(record: &MatchdaySixRecord, season_label: Option<&str>) -> String {
    let label = season_label
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Saison {}", record.season));
    format!("{label} • Spieltag {}", record.matchday_label()).to_uppercase()
}

/// Footer with seed, source, pool sizes and markers for fallback selections.
pub(crate) fn meta_line(six: &StartingSix) -> String {
    let mut parts = Vec::new();
    if let Some(seed) = six.seed {
        parts.push(format!("SEED {seed}"));
    }
    if let Some(source) = six.source.as_deref().filter(|s| !s.trim().is_empty()) {
        parts.push(format!("SOURCE {source}"));
    }

    let pools = &six.meta.pool_sizes;
    let mut pool = Position::ALL
        .iter()
        .filter_map(|p| pools.get(p.code()).map(|n| format!("{} {n}", p.code())))
        .collect::<Vec<_>>();
    pool.extend(
        pools
            .iter()
            .filter(|(k, _)| !Position::ALL.iter().any(|p| p.code() == k.as_str()))
            .map(|(k, n)| format!("{k} {n}")),
    );
    if !pool.is_empty() {
        parts.push(format!("POOL {}", pool.join(" / ")));
    }

    if six.meta.fallback_used {
        parts.push("FALLBACK".to_owned());
    }
    if let Some(v) = six.version.as_deref() {
        parts.push(format!("V{v}"));
    }
    parts.join(" • ")
}

/// `matchday_starting6_s01_spieltag07.png`; matchday `XX` when unknown.
pub fn default_out_name(record: &MatchdaySixRecord) -> String {
    let matchday = record
        .matchday
        .map(|m| format!("{m:02}"))
        .unwrap_or_else(|| "XX".to_owned());
    format!(
        "matchday_starting6_s{:02}_spieltag{matchday}.png",
        record.season
    )
}

/// Where [`render_matchday_starting6`] writes for `record`.
pub fn output_path(paths: &RenderPaths, opts: &RenderOpts, record: &MatchdaySixRecord) -> PathBuf {
    match &opts.out_name {
        Some(name) if name.is_absolute() => name.clone(),
        Some(name) => paths.output_dir().join(name),
        None => paths.output_dir().join(default_out_name(record)),
    }
}

fn load_template(assets: &dyn AssetProvider, name: &str) -> CardResult<Option<PreparedImage>> {
    if name.trim().is_empty() {
        return Ok(None);
    }
    match assets.read(AssetKind::Template, name)? {
        Some(bytes) => Ok(decoded_or_warn(name, decode_image(&bytes))),
        None => {
            tracing::debug!(template = name, "template not found; using plain background");
            Ok(None)
        }
    }
}

/// Render the Starting Six card for `record` into memory.
///
/// Fails when the record has no `starting_six` or the lineup is not 3 F / 2 D / 1 G. Missing or
/// undecodable templates, logos and fonts degrade to the plain background, an empty logo slot and
/// skipped text respectively. The output has the template's size, or 1080 x 1350 without one.
#[tracing::instrument(skip_all, fields(season = record.season, matchday = ?record.matchday))]
pub fn render_starting6(
    record: &MatchdaySixRecord,
    opts: &RenderOpts,
    assets: &dyn AssetProvider,
) -> CardResult<FrameRGBA> {
    let six = record.starting_six()?;
    let lineup = six.lineup()?;
    let layout = &opts.layout;

    let template = load_template(assets, &opts.template_name)?;
    let canvas = match &template {
        Some(t) => Canvas::new(t.width, t.height)?,
        None => Canvas::REFERENCE,
    };
    let mut p = CardPainter::new(canvas, layout, assets)?;
    let s = p.scale;

    p.canvas.fill_background(layout.palette.background);
    match &template {
        Some(t) => p.canvas.draw_image(t, Point::ORIGIN)?,
        None => {
            if let Some(title) = layout.header.title.as_deref() {
                p.centered_text(
                    title,
                    s.point(540.0, layout.header.title_y),
                    s.font(layout.header.title_size),
                    layout.palette.text,
                )?;
            }
        }
    }

    let header = sub_header(record, opts.season_label.as_deref());
    if let Some(face) = &p.display {
        let h = &layout.header;
        let run = p.engine.fit(
            &header,
            face,
            s.x(h.sub_max_width),
            s.font(h.sub_size),
            s.font(h.sub_min_size),
            layout.palette.accent.into(),
        )?;
        p.canvas
            .draw_text(&run, s.point(540.0, h.sub_y), Anchor::Center, None);
    }
    p.draw_divider();

    for (slot, (pos, index, player)) in card_slots(layout, &s).iter().zip(lineup.cards()) {
        debug_assert_eq!((slot.position, slot.index), (pos, index));
        p.draw_card(slot, player)?;
    }
    tracing::debug!(logos = p.logos.len(), "cards drawn");

    let meta = meta_line(six);
    if !meta.is_empty()
        && let Some(face) = &p.display
    {
        let m = &layout.meta;
        let run = p.engine.layout_plain(
            &meta,
            face,
            s.font(m.size),
            layout.palette.text.with_alpha(160).into(),
        )?;
        p.canvas
            .draw_text(&run, s.point(m.x, m.y), Anchor::LeftMiddle, None);
    }

    if opts.watermark
        && let Some(face) = &p.watermark
    {
        draw_watermark(&mut p.canvas, &mut p.engine, face, &layout.watermark, &s)?;
    }

    p.canvas.finish()
}

/// Load `json_path`, render with assets under `paths` and write the PNG.
///
/// Returns the written path (see [`output_path`]).
#[tracing::instrument(skip(paths, opts), fields(base = %paths.base_dir.display()))]
pub fn render_matchday_starting6(
    json_path: &Path,
    paths: &RenderPaths,
    opts: &RenderOpts,
) -> CardResult<PathBuf> {
    let record = MatchdaySixRecord::from_path(json_path)?;
    let assets = DirAssets::new(paths.clone());
    let frame = render_starting6(&record, opts, &assets)?;

    let out = output_path(paths, opts, &record);
    write_png(&out, &frame)?;
    tracing::info!(path = %out.display(), width = frame.width, height = frame.height, "wrote starting six card");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/starting6.rs"]
mod tests;
