//! Starting Six renders a matchday's six best players (3 forwards, 2 defenders, 1 goalie) into a
//! static PNG card.
//!
//! The pipeline is:
//!
//! - Load a [`MatchdaySixRecord`] from JSON
//! - Render it with [`render_starting6`] against an [`AssetProvider`] (templates, logos, fonts)
//! - Encode the [`FrameRGBA`] with [`encode_png`], or do all of it at once with
//!   [`render_matchday_starting6`]
//!
//! Missing templates, logos and fonts degrade gracefully; a malformed lineup is a hard error.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod encode;
mod foundation;
mod layout;
mod render;
mod scene;

pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{CardError, CardResult};

pub use crate::assets::provider::{AssetKind, AssetProvider, DirAssets, InMemoryAssets, RenderPaths};
pub use crate::assets::slug::slugify_team;
pub use crate::encode::png::{ImageInfo, encode_png, ensure_parent_dir, probe_image, write_png};
pub use crate::layout::config::{
    CardStyle, FontFiles, HeaderStyle, MetaStyle, Palette, RowLayout, Starting6Layout,
    WatermarkStyle,
};
pub use crate::layout::slots::{CardSlot, ReferenceScale, card_slots};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::starting6::{
    DEFAULT_TEMPLATE, RenderOpts, default_out_name, output_path, render_matchday_starting6,
    render_starting6,
};
pub use crate::scene::catalog::{
    REPLAY_FILE_NAME, find_replay_json, latest_replay, list_matchdays, list_seasons,
    season_folder,
};
pub use crate::scene::lineup::Lineup;
pub use crate::scene::record::{
    GameSummary, MatchdaySixRecord, Meta, PlayerEntry, Position, RecordSummary, StartingSix,
};
