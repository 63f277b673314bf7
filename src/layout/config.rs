use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CardError, CardResult};

/// Colors, geometry and fonts of the Starting Six card.
///
/// All coordinates and sizes are in reference-canvas units (1080 x 1350) and are scaled to the
/// actual canvas at render time. Horizontal card positions are fractions of the canvas width.
/// Every field is optional in JSON; missing fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Starting6Layout {
    /// Color set.
    pub palette: Palette,
    /// Title, sub-header and divider.
    pub header: HeaderStyle,
    /// Card row positions.
    pub rows: RowLayout,
    /// Per-card anatomy.
    pub card: CardStyle,
    /// Footer meta line.
    pub meta: MetaStyle,
    /// Bottom-right watermark.
    pub watermark: WatermarkStyle,
    /// Font file names inside the fonts directory.
    pub fonts: FontFiles,
}

impl Starting6Layout {
    /// Parse a layout from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardResult<Self> {
        serde_json::from_reader(r).map_err(|e| CardError::serde(format!("parse layout JSON: {e}")))
    }

    /// Parse a layout from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open layout JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Card colors.
pub struct Palette {
    /// Fallback background when no template is available.
    pub background: Rgba8,
    /// Names and team names.
    pub text: Rgba8,
    /// Sub-header, badges and logo placeholders.
    pub accent: Rgba8,
    /// Divider line and meta line.
    pub divider: Rgba8,
    /// Letters drawn on top of accent badges.
    pub badge_text: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::opaque(10, 10, 15),
            text: Rgba8::opaque(255, 255, 255),
            accent: Rgba8::opaque(0, 214, 255),
            divider: Rgba8::new(255, 255, 255, 70),
            badge_text: Rgba8::opaque(0, 0, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Title, sub-header and divider placement.
pub struct HeaderStyle {
    /// Title drawn on the fallback background (templates carry their own). `None` disables it.
    pub title: Option<String>,
    /// Title center y.
    pub title_y: f64,
    /// Title size.
    pub title_size: f32,
    /// Sub-header center y.
    pub sub_y: f64,
    /// Sub-header width budget.
    pub sub_max_width: f64,
    /// Sub-header start size.
    pub sub_size: f32,
    /// Sub-header minimum size.
    pub sub_min_size: f32,
    /// Divider start x.
    pub divider_x0: f64,
    /// Divider end x.
    pub divider_x1: f64,
    /// Divider y.
    pub divider_y: f64,
    /// Divider thickness.
    pub divider_width: f64,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            title: Some("STARTING SIX".to_owned()),
            title_y: 110.0,
            title_size: 44.0,
            sub_y: 180.0,
            sub_max_width: 980.0,
            sub_size: 20.0,
            sub_min_size: 14.0,
            divider_x0: 110.0,
            divider_x1: 970.0,
            divider_y: 195.0,
            divider_width: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Where the three card rows sit.
pub struct RowLayout {
    /// Forward columns as fractions of the canvas width.
    pub forwards_x: [f64; 3],
    /// Forward card center y per column (the middle card sits higher).
    pub forwards_y: [f64; 3],
    /// Defender columns as fractions of the canvas width.
    pub defense_x: [f64; 2],
    /// Defender card center y.
    pub defense_y: f64,
    /// Goalie column as a fraction of the canvas width.
    pub goalie_x: f64,
    /// Goalie card center y.
    pub goalie_y: f64,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            forwards_x: [0.25, 0.5, 0.75],
            forwards_y: [390.0, 330.0, 390.0],
            defense_x: [0.375, 0.625],
            defense_y: 720.0,
            goalie_x: 0.5,
            goalie_y: 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Geometry of one player card relative to its center.
pub struct CardStyle {
    /// Player name size.
    pub name_size: f32,
    /// Names wider than this are abbreviated to `"F. Last"`.
    pub name_max_width: f64,
    /// Team name size.
    pub team_size: f32,
    /// Team names are truncated to this width.
    pub card_width: f64,
    /// Gap between the name baseline area and the logo top.
    pub logo_offset_y: f64,
    /// Logo edge length.
    pub logo_size: f64,
    /// Gap between the logo bottom and the team name center.
    pub team_gap: f64,
    /// Draw an accent ring where a logo is missing instead of leaving the slot empty.
    pub logo_placeholder: bool,
    /// Position badge radius.
    pub badge_radius: f64,
    /// Position badge center offset above the card center.
    pub badge_offset_y: f64,
    /// Letter size inside badges.
    pub badge_text_size: f32,
    /// Jersey number badge radius.
    pub number_radius: f64,
    /// Gap between the name's right edge and the number badge center.
    pub number_gap: f64,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            name_size: 26.0,
            name_max_width: 250.0,
            team_size: 15.0,
            card_width: 240.0,
            logo_offset_y: 40.0,
            logo_size: 130.0,
            team_gap: 18.0,
            logo_placeholder: false,
            badge_radius: 16.0,
            badge_offset_y: 38.0,
            badge_text_size: 13.0,
            number_radius: 15.0,
            number_gap: 18.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Footer line with seed, source and pool sizes.
pub struct MetaStyle {
    /// Left edge x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Text size.
    pub size: f32,
}

impl Default for MetaStyle {
    fn default() -> Self {
        Self {
            x: 60.0,
            y: 1290.0,
            size: 14.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Watermark text and placement.
pub struct WatermarkStyle {
    /// Watermark text. `None` disables the watermark.
    pub text: Option<String>,
    /// Text size.
    pub size: f32,
    /// Distance from the right and bottom edges.
    pub margin: f64,
    /// Text alpha (0..=255); the shadow uses 60 % of it.
    pub opacity: u8,
}

impl Default for WatermarkStyle {
    fn default() -> Self {
        Self {
            text: Some("powered by HIGHspeeΔ PUX! Engine".to_owned()),
            size: 20.0,
            margin: 22.0,
            opacity: 90,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Font files looked up in the fonts directory.
pub struct FontFiles {
    /// Face for header, names, badges and meta line.
    pub display: String,
    /// Face for the watermark.
    pub watermark: String,
}

impl Default for FontFiles {
    fn default() -> Self {
        Self {
            display: "PULS_Schriftart.ttf".to_owned(),
            watermark: "Inter-Medium.ttf".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
