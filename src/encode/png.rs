use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::foundation::error::{CardError, CardResult};
use crate::render::frame::FrameRGBA;

/// Encode a frame as PNG bytes (straight alpha, RGBA8).
pub fn encode_png(frame: &FrameRGBA) -> CardResult<Vec<u8>> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(CardError::render(format!(
            "frame byte length {} does not match {}x{} RGBA8",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let rgba = frame.to_straight_rgba8();
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &rgba,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(out)
}

/// Create `path`'s parent directories if needed.
pub fn ensure_parent_dir(path: &Path) -> CardResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode `frame` and write it to `path`, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> CardResult<()> {
    let bytes = encode_png(frame)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Basic properties of an image file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    /// Container format, e.g. `"PNG"`.
    pub format: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Decoded color type, e.g. `"Rgba8"`.
    pub color: String,
    /// Whether the color type carries an alpha channel.
    pub has_alpha: bool,
}

/// Read an image file and report format, size and color type.
pub fn probe_image(path: &Path) -> CardResult<ImageInfo> {
    let reader = image::ImageReader::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff image format '{}'", path.display()))?;

    let format = reader
        .format()
        .and_then(|f| f.extensions_str().first().copied())
        .map(str::to_ascii_uppercase)
        .ok_or_else(|| CardError::validation(format!("unknown image format '{}'", path.display())))?;

    let img = reader
        .decode()
        .with_context(|| format!("decode image '{}'", path.display()))?;
    let color = img.color();

    Ok(ImageInfo {
        format,
        width: img.width(),
        height: img.height(),
        color: format!("{color:?}"),
        has_alpha: color.has_alpha(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
