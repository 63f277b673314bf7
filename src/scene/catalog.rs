//! Discovery of replay files laid out as `<root>/<season>/<matchday>/replay_matchday.json`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{CardError, CardResult};

/// File name of a matchday replay inside its matchday directory.
pub const REPLAY_FILE_NAME: &str = "replay_matchday.json";

/// Directory name for a season number (`saison_03`).
pub fn season_folder(season: u32) -> String {
    format!("saison_{season:02}")
}

/// Season directories under `root`, sorted by name. Empty when `root` does not exist.
pub fn list_seasons(root: &Path) -> CardResult<Vec<PathBuf>> {
    sorted_subdirs(root)
}

/// Matchday directories of a season, sorted by name. Empty when the season does not exist.
pub fn list_matchdays(season_dir: &Path) -> CardResult<Vec<PathBuf>> {
    sorted_subdirs(season_dir)
}

/// The replay file of a matchday directory, if present.
pub fn find_replay_json(matchday_dir: &Path) -> Option<PathBuf> {
    let p = matchday_dir.join(REPLAY_FILE_NAME);
    p.is_file().then_some(p)
}

/// Replay of the latest matchday of the latest season.
pub fn latest_replay(root: &Path) -> CardResult<PathBuf> {
    let season = list_seasons(root)?
        .pop()
        .ok_or_else(|| CardError::validation(format!("no seasons found in '{}'", root.display())))?;
    let matchday = list_matchdays(&season)?.pop().ok_or_else(|| {
        CardError::validation(format!("no matchdays found in '{}'", season.display()))
    })?;
    find_replay_json(&matchday).ok_or_else(|| {
        CardError::validation(format!(
            "no {REPLAY_FILE_NAME} found in '{}'",
            matchday.display()
        ))
    })
}

fn sorted_subdirs(dir: &Path) -> CardResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("read dir '{}'", dir.display()))? {
        let entry = entry.with_context(|| format!("read dir entry in '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_dir() {
            out.push(path);
        }
    }
    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/catalog.rs"]
mod tests;
