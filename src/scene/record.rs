use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{CardError, CardResult};
use crate::scene::lineup::Lineup;

/// One replayed matchday together with its selected Starting Six.
///
/// `starting_six` is optional at load time so that records produced before the selection step
/// can still be inspected; rendering requires it (see [`MatchdaySixRecord::starting_six`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchdaySixRecord {
    /// Replay timestamp as written by the producer (ISO 8601 in practice).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Season number.
    #[serde(default = "default_season")]
    pub season: u32,
    /// Matchday number within the season.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchday: Option<u32>,
    /// Game summaries of the matchday.
    #[serde(default)]
    pub games: Vec<GameSummary>,
    /// Selected players, if the selection step ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_six: Option<StartingSix>,
}

fn default_season() -> u32 {
    1
}

/// Result line of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSummary {
    /// Home team display name.
    pub home: String,
    /// Away team display name.
    pub away: String,
    /// Home goals, when the game was played.
    #[serde(alias = "home_score", skip_serializing_if = "Option::is_none")]
    pub home_goals: Option<u32>,
    /// Away goals, when the game was played.
    #[serde(alias = "away_score", skip_serializing_if = "Option::is_none")]
    pub away_goals: Option<u32>,
}

/// The six selected players plus provenance of the selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartingSix {
    /// Selector version.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    /// Seed used by the selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Name of the data source the selection was computed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Selected players in selection order.
    pub players: Vec<PlayerEntry>,
    /// Selection metadata.
    #[serde(default)]
    pub meta: Meta,
}

impl StartingSix {
    /// Group the players by position, enforcing exactly 3 F, 2 D and 1 G.
    pub fn lineup(&self) -> CardResult<Lineup<'_>> {
        Lineup::from_players(&self.players)
    }
}

/// A selected player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Player id, doubling as the display name (`_` is drawn as a space).
    pub id: String,
    /// Playing position.
    pub pos: Position,
    /// Team display name.
    #[serde(default)]
    pub team: String,
    /// Jersey number, if known.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,
}

impl PlayerEntry {
    /// Name as drawn on the card.
    pub fn display_name(&self) -> String {
        self.id.replace('_', " ")
    }
}

/// Playing position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Forward.
    #[serde(rename = "F")]
    Forward,
    /// Defender.
    #[serde(rename = "D")]
    Defense,
    /// Goalkeeper.
    #[serde(rename = "G")]
    Goalie,
}

impl Position {
    /// All positions in card order (top row first).
    pub const ALL: [Position; 3] = [Position::Forward, Position::Defense, Position::Goalie];

    /// One-letter code used in the record and on the badge.
    pub fn code(self) -> &'static str {
        match self {
            Position::Forward => "F",
            Position::Defense => "D",
            Position::Goalie => "G",
        }
    }

    /// Required number of players on this position.
    pub fn required(self) -> usize {
        match self {
            Position::Forward => 3,
            Position::Defense => 2,
            Position::Goalie => 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Selection metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Whether the selector had to fall back to a relaxed candidate pool.
    pub fallback_used: bool,
    /// Candidate count per position code.
    pub pool_sizes: BTreeMap<String, u64>,
}

/// Headline numbers of a record, as shown before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSummary {
    /// Season number.
    pub season: u32,
    /// Matchday number, if present.
    pub matchday: Option<u32>,
    /// Number of game summaries.
    pub games: usize,
    /// Whether `starting_six` is present.
    pub has_starting_six: bool,
    /// Forwards in `starting_six`.
    pub forwards: usize,
    /// Defenders in `starting_six`.
    pub defense: usize,
    /// Goalies in `starting_six`.
    pub goalies: usize,
}

impl MatchdaySixRecord {
    /// Parse a record from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CardError::serde(format!("parse matchday record JSON: {e}")))
    }

    /// Parse a record from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open matchday record '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f)).map_err(|e| match e {
            CardError::Serde(msg) => CardError::Serde(format!("{msg} (in '{}')", path.display())),
            other => other,
        })
    }

    /// Borrow the Starting Six, failing when the record has none.
    pub fn starting_six(&self) -> CardResult<&StartingSix> {
        self.starting_six
            .as_ref()
            .ok_or_else(|| CardError::validation("no 'starting_six' found in matchday record"))
    }

    /// Matchday as drawn in the header (`X` when unknown).
    pub fn matchday_label(&self) -> String {
        self.matchday
            .map(|m| m.to_string())
            .unwrap_or_else(|| "X".to_owned())
    }

    /// Season and per-position counts without validating the lineup.
    pub fn summary(&self) -> RecordSummary {
        let count = |pos: Position| {
            self.starting_six
                .as_ref()
                .map(|s| s.players.iter().filter(|p| p.pos == pos).count())
                .unwrap_or(0)
        };
        RecordSummary {
            season: self.season,
            matchday: self.matchday,
            games: self.games.len(),
            has_starting_six: self.starting_six.is_some(),
            forwards: count(Position::Forward),
            defense: count(Position::Defense),
            goalies: count(Position::Goalie),
        }
    }
}

/// Accept `"12"`, `12` or `null` for loosely typed id-like fields.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Repr>::deserialize(deserializer)? {
        None => None,
        Some(Repr::Str(s)) if s.trim().is_empty() => None,
        Some(Repr::Str(s)) => Some(s),
        Some(Repr::Int(n)) => Some(n.to_string()),
        Some(Repr::Float(x)) => Some(x.to_string()),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/record.rs"]
mod tests;
