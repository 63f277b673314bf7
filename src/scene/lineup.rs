use crate::foundation::error::{CardError, CardResult};
use crate::scene::record::{PlayerEntry, Position};

/// Players of a valid Starting Six grouped into their card rows.
///
/// Record order is kept inside each group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lineup<'a> {
    /// Top row, left to right.
    pub forwards: [&'a PlayerEntry; 3],
    /// Middle row, left to right.
    pub defense: [&'a PlayerEntry; 2],
    /// Bottom card.
    pub goalie: &'a PlayerEntry,
}

impl<'a> Lineup<'a> {
    /// Group `players`, failing unless there are exactly 3 F, 2 D and 1 G.
    pub fn from_players(players: &'a [PlayerEntry]) -> CardResult<Self> {
        let of = |pos: Position| players.iter().filter(move |p| p.pos == pos);
        let counts = Position::ALL.map(|pos| of(pos).count());

        let ok = players.len() == 6
            && Position::ALL
                .iter()
                .zip(counts)
                .all(|(pos, n)| n == pos.required());
        if !ok {
            return Err(CardError::validation(format!(
                "starting_six must hold exactly 3 F, 2 D and 1 G; got {} players ({} F, {} D, {} G)",
                players.len(),
                counts[0],
                counts[1],
                counts[2],
            )));
        }

        let mut fw = of(Position::Forward);
        let mut df = of(Position::Defense);
        let mut gk = of(Position::Goalie);
        let missing = || CardError::validation("starting_six grouping lost a player");

        Ok(Self {
            forwards: [
                fw.next().ok_or_else(missing)?,
                fw.next().ok_or_else(missing)?,
                fw.next().ok_or_else(missing)?,
            ],
            defense: [
                df.next().ok_or_else(missing)?,
                df.next().ok_or_else(missing)?,
            ],
            goalie: gk.next().ok_or_else(missing)?,
        })
    }

    /// Every player with its position and index inside its row, top row first.
    pub fn cards(&self) -> impl Iterator<Item = (Position, usize, &'a PlayerEntry)> + '_ {
        let fw = self
            .forwards
            .iter()
            .enumerate()
            .map(|(i, p)| (Position::Forward, i, *p));
        let df = self
            .defense
            .iter()
            .enumerate()
            .map(|(i, p)| (Position::Defense, i, *p));
        fw.chain(df)
            .chain(std::iter::once((Position::Goalie, 0, self.goalie)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/lineup.rs"]
mod tests;
