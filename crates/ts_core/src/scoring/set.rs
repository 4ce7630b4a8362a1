//! One scoring block (set) within a match.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::scoring::points::{CountMode, Player, PointCounter, ScoreLabel};

/// A single set: a point counter plus a conclude-once owner.
///
/// A set transitions irreversibly from active to concluded the first time
/// its counter produces a winner; `owner` doubles as the concluded flag,
/// so "owner set iff concluded" holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TennisSet {
    counter: PointCounter,
    owner: Option<Player>,
}

impl TennisSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point on the normal track (first to 6, two clear).
    pub fn record_normal_point(&mut self, player: Player) -> Result<()> {
        self.record(player, CountMode::Normal)
    }

    /// Record a point on the tie-break track (first to 7, two clear).
    pub fn record_tie_break_point(&mut self, player: Player) -> Result<()> {
        self.record(player, CountMode::TieBreak)
    }

    fn record(&mut self, player: Player, mode: CountMode) -> Result<()> {
        if self.owner.is_some() {
            return Err(ScoreError::SetAlreadyConcluded);
        }
        self.counter.record(player, mode)?;
        if let Some(winner) = self.counter.winner() {
            self.owner = Some(winner);
            log::debug!("set concluded, winner {:?}", winner);
        }
        Ok(())
    }

    pub fn has_concluded(&self) -> bool {
        self.owner.is_some()
    }

    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn points(&self, player: Player) -> u32 {
        self.counter.points(player)
    }

    /// Display label for `player`; frozen at its last value once the set
    /// has concluded, but still queryable.
    pub fn score_label(&self, player: Player) -> ScoreLabel {
        self.counter.label(player)
    }

    pub fn mode(&self) -> CountMode {
        self.counter.mode()
    }
}
