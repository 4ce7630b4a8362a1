//! Raw point tallies for one set and their display classification.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// One of the two players in a match.
///
/// Player ids arriving from an outer layer (JSON, CLI) are `0` or `1`;
/// inside the crate only this closed enum circulates, so an out-of-range
/// id cannot exist past the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Parse an external player id (`0` or `1`).
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Player::A),
            1 => Ok(Player::B),
            _ => Err(ScoreError::InvalidPlayerId { id }),
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

/// Which counting track a set is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountMode {
    /// First to 6 points, two clear.
    Normal,
    /// First to 7 points, two clear.
    TieBreak,
}

impl CountMode {
    pub fn threshold(self) -> u32 {
        match self {
            CountMode::Normal => 6,
            CountMode::TieBreak => 7,
        }
    }

    pub fn margin(self) -> u32 {
        match self {
            CountMode::Normal => 2,
            CountMode::TieBreak => 2,
        }
    }
}

/// Display label for one player's score within a set.
///
/// Purely presentational: the win decision never looks at labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    Love,
    Fifteen,
    Thirty,
    Forty,
    Deuce,
    Advantage,
    /// Tie-break scores are shown as raw numbers.
    Points(u32),
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreLabel::Love => write!(f, "Love"),
            ScoreLabel::Fifteen => write!(f, "15"),
            ScoreLabel::Thirty => write!(f, "30"),
            ScoreLabel::Forty => write!(f, "40"),
            ScoreLabel::Deuce => write!(f, "Deuce"),
            ScoreLabel::Advantage => write!(f, "Advantage"),
            ScoreLabel::Points(n) => write!(f, "{}", n),
        }
    }
}

/// Per-set point tally for both players.
///
/// Once a winner exists under the counter's active mode the counter is
/// frozen: further points are rejected with [`ScoreError::AlreadyDecided`]
/// so a concluded set's score can never be corrupted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointCounter {
    points: [u32; 2],
    mode: CountMode,
}

impl Default for PointCounter {
    fn default() -> Self {
        Self {
            points: [0, 0],
            mode: CountMode::Normal,
        }
    }
}

impl PointCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self, player: Player) -> u32 {
        self.points[player.index()]
    }

    pub fn mode(&self) -> CountMode {
        self.mode
    }

    /// Record one point for `player` on the given counting track.
    ///
    /// The frozen check runs against the mode active before the call, so
    /// switching tracks cannot un-freeze a decided counter.
    pub fn record(&mut self, player: Player, mode: CountMode) -> Result<()> {
        if self.winner().is_some() {
            return Err(ScoreError::AlreadyDecided);
        }
        self.mode = mode;
        self.points[player.index()] += 1;
        Ok(())
    }

    /// Winner under explicit threshold/margin parameters, if any.
    ///
    /// A player wins once their count reaches `threshold` while leading
    /// the opponent by at least `margin`.
    pub fn winner_with(&self, threshold: u32, margin: u32) -> Option<Player> {
        for player in [Player::A, Player::B] {
            let mine = self.points(player);
            let theirs = self.points(player.opponent());
            if mine >= threshold && mine >= theirs + margin {
                return Some(player);
            }
        }
        None
    }

    /// Winner under the active mode's threshold and margin, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner_with(self.mode.threshold(), self.mode.margin())
    }

    /// Display label for `player`, derived from both tallies.
    pub fn label(&self, player: Player) -> ScoreLabel {
        if self.mode == CountMode::TieBreak {
            return ScoreLabel::Points(self.points(player));
        }
        let mine = self.points(player);
        let theirs = self.points(player.opponent());
        if mine >= 3 && theirs >= 3 {
            if mine == theirs {
                return ScoreLabel::Deuce;
            }
            if mine == theirs + 1 {
                return ScoreLabel::Advantage;
            }
        }
        match mine {
            0 => ScoreLabel::Love,
            1 => ScoreLabel::Fifteen,
            2 => ScoreLabel::Thirty,
            _ => ScoreLabel::Forty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_boundary() {
        assert_eq!(Player::from_id(0), Ok(Player::A));
        assert_eq!(Player::from_id(1), Ok(Player::B));
        assert_eq!(
            Player::from_id(2),
            Err(ScoreError::InvalidPlayerId { id: 2 })
        );
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
    }

    #[test]
    fn test_label_progression() {
        let mut counter = PointCounter::new();
        assert_eq!(counter.label(Player::A), ScoreLabel::Love);
        counter.record(Player::A, CountMode::Normal).unwrap();
        assert_eq!(counter.label(Player::A), ScoreLabel::Fifteen);
        counter.record(Player::A, CountMode::Normal).unwrap();
        assert_eq!(counter.label(Player::A), ScoreLabel::Thirty);
        counter.record(Player::A, CountMode::Normal).unwrap();
        assert_eq!(counter.label(Player::A), ScoreLabel::Forty);
        assert_eq!(counter.label(Player::B), ScoreLabel::Love);
    }

    #[test]
    fn test_label_deuce_and_advantage() {
        let mut counter = PointCounter::new();
        for _ in 0..3 {
            counter.record(Player::A, CountMode::Normal).unwrap();
            counter.record(Player::B, CountMode::Normal).unwrap();
        }
        assert_eq!(counter.label(Player::A), ScoreLabel::Deuce);
        assert_eq!(counter.label(Player::B), ScoreLabel::Deuce);

        counter.record(Player::A, CountMode::Normal).unwrap();
        assert_eq!(counter.label(Player::A), ScoreLabel::Advantage);
        assert_eq!(counter.label(Player::B), ScoreLabel::Forty);
    }

    #[test]
    fn test_tie_break_labels_are_numeric() {
        let mut counter = PointCounter::new();
        counter.record(Player::A, CountMode::TieBreak).unwrap();
        counter.record(Player::A, CountMode::TieBreak).unwrap();
        assert_eq!(counter.label(Player::A), ScoreLabel::Points(2));
        assert_eq!(counter.label(Player::B), ScoreLabel::Points(0));
        assert_eq!(counter.label(Player::A).to_string(), "2");
    }

    #[test]
    fn test_winner_requires_threshold_and_margin() {
        let mut counter = PointCounter::new();
        // 5-5: neither threshold nor margin.
        for _ in 0..5 {
            counter.record(Player::A, CountMode::Normal).unwrap();
            counter.record(Player::B, CountMode::Normal).unwrap();
        }
        assert_eq!(counter.winner(), None);

        // 6-5: threshold met, margin not.
        counter.record(Player::A, CountMode::Normal).unwrap();
        assert_eq!(counter.winner(), None);

        // 7-5: both met.
        counter.record(Player::A, CountMode::Normal).unwrap();
        assert_eq!(counter.winner(), Some(Player::A));
    }

    #[test]
    fn test_winner_with_parameterization() {
        let mut counter = PointCounter::new();
        for _ in 0..6 {
            counter.record(Player::B, CountMode::TieBreak).unwrap();
        }
        // 0-6: enough for the normal track, one short of a tie-break win.
        assert_eq!(counter.winner_with(6, 2), Some(Player::B));
        assert_eq!(counter.winner_with(7, 2), None);
        assert_eq!(counter.winner(), None);

        counter.record(Player::B, CountMode::TieBreak).unwrap();
        assert_eq!(counter.winner(), Some(Player::B));
    }

    #[test]
    fn test_frozen_after_win() {
        let mut counter = PointCounter::new();
        for _ in 0..6 {
            counter.record(Player::A, CountMode::Normal).unwrap();
        }
        assert_eq!(counter.winner(), Some(Player::A));

        let snapshot = counter.clone();
        assert_eq!(
            counter.record(Player::B, CountMode::Normal),
            Err(ScoreError::AlreadyDecided)
        );
        // Switching tracks must not un-freeze the counter either.
        assert_eq!(
            counter.record(Player::B, CountMode::TieBreak),
            Err(ScoreError::AlreadyDecided)
        );
        assert_eq!(counter, snapshot);
    }
}
