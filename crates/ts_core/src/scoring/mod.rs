//! Match scoring state machine: points, sets and the match verdict.

pub mod match_state;
pub mod points;
pub mod set;

pub use match_state::{MatchRules, TennisMatch, MIN_SETS_FOR_VERDICT};
pub use points::{CountMode, Player, PointCounter, ScoreLabel};
pub use set::TennisSet;
