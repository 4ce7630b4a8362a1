//! # ts_core - Tennis Match Scoring Engine
//!
//! Live scoring state machine for a two-player tennis match: points
//! accumulate into sets, sets conclude on a threshold-with-margin rule,
//! and the match verdict is derived from concluded sets. A tie-break
//! track (first to 7, two clear) opens in the final set when both
//! players hold six sets each.
//!
//! ## Features
//! - Pure in-memory state machine, no I/O
//! - Every caller error is a recoverable no-op
//! - JSON API for easy integration with UI layers

pub mod api;
pub mod error;
pub mod scoring;

// Re-export main API functions
pub use api::{score_match_json, snapshot, snapshot_json, MatchSnapshot, SetSnapshot};
pub use error::{Result, ScoreError};
pub use scoring::{
    CountMode, MatchRules, Player, PointCounter, ScoreLabel, TennisMatch, TennisSet,
    MIN_SETS_FOR_VERDICT,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
