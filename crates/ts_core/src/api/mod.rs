//! JSON surface for outer layers (UI, CLI).
//!
//! A [`ScoreRequest`] replays a point sequence through the public
//! [`TennisMatch::record_point`] mutator and returns a [`MatchSnapshot`]
//! built entirely from the read accessors.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::scoring::{MatchRules, Player, TennisMatch};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub schema_version: u8,
    /// Override for the default 13-set format.
    #[serde(default)]
    pub max_sets: Option<usize>,
    pub points: Vec<PointEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointEntry {
    /// External player id, `0` or `1`.
    pub player: u8,
    #[serde(default)]
    pub tie_break: bool,
}

#[derive(Debug, Serialize)]
pub struct MatchSnapshot {
    pub schema_version: u8,
    pub decided: bool,
    pub owner: Option<Player>,
    pub provisional_owner: Option<Player>,
    pub current_set: usize,
    /// Active-set score labels, rendered, indexed by player.
    pub score_line: [String; 2],
    pub sets: Vec<SetSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct SetSnapshot {
    pub owner: Option<Player>,
    pub points: [u32; 2],
}

/// Snapshot of the current match state via the read accessors only.
pub fn snapshot(m: &TennisMatch) -> MatchSnapshot {
    let sets = m
        .sets()
        .iter()
        .map(|set| SetSnapshot {
            owner: set.owner(),
            points: [set.points(Player::A), set.points(Player::B)],
        })
        .collect();
    MatchSnapshot {
        schema_version: SCHEMA_VERSION,
        decided: m.is_decided(),
        owner: m.owner(),
        provisional_owner: m.provisional_owner(),
        current_set: m.current_set(),
        score_line: [
            m.score_label(Player::A).to_string(),
            m.score_label(Player::B).to_string(),
        ],
        sets,
    }
}

pub fn snapshot_json(m: &TennisMatch) -> Result<String> {
    Ok(serde_json::to_string(&snapshot(m))?)
}

/// Score a whole point sequence from JSON and return the snapshot JSON.
pub fn score_match_json(request: &str) -> Result<String> {
    let request: ScoreRequest = serde_json::from_str(request)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(ScoreError::UnsupportedSchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    let rules = MatchRules {
        max_sets: request.max_sets.unwrap_or(MatchRules::default().max_sets),
        ..MatchRules::default()
    };
    let mut m = TennisMatch::with_rules(rules);
    for entry in &request.points {
        let player = Player::from_id(entry.player)?;
        m.record_point(player, entry.tie_break)?;
    }
    snapshot_json(&m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;
    use serde_json::json;

    #[test]
    fn test_score_request_happy_path() {
        let request = json!({
            "schema_version": 1,
            "points": [
                {"player": 0}, {"player": 0}, {"player": 0},
                {"player": 0}, {"player": 0}, {"player": 0}
            ]
        });
        let out = score_match_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["decided"], false);
        assert_eq!(parsed["current_set"], 1);
        assert_eq!(parsed["sets"][0]["owner"], "a");
        assert_eq!(parsed["sets"][0]["points"][0], 6);
        assert_eq!(parsed["provisional_owner"], "a");
    }

    #[test]
    fn test_invalid_player_id_surfaces() {
        let request = json!({
            "schema_version": 1,
            "points": [{"player": 3}]
        });
        assert_eq!(
            score_match_json(&request.to_string()),
            Err(ScoreError::InvalidPlayerId { id: 3 })
        );
    }

    #[test]
    fn test_unsupported_schema_version_rejected() {
        let request = json!({
            "schema_version": 99,
            "points": [{"player": 0}]
        });
        assert_eq!(
            score_match_json(&request.to_string()),
            Err(ScoreError::UnsupportedSchemaVersion {
                found: 99,
                expected: SCHEMA_VERSION
            })
        );
    }

    #[test]
    fn test_malformed_request_is_serialization_error() {
        let err = score_match_json("not json").unwrap_err();
        assert!(matches!(err, ScoreError::Serialization(_)));
    }

    #[test]
    fn test_snapshot_score_line() {
        let mut m = TennisMatch::new();
        m.record_point(Player::A, false).unwrap();
        let snap = snapshot(&m);
        assert_eq!(snap.score_line, ["15".to_string(), "Love".to_string()]);
        assert_eq!(snap.sets.len(), 1);
        assert_eq!(snap.sets[0].points, [1, 0]);
    }

    #[test]
    fn test_snapshot_lists_every_set() {
        let mut m = TennisMatch::new();
        m.replay(0, Player::A, false).unwrap();
        m.record_point(Player::B, false).unwrap();

        let snap = snapshot(&m);
        assert_eq!(snap.sets.len(), m.set_count());
        assert_eq!(snap.sets[0].owner, Some(Player::A));
        assert_eq!(snap.sets[0].points, [6, 0]);
        assert_eq!(snap.sets[1].owner, None);
        assert_eq!(snap.sets[1].points, [0, 1]);
    }
}
