//! Top-level match state machine: routes points to the active set,
//! advances through the set sequence and derives the match verdict.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::scoring::points::{Player, ScoreLabel};
use crate::scoring::set::TennisSet;

/// Concluded sets required before the match verdict is evaluated.
pub const MIN_SETS_FOR_VERDICT: usize = 5;

/// Construction-time match parameters.
///
/// The tie-break track is only reachable in the last set
/// (`max_sets - 1`) and only when both players hold exactly
/// `tie_break_trigger` concluded sets each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRules {
    pub max_sets: usize,
    pub tie_break_trigger: usize,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            max_sets: 13,
            tie_break_trigger: 6,
        }
    }
}

/// A two-player match over an ordered, append-only sequence of sets.
///
/// Exactly one set is active at a time; `sets.len() == current_set + 1`
/// after every operation. The verdict, once assigned, is stable: further
/// points still score sets but never change the owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TennisMatch {
    sets: Vec<TennisSet>,
    current_set: usize,
    owner: Option<Player>,
    rules: MatchRules,
}

impl Default for TennisMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl TennisMatch {
    /// Fresh match under the default rules: one empty set at index 0.
    pub fn new() -> Self {
        Self::with_rules(MatchRules::default())
    }

    pub fn with_rules(rules: MatchRules) -> Self {
        Self {
            sets: vec![TennisSet::new()],
            current_set: 0,
            owner: None,
            rules,
        }
    }

    /// Record one point for `player`; the sole mutator.
    ///
    /// Tie-break scoring is used only when requested, the active set is
    /// the last one the rules allow, and both players have concluded
    /// exactly `tie_break_trigger` sets each. Otherwise the point falls
    /// back to normal scoring; the fallback is deliberate, not an error.
    pub fn record_point(&mut self, player: Player, tie_break_requested: bool) -> Result<()> {
        let tie_break = tie_break_requested
            && self.current_set + 1 == self.rules.max_sets
            && self.sets_won(Player::A) == self.rules.tie_break_trigger
            && self.sets_won(Player::B) == self.rules.tie_break_trigger;

        let set = &mut self.sets[self.current_set];
        if tie_break {
            set.record_tie_break_point(player)?;
        } else {
            set.record_normal_point(player)?;
        }

        if self.sets[self.current_set].has_concluded() {
            self.sets.push(TennisSet::new());
            self.current_set += 1;
            log::debug!(
                "advanced to set {} ({}-{} in sets)",
                self.current_set,
                self.sets_won(Player::A),
                self.sets_won(Player::B)
            );
        }

        if self.owner.is_none() && self.current_set >= MIN_SETS_FOR_VERDICT {
            let won_a = self.sets_won(Player::A);
            let won_b = self.sets_won(Player::B);
            // Equal counts leave the match open.
            if won_a != won_b {
                let winner = if won_a > won_b { Player::A } else { Player::B };
                self.owner = Some(winner);
                log::debug!("match decided, winner {:?} ({}-{})", winner, won_a, won_b);
            }
        }
        Ok(())
    }

    /// Drive every set from the active one through `up_to_set` to be won
    /// by `winner`, purely through repeated [`record_point`] calls.
    ///
    /// Test/setup helper: it cannot reach any state normal play cannot.
    ///
    /// [`record_point`]: TennisMatch::record_point
    pub fn replay(&mut self, up_to_set: usize, winner: Player, tie_break: bool) -> Result<()> {
        while self.current_set <= up_to_set {
            self.record_point(winner, tie_break)?;
        }
        Ok(())
    }

    /// Index of the active set.
    pub fn current_set(&self) -> usize {
        self.current_set
    }

    pub fn rules(&self) -> MatchRules {
        self.rules
    }

    /// Final match owner; `Some` once decided, then stable.
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn is_decided(&self) -> bool {
        self.owner.is_some()
    }

    /// Running leader on concluded sets; `None` when tied.
    ///
    /// A non-final signal only: the match is decided solely by
    /// [`owner`](TennisMatch::owner).
    pub fn provisional_owner(&self) -> Option<Player> {
        let won_a = self.sets_won(Player::A);
        let won_b = self.sets_won(Player::B);
        match won_a.cmp(&won_b) {
            std::cmp::Ordering::Greater => Some(Player::A),
            std::cmp::Ordering::Less => Some(Player::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Concluded sets owned by `player`.
    pub fn sets_won(&self, player: Player) -> usize {
        self.sets
            .iter()
            .filter(|set| set.owner() == Some(player))
            .count()
    }

    /// Number of populated sets (concluded plus the active one).
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// All populated sets in play order; the last one is active.
    pub fn sets(&self) -> &[TennisSet] {
        &self.sets
    }

    /// Owner of set `index`, if that set has concluded.
    pub fn set_owner(&self, index: usize) -> Result<Option<Player>> {
        self.set_at(index).map(TennisSet::owner)
    }

    /// Raw points for `player` in set `index`.
    pub fn points_in_set(&self, player: Player, index: usize) -> Result<u32> {
        self.set_at(index).map(|set| set.points(player))
    }

    /// Display label for `player` in the active set.
    pub fn score_label(&self, player: Player) -> ScoreLabel {
        self.sets[self.current_set].score_label(player)
    }

    fn set_at(&self, index: usize) -> Result<&TennisSet> {
        self.sets.get(index).ok_or(ScoreError::SetIndexOutOfRange {
            index,
            len: self.sets.len(),
        })
    }
}
