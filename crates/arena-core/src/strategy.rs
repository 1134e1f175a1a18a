//! Strategy definitions and execution

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;
use crate::random::RandomSource;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

/// Strategies a tournament roster can be built from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyId {
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Always cooperate, never defect.
    AlwaysCooperate,
    /// Always defect, never cooperate.
    AlwaysDefect,
    /// Fair coin each round.
    Random,
}

impl StrategyId {
    /// Every strategy, in the order the roster toggles are shown.
    pub const ALL: [StrategyId; 4] = [
        StrategyId::TitForTat,
        StrategyId::AlwaysCooperate,
        StrategyId::AlwaysDefect,
        StrategyId::Random,
    ];

    /// Identifier used in JSON and in `FromStr`.
    pub fn id(self) -> &'static str {
        match self {
            StrategyId::TitForTat => "TitForTat",
            StrategyId::AlwaysCooperate => "AlwaysCooperate",
            StrategyId::AlwaysDefect => "AlwaysDefect",
            StrategyId::Random => "Random",
        }
    }

    /// Human-readable name for tables and chart legends.
    pub fn display_name(self) -> &'static str {
        match self {
            StrategyId::TitForTat => "Tit for Tat",
            StrategyId::AlwaysCooperate => "Always Cooperate",
            StrategyId::AlwaysDefect => "Always Defect",
            StrategyId::Random => "Random",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrategyId::TitForTat => "Starts with cooperation, then copies the opponent's last move.",
            StrategyId::AlwaysCooperate => "Never defects. Always cooperates.",
            StrategyId::AlwaysDefect => "Never cooperates. Always defects.",
            StrategyId::Random => "Randomly cooperates or defects each round.",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for StrategyId {
    type Err = ArenaError;

    /// Accepts the identifier (`TitForTat`) or the display name (`Tit for Tat`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        StrategyId::ALL
            .into_iter()
            .find(|id| id.id() == s || id.display_name() == s)
            .ok_or_else(|| ArenaError::UnknownStrategy(s.to_string()))
    }
}

/// Decide one move
///
/// # Arguments
/// * `strategy` - The strategy to execute
/// * `last_opponent_move` - Opponent's previous move, `None` in round 0
/// * `rng` - Coin used by the Random strategy only
pub fn decide<R: RandomSource + ?Sized>(
    strategy: StrategyId,
    last_opponent_move: Option<Move>,
    rng: &mut R,
) -> Move {
    match strategy {
        StrategyId::TitForTat => last_opponent_move.unwrap_or(Move::Cooperate),
        StrategyId::AlwaysCooperate => Move::Cooperate,
        StrategyId::AlwaysDefect => Move::Defect,
        StrategyId::Random => execute_random(rng),
    }
}

/// Decide one move for a strategy given by name.
///
/// Names outside the roster cooperate.
pub fn decide_named<R: RandomSource + ?Sized>(
    name: &str,
    last_opponent_move: Option<Move>,
    rng: &mut R,
) -> Move {
    match name.parse::<StrategyId>() {
        Ok(strategy) => decide(strategy, last_opponent_move, rng),
        Err(_) => {
            log::trace!("unknown strategy {:?}, cooperating", name);
            Move::Cooperate
        }
    }
}

/// Random: 50/50 per call
fn execute_random<R: RandomSource + ?Sized>(rng: &mut R) -> Move {
    if rng.coin_flip() {
        Move::Cooperate
    } else {
        Move::Defect
    }
}
