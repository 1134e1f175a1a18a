//! Match execution engine

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::strategy::{decide, Move, StrategyId};
use crate::{payoff, ROUNDS_PER_MATCH};

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: u32,
    pub score_b: u32,
    pub cumulative_a: u32,
    pub cumulative_b: u32,
}

/// One line of a match's decision log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub round: u32,
    pub strategy_a: StrategyId,
    pub move_a: Move,
    pub strategy_b: StrategyId,
    pub move_b: Move,
}

/// Per-match scores at a round boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub round: u32,
    pub score_a: u32,
    pub score_b: u32,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub strategy_a: StrategyId,
    pub strategy_b: StrategyId,
    pub rounds: Vec<RoundResult>,
    pub total_score_a: u32,
    pub total_score_b: u32,
}

impl MatchResult {
    /// Round-by-round moves, tagged with both participants.
    pub fn decision_log(&self) -> Vec<Decision> {
        self.rounds
            .iter()
            .map(|r| Decision {
                round: r.round,
                strategy_a: self.strategy_a,
                move_a: r.move_a,
                strategy_b: self.strategy_b,
                move_b: r.move_b,
            })
            .collect()
    }

    /// Cumulative per-match scores after each round.
    pub fn trajectory(&self) -> Vec<ScorePoint> {
        self.rounds
            .iter()
            .map(|r| ScorePoint {
                round: r.round,
                score_a: r.cumulative_a,
                score_b: r.cumulative_b,
            })
            .collect()
    }
}

/// Run a complete match between two strategies
///
/// # Arguments
/// * `strategy_a` - First player's strategy
/// * `strategy_b` - Second player's strategy
/// * `rng` - Coin for Random players, shared by both sides
///
/// # Returns
/// Complete match result with round-by-round details
pub fn run_match<R: RandomSource + ?Sized>(
    strategy_a: StrategyId,
    strategy_b: StrategyId,
    rng: &mut R,
) -> MatchResult {
    let mut rounds: Vec<RoundResult> = Vec::with_capacity(ROUNDS_PER_MATCH as usize);
    let mut last_a: Option<Move> = None;
    let mut last_b: Option<Move> = None;
    let mut total_a = 0u32;
    let mut total_b = 0u32;

    for round in 0..ROUNDS_PER_MATCH {
        // Each side only sees the other's previous move
        let move_a = decide(strategy_a, last_b, &mut *rng);
        let move_b = decide(strategy_b, last_a, &mut *rng);

        let score_a = payoff(move_a, move_b);
        let score_b = payoff(move_b, move_a);
        total_a += score_a;
        total_b += score_b;

        rounds.push(RoundResult {
            round,
            move_a,
            move_b,
            score_a,
            score_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });

        last_a = Some(move_a);
        last_b = Some(move_b);
    }

    MatchResult {
        strategy_a,
        strategy_b,
        rounds,
        total_score_a: total_a,
        total_score_b: total_b,
    }
}
