//! Arena core
//!
//! Round-robin tournament simulator for the Iterated Prisoner's Dilemma.
//! This crate is compiled to:
//! - Native (library and tests)
//! - WASM (for the browser front end that charts the results)

mod error;
mod random;
mod strategy;
mod game;
mod schedule;
mod tournament;
mod request;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::ArenaError;
pub use random::{RandomSource, SeededRng};
pub use strategy::{decide, decide_named, Move, StrategyId};
pub use game::{run_match, Decision, MatchResult, RoundResult, ScorePoint};
pub use schedule::{lead_first, match_count, pairing_for_match, round_robin_pairs};
pub use tournament::{run_tournament, PairwiseRecord, Standing, TournamentEngine, TournamentResult};
pub use request::TournamentRequest;

/// Rounds in every match
pub const ROUNDS_PER_MATCH: u32 = 200;

/// Payoff matrix for the Prisoner's Dilemma
/// Returns the score of the player who played `me` against `them`
pub fn payoff(me: Move, them: Move) -> u32 {
    match (me, them) {
        (Move::Cooperate, Move::Cooperate) => 3,
        (Move::Defect, Move::Cooperate) => 5,
        (Move::Cooperate, Move::Defect) => 0,
        (Move::Defect, Move::Defect) => 1,
    }
}

/// Both sides' payoffs for one round
/// Returns (score_a, score_b)
pub fn payoff_pair(a: Move, b: Move) -> (u32, u32) {
    (payoff(a, b), payoff(b, a))
}
