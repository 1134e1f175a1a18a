//! Round-robin tournament engine
//!
//! Plays every scheduled pair to completion and assembles four artifacts:
//! final totals, a global score history, per-match decision logs and
//! per-match score trajectories.
//!
//! Running totals are a plain value threaded through the schedule. Each
//! match reads a snapshot of the totals so far and the totals are replaced
//! by a credited copy once the match is over.

use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

use crate::game::{run_match, Decision, MatchResult, ScorePoint};
use crate::random::RandomSource;
use crate::schedule::{lead_first, round_robin_pairs};
use crate::strategy::StrategyId;

/// One pair's chart data: scores at each round boundary plus final scores
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseRecord {
    pub strategy_a: StrategyId,
    pub strategy_b: StrategyId,
    pub scores: Vec<ScorePoint>,
    pub final_a: u32,
    pub final_b: u32,
}

/// A row of the totals table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub strategy: StrategyId,
    pub total: u32,
}

/// Everything a tournament run produces
///
/// `totals` and every entry of `history` are aligned with `strategies`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResult {
    /// Distinct participating strategies, in the caller's roster order.
    pub strategies: Vec<StrategyId>,
    pub totals: Vec<u32>,
    /// One snapshot per round of every match, in schedule order.
    pub history: Vec<Vec<u32>>,
    pub decisions: Vec<Vec<Decision>>,
    pub pairwise: Vec<PairwiseRecord>,
}

impl TournamentResult {
    fn slot(&self, strategy: StrategyId) -> Option<usize> {
        self.strategies.iter().position(|s| *s == strategy)
    }

    /// Final total of a strategy, `None` if it did not take part.
    pub fn total(&self, strategy: StrategyId) -> Option<u32> {
        self.slot(strategy).map(|i| self.totals[i])
    }

    /// Trend line of one strategy across the whole schedule.
    ///
    /// Zero at every point for a strategy that did not take part.
    pub fn series(&self, strategy: StrategyId) -> Vec<u32> {
        match self.slot(strategy) {
            Some(i) => self.history.iter().map(|snapshot| snapshot[i]).collect(),
            None => vec![0; self.history.len()],
        }
    }

    /// Totals table in roster order.
    pub fn table(&self) -> Vec<Standing> {
        self.strategies
            .iter()
            .zip(&self.totals)
            .map(|(&strategy, &total)| Standing { strategy, total })
            .collect()
    }

    /// Totals table sorted by score, highest first. Ties keep roster order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut table = self.table();
        table.sort_by(|a, b| b.total.cmp(&a.total));
        table
    }

    pub fn winner(&self) -> Option<StrategyId> {
        self.standings().first().map(|s| s.strategy)
    }

    pub fn match_count(&self) -> usize {
        self.pairwise.len()
    }
}

/// Runs tournaments with an injected randomness source
#[derive(Debug)]
pub struct TournamentEngine<R = ThreadRng> {
    rng: R,
}

impl TournamentEngine<ThreadRng> {
    /// Engine drawing the Random strategy's coin from thread-local entropy.
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for TournamentEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> TournamentEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Play the full round-robin for `roster`.
    pub fn run(&mut self, roster: &[StrategyId]) -> TournamentResult {
        run_tournament(roster, &mut self.rng)
    }
}

/// Play every unordered pair of `roster` (self-pairs included) and collect
/// the results.
///
/// Duplicate entries are distinct schedule slots and are scored as such.
pub fn run_tournament<R: RandomSource + ?Sized>(
    roster: &[StrategyId],
    rng: &mut R,
) -> TournamentResult {
    let strategies = distinct(roster);
    let ordered = lead_first(roster, StrategyId::TitForTat);
    let slots: Vec<usize> = ordered
        .iter()
        .map(|s| strategies.iter().position(|t| t == s).unwrap_or_default())
        .collect();

    let pairs = round_robin_pairs(ordered.len());
    let mut totals = vec![0u32; strategies.len()];
    let mut history = Vec::with_capacity(pairs.len() * crate::ROUNDS_PER_MATCH as usize);
    let mut decisions = Vec::with_capacity(pairs.len());
    let mut pairwise = Vec::with_capacity(pairs.len());

    for (i, j) in pairs {
        let result = run_match(ordered[i], ordered[j], &mut *rng);
        let credit = Credit {
            slot_a: slots[i],
            slot_b: slots[j],
            self_match: i == j,
        };

        log::debug!(
            "{} vs {}: {}-{}",
            result.strategy_a,
            result.strategy_b,
            result.total_score_a,
            result.total_score_b
        );

        history.extend(snapshots(&totals, &credit, &result));
        totals = credited(totals, &credit, result.total_score_a, result.total_score_b);
        decisions.push(result.decision_log());
        pairwise.push(PairwiseRecord {
            strategy_a: result.strategy_a,
            strategy_b: result.strategy_b,
            scores: result.trajectory(),
            final_a: result.total_score_a,
            final_b: result.total_score_b,
        });
    }

    let result = TournamentResult {
        strategies,
        totals,
        history,
        decisions,
        pairwise,
    };
    if let Some(winner) = result.winner() {
        log::info!(
            "tournament finished: {} matches, winner {} with {}",
            result.match_count(),
            winner,
            result.total(winner).unwrap_or_default()
        );
    }
    result
}

/// Where a match's scores are credited
struct Credit {
    slot_a: usize,
    slot_b: usize,
    /// A slot playing itself is one participant, credited once.
    self_match: bool,
}

fn credited(mut totals: Vec<u32>, credit: &Credit, score_a: u32, score_b: u32) -> Vec<u32> {
    totals[credit.slot_a] += score_a;
    if !credit.self_match {
        totals[credit.slot_b] += score_b;
    }
    totals
}

/// Totals as they stand after each round of `result`: everything settled
/// before the match plus the match's progress so far.
fn snapshots<'a>(
    settled: &'a [u32],
    credit: &'a Credit,
    result: &'a MatchResult,
) -> impl Iterator<Item = Vec<u32>> + 'a {
    result
        .rounds
        .iter()
        .map(move |r| credited(settled.to_vec(), credit, r.cumulative_a, r.cumulative_b))
}

/// First occurrence of each strategy, roster order preserved.
fn distinct(roster: &[StrategyId]) -> Vec<StrategyId> {
    let mut seen = Vec::with_capacity(roster.len());
    for s in roster {
        if !seen.contains(s) {
            seen.push(*s);
        }
    }
    seen
}
