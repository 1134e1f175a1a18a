//! WASM bindings for the browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::schedule::match_count;
use crate::{payoff, Move, StrategyId, TournamentRequest};

/// Run a tournament
///
/// # Arguments
/// * `request_json` - JSON `TournamentRequest`, e.g. `{"roster": ["Tit for Tat", "Random"]}`
///
/// # Returns
/// Serialized `TournamentResult`
#[wasm_bindgen]
pub fn run_tournament(request_json: &str) -> Result<JsValue, JsError> {
    let request = TournamentRequest::from_json(request_json)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let result = request
        .execute()
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: &'static str,
    name: &'static str,
    description: &'static str,
}

/// Get all selectable strategies
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = StrategyId::ALL
        .iter()
        .map(|s| StrategyInfo {
            id: s.id(),
            name: s.display_name(),
            description: s.description(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct PayoffEntry {
    me: Move,
    them: Move,
    score: u32,
}

/// Get the payoff matrix as `{me, them, score}` rows
#[wasm_bindgen]
pub fn get_payoff_matrix() -> Result<JsValue, JsError> {
    let moves = [Move::Cooperate, Move::Defect];
    let rows: Vec<PayoffEntry> = moves
        .iter()
        .flat_map(|&me| moves.iter().map(move |&them| PayoffEntry { me, them, score: payoff(me, them) }))
        .collect();

    serde_wasm_bindgen::to_value(&rows)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Number of matches a roster of `roster_size` strategies plays
#[wasm_bindgen]
pub fn get_match_count(roster_size: u32) -> u32 {
    match_count(roster_size as usize) as u32
}
