//! Tournament requests from the presentation layer
//!
//! The round count and payoff matrix are fixed; a request only chooses
//! the roster and, optionally, a seed for a reproducible Random strategy.

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;
use crate::random::SeededRng;
use crate::strategy::StrategyId;
use crate::tournament::{TournamentEngine, TournamentResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRequest {
    /// Strategy identifiers or display names. Defaults to every strategy.
    #[serde(default = "default_roster")]
    pub roster: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_roster() -> Vec<String> {
    StrategyId::ALL.iter().map(|s| s.id().to_string()).collect()
}

impl Default for TournamentRequest {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            seed: None,
        }
    }
}

impl TournamentRequest {
    pub fn from_json(json: &str) -> Result<Self, ArenaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse every roster entry, failing on the first unknown name.
    pub fn resolve(&self) -> Result<Vec<StrategyId>, ArenaError> {
        self.roster.iter().map(|name| name.parse()).collect()
    }

    /// Resolve the roster and run the tournament.
    pub fn execute(&self) -> Result<TournamentResult, ArenaError> {
        let roster = self.resolve()?;
        let result = match self.seed {
            Some(seed) => TournamentEngine::with_rng(SeededRng::new(seed)).run(&roster),
            None => TournamentEngine::new().run(&roster),
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_full_roster() {
        let request = TournamentRequest::from_json("{}").unwrap();
        assert_eq!(request, TournamentRequest::default());
        assert_eq!(request.resolve().unwrap(), StrategyId::ALL.to_vec());
    }

    #[test]
    fn test_display_names_accepted() {
        let request =
            TournamentRequest::from_json(r#"{"roster": ["Always Cooperate", "AlwaysDefect"]}"#)
                .unwrap();
        assert_eq!(
            request.resolve().unwrap(),
            vec![StrategyId::AlwaysCooperate, StrategyId::AlwaysDefect]
        );

        let result = request.execute().unwrap();
        assert_eq!(result.total(StrategyId::AlwaysCooperate), Some(600));
        assert_eq!(result.total(StrategyId::AlwaysDefect), Some(1200));
    }

    #[test]
    fn test_unknown_name_rejected() {
        let request = TournamentRequest::from_json(r#"{"roster": ["Tit for Tat", "Grudger"]}"#)
            .unwrap();
        assert_eq!(
            request.execute(),
            Err(ArenaError::UnknownStrategy("Grudger".to_string()))
        );
    }

    #[test]
    fn test_empty_roster_is_not_an_error() {
        let request = TournamentRequest::from_json(r#"{"roster": []}"#).unwrap();
        let result = request.execute().unwrap();
        assert_eq!(result.match_count(), 0);
        assert!(result.history.is_empty());
    }

    #[test]
    fn test_seeded_request_is_reproducible() {
        let request = TournamentRequest::from_json(r#"{"roster": ["Random", "TitForTat"], "seed": 7}"#)
            .unwrap();
        assert_eq!(request.execute().unwrap(), request.execute().unwrap());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            TournamentRequest::from_json(r#"{"roster": 3}"#),
            Err(ArenaError::InvalidRequest(_))
        ));
    }
}
