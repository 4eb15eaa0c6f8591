use crate::collections::Growth;
use crate::errors::PathPlannerError;

use serde::{Deserialize, Serialize};


/// What happens when a cheaper route to an already open node is found
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relaxation {
    /// Rewrite both the g-score and the predecessor, then re-sift the node in the open set
    #[default]
    UpdateScore,
    /// Only relink the predecessor, the g-score keeps its first recorded value
    /// Reported costs can then overstate the returned path, and the expansion order follows the stale scores
    PredecessorOnly,
}

/// Tuning of a search engine instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub search_limit: usize, // max expansions before giving up, 0 = unlimited
    pub relaxation: Relaxation,
    pub heap_capacity: usize, // initial capacity of the open set
    pub heap_growth: Growth,
    pub auto_clear: bool, // drop leftover state at the start of every search
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_limit: 0,
            relaxation: Relaxation::default(),
            heap_capacity: 10,
            heap_growth: Growth::default(),
            auto_clear: false,
        }
    }
}

impl SearchConfig {

    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }

    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    pub fn with_auto_clear(mut self, auto_clear: bool) -> Self {
        self.auto_clear = auto_clear;
        self
    }

    pub fn validate(&self) -> Result<(), PathPlannerError> {
        if self.heap_capacity == 0 {
            return Err(PathPlannerError::InvalidConfig("heap_capacity must be greater than zero".to_string()));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.relaxation, Relaxation::UpdateScore);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "search_limit": 250,
            "relaxation": "predecessor_only",
            "heap_capacity": 64,
            "heap_growth": { "fixed": 16 },
            "auto_clear": true
        }"#;
        let config: SearchConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.search_limit, 250);
        assert_eq!(config.relaxation, Relaxation::PredecessorOnly);
        assert_eq!(config.heap_capacity, 64);
        assert_eq!(config.heap_growth, Growth::Fixed(NonZeroUsize::new(16).unwrap()));
        assert!(config.auto_clear);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(serde_json::from_str::<SearchConfig>(r#"{ "limit": 3 }"#).is_err());
        assert!(serde_json::from_str::<SearchConfig>(r#"{ "heap_growth": { "fixed": 0 } }"#).is_err());

        let config: SearchConfig = serde_json::from_str(r#"{ "heap_capacity": 0 }"#).unwrap();
        assert!(matches!(config.validate(), Err(PathPlannerError::InvalidConfig(_))));
    }
}
