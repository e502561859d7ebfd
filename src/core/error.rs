//! Error types.
//!
//! - `ConfigError`: recoverable, returned from configuration loading and
//!   validation.
//! - `InvariantViolation`: a logic bug inside the resolver. Fatal in debug and
//!   test builds, logged in release builds (see [`report_violation`]).

use std::path::PathBuf;

use thiserror::Error;

use super::PlayerId;

/// Invalid or unreadable simulation configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("game count must be at least 1")]
    NoGames,

    #[error("max rounds must be at least 1")]
    NoRounds,

    #[error("values per report row must be at least 1")]
    EmptyRow,

    #[error("burn count {burn_count} too large: needs {needed} cards, a hand holds {available}")]
    BurnTooLarge {
        burn_count: usize,
        needed: usize,
        available: usize,
    },

    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Broken internal invariant. Always indicates a bug, never bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("card count mismatch: expected {expected}, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("{player} holds {total} cards but has no card to play after recycling")]
    NoProbe { player: PlayerId, total: usize },
}

/// Surface an invariant violation.
///
/// Panics when debug assertions are enabled; otherwise logs and lets play
/// continue.
pub fn report_violation(violation: &InvariantViolation) {
    if cfg!(debug_assertions) {
        panic!("invariant violated: {violation}");
    }
    tracing::error!(%violation, "invariant violated");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::BurnTooLarge {
            burn_count: 30,
            needed: 32,
            available: 26,
        };
        assert_eq!(
            err.to_string(),
            "burn count 30 too large: needs 32 cards, a hand holds 26"
        );
        assert_eq!(ConfigError::NoGames.to_string(), "game count must be at least 1");
    }

    #[test]
    fn test_parse_error_converts() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_violation_message() {
        let v = InvariantViolation::CardCount { expected: 52, found: 51 };
        assert_eq!(v.to_string(), "card count mismatch: expected 52, found 51");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invariant violated")]
    fn test_report_violation_panics_in_debug() {
        report_violation(&InvariantViolation::NoProbe {
            player: PlayerId::A,
            total: 3,
        });
    }
}
