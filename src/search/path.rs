use thiserror::Error;

use crate::core::config::Configuration;
use crate::rules::movegen::{is_well_formed, Move};
use crate::rules::safety::is_safe;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("step {step} starts at {found}, but the previous step ended at {expected}")]
    Discontinuous {
        step: usize,
        expected: Configuration,
        found: Configuration,
    },
    #[error("step {step} ({label}) is not a legal crossing")]
    IllegalMove { step: usize, label: String },
}

/// Walk `moves` from `start` and return the configuration they end at.
///
/// Every move must begin where the previous one ended, be structurally valid and land on
/// a safe configuration.
pub fn replay(start: Configuration, moves: &[Move]) -> Result<Configuration, ReplayError> {
    let mut current = start;
    for (step, mv) in moves.iter().enumerate() {
        if mv.from != current {
            return Err(ReplayError::Discontinuous {
                step,
                expected: current,
                found: mv.from,
            });
        }
        if !is_well_formed(mv) || !is_safe(&mv.to) {
            return Err(ReplayError::IllegalMove {
                step,
                label: mv.label.to_string(),
            });
        }
        current = mv.to;
    }
    Ok(current)
}
