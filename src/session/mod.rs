//! Game sessions: the state a front end keeps between calls into the solver.
//!
//! A [`Session`] is an ordinary value owned by the caller. It holds the current configuration
//! and the history of visited configurations, and re-checks every move it is asked to apply,
//! since a caller may build moves without going through move generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::Configuration;
use crate::rules::movegen::{apply_crossing, is_well_formed, legal_moves, Crossing, Move};
use crate::rules::safety::{hazard, Hazard};
use crate::search::hint::{hint, Hint};

/// How the puzzle is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The solver plays its own solution back; manual moves are rejected.
    #[default]
    Auto,
    /// The player picks every crossing.
    Manual,
    /// Like manual, with hints available.
    Assisted,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Mode> {
        match s {
            "auto" => Some(Mode::Auto),
            "manual" => Some(Mode::Manual),
            "assisted" => Some(Mode::Assisted),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Manual => "manual",
            Mode::Assisted => "assisted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{action} is not available in {} mode", .mode.name())]
    WrongMode { mode: Mode, action: &'static str },
    #[error("move starts at {from}, but the puzzle is at {current}")]
    StaleMove {
        from: Configuration,
        current: Configuration,
    },
    #[error("the boat cannot make the crossing: {label}")]
    Impossible { label: &'static str },
    #[error("malformed move: {label}")]
    Malformed { label: &'static str },
    #[error("unsafe move: {hazard}")]
    Unsafe { hazard: Hazard },
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Solved,
}

#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    current: Configuration,
    history: Vec<Configuration>,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            current: Configuration::START,
            history: vec![Configuration::START],
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn current(&self) -> Configuration {
        self.current
    }

    /// Every configuration visited so far, starting with [`Configuration::START`].
    #[inline]
    pub fn history(&self) -> &[Configuration] {
        &self.history
    }

    #[inline]
    pub fn moves_made(&self) -> usize {
        self.history.len() - 1
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.current.is_goal()
    }

    /// Switching modes always starts over.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.current = Configuration::START;
        self.history.clear();
        self.history.push(Configuration::START);
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.current)
    }

    /// Apply a player-chosen move. On error the session is left untouched.
    pub fn apply(&mut self, mv: &Move) -> Result<Outcome, SessionError> {
        if self.mode == Mode::Auto {
            return Err(SessionError::WrongMode {
                mode: self.mode,
                action: "choosing a move",
            });
        }
        if mv.from != self.current {
            return Err(SessionError::StaleMove {
                from: mv.from,
                current: self.current,
            });
        }
        if !is_well_formed(mv) {
            return Err(SessionError::Malformed { label: mv.label });
        }
        if let Some(h) = hazard(&mv.to) {
            debug!(label = mv.label, hazard = %h, "rejected unsafe move");
            return Err(SessionError::Unsafe { hazard: h });
        }

        self.current = mv.to;
        self.history.push(mv.to);

        if self.is_solved() {
            info!(moves = self.moves_made(), "puzzle solved");
            Ok(Outcome::Solved)
        } else {
            Ok(Outcome::Continue)
        }
    }

    /// Build the move for `crossing` from the current configuration and apply it.
    pub fn apply_crossing(&mut self, crossing: Crossing) -> Result<Outcome, SessionError> {
        let mv = apply_crossing(&self.current, crossing).ok_or(SessionError::Impossible {
            label: crossing.label(),
        })?;
        self.apply(&mv)
    }

    /// Step back one move. Returns `false` if already at the start.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        self.current = *self.history.last().unwrap_or(&Configuration::START);
        true
    }

    /// Re-plan from the current configuration. Only offered in assisted mode.
    pub fn hint(&self) -> Result<Hint, SessionError> {
        if self.mode != Mode::Assisted {
            return Err(SessionError::WrongMode {
                mode: self.mode,
                action: "asking for a hint",
            });
        }
        Ok(hint(self.current))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
