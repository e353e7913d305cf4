//! Re-planning from an arbitrary configuration.

use crate::core::config::Configuration;
use crate::rules::laws::{LawsLike, NoLaws};
use crate::rules::movegen::Move;
use crate::search::bfs::solve_under;

/// Advice for the next crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// First move of a shortest path to the goal.
    Move(Move),
    /// Nothing left to do: the configuration is the goal.
    AlreadySolved,
    /// The goal cannot be reached from here.
    NoPath,
}

pub fn hint(current: Configuration) -> Hint {
    hint_under(current, &NoLaws)
}

pub fn hint_under<L: LawsLike>(current: Configuration, laws: &L) -> Hint {
    match solve_under(current, laws) {
        None => Hint::NoPath,
        Some(path) => match path.first() {
            Some(&mv) => Hint::Move(mv),
            None => Hint::AlreadySolved,
        },
    }
}
