//! Breadth-first shortest-path search.
//!
//! The graph is implicit: nodes are [`Configuration`]s and edges are the moves returned by
//! move generation. With only 16 nodes the search always finishes immediately, so there are
//! no budgets or depth limits; the visited set alone prevents revisits.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::config::Configuration;
use crate::rules::laws::{LawsLike, NoLaws};
use crate::rules::movegen::{legal_moves_under, Move};

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Configurations popped from the frontier.
    pub expanded: usize,
    /// Configurations pushed to the frontier, including the start.
    pub enqueued: usize,
    pub max_frontier: usize,
}

/// Shortest move sequence from `start` to [`Configuration::GOAL`].
///
/// `Some(vec![])` means `start` already is the goal; `None` means the goal is unreachable.
pub fn solve(start: Configuration) -> Option<Vec<Move>> {
    solve_under(start, &NoLaws)
}

pub fn solve_under<L: LawsLike>(start: Configuration, laws: &L) -> Option<Vec<Move>> {
    solve_with_stats(start, laws).0
}

pub fn solve_with_stats<L: LawsLike>(
    start: Configuration,
    laws: &L,
) -> (Option<Vec<Move>>, SearchStats) {
    let mut stats = SearchStats::default();

    let mut frontier: VecDeque<(Configuration, Vec<Move>)> = VecDeque::new();
    let mut visited: FxHashSet<Configuration> = FxHashSet::default();

    frontier.push_back((start, Vec::new()));
    visited.insert(start);
    stats.enqueued = 1;
    stats.max_frontier = 1;

    while let Some((current, path)) = frontier.pop_front() {
        stats.expanded += 1;

        if current.is_goal() {
            debug!(
                start = %start,
                length = path.len(),
                expanded = stats.expanded,
                enqueued = stats.enqueued,
                "solution found"
            );
            return (Some(path), stats);
        }

        for mv in legal_moves_under(&current, laws) {
            if !visited.insert(mv.to) {
                continue;
            }
            let mut next = Vec::with_capacity(path.len() + 1);
            next.extend_from_slice(&path);
            next.push(mv);
            frontier.push_back((mv.to, next));
            stats.enqueued += 1;
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    debug!(
        start = %start,
        expanded = stats.expanded,
        "frontier exhausted without reaching the goal"
    );
    (None, stats)
}
