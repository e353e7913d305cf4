//! Exhaustive analysis of the whole configuration space.
//!
//! There are only 16 configurations, so everything here simply enumerates them. This is used
//! to cross-check the BFS answer and to report dead ends (reachable configurations from which
//! the goal can no longer be reached).

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::config::Configuration;
use crate::rules::laws::LawsLike;
use crate::rules::movegen::legal_moves_under;
use crate::rules::safety::is_safe;
use crate::search::bfs::solve_under;

/// Crossing distance from `start` to every configuration reachable from it.
pub fn distances_from<L: LawsLike>(
    start: Configuration,
    laws: &L,
) -> FxHashMap<Configuration, usize> {
    let mut dist: FxHashMap<Configuration, usize> = FxHashMap::default();
    let mut q: VecDeque<Configuration> = VecDeque::new();

    dist.insert(start, 0);
    q.push_back(start);

    while let Some(c) = q.pop_front() {
        let d = dist[&c];
        for mv in legal_moves_under(&c, laws) {
            if dist.contains_key(&mv.to) {
                continue;
            }
            dist.insert(mv.to, d + 1);
            q.push_back(mv.to);
        }
    }

    dist
}

#[inline]
pub fn distance_to_goal<L: LawsLike>(c: Configuration, laws: &L) -> Option<usize> {
    solve_under(c, laws).map(|p| p.len())
}

/// Configurations reachable from `start` from which the goal is unreachable, in packed order.
pub fn reachable_dead_ends<L: LawsLike>(start: Configuration, laws: &L) -> Vec<Configuration> {
    let reachable = distances_from(start, laws);
    let mut out: Vec<Configuration> = reachable
        .into_keys()
        .filter(|&c| distance_to_goal(c, laws).is_none())
        .collect();
    out.sort_by_key(Configuration::pack);
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniverseReport {
    pub total: usize,
    pub safe: usize,
    /// Reachable from [`Configuration::START`] (the start itself included).
    pub reachable: usize,
    pub dead_ends: Vec<Configuration>,
    /// Length of a shortest START -> GOAL path, if any.
    pub optimal_length: Option<usize>,
}

pub fn analyze<L: LawsLike>(laws: &L) -> UniverseReport {
    let reachable = distances_from(Configuration::START, laws);
    UniverseReport {
        total: Configuration::all().count(),
        safe: Configuration::all().filter(is_safe).count(),
        reachable: reachable.len(),
        dead_ends: reachable_dead_ends(Configuration::START, laws),
        optimal_length: reachable.get(&Configuration::GOAL).copied(),
    }
}
