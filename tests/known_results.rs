use river_crossing::core::bank::Bank;
use river_crossing::core::config::Configuration;
use river_crossing::core::entity::Entity;
use river_crossing::rules::laws::NoLaws;
use river_crossing::rules::movegen::{legal_moves, Crossing};
use river_crossing::rules::safety::is_safe;
use river_crossing::search::bfs::{solve, solve_with_stats};
use river_crossing::search::path::replay;
use river_crossing::search::universe::{analyze, distance_to_goal, distances_from};

fn conf(s: &str) -> Configuration {
    let mut banks = [Bank::Near; 4];
    for (b, ch) in banks.iter_mut().zip(s.chars()) {
        *b = if ch == 'F' { Bank::Far } else { Bank::Near };
    }
    Configuration::new(banks)
}

/// Depth-first enumeration of every legal move sequence of exactly `depth` crossings.
fn reaches_goal_within(c: Configuration, depth: usize) -> bool {
    if c.is_goal() {
        return true;
    }
    if depth == 0 {
        return false;
    }
    legal_moves(&c)
        .into_iter()
        .any(|m| reaches_goal_within(m.to, depth - 1))
}

#[test]
fn start_is_solved_in_seven_crossings() {
    let path = solve(Configuration::START).unwrap();
    assert_eq!(path.len(), 7);

    let crossings: Vec<Crossing> = path.iter().map(|m| m.crossing()).collect();
    assert_eq!(
        crossings,
        vec![
            Crossing::Carry(Entity::Goat),
            Crossing::Alone,
            Crossing::Carry(Entity::Wolf),
            Crossing::Carry(Entity::Goat),
            Crossing::Carry(Entity::Cabbage),
            Crossing::Alone,
            Crossing::Carry(Entity::Goat),
        ]
    );

    let trail: Vec<Configuration> = path.iter().map(|m| m.to).collect();
    let expected: Vec<Configuration> = ["NFNF", "NFNN", "FFNF", "FNNN", "FNFF", "FNFN", "FFFF"]
        .into_iter()
        .map(conf)
        .collect();
    assert_eq!(trail, expected);
}

#[test]
fn no_legal_sequence_shorter_than_seven_exists() {
    assert!(!reaches_goal_within(Configuration::START, 6));
    assert!(reaches_goal_within(Configuration::START, 7));
}

#[test]
fn exhaustive_distance_table_agrees_with_search() {
    let dist = distances_from(Configuration::START, &NoLaws);
    assert_eq!(dist.len(), 10);
    assert_eq!(dist[&Configuration::GOAL], 7);

    for (s, d) in [
        ("NNNN", 0),
        ("NFNF", 1),
        ("NFNN", 2),
        ("FFNF", 3),
        ("NFFF", 3),
        ("FNNN", 4),
        ("NNFN", 4),
        ("FNFF", 5),
        ("FNFN", 6),
    ] {
        assert_eq!(dist[&conf(s)], d, "{s}");
    }
}

#[test]
fn goal_is_solved_by_the_empty_path() {
    assert_eq!(solve(Configuration::GOAL), Some(vec![]));
    assert_eq!(distance_to_goal(Configuration::GOAL, &NoLaws), Some(0));
}

#[test]
fn repeated_solves_are_identical() {
    let first = solve(Configuration::START);
    for _ in 0..10 {
        assert_eq!(solve(Configuration::START), first);
    }
    let (a, sa) = solve_with_stats(Configuration::START, &NoLaws);
    let (b, sb) = solve_with_stats(Configuration::START, &NoLaws);
    assert_eq!(a, b);
    assert_eq!(sa, sb);
}

#[test]
fn replaying_the_path_reproduces_every_step() {
    let path = solve(Configuration::START).unwrap();

    let mut current = Configuration::START;
    for m in &path {
        assert_eq!(m.from, current);
        current = m.to;
    }
    assert_eq!(current, Configuration::GOAL);

    assert_eq!(replay(Configuration::START, &path), Ok(Configuration::GOAL));
}

#[test]
fn every_safe_configuration_is_reachable_and_solvable() {
    let report = analyze(&NoLaws);
    assert_eq!(report.total, 16);
    assert_eq!(report.safe, 10);
    assert_eq!(report.reachable, 10);
    assert!(report.dead_ends.is_empty());
    assert_eq!(report.optimal_length, Some(7));

    let reachable = distances_from(Configuration::START, &NoLaws);
    for c in Configuration::all().filter(is_safe) {
        assert!(reachable.contains_key(&c), "{c}");
    }
}

#[test]
fn search_from_any_configuration_returns_a_shortest_path() {
    for c in Configuration::all() {
        let path = solve(c).unwrap_or_else(|| panic!("no path from {c}"));
        let mut current = c;
        for m in &path {
            assert_eq!(m.from, current);
            current = m.to;
        }
        assert!(current.is_goal());
        assert!(!reaches_goal_within(c, path.len().saturating_sub(1)) || path.is_empty());
    }
}
