use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::Configuration;
use crate::core::entity::Entity;
use crate::rules::laws::LawsLike;
use crate::rules::safety::is_safe;

/// What the ferryman takes across, independent of where the boat currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossing {
    Alone,
    Carry(Entity),
}

impl Crossing {
    /// Generation order: solo crossing, then each cargo item in canonical order.
    pub const ALL: [Crossing; 4] = [
        Crossing::Alone,
        Crossing::Carry(Entity::Wolf),
        Crossing::Carry(Entity::Goat),
        Crossing::Carry(Entity::Cabbage),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Crossing::Alone => "Ferryman crosses alone",
            Crossing::Carry(Entity::Wolf) => "Ferry the wolf",
            Crossing::Carry(Entity::Goat) => "Ferry the goat",
            Crossing::Carry(Entity::Cabbage) => "Ferry the cabbage",
            Crossing::Carry(Entity::Ferryman) => "Ferryman crosses alone",
        }
    }

    #[inline]
    pub fn cargo(self) -> Option<Entity> {
        match self {
            Crossing::Alone => None,
            Crossing::Carry(e) => Some(e),
        }
    }
}

/// A single boat crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub label: &'static str,
    pub from: Configuration,
    pub to: Configuration,
    /// Cargo riding with the ferryman, if any.
    pub cargo: Option<Entity>,
}

impl Move {
    pub fn crossing(&self) -> Crossing {
        match self.cargo {
            None => Crossing::Alone,
            Some(e) => Crossing::Carry(e),
        }
    }

    /// Carried entities as a set: empty or exactly one item.
    pub fn carried(&self) -> &[Entity] {
        match &self.cargo {
            None => &[],
            Some(e) => std::slice::from_ref(e),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.label, self.to)
    }
}

/// Build the move for `crossing` from `from`, if the boat can physically make it.
///
/// The cargo must stand on the ferryman's bank. Safety is *not* checked here.
pub fn apply_crossing(from: &Configuration, crossing: Crossing) -> Option<Move> {
    let ferryman = from.ferryman();
    let mut to = from.with_flipped(Entity::Ferryman);

    if let Some(cargo) = crossing.cargo() {
        if !cargo.is_cargo() || from.bank_of(cargo) != ferryman {
            return None;
        }
        to = to.with_flipped(cargo);
    }

    Some(Move {
        label: crossing.label(),
        from: *from,
        to,
        cargo: crossing.cargo(),
    })
}

/// All physically possible crossings from `c`, in generation order, before safety filtering.
pub fn candidate_moves(c: &Configuration) -> Vec<Move> {
    Crossing::ALL
        .into_iter()
        .filter_map(|x| apply_crossing(c, x))
        .collect()
}

/// Candidates from `c` whose result is safe. Always between 1 and 4 entries.
pub fn legal_moves(c: &Configuration) -> Vec<Move> {
    let mut out = candidate_moves(c);
    out.retain(|m| is_safe(&m.to));
    out
}

/// [`legal_moves`] with an additional laws filter.
pub fn legal_moves_under<L: LawsLike>(c: &Configuration, laws: &L) -> Vec<Move> {
    let mut out = legal_moves(c);
    out.retain(|m| laws.allow_move(c, m));
    out
}

/// Structural check of a move, regardless of where it came from.
///
/// The ferryman must switch banks, and exactly the declared cargo (if any) goes with him,
/// starting from his bank. Everything else stays put.
pub fn is_well_formed(m: &Move) -> bool {
    let ferryman = Entity::Ferryman;
    if m.to.bank_of(ferryman) == m.from.bank_of(ferryman) {
        return false;
    }

    if let Some(cargo) = m.cargo {
        if !cargo.is_cargo() || m.from.bank_of(cargo) != m.from.bank_of(ferryman) {
            return false;
        }
    }

    Entity::CARGO.into_iter().all(|e| {
        let moved = m.from.bank_of(e) != m.to.bank_of(e);
        moved == (m.cargo == Some(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bank::Bank;

    #[test]
    fn start_has_only_the_goat_crossing() {
        let moves = legal_moves(&Configuration::START);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].cargo, Some(Entity::Goat));
        assert_eq!(moves[0].label, "Ferry the goat");
    }

    #[test]
    fn cannot_carry_from_the_other_bank() {
        let c = Configuration::new([Bank::Far, Bank::Near, Bank::Near, Bank::Near]);
        assert!(apply_crossing(&c, Crossing::Carry(Entity::Wolf)).is_none());
        assert!(apply_crossing(&c, Crossing::Carry(Entity::Ferryman)).is_none());
        assert!(apply_crossing(&c, Crossing::Carry(Entity::Goat)).is_some());
    }

    #[test]
    fn tampered_move_is_not_well_formed() {
        let mut m = apply_crossing(&Configuration::START, Crossing::Alone).unwrap();
        assert!(is_well_formed(&m));
        m.to = m.to.with_flipped(Entity::Cabbage);
        assert!(!is_well_formed(&m));
    }
}
