use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::Configuration;
use crate::core::entity::Entity;

/// A forbidden pairing left without the ferryman.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hazard {
    WolfEatsGoat,
    GoatEatsCabbage,
}

impl Hazard {
    pub const ALL: [Hazard; 2] = [Hazard::WolfEatsGoat, Hazard::GoatEatsCabbage];

    /// The (predator, prey) pair this hazard is about.
    pub fn pair(self) -> (Entity, Entity) {
        match self {
            Hazard::WolfEatsGoat => (Entity::Wolf, Entity::Goat),
            Hazard::GoatEatsCabbage => (Entity::Goat, Entity::Cabbage),
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.pair();
        write!(f, "the {a} would be left alone with the {b}")
    }
}

/// First rule `c` breaks, checked in [`Hazard::ALL`] order.
///
/// Only wolf/goat and goat/cabbage are constrained; wolf and cabbage may always share a bank.
pub fn hazard(c: &Configuration) -> Option<Hazard> {
    let ferryman = c.ferryman();
    Hazard::ALL.into_iter().find(|h| {
        let (a, b) = h.pair();
        let side = c.bank_of(a);
        side == c.bank_of(b) && side != ferryman
    })
}

#[inline]
pub fn is_safe(c: &Configuration) -> bool {
    hazard(c).is_none()
}
