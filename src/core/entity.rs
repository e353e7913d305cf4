use std::fmt;

use serde::{Deserialize, Serialize};

/// Everything that can be on a bank, in canonical configuration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Wolf,
    Goat,
    Cabbage,
    Ferryman,
}

impl Entity {
    pub const ALL: [Entity; 4] = [Entity::Wolf, Entity::Goat, Entity::Cabbage, Entity::Ferryman];

    /// The entities the ferryman can carry, in move-generation order.
    pub const CARGO: [Entity; 3] = [Entity::Wolf, Entity::Goat, Entity::Cabbage];

    /// Slot of this entity inside a [`crate::core::config::Configuration`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_cargo(self) -> bool {
        self != Entity::Ferryman
    }

    pub fn name(self) -> &'static str {
        match self {
            Entity::Wolf => "wolf",
            Entity::Goat => "goat",
            Entity::Cabbage => "cabbage",
            Entity::Ferryman => "ferryman",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
