use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::bank::Bank;
use crate::core::entity::Entity;

/// Which bank every entity is on, indexed by [`Entity::index`].
///
/// Packed form: bit `i` is set iff entity `i` is on the far bank, so the 16 possible
/// configurations map onto `0..16` and `START`/`GOAL` are `0` and `15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration([Bank; 4]);

impl Configuration {
    pub const START: Configuration = Configuration([Bank::Near; 4]);
    pub const GOAL: Configuration = Configuration([Bank::Far; 4]);

    /// Number of distinct configurations.
    pub const COUNT: usize = 16;

    #[inline]
    pub const fn new(banks: [Bank; 4]) -> Self {
        Self(banks)
    }

    #[inline]
    pub fn bank_of(&self, e: Entity) -> Bank {
        self.0[e.index()]
    }

    #[inline]
    pub fn ferryman(&self) -> Bank {
        self.bank_of(Entity::Ferryman)
    }

    #[inline]
    pub fn banks(&self) -> [Bank; 4] {
        self.0
    }

    /// A copy with `e` moved to the opposite bank.
    #[inline]
    pub fn with_flipped(mut self, e: Entity) -> Self {
        self.0[e.index()] = self.0[e.index()].flip();
        self
    }

    /// Entities currently standing on `bank`, in canonical order.
    pub fn on_bank(&self, bank: Bank) -> impl Iterator<Item = Entity> + '_ {
        Entity::ALL
            .into_iter()
            .filter(move |&e| self.bank_of(e) == bank)
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    pub fn pack(&self) -> u8 {
        self.0
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &b)| match b {
                Bank::Near => acc,
                Bank::Far => acc | (1 << i),
            })
    }

    /// Inverse of [`Configuration::pack`]. Returns `None` for codes `>= 16`.
    pub fn from_packed(code: u8) -> Option<Self> {
        if usize::from(code) >= Self::COUNT {
            return None;
        }
        let mut banks = [Bank::Near; 4];
        for (i, b) in banks.iter_mut().enumerate() {
            if code & (1 << i) != 0 {
                *b = Bank::Far;
            }
        }
        Some(Self(banks))
    }

    /// All 16 configurations in packed order.
    pub fn all() -> impl Iterator<Item = Configuration> {
        (0..Self::COUNT as u8).filter_map(Self::from_packed)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_covers_all_sixteen_codes() {
        let all: Vec<Configuration> = Configuration::all().collect();
        assert_eq!(all.len(), Configuration::COUNT);
        for (code, c) in all.iter().enumerate() {
            assert_eq!(usize::from(c.pack()), code);
        }
        assert_eq!(Configuration::START.pack(), 0);
        assert_eq!(Configuration::GOAL.pack(), 15);
        assert_eq!(Configuration::from_packed(16), None);
    }

    #[test]
    fn flipping_touches_one_slot() {
        let c = Configuration::START.with_flipped(Entity::Goat);
        assert_eq!(c.bank_of(Entity::Goat), Bank::Far);
        assert_eq!(c.bank_of(Entity::Wolf), Bank::Near);
        assert_eq!(c.ferryman(), Bank::Near);
        assert_eq!(c.with_flipped(Entity::Goat), Configuration::START);
    }

    #[test]
    fn serializes_as_bank_array() {
        let c = Configuration::new([Bank::Near, Bank::Far, Bank::Near, Bank::Far]);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"["near","far","near","far"]"#);
        assert_eq!(c.to_string(), "[near, far, near, far]");
    }
}
