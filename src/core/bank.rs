use std::fmt;

use serde::{Deserialize, Serialize};

/// One side of the river.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Near,
    Far,
}

impl Bank {
    #[inline]
    pub const fn flip(self) -> Bank {
        match self {
            Bank::Near => Bank::Far,
            Bank::Far => Bank::Near,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Bank::Near => "near",
            Bank::Far => "far",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
