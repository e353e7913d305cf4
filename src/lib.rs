//! A solver for the wolf / goat / cabbage river-crossing puzzle.
//!
//! The core is a tiny state-space search: a safety predicate, a legal-move generator, and a
//! breadth-first shortest-path search over the 16 possible configurations. Sessions, playback
//! and solution export are thin layers on top that the binaries in `src/bin` drive.

pub mod core;
pub mod logging;
pub mod playback;
pub mod rules;
pub mod search;
pub mod session;
pub mod settings;
pub mod solution;
