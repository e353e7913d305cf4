//! Plain data describing where everything stands.
//!
//! - [`bank`]: the two sides of the river.
//! - [`entity`]: the four things that cross (three cargo items plus the ferryman).
//! - [`config`]: a full snapshot of one bank per entity, packable into 4 bits.

pub mod bank;
pub mod config;
pub mod entity;
