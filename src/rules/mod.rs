//! Pure puzzle rules: what is dangerous, and which crossings are possible.
//!
//! Move generation is split in two steps, like the rest of the crate expects:
//! physically possible candidates first, then the safety filter, then (optionally)
//! extra [`laws`] restrictions applied by callers that need them.

pub mod laws;
pub mod movegen;
pub mod safety;
