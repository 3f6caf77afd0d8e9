//! Expected-goals (xG) shot analytics: threshold-filtered summaries, cumulative
//! overperformance curves and per-category breakdowns over a player's shot log.
//! The same pure functions serve the initial render and every interactive
//! recomputation, so the two can never disagree.

pub mod breakdown;
pub mod curve;
pub mod data;
pub mod domain;
pub mod print;
pub mod summary;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
