//! Turning a match into a win.
//!
//! ## Resolution
//!
//! [`resolve`] scores the winner, pops the loser's top card and immediately
//! re-scans the loser's newly revealed card against everyone else. A win can
//! therefore open a new match (a *cascade*) in the same step.
//!
//! ## Claims
//!
//! [`MatchInteraction`] tracks the single match currently on the table:
//!
//! ```text
//! NoMatch ─▶ Matched ─claim─▶ Claimed ─confirm─▶ (resolve) ─▶ Matched | NoMatch
//!                                    └─reject──▶ NoMatch
//! ```
//!
//! Only the player named as opponent in a claim may confirm or reject it.
//! There is no expiry: a claim stays pending until answered or superseded
//! by a newly surfaced match.

mod claim;
mod engine;

pub use claim::{Claim, MatchInteraction};
pub use engine::{resolve, Resolution};
