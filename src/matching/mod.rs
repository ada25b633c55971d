//! Match discovery across a roster.
//!
//! A match is two players whose top cards have matching symbols under the
//! current [`EquivalenceState`](crate::equivalence::EquivalenceState).
//!
//! ## Scan order
//!
//! With three or more players several matches can exist at once, but only
//! one is reported per scan. Which one is fixed by roster order:
//!
//! - [`find_match`]: pairs `(i, j)` with `i < j` over the players that have a
//!   card, outer index first.
//! - [`find_match_against`]: the given player against each other player in
//!   roster order.
//!
//! Callers rely on this order; it decides who gets to claim a win.

mod finder;

pub use finder::{find_match, find_match_against, Match, MatchParticipant};
