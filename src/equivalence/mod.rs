//! Wild equivalence state and the symbol-matching predicate.
//!
//! Two symbols match when they are equal or when the current wild state
//! makes them equivalent. How wilds build that state depends on the
//! [`RuleMode`](crate::core::RuleMode):
//!
//! - **Persistent**: every wild card drawn appends a pair; pairs never go away.
//! - **SingleActive**: one optional active pair, replaced by each wild drawn.
//!
//! Both variants answer [`EquivalenceState::matches`] the same way, so the
//! match finder and resolution engine never look at the mode.

mod pair;
mod state;

pub use pair::SymbolPair;
pub use state::EquivalenceState;
