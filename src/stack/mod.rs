//! Per-player card stacks.
//!
//! Each player keeps the cards they drew in a stack. Index 0 is the top,
//! the only visible card and the only one that takes part in matching.
//! Drawing prepends; losing a match pops the top.

mod card_stack;

pub use card_stack::CardStack;
