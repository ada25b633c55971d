//! The two equivalence-state variants.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::pair::SymbolPair;
use crate::cards::{Card, DeckItem, Symbol};
use crate::core::{EngineError, GameRng, Result, RuleMode};

/// Wild-derived symbol equivalences for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquivalenceState {
    /// Append-only list; one entry per wild card drawn.
    Persistent { pairs: Vector<SymbolPair> },
    /// At most one pair, replaced by every wild item drawn.
    SingleActive { active: Option<SymbolPair> },
}

impl EquivalenceState {
    /// Empty state for a rule mode.
    #[must_use]
    pub fn new(mode: RuleMode) -> Self {
        match mode {
            RuleMode::Persistent => EquivalenceState::Persistent { pairs: Vector::new() },
            RuleMode::SingleActive => EquivalenceState::SingleActive { active: None },
        }
    }

    #[must_use]
    pub fn mode(&self) -> RuleMode {
        match self {
            EquivalenceState::Persistent { .. } => RuleMode::Persistent,
            EquivalenceState::SingleActive { .. } => RuleMode::SingleActive,
        }
    }

    /// Update the state for a freshly drawn item.
    ///
    /// Returns the card that goes on the drawer's stack, or `None` when the
    /// item is a single-active wild (those never enter a stack).
    ///
    /// In persistent mode a wild card pairs its own symbol with one of the
    /// other seven, picked uniformly. Nothing tracks which pairs already
    /// exist, so the same pair can be added twice.
    ///
    /// Fails with `ModeMismatch`, leaving the state unchanged, for items that
    /// cannot occur in this mode.
    pub fn observe_draw(&mut self, item: &DeckItem, rng: &mut GameRng) -> Result<Option<Card>> {
        match (self, item) {
            (EquivalenceState::Persistent { pairs }, DeckItem::Card(card)) => {
                if card.is_wild {
                    let others = card.symbol.others();
                    let partner = others[rng.gen_index(others.len())];
                    pairs.push_back(SymbolPair::new(card.symbol, partner));
                }
                Ok(Some(card.clone()))
            }
            (EquivalenceState::SingleActive { .. }, DeckItem::Card(card)) if card.is_wild => {
                Err(EngineError::ModeMismatch { mode: RuleMode::SingleActive })
            }
            (EquivalenceState::SingleActive { .. }, DeckItem::Card(card)) => Ok(Some(card.clone())),
            (EquivalenceState::SingleActive { active }, DeckItem::Wild(wild)) => {
                *active = Some(SymbolPair::from(*wild));
                Ok(None)
            }
            (EquivalenceState::Persistent { .. }, DeckItem::Wild(_)) => {
                Err(EngineError::ModeMismatch { mode: RuleMode::Persistent })
            }
        }
    }

    /// Whether two symbols match under the current state. Symmetric.
    #[must_use]
    pub fn matches(&self, a: Symbol, b: Symbol) -> bool {
        if a == b {
            return true;
        }
        match self {
            EquivalenceState::Persistent { pairs } => pairs.iter().any(|pair| pair.links(a, b)),
            EquivalenceState::SingleActive { active } => {
                active.is_some_and(|pair| pair.links(a, b))
            }
        }
    }

    /// Every pair currently in effect, oldest first.
    pub fn pairs(&self) -> impl Iterator<Item = &SymbolPair> {
        let (list, single) = match self {
            EquivalenceState::Persistent { pairs } => (Some(pairs), None),
            EquivalenceState::SingleActive { active } => (None, active.as_ref()),
        };
        list.into_iter().flat_map(|pairs| pairs.iter()).chain(single)
    }

    /// The active wild pair in single-active mode.
    #[must_use]
    pub fn active_wild(&self) -> Option<SymbolPair> {
        match self {
            EquivalenceState::Persistent { .. } => None,
            EquivalenceState::SingleActive { active } => *active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::WildItem;

    fn wild_item(a: Symbol, b: Symbol) -> DeckItem {
        DeckItem::Wild(WildItem::new(a, b).unwrap())
    }

    #[test]
    fn test_new_is_empty() {
        for mode in [RuleMode::Persistent, RuleMode::SingleActive] {
            let state = EquivalenceState::new(mode);
            assert_eq!(state.mode(), mode);
            assert_eq!(state.pairs().count(), 0);
            assert!(state.matches(Symbol::Star, Symbol::Star));
            assert!(!state.matches(Symbol::Star, Symbol::Heart));
        }
    }

    #[test]
    fn test_persistent_regular_card_unchanged() {
        let mut state = EquivalenceState::new(RuleMode::Persistent);
        let mut rng = GameRng::new(1);
        let card = Card::new("Books", Symbol::Circle);

        let visible = state.observe_draw(&DeckItem::Card(card.clone()), &mut rng).unwrap();
        assert_eq!(visible, Some(card));
        assert_eq!(state.pairs().count(), 0);
    }

    #[test]
    fn test_persistent_wild_adds_pair_and_stays_visible() {
        let mut state = EquivalenceState::new(RuleMode::Persistent);
        let mut rng = GameRng::new(1);
        let wild = Card::wild(Symbol::Square);

        let visible = state.observe_draw(&DeckItem::Card(wild.clone()), &mut rng).unwrap();
        assert_eq!(visible, Some(wild));

        let pairs: Vec<_> = state.pairs().copied().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, Symbol::Square);
        assert_ne!(pairs[0].1, Symbol::Square);
        assert!(state.matches(pairs[0].0, pairs[0].1));
        assert!(state.matches(pairs[0].1, pairs[0].0));
    }

    #[test]
    fn test_persistent_rejects_wild_item() {
        let mut state = EquivalenceState::new(RuleMode::Persistent);
        let mut rng = GameRng::new(1);
        let result = state.observe_draw(&wild_item(Symbol::Star, Symbol::Heart), &mut rng);
        assert_eq!(result, Err(EngineError::ModeMismatch { mode: RuleMode::Persistent }));
        assert_eq!(state.pairs().count(), 0);
    }

    #[test]
    fn test_single_active_wild_replaces_pair() {
        let mut state = EquivalenceState::new(RuleMode::SingleActive);
        let mut rng = GameRng::new(1);

        let visible = state.observe_draw(&wild_item(Symbol::Star, Symbol::Heart), &mut rng).unwrap();
        assert_eq!(visible, None);
        assert!(state.matches(Symbol::Heart, Symbol::Star));

        state.observe_draw(&wild_item(Symbol::Circle, Symbol::Square), &mut rng).unwrap();
        assert!(!state.matches(Symbol::Heart, Symbol::Star));
        assert!(state.matches(Symbol::Circle, Symbol::Square));
        assert_eq!(state.active_wild(), Some(SymbolPair::new(Symbol::Square, Symbol::Circle)));
        assert_eq!(state.pairs().count(), 1);
    }

    #[test]
    fn test_single_active_card_keeps_pair() {
        let mut state = EquivalenceState::new(RuleMode::SingleActive);
        let mut rng = GameRng::new(1);
        state.observe_draw(&wild_item(Symbol::Star, Symbol::Heart), &mut rng).unwrap();

        let card = Card::new("Foods", Symbol::Triangle);
        let visible = state.observe_draw(&DeckItem::Card(card.clone()), &mut rng).unwrap();
        assert_eq!(visible, Some(card));
        assert!(state.matches(Symbol::Star, Symbol::Heart));
    }

    #[test]
    fn test_single_active_rejects_wild_card() {
        let mut state = EquivalenceState::new(RuleMode::SingleActive);
        let mut rng = GameRng::new(1);
        let result = state.observe_draw(&DeckItem::Card(Card::wild(Symbol::Star)), &mut rng);
        assert_eq!(result, Err(EngineError::ModeMismatch { mode: RuleMode::SingleActive }));
        assert_eq!(state.active_wild(), None);
    }

    #[test]
    fn test_persistent_pairs_accumulate() {
        let mut state = EquivalenceState::new(RuleMode::Persistent);
        let mut rng = GameRng::new(11);
        for symbol in [Symbol::Diamond, Symbol::Star, Symbol::Circle] {
            state.observe_draw(&DeckItem::Card(Card::wild(symbol)), &mut rng).unwrap();
        }
        let pairs: Vec<_> = state.pairs().copied().collect();
        assert_eq!(pairs.len(), 3);
        for pair in pairs {
            assert!(state.matches(pair.0, pair.1));
        }
        assert_eq!(state.active_wild(), None);
    }
}
