//! Deck generation from a category pool.
//!
//! One item per category. Categories are shuffled, position `i` gets
//! `Symbol::ALL[i % 8]`, each item is independently made wild with
//! probability `wild_ratio`, and the finished sequence is shuffled again.

use smallvec::SmallVec;

use super::Deck;
use crate::cards::{Card, DeckItem, Symbol, WildItem};
use crate::core::{EngineError, GameRng, Result, RuleMode};

impl Deck {
    /// Generate a shuffled deck from category labels.
    ///
    /// Labels are assumed unique and non-empty. Fails with
    /// `EmptyCategorySet` when no labels are given and `InvalidWildRatio`
    /// when `wild_ratio` is outside `[0, 1]`.
    ///
    /// ```
    /// use symbol_clash::core::{GameRng, RuleMode};
    /// use symbol_clash::deck::Deck;
    ///
    /// let mut rng = GameRng::new(7);
    /// let deck = Deck::generate(["Movies", "Books", "Foods"], RuleMode::Persistent, 0.0, &mut rng).unwrap();
    /// assert_eq!(deck.len(), 3);
    /// ```
    pub fn generate<I, S>(
        categories: I,
        mode: RuleMode,
        wild_ratio: f64,
        rng: &mut GameRng,
    ) -> Result<Deck>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(0.0..=1.0).contains(&wild_ratio) {
            return Err(EngineError::InvalidWildRatio(wild_ratio));
        }

        let mut categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        if categories.is_empty() {
            return Err(EngineError::EmptyCategorySet);
        }

        rng.shuffle(&mut categories);

        let mut items = Vec::with_capacity(categories.len());
        for (i, category) in categories.into_iter().enumerate() {
            let symbol = Symbol::for_position(i);
            let is_wild = rng.gen_bool(wild_ratio);

            let item = match (mode, is_wild) {
                (_, false) => DeckItem::Card(Card::new(category, symbol)),
                (RuleMode::Persistent, true) => DeckItem::Card(Card::wild(symbol)),
                (RuleMode::SingleActive, true) => DeckItem::Wild(random_wild_item(rng)?),
            };
            items.push(item);
        }

        rng.shuffle(&mut items);
        Deck::from_items(items)
    }
}

/// Two distinct symbols: first uniform over all eight, second over the rest.
fn random_wild_item(rng: &mut GameRng) -> Result<WildItem> {
    let first = Symbol::ALL[rng.gen_index(Symbol::COUNT)];
    let others: SmallVec<[Symbol; Symbol::COUNT]> = first.others();
    let second = others[rng.gen_index(others.len())];
    WildItem::new(first, second)
}
