//! Pairwise top-card scans.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Symbol;
use crate::core::{Player, PlayerId};
use crate::equivalence::EquivalenceState;

/// One side of a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchParticipant {
    pub id: PlayerId,
    pub name: String,
}

impl From<&Player> for MatchParticipant {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
        }
    }
}

/// Two players whose visible cards match.
///
/// `symbol` is `player1`'s top symbol; with a wild equivalence `player2`'s
/// symbol differs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub player1: MatchParticipant,
    pub player2: MatchParticipant,
    pub symbol: Symbol,
}

impl Match {
    fn between(player1: &Player, player2: &Player, symbol: Symbol) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            symbol,
        }
    }

    /// Whether `player` is one of the two participants.
    #[must_use]
    pub fn involves(&self, player: &PlayerId) -> bool {
        self.player1.id == *player || self.player2.id == *player
    }

    /// The participant facing `player`, or `None` if `player` is not in
    /// this match.
    #[must_use]
    pub fn counterpart(&self, player: &PlayerId) -> Option<&MatchParticipant> {
        if self.player1.id == *player {
            Some(&self.player2)
        } else if self.player2.id == *player {
            Some(&self.player1)
        } else {
            None
        }
    }

    /// Whether `a` and `b` are exactly this match's two players, either way
    /// round.
    #[must_use]
    pub fn is_between(&self, a: &PlayerId, b: &PlayerId) -> bool {
        (self.player1.id == *a && self.player2.id == *b)
            || (self.player1.id == *b && self.player2.id == *a)
    }
}

/// First matching pair among all players, in roster scan order.
///
/// Players with empty stacks and the `exclude`d player are skipped; the
/// remaining order is preserved.
#[must_use]
pub fn find_match(
    players: &[Player],
    equivalence: &EquivalenceState,
    exclude: Option<&PlayerId>,
) -> Option<Match> {
    let candidates: SmallVec<[(&Player, Symbol); 8]> = players
        .iter()
        .filter(|p| exclude != Some(&p.id))
        .filter_map(|p| p.top_card().map(|card| (p, card.symbol)))
        .collect();

    for (i, &(p1, s1)) in candidates.iter().enumerate() {
        for &(p2, s2) in &candidates[i + 1..] {
            if equivalence.matches(s1, s2) {
                return Some(Match::between(p1, p2, s1));
            }
        }
    }
    None
}

/// First player in `others` whose top card matches `player`'s top card.
///
/// `player` itself is skipped if it appears in `others`, as are empty
/// stacks. Returns `None` when `player` has no card.
#[must_use]
pub fn find_match_against<'a>(
    player: &Player,
    others: impl IntoIterator<Item = &'a Player>,
    equivalence: &EquivalenceState,
) -> Option<Match> {
    let symbol = player.top_card()?.symbol;
    others
        .into_iter()
        .filter(|other| other.id != player.id)
        .find(|other| {
            other
                .top_card()
                .is_some_and(|card| equivalence.matches(symbol, card.symbol))
        })
        .map(|other| Match::between(player, other, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::RuleMode;
    use crate::equivalence::SymbolPair;

    fn player(id: &str, stack: &[Symbol]) -> Player {
        Player::new(id, id.to_uppercase()).with_stack(stack.iter().map(|&s| Card::new("x", s)))
    }

    fn plain() -> EquivalenceState {
        EquivalenceState::new(RuleMode::Persistent)
    }

    #[test]
    fn test_no_players_no_match() {
        assert!(find_match(&[], &plain(), None).is_none());
    }

    #[test]
    fn test_direct_match() {
        let players = vec![player("a", &[Symbol::Star]), player("b", &[Symbol::Star])];
        let found = find_match(&players, &plain(), None).unwrap();
        assert_eq!(found.player1.id, PlayerId::new("a"));
        assert_eq!(found.player2.id, PlayerId::new("b"));
        assert_eq!(found.player2.name, "B");
        assert_eq!(found.symbol, Symbol::Star);
    }

    #[test]
    fn test_only_top_cards_count() {
        let players = vec![
            player("a", &[Symbol::Star, Symbol::Heart]),
            player("b", &[Symbol::Circle, Symbol::Heart]),
        ];
        assert!(find_match(&players, &plain(), None).is_none());
    }

    #[test]
    fn test_empty_stacks_skipped() {
        let players = vec![
            player("a", &[Symbol::Star]),
            player("b", &[]),
            player("c", &[Symbol::Star]),
        ];
        let found = find_match(&players, &plain(), None).unwrap();
        assert_eq!(found.player2.id, PlayerId::new("c"));
    }

    #[test]
    fn test_scan_order_tie_break() {
        // (b, c) and (a, d) both match; (a, d) comes first because the outer
        // index is a.
        let players = vec![
            player("a", &[Symbol::Heart]),
            player("b", &[Symbol::Star]),
            player("c", &[Symbol::Star]),
            player("d", &[Symbol::Heart]),
        ];
        let found = find_match(&players, &plain(), None).unwrap();
        assert_eq!(found.player1.id, PlayerId::new("a"));
        assert_eq!(found.player2.id, PlayerId::new("d"));
    }

    #[test]
    fn test_exclude_removes_player() {
        let players = vec![
            player("a", &[Symbol::Heart]),
            player("b", &[Symbol::Star]),
            player("c", &[Symbol::Star]),
            player("d", &[Symbol::Heart]),
        ];
        let found = find_match(&players, &plain(), Some(&PlayerId::new("a"))).unwrap();
        assert_eq!(found.player1.id, PlayerId::new("b"));
        assert_eq!(found.player2.id, PlayerId::new("c"));
    }

    #[test]
    fn test_wild_equivalence_match_reports_first_symbol() {
        let equivalence = EquivalenceState::SingleActive {
            active: Some(SymbolPair::new(Symbol::Circle, Symbol::Square)),
        };
        let players = vec![player("a", &[Symbol::Square]), player("b", &[Symbol::Circle])];
        let found = find_match(&players, &equivalence, None).unwrap();
        assert_eq!(found.symbol, Symbol::Square);
    }

    #[test]
    fn test_against_checks_only_drawer_pairs() {
        let players = vec![
            player("a", &[Symbol::Star]),
            player("b", &[Symbol::Star]),
            player("c", &[Symbol::Heart]),
            player("d", &[Symbol::Heart]),
        ];
        // a/b match, but c is the drawer: only (c, d) is considered.
        let found = find_match_against(&players[2], &players, &plain()).unwrap();
        assert_eq!(found.player1.id, PlayerId::new("c"));
        assert_eq!(found.player2.id, PlayerId::new("d"));
    }

    #[test]
    fn test_against_without_card() {
        let players = vec![player("a", &[]), player("b", &[Symbol::Star])];
        assert!(find_match_against(&players[0], &players, &plain()).is_none());
    }

    #[test]
    fn test_match_helpers() {
        let players = vec![player("a", &[Symbol::Star]), player("b", &[Symbol::Star])];
        let found = find_match(&players, &plain(), None).unwrap();
        let a = PlayerId::new("a");
        let b = PlayerId::new("b");
        let z = PlayerId::new("z");

        assert!(found.involves(&a));
        assert!(!found.involves(&z));
        assert_eq!(found.counterpart(&a).map(|p| &p.id), Some(&b));
        assert_eq!(found.counterpart(&b).map(|p| &p.id), Some(&a));
        assert!(found.counterpart(&z).is_none());
        assert!(found.is_between(&b, &a));
        assert!(!found.is_between(&a, &z));
    }
}
