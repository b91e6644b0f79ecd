use crate::{Card, Rank, RngState, Suit};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("cannot deal from an empty deck")]
    Empty,
}

/// Ordered mutable card sequence. Dealing removes from the top (end of the
/// backing vector). The caller treats `DeckError::Empty` as "deck cycle
/// complete", never as a fatal condition.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full 52-card deck plus `joker_count` jokers, unshuffled.
    pub fn build(joker_count: u32) -> Self {
        let mut cards = Vec::with_capacity(52 + joker_count as usize);
        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::new(rank, suit));
            }
        }
        for _ in 0..joker_count {
            cards.push(Card::joker());
        }
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    pub fn composition(&self) -> DeckComposition {
        DeckComposition::from_cards(&self.cards)
    }
}

/// Immutable count-by-rank snapshot of a deck's remaining cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckComposition {
    rank_counts: BTreeMap<Rank, usize>,
    jokers: usize,
    total: usize,
}

impl DeckComposition {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut rank_counts = BTreeMap::new();
        let mut jokers = 0;
        for card in cards {
            if card.is_joker() {
                jokers += 1;
            } else {
                *rank_counts.entry(card.rank).or_insert(0) += 1;
            }
        }
        Self {
            rank_counts,
            jokers,
            total: cards.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn jokers(&self) -> usize {
        self.jokers
    }

    pub fn count_of(&self, rank: Rank) -> usize {
        self.rank_counts.get(&rank).copied().unwrap_or(0)
    }

    /// Non-joker cards strictly above `rank`.
    pub fn count_above(&self, rank: Rank) -> usize {
        self.rank_counts
            .iter()
            .filter(|(r, _)| **r > rank)
            .map(|(_, count)| count)
            .sum()
    }

    /// Non-joker cards strictly below `rank`.
    pub fn count_below(&self, rank: Rank) -> usize {
        self.rank_counts
            .iter()
            .filter(|(r, _)| **r < rank)
            .map(|(_, count)| count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_produces_standard_deck_plus_jokers() {
        let deck = Deck::build(2);
        assert_eq!(deck.len(), 54);
        let composition = deck.composition();
        assert_eq!(composition.jokers(), 2);
        for rank in Rank::STANDARD {
            assert_eq!(composition.count_of(rank), 4);
        }
    }

    #[test]
    fn deal_shrinks_deck_and_errors_when_empty() {
        let mut deck = Deck::build(0);
        let mut seen = Vec::new();
        for _ in 0..52 {
            let card = deck.deal().expect("card");
            assert!(!seen.contains(&card));
            assert!(!deck.remaining().contains(&card));
            seen.push(card);
        }
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), Err(DeckError::Empty));
    }

    #[test]
    fn composition_counts_match_remaining_total() {
        let mut deck = Deck::build(3);
        let mut rng = RngState::from_seed(9);
        deck.shuffle(&mut rng);
        for _ in 0..10 {
            deck.deal().expect("card");
        }
        let composition = deck.composition();
        let rank_sum: usize = Rank::STANDARD
            .iter()
            .map(|rank| composition.count_of(*rank))
            .sum();
        assert_eq!(rank_sum + composition.jokers(), deck.len());
        assert_eq!(composition.total(), deck.len());
    }

    #[test]
    fn above_and_below_partition_non_jokers() {
        let deck = Deck::build(2);
        let composition = deck.composition();
        let above = composition.count_above(Rank::Seven);
        let below = composition.count_below(Rank::Seven);
        let push = composition.count_of(Rank::Seven);
        assert_eq!(above, 28);
        assert_eq!(below, 20);
        assert_eq!(push, 4);
        assert_eq!(above + below + push + composition.jokers(), 54);
    }
}
