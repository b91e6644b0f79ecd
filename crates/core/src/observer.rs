use crate::{Card, DeckComposition};
use std::cell::RefCell;
use std::rc::Rc;

/// Win probabilities for the next deal. The joker share is folded into both
/// directions because a dealt joker wins regardless of the call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WinOdds {
    pub higher: f64,
    pub lower: f64,
    pub joker: f64,
}

/// Receives deck mutations (deal or rebuild) synchronously, in registration
/// order. Subscribers must not attach or detach from inside the callback.
pub trait DeckObserver {
    fn on_deck_updated(&mut self, remaining: &[Card]);
}

/// Explicit subscriber list for deck changes. Subscribers are handed in at
/// session construction time; there is no global registry.
#[derive(Default)]
pub struct DeckWatcher {
    observers: Vec<Rc<RefCell<dyn DeckObserver>>>,
}

impl DeckWatcher {
    pub fn attach(&mut self, observer: Rc<RefCell<dyn DeckObserver>>) {
        if !self
            .observers
            .iter()
            .any(|existing| Rc::ptr_eq(existing, &observer))
        {
            self.observers.push(observer);
        }
    }

    pub fn detach(&mut self, observer: &Rc<RefCell<dyn DeckObserver>>) {
        self.observers
            .retain(|existing| !Rc::ptr_eq(existing, observer));
    }

    pub fn notify(&self, remaining: &[Card]) {
        for observer in &self.observers {
            observer.borrow_mut().on_deck_updated(remaining);
        }
    }
}

/// The AI card counter. Tracks the remaining composition of the live deck and
/// computes exact odds against it.
#[derive(Debug, Default)]
pub struct CardCounter {
    composition: DeckComposition,
}

impl DeckObserver for CardCounter {
    fn on_deck_updated(&mut self, remaining: &[Card]) {
        self.composition = DeckComposition::from_cards(remaining);
    }
}

impl CardCounter {
    pub fn composition(&self) -> &DeckComposition {
        &self.composition
    }

    /// Exact odds for higher/lower against the current card. Equal ranks are
    /// a push that counts toward neither direction. Returns all-zero odds
    /// when nothing remains or the current card is a joker.
    pub fn win_odds(&self, current: Card) -> WinOdds {
        let total = self.composition.total();
        if total == 0 || current.is_joker() {
            return WinOdds::default();
        }
        let total = total as f64;
        let higher = self.composition.count_above(current.rank) as f64;
        let lower = self.composition.count_below(current.rank) as f64;
        let joker = self.composition.jokers() as f64 / total;
        WinOdds {
            higher: higher / total + joker,
            lower: lower / total + joker,
            joker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Rank, Suit};

    fn counter_for(remaining: &[Card]) -> CardCounter {
        let mut counter = CardCounter::default();
        counter.on_deck_updated(remaining);
        counter
    }

    #[test]
    fn odds_for_seven_after_it_left_a_fresh_deck() {
        let deck = Deck::build(0);
        let current = Card::new(Rank::Seven, Suit::Hearts);
        let remaining: Vec<Card> = deck
            .remaining()
            .iter()
            .copied()
            .filter(|card| *card != current)
            .collect();
        assert_eq!(remaining.len(), 51);

        let counter = counter_for(&remaining);
        let odds = counter.win_odds(current);
        assert!((odds.higher - 28.0 / 51.0).abs() < 1e-12);
        assert!((odds.lower - 20.0 / 51.0).abs() < 1e-12);
        assert_eq!(odds.joker, 0.0);
        // push share accounts for the remainder
        let push = 3.0 / 51.0;
        assert!((odds.higher + odds.lower + push - 1.0).abs() < 1e-12);
    }

    #[test]
    fn joker_share_is_added_to_both_directions() {
        let mut remaining = vec![
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Three, Suit::Clubs),
        ];
        remaining.push(Card::joker());
        remaining.push(Card::joker());
        let counter = counter_for(&remaining);
        let odds = counter.win_odds(Card::new(Rank::Seven, Suit::Hearts));
        assert!((odds.joker - 0.5).abs() < 1e-12);
        assert!((odds.higher - (0.25 + 0.5)).abs() < 1e-12);
        assert!((odds.lower - (0.25 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn joker_current_card_yields_zero_odds() {
        let counter = counter_for(&[Card::new(Rank::Two, Suit::Hearts)]);
        assert_eq!(counter.win_odds(Card::joker()), WinOdds::default());
        let empty = counter_for(&[]);
        assert_eq!(
            empty.win_odds(Card::new(Rank::Five, Suit::Clubs)),
            WinOdds::default()
        );
    }

    #[test]
    fn watcher_notifies_in_registration_order() {
        struct Recorder {
            id: u8,
            log: Rc<RefCell<Vec<u8>>>,
        }
        impl DeckObserver for Recorder {
            fn on_deck_updated(&mut self, _remaining: &[Card]) {
                self.log.borrow_mut().push(self.id);
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::new(RefCell::new(Recorder {
            id: 1,
            log: log.clone(),
        }));
        let second = Rc::new(RefCell::new(Recorder {
            id: 2,
            log: log.clone(),
        }));
        let mut watcher = DeckWatcher::default();
        watcher.attach(first.clone());
        watcher.attach(second);
        watcher.attach(first.clone());
        watcher.notify(&[]);
        assert_eq!(*log.borrow(), vec![1, 2]);

        let first_dyn: Rc<RefCell<dyn DeckObserver>> = first;
        watcher.detach(&first_dyn);
        watcher.notify(&[]);
        assert_eq!(*log.borrow(), vec![1, 2, 2]);
    }
}
