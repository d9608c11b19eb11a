//! Player hands.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::deck::Deck;

/// Points a player is charged for holding the Boner card at round end.
pub const BONER_PENALTY: u32 = 50;

/// A player and the cards in their hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards in the hand.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player holding the given cards.
    #[must_use]
    pub const fn new(hand: Vec<Card>) -> Self {
        Self { hand }
    }

    /// Creates a player by drawing `count` cards from the deck.
    ///
    /// # Panics
    ///
    /// Panics if the deck holds fewer than `count` cards.
    #[must_use]
    pub fn deal(deck: &mut Deck, count: usize) -> Self {
        Self {
            hand: (0..count).map(|_| deck.draw()).collect(),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns whether the hand contains the card.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Adds a card to the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes the card from the hand.
    ///
    /// # Panics
    ///
    /// Panics unless the hand held exactly one copy of the card. The engine
    /// only removes cards it has already checked for, so a mismatch is a bug.
    pub fn use_card(&mut self, card: Card) {
        let before = self.hand.len();
        self.hand.retain(|&c| c != card);
        let removed = before - self.hand.len();
        assert!(removed == 1, "card {card} not found in hand exactly once ({removed} copies)");
    }

    /// Sorts the hand by suit, then rank, with the Boner card last.
    pub fn sort_hand(&mut self, boner: Card) {
        self.hand.sort_by(|a, b| match (*a == boner, *b == boner) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => a.cmp(b),
        });
    }

    /// Returns the points left in hand.
    ///
    /// The Boner card counts [`BONER_PENALTY`], every other card its
    /// [`Card::value`]. An empty hand scores 0.
    #[must_use]
    pub fn score(&self, boner: Card) -> u32 {
        self.hand
            .iter()
            .map(|&card| if card == boner { BONER_PENALTY } else { card.value() })
            .sum()
    }

    /// Returns whether the player is stuck with the Boner card.
    #[must_use]
    pub fn is_boned(&self, boner: Card) -> bool {
        self.holds(boner)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
