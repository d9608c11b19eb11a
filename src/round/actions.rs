use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::{PassError, PlayError};

use super::Round;

impl Round {
    /// Returns the cards the current player may play, in hand order.
    ///
    /// Until spades is opened only the seven of spades and jokers qualify.
    #[must_use]
    pub fn playables(&self) -> Vec<Card> {
        let hand = self.current_player().hand();

        if self.board.spades().is_none() {
            let start = hand.iter().copied().filter(|&card| card == Card::START);
            let jokers = hand.iter().copied().filter(Card::is_joker);
            return start.chain(jokers).collect();
        }

        hand.iter()
            .copied()
            .filter(|&card| self.board.is_playable(card))
            .collect()
    }

    /// Plays a card from the current player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not hold the card, spades has not
    /// been opened with the seven, the suit has not been unlocked that far by
    /// spades, or the card does not extend its run. A bare joker is never a
    /// legal card; use [`Round::play_joker`].
    pub fn play(&mut self, card: Card) -> Result<(), PlayError> {
        self.lay_down(card, None)
    }

    /// Plays the current player's joker as a stand-in for `stand_in`.
    ///
    /// The stand-in must be legal exactly as if it were played itself. On
    /// success it becomes the new Boner card.
    ///
    /// # Errors
    ///
    /// Returns an error if the player holds no joker, or the stand-in is not a
    /// legal play.
    pub fn play_joker(&mut self, stand_in: Card) -> Result<(), PlayError> {
        self.lay_down(Card::JOKER, Some(stand_in))
    }

    fn lay_down(&mut self, card: Card, stand_in: Option<Card>) -> Result<(), PlayError> {
        if !self.players[self.turn].holds(card) {
            return Err(PlayError::NotInHand);
        }

        let effective = stand_in.unwrap_or(card);
        let mut board = self.board.with_card(effective)?;

        // A joker play retires whatever card is the Boner, which is the joker
        // itself until the first substitution.
        let used = match stand_in {
            Some(stand_in) => {
                board.set_boner(stand_in);
                self.board.boner()
            }
            None => effective,
        };
        self.players[self.turn].use_card(used);
        self.board = board;

        debug!(player = self.turn, card = %effective, joker = stand_in.is_some(), "played");
        self.next_turn();
        Ok(())
    }

    /// Passes: the next player hands `card` to the current player, and the
    /// turn moves on to them.
    ///
    /// The card must be in the next player's hand, since it is taken from them.
    ///
    /// # Errors
    ///
    /// Returns an error if the next player does not hold the card.
    pub fn pass(&mut self, card: Card) -> Result<(), PassError> {
        let giver = self.next_index();
        if !self.players[giver].holds(card) {
            return Err(PassError::NotInHand);
        }

        self.players[self.turn].receive(card);
        debug!(player = self.turn, from = giver, card = %card, "passed");
        self.next_turn();
        self.players[self.turn].use_card(card);
        Ok(())
    }
}
