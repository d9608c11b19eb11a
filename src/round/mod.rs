//! Round engine: dealing, turn order, and the rules of play.

use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::deck::Deck;
use crate::error::DealError;
use crate::player::Player;

mod actions;
mod advisor;
pub mod board;

pub use board::{Board, Run};

/// A single round of Sevens.
///
/// The round owns every player's hand, the turn pointer, and the [`Board`].
/// State only changes through [`Round::play`], [`Round::play_joker`] and
/// [`Round::pass`]; a failed call leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Players in seat order.
    players: Vec<Player>,
    /// Index of the player to act.
    turn: usize,
    /// Runs and Boner card.
    board: Board,
}

impl Round {
    /// Shuffles a fresh deck with `rng` and deals it to `players` players.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is below 2 or above [`DECK_SIZE`].
    pub fn new<R: Rng + ?Sized>(players: usize, rng: &mut R) -> Result<Self, DealError> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::deal(players, deck)
    }

    /// Deals the whole deck to `players` players.
    ///
    /// The first `deck.len() % players` players receive one extra card. The
    /// holder of the seven of spades takes the first turn.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is below 2 or above [`DECK_SIZE`].
    ///
    /// # Panics
    ///
    /// Panics if cards remain in the deck after dealing.
    pub fn deal(players: usize, mut deck: Deck) -> Result<Self, DealError> {
        check_player_count(players)?;

        let per_player = deck.len() / players;
        let remainder = deck.len() % players;
        let players: Vec<Player> = (0..players)
            .map(|i| Player::deal(&mut deck, per_player + usize::from(i < remainder)))
            .collect();
        assert!(deck.is_empty(), "{} cards left after dealing", deck.len());

        Ok(Self::seat(players))
    }

    /// Creates a round from explicit hands, in seat order.
    ///
    /// The holder of the seven of spades takes the first turn, or the first
    /// player if nobody holds it.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 hands or more than [`DECK_SIZE`].
    pub fn from_hands(hands: Vec<Vec<Card>>) -> Result<Self, DealError> {
        check_player_count(hands.len())?;
        Ok(Self::seat(hands.into_iter().map(Player::new).collect()))
    }

    fn seat(players: Vec<Player>) -> Self {
        let turn = players
            .iter()
            .position(|player| player.holds(Card::START))
            .unwrap_or(0);
        debug!(players = players.len(), first = turn, "round dealt");

        Self {
            players,
            turn,
            board: Board::new(),
        }
    }

    /// Returns the index of the player to act.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Returns all players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the player to act.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Returns the index of the player after the one to act.
    #[must_use]
    pub fn next_index(&self) -> usize {
        (self.turn + 1) % self.players.len()
    }

    /// Returns the player after the one to act, who hands over a card on a pass.
    #[must_use]
    pub fn next_player(&self) -> &Player {
        &self.players[self.next_index()]
    }

    /// Returns a snapshot of the board.
    #[must_use]
    pub const fn board(&self) -> Board {
        self.board
    }

    /// Returns the current Boner card.
    #[must_use]
    pub const fn boner(&self) -> Card {
        self.board.boner()
    }

    /// Returns the run of the suit, `None` while it is unopened.
    #[must_use]
    pub const fn run(&self, suit: Suit) -> Option<Run> {
        self.board.run(suit)
    }

    /// Returns the first player to have emptied their hand.
    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        self.players.iter().position(Player::is_empty)
    }

    /// Returns whether someone has gone out.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Sorts the current player's hand, Boner card last.
    pub fn sort_cards(&mut self) {
        let boner = self.board.boner();
        self.players[self.turn].sort_hand(boner);
    }

    /// Hands the turn to the next player.
    pub fn next_turn(&mut self) {
        self.turn = (self.turn + 1) % self.players.len();
    }
}

fn check_player_count(players: usize) -> Result<(), DealError> {
    if !(2..=DECK_SIZE).contains(&players) {
        return Err(DealError::InvalidPlayerCount(players));
    }
    Ok(())
}
