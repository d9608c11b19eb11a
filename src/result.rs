//! Round result types for scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Result for a single player at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's seat index.
    pub player: usize,
    /// Cards left in hand.
    pub hand: Vec<Card>,
    /// Points scored this round.
    pub score: u32,
    /// Cumulative score after this round.
    pub total: u32,
    /// Whether the player went out.
    pub winner: bool,
    /// Whether the player was left holding the Boner card.
    pub boned: bool,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The Boner card at the end of the round.
    pub boner: Card,
    /// Seat index of the player who went out, if anyone did.
    pub winner: Option<usize>,
    /// Whether the game has reached its maximum score.
    pub game_over: bool,
}
