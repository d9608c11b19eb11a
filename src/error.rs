//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when playing a card.
///
/// The round is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The acting player does not hold the card.
    #[error("you don't have that card")]
    NotInHand,
    /// Spades has not been opened and the card is not the seven of spades.
    #[error("you must play the 7 of Spades")]
    WrongOpener,
    /// The card would extend its suit past the range spades has reached.
    #[error("hasn't been broken yet")]
    RunNotUnlocked,
    /// The card does not open its suit or extend its run by one.
    #[error("you can't play that card")]
    IllegalExtension,
}

/// Errors that can occur when passing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassError {
    /// The next player does not hold the card to be handed over.
    #[error("you don't have that card")]
    NotInHand,
}

/// Errors that can occur while dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The player count cannot be dealt a full deck.
    #[error("cannot deal to {0} players")]
    InvalidPlayerCount(usize),
}

/// Errors that can occur when parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is not two characters long.
    #[error("a card is two characters, like 7s or Jo")]
    Length,
    /// The first character is not a rank glyph.
    #[error("unknown rank '{0}'")]
    Rank(char),
    /// The second character is not a suit glyph.
    #[error("unknown suit '{0}'")]
    Suit(char),
}

/// Errors that can occur when parsing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    /// The input was blank.
    #[error("empty move")]
    Empty,
    /// A card token in the move could not be parsed.
    #[error(transparent)]
    Card(#[from] ParseCardError),
}
