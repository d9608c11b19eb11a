//! Moves as typed by a player.

use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::ParseMoveError;

/// A move for the player to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Play a card from hand.
    Play(Card),
    /// Play the joker as a stand-in for the given card.
    PlayJoker(Card),
    /// Take a card from the next player instead of playing.
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Play(card) => write!(f, "{card}"),
            Self::PlayJoker(card) => write!(f, "{} {card}", Card::JOKER),
            Self::Pass => f.write_str("pass"),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses `pass`, `Jo <card>`, or a single card token.
    ///
    /// ```
    /// use sevens::{Card, Move};
    ///
    /// assert_eq!("pass".parse::<Move>(), Ok(Move::Pass));
    /// assert_eq!("Jo 8s".parse::<Move>(), Ok(Move::PlayJoker("8s".parse().unwrap())));
    /// assert_eq!("7s".parse::<Move>(), Ok(Move::Play(Card::START)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoveError::Empty);
        }
        if s == "pass" {
            return Ok(Self::Pass);
        }
        if let Some(stand_in) = s.strip_prefix("Jo ") {
            return Ok(Self::PlayJoker(stand_in.trim().parse()?));
        }
        Ok(Self::Play(s.parse()?))
    }
}
