//! A Sevens card game engine with optional `no_std` support.
//!
//! Sevens is played with a 53-card deck: every suit is built outward from
//! its seven, spades must open the round and no other suit may run past
//! spades. The single joker can stand in for any legal card, and the card it
//! names becomes the Boner, which costs whoever is left holding it 50 points.
//!
//! [`Round`] holds the rules of a single deal; [`Game`] deals rounds and
//! accumulates scores until someone reaches the limit.
//!
//! # Example
//!
//! ```
//! use sevens::{Card, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut round = game.start_round().unwrap();
//!
//! assert!(round.playables().contains(&Card::START));
//! round.play(Card::START).unwrap();
//! assert_eq!(round.board().to_string(), "s:7 h:- c:- d:- Boner:Jo");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod moves;
pub mod options;
pub mod player;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, ParseCardError, ParseMoveError, PassError, PlayError};
pub use game::Game;
pub use moves::Move;
pub use options::GameOptions;
pub use player::{BONER_PENALTY, Player};
pub use result::{PlayerResult, RoundResult};
pub use round::{Board, Round, Run};
