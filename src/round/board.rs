//! Board state: the run of each suit and the Boner card.

use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::error::PlayError;

/// The contiguous ranks played so far in one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// Lowest rank played.
    pub min: Rank,
    /// Highest rank played.
    pub max: Rank,
}

impl Run {
    /// A run holding only the seven.
    pub const OPENED: Self = Self {
        min: Rank::Seven,
        max: Rank::Seven,
    };

    /// Returns whether `rank` lies within the run.
    #[must_use]
    pub fn contains(&self, rank: Rank) -> bool {
        (self.min..=self.max).contains(&rank)
    }

    /// Returns whether `rank` extends the run by one at either end.
    #[must_use]
    pub fn touches(&self, rank: Rank) -> bool {
        self.min.below() == Some(rank) || self.max.above() == Some(rank)
    }
}

/// The shared rule state of a round.
///
/// A board is `Copy`, so callers can take a snapshot and evaluate moves on
/// it without touching the live round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Runs indexed by [`Suit::index`]; `None` until the suit's seven is played.
    runs: [Option<Run>; 4],
    /// The current Boner card, [`Card::JOKER`] until a joker stands in for a card.
    boner: Card,
}

impl Board {
    /// Creates a board with every suit unopened and no Boner assigned.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            runs: [None; 4],
            boner: Card::JOKER,
        }
    }

    /// Returns the run of the suit, `None` while it is unopened.
    #[must_use]
    pub const fn run(&self, suit: Suit) -> Option<Run> {
        match suit.index() {
            Some(index) => self.runs[index],
            None => None,
        }
    }

    /// Returns the spades run.
    #[must_use]
    pub const fn spades(&self) -> Option<Run> {
        self.run(Suit::Spades)
    }

    /// Returns the current Boner card.
    #[must_use]
    pub const fn boner(&self) -> Card {
        self.boner
    }

    /// Returns whether a Boner card has been assigned by a joker play.
    #[must_use]
    pub const fn has_boner(&self) -> bool {
        !self.boner.is_joker()
    }

    pub(super) const fn set_boner(&mut self, boner: Card) {
        self.boner = boner;
    }

    /// Returns whether the card may be played once spades is open.
    ///
    /// Sevens and jokers are always listed. Other cards must extend their
    /// suit by one and, outside spades, stay within the spades run. The
    /// Boner card itself is never listed.
    #[must_use]
    pub fn is_playable(&self, card: Card) -> bool {
        let Some(spades) = self.spades() else {
            return card == Card::START || card.is_joker();
        };

        let fits = matches!(card.rank, Rank::Seven | Rank::Joker)
            || self.run(card.suit).is_some_and(|run| {
                run.touches(card.rank) && (card.suit == Suit::Spades || spades.contains(card.rank))
            });

        fits && (card != self.boner || !self.has_boner())
    }

    /// Returns the board after `card` is laid down, or why it cannot be.
    ///
    /// `card` must be a real card; a joker has to be resolved to its
    /// stand-in first.
    pub(super) fn with_card(&self, card: Card) -> Result<Self, PlayError> {
        let spades = self.spades();
        if spades.is_none() && card != Card::START {
            return Err(PlayError::WrongOpener);
        }

        let Some(index) = card.suit.index() else {
            return Err(PlayError::IllegalExtension);
        };

        let mut next = *self;
        next.runs[index] = Some(match self.runs[index] {
            None if card.rank == Rank::Seven => Run::OPENED,
            Some(run) if run.min.below() == Some(card.rank) => {
                if card.suit != Suit::Spades && spades.is_some_and(|s| card.rank < s.min) {
                    return Err(PlayError::RunNotUnlocked);
                }
                Run {
                    min: card.rank,
                    ..run
                }
            }
            Some(run) if run.max.above() == Some(card.rank) => {
                if card.suit != Suit::Spades && spades.is_some_and(|s| card.rank > s.max) {
                    return Err(PlayError::RunNotUnlocked);
                }
                Run {
                    max: card.rank,
                    ..run
                }
            }
            _ => return Err(PlayError::IllegalExtension),
        });

        Ok(next)
    }

    /// Returns the numeric bounds of the suit's run, `(0, 0)` while unopened.
    pub(super) fn bounds(&self, suit: Suit) -> (i32, i32) {
        self.run(suit).map_or((0, 0), |run| {
            (i32::from(run.min.value()), i32::from(run.max.value()))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for suit in Suit::ALL {
            write!(f, "{}:", suit.glyph())?;
            match self.run(suit) {
                None => write!(f, "- ")?,
                Some(run) if run.min == run.max => write!(f, "{} ", run.min.glyph())?,
                Some(run) => write!(f, "{}-{} ", run.min.glyph(), run.max.glyph())?,
            }
        }
        write!(f, "Boner:{}", self.boner)
    }
}
