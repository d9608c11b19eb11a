//! Card types and their two-character text encoding.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card rank.
///
/// `Joker` sorts below every real rank and never appears on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// The joker's rank.
    Joker = 0,
    /// Ace (low).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven, the rank that opens a suit.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// The thirteen real ranks, Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric value of the rank (Joker = 0, Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given numeric value, if any.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Joker,
            1 => Self::Ace,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            9 => Self::Nine,
            10 => Self::Ten,
            11 => Self::Jack,
            12 => Self::Queen,
            13 => Self::King,
            _ => return None,
        })
    }

    /// The rank directly below this one, `None` below Ace.
    #[must_use]
    pub const fn below(self) -> Option<Self> {
        match self {
            Self::Joker | Self::Ace => None,
            _ => Self::from_value(self.value() - 1),
        }
    }

    /// The rank directly above this one, `None` above King.
    #[must_use]
    pub const fn above(self) -> Option<Self> {
        match self {
            Self::Joker | Self::King => None,
            _ => Self::from_value(self.value() + 1),
        }
    }

    /// Returns the display glyph of the rank.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Joker | Self::Jack => 'J',
            Self::Ace => 'A',
            Self::Ten => 'T',
            Self::Queen => 'Q',
            Self::King => 'K',
            // Two..=Nine
            _ => (b'0' + self as u8) as char,
        }
    }

    const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph.to_ascii_uppercase() {
            '2'..='9' => Self::from_value(glyph as u8 - b'0'),
            'A' => Some(Self::Ace),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

/// Card suit.
///
/// `None` is only carried by the joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// No suit (joker only).
    None,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// The four real suits in board order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the index of the suit in per-suit state, `None` for the joker's suit.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Spades => Some(0),
            Self::Hearts => Some(1),
            Self::Clubs => Some(2),
            Self::Diamonds => Some(3),
        }
    }

    /// Returns the lowercase display glyph of the suit.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::None => 'o',
            Self::Spades => 's',
            Self::Hearts => 'h',
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
        }
    }

    const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph.to_ascii_lowercase() {
            's' => Some(Self::Spades),
            'h' => Some(Self::Hearts),
            'c' => Some(Self::Clubs),
            'd' => Some(Self::Diamonds),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Cards order by suit, then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// The joker.
    pub const JOKER: Self = Self::new(Suit::None, Rank::Joker);

    /// The seven of spades, which must open every round.
    pub const START: Self = Self::new(Suit::Spades, Rank::Seven);

    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the point value of the card when left in hand.
    ///
    /// Ten and above are worth 10, everything else 5. The Boner penalty is
    /// applied by [`Player::score`](crate::Player::score), not here.
    #[must_use]
    pub const fn value(&self) -> u32 {
        if self.rank as u8 >= Rank::Ten as u8 { 10 } else { 5 }
    }

    /// Returns whether this card is the joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.rank, Rank::Joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.glyph(), self.suit.glyph())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Jo" {
            return Ok(Self::JOKER);
        }

        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length);
        };

        let rank = Rank::from_glyph(rank).ok_or(ParseCardError::Rank(rank))?;
        let suit = Suit::from_glyph(suit).ok_or(ParseCardError::Suit(suit))?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards in a deck: 52 ranked cards and one joker.
pub const DECK_SIZE: usize = 53;
