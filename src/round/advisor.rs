//! Move heuristics.
//!
//! These are cheap scoring formulas, not a search. They read a [`Board`]
//! snapshot and a hand and never change either.

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::moves::Move;

use super::{Board, Round};

const ACE: i32 = Rank::Ace as i32;
const TEN: i32 = Rank::Ten as i32;
const KING: i32 = Rank::King as i32;

/// Penalty for naming a Boner the advisor is holding itself.
const SELF_BONE: i32 = 100;

fn card_at(suit: Suit, rank: i32) -> Option<Card> {
    if !(ACE..=KING).contains(&rank) {
        return None;
    }
    Rank::from_value(rank as u8).map(|rank| Card::new(suit, rank))
}

fn consider(best: &mut Option<(i32, Card)>, score: i32, candidate: Option<Card>) {
    let Some(candidate) = candidate else {
        return;
    };
    if best.is_none_or(|(top, _)| score > top) {
        *best = Some((score, candidate));
    }
}

impl Board {
    /// Orders the non-Boner playables so the one leaving the fewest open
    /// spots comes first. Ties keep their input order.
    #[must_use]
    pub fn best_plays(&self, playables: &[Card]) -> Vec<Card> {
        let mut plays: Vec<Card> = playables
            .iter()
            .copied()
            .filter(|&card| card != self.boner())
            .collect();
        plays.sort_by_key(|&card| self.open_spots(card));
        plays
    }

    /// Counts the run ends still open after `card` is played.
    ///
    /// Spades counts its room below and above. Every other suit counts each
    /// end that has not caught up with spades.
    #[must_use]
    pub fn open_spots(&self, card: Card) -> usize {
        let mut low = [0; 4];
        let mut high = [0; 4];
        for (index, suit) in Suit::ALL.into_iter().enumerate() {
            (low[index], high[index]) = self.bounds(suit);
        }

        if let (Some(index), false) = (card.suit.index(), card.is_joker()) {
            let rank = i32::from(card.rank.value());
            low[index] = low[index].min(rank);
            high[index] = high[index].max(rank);
        }

        let (spades_low, spades_high) = (low[0], high[0]);
        let mut spots = usize::from(spades_low > ACE) + usize::from(spades_high < KING);
        for index in 1..4 {
            spots += usize::from(low[index] > spades_low);
            spots += usize::from(high[index] < spades_high);
        }
        spots
    }

    /// Picks the card a joker should stand in for.
    ///
    /// Each run end is scored by how many of the cards beyond it the hand
    /// holds: the first counts 32 and every gap halves the weight, as does
    /// stepping past the spades run. Cards of Ten and up above a run count
    /// half again. Naming a card the hand holds itself costs 100.
    #[must_use]
    pub fn best_boner(&self, hand: &[Card]) -> Option<Card> {
        let (spades_low, spades_high) = self.bounds(Suit::Spades);
        let holds = |suit: Suit, rank: i32| card_at(suit, rank).is_some_and(|card| hand.contains(&card));
        let mut best = None;

        for suit in Suit::ALL {
            let is_spades = suit == Suit::Spades;
            // An unopened suit has a single candidate, its seven.
            let (low, high) = self.run(suit).map_or(
                (i32::from(Rank::Eight.value()), i32::from(Rank::Six.value())),
                |run| (i32::from(run.min.value()), i32::from(run.max.value())),
            );
            let shared = low - 1 == high + 1;
            let mut score = 0;

            if is_spades || low > spades_low {
                if holds(suit, low - 1) {
                    score -= SELF_BONE;
                }
                let mut add = 32;
                let mut rank = low - 2;
                while rank >= ACE && add > 0 {
                    if !is_spades && rank < spades_low {
                        add >>= 1;
                    }
                    if holds(suit, rank) {
                        score += add;
                    } else {
                        add >>= 1;
                    }
                    rank -= 1;
                }

                if !shared {
                    consider(&mut best, score, card_at(suit, low - 1));
                    score = 0;
                    if holds(suit, high + 1) {
                        score -= SELF_BONE;
                    }
                }
            }

            if is_spades || high < spades_high {
                let mut add = 32;
                let mut rank = high + 2;
                while rank <= KING && add > 0 {
                    if !is_spades && rank > spades_high {
                        add >>= 1;
                    }
                    if holds(suit, rank) {
                        score += if rank >= TEN { add * 3 / 2 } else { add };
                    } else {
                        add >>= 1;
                    }
                    rank += 1;
                }
                consider(&mut best, score, card_at(suit, high + 1));
            }
        }

        best.map(|(_, card)| card)
    }

    /// Scores how far the card sits from being playable.
    ///
    /// Distance past the spades run counts double for other suits, and the
    /// total for other suits is doubled again. The joker scores 0.
    #[must_use]
    pub fn blocking_score(&self, card: Card) -> i32 {
        if card.is_joker() {
            return 0;
        }

        let rank = i32::from(card.rank.value());
        let (spades_low, spades_high) = self.bounds(Suit::Spades);

        if card.suit == Suit::Spades {
            return if rank < spades_low {
                spades_low - rank - 1
            } else {
                rank - spades_high - 1
            };
        }

        let mut score = if rank < spades_low {
            (spades_low - rank) * 2
        } else if rank > spades_high {
            (rank - spades_high) * 2
        } else {
            0
        };

        let (low, high) = self.bounds(card.suit);
        score += if rank < low { low - rank - 1 } else { rank - high - 1 };
        score * 2
    }

    /// Picks the card a player should give up when passed to.
    ///
    /// The Boner goes first if held; otherwise the card with the highest
    /// [`blocking_score`](Self::blocking_score), nudged up for Ten and above.
    #[must_use]
    pub fn worst_card(&self, hand: &[Card]) -> Option<Card> {
        if let [only] = hand {
            return Some(*only);
        }

        let mut worst = None;
        for &card in hand.iter().filter(|card| !card.is_joker()) {
            if card == self.boner() {
                return Some(card);
            }
            let mut score = self.blocking_score(card);
            if card.rank >= Rank::Ten {
                score += 1;
            }
            consider(&mut worst, score, Some(card));
        }

        worst.map(|(_, card)| card)
    }
}

impl Round {
    /// See [`Board::best_plays`].
    #[must_use]
    pub fn best_plays(&self, playables: &[Card]) -> Vec<Card> {
        self.board.best_plays(playables)
    }

    /// See [`Board::best_boner`].
    #[must_use]
    pub fn best_boner(&self, hand: &[Card]) -> Option<Card> {
        self.board.best_boner(hand)
    }

    /// See [`Board::worst_card`].
    #[must_use]
    pub fn worst_card(&self, hand: &[Card]) -> Option<Card> {
        self.board.worst_card(hand)
    }

    /// Suggests a move for the current player.
    ///
    /// The best ordinary play wins; failing that a held joker stands in for
    /// the seven of spades while spades is closed, or for
    /// [`Board::best_boner`] once it is open; failing that, pass.
    #[must_use]
    pub fn suggest_move(&self) -> Move {
        let playables = self.playables();
        if let Some(&best) = self.best_plays(&playables).first() {
            return Move::Play(best);
        }
        if playables.is_empty() {
            return Move::Pass;
        }

        if self.board.spades().is_none() {
            return Move::PlayJoker(Card::START);
        }

        let hand: Vec<Card> = self
            .current_player()
            .hand()
            .iter()
            .copied()
            .filter(|card| !card.is_joker())
            .collect();
        self.best_boner(&hand).map_or(Move::Pass, Move::PlayJoker)
    }

    /// Suggests the card the next player should hand over on a pass.
    #[must_use]
    pub fn suggest_pass(&self) -> Option<Card> {
        self.worst_card(self.next_player().hand())
    }
}
