//! Multi-round scoring.

use alloc::vec;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::DealError;
use crate::options::GameOptions;
use crate::result::{PlayerResult, RoundResult};
use crate::round::Round;

/// A game of Sevens: a run of rounds until someone reaches the maximum score.
///
/// The game owns the cumulative scores and the random number generator that
/// shuffles every round's deck.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cumulative score per player.
    scores: Vec<u32>,
    /// Rounds scored so far.
    rounds_played: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use sevens::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.scores(), &[0, 0, 0, 0]);
    /// assert!(!game.is_over());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            scores: vec![0; options.players],
            rounds_played: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles a fresh deck and deals the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured player count cannot be dealt.
    pub fn start_round(&mut self) -> Result<Round, DealError> {
        Round::new(self.options.players, &mut self.rng)
    }

    /// Adds every player's score from a finished round to the totals.
    ///
    /// A round abandoned before anyone went out is scored the same way.
    ///
    /// # Panics
    ///
    /// Panics if the round was dealt to a different number of players.
    pub fn finish_round(&mut self, round: &Round) -> RoundResult {
        assert_eq!(
            round.players().len(),
            self.scores.len(),
            "round seats a different number of players"
        );

        let boner = round.boner();
        let winner = round.winner();
        let players = round
            .players()
            .iter()
            .zip(self.scores.iter_mut())
            .enumerate()
            .map(|(index, (player, total))| {
                let score = player.score(boner);
                *total += score;
                PlayerResult {
                    player: index,
                    hand: player.hand().to_vec(),
                    score,
                    total: *total,
                    winner: player.is_empty(),
                    boned: player.is_boned(boner),
                }
            })
            .collect();
        self.rounds_played += 1;

        let game_over = self.is_over();
        info!(
            round = self.rounds_played,
            winner = ?winner,
            scores = ?self.scores,
            game_over,
            "round scored"
        );

        RoundResult {
            players,
            boner,
            winner,
            game_over,
        }
    }

    /// Returns whether any player has reached the maximum score.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.scores.iter().any(|&score| score >= self.options.max_score)
    }

    /// Returns the cumulative scores in seat order.
    #[must_use]
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Returns the seat with the lowest cumulative score, first seat on ties.
    #[must_use]
    pub fn leader(&self) -> Option<usize> {
        self.scores
            .iter()
            .enumerate()
            .min_by_key(|&(_, &score)| score)
            .map(|(index, _)| index)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of players.
    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.options.players
    }

    /// Returns the score that ends the game.
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.options.max_score
    }

    /// Returns the number of rounds scored so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }
}
