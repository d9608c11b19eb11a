//! Game configuration options.

/// Configuration options for a game of Sevens.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use sevens::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(5)
///     .with_max_score(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of players dealt into each round.
    pub players: usize,
    /// Cumulative score at which the game ends.
    pub max_score: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 4,
            max_score: 350,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use sevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(3);
    /// assert_eq!(options.players, 3);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the score that ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use sevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_score(100);
    /// assert_eq!(options.max_score, 100);
    /// ```
    #[must_use]
    pub const fn with_max_score(mut self, max_score: u32) -> Self {
        self.max_score = max_score;
        self
    }
}
