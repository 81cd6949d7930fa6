//! Round result types for the showdown.

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player wins (dealer busts or player has the higher score).
    PlayerWins,
    /// The dealer wins (player busts or dealer has the higher score).
    DealerWins,
    /// Equal scores with neither side bust.
    Draw,
}

/// Result of the round after the showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
