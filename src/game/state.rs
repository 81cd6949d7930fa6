//! Round state types.

/// Phase of the round. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Fresh round, nothing dealt yet.
    Ready,
    /// Waiting for the player's hit/stand decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the showdown can run.
    RoundOver,
}

/// A player's decision at the hit/stand prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// Keep the current hand and end the turn.
    Stand,
}
