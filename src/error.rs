//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside the valid 1..=13 range.
    #[error("rank {0} is outside the valid range 1..=13")]
    RankOutOfRange(u8),
}

/// Error returned when drawing from an exhausted deck.
///
/// A correctly dealt single round can never drain all 52 cards, so this
/// surfacing at all points at a dealing bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards remaining in the deck")]
pub struct EmptyDeck;

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round is not in the right state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// The deck ran out of cards mid-round.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
    /// The input channel closed before a decision was read.
    #[error("input closed before a decision was read")]
    InputClosed,
}
