//! The 52-card deck.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, RANKS, Suit};
use crate::error::EmptyDeck;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A shuffled draw pile of cards.
///
/// A deck is built once, shuffled once, and then monotonically drained by
/// [`Deck::pop`]; it is never replenished. Every (suit, rank) combination
/// appears exactly once, so the cards popped plus the cards remaining always
/// add up to the original 52.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Draw pile; the top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full 52-card deck and shuffles it with the given RNG.
    ///
    /// The shuffle is `rand`'s in-place Fisher-Yates, so every permutation
    /// is equally likely for a uniform RNG.
    #[expect(
        clippy::missing_panics_doc,
        reason = "ranks are drawn from the valid range, construction cannot fail"
    )]
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in RANKS {
                cards.push(Card::new(suit, rank).expect("rank is within 1..=13"));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that draws the given cards in order.
    ///
    /// The first element of `draws` is the first card popped. Intended for
    /// deterministic rounds in tests and demos; no shuffle is applied.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeck`] if no cards remain.
    pub fn pop(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop().ok_or(EmptyDeck)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
