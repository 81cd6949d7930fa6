//! Hand representation and 21-point scoring.

use crate::card::Card;

/// Highest score a hand can hold without busting.
pub const SCORE_LIMIT: u8 = 21;

/// Point value of a single card: face cards count 10, the Ace counts 1
/// here (promotion to 11 is handled at the hand level).
const fn card_points(rank: u8) -> u8 {
    if rank > 10 { 10 } else { rank }
}

/// An ordered collection of cards held by one participant.
///
/// Insertion order is draw order, which matters for display but not for
/// scoring. The score is recomputed from the cards on every call, never
/// cached.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the 21-point score of the hand.
    ///
    /// Each card is worth `min(rank, 10)` points. If the hand holds at
    /// least one Ace and the raw sum is 11 or less, exactly one Ace is
    /// promoted from 1 to 11. At most one promotion happens no matter how
    /// many Aces the hand holds.
    #[must_use]
    pub fn score(&self) -> u8 {
        let mut total: u8 = 0;
        let mut has_ace = false;

        for card in &self.cards {
            if card.rank() == 1 {
                has_ace = true;
            }
            total = total.saturating_add(card_points(card.rank()));
        }

        if has_ace && total <= 11 {
            total += 10;
        }
        total
    }

    /// Turns every card in the hand face-up. Idempotent.
    pub fn face_up_all(&mut self) {
        for card in &mut self.cards {
            card.set_face_up(true);
        }
    }

    /// Renders the hand as a single line of space-joined card labels.
    #[must_use]
    pub fn render(&self) -> String {
        self.cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
