//! Round participants.

use crate::card::Card;
use crate::hand::{Hand, SCORE_LIMIT};
use crate::ui::Screen;

/// A named participant holding one hand.
///
/// Both the human player and the automated dealer are `Player`s; the
/// difference between them lives entirely in the game's turn logic. Score
/// and bust status are derived from the hand, never stored.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current hand score, freshly computed.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.score()
    }

    /// Returns whether the player has gone over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > SCORE_LIMIT
    }

    /// Takes a card into the hand with the given orientation and announces
    /// the take on the screen.
    ///
    /// A face-down take announces the masked card render, keeping the
    /// dealer's hole card hidden from the transcript.
    pub fn take(&mut self, mut card: Card, face_up: bool, screen: &mut dyn Screen) {
        card.set_face_up(face_up);
        screen.line(&format!("{} took card {card}", self.name));
        self.hand.add(card);
    }

    /// Turns the whole hand face-up and prints it with its score.
    ///
    /// Revealing is idempotent: repeated calls only reprint, the hand's
    /// contents and score never change.
    pub fn show_hand(&mut self, screen: &mut dyn Screen) {
        self.hand.face_up_all();
        screen.line(&format!(
            "{}: {} (score {})",
            self.name,
            self.hand.render(),
            self.score()
        ));
    }
}
