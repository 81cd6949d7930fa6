use crate::card::Card;
use crate::error::RoundError;
use crate::result::{Outcome, RoundResult};
use crate::ui::Screen;

use super::{Game, GameState};

/// The dealer draws while below this score and stands at or above it.
const DEALER_STAND_AT: u8 = 17;

impl Game {
    /// Dealer plays out their hand.
    ///
    /// The dealer draws face-up cards while their score is below 17, then
    /// shows the whole hand, which reveals the hole card. Returns the
    /// cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs
    /// out while the dealer must draw.
    pub fn dealer_play(&mut self, screen: &mut dyn Screen) -> Result<Vec<Card>, RoundError> {
        if self.state != GameState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.dealer.score() < DEALER_STAND_AT {
            let card = self.deck.pop()?;
            self.dealer.take(card, true, screen);
            drawn.push(card);
        }

        self.dealer.show_hand(screen);
        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Resolves the round and announces the outcome.
    ///
    /// A player bust loses outright and the dealer's hand is left as it
    /// was dealt. Otherwise a dealer bust wins for the player; failing
    /// that, both hands are shown once more and the higher score wins,
    /// with equal scores a draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not finished yet.
    pub fn showdown(&mut self, screen: &mut dyn Screen) -> Result<RoundResult, RoundError> {
        if self.state != GameState::RoundOver {
            return Err(RoundError::InvalidState);
        }

        let outcome = if self.player.is_bust() {
            Outcome::DealerWins
        } else if self.dealer.is_bust() {
            Outcome::PlayerWins
        } else {
            self.player.show_hand(screen);
            self.dealer.show_hand(screen);
            match self.player.score().cmp(&self.dealer.score()) {
                core::cmp::Ordering::Greater => Outcome::PlayerWins,
                core::cmp::Ordering::Less => Outcome::DealerWins,
                core::cmp::Ordering::Equal => Outcome::Draw,
            }
        };

        let sentence = match outcome {
            Outcome::PlayerWins => format!("{} wins!", self.player.name()),
            Outcome::DealerWins => format!("{} wins!", self.dealer.name()),
            Outcome::Draw => "Draw.".to_string(),
        };
        screen.line(&sentence);

        Ok(RoundResult {
            outcome,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
            player_bust: self.player.is_bust(),
            dealer_bust: self.dealer.is_bust(),
        })
    }
}
