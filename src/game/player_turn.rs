use crate::card::Card;
use crate::error::RoundError;
use crate::ui::Screen;

use super::{Game, GameState};

impl Game {
    /// Player action: hit (draw one face-up card).
    ///
    /// The hand is shown after the draw. If the player goes over 21 the
    /// round ends immediately: the state jumps to round-over and the
    /// dealer never acts.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is
    /// exhausted.
    pub fn hit(&mut self, screen: &mut dyn Screen) -> Result<Card, RoundError> {
        if self.state != GameState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        let card = self.deck.pop()?;
        self.player.take(card, true, screen);
        self.player.show_hand(screen);

        if self.player.is_bust() {
            self.state = GameState::RoundOver;
        }

        Ok(card)
    }

    /// Player action: stand (end the turn and hand over to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        self.state = GameState::DealerTurn;
        Ok(())
    }
}
