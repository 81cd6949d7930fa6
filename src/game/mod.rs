//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;
use crate::ui::{Keypad, Screen};

mod dealer;
mod player_turn;
pub mod state;

pub use state::{Decision, GameState};

/// A single round of blackjack: one deck, one player, one dealer.
///
/// The round runs through a fixed sequence of phases (deal, player turn,
/// dealer turn, showdown). Each phase method checks the current state and
/// rejects out-of-order calls; [`Game::play`] drives a full round with an
/// interactive prompt loop.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    player: Player,
    dealer: Player,
    state: GameState,
    options: GameOptions,
}

impl Game {
    /// Creates a round with a freshly shuffled deck.
    ///
    /// The shuffle uses a ChaCha8 RNG seeded with `seed`; callers wanting an
    /// unpredictable round should seed from an entropy source (the CLI demo
    /// uses the UNIX time).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::with_deck(options, deck)
    }

    /// Creates a round that draws from the given deck.
    ///
    /// Combined with [`Deck::stacked`] this forces an exact draw order,
    /// which is how the tests replay known scenarios.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let player = Player::new(options.player_name.clone());
        let dealer = Player::new(options.dealer_name.clone());
        Self {
            deck,
            player,
            dealer,
            state: GameState::Ready,
            options,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the human player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Deals the opening hands.
    ///
    /// The player receives two cards face-up and their hand is shown. The
    /// dealer receives one card face-up and the hole card face-down; the
    /// dealer's hand stays hidden until the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started or the deck runs
    /// out of cards.
    pub fn deal(&mut self, screen: &mut dyn Screen) -> Result<(), RoundError> {
        if self.state != GameState::Ready {
            return Err(RoundError::InvalidState);
        }

        let first = self.deck.pop()?;
        let second = self.deck.pop()?;
        self.player.take(first, true, screen);
        self.player.take(second, true, screen);
        self.player.show_hand(screen);

        let up = self.deck.pop()?;
        let hole = self.deck.pop()?;
        self.dealer.take(up, true, screen);
        self.dealer.take(hole, false, screen);

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Plays a full round: deal, player decisions, dealer turn, showdown.
    ///
    /// The prompt accepts exactly the two keys from [`GameOptions`]
    /// (case-sensitive) and re-prompts on anything else. If the player
    /// busts the dealer never acts.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started, the deck runs
    /// out of cards, or the input channel closes mid-round.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{ConsoleKeypad, ConsoleScreen, Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let result = game.play(&mut ConsoleScreen, &mut ConsoleKeypad)?;
    /// println!("{:?}", result.outcome);
    /// # Ok::<(), twentyone::RoundError>(())
    /// ```
    pub fn play(
        &mut self,
        screen: &mut dyn Screen,
        keypad: &mut dyn Keypad,
    ) -> Result<RoundResult, RoundError> {
        self.deal(screen)?;

        while self.state == GameState::PlayerTurn {
            match self.prompt_decision(screen, keypad)? {
                Decision::Hit => {
                    self.hit(screen)?;
                }
                Decision::Stand => self.stand()?,
            }
        }

        if self.state == GameState::DealerTurn {
            self.dealer_play(screen)?;
        }

        self.showdown(screen)
    }

    /// Prompts until one of the two recognized keys is read.
    fn prompt_decision(
        &self,
        screen: &mut dyn Screen,
        keypad: &mut dyn Keypad,
    ) -> Result<Decision, RoundError> {
        let hit = self.options.hit_key;
        let stand = self.options.stand_key;
        loop {
            screen.line(&format!("Hit [{hit}] or stand [{stand}]?"));
            match keypad.read_key() {
                Some(key) if key == hit => return Ok(Decision::Hit),
                Some(key) if key == stand => return Ok(Decision::Stand),
                Some(_) => screen.line("Unrecognized input."),
                None => return Err(RoundError::InputClosed),
            }
        }
    }
}
