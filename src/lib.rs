//! A single-round blackjack game engine for the terminal.
//!
//! The crate provides a [`Game`] type that drives one round against an
//! automated dealer: deal, the player's hit/stand decisions, the dealer's
//! fixed draw-to-17 policy, and the final showdown. All text I/O goes
//! through the [`Screen`] and [`Keypad`] traits so the engine can be run
//! against a real terminal or a scripted harness.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{ConsoleKeypad, ConsoleScreen, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let result = game.play(&mut ConsoleScreen, &mut ConsoleKeypad)?;
//! println!("{:?}", result.outcome);
//! # Ok::<(), twentyone::RoundError>(())
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod ui;

// Re-export main types
pub use card::{Card, RANKS, Suit};
pub use deck::{DECK_SIZE, Deck};
pub use error::{CardError, EmptyDeck, RoundError};
pub use game::{Decision, Game, GameState};
pub use hand::{Hand, SCORE_LIMIT};
pub use options::GameOptions;
pub use player::Player;
pub use result::{Outcome, RoundResult};
pub use ui::{ConsoleKeypad, ConsoleScreen, Keypad, Screen};
