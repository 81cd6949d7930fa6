//! Interactive single-round blackjack in the terminal.

use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{ConsoleKeypad, ConsoleScreen, Game, GameOptions, Keypad, Screen};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut game = Game::new(GameOptions::default(), seed);
    let mut screen = ConsoleScreen;
    let mut keypad = ConsoleKeypad;

    screen.line("Blackjack: closest to 21 without going over wins.");

    match game.play(&mut screen, &mut keypad) {
        Ok(_) => {
            screen.line("Press any key to exit.");
            let _ = keypad.read_key();
        }
        Err(err) => eprintln!("round error: {err}"),
    }
}
