//! Game configuration options.

/// Configuration for a round: prompt keys and display names.
///
/// Table rules are fixed (single deck, dealer stands on 17, no splits or
/// doubling); only the interface details are configurable.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hit_key('j')
///     .with_stand_key('k');
/// assert_eq!(options.hit_key, 'j');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Key that means "hit" at the decision prompt. Case-sensitive.
    pub hit_key: char,
    /// Key that means "stand" at the decision prompt. Case-sensitive.
    pub stand_key: char,
    /// Display name of the human player.
    pub player_name: String,
    /// Display name of the dealer.
    pub dealer_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hit_key: 'h',
            stand_key: 's',
            player_name: "Player".to_string(),
            dealer_name: "Dealer".to_string(),
        }
    }
}

impl GameOptions {
    /// Sets the hit key.
    #[must_use]
    pub const fn with_hit_key(mut self, key: char) -> Self {
        self.hit_key = key;
        self
    }

    /// Sets the stand key.
    #[must_use]
    pub const fn with_stand_key(mut self, key: char) -> Self {
        self.stand_key = key;
        self
    }

    /// Sets the player's display name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the dealer's display name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }
}
