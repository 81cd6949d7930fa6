//! Playing card types.

use core::fmt;

use crate::error::CardError;

/// Card suit, in the traditional dealing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Diamond, Self::Club, Self::Heart, Self::Spade];

    /// Returns the lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamond => "diamond",
            Self::Club => "club",
            Self::Heart => "heart",
            Self::Spade => "spade",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so callers' width/alignment specifiers are honored.
        f.pad(self.name())
    }
}

/// The valid card ranks (1 = Ace through 13 = King).
pub const RANKS: core::ops::RangeInclusive<u8> = 1..=13;

/// Rendering of a face-down card. Same width as a face-up render so
/// hidden and revealed cards line up in a hand.
const HIDDEN: &str = "[???????|??]";

/// A playing card.
///
/// The identity (suit, rank) is fixed at construction; only the face-up
/// flag changes over the card's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
    face_up: bool,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::RankOutOfRange`] if `rank` is outside 1..=13.
    /// Out-of-range ranks are rejected, never clamped.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if !matches!(rank, 1..=13) {
            return Err(CardError::RankOutOfRange(rank));
        }
        Ok(Self {
            suit,
            rank,
            face_up: false,
        })
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns whether the card is face-up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Sets the face-up flag.
    pub const fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Returns the printed rank: "A", "J", "Q", "K", or the decimal number.
    #[must_use]
    pub fn display_rank(&self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            _ => self.rank.to_string(),
        }
    }
}

impl fmt::Display for Card {
    /// Renders the card as a fixed-width bracketed label.
    ///
    /// Face-up cards show the suit name (right-aligned to 7 characters)
    /// and the printed rank (right-aligned to 2); face-down cards render
    /// as `[???????|??]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "[{:>7}|{:>2}]", self.suit, self.display_rank())
        } else {
            f.write_str(HIDDEN)
        }
    }
}
