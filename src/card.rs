use std::fmt;

use serde::{Deserialize, Serialize};

/// Suit color of an Uno card. `None` is reserved for wild cards and for the
/// absence of an active called color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    None,
}

impl Color {
    /// The four playable colors, in deck order.
    pub const REAL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    /// Single-letter code used in card rendering ("R4", "BS", ...).
    pub fn initial(self) -> &'static str {
        match self {
            Color::Red => "R",
            Color::Yellow => "Y",
            Color::Green => "G",
            Color::Blue => "B",
            Color::None => "",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "RED",
            Color::Yellow => "YELLOW",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::None => "NONE",
        };
        f.write_str(name)
    }
}

/// Rank of an Uno card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Number,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// Representation of an Uno card.
///
/// Colored variants carry their suit; the two wild variants have no color
/// until the player who plays them calls one. Number cards carry a face value
/// between 0 and 9.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Card {
    Number(Color, u8),
    Skip(Color),
    Reverse(Color),
    DrawTwo(Color),
    Wild,
    WildDrawFour,
}

pub const INIT_HAND_SIZE: usize = 7;
pub const DECK_SIZE: usize = 108;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Number of copies of each non-zero number card per color.
pub const COPIES_PER_NUMBER: usize = 2;
/// Number of zero cards per color.
pub const COPIES_PER_ZERO: usize = 1;
/// Number of copies of each action card (Skip/Reverse/DrawTwo) per color.
pub const COPIES_PER_ACTION: usize = 2;
pub const WILD_COUNT: usize = 4;
pub const WILD_DRAW_FOUR_COUNT: usize = 4;

/// What playing a card does to the turn machinery. Number and plain wild
/// cards are a single advance; the action cards add direction flips, forced
/// draws for the next player, and extra advances.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CardEffect {
    pub flips_direction: bool,
    pub forced_draws: u8,
    pub advances: u8,
}

impl Default for CardEffect {
    /// The effect-free turn: advance to the next player once.
    fn default() -> Self {
        Self {
            flips_direction: false,
            forced_draws: 0,
            advances: 1,
        }
    }
}

impl Card {
    /// Returns the card's color, `Color::None` for wild cards.
    pub fn color(self) -> Color {
        match self {
            Card::Number(color, _)
            | Card::Skip(color)
            | Card::Reverse(color)
            | Card::DrawTwo(color) => color,
            Card::Wild | Card::WildDrawFour => Color::None,
        }
    }

    /// Returns the card's rank.
    pub fn rank(self) -> Rank {
        match self {
            Card::Number(..) => Rank::Number,
            Card::Skip(_) => Rank::Skip,
            Card::Reverse(_) => Rank::Reverse,
            Card::DrawTwo(_) => Rank::DrawTwo,
            Card::Wild => Rank::Wild,
            Card::WildDrawFour => Rank::WildDrawFour,
        }
    }

    /// Returns the face value for number cards.
    pub fn number(self) -> Option<u8> {
        match self {
            Card::Number(_, number) => Some(number),
            _ => None,
        }
    }

    /// The single legality predicate: true iff this card may be played on the
    /// given up-card. `called_color` is relevant only when the up-card is a
    /// wild; it holds the color its player called.
    pub fn can_play_on(self, up_card: Card, called_color: Color) -> bool {
        if matches!(self.rank(), Rank::Wild | Rank::WildDrawFour) {
            return true;
        }
        if self.color() == up_card.color() || self.color() == called_color {
            return true;
        }
        match (self.rank(), up_card.rank()) {
            (Rank::Number, Rank::Number) => self.number() == up_card.number(),
            (mine, theirs) => mine == theirs,
        }
    }

    /// Points this card counts against a player left holding it when another
    /// player goes out.
    pub fn forfeit_cost(self) -> i32 {
        match self {
            Card::Number(_, number) => i32::from(number),
            Card::Skip(_) | Card::Reverse(_) | Card::DrawTwo(_) => 20,
            Card::Wild | Card::WildDrawFour => 50,
        }
    }

    /// True iff playing this card obliges the player to call a color next.
    pub fn followed_by_call(self) -> bool {
        matches!(self, Card::Wild | Card::WildDrawFour)
    }

    /// The effect descriptor applied by the engine after this card is played.
    /// "Advance twice" is how a skip is expressed; under a reversed direction
    /// in a two-player game that lands on the same player again, which is the
    /// standard-rules outcome.
    pub fn effect(self) -> CardEffect {
        match self.rank() {
            Rank::Skip => CardEffect {
                advances: 2,
                ..CardEffect::default()
            },
            Rank::Reverse => CardEffect {
                flips_direction: true,
                ..CardEffect::default()
            },
            Rank::DrawTwo => CardEffect {
                forced_draws: 2,
                advances: 2,
                ..CardEffect::default()
            },
            Rank::WildDrawFour => CardEffect {
                forced_draws: 4,
                advances: 2,
                ..CardEffect::default()
            },
            Rank::Number | Rank::Wild => CardEffect::default(),
        }
    }
}

impl fmt::Display for Card {
    /// Short code rendering: color initial plus rank code, e.g. "R4", "BS",
    /// "GR", "G+2", "W", "W4".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color().initial())?;
        match self {
            Card::Number(_, number) => write!(f, "{number}"),
            Card::Skip(_) => f.write_str("S"),
            Card::Reverse(_) => f.write_str("R"),
            Card::DrawTwo(_) => f.write_str("+2"),
            Card::Wild => f.write_str("W"),
            Card::WildDrawFour => f.write_str("W4"),
        }
    }
}

/// Builds the full 108-card Uno deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..COPIES_PER_NUMBER {
        for number in 1..=9 {
            for color in Color::REAL {
                deck.push(Card::Number(color, number));
            }
        }
    }
    for _ in 0..COPIES_PER_ZERO {
        for color in Color::REAL {
            deck.push(Card::Number(color, 0));
        }
    }
    for _ in 0..COPIES_PER_ACTION {
        for color in Color::REAL {
            deck.push(Card::Skip(color));
            deck.push(Card::Reverse(color));
            deck.push(Card::DrawTwo(color));
        }
    }
    deck.extend(std::iter::repeat(Card::Wild).take(WILD_COUNT));
    deck.extend(std::iter::repeat(Card::WildDrawFour).take(WILD_DRAW_FOUR_COUNT));
    deck
}
