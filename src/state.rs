use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};

/// Record of one completed turn, appended to the game's turn log.
///
/// `color_called` holds the color call in effect when the turn ended: the
/// color this player called if they played a wild, otherwise the most recent
/// call anywhere in the game (`Color::None` before the first wild is played).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub player_id: usize,
    pub card_played: Option<Card>,
    pub color_called: Color,
    pub had_to_draw: bool,
}

/// Read-only snapshot of the game handed to strategies.
///
/// Built fresh for every strategy invocation; everything in it is copied out
/// of the engine, so nothing a strategy does with it can reach live state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    first_up_card: Card,
    num_cards_in_hands: Vec<usize>,
    total_scores: Vec<i32>,
    discard_pile_count: usize,
    current_player: usize,
    direction_forwards: bool,
    turns: Vec<Turn>,
}

impl GameState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_up_card: Card,
        num_cards_in_hands: Vec<usize>,
        total_scores: Vec<i32>,
        discard_pile_count: usize,
        current_player: usize,
        direction_forwards: bool,
        turns: Vec<Turn>,
    ) -> Self {
        Self {
            first_up_card,
            num_cards_in_hands,
            total_scores,
            discard_pile_count,
            current_player,
            direction_forwards,
            turns,
        }
    }

    /// The card turned up at the very start of the round. Does not change
    /// after a remix.
    pub fn first_up_card(&self) -> Card {
        self.first_up_card
    }

    /// Number of cards each player currently holds, indexed by player id.
    pub fn num_cards_in_hands(&self) -> &[usize] {
        &self.num_cards_in_hands
    }

    /// Cumulative match score of each player, indexed by player id.
    pub fn total_scores(&self) -> &[i32] {
        &self.total_scores
    }

    /// Cards played since the last remix, counting the live up-card.
    pub fn discard_pile_count(&self) -> usize {
        self.discard_pile_count
    }

    /// Id of the player whose turn it is.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn num_players(&self) -> usize {
        self.num_cards_in_hands.len()
    }

    /// Number of turns completed so far, not counting the current one.
    pub fn turns_taken(&self) -> usize {
        self.turns.len()
    }

    /// Looks up a past turn; index 0 is the first turn of the round.
    pub fn turn(&self, index: usize) -> Option<&Turn> {
        self.turns.get(index)
    }

    /// True while play proceeds by increasing player id (wrapping to zero),
    /// false after an odd number of reverses.
    pub fn direction_is_forwards(&self) -> bool {
        self.direction_forwards
    }
}
