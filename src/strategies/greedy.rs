use std::cmp::Reverse;

use crate::card::{Card, Color};
use crate::state::GameState;
use crate::strategies::{legal_indices, most_held_color};
use crate::strategy::Strategy;

/// Plays the most expensive legal card first, so the hand is worth as little
/// as possible if somebody else goes out. Calls its most-held color.
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn choose_card(
        &mut self,
        hand: &[Card],
        up_card: Card,
        called_color: Color,
        _state: &GameState,
    ) -> Option<usize> {
        legal_indices(hand, up_card, called_color)
            .into_iter()
            .max_by_key(|&index| (hand[index].forfeit_cost(), Reverse(index)))
    }

    fn choose_color(&mut self, hand: &[Card]) -> Color {
        most_held_color(hand)
    }
}
