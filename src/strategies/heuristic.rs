use std::cmp::Reverse;

use crate::card::{Card, Color, Rank};
use crate::state::GameState;
use crate::strategies::{legal_indices, most_held_color};
use crate::strategy::Strategy;

/// An opponent holding fewer cards than this is treated as a threat worth
/// spending an attack card on.
const THREAT_HAND_SIZE: usize = 5;

/// Rule-based player built around color counting.
///
/// In plain English:
/// - When the next player is close to going out, hit them with a Draw Two,
///   Wild Draw Four, or Skip if one is legal.
/// - Otherwise shed the most-held color first, most expensive card first, so
///   later turns keep the widest choice of legal plays.
/// - Hold wilds until nothing colored is playable.
/// - Call whichever color dominates the remaining hand.
///
/// All counts are derived from the hand passed into each call; nothing is
/// carried over between decisions.
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    fn next_player(state: &GameState) -> usize {
        let current = state.current_player();
        let num_players = state.num_players();
        if state.direction_is_forwards() {
            (current + 1) % num_players
        } else if current == 0 {
            num_players - 1
        } else {
            current - 1
        }
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_card(
        &mut self,
        hand: &[Card],
        up_card: Card,
        called_color: Color,
        state: &GameState,
    ) -> Option<usize> {
        let legal = legal_indices(hand, up_card, called_color);
        if legal.is_empty() {
            return None;
        }

        let next_hand_size = state.num_cards_in_hands()[Self::next_player(state)];
        if next_hand_size < THREAT_HAND_SIZE {
            for rank in [Rank::DrawTwo, Rank::WildDrawFour, Rank::Skip] {
                if let Some(&index) = legal.iter().find(|&&index| hand[index].rank() == rank) {
                    return Some(index);
                }
            }
        }

        let favorite = most_held_color(hand);
        let best_of_favorite = legal
            .iter()
            .copied()
            .filter(|&index| hand[index].color() == favorite)
            .max_by_key(|&index| (hand[index].forfeit_cost(), Reverse(index)));
        if best_of_favorite.is_some() {
            return best_of_favorite;
        }

        let best_colored = legal
            .iter()
            .copied()
            .filter(|&index| !hand[index].followed_by_call())
            .max_by_key(|&index| (hand[index].forfeit_cost(), Reverse(index)));
        best_colored.or_else(|| legal.first().copied())
    }

    fn choose_color(&mut self, hand: &[Card]) -> Color {
        most_held_color(hand)
    }
}
