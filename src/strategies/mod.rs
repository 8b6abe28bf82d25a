pub mod first;
pub mod greedy;
pub mod heuristic;
pub mod random;
pub mod registry;

pub use first::FirstPlayableStrategy;
pub use greedy::GreedyStrategy;
pub use heuristic::HeuristicStrategy;
pub use random::RandomStrategy;
pub use registry::{create_strategy_from_spec, label_for_spec};

use crate::card::{Card, Color};

/// Indices of every card in `hand` that may legally be played on the up-card.
pub fn legal_indices(hand: &[Card], up_card: Card, called_color: Color) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| card.can_play_on(up_card, called_color))
        .map(|(index, _)| index)
        .collect()
}

/// The color held most often in `hand`, counting only colored cards. Ties go
/// to deck order; a hand of nothing but wilds gets green.
pub fn most_held_color(hand: &[Card]) -> Color {
    let mut best = Color::Green;
    let mut best_count = 0;
    for color in Color::REAL {
        let count = hand.iter().filter(|card| card.color() == color).count();
        if count > best_count {
            best_count = count;
            best = color;
        }
    }
    best
}
