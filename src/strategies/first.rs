use crate::card::{Card, Color};
use crate::state::GameState;
use crate::strategy::Strategy;

/// Simplest possible player: the lowest legal index, every time.
pub struct FirstPlayableStrategy;

impl Strategy for FirstPlayableStrategy {
    fn choose_card(
        &mut self,
        hand: &[Card],
        up_card: Card,
        called_color: Color,
        _state: &GameState,
    ) -> Option<usize> {
        hand.iter()
            .position(|card| card.can_play_on(up_card, called_color))
    }

    fn choose_color(&mut self, hand: &[Card]) -> Color {
        hand.iter()
            .map(|card| card.color())
            .find(|color| *color != Color::None)
            .unwrap_or(Color::Red)
    }
}
