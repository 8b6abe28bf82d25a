use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, Color};
use crate::state::GameState;
use crate::strategies::legal_indices;
use crate::strategy::Strategy;

/// Baseline player that samples uniformly from its legal plays.
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose_card(
        &mut self,
        hand: &[Card],
        up_card: Card,
        called_color: Color,
        _state: &GameState,
    ) -> Option<usize> {
        legal_indices(hand, up_card, called_color)
            .choose(&mut self.rng)
            .copied()
    }

    fn choose_color(&mut self, _hand: &[Card]) -> Color {
        Color::REAL
            .choose(&mut self.rng)
            .copied()
            .expect("four real colors to choose from")
    }
}
