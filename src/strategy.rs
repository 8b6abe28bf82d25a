use crate::card::{Card, Color};
use crate::state::GameState;

/// Interface for defining custom Uno players.
///
/// `choose_card` receives a copy of the hand, the up-card, the active called
/// color (meaningful only when the up-card is a wild), and a read-only game
/// snapshot, and answers with the index of the card to play or `None` to
/// claim no legal play (forcing a draw). `choose_color` is invoked right
/// after this player plays a wild and must name one of the four real colors.
///
/// The engine verifies every answer and aborts the match on a violation; see
/// `GameError`.
pub trait Strategy {
    fn choose_card(
        &mut self,
        hand: &[Card],
        up_card: Card,
        called_color: Color,
        state: &GameState,
    ) -> Option<usize>;

    fn choose_color(&mut self, hand: &[Card]) -> Color;
}
