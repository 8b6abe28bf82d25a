use thiserror::Error;

use crate::card::{Card, Color};

/// A draw was attempted while both the draw pile and the discard pile were
/// empty. `Deck::draw` recovers from an empty draw pile by remixing the
/// discard pile on its own, so this error only surfaces when the deck is
/// permanently exhausted; the engine then ends the round as a draw.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("draw pile and discard pile are both empty")]
pub struct EmptyDeck;

/// Fatal match errors. Apart from `InvalidConfiguration` and
/// `UnknownStrategy`, which are raised during setup, these are contract
/// violations by a pluggable strategy and abort the running match.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(
        "{player} has made an illegal play\n\
         hand: {hand}\n\
         up-card: {up_card}\n\
         called color: {called_color}\n\
         chosen index: {choice}"
    )]
    IllegalPlay {
        player: String,
        hand: String,
        up_card: Card,
        called_color: Color,
        choice: String,
    },
    #[error(
        "{player} has called an illegal color\n\
         hand: {hand}\n\
         called color: {called}"
    )]
    IllegalColorCall {
        player: String,
        hand: String,
        called: Color,
    },
    #[error("strategy failure in code for player {player}: {reason}")]
    StrategyFault { player: String, reason: String },
    #[error("unrecognized strategy spec: {0}")]
    UnknownStrategy(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("the round is already over")]
    GameOver,
}
