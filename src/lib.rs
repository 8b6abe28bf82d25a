//! Uno match engine with pluggable player strategies.

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod score;
pub mod state;
pub mod strategies;
pub mod strategy;

pub use crate::card::{Card, CardEffect, Color, Rank, full_deck};
pub use crate::deck::Deck;
pub use crate::error::{EmptyDeck, GameError};
pub use crate::game::{Direction, Game, GameBuilder, RoundOutcome, TurnOutcome};
pub use crate::hand::Hand;
pub use crate::score::Scoreboard;
pub use crate::state::{GameState, Turn};
pub use crate::strategies::{
    FirstPlayableStrategy, GreedyStrategy, HeuristicStrategy, RandomStrategy,
    create_strategy_from_spec, label_for_spec,
};
pub use crate::strategy::Strategy;
