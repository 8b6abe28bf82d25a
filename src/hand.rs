use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::card::{Card, Color};
use crate::error::GameError;
use crate::state::GameState;
use crate::strategy::Strategy;

/// One player's cards, bound to the strategy that plays them.
///
/// The engine is the only writer: cards enter through `add_card` (draws and
/// the deal) and leave through a verified `play`. Strategies only ever see a
/// copy of the card list.
pub struct Hand {
    cards: Vec<Card>,
    strategy: Box<dyn Strategy>,
    name: String,
}

impl Hand {
    pub(crate) fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            cards: Vec::new(),
            strategy,
            name: name.into(),
        }
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Asks the bound strategy for a play and verifies it. Returns the chosen
    /// card, removed from the hand, or `None` when the strategy legitimately
    /// has nothing to play (the engine then forces a draw).
    ///
    /// The verification contract: an in-range index must reference a card
    /// that can play on the up-card, and a pass is only legal when no held
    /// card can play. Anything else aborts the match.
    pub(crate) fn play(
        &mut self,
        up_card: Card,
        called_color: Color,
        state: &GameState,
    ) -> Result<Option<Card>, GameError> {
        let snapshot = self.cards.clone();
        let choice = catch_unwind(AssertUnwindSafe(|| {
            self.strategy
                .choose_card(&snapshot, up_card, called_color, state)
        }))
        .map_err(|payload| self.fault(payload))?;
        self.verify(choice, up_card, called_color)?;
        Ok(choice.map(|index| self.cards.remove(index)))
    }

    /// Asks the bound strategy which color to call after it played a wild.
    pub(crate) fn call_color(&mut self) -> Result<Color, GameError> {
        let snapshot = self.cards.clone();
        let color = catch_unwind(AssertUnwindSafe(|| self.strategy.choose_color(&snapshot)))
            .map_err(|payload| self.fault(payload))?;
        if color == Color::None {
            return Err(GameError::IllegalColorCall {
                player: self.name.clone(),
                hand: self.to_string(),
                called: color,
            });
        }
        Ok(color)
    }

    fn verify(
        &self,
        choice: Option<usize>,
        up_card: Card,
        called_color: Color,
    ) -> Result<(), GameError> {
        let ok = match choice {
            Some(index) => self
                .cards
                .get(index)
                .is_some_and(|card| card.can_play_on(up_card, called_color)),
            None => !self
                .cards
                .iter()
                .any(|card| card.can_play_on(up_card, called_color)),
        };
        if ok {
            Ok(())
        } else {
            Err(GameError::IllegalPlay {
                player: self.name.clone(),
                hand: self.to_string(),
                up_card,
                called_color,
                choice: match choice {
                    Some(index) => index.to_string(),
                    None => String::from("pass"),
                },
            })
        }
    }

    fn fault(&self, payload: Box<dyn Any + Send>) -> GameError {
        let reason = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            String::from("strategy panicked")
        };
        GameError::StrategyFault {
            player: self.name.clone(),
            reason,
        }
    }

    /// The forfeit value of the hand as it stands: the sum of the forfeit
    /// costs of every card still held.
    pub fn count_cards(&self) -> i32 {
        self.cards.iter().map(|card| card.forfeit_cost()).sum()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// An empty hand is the winning condition.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
