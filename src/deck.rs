use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};
use crate::error::EmptyDeck;

/// An Uno deck: a draw pile (top is the last element) paired with the pile of
/// cards discarded since the last remix. A card lives in exactly one place at
/// a time; the multiset union of both piles, all hands, and the live up-card
/// is always the fixed 108-card composition.
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    /// A full, shuffled deck.
    pub fn new(rng: StdRng) -> Self {
        let mut deck = Self {
            draw_pile: full_deck(),
            discard_pile: Vec::new(),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// A deck with an injected draw pile, used as-is (unshuffled). This is
    /// the deterministic path for tests and replayed scenarios.
    pub fn from_cards(cards: Vec<Card>, rng: StdRng) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Shuffles the draw pile in place (unbiased Fisher-Yates).
    pub fn shuffle(&mut self) {
        self.draw_pile.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card of the draw pile. An empty draw pile
    /// is remixed from the discard pile and retried once; `EmptyDeck` means
    /// both piles were empty and the deck is permanently exhausted.
    pub fn draw(&mut self) -> Result<Card, EmptyDeck> {
        if let Some(card) = self.draw_pile.pop() {
            return Ok(card);
        }
        if self.discard_pile.is_empty() {
            return Err(EmptyDeck);
        }
        self.remix();
        self.draw_pile.pop().ok_or(EmptyDeck)
    }

    /// Puts a card out of play until the next remix.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Returns all discarded cards to the draw pile and reshuffles.
    pub fn remix(&mut self) {
        self.draw_pile.append(&mut self.discard_pile);
        self.shuffle();
    }

    /// Swaps the top card with a random earlier one until it is not a wild,
    /// so the opening up-card never demands a color call. Divergence would
    /// require every remaining card to be a wild, which the 108-card
    /// composition rules out after any deal.
    pub fn make_first_card_non_wild(&mut self) {
        let Some(last) = self.draw_pile.len().checked_sub(1) else {
            return;
        };
        if last == 0 {
            return;
        }
        while self.draw_pile[last].followed_by_call() {
            let other = self.rng.gen_range(0..last);
            self.draw_pile.swap(last, other);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }
}
