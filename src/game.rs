use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::card::{Card, Color, INIT_HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::{EmptyDeck, GameError};
use crate::hand::Hand;
use crate::score::Scoreboard;
use crate::state::{GameState, Turn};
use crate::strategy::Strategy;

const DEFAULT_SEED: u64 = 0x5EED_CA4D_5EED_CA4D;

/// Rotation order of play. Reverse cards toggle it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Forwards,
    Backwards,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forwards => Direction::Backwards,
            Direction::Backwards => Direction::Forwards,
        }
    }

    pub fn is_forwards(self) -> bool {
        matches!(self, Direction::Forwards)
    }
}

/// Result of a single call to `Game::take_turn`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TurnOutcome {
    /// Play continues with the next player.
    Continue,
    /// The acting player emptied their hand; `points` were added to their
    /// scoreboard entry.
    Win { player: usize, points: i32 },
    /// A required draw failed even after remixing: the round is a draw.
    DeckExhausted,
}

/// Result of a completed round.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoundOutcome {
    Win { player: usize, points: i32 },
    /// Deck permanently exhausted; nobody scores.
    DeckExhausted,
}

/// Builder that assembles the roster and enables deterministic deck and
/// turn-order injection for tests and replayed scenarios.
pub struct GameBuilder {
    players: Vec<(String, Box<dyn Strategy>)>,
    seed: u64,
    deck: Option<Vec<Card>>,
    first_player: Option<usize>,
    hand_size: usize,
    verbose: bool,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            seed: DEFAULT_SEED,
            deck: None,
            first_player: None,
            hand_size: INIT_HAND_SIZE,
            verbose: false,
        }
    }

    /// Adds a contestant to the roster, in seating order.
    pub fn add_player(mut self, name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        self.players.push((name.into(), strategy));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Injects a draw pile, used as-is (unshuffled, top is the last element).
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Pins the opening player instead of picking one at random.
    pub fn with_first_player(mut self, player: usize) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Overrides the standard seven-card deal, for short test rounds.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Narrate the round on stdout as it is played.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A single round of Uno within a match.
///
/// The engine owns the deck and every hand; strategies only ever observe
/// copies. `take_turn` runs one turn of the state machine, `play` runs the
/// round to completion. Cumulative scores live in the `Scoreboard` passed to
/// those calls, so one scoreboard accumulates across the rounds of a match.
pub struct Game {
    deck: Deck,
    hands: Vec<Hand>,
    up_card: Card,
    first_card: Card,
    direction: Direction,
    current_player: usize,
    called_color: Color,
    current_call: Color,
    turn_log: Vec<Turn>,
    finished: bool,
    verbose: bool,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder {
            players,
            seed,
            deck,
            first_player,
            hand_size,
            verbose,
        } = builder;
        let num_players = players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 10",
            ));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let current_player = match first_player {
            Some(player) if player < num_players => player,
            Some(_) => {
                return Err(GameError::InvalidConfiguration(
                    "first player is out of range",
                ));
            }
            None => rng.gen_range(0..num_players),
        };
        let mut deck = match deck {
            Some(cards) => Deck::from_cards(cards, rng),
            None => Deck::new(rng),
        };

        let mut hands: Vec<Hand> = players
            .into_iter()
            .map(|(name, strategy)| Hand::new(name, strategy))
            .collect();
        for hand in &mut hands {
            for _ in 0..hand_size {
                let card = deck.draw().map_err(|_| {
                    GameError::InvalidConfiguration("deck exhausted while dealing hands")
                })?;
                hand.add_card(card);
            }
        }
        deck.make_first_card_non_wild();
        let up_card = deck
            .draw()
            .map_err(|_| GameError::InvalidConfiguration("deck exhausted while dealing hands"))?;

        Ok(Game {
            deck,
            hands,
            up_card,
            first_card: up_card,
            direction: Direction::Forwards,
            current_player,
            called_color: Color::None,
            current_call: Color::None,
            turn_log: Vec::new(),
            finished: false,
            verbose,
        })
    }

    /// Plays the round from start to finish, crediting the winner's forfeit
    /// points to the scoreboard. Errors are strategy contract violations and
    /// abort the match.
    pub fn play(&mut self, scoreboard: &mut Scoreboard) -> Result<RoundOutcome, GameError> {
        self.println(&format!("Initial up-card is {}.", self.up_card));
        loop {
            match self.take_turn(scoreboard)? {
                TurnOutcome::Continue => {}
                TurnOutcome::Win { player, points } => {
                    return Ok(RoundOutcome::Win { player, points });
                }
                TurnOutcome::DeckExhausted => {
                    self.println("Deck exhausted! This game is a draw.");
                    return Ok(RoundOutcome::DeckExhausted);
                }
            }
        }
    }

    /// Runs one turn of the state machine: ask the current hand for a play,
    /// force a single draw-and-retry if it passes, install the new up-card
    /// and any color call, log the turn, check the win, then apply the card
    /// effect to the turn order.
    pub fn take_turn(&mut self, scoreboard: &mut Scoreboard) -> Result<TurnOutcome, GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        let player = self.current_player;
        self.print(&format!(
            "{} ({})",
            self.hands[player].name(),
            self.hands[player]
        ));

        let mut had_to_draw = false;
        let mut played = self.request_play(scoreboard)?;
        if played.is_none() {
            had_to_draw = true;
            match self.deck.draw() {
                Ok(card) => {
                    self.print(&format!(" has to draw ({card})."));
                    self.hands[player].add_card(card);
                    played = self.request_play(scoreboard)?;
                }
                Err(EmptyDeck) => {
                    self.println("");
                    self.finished = true;
                    return Ok(TurnOutcome::DeckExhausted);
                }
            }
        }

        if let Some(card) = played {
            self.print(&format!(" plays {card} on {}.", self.up_card));
            self.deck.discard(self.up_card);
            self.up_card = card;
            if card.followed_by_call() {
                let color = self.hands[player].call_color()?;
                self.called_color = color;
                self.current_call = color;
                self.print(&format!(" (and calls {color})."));
            } else {
                self.called_color = Color::None;
            }
        }

        self.turn_log.push(Turn {
            player_id: player,
            card_played: played,
            color_called: self.current_call,
            had_to_draw,
        });

        if self.hands[player].is_empty() {
            let points: i32 = self.hands.iter().map(Hand::count_cards).sum();
            scoreboard.add_to_score(player, points);
            self.println(&format!(
                "\n{} wins! (and collects {points} points.)",
                self.hands[player].name()
            ));
            self.println(&format!("---------------\n{scoreboard}"));
            self.finished = true;
            return Ok(TurnOutcome::Win { player, points });
        }
        if self.hands[player].len() == 1 {
            self.print(" UNO!");
        }
        self.println("");

        match self.apply_effect(played) {
            Ok(()) => Ok(TurnOutcome::Continue),
            Err(EmptyDeck) => {
                self.finished = true;
                Ok(TurnOutcome::DeckExhausted)
            }
        }
    }

    fn request_play(&mut self, scoreboard: &Scoreboard) -> Result<Option<Card>, GameError> {
        let state = self.snapshot(scoreboard);
        let up_card = self.up_card;
        let called_color = self.called_color;
        self.hands[self.current_player].play(up_card, called_color, &state)
    }

    /// Applies an effect descriptor: flip the direction, feed forced draws to
    /// the next player, then advance. A pass (no card) is the effect-free
    /// single advance.
    fn apply_effect(&mut self, played: Option<Card>) -> Result<(), EmptyDeck> {
        let effect = played.map(Card::effect).unwrap_or_default();
        if effect.flips_direction {
            self.direction = self.direction.flipped();
        }
        for _ in 0..effect.forced_draws {
            let target = self.next_player();
            let card = self.deck.draw()?;
            self.hands[target].add_card(card);
            self.println(&format!("  {} draws {card}.", self.hands[target].name()));
        }
        for _ in 0..effect.advances {
            self.current_player = self.next_player();
        }
        Ok(())
    }

    fn snapshot(&self, scoreboard: &Scoreboard) -> GameState {
        GameState::new(
            self.first_card,
            self.hands.iter().map(Hand::len).collect(),
            scoreboard.scores().to_vec(),
            self.deck.discard_pile_len() + 1,
            self.current_player,
            self.direction.is_forwards(),
            self.turn_log.clone(),
        )
    }

    /// Id of the player who acts next if the current player does not change
    /// the turn order with an action card.
    pub fn next_player(&self) -> usize {
        match self.direction {
            Direction::Forwards => (self.current_player + 1) % self.hands.len(),
            Direction::Backwards => match self.current_player {
                0 => self.hands.len() - 1,
                current => current - 1,
            },
        }
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn up_card(&self) -> Card {
        self.up_card
    }

    /// The color in force for legality checks: the called color while the
    /// up-card is a wild, `Color::None` otherwise.
    pub fn called_color(&self) -> Color {
        self.called_color
    }

    pub fn num_players(&self) -> usize {
        self.hands.len()
    }

    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.iter().map(Hand::len).collect()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turn_log
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn print(&self, text: &str) {
        if self.verbose {
            print!("{text}");
        }
    }

    fn println(&self, text: &str) {
        if self.verbose {
            println!("{text}");
        }
    }
}
