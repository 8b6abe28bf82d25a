//! Scoring bookkeeping for an Uno match.
//!
//! One `Scoreboard` lives for the whole match: each round, the winner
//! collects the forfeit value of every card left in the other hands, and the
//! match winner is whoever has accumulated the most points.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player names and their running scores, in seating order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scoreboard {
    names: Vec<String>,
    scores: Vec<i32>,
}

impl Scoreboard {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let scores = vec![0; names.len()];
        Self { names, scores }
    }

    /// Awards points to a player at the end of a round.
    pub fn add_to_score(&mut self, player: usize, points: i32) {
        self.scores[player] += points;
    }

    pub fn score(&self, player: usize) -> i32 {
        self.scores[player]
    }

    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    pub fn player_name(&self, player: usize) -> &str {
        &self.names[player]
    }

    pub fn num_players(&self) -> usize {
        self.names.len()
    }

    /// The player with the highest score; the lowest index wins ties.
    pub fn winner(&self) -> usize {
        let mut winner = 0;
        let mut top_score = self.scores[0];
        for (player, &score) in self.scores.iter().enumerate().skip(1) {
            if score > top_score {
                top_score = score;
                winner = player;
            }
        }
        winner
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, score) in self.names.iter().zip(&self.scores) {
            writeln!(f, "{name:<10}: {score}")?;
        }
        Ok(())
    }
}
