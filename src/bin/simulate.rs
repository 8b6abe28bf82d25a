use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use unosim::{Game, RoundOutcome, Scoreboard, create_strategy_from_spec};

/// Default base seed for deterministic matches; each game derives its own.
const DEFAULT_SEED: u64 = 0xDEA1_ED5E_ED00_0108;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Run a multi-game Uno match between roster players."
)]
struct Args {
    /// Roster file: one "name,strategy" pair per line
    /// (strategies: random[:seed], first, greedy, heuristic)
    players_file: PathBuf,

    /// Number of games to play in the match
    games: usize,

    /// Suppress the turn-by-turn narration
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Base RNG seed (deck, turn order and bot RNGs derive from it)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,
}

struct PlayerSpec {
    name: String,
    strategy: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let roster = load_roster(&args.players_file)?;
    let mut scoreboard = Scoreboard::new(roster.iter().map(|player| player.name.clone()));

    let mut drawn_games = 0usize;
    for game_number in 0..args.games {
        let game_seed = args.seed.wrapping_add(game_number as u64);
        let mut builder = Game::builder()
            .with_seed(game_seed)
            .verbose(!args.quiet);
        for (index, player) in roster.iter().enumerate() {
            let strategy = create_strategy_from_spec(&player.strategy, index, game_seed)?;
            builder = builder.add_player(player.name.clone(), strategy);
        }
        let mut game = builder.build()?;
        if let RoundOutcome::DeckExhausted = game.play(&mut scoreboard)? {
            drawn_games += 1;
        }
    }

    println!("{scoreboard}");
    if drawn_games > 0 {
        println!("({drawn_games} of {} games ended in a draw.)", args.games);
    }
    let winner = scoreboard.winner();
    println!("{} wins the match!", scoreboard.player_name(winner));
    Ok(())
}

fn load_roster(path: &Path) -> Result<Vec<PlayerSpec>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
    let mut roster = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((name, strategy)) = line.split_once(',') else {
            return Err(format!(
                "{}:{}: expected 'name,strategy', got '{line}'",
                path.display(),
                line_number + 1
            )
            .into());
        };
        roster.push(PlayerSpec {
            name: name.trim().to_string(),
            strategy: strategy.trim().to_string(),
        });
    }
    if roster.len() < 2 {
        return Err("roster must contain at least two players".into());
    }
    Ok(roster)
}
