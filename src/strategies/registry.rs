use crate::error::GameError;
use crate::strategies::{FirstPlayableStrategy, GreedyStrategy, HeuristicStrategy, RandomStrategy};
use crate::strategy::Strategy;

/// Returns a normalized label for a strategy spec (the head token before any
/// ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a strategy instance from a roster-style spec. Resolution happens
/// once at match setup; the engine itself only ever sees `Box<dyn Strategy>`.
///
/// Supported specs:
/// - random[:seed]
/// - first
/// - greedy
/// - heuristic
pub fn create_strategy_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Strategy>, GameError> {
    match label_for_spec(spec).as_str() {
        "random" => {
            let custom_seed = spec
                .split_once(':')
                .and_then(|(_, value)| value.trim().parse::<u64>().ok())
                .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
            Ok(Box::new(RandomStrategy::from_seed(custom_seed)))
        }
        "first" => Ok(Box::new(FirstPlayableStrategy)),
        "greedy" => Ok(Box::new(GreedyStrategy)),
        "heuristic" => Ok(Box::new(HeuristicStrategy)),
        _ => Err(GameError::UnknownStrategy(spec.to_string())),
    }
}
