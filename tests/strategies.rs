use unosim::{
    Card, Color, FirstPlayableStrategy, GameState, GreedyStrategy, HeuristicStrategy,
    RandomStrategy, Strategy, create_strategy_from_spec, label_for_spec,
};

const R7: Card = Card::Number(Color::Red, 7);

fn state(hand_sizes: &[usize], current_player: usize, forwards: bool) -> GameState {
    GameState::new(
        R7,
        hand_sizes.to_vec(),
        vec![0; hand_sizes.len()],
        1,
        current_player,
        forwards,
        Vec::new(),
    )
}

#[test]
fn first_playable_picks_the_lowest_legal_index() {
    let hand = [
        Card::Number(Color::Blue, 2),
        Card::Number(Color::Red, 4),
        Card::Wild,
    ];
    let choice = FirstPlayableStrategy.choose_card(&hand, R7, Color::None, &state(&[3, 3], 0, true));
    assert_eq!(choice, Some(1));
}

#[test]
fn first_playable_passes_without_a_legal_card() {
    let hand = [Card::Number(Color::Blue, 2), Card::Number(Color::Green, 3)];
    let choice = FirstPlayableStrategy.choose_card(&hand, R7, Color::None, &state(&[2, 2], 0, true));
    assert_eq!(choice, None);
}

#[test]
fn greedy_sheds_the_most_expensive_card() {
    let hand = [
        Card::Number(Color::Red, 4),
        Card::Skip(Color::Red),
        Card::Wild,
    ];
    let choice = GreedyStrategy.choose_card(&hand, R7, Color::None, &state(&[3, 3], 0, true));
    assert_eq!(choice, Some(2));
}

#[test]
fn greedy_breaks_cost_ties_towards_the_front() {
    let hand = [Card::Skip(Color::Red), Card::Reverse(Color::Red)];
    let choice = GreedyStrategy.choose_card(&hand, R7, Color::None, &state(&[2, 2], 0, true));
    assert_eq!(choice, Some(0));
}

#[test]
fn greedy_calls_its_most_held_color() {
    let hand = [
        Card::Number(Color::Blue, 2),
        Card::Number(Color::Red, 4),
        Card::Number(Color::Red, 9),
        Card::Wild,
    ];
    assert_eq!(GreedyStrategy.choose_color(&hand), Color::Red);
}

#[test]
fn heuristic_attacks_an_opponent_about_to_go_out() {
    let hand = [
        Card::Number(Color::Red, 9),
        Card::DrawTwo(Color::Red),
        Card::Wild,
    ];
    // Next player holds two cards; spend the draw-two on them.
    let choice = HeuristicStrategy.choose_card(&hand, R7, Color::None, &state(&[3, 2], 0, true));
    assert_eq!(choice, Some(1));
}

#[test]
fn heuristic_respects_play_direction_when_sizing_up_the_threat() {
    // Attack priority puts the draw-two first; cost order with the front
    // tie-break puts the skip first. Which branch runs depends on who plays
    // next.
    let hand = [Card::Skip(Color::Red), Card::DrawTwo(Color::Red)];
    let forwards = HeuristicStrategy.choose_card(&hand, R7, Color::None, &state(&[2, 1, 7], 0, true));
    assert_eq!(forwards, Some(1));
    // Backwards from seat 0 the next player is the last seat, which is
    // comfortable; the low seat-1 hand no longer matters.
    let backwards =
        HeuristicStrategy.choose_card(&hand, R7, Color::None, &state(&[2, 1, 7], 0, false));
    assert_eq!(backwards, Some(0));
}

#[test]
fn heuristic_sheds_its_majority_color_first() {
    let hand = [
        Card::Number(Color::Blue, 3),
        Card::Number(Color::Red, 2),
        Card::Number(Color::Red, 9),
        Card::Wild,
    ];
    let choice = HeuristicStrategy.choose_card(&hand, R7, Color::None, &state(&[4, 7], 0, true));
    assert_eq!(choice, Some(2));
}

#[test]
fn heuristic_holds_wilds_until_nothing_else_plays() {
    let wild_is_last_resort = [Card::Wild, Card::Number(Color::Green, 5)];
    let choice =
        HeuristicStrategy.choose_card(&wild_is_last_resort, R7, Color::None, &state(&[2, 7], 0, true));
    assert_eq!(choice, Some(0));

    let colored_play_available = [Card::Wild, Card::Number(Color::Red, 2)];
    let choice =
        HeuristicStrategy.choose_card(&colored_play_available, R7, Color::None, &state(&[2, 7], 0, true));
    assert_eq!(choice, Some(1));
}

#[test]
fn heuristic_calls_its_most_held_color() {
    let hand = [
        Card::Number(Color::Green, 1),
        Card::Number(Color::Green, 4),
        Card::Number(Color::Yellow, 4),
    ];
    assert_eq!(HeuristicStrategy.choose_color(&hand), Color::Green);
}

#[test]
fn random_only_ever_picks_legal_cards() {
    let hand = [
        Card::Number(Color::Red, 4),
        Card::Number(Color::Green, 7),
        Card::Reverse(Color::Green),
        Card::Number(Color::Blue, 2),
        Card::Skip(Color::Blue),
        Card::Wild,
    ];
    let mut strategy = RandomStrategy::from_seed(99);
    let snapshot = state(&[6, 6], 0, true);
    for _ in 0..100 {
        let choice = strategy.choose_card(&hand, R7, Color::Red, &snapshot);
        assert!(matches!(choice, Some(0) | Some(1) | Some(5)));
    }
}

#[test]
fn random_passes_when_nothing_is_legal() {
    let hand = [Card::Number(Color::Blue, 2), Card::Number(Color::Green, 3)];
    let mut strategy = RandomStrategy::from_seed(99);
    let choice = strategy.choose_card(&hand, R7, Color::None, &state(&[2, 2], 0, true));
    assert_eq!(choice, None);
}

#[test]
fn random_calls_a_real_color() {
    let mut strategy = RandomStrategy::from_seed(7);
    for _ in 0..20 {
        assert_ne!(strategy.choose_color(&[]), Color::None);
    }
}

#[test]
fn registry_resolves_known_specs() {
    for spec in ["random", "random:42", "first", "greedy", "heuristic", "GREEDY"] {
        assert!(create_strategy_from_spec(spec, 0, 1).is_ok(), "spec {spec}");
    }
    assert!(create_strategy_from_spec("alphazero", 0, 1).is_err());
}

#[test]
fn spec_labels_are_normalized() {
    assert_eq!(label_for_spec("Random:42"), "random");
    assert_eq!(label_for_spec("  GREEDY  "), "greedy");
}
