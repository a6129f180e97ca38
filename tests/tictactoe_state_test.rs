//! Tests for board state, turn order and move application.

use strictly_minimax::{
    Action, Board, InvalidActionReason, Outcome, Player, actions, initial_state, player, result,
    terminal, utility, winner,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn test_player_alternates_each_ply() {
    let mut b = initial_state();
    let mut expected = Player::X;
    // Fill the board in an order that never completes a line.
    for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
        assert_eq!(player(&b), expected);
        b = result(&b, Action::new(row, col)).unwrap();
        expected = expected.opponent();
    }
    assert!(terminal(&b));
}

#[test]
fn test_initial_state_has_nine_actions() {
    assert_eq!(actions(&initial_state()).len(), 9);
}

#[test]
fn test_full_board_has_no_actions() {
    assert!(actions(&board("XOX/OXX/OXO")).is_empty());
}

#[test]
fn test_result_does_not_mutate_input() {
    let before = board("X../.O./...");
    let copy = before;
    let after = result(&before, Action::new(2, 2)).unwrap();
    assert_eq!(before, copy);
    assert_ne!(before, after);
}

#[test]
fn test_same_action_twice_fails() {
    let once = result(&initial_state(), Action::new(0, 0)).unwrap();
    let err = result(&once, Action::new(0, 0)).unwrap_err();
    assert_eq!(err.reason, InvalidActionReason::Occupied);
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_out_of_range_action_fails() {
    let err = result(&initial_state(), Action::new(3, 1)).unwrap_err();
    assert_eq!(err.reason, InvalidActionReason::OutOfBounds);
}

#[test]
fn test_winner_lines() {
    assert_eq!(winner(&board("XXX/OO./...")), Outcome::Winner(Player::X));
    assert_eq!(winner(&board("X.O/X.O/.XO")), Outcome::Winner(Player::O));
    assert_eq!(winner(&board("XO./OX./..X")), Outcome::Winner(Player::X));
    assert_eq!(winner(&board("XXO/XO./O..")), Outcome::Winner(Player::O));
}

#[test]
fn test_terminal_states() {
    assert!(terminal(&board("XOX/OXX/OXO")));
    assert!(!terminal(&board("XOX/OXX/OX.")));
    assert!(!terminal(&initial_state()));
}

#[test]
fn test_utility_values() {
    assert_eq!(utility(&board("XXX/OO./...")), 1);
    assert_eq!(utility(&board("X.O/X.O/.XO")), -1);
    assert_eq!(utility(&board("XOX/OXX/OXO")), 0);
}
