use pacbox::constants::STARTING_LIVES;
use pacbox::systems::state::{Changes, RunState};
use speculoos::prelude::*;

#[test]
fn test_initial_values() {
    let state = RunState::default();
    assert_that(&state.score()).is_equal_to(0);
    assert_that(&state.lives()).is_equal_to(STARTING_LIVES);
    assert_that(&state.level()).is_equal_to(1);
    assert_that(&state.is_running()).is_true();
}

#[test]
fn test_changes_are_tracked_per_field() {
    let mut state = RunState::default();
    state.take_changes();

    state.add_score(0);
    assert_that(&state.take_changes()).is_equal_to(Changes::empty());

    state.add_score(10);
    assert_that(&state.take_changes()).is_equal_to(Changes::SCORE);

    state.lose_life();
    assert_that(&state.take_changes()).is_equal_to(Changes::LIVES);

    state.level_up();
    assert_that(&state.take_changes()).is_equal_to(Changes::LEVEL);
}

#[test]
fn test_game_over_reports_all_reset_fields() {
    let mut state = RunState::default();
    state.add_score(500);
    state.level_up();
    state.lose_life();
    state.lose_life();
    state.take_changes();

    assert_that(&state.lose_life()).is_true();
    assert_that(&state.take_changes()).is_equal_to(Changes::all());
    assert_that(&state.lives()).is_equal_to(STARTING_LIVES);
}

#[test]
fn test_reset_keeps_running_flag() {
    let mut state = RunState::default();
    state.set_running(false);
    state.reset();
    assert_that(&state.is_running()).is_false();
}
