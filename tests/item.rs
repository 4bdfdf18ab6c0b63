use glam::IVec2;
use pacbox::constants::{score, RAW_BOARD};
use pacbox::map::maze::Maze;
use pacbox::systems::item::{Collectible, Collectibles};
use speculoos::prelude::*;

mod common;

#[test]
fn test_score_values() {
    assert_that(&Collectible::Pellet.score_value()).is_equal_to(score::PELLET);
    assert_that(&Collectible::PowerPellet.score_value()).is_equal_to(score::POWER_PELLET);
    assert_that(&(Collectible::Pellet.score_value() < Collectible::PowerPellet.score_value())).is_true();
}

#[test]
fn test_reference_board_collectibles() {
    let maze = Maze::reference().unwrap();
    let collectibles = Collectibles::from_maze(&maze);
    let authored: usize = RAW_BOARD
        .iter()
        .map(|row| row.chars().filter(|c| matches!(c, '.' | 'o')).count())
        .sum();

    assert_that(&collectibles.total()).is_equal_to(authored);
    assert_that(&collectibles.len()).is_equal_to(authored);
    assert_that(&collectibles.contains(IVec2::new(1, 3))).is_true();
    assert_that(&collectibles.contains(maze.find_player_spawn())).is_false();
    assert_that(&collectibles.contains(IVec2::new(0, 0))).is_false();
}

#[test]
fn test_take_removes_once() {
    let maze = common::maze(&common::POWER_HEAD_ON);
    let mut collectibles = Collectibles::from_maze(&maze);
    let total = collectibles.len();

    assert_that(&collectibles.take(&maze, IVec2::new(2, 1))).is_equal_to(Some(Collectible::PowerPellet));
    assert_that(&collectibles.take(&maze, IVec2::new(2, 1))).is_none();
    assert_that(&collectibles.take(&maze, IVec2::new(3, 1))).is_equal_to(Some(Collectible::Pellet));
    assert_that(&collectibles.take(&maze, IVec2::new(1, 1))).is_none();
    assert_that(&collectibles.take(&maze, IVec2::new(-3, 9))).is_none();
    assert_that(&collectibles.len()).is_equal_to(total - 2);
}

#[test]
fn test_refill_restores_every_collectible() {
    let maze = common::maze(&common::CORRIDOR);
    let mut collectibles = Collectibles::from_maze(&maze);
    for x in 2..=5 {
        collectibles.take(&maze, IVec2::new(x, 1));
    }
    assert_that(&collectibles.len()).is_equal_to(1);

    collectibles.refill(&maze);

    assert_that(&collectibles.len()).is_equal_to(collectibles.total());
    assert_that(&collectibles.is_empty()).is_false();
}
