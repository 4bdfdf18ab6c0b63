#![allow(dead_code)]

use pacbox::config::SimConfig;
use pacbox::game::Game;
use pacbox::map::maze::Maze;

/// One simulation step at 60 Hz, in seconds.
pub const DT: f32 = 1.0 / 60.0;

/// Straight corridor `(1..=5, 1)` with the player on the left, a pellet it can
/// never reach and a ghost boxed in on its own.
pub const CORRIDOR: [&str; 3] = ["###########", "#P....#.#G#", "###########"];

/// A single pellet next to the player; eating it clears the level.
pub const LAST_PELLET: [&str; 3] = ["######", "#P.#G#", "######"];

/// Corridor with a junction at `(3, 1)` leading down to `(3, 3)`.
pub const JUNCTION: [&str; 5] = ["########", "#P...###", "###.####", "###.#G.#", "########"];

/// Player and a hunting ghost on a collision course.
pub const HEAD_ON: [&str; 3] = ["########", "#P...G.#", "########"];

/// Player, a power pellet and a ghost on a collision course.
pub const POWER_HEAD_ON: [&str; 3] = ["#########", "#Po..G..#", "#########"];

/// Open corridor with two ghost spawns and one pellet out of the player's reach.
pub const CROWDED: [&str; 3] = ["###########", "#P     GG.#", "###########"];

/// Small loop used for the ghost policy.
pub const LOOP: [&str; 5] = ["#######", "#.....#", "#.###.#", "#.....#", "#######"];

pub fn maze(board: &[&str]) -> Maze {
    Maze::new(board).expect("test board should parse")
}

pub fn config(ghosts: usize) -> SimConfig {
    SimConfig {
        ghost_count: ghosts,
        ..SimConfig::default()
    }
}

/// A game on `board` running a single ghost.
pub fn game(board: &[&str]) -> Game {
    Game::new(maze(board), config(1)).expect("test game should build")
}

pub fn run(game: &mut Game, steps: usize) {
    for _ in 0..steps {
        game.step(DT);
    }
}
