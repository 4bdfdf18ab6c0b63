//! This module contains the main game logic and state.

use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use crate::config::SimConfig;
use crate::constants::{score, MAX_GHOSTS};
use crate::error::{GameError, GameResult};
use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::systems::collision;
use crate::systems::ghost::{Ghost, GhostSpeeds};
use crate::systems::item::{Collectible, Collectibles};
use crate::systems::movement::{Agent, Motion};
use crate::systems::player::Player;
use crate::systems::state::{Changes, RunState};

/// The ghosts of one session, in palette order.
pub type Ghosts = SmallVec<[Ghost; MAX_GHOSTS]>;

/// The whole simulation: maze, agents, collectibles and run state.
///
/// Advances only through [`Game::step`], which takes a fixed `dt`. Nothing in
/// here knows about wall-clock time or drawing.
pub struct Game {
    maze: Maze,
    config: SimConfig,
    player: Player,
    ghosts: Ghosts,
    collectibles: Collectibles,
    state: RunState,
    steps: u64,
}

impl Game {
    pub fn new(maze: Maze, config: SimConfig) -> GameResult<Game> {
        config.validate()?;

        let mut player_spawn = maze.find_player_spawn();
        if maze.is_wall(player_spawn) {
            let open = maze
                .nearest_open(player_spawn)
                .ok_or_else(|| GameError::InvalidState("maze has no walkable cell".to_string()))?;
            warn!(spawn = ?player_spawn, ?open, "Player spawn is a wall, using nearest open cell");
            player_spawn = open;
        }

        let ghosts: Ghosts = maze
            .find_ghost_spawns(config.ghost_count, config.synthesize_ghosts)
            .into_iter()
            .enumerate()
            .map(|(id, spawn)| Ghost::new(id, spawn))
            .collect();

        let collectibles = Collectibles::from_maze(&maze);
        info!(
            ghosts = ghosts.len(),
            collectibles = collectibles.len(),
            player = ?player_spawn,
            "Game initialized"
        );

        Ok(Game {
            player: Player::new(player_spawn),
            ghosts,
            collectibles,
            state: RunState::default(),
            maze,
            config,
            steps: 0,
        })
    }

    /// Builds a game on the maze shipped with the crate.
    pub fn with_reference_maze(config: SimConfig) -> GameResult<Game> {
        Game::new(Maze::reference()?, config)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn ghosts_mut(&mut self) -> &mut [Ghost] {
        &mut self.ghosts
    }

    pub fn collectibles(&self) -> &Collectibles {
        &self.collectibles
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Number of simulation steps taken since the game was created.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Hunting speed of the ghosts on the current level.
    pub fn ghost_speed(&self) -> f32 {
        self.config.ghost_speed_for_level(self.state.level())
    }

    /// Buffers a direction for the player, committed at its next legal alignment.
    pub fn set_direction_input(&mut self, direction: Direction) {
        self.player.request(direction);
    }

    pub fn toggle_pause(&mut self) {
        let running = !self.state.is_running();
        self.state.set_running(running);
        info!(paused = !running, "Pause toggled");
    }

    /// Starts a fresh run, whatever the current lives, and resumes play.
    pub fn restart(&mut self) {
        self.state.reset();
        self.state.set_running(true);
        self.collectibles.refill(&self.maze);
        self.reset_agents();
        info!("Game restarted");
    }

    /// Returns and clears the run-state fields changed since the previous call.
    pub fn take_changes(&mut self) -> Changes {
        self.state.take_changes()
    }

    /// Advances the simulation by one fixed step of `dt` seconds.
    ///
    /// Does nothing while paused. Order within a step: player turn and move,
    /// pickup, ghost decisions and moves, then a single collision check. Agents
    /// found inside a wall are moved out before anything else happens.
    pub fn step(&mut self, dt: f32) {
        if !self.state.is_running() {
            return;
        }
        self.steps += 1;
        self.repair_positions();

        self.player.step(&self.maze, self.config.player_speed, dt);
        self.collect();

        let target = self.player.agent.cell();
        let speeds = GhostSpeeds {
            hunting: self.ghost_speed(),
            frightened: self.config.ghost_frightened_speed,
        };
        for ghost in self.ghosts.iter_mut() {
            ghost.step(&self.maze, target, speeds, dt);
        }

        self.resolve_collision();
    }

    fn collect(&mut self) {
        let cell = self.player.agent.cell();
        let Some(item) = self.collectibles.take(&self.maze, cell) else {
            return;
        };

        self.state.add_score(item.score_value());
        trace!(?cell, ?item, remaining = self.collectibles.len(), "Collected");

        if item == Collectible::PowerPellet {
            for ghost in self.ghosts.iter_mut() {
                ghost.frighten(self.config.frightened_duration);
            }
            debug!(duration = self.config.frightened_duration, "Ghosts frightened");
        }

        if self.collectibles.is_empty() {
            self.clear_level();
        }
    }

    fn clear_level(&mut self) {
        self.state.level_up();
        self.state.add_score(self.config.level_clear_bonus);
        self.collectibles.refill(&self.maze);
        self.reset_agents();
    }

    fn resolve_collision(&mut self) {
        let Some(contact) = collision::first_contact(self.player.agent.position(), &self.ghosts) else {
            return;
        };

        if contact.frightened {
            self.state.add_score(score::GHOST);
            self.ghosts[contact.ghost].reset();
            debug!(ghost = contact.ghost, "Frightened ghost eaten");
            return;
        }

        debug!(ghost = contact.ghost, "Player caught");
        if self.state.lose_life() {
            self.collectibles.refill(&self.maze);
        }
        self.reset_agents();
    }

    fn reset_agents(&mut self) {
        self.player.reset();
        for ghost in self.ghosts.iter_mut() {
            ghost.reset();
        }
    }

    fn repair_positions(&mut self) {
        repair_agent(&self.maze, &mut self.player.agent, "player");
        for ghost in self.ghosts.iter_mut() {
            repair_agent(&self.maze, &mut ghost.agent, "ghost");
        }
    }
}

/// Snaps an agent that ended up inside a wall onto the closest walkable cell.
fn repair_agent(maze: &Maze, agent: &mut Agent, kind: &str) {
    let cell = agent.cell();
    if !maze.is_wall(cell) {
        return;
    }
    let Some(open) = maze.nearest_open(cell) else {
        return;
    };
    warn!(kind, ?cell, ?open, "Agent found inside a wall, snapping to nearest open cell");
    agent.motion = Motion::Aligned { cell: open };
}
