use std::time::Instant;

use glam::UVec2;
use tracing::{debug, error, info, trace};

use crate::clock::FixedStepClock;
use crate::events::GameCommand;
use crate::formatter;
use crate::game::Game;
use crate::hud::Hooks;
use crate::input::{Bindings, Key};
use crate::map::direction::Direction;
use crate::map::render::MapRenderer;
use crate::render::{Surface, Viewport};
use crate::systems::render::render_game;
use crate::systems::state::Changes;

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Schedule another frame.
    Continue,
    /// The session was disposed; stop scheduling frames.
    Stopped,
}

/// A running game bound to a host.
///
/// The host calls [`Session::frame`] from its frame callback and forwards
/// input. Run-state changes flow back through the [`Hooks`].
pub struct Session<H: Hooks> {
    game: Game,
    hooks: H,
    clock: FixedStepClock,
    bindings: Bindings,
    disposed: bool,
}

impl<H: Hooks> Session<H> {
    /// Starts a session and reports the initial score, lives and level.
    pub fn start(game: Game, hooks: H) -> Self {
        let mut session = Self {
            game,
            hooks,
            clock: FixedStepClock::default(),
            bindings: Bindings::default(),
            disposed: false,
        };
        session.report_changes();
        info!("Session started");
        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Runs one frame: advances the clock, simulates the whole steps it yields
    /// unless paused, notifies the hooks, then paints onto `surface`.
    ///
    /// Rendering errors are logged and do not stop the session.
    pub fn frame<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S, container: UVec2) -> FrameStatus {
        if self.disposed {
            return FrameStatus::Stopped;
        }
        formatter::increment_frame();

        let steps = self.clock.advance(now);
        if self.game.is_running() {
            let dt = self.clock.step().as_secs_f32();
            for _ in 0..steps {
                self.game.step(dt);
            }
            trace!(steps, "Simulated");
        } else {
            self.clock.drain();
        }
        self.report_changes();

        let viewport = Viewport::fit(container, MapRenderer::board_size(self.game.maze()));
        if let Err(e) = render_game(&self.game, surface, &viewport) {
            error!("Failed to draw game: {e}");
        }

        FrameStatus::Continue
    }

    /// Looks `key` up in the bindings and runs its command. Returns whether the
    /// key was bound.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match self.bindings.command_for(key) {
            Some(command) => {
                self.handle_command(command);
                true
            }
            None => false,
        }
    }

    pub fn handle_command(&mut self, command: GameCommand) {
        if self.disposed {
            return;
        }
        let name: &str = command.as_ref();
        debug!(command = name, "Handling command");
        match command {
            GameCommand::MovePlayer(direction) => self.set_direction_input(direction),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Restart => self.restart(),
            GameCommand::Close => self.request_close(),
        }
    }

    pub fn set_direction_input(&mut self, direction: Direction) {
        if self.disposed {
            return;
        }
        self.game.set_direction_input(direction);
    }

    pub fn toggle_pause(&mut self) {
        if self.disposed {
            return;
        }
        self.game.toggle_pause();
    }

    /// Starts over with a fresh run and resumes play.
    pub fn restart(&mut self) {
        if self.disposed {
            return;
        }
        self.game.restart();
        self.report_changes();
    }

    /// Forwards a close request to the host.
    pub fn request_close(&mut self) {
        if self.disposed {
            return;
        }
        info!("Close requested");
        self.hooks.on_close();
    }

    /// Stops the session. Later frames return [`FrameStatus::Stopped`] and input
    /// is ignored. Calling it again does nothing.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        info!(steps = self.game.steps(), "Session disposed");
    }

    fn report_changes(&mut self) {
        let changes = self.game.take_changes();
        let state = self.game.state();
        if changes.contains(Changes::SCORE) {
            self.hooks.on_score_change(state.score());
        }
        if changes.contains(Changes::LIVES) {
            self.hooks.on_lives_change(state.lives());
        }
        if changes.contains(Changes::LEVEL) {
            self.hooks.on_level_change(state.level());
        }
    }
}

impl<H: Hooks> Drop for Session<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
