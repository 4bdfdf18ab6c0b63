#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use glam::UVec2;
use sdl2::event::{Event, WindowEvent};
use tracing::{debug, info, warn};

use pacbox::app::{FrameStatus, Session};
use pacbox::config::SimConfig;
use pacbox::constants::FIXED_STEP;
use pacbox::game::Game;
use pacbox::hud::HudState;
use pacbox::logging::setup_logging;
use pacbox::map::render::MapRenderer;
use pacbox::platform::desktop::{key_from_keycode, sleep, CanvasSurface};
use pacbox::render::viewport::{CHROME, MAX_SCALE};

/// Target duration of one host frame.
const LOOP_TIME: Duration = FIXED_STEP;

fn main() -> Result<()> {
    setup_logging();

    let config = SimConfig::load()?;
    let game = Game::with_reference_maze(config)?;
    let board = MapRenderer::board_size(game.maze());

    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
    let window = video_subsystem
        .window("Pac-BOX", (board.x * MAX_SCALE) as u32, (board.y * MAX_SCALE) as u32)
        .resizable()
        .position_centered()
        .build()?;
    let mut canvas = window.into_canvas().accelerated().build()?;
    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

    let mut session = Session::start(game, HudState::default());
    let mut focused = true;
    info!("Entering main loop");

    loop {
        let start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => session.request_close(),
                Event::KeyDown { keycode: Some(keycode), .. } => {
                    if let Some(key) = key_from_keycode(keycode) {
                        session.handle_key(key);
                    }
                }
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::FocusGained => focused = true,
                    WindowEvent::FocusLost => {
                        debug!("Window lost focus");
                        focused = false;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        if session.hooks().close_requested {
            session.dispose();
        }

        // The window has no chrome of its own, so hand the viewport the full area plus the margin it expects
        let (width, height) = canvas.window().size();
        let container = UVec2::new(width, height) + CHROME;
        let status = session.frame(start, &mut CanvasSurface::new(&mut canvas), container);
        if status == FrameStatus::Stopped {
            break;
        }
        canvas.present();

        if session.hooks_mut().take_dirty() {
            let title = session.hooks().title();
            canvas.window_mut().set_title(&title)?;
        }

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            sleep(LOOP_TIME - elapsed, focused);
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - LOOP_TIME);
        }
    }

    info!("Exiting");
    Ok(())
}
