//! Pac-BOX: a small grid arcade game as a deterministic fixed-step simulation.

pub mod app;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod hud;
pub mod input;
pub mod logging;
pub mod map;
pub mod platform;
pub mod render;
pub mod systems;
