//! Simulation systems: agents, collectibles, collisions, run state and drawing.

pub mod collision;
pub mod ghost;
pub mod item;
pub mod movement;
pub mod player;
pub mod render;
pub mod state;
