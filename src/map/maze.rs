//! The static maze: typed cells, spawn lookup and wall queries.

use glam::{IVec2, UVec2};
use pathfinding::prelude::bfs;
use smallvec::SmallVec;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::constants::{MapTile, DEFAULT_PLAYER_SPAWN, MAX_GHOSTS, RAW_BOARD};
use crate::error::ParseError;
use crate::map::direction::Direction;
use crate::map::parser::MapTileParser;

/// Fixed spawn list for the ghosts of one session.
pub type GhostSpawns = SmallVec<[IVec2; MAX_GHOSTS]>;

/// An immutable rectangular grid of tiles.
///
/// Anything outside the grid counts as a wall, so callers never need to bounds
/// check before asking about a neighbour.
#[derive(Debug, Clone)]
pub struct Maze {
    tiles: Vec<MapTile>,
    size: UVec2,
    player_spawn: Option<IVec2>,
    ghost_spawns: Vec<IVec2>,
}

impl Maze {
    /// Builds a maze from rows of ASCII characters.
    pub fn new(raw_board: &[&str]) -> Result<Self, ParseError> {
        let parsed = MapTileParser::parse_board(raw_board)?;
        debug!(width = parsed.size.x, height = parsed.size.y, "Maze parsed");
        Ok(Self {
            tiles: parsed.tiles,
            size: parsed.size,
            player_spawn: parsed.player_spawn,
            ghost_spawns: parsed.ghost_spawns,
        })
    }

    /// Builds the maze shipped with the game.
    pub fn reference() -> Result<Self, ParseError> {
        Self::new(&RAW_BOARD)
    }

    /// Width and height, in cells.
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Linear index of a cell, or `None` when it lies outside the grid.
    pub fn index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.size.x as i32 || cell.y >= self.size.y as i32 {
            return None;
        }
        Some(cell.y as usize * self.size.x as usize + cell.x as usize)
    }

    /// Returns the tile at the given cell, or `None` outside the grid.
    pub fn tile(&self, cell: IVec2) -> Option<MapTile> {
        self.index(cell).map(|index| self.tiles[index])
    }

    /// True for walls and for every coordinate outside the grid.
    pub fn is_wall(&self, cell: IVec2) -> bool {
        !matches!(
            self.tile(cell),
            Some(MapTile::Empty | MapTile::Pellet | MapTile::PowerPellet | MapTile::PlayerSpawn | MapTile::GhostSpawn)
        )
    }

    /// True for cells authored as power pellets, whether or not they were eaten.
    pub fn is_power_cell(&self, cell: IVec2) -> bool {
        self.tile(cell) == Some(MapTile::PowerPellet)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, MapTile)> + '_ {
        let width = self.size.x as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(index, tile)| (IVec2::new((index % width) as i32, (index / width) as i32), *tile))
    }

    /// The authored player spawn, falling back to a fixed default cell.
    pub fn find_player_spawn(&self) -> IVec2 {
        self.player_spawn.unwrap_or(DEFAULT_PLAYER_SPAWN)
    }

    /// Resolves the spawn cells for up to `target` ghosts.
    ///
    /// Authored spawns come first, in row-major order. When fewer than `target`
    /// exist and `synthesize` is set, the walkable neighbours of the first spawn
    /// fill the gap, skipping cells already used and the player spawn.
    pub fn find_ghost_spawns(&self, target: usize, synthesize: bool) -> GhostSpawns {
        let target = target.clamp(1, MAX_GHOSTS);
        let mut spawns: GhostSpawns = self.ghost_spawns.iter().copied().take(target).collect();

        if spawns.is_empty() {
            let center = (self.size / 2).as_ivec2();
            spawns.push(self.nearest_open(center).unwrap_or(center));
        }

        if synthesize && spawns.len() < target {
            let origin = spawns[0];
            let player = self.find_player_spawn();
            for direction in Direction::iter() {
                if spawns.len() >= target {
                    break;
                }
                let candidate = origin + direction.as_ivec2();
                if !self.is_wall(candidate) && candidate != player && !spawns.contains(&candidate) {
                    spawns.push(candidate);
                }
            }
            debug!(authored = self.ghost_spawns.len(), resolved = spawns.len(), target, "Synthesized ghost spawns");
        }

        spawns
    }

    /// Breadth-first search for the walkable cell closest to `cell`.
    ///
    /// The search may cross walls but never leaves the grid. Returns `None`
    /// only when the maze has no walkable cell at all.
    pub fn nearest_open(&self, cell: IVec2) -> Option<IVec2> {
        let max = self.size.as_ivec2() - IVec2::ONE;
        let start = cell.clamp(IVec2::ZERO, max.max(IVec2::ZERO));
        self.index(start)?;

        let maze = self;
        let path = bfs(
            &start,
            move |&current: &IVec2| {
                Direction::iter()
                    .map(move |direction| current + direction.as_ivec2())
                    .filter(move |&next| maze.index(next).is_some())
            },
            |&current: &IVec2| !maze.is_wall(current),
        )?;
        path.last().copied()
    }
}
