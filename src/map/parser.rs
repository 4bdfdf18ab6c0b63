//! Map parsing functionality for converting raw board layouts into structured data.

use glam::{IVec2, UVec2};
use tracing::warn;

use crate::constants::MapTile;
use crate::error::ParseError;

/// Structured representation of a parsed ASCII board layout.
///
/// Tiles are stored row-major in a flat vector so any cell resolves with a single
/// multiply-add. Spawn markers keep their tile type, and their positions are
/// also collected here so the maze does not have to rescan the grid.
#[derive(Debug)]
pub struct ParsedMap {
    /// Row-major tiles, `size.x * size.y` long
    pub tiles: Vec<MapTile>,
    /// Width and height in cells
    pub size: UVec2,
    /// The player spawn marker (`P`), if one was authored
    pub player_spawn: Option<IVec2>,
    /// Every ghost spawn marker (`G`) in row-major order
    pub ghost_spawns: Vec<IVec2>,
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Converts one ASCII character from the board layout into its tile type.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownCharacter` for any character outside the
    /// board vocabulary (`#`, `.`, `o`, ` `, `P`, `G`).
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::PowerPellet),
            ' ' => Ok(MapTile::Empty),
            'P' => Ok(MapTile::PlayerSpawn),
            'G' => Ok(MapTile::GhostSpawn),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty or ragged, contains an unknown
    /// character, has a walkable cell on its outer border, or authors more than
    /// one player spawn.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        let height = raw_board.len();
        let width = raw_board.first().map(|line| line.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut player_spawns = Vec::new();
        let mut ghost_spawns = Vec::new();

        for (y, line) in raw_board.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(ParseError::RaggedRow {
                    line: y,
                    expected: width,
                    actual,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if on_border && tile != MapTile::Wall {
                    return Err(ParseError::OpenBorder { x, y });
                }

                match tile {
                    MapTile::PlayerSpawn => player_spawns.push(IVec2::new(x as i32, y as i32)),
                    MapTile::GhostSpawn => ghost_spawns.push(IVec2::new(x as i32, y as i32)),
                    _ => {}
                }
                tiles.push(tile);
            }
        }

        if player_spawns.len() > 1 {
            return Err(ParseError::DuplicatePlayerSpawn(player_spawns.len()));
        }
        if player_spawns.is_empty() {
            warn!("Board has no player spawn, the default spawn will be used");
        }
        if ghost_spawns.is_empty() {
            warn!("Board has no ghost spawn, the board center will be used");
        }

        Ok(ParsedMap {
            tiles,
            size: UVec2::new(width as u32, height as u32),
            player_spawn: player_spawns.first().copied(),
            ghost_spawns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_character() {
        assert_eq!(MapTileParser::parse_character('#'), Ok(MapTile::Wall));
        assert_eq!(MapTileParser::parse_character('.'), Ok(MapTile::Pellet));
        assert_eq!(MapTileParser::parse_character('o'), Ok(MapTile::PowerPellet));
        assert_eq!(MapTileParser::parse_character(' '), Ok(MapTile::Empty));
        assert_eq!(MapTileParser::parse_character('P'), Ok(MapTile::PlayerSpawn));
        assert_eq!(MapTileParser::parse_character('G'), Ok(MapTile::GhostSpawn));
        assert_eq!(MapTileParser::parse_character('Z'), Err(ParseError::UnknownCharacter('Z')));
    }

    #[test]
    fn test_parse_small_board() {
        let parsed = MapTileParser::parse_board(&["#####", "#P.G#", "#####"]).unwrap();
        assert_eq!(parsed.size, UVec2::new(5, 3));
        assert_eq!(parsed.tiles.len(), 15);
        assert_eq!(parsed.player_spawn, Some(IVec2::new(1, 1)));
        assert_eq!(parsed.ghost_spawns, vec![IVec2::new(3, 1)]);
    }
}
