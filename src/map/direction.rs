use glam::IVec2;
use strum_macros::{AsRefStr, EnumCount, EnumIter};

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// The four cardinal directions, in the order ties are broken by the ghost policy.
    /// Matches the declaration order, so `Direction::iter()` yields the same sequence.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as a unit grid offset. Y grows downwards.
    pub const fn as_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        dir.as_ivec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        for direction in Direction::DIRECTIONS {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.as_ivec2() + direction.opposite().as_ivec2(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_iteration_matches_tie_break_order() {
        use strum::{EnumCount, IntoEnumIterator};

        assert_eq!(Direction::COUNT, Direction::DIRECTIONS.len());
        assert!(Direction::iter().eq(Direction::DIRECTIONS));
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::Up.as_ref(), "up");
        assert_eq!(Direction::Right.as_ref(), "right");
    }
}
