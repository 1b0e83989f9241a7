//! Compass directions for walking the grid.
//!
//! `Direction` is a single unit step; `Directions` is a set of them used to
//! restrict a word search. Rows grow downwards, so `North` is `(-1, 0)`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(d_row, d_col)` for one step.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn flag(self) -> Directions {
        match self {
            Direction::North => Directions::NORTH,
            Direction::NorthEast => Directions::NORTH_EAST,
            Direction::East => Directions::EAST,
            Direction::SouthEast => Directions::SOUTH_EAST,
            Direction::South => Directions::SOUTH,
            Direction::SouthWest => Directions::SOUTH_WEST,
            Direction::West => Directions::WEST,
            Direction::NorthWest => Directions::NORTH_WEST,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        };
        f.write_str(s)
    }
}

bitflags::bitflags! {
    /// A set of directions a word may be read in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        const NORTH      = 1 << 0;
        const NORTH_EAST = 1 << 1;
        const EAST       = 1 << 2;
        const SOUTH_EAST = 1 << 3;
        const SOUTH      = 1 << 4;
        const SOUTH_WEST = 1 << 5;
        const WEST       = 1 << 6;
        const NORTH_WEST = 1 << 7;

        const ORTHOGONAL = Self::NORTH.bits() | Self::EAST.bits() | Self::SOUTH.bits() | Self::WEST.bits();
        const DIAGONAL = Self::NORTH_EAST.bits() | Self::SOUTH_EAST.bits() | Self::SOUTH_WEST.bits() | Self::NORTH_WEST.bits();
    }
}

impl Default for Directions {
    fn default() -> Self {
        Directions::all()
    }
}

impl Directions {
    /// Members of the set, clockwise from north.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(d.flag()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_offsets_are_distinct_unit_steps() {
        let mut offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        offsets.sort_unstable();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.iter().all(|(dr, dc)| dr.abs() <= 1 && dc.abs() <= 1));
    }

    #[test]
    fn default_set_is_all_eight() {
        assert_eq!(Directions::default().directions().count(), 8);
    }

    #[test]
    fn orthogonal_and_diagonal_partition_the_set() {
        assert_eq!(Directions::ORTHOGONAL | Directions::DIAGONAL, Directions::all());
        assert!((Directions::ORTHOGONAL & Directions::DIAGONAL).is_empty());
        let ortho: Vec<_> = Directions::ORTHOGONAL.directions().collect();
        assert_eq!(ortho, vec![Direction::North, Direction::East, Direction::South, Direction::West]);
    }
}
