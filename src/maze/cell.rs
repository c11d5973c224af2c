use serde::{Deserialize, Serialize};

/// Coordinate of a cell in the maze, as `(row, column)`.
pub type Coord = (u16, u16);

/// One of the four sides of a cell. Row 0 is the north edge of the maze
/// and column 0 is the west edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Position of this side in a cell's wall array.
    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Steps one cell from `coord` in this direction.
    ///
    /// Moving off the low edge wraps to `u16::MAX` and moving off the high edge
    /// saturates to `u16::MAX`; both are rejected by any bounds check since the
    /// largest valid index is `u16::MAX - 1`.
    pub fn step(self, coord: Coord) -> Coord {
        let (row, column) = coord;
        match self {
            Direction::North => (row.wrapping_sub(1), column),
            Direction::East => (row, column.saturating_add(1)),
            Direction::South => (row.saturating_add(1), column),
            Direction::West => (row, column.wrapping_sub(1)),
        }
    }
}

/// A single maze cell: its position, four wall flags and the goal flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    row: u16,
    column: u16,
    /// Indexed by [`Direction::index`]. `true` means the wall is standing.
    walls: [bool; 4],
    is_goal: bool,
}

impl Cell {
    /// A fully closed, non-goal cell.
    pub fn closed(row: u16, column: u16) -> Self {
        Cell {
            row,
            column,
            walls: [true; 4],
            is_goal: false,
        }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.column)
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub fn wall_north(&self) -> bool {
        self.has_wall(Direction::North)
    }

    pub fn wall_east(&self) -> bool {
        self.has_wall(Direction::East)
    }

    pub fn wall_south(&self) -> bool {
        self.has_wall(Direction::South)
    }

    pub fn wall_west(&self) -> bool {
        self.has_wall(Direction::West)
    }

    // Scene-side names, where x grows with the column and z with the row.

    /// Wall on the +x side.
    pub fn wall_right(&self) -> bool {
        self.wall_east()
    }

    /// Wall on the +z side.
    pub fn wall_front(&self) -> bool {
        self.wall_south()
    }

    /// Wall on the -x side.
    pub fn wall_left(&self) -> bool {
        self.wall_west()
    }

    /// Wall on the -z side.
    pub fn wall_back(&self) -> bool {
        self.wall_north()
    }

    pub fn is_goal(&self) -> bool {
        self.is_goal
    }

    /// Number of open sides, i.e. the cell's degree in the maze graph.
    pub fn open_sides(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, standing: bool) {
        self.walls[direction.index()] = standing;
    }

    pub(crate) fn set_goal(&mut self, is_goal: bool) {
        self.is_goal = is_goal;
    }
}
