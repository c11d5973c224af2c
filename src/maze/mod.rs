pub mod cell;
pub mod grid;

use std::{fmt, sync::mpsc::Sender};

pub use cell::{Cell, Coord, Direction};
pub use grid::Grid;

use crate::error::MazeError;

/// Progress notifications emitted while a maze is being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    /// Sent once when an observer is attached.
    Initial { rows: u16, columns: u16 },
    /// The wall on `direction` side of `from` (and its twin) was opened.
    Carved { from: Coord, direction: Direction },
    /// The wall on `direction` side of `from` (and its twin) was closed.
    Erected { from: Coord, direction: Direction },
    /// The goal moved to this cell.
    Goal(Coord),
}

/// A rectangular maze of [`Cell`]s addressed by `(row, column)`.
///
/// A fresh maze has every wall standing. Walls are only changed by a
/// [`Generator`](crate::Generator), which always updates both sides of a
/// shared boundary, so neighbouring cells never disagree about a wall.
/// Outside the crate a maze is read-only:
///
/// ```compile_fail
/// use mazespawn::{Direction, Generator, build};
///
/// let mut maze = build(Generator::PureRecursive, 4, 4, Some(1)).unwrap();
/// maze.carve((0, 0), Direction::East);
/// ```
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Grid<Cell>,
    goal: Option<Coord>,
    generated: bool,
    observer: Option<Sender<MazeEvent>>,
}

impl Maze {
    /// Creates a fully closed maze.
    pub fn new(rows: u16, columns: u16) -> Result<Self, MazeError> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimension { rows, columns });
        }
        Ok(Maze {
            cells: Grid::from_fn(rows, columns, |(row, column)| Cell::closed(row, column)),
            goal: None,
            generated: false,
            observer: None,
        })
    }

    /// Attaches a channel that receives a [`MazeEvent`] for every wall or goal change.
    pub fn with_observer(mut self, sender: Sender<MazeEvent>) -> Self {
        let _ = sender.send(MazeEvent::Initial {
            rows: self.rows(),
            columns: self.columns(),
        });
        self.observer = Some(sender);
        self
    }

    pub fn rows(&self) -> u16 {
        self.cells.rows()
    }

    pub fn columns(&self) -> u16 {
        self.cells.columns()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.cells.is_in_bounds(coord)
    }

    pub fn cell_at(&self, row: u16, column: u16) -> Result<&Cell, MazeError> {
        self.cells.get((row, column)).ok_or(MazeError::OutOfBounds {
            row,
            column,
            rows: self.rows(),
            columns: self.columns(),
        })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinate of the goal cell, if one has been marked.
    pub fn goal(&self) -> Option<Coord> {
        self.goal
    }

    /// Whether a generator has already run on this maze.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Claims the maze for a generator run. Each maze can be generated once.
    pub(crate) fn begin_generation(&mut self) -> Result<(), MazeError> {
        if self.generated {
            return Err(MazeError::AlreadyGenerated);
        }
        self.generated = true;
        Ok(())
    }

    /// In-bounds neighbours of `coord`, each paired with the direction taken to reach it.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> {
        let inside = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| inside)
            .map(move |direction| (direction, direction.step(coord)))
            .filter(move |&(_, next)| self.is_in_bounds(next))
    }

    /// Returns the neighbour of `coord` across `direction`.
    ///
    /// # Panics
    /// If `coord` is out of bounds or the neighbour would lie outside the maze.
    fn neighbor_across(&self, coord: Coord, direction: Direction) -> Coord {
        if !self.is_in_bounds(coord) {
            panic!("The given coordinate {coord:?} is out of bounds");
        }
        let next = direction.step(coord);
        if !self.is_in_bounds(next) {
            panic!("The {direction:?} wall of {coord:?} is on the maze perimeter");
        }
        next
    }

    pub fn has_wall(&self, coord: Coord, direction: Direction) -> bool {
        self.cells[coord].has_wall(direction)
    }

    /// Opens the wall between `from` and its neighbour across `direction`.
    ///
    /// # Returns
    /// `true` if a wall was removed, `false` if the passage was already open.
    ///
    /// # Panics
    /// If `from` is out of bounds or the wall is on the maze perimeter.
    pub(crate) fn carve(&mut self, from: Coord, direction: Direction) -> bool {
        let to = self.neighbor_across(from, direction);
        if !self.cells[from].has_wall(direction) {
            return false;
        }
        self.cells[from].set_wall(direction, false);
        self.cells[to].set_wall(direction.opposite(), false);
        tracing::trace!(?from, ?direction, "carved");
        self.notify(MazeEvent::Carved { from, direction });
        true
    }

    /// Closes the wall between `from` and its neighbour across `direction`.
    ///
    /// # Returns
    /// `true` if a wall was added, `false` if it was already standing.
    ///
    /// # Panics
    /// If `from` is out of bounds or the wall is on the maze perimeter.
    pub(crate) fn erect(&mut self, from: Coord, direction: Direction) -> bool {
        let to = self.neighbor_across(from, direction);
        if self.cells[from].has_wall(direction) {
            return false;
        }
        self.cells[from].set_wall(direction, true);
        self.cells[to].set_wall(direction.opposite(), true);
        tracing::trace!(?from, ?direction, "erected");
        self.notify(MazeEvent::Erected { from, direction });
        true
    }

    /// Opens every interior wall. The perimeter stays closed.
    pub(crate) fn open_interior(&mut self) {
        let (rows, columns) = (self.rows(), self.columns());
        for row in 0..rows {
            for column in 0..columns {
                if row + 1 < rows {
                    self.carve((row, column), Direction::South);
                }
                if column + 1 < columns {
                    self.carve((row, column), Direction::East);
                }
            }
        }
    }

    /// Makes `coord` the only goal cell.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub(crate) fn mark_goal(&mut self, coord: Coord) {
        if let Some(previous) = self.goal.take() {
            self.cells[previous].set_goal(false);
        }
        self.cells[coord].set_goal(true);
        self.goal = Some(coord);
        self.notify(MazeEvent::Goal(coord));
    }

    /// Number of open wall pairs, i.e. edges in the maze graph.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| !cell.wall_east() as usize + !cell.wall_south() as usize)
            .sum()
    }

    fn notify(&self, event: MazeEvent) {
        if let Some(sender) = &self.observer {
            let _ = sender.send(event);
        }
    }
}

impl PartialEq for Maze {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.goal == other.goal
    }
}

impl Eq for Maze {}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[index]
    }
}

/// Plain-text plan of the maze: `+` corners, `---` and `|` walls, `G` marks the goal.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            write!(f, "+")?;
            for column in 0..self.columns() {
                let top = if self[(row, column)].wall_north() { "---" } else { "   " };
                write!(f, "{top}+")?;
            }
            writeln!(f)?;

            let left = if self[(row, 0)].wall_west() { "|" } else { " " };
            write!(f, "{left}")?;
            for column in 0..self.columns() {
                let cell = &self[(row, column)];
                let body = if cell.is_goal() { " G " } else { "   " };
                let right = if cell.wall_east() { "|" } else { " " };
                write!(f, "{body}{right}")?;
            }
            writeln!(f)?;
        }

        write!(f, "+")?;
        let last = self.rows() - 1;
        for column in 0..self.columns() {
            let bottom = if self[(last, column)].wall_south() { "---" } else { "   " };
            write!(f, "{bottom}+")?;
        }
        writeln!(f)
    }
}
