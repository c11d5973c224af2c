mod growing_tree;
mod recur_backtrack;
mod recur_div;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use growing_tree::{FrontierPolicy, growing_tree};
pub use recur_backtrack::recursive_backtrack;
pub use recur_div::recursive_division;

use crate::{
    error::MazeError,
    maze::{Coord, Direction, Grid, Maze},
    rng::RandomSource,
};

/// The available maze generation algorithms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generator {
    /// Randomized depth-first carving over an explicit path stack.
    #[default]
    PureRecursive,
    /// Growing tree, always extending the newest frontier cell.
    RecursiveTree,
    /// Growing tree, extending a uniformly random frontier cell.
    RandomTree,
    /// Growing tree, always extending the oldest frontier cell.
    OldestTree,
    /// Wall-adding recursive division of an open chamber.
    RecursiveDivision,
}

impl Generator {
    pub const ALL: [Generator; 5] = [
        Generator::PureRecursive,
        Generator::RecursiveTree,
        Generator::RandomTree,
        Generator::OldestTree,
        Generator::RecursiveDivision,
    ];

    /// Turns a fully closed `maze` into a perfect maze with exactly one goal cell,
    /// placed by the default [`GoalPolicy`].
    ///
    /// Fails with [`MazeError::AlreadyGenerated`] if `maze` has been generated before.
    pub fn generate<R: RandomSource>(
        self,
        maze: &mut Maze,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        self.generate_with(maze, rng, GoalPolicy::default())
    }

    /// Like [`Generator::generate`], with an explicit goal policy for the carving
    /// generators. [`Generator::RecursiveDivision`] ignores `goal`.
    pub fn generate_with<R: RandomSource>(
        self,
        maze: &mut Maze,
        rng: &mut R,
        goal: GoalPolicy,
    ) -> Result<(), MazeError> {
        maze.begin_generation()?;
        tracing::debug!(
            generator = %self,
            ?goal,
            rows = maze.rows(),
            columns = maze.columns(),
            "generating maze"
        );

        if maze.cell_count() == 1 {
            maze.mark_goal((0, 0));
            return Ok(());
        }

        match self {
            Generator::PureRecursive => recursive_backtrack(maze, rng, goal),
            Generator::RecursiveTree => growing_tree(maze, rng, FrontierPolicy::Newest, goal),
            Generator::RandomTree => growing_tree(maze, rng, FrontierPolicy::Random, goal),
            Generator::OldestTree => growing_tree(maze, rng, FrontierPolicy::Oldest, goal),
            Generator::RecursiveDivision => recursive_division(maze, rng),
        }

        tracing::debug!(
            generator = %self,
            passages = maze.passage_count(),
            goal = ?maze.goal(),
            "maze generated"
        );
        Ok(())
    }
}

/// Which cell a carving generator marks as the goal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalPolicy {
    /// The last cell the traversal finished with: the last one popped off the
    /// path stack or removed from the frontier. For depth-first carving this is
    /// always the start cell.
    #[default]
    LastFinalized,
    /// The last finished cell that is a dead end (a single open side).
    LastDeadEnd,
}

/// Tracks the cells a carving traversal finishes with.
///
/// A finished cell has no unvisited neighbours left, so it never gains
/// another passage and its dead-end status is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Finalized {
    last: Coord,
    last_dead_end: Coord,
}

impl Finalized {
    fn new(start: Coord) -> Self {
        Finalized {
            last: start,
            last_dead_end: start,
        }
    }

    fn record(&mut self, maze: &Maze, cell: Coord) {
        self.last = cell;
        if maze[cell].open_sides() <= 1 {
            self.last_dead_end = cell;
        }
    }

    fn goal(&self, policy: GoalPolicy) -> Coord {
        match policy {
            GoalPolicy::LastFinalized => self.last,
            GoalPolicy::LastDeadEnd => self.last_dead_end,
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::PureRecursive => write!(f, "Pure Recursive Backtracking"),
            Generator::RecursiveTree => write!(f, "Growing Tree (newest)"),
            Generator::RandomTree => write!(f, "Growing Tree (random)"),
            Generator::OldestTree => write!(f, "Growing Tree (oldest)"),
            Generator::RecursiveDivision => write!(f, "Recursive Division"),
        }
    }
}

/// Parses a generator name, ignoring case, `-`, `_` and spaces,
/// so `PureRecursive`, `pure-recursive` and `pure_recursive` all match.
impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "purerecursive" => Ok(Generator::PureRecursive),
            "recursivetree" => Ok(Generator::RecursiveTree),
            "randomtree" => Ok(Generator::RandomTree),
            "oldesttree" => Ok(Generator::OldestTree),
            "recursivedivision" => Ok(Generator::RecursiveDivision),
            _ => Err(MazeError::UnknownGenerator(s.to_string())),
        }
    }
}

/// Runs `generator` on `maze`, drawing randomness from `rng`.
pub fn generate_maze<R: RandomSource>(
    maze: &mut Maze,
    generator: Generator,
    rng: &mut R,
) -> Result<(), MazeError> {
    generator.generate(maze, rng)
}

/// Picks a uniformly random cell of the maze.
fn random_cell<R: RandomSource>(maze: &Maze, rng: &mut R) -> Coord {
    (
        rng.next_int(maze.rows() as usize) as u16,
        rng.next_int(maze.columns() as usize) as u16,
    )
}

/// Neighbours of `coord` not yet marked in `visited`.
fn unvisited_neighbors(
    maze: &Maze,
    visited: &Grid<bool>,
    coord: Coord,
) -> Vec<(Direction, Coord)> {
    maze.neighbors(coord)
        .filter(|&(_, next)| !visited[next])
        .collect()
}
