//! Post-condition checks for generated mazes.
//!
//! These walk the whole maze and are meant for tests and debug assertions,
//! not for every production build.

use std::collections::VecDeque;

use crate::{
    error::MazeError,
    maze::{Direction, Grid, Maze},
};

/// Checks that `maze` is a perfect maze with a single goal:
/// walls agree across every shared boundary, the perimeter is closed,
/// there are exactly `cells - 1` passages, every cell is reachable and
/// exactly one cell is the goal.
pub fn verify_perfect_maze(maze: &Maze) -> Result<(), MazeError> {
    verify_walls(maze)?;
    verify_spanning_tree(maze)?;
    verify_goal(maze)
}

/// Wall symmetry and a closed perimeter.
pub fn verify_walls(maze: &Maze) -> Result<(), MazeError> {
    for cell in maze.cells() {
        let coord = cell.coord();
        for direction in Direction::ALL {
            let next = direction.step(coord);
            if !maze.is_in_bounds(next) {
                if !cell.has_wall(direction) {
                    return Err(violation(format!(
                        "perimeter wall {direction:?} of {coord:?} is open"
                    )));
                }
            } else if cell.has_wall(direction) != maze[next].has_wall(direction.opposite()) {
                return Err(violation(format!(
                    "wall between {coord:?} and {next:?} disagrees"
                )));
            }
        }
    }
    Ok(())
}

/// Exactly `cells - 1` passages, all cells connected.
pub fn verify_spanning_tree(maze: &Maze) -> Result<(), MazeError> {
    let expected = maze.cell_count() - 1;
    let passages = maze.passage_count();
    if passages != expected {
        return Err(violation(format!(
            "expected {expected} passages, found {passages}"
        )));
    }

    let mut reached = Grid::new(maze.rows(), maze.columns(), false);
    let mut queue = VecDeque::from([(0, 0)]);
    reached[(0, 0)] = true;
    let mut count = 1;
    while let Some(cell) = queue.pop_front() {
        for (direction, next) in maze.neighbors(cell) {
            if !maze.has_wall(cell, direction) && !reached[next] {
                reached[next] = true;
                count += 1;
                queue.push_back(next);
            }
        }
    }
    if count != maze.cell_count() {
        return Err(violation(format!(
            "only {count} of {} cells are reachable",
            maze.cell_count()
        )));
    }
    Ok(())
}

/// Exactly one goal cell, matching [`Maze::goal`].
pub fn verify_goal(maze: &Maze) -> Result<(), MazeError> {
    let goals = maze
        .cells()
        .filter(|cell| cell.is_goal())
        .map(|cell| cell.coord())
        .collect::<Vec<_>>();
    match goals.as_slice() {
        [goal] if maze.goal() == Some(*goal) => Ok(()),
        [goal] => Err(violation(format!(
            "goal flag on {goal:?} but maze reports {:?}",
            maze.goal()
        ))),
        _ => Err(violation(format!("expected one goal, found {goals:?}"))),
    }
}

fn violation(message: String) -> MazeError {
    MazeError::InvariantViolation(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 2x2 maze carved into a U shape, goal at the end.
    fn u_shape() -> Maze {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.carve((0, 0), Direction::South);
        maze.carve((1, 0), Direction::East);
        maze.carve((1, 1), Direction::North);
        maze.mark_goal((0, 1));
        maze
    }

    #[test]
    fn test_accepts_perfect_maze() {
        assert_eq!(verify_perfect_maze(&u_shape()), Ok(()));
    }

    #[test]
    fn test_rejects_cycle() {
        let mut maze = u_shape();
        maze.carve((0, 0), Direction::East);
        assert!(matches!(
            verify_perfect_maze(&maze),
            Err(MazeError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_rejects_disconnected() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.carve((0, 0), Direction::South);
        maze.carve((1, 0), Direction::East);
        maze.mark_goal((0, 0));
        // 2 passages for 4 cells
        assert!(verify_spanning_tree(&maze).is_err());
    }

    #[test]
    fn test_rejects_missing_goal() {
        let mut maze = Maze::new(1, 2).unwrap();
        maze.carve((0, 0), Direction::East);
        assert!(verify_goal(&maze).is_err());
        maze.mark_goal((0, 1));
        assert!(verify_goal(&maze).is_ok());
    }
}
