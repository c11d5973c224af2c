use crate::{
    generators::{Finalized, GoalPolicy, random_cell, unvisited_neighbors},
    maze::{Grid, Maze},
    rng::RandomSource,
};

/// Randomized depth-first carving.
///
/// Keeps the current path on a stack. The top cell carves into a random
/// unvisited neighbour, which becomes the new top; a cell with nothing left
/// to visit is popped so the walk backtracks. The goal is picked from the
/// popped cells by `goal`.
pub fn recursive_backtrack<R: RandomSource>(maze: &mut Maze, rng: &mut R, goal: GoalPolicy) {
    let finalized = backtrack(maze, rng);
    maze.mark_goal(finalized.goal(goal));
}

fn backtrack<R: RandomSource>(maze: &mut Maze, rng: &mut R) -> Finalized {
    let mut visited = Grid::new(maze.rows(), maze.columns(), false);

    // Initialize the starting point
    let start = random_cell(maze, rng);
    visited[start] = true;

    // The stack will keep only visited cells
    let mut stack = vec![start];
    let mut finalized = Finalized::new(start);

    while let Some(&cell) = stack.last() {
        let neighbors = unvisited_neighbors(maze, &visited, cell);

        match rng.choose(&neighbors) {
            Some(&(direction, neighbor)) => {
                maze.carve(cell, direction);
                visited[neighbor] = true;
                // Carve the maze in that neighbor's direction next
                stack.push(neighbor);
            }
            None => {
                stack.pop();
                finalized.record(maze, cell);
            }
        }
    }

    finalized
}
