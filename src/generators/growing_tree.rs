use std::collections::VecDeque;

use crate::{
    generators::{Finalized, GoalPolicy, random_cell, unvisited_neighbors},
    maze::{Coord, Grid, Maze},
    rng::RandomSource,
};

/// How the growing tree picks the active cell from its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierPolicy {
    /// The most recently added cell. Long winding corridors, like depth-first carving.
    Newest,
    /// A uniformly random cell. Short, evenly branching corridors, like Prim's algorithm.
    Random,
    /// The earliest added cell still present. Broad, shallow branching from the start.
    Oldest,
}

impl FrontierPolicy {
    fn select<R: RandomSource>(self, len: usize, rng: &mut R) -> usize {
        match self {
            FrontierPolicy::Newest => len - 1,
            FrontierPolicy::Random => rng.next_int(len),
            FrontierPolicy::Oldest => 0,
        }
    }
}

/// Growing tree generation.
///
/// The frontier holds visited cells that may still have unvisited neighbours.
/// Each step the policy picks an active cell; it either carves into a random
/// unvisited neighbour, which joins the frontier, or leaves the frontier
/// because it is exhausted. The goal is picked from the cells that left the
/// frontier by `goal`.
pub fn growing_tree<R: RandomSource>(
    maze: &mut Maze,
    rng: &mut R,
    policy: FrontierPolicy,
    goal: GoalPolicy,
) {
    let finalized = grow(maze, rng, policy);
    tracing::trace!(?policy, ?finalized, "frontier exhausted");
    maze.mark_goal(finalized.goal(goal));
}

fn grow<R: RandomSource>(maze: &mut Maze, rng: &mut R, policy: FrontierPolicy) -> Finalized {
    let mut visited = Grid::new(maze.rows(), maze.columns(), false);

    let start = random_cell(maze, rng);
    visited[start] = true;

    let mut frontier: VecDeque<Coord> = VecDeque::from([start]);
    let mut finalized = Finalized::new(start);

    while !frontier.is_empty() {
        let idx = policy.select(frontier.len(), rng);
        let active = frontier[idx];
        let neighbors = unvisited_neighbors(maze, &visited, active);

        match rng.choose(&neighbors) {
            Some(&(direction, neighbor)) => {
                maze.carve(active, direction);
                visited[neighbor] = true;
                frontier.push_back(neighbor);
            }
            None => {
                match policy {
                    FrontierPolicy::Newest => frontier.pop_back(),
                    FrontierPolicy::Oldest => frontier.pop_front(),
                    // Order is irrelevant when picking at random
                    FrontierPolicy::Random => frontier.swap_remove_back(idx),
                };
                finalized.record(maze, active);
            }
        }
    }

    finalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rng::MazeRng, verify::verify_perfect_maze};

    const POLICIES: [FrontierPolicy; 3] = [
        FrontierPolicy::Newest,
        FrontierPolicy::Random,
        FrontierPolicy::Oldest,
    ];

    #[test]
    fn test_growing_tree_policies() {
        for policy in POLICIES {
            let mut maze = Maze::new(9, 11).unwrap();
            growing_tree(&mut maze, &mut MazeRng::seeded(5), policy, GoalPolicy::default());
            assert_eq!(maze.passage_count(), 9 * 11 - 1, "{policy:?}");
            assert!(verify_perfect_maze(&maze).is_ok(), "{policy:?}");
        }
    }

    #[test]
    fn test_select_ends() {
        let mut rng = MazeRng::seeded(0);
        assert_eq!(FrontierPolicy::Newest.select(4, &mut rng), 3);
        assert_eq!(FrontierPolicy::Oldest.select(4, &mut rng), 0);
        assert!(FrontierPolicy::Random.select(4, &mut rng) < 4);
    }

    #[test]
    fn test_goal_is_last_removed_from_frontier() {
        for policy in POLICIES {
            for seed in 0..50 {
                let mut traced = Maze::new(8, 8).unwrap();
                let finalized = grow(&mut traced, &mut MazeRng::seeded(seed), policy);

                let mut maze = Maze::new(8, 8).unwrap();
                growing_tree(&mut maze, &mut MazeRng::seeded(seed), policy, GoalPolicy::default());
                assert_eq!(maze.goal(), Some(finalized.last), "{policy:?} seed {seed}");
                traced.mark_goal(finalized.last);
                assert_eq!(maze, traced);
            }
        }
    }

    #[test]
    fn test_newest_policy_finishes_at_start() {
        for seed in 0..10 {
            let mut maze = Maze::new(6, 4).unwrap();
            let finalized = grow(&mut maze, &mut MazeRng::seeded(seed), FrontierPolicy::Newest);
            let start = random_cell(&maze, &mut MazeRng::seeded(seed));
            assert_eq!(finalized.last, start);
        }
    }

    #[test]
    fn test_dead_end_goal() {
        for policy in POLICIES {
            for seed in 0..10 {
                let mut maze = Maze::new(6, 4).unwrap();
                let mut rng = MazeRng::seeded(seed);
                growing_tree(&mut maze, &mut rng, policy, GoalPolicy::LastDeadEnd);
                let goal = maze.goal().unwrap();
                assert_eq!(maze[goal].open_sides(), 1, "{policy:?} seed {seed}");
            }
        }
    }

    /// Oldest-first growth spreads breadth-first from the start, so its paths
    /// stay far shorter than the winding corridors of newest-first growth.
    #[test]
    fn test_oldest_policy_is_shallow() {
        let mut deepest_newest = 0;
        let mut deepest_oldest = 0;
        for seed in 0..5 {
            let mut newest = Maze::new(12, 12).unwrap();
            grow(&mut newest, &mut MazeRng::seeded(seed), FrontierPolicy::Newest);
            deepest_newest = deepest_newest.max(longest_path(&newest));
            let mut oldest = Maze::new(12, 12).unwrap();
            grow(&mut oldest, &mut MazeRng::seeded(seed), FrontierPolicy::Oldest);
            deepest_oldest = deepest_oldest.max(longest_path(&oldest));
        }
        assert!(deepest_oldest < deepest_newest);
    }

    /// Longest shortest-path distance from (0, 0).
    fn longest_path(maze: &Maze) -> usize {
        let mut dist = Grid::new(maze.rows(), maze.columns(), usize::MAX);
        let mut queue = VecDeque::from([(0, 0)]);
        dist[(0, 0)] = 0;
        let mut longest = 0;
        while let Some(cell) = queue.pop_front() {
            longest = longest.max(dist[cell]);
            for (direction, next) in maze.neighbors(cell) {
                if !maze.has_wall(cell, direction) && dist[next] == usize::MAX {
                    dist[next] = dist[cell] + 1;
                    queue.push_back(next);
                }
            }
        }
        longest
    }
}
