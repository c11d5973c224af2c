//! Seeded generation of perfect rectangular mazes.
//!
//! A [`Maze`] starts with every wall standing. One of the [`Generator`]s turns
//! it into a spanning tree of its cells and marks a single goal cell, drawing
//! all of its random choices from a [`RandomSource`] so a seed reproduces the
//! same maze.
//!
//! ```
//! use mazespawn::{Generator, build};
//!
//! let maze = build(Generator::RandomTree, 8, 12, Some(42)).unwrap();
//! assert_eq!(maze.passage_count(), 8 * 12 - 1);
//! assert!(maze.goal().is_some());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod generators;
pub mod maze;
pub mod rng;
pub mod verify;

pub use config::MazeConfig;
pub use engine::{build, build_from_config, build_with};
pub use error::MazeError;
pub use generators::{Generator, GoalPolicy, generate_maze};
pub use maze::{Cell, Coord, Direction, Maze, MazeEvent};
pub use rng::{MazeRng, RandomSource};
