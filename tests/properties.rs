use quickcheck::{TestResult, quickcheck};

use mazespawn::{Direction, Generator, Maze, MazeError, MazeRng, build, build_with, verify};

/// Maps arbitrary bytes onto a small, non-empty maze shape.
fn shape(rows: u8, columns: u8) -> (u16, u16) {
    (rows as u16 % 24 + 1, columns as u16 % 24 + 1)
}

fn generator(pick: u8) -> Generator {
    Generator::ALL[pick as usize % Generator::ALL.len()]
}

#[test]
fn every_generator_builds_a_spanning_tree() {
    fn prop(pick: u8, rows: u8, columns: u8, seed: u64) -> TestResult {
        let (rows, columns) = shape(rows, columns);
        let maze = match build(generator(pick), rows, columns, Some(seed)) {
            Ok(maze) => maze,
            Err(e) => return TestResult::error(e.to_string()),
        };
        let cells = rows as usize * columns as usize;
        TestResult::from_bool(
            maze.passage_count() == cells - 1
                && verify::verify_spanning_tree(&maze).is_ok()
                && verify::verify_walls(&maze).is_ok(),
        )
    }
    quickcheck(prop as fn(u8, u8, u8, u64) -> TestResult);
}

#[test]
fn every_generator_marks_exactly_one_goal() {
    fn prop(pick: u8, rows: u8, columns: u8, seed: u64) -> bool {
        let (rows, columns) = shape(rows, columns);
        build(generator(pick), rows, columns, Some(seed))
            .map(|maze| maze.cells().filter(|c| c.is_goal()).count() == 1)
            .unwrap_or(false)
    }
    quickcheck(prop as fn(u8, u8, u8, u64) -> bool);
}

#[test]
fn same_seed_same_maze() {
    fn prop(pick: u8, rows: u8, columns: u8, seed: u64) -> bool {
        let (rows, columns) = shape(rows, columns);
        let generator = generator(pick);
        build(generator, rows, columns, Some(seed)) == build(generator, rows, columns, Some(seed))
    }
    quickcheck(prop as fn(u8, u8, u8, u64) -> bool);
}

#[test]
fn perimeter_stays_closed() {
    fn prop(pick: u8, rows: u8, columns: u8, seed: u64) -> bool {
        let (rows, columns) = shape(rows, columns);
        let Ok(maze) = build(generator(pick), rows, columns, Some(seed)) else {
            return false;
        };
        let (last_row, last_column) = (rows - 1, columns - 1);
        (0..columns).all(|c| maze[(0, c)].wall_north() && maze[(last_row, c)].wall_south())
            && (0..rows).all(|r| maze[(r, 0)].wall_west() && maze[(r, last_column)].wall_east())
    }
    quickcheck(prop as fn(u8, u8, u8, u64) -> bool);
}

#[test]
fn single_cell_maze() {
    for generator in Generator::ALL {
        let maze = build(generator, 1, 1, Some(0)).unwrap();
        assert_eq!(maze.passage_count(), 0);
        let cell = maze.cell_at(0, 0).unwrap();
        assert!(cell.is_goal());
        assert!(cell.wall_north() && cell.wall_east() && cell.wall_south() && cell.wall_west());
    }
}

#[test]
fn two_by_two_pure_recursive_seed_42() {
    let maze = build(Generator::PureRecursive, 2, 2, Some(42)).unwrap();
    assert_eq!(maze.passage_count(), 3);
    assert_eq!(verify::verify_perfect_maze(&maze), Ok(()));
    for _ in 0..3 {
        assert_eq!(build(Generator::PureRecursive, 2, 2, Some(42)).unwrap(), maze);
    }
}

#[test]
fn different_seeds_differ() {
    for generator in Generator::ALL {
        let a = build(generator, 16, 16, Some(1)).unwrap();
        let b = build(generator, 16, 16, Some(2)).unwrap();
        assert_ne!(a, b, "{generator}");
    }
}

#[test]
fn invalid_dimensions_and_bounds() {
    assert!(matches!(
        build(Generator::RandomTree, 3, 0, Some(0)),
        Err(MazeError::InvalidDimension { .. })
    ));
    let maze = build(Generator::RandomTree, 3, 4, Some(0)).unwrap();
    assert!(matches!(
        maze.cell_at(3, 0),
        Err(MazeError::OutOfBounds { row: 3, column: 0, .. })
    ));
}

#[test]
fn built_maze_cannot_be_regenerated() {
    for generator in Generator::ALL {
        let mut maze = build(generator, 6, 6, Some(5)).unwrap();
        let snapshot = maze.clone();
        assert!(maze.is_generated());
        for other in Generator::ALL {
            let mut rng = MazeRng::seeded(6);
            assert_eq!(other.generate(&mut maze, &mut rng), Err(MazeError::AlreadyGenerated));
        }
        assert_eq!(
            build_with(generator, maze.clone(), &mut MazeRng::seeded(5)),
            Err(MazeError::AlreadyGenerated)
        );
        assert_eq!(maze, snapshot);
        assert_eq!(verify::verify_perfect_maze(&maze), Ok(()));
    }
}

#[test]
fn neighbors_report_direction_taken() {
    let maze = Maze::new(3, 3).unwrap();
    for (direction, next) in maze.neighbors((1, 1)) {
        assert_eq!(direction.step((1, 1)), next);
        assert!(matches!(
            direction,
            Direction::North | Direction::East | Direction::South | Direction::West
        ));
    }
    assert_eq!(maze.neighbors((2, 2)).count(), 2);
}
