use crate::{
    maze::{Coord, Direction, Maze},
    rng::RandomSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    /// A wall running along a row boundary, splitting the rows.
    Horizontal,
    /// A wall running along a column boundary, splitting the columns.
    Vertical,
}

/// Rectangular block of cells still to be divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    top: u16,
    left: u16,
    rows: u16,
    columns: u16,
}

impl Region {
    /// Highest row, highest column corner.
    fn far_corner(&self) -> Coord {
        (self.top + self.rows - 1, self.left + self.columns - 1)
    }
}

/// One dividing wall: after row/column `line`, spanning `start..start + len`
/// along the other axis, open only at `gap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Division {
    orientation: Orientation,
    line: u16,
    start: u16,
    len: u16,
    gap: u16,
}

/// Recursive division: opens the whole interior, then repeatedly splits a
/// region with a wall that has a single passage, until every region is one
/// cell thin. The goal is the far corner of the last region finished.
pub fn recursive_division<R: RandomSource>(maze: &mut Maze, rng: &mut R) {
    divide(maze, rng, |division| {
        tracing::trace!(
            orientation = ?division.orientation,
            line = division.line,
            span = ?(division.start..division.start + division.len),
            gap = division.gap,
            "divided region"
        );
    });
}

/// Runs the division, handing each wall to `on_division` once it stands.
fn divide<R, F>(maze: &mut Maze, rng: &mut R, mut on_division: F)
where
    R: RandomSource,
    F: FnMut(Division),
{
    // Clear all walls in the maze, except the boundary walls
    maze.open_interior();

    let mut regions = vec![Region {
        top: 0,
        left: 0,
        rows: maze.rows(),
        columns: maze.columns(),
    }];
    let mut goal = (maze.rows() - 1, maze.columns() - 1);

    while let Some(region) = regions.pop() {
        if region.rows < 2 || region.columns < 2 {
            goal = region.far_corner();
            continue;
        }

        let (first, second, division) = split(maze, region, rng);
        on_division(division);
        // Finish the top/left half first
        regions.push(second);
        regions.push(first);
    }

    maze.mark_goal(goal);
}

/// Prefers cutting across the longer side: a region with more rows than
/// columns is more likely to get a horizontal wall.
fn choose_orientation<R: RandomSource>(region: Region, rng: &mut R) -> Orientation {
    let total = region.rows as usize + region.columns as usize;
    if rng.next_int(total) < region.rows as usize {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Builds one dividing wall inside `region` and returns the two halves.
fn split<R: RandomSource>(
    maze: &mut Maze,
    region: Region,
    rng: &mut R,
) -> (Region, Region, Division) {
    let Region {
        top,
        left,
        rows,
        columns,
    } = region;

    match choose_orientation(region, rng) {
        Orientation::Horizontal => {
            // Randomly choose the row the wall runs under, and a hole in it
            let diff = rng.next_int(rows as usize - 1) as u16;
            let wall_row = top + diff;
            let hole = left + rng.next_int(columns as usize) as u16;

            (left..left + columns)
                .filter(|&column| column != hole)
                .for_each(|column| {
                    maze.erect((wall_row, column), Direction::South);
                });

            let upper_rows = diff + 1;
            let upper = Region {
                rows: upper_rows,
                ..region
            };
            let lower = Region {
                top: wall_row + 1,
                rows: rows - upper_rows,
                ..region
            };
            let division = Division {
                orientation: Orientation::Horizontal,
                line: wall_row,
                start: left,
                len: columns,
                gap: hole,
            };
            (upper, lower, division)
        }
        Orientation::Vertical => {
            // Randomly choose the column the wall runs beside, and a hole in it
            let diff = rng.next_int(columns as usize - 1) as u16;
            let wall_column = left + diff;
            let hole = top + rng.next_int(rows as usize) as u16;

            (top..top + rows)
                .filter(|&row| row != hole)
                .for_each(|row| {
                    maze.erect((row, wall_column), Direction::East);
                });

            let left_columns = diff + 1;
            let west = Region {
                columns: left_columns,
                ..region
            };
            let east = Region {
                left: wall_column + 1,
                columns: columns - left_columns,
                ..region
            };
            let division = Division {
                orientation: Orientation::Vertical,
                line: wall_column,
                start: top,
                len: rows,
                gap: hole,
            };
            (west, east, division)
        }
    }
}
