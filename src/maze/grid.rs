use super::cell::Coord;

/// Row-major storage for a `rows x columns` rectangle of values.
///
/// Holds the maze's cells and the generators' scratch masks (visited flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    rows: u16,
    columns: u16,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: u16, columns: u16, value: T) -> Self {
        let data = vec![value; rows as usize * columns as usize].into_boxed_slice();
        Grid {
            data,
            rows,
            columns,
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f` for each coordinate in row-major order.
    pub fn from_fn(rows: u16, columns: u16, mut f: impl FnMut(Coord) -> T) -> Self {
        let data = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (row, column)))
            .map(&mut f)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.columns
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        // Overflow-safe since rows and columns are u16 (assuming usize is at least 32 bits)
        coord.0 as usize * self.columns as usize + coord.1 as usize
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.is_in_bounds(coord) {
            Some(&self.data[self.ravel_index(coord)])
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {index:?} is out of bounds for a {}x{} grid",
            self.rows,
            self.columns
        );
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {index:?} is out of bounds for a {}x{} grid",
            self.rows,
            self.columns
        );
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(3, 4, 0u8);
        grid[(2, 3)] = 7;
        assert_eq!(grid[(2, 3)], 7);
        assert_eq!(grid.iter().filter(|&&v| v == 7).count(), 1);
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = Grid::from_fn(2, 3, |coord| coord);
        let order = grid.iter().copied().collect::<Vec<_>>();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(5, 5, ());
        assert!(!grid.is_in_bounds((5, 5)));
        assert!(!grid.is_in_bounds((0, 5)));
        assert!(!grid.is_in_bounds((5, 0)));
        assert!(grid.is_in_bounds((4, 4)));
        assert!(grid.get((5, 0)).is_none());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 2, 0u8);
        let _ = grid[(0, 2)];
    }
}
