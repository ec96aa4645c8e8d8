/// A dense 2D grid addressed as `[x][y]` with `0 <= x < width`, `0 <= y < length`.
///
/// Storage is row-major over `y` (one row per `y`, `width` cells long), so a
/// row can be handed to a worker as a contiguous slice. Unlike a world map the
/// grid never wraps: its edges are real borders.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    pub width: usize,
    pub length: usize,
    data: Vec<T>,
}

/// Normalized elevation field, every value in `[0, 1]`.
pub type HeightGrid = Grid<f32>;

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, length: usize) -> Self {
        Self {
            width,
            length,
            data: vec![T::default(); width * length],
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_with(width: usize, length: usize, value: T) -> Self {
        Self {
            width,
            length,
            data: vec![value; width * length],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: usize, length: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * length);
        for y in 0..length {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, length, data }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.length, "cell ({x}, {y}) out of bounds");
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True for cells on the outer ring (`x == 0`, `x == width - 1`, `y == 0`, `y == length - 1`).
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.length
    }

    /// 4-connected neighbours that lie inside the grid (no wrapping).
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(4);

        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.width {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.length {
            result.push((x, y + 1));
        }

        result
    }

    /// The cells with a fixed `y`, ordered by `x`.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Raw row-major storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the cell values in storage order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            length: self.length,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl Grid<f32> {
    /// Smallest and largest value, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        if self.data.is_empty() {
            return None;
        }
        let mut min_h = f32::MAX;
        let mut max_h = f32::MIN;
        for &h in &self.data {
            if h < min_h { min_h = h; }
            if h > max_h { max_h = h; }
        }
        Some((min_h, max_h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_x_then_y() {
        let grid = Grid::from_fn(3, 2, |x, y| x * 10 + y);
        assert_eq!(*grid.get(2, 0), 20);
        assert_eq!(*grid.get(1, 1), 11);
        assert_eq!(grid.row(1), &[1, 11, 21]);
        assert_eq!(grid.len(), 6);
    }

    #[test]
    fn test_border_detection() {
        let grid: Grid<f32> = Grid::new(4, 3);
        assert!(grid.is_border(0, 1));
        assert!(grid.is_border(3, 1));
        assert!(grid.is_border(2, 0));
        assert!(grid.is_border(2, 2));
        assert!(!grid.is_border(1, 1));
        assert!(!grid.is_border(2, 1));
    }

    #[test]
    fn test_neighbors_do_not_wrap() {
        let grid: Grid<f32> = Grid::new(3, 3);
        let corner = grid.neighbors(0, 0);
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&(1, 0)));
        assert!(corner.contains(&(0, 1)));
        assert_eq!(grid.neighbors(1, 1).len(), 4);
    }

    #[test]
    fn test_min_max() {
        let mut grid = Grid::new_with(2, 2, 0.5f32);
        grid.set(0, 1, 0.1);
        grid.set(1, 0, 0.9);
        assert_eq!(grid.min_max(), Some((0.1, 0.9)));
        assert_eq!(Grid::<f32>::new(0, 0).min_max(), None);
    }
}
