// grid.rs - Toroidal cell storage for the Game of Life

/// Offsets of the 8 Moore neighbors, as (dx, dy).
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Row-major grid of binary cells whose edges wrap around on both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// All-dead grid. Callers guarantee `width > 0 && height > 0`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// State of the cell at column `x`, row `y`. Off-grid cells read as dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.cells[self.index_of(x, y)] == 1
    }

    /// Returns `false` when the coordinate is off-grid and nothing was written.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index_of(x, y);
        self.cells[idx] = alive as u8;
        true
    }

    /// Flips a cell. Returns `false` when the coordinate is off-grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index_of(x, y);
        self.cells[idx] ^= 1;
        true
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Coordinates `(x, y)` of every live cell, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 1)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// Live toroidal neighbors of `(x, y)`, always in `0..=8`.
    pub fn neighbors(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width as isize, self.height as isize);
        let mut count = 0;
        for &(dx, dy) in &NEIGHBORS {
            let nx = (x as isize + dx).rem_euclid(w) as usize;
            let ny = (y as isize + dy).rem_euclid(h) as usize;
            count += self.cells[self.index_of(nx, ny)];
        }
        count
    }
}
