use super::cell::{Cell, Glyphs};
use super::error::LifeError;

/// One complete snapshot of cell states, as rows of cells.
pub type Generation = Vec<Vec<Cell>>;

/// The eight offsets of the Moore neighborhood, relative to a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size rectangular Game of Life board.
///
/// Holds the current generation and advances it one tick at a time.
/// Dimensions are immutable after construction and the grid has hard
/// edges: neighbors beyond the boundary simply do not exist, there is
/// no toroidal wraparound.
#[derive(Debug)]
pub struct Grid<T = char> {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    glyphs: Glyphs<T>,
    generation: u64,
}

impl<T: Clone + PartialEq> Grid<T> {
    /// Create a grid seeded with an initial generation.
    ///
    /// The seed must be exactly `rows` rows of exactly `cols` cells each;
    /// anything else is rejected up front so the engine never has to
    /// worry about ragged or short patterns later.
    pub fn new(
        rows: usize,
        cols: usize,
        glyphs: Glyphs<T>,
        seed: Generation,
    ) -> Result<Self, LifeError> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        if seed.len() != rows {
            return Err(LifeError::SeedDimensionMismatch {
                rows,
                cols,
                seed_rows: seed.len(),
                seed_cols: seed.first().map_or(0, Vec::len),
            });
        }
        if let Some(bad) = seed.iter().find(|row| row.len() != cols) {
            return Err(LifeError::SeedDimensionMismatch {
                rows,
                cols,
                seed_rows: seed.len(),
                seed_cols: bad.len(),
            });
        }

        Ok(Self {
            rows,
            cols,
            cells: seed.into_iter().flatten().collect(),
            glyphs,
            generation: 0,
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Ticks elapsed since construction.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Cell at `(row, col)`, or `None` if the coordinate is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    fn at(&self, row: usize, col: usize) -> Cell {
        match self.get(row, col) {
            Some(cell) => cell,
            None => panic!(
                "cell ({row}, {col}) is out of bounds for a {}x{} grid",
                self.rows, self.cols
            ),
        }
    }

    /// In-bounds coordinates of the up-to-eight cells adjacent to
    /// `(row, col)`.
    ///
    /// This is the one canonical boundary check: offsets that would land
    /// outside `[0, rows) x [0, cols)` are skipped before any index is
    /// formed, so no out-of-range coordinate ever exists.
    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.rows && c < self.cols).then_some((r, c))
        })
    }

    /// How many of the cells adjacent to `(row, col)` are alive, in [0, 8].
    ///
    /// Panics if `(row, col)` itself is out of range; that is a caller bug,
    /// not a runtime condition.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is out of bounds for a {}x{} grid",
            self.rows,
            self.cols
        );
        self.neighbors(row, col)
            .filter(|&(r, c)| self.at(r, c).is_alive())
            .count() as u8
    }

    /// The state `(row, col)` will take in the next generation, computed
    /// against the current one. Pure: performs no mutation.
    pub fn next_state(&self, row: usize, col: usize) -> Cell {
        self.at(row, col).next(self.neighbor_count(row, col))
    }

    /// Advance the whole grid by one tick.
    ///
    /// Every next state is computed against the frozen current generation
    /// and collected into a fresh buffer, which then replaces the old one
    /// by move. Births and deaths are simultaneous; no cell ever observes
    /// an already-updated neighbor, regardless of iteration order.
    pub fn step(&mut self) {
        let next: Vec<Cell> = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_state(row, col))
            .collect();

        self.cells = next;
        self.generation += 1;
    }

    /// The current generation as rows of display symbols.
    ///
    /// This is the only view of grid state the engine exposes; an external
    /// renderer prints each row followed by a line break.
    pub fn render(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|&cell| self.glyphs.glyph(cell).clone()).collect())
            .collect()
    }
}
