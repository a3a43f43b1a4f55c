use super::error::LifeError;

/// One cell of the grid, either dead or alive.
///
/// The grid stores this enum directly; the caller-chosen display symbols
/// only come into play at the render boundary (see [`Glyphs`]).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Conway's transition rule (B3/S23):
    /// - a live cell with two or three live neighbours survives,
    /// - a dead cell with exactly three live neighbours is born,
    /// - every other cell is dead in the next generation.
    pub const fn next(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// The caller-chosen pair of display symbols for the two cell states.
///
/// The symbols are opaque to the engine: any equality-comparable, clonable
/// type works (`char` by default). The pair must be distinct, otherwise a
/// rendered frame could not be read back unambiguously.
#[derive(Clone, Debug)]
pub struct Glyphs<T = char> {
    alive: T,
    dead: T,
}

impl<T: Clone + PartialEq> Glyphs<T> {
    pub fn new(alive: T, dead: T) -> Result<Self, LifeError> {
        if alive == dead {
            return Err(LifeError::IndistinctGlyphs);
        }
        Ok(Self { alive, dead })
    }

    /// The display symbol for a cell state.
    pub fn glyph(&self, cell: Cell) -> &T {
        match cell {
            Cell::Alive => &self.alive,
            Cell::Dead => &self.dead,
        }
    }
}

impl Default for Glyphs<char> {
    /// Solid block for live cells, blank for dead ones.
    fn default() -> Self {
        Self {
            alive: '█',
            dead: ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_dies_of_underpopulation() {
        assert_eq!(Cell::Alive.next(0), Cell::Dead);
        assert_eq!(Cell::Alive.next(1), Cell::Dead);
    }

    #[test]
    fn live_cell_survives_with_two_or_three_neighbors() {
        assert_eq!(Cell::Alive.next(2), Cell::Alive);
        assert_eq!(Cell::Alive.next(3), Cell::Alive);
    }

    #[test]
    fn live_cell_dies_of_overpopulation() {
        assert_eq!(Cell::Alive.next(4), Cell::Dead);
        assert_eq!(Cell::Alive.next(8), Cell::Dead);
    }

    #[test]
    fn dead_cell_born_with_exactly_three_neighbors() {
        assert_eq!(Cell::Dead.next(3), Cell::Alive);
        assert_eq!(Cell::Dead.next(2), Cell::Dead);
        assert_eq!(Cell::Dead.next(4), Cell::Dead);
    }

    #[test]
    fn glyphs_must_be_distinct() {
        assert_eq!(
            Glyphs::new('x', 'x').unwrap_err(),
            LifeError::IndistinctGlyphs
        );
        assert!(Glyphs::new('#', '.').is_ok());
    }

    #[test]
    fn glyphs_map_both_states() {
        let glyphs = Glyphs::new("on", "off").unwrap();
        assert_eq!(*glyphs.glyph(Cell::Alive), "on");
        assert_eq!(*glyphs.glyph(Cell::Dead), "off");
    }
}
