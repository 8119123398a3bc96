//! The [`Cell`] type: the state of one square on the board.

/// A single cell state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Whether the cell is alive.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// 1 for a live cell, 0 otherwise. Used when summing neighbourhoods.
    #[inline]
    pub const fn count(self) -> u8 {
        self.is_alive() as u8
    }

    /// Glyph used by the plain-text rendering of a grid.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Alive => '#',
            Self::Dead => '.',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

impl From<Cell> for bool {
    fn from(c: Cell) -> Self {
        c.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn bool_conversions() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(bool::from(Cell::Alive));
        assert_eq!(Cell::Alive.count() + Cell::Dead.count(), 1);
    }
}
