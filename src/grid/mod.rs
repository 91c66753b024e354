//! Square grid of open and blocked cells with 4-connected adjacency.

pub mod generate;

use std::fmt;

use crate::config::GridFormat;
use crate::errors::GridError;


/// Position on the grid, 0-indexed
/// Ordering is row-major
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance, a lower bound on the steps between two cells
    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Cell one step away, None if the step leaves the first quadrant
    fn offset(&self, (d_row, d_col): (isize, isize)) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Open,
    Blocked,
}


/// Axis of movement between two adjacent cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {

    /// Axis of the step from `from` to `to`
    /// Returns None unless the cells are 4-adjacent
    pub fn between(from: Cell, to: Cell) -> Option<Axis> {
        match (from.row.abs_diff(to.row), from.col.abs_diff(to.col)) {
            (0, 1) => Some(Axis::Horizontal),
            (1, 0) => Some(Axis::Vertical),
            _ => None,
        }
    }

    /// Moving along `next` after moving along `self` is a turn
    pub fn is_turn(self, next: Axis) -> bool {
        self != next
    }
}


/// Neighbor offsets as (row, col) deltas.
/// The order is East, North, West, South and is part of the search contract:
/// equal-cost ties are resolved by the order neighbors are discovered.
pub const COMPASS: [(isize, isize); 4] = [(0, 1), (-1, 0), (0, -1), (1, 0)];


/// Immutable N x N grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    markers: Vec<Marker>, // row-major
}

impl Grid {

    /// Build a grid from row-major markers
    pub fn new(size: usize, markers: Vec<Marker>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        let expected = Self::cell_count(size)?;
        if markers.len() != expected {
            return Err(GridError::MarkerCount { expected, found: markers.len() });
        }
        Ok(Self { size, markers })
    }

    /// Grid with every cell open
    pub fn open(size: usize) -> Result<Self, GridError> {
        Self::new(size, vec![Marker::Open; Self::cell_count(size)?])
    }

    /// Number of cells in a grid of side `size`
    pub fn cell_count(size: usize) -> Result<usize, GridError> {
        size.checked_mul(size).ok_or(GridError::TooLarge(size))
    }

    /// Parse rows using the default format ('.' open, 'x' blocked)
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        Self::from_rows_with(rows, &GridFormat::default())
    }

    /// Parse rows using a custom format
    /// Every row must hold exactly one marker per row of the grid
    pub fn from_rows_with<S: AsRef<str>>(rows: &[S], format: &GridFormat) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut markers = Vec::with_capacity(Self::cell_count(size)?);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != size {
                return Err(GridError::NotSquare { size, found });
            }
            for (col, ch) in line.chars().enumerate() {
                let marker = match ch {
                    c if c == format.open => Marker::Open,
                    c if c == format.blocked => Marker::Blocked,
                    found => return Err(GridError::UnknownMarker { row, col, found }),
                };
                markers.push(marker);
            }
        }

        Self::new(size, markers)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    pub fn marker(&self, cell: Cell) -> Option<Marker> {
        if !self.contains(cell) {
            return None;
        }
        self.markers.get(cell.row * self.size + cell.col).copied()
    }

    /// In bounds and passable
    pub fn is_open(&self, cell: Cell) -> bool {
        self.marker(cell) == Some(Marker::Open)
    }

    /// Open cells adjacent to `cell`, in `COMPASS` order
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        COMPASS
            .into_iter()
            .filter_map(move |delta| cell.offset(delta))
            .filter(move |&next| self.is_open(next))
    }

    /// Render with a custom format, one line per row
    pub fn render(&self, format: &GridFormat) -> String {
        let mut out = String::with_capacity(self.markers.len() + self.size);
        for row in self.markers.chunks(self.size) {
            out.extend(row.iter().map(|m| match m {
                Marker::Open => format.open,
                Marker::Blocked => format.blocked,
            }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&GridFormat::default()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[".x.", "...", ".x."]).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.marker(Cell::new(0, 1)), Some(Marker::Blocked));
        assert!(grid.is_open(Cell::new(1, 1)));
        assert_eq!(grid.marker(Cell::new(3, 0)), None);
    }

    #[test]
    fn test_from_rows_rejects_malformed() {
        let empty: [&str; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(&["..", "..."]),
            Err(GridError::NotSquare { size: 2, found: 3 })
        );
        assert_eq!(
            Grid::from_rows(&["..", ".#"]),
            Err(GridError::UnknownMarker { row: 1, col: 1, found: '#' })
        );
    }

    #[test]
    fn test_new_rejects_wrong_marker_count() {
        assert_eq!(
            Grid::new(2, vec![Marker::Open; 3]),
            Err(GridError::MarkerCount { expected: 4, found: 3 })
        );
        assert_eq!(Grid::open(0), Err(GridError::Empty));
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let size = 1usize << (usize::BITS / 2 + 1);
        assert_eq!(Grid::cell_count(size), Err(GridError::TooLarge(size)));
        assert_eq!(Grid::open(size), Err(GridError::TooLarge(size)));

        // A wrapped product must not let an empty marker list through
        let wraps_to_zero = 1usize << (usize::BITS / 2);
        assert_eq!(Grid::new(wraps_to_zero, vec![]), Err(GridError::TooLarge(wraps_to_zero)));

        assert_eq!(Grid::cell_count(3), Ok(9));
    }

    #[test]
    fn test_neighbors_compass_order() {
        let grid = Grid::open(3).unwrap();
        let neighbors: Vec<Cell> = grid.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![Cell::new(1, 2), Cell::new(0, 1), Cell::new(1, 0), Cell::new(2, 1)]
        );
    }

    #[test]
    fn test_neighbors_skip_bounds_and_blocked() {
        let grid = Grid::from_rows(&[".x.", "...", ".x."]).unwrap();
        let neighbors: Vec<Cell> = grid.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(neighbors, vec![Cell::new(1, 0)]);

        let corner: Vec<Cell> = grid.neighbors(Cell::new(2, 2)).collect();
        assert_eq!(corner, vec![Cell::new(1, 2)]);
    }

    #[test]
    fn test_axis() {
        let a = Cell::new(1, 1);
        assert_eq!(Axis::between(a, Cell::new(1, 2)), Some(Axis::Horizontal));
        assert_eq!(Axis::between(a, Cell::new(0, 1)), Some(Axis::Vertical));
        assert_eq!(Axis::between(a, Cell::new(2, 2)), None);
        assert_eq!(Axis::between(a, a), None);
        assert!(Axis::Horizontal.is_turn(Axis::Vertical));
        assert!(!Axis::Vertical.is_turn(Axis::Vertical));
    }

    #[test]
    fn test_display_round_trip() {
        let rows = ["...x", ".x..", "....", "xx.."];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.to_string(), "...x\n.x..\n....\nxx..\n");

        let format = GridFormat { open: ' ', blocked: '#' };
        assert_eq!(grid.render(&format).lines().next(), Some("   #"));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Cell::new(0, 3).manhattan_distance(&Cell::new(2, 0)), 5);
    }
}
