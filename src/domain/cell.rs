/// Cell is a single position on the unbounded plane.
/// Identity is the coordinate pair; liveness is tracked by the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the Moore neighborhood, row by row, skipping the centre.
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by an offset. Wraps only at the i32 boundary.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The eight cells of the Moore neighborhood
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        MOORE_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equal_when_same_coordinates() {
        assert_eq!(Cell::new(3, 4), Cell::new(3, 4));
        assert_eq!(Cell::from((3, 4)), Cell::new(3, 4));
    }

    #[test]
    fn test_not_equal_when_different_coordinates() {
        assert_ne!(Cell::new(3, 4), Cell::new(4, 3));
    }

    #[test]
    fn test_neighbors_are_eight_distinct_cells() {
        let centre = Cell::new(0, 0);
        let neighbors: HashSet<_> = centre.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&centre));
        assert!(neighbors.iter().all(|c| c.x.abs() <= 1 && c.y.abs() <= 1));
    }

    #[test]
    fn test_neighbors_far_from_origin() {
        let centre = Cell::new(-1_000_000, 1_000_000);
        assert!(centre.neighbors().any(|c| c == Cell::new(-1_000_001, 999_999)));
    }

    #[test]
    fn test_offset_wraps_at_i32_edge() {
        assert_eq!(Cell::new(i32::MAX, 0).offset(1, 0), Cell::new(i32::MIN, 0));
    }
}
