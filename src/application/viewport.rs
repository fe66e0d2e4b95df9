use crate::domain::{Bounds, Cell};
use crate::error::ConfigError;

/// Largest area size the console layout accepts
pub const MAX_AREA_SIZE: u32 = 10_000;

/// Viewport is the rectangular window of the plane that gets drawn.
/// The plane itself has no edges; the viewport only decides what is shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Viewport {
    min_x: i32,
    min_y: i32,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(min_x: i32, min_y: i32, width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyViewport { width, height });
        }
        Ok(Self { min_x, min_y, width, height })
    }

    /// Console-shaped window for an area size `h`: rows `-h..2h`,
    /// columns `-4h..4h`.
    pub fn from_area_size(area_size: u32) -> Result<Self, ConfigError> {
        if area_size == 0 {
            return Err(ConfigError::NonPositiveAreaSize);
        }
        if area_size > MAX_AREA_SIZE {
            return Err(ConfigError::AreaSizeTooLarge { max: MAX_AREA_SIZE });
        }
        let h = area_size as i32;
        Self::new(-4 * h, -h, area_size * 8, area_size * 3)
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Top-left corner on the plane
    pub const fn origin(&self) -> Cell {
        Cell::new(self.min_x, self.min_y)
    }

    /// Plane coordinate of a (column, row) inside the window
    pub fn to_plane(&self, col: u32, row: u32) -> Cell {
        self.origin().offset(col as i32, row as i32)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        let dx = i64::from(cell.x) - i64::from(self.min_x);
        let dy = i64::from(cell.y) - i64::from(self.min_y);
        (0..i64::from(self.width)).contains(&dx) && (0..i64::from(self.height)).contains(&dy)
    }

    /// Plane coordinates row by row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell>> + '_ {
        (0..self.height).map(move |row| (0..self.width).map(move |col| self.to_plane(col, row)))
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.min_x = self.min_x.wrapping_add(dx);
        self.min_y = self.min_y.wrapping_add(dy);
    }

    /// Same size, moved so its centre sits on the centre of `bounds`
    pub fn centred_on(&self, bounds: Bounds) -> Self {
        let mid = |lo: i32, hi: i32| ((i64::from(lo) + i64::from(hi)) / 2) as i32;
        let cx = mid(bounds.min_x, bounds.max_x);
        let cy = mid(bounds.min_y, bounds.max_y);
        Self {
            min_x: cx.wrapping_sub((self.width / 2) as i32),
            min_y: cy.wrapping_sub((self.height / 2) as i32),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_viewport() {
        assert_eq!(
            Viewport::new(0, 0, 0, 5),
            Err(ConfigError::EmptyViewport { width: 0, height: 5 })
        );
        assert!(Viewport::new(0, 0, 1, 1).is_ok());
    }

    #[test]
    fn test_area_size_shape() {
        let view = Viewport::from_area_size(5).unwrap();
        assert_eq!(view.dimensions(), (40, 15));
        assert_eq!(view.origin(), Cell::new(-20, -5));
        assert!(view.contains(Cell::new(19, 9)));
        assert!(!view.contains(Cell::new(20, 9)));
        assert!(!view.contains(Cell::new(0, 10)));
        assert_eq!(Viewport::from_area_size(0), Err(ConfigError::NonPositiveAreaSize));
        assert_eq!(
            Viewport::from_area_size(MAX_AREA_SIZE + 1),
            Err(ConfigError::AreaSizeTooLarge { max: MAX_AREA_SIZE })
        );
    }

    #[test]
    fn test_rows_cover_window_in_order() {
        let view = Viewport::new(-1, 3, 2, 2).unwrap();
        let rows: Vec<Vec<Cell>> = view.rows().map(|r| r.collect()).collect();
        assert_eq!(
            rows,
            vec![
                vec![Cell::new(-1, 3), Cell::new(0, 3)],
                vec![Cell::new(-1, 4), Cell::new(0, 4)],
            ]
        );
    }

    #[test]
    fn test_pan() {
        let mut view = Viewport::new(0, 0, 4, 4).unwrap();
        view.pan(-3, 2);
        assert_eq!(view.origin(), Cell::new(-3, 2));
    }

    #[test]
    fn test_centred_on_bounds() {
        let view = Viewport::new(0, 0, 10, 4).unwrap();
        let bounds = Bounds { min_x: 1_000_000, min_y: -2, max_x: 1_000_002, max_y: 2 };
        let moved = view.centred_on(bounds);
        assert_eq!(moved.dimensions(), (10, 4));
        assert_eq!(moved.origin(), Cell::new(1_000_001 - 5, -2));
        assert!(moved.contains(Cell::new(1_000_000, -2)));
    }
}
