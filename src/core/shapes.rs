//! Shapes module - piece bitmaps and rotation
//!
//! Each piece is a small 0/1 bitmap in its own local grid. Rotation produces
//! a new bitmap with the standard clockwise transform
//! `rotated[i][j] = original[rows-1-j][i]`; the named spawn definitions are
//! never mutated.

use crate::types::PieceKind;

/// Maximum side length of a piece bitmap (the I piece uses a 4x4 grid)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Immutable piece bitmap with explicit dimensions.
///
/// Only `cells[y][x]` with `y < height` and `x < width` are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    width: u8,
    height: u8,
}

impl ShapeGrid {
    /// Build a bitmap from 0/1 rows. Every row must have the same width.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        assert!(height > 0 && height <= MAX_SHAPE_SIZE);
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_SIZE);

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape bitmap");
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }

        Self {
            cells,
            width: width as u8,
            height: height as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the local cell (x, y) is filled. Out-of-range is empty.
    pub fn filled(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y as usize][x as usize]
    }

    /// Iterate the filled local coordinates as (dx, dy)
    pub fn iter_filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Produce the 90-degree clockwise rotation as a new bitmap.
    ///
    /// Dimensions swap for rectangular bitmaps; the canonical shapes are all
    /// square so their bounding box is stable across rotations.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.height as usize;
        let cols = self.width as usize;

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for i in 0..cols {
            for j in 0..rows {
                cells[i][j] = self.cells[rows - 1 - j][i];
            }
        }

        Self {
            cells,
            width: rows as u8,
            height: cols as u8,
        }
    }
}

/// Horizontal wall-kick offsets tried in order when an in-place rotation
/// collides. First valid offset wins; all failing leaves the piece as-is.
pub const KICK_OFFSETS: [i8; 4] = [1, -1, 2, -2];

/// Spawn bitmap for a piece kind.
///
/// These match the classic canvas layouts: I centered in a 4x4 grid, O in a
/// 2x2, and T/S/Z/J/L in 3x3 grids.
pub fn spawn_shape(kind: PieceKind) -> ShapeGrid {
    match kind {
        PieceKind::I => ShapeGrid::from_rows(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        PieceKind::O => ShapeGrid::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => ShapeGrid::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::S => ShapeGrid::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
        PieceKind::Z => ShapeGrid::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
        PieceKind::J => ShapeGrid::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::L => ShapeGrid::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_KINDS;

    #[test]
    fn test_all_shapes_have_four_filled_cells() {
        for kind in ALL_KINDS {
            let shape = spawn_shape(kind);
            assert_eq!(shape.iter_filled().count(), 4, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_rotate_cw_t_piece() {
        // T:  . X .        rotated:  . X .
        //     X X X                  . X X
        //     . . .                  . X .
        let t = spawn_shape(PieceKind::T);
        let r = t.rotate_cw();

        assert!(r.filled(1, 0));
        assert!(r.filled(1, 1));
        assert!(r.filled(2, 1));
        assert!(r.filled(1, 2));
        assert_eq!(r.iter_filled().count(), 4);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        for kind in ALL_KINDS {
            let shape = spawn_shape(kind);
            let back = shape.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
            assert_eq!(shape, back, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_rotate_swaps_rectangular_dimensions() {
        let bar = ShapeGrid::from_rows(&[&[1, 1, 1]]);
        let r = bar.rotate_cw();
        assert_eq!(r.width(), 1);
        assert_eq!(r.height(), 3);
        assert!(r.filled(0, 0) && r.filled(0, 1) && r.filled(0, 2));
    }

    #[test]
    fn test_named_shapes_not_mutated_by_rotation() {
        let t = spawn_shape(PieceKind::T);
        let _ = t.rotate_cw();
        assert_eq!(t, spawn_shape(PieceKind::T));
    }

    #[test]
    fn test_i_spawn_is_four_wide_on_row_one() {
        let i = spawn_shape(PieceKind::I);
        assert_eq!(i.width(), 4);
        for x in 0..4 {
            assert!(i.filled(x, 1));
            assert!(!i.filled(x, 0));
        }
    }
}
