//! 2D toroidal grid with 8-connected neighbourhood (cardinal + diagonal).

use crate::error::SpaceError;
use crate::hash;
use daisy_core::{Patch, PopulationCounts};

/// All 8 neighbour offsets `(dx, dy)`, in traversal order.
///
/// `dx` varies slowest, then `dy`; the centre `(0, 0)` is skipped. Stages
/// visit neighbours in exactly this order, which fixes how random draws
/// are consumed.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Wrap `c` onto `[0, dim)`.
///
/// Equivalent to `((c mod dim) + dim) mod dim` for every `c`, including
/// values several periods outside the grid. `dim` must be positive.
#[inline]
pub fn wrap(c: i32, dim: u32) -> i32 {
    wrap_wide(c as i64, dim)
}

#[inline]
fn wrap_wide(c: i64, dim: u32) -> i32 {
    c.rem_euclid(dim as i64) as i32
}

/// A fixed-size toroidal grid of [`Patch`] cells.
///
/// Each cell has coordinate `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`. All accessors wrap their inputs, so `(-1, 0)` is
/// `(width - 1, 0)` and every cell has exactly 8 neighbours, including
/// across edges. On a 1×1 grid all 8 neighbours are the cell itself.
///
/// Cells are stored column-major (`x` outer, `y` inner), which is also
/// the canonical traversal order used by [`Grid::cells`].
#[derive(Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Patch>,
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    /// Reuses this grid's cell storage when the areas match.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.cells.clone_from(&source.cells);
    }
}

impl Grid {
    /// Maximum axis length: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-empty grid of `width * height` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        Self::filled(width, height, Patch::Empty)
    }

    /// Create a grid with every cell set to `patch`.
    pub fn filled(width: u32, height: u32, patch: Patch) -> Result<Self, SpaceError> {
        validate_shape(width, height)?;
        let area = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![patch; area],
        })
    }

    /// Create a grid by evaluating `f(x, y)` for every cell in canonical order.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(i32, i32) -> Patch,
    ) -> Result<Self, SpaceError> {
        validate_shape(width, height)?;
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                cells.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn shape(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        let x = wrap(x, self.width) as usize;
        let y = wrap(y, self.height) as usize;
        x * self.height as usize + y
    }

    /// Occupant at `(x, y)`, wrapped.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Patch {
        self.cells[self.index(x, y)]
    }

    /// Replace the occupant at `(x, y)`, wrapped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, patch: Patch) {
        let i = self.index(x, y);
        self.cells[i] = patch;
    }

    /// The 8 wrapped neighbour coordinates of `(x, y)`, in [`OFFSETS_8`] order.
    pub fn neighbours(&self, x: i32, y: i32) -> [(i32, i32); 8] {
        OFFSETS_8.map(|(dx, dy)| {
            (
                wrap_wide(x as i64 + dx as i64, self.width),
                wrap_wide(y as i64 + dy as i64, self.height),
            )
        })
    }

    /// Iterate `(x, y, patch)` over every cell in canonical order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Patch)> + '_ {
        let h = self.height as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &p)| ((i / h) as i32, (i % h) as i32, p))
    }

    /// Recount every occupant kind from scratch.
    pub fn population(&self) -> PopulationCounts {
        self.cells.iter().copied().collect()
    }

    /// An independent copy with identical per-cell kinds.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Overwrite every cell with the corresponding cell of `source`.
    ///
    /// Reuses this grid's storage. Fails without modifying anything if the
    /// shapes differ.
    pub fn copy_from(&mut self, source: &Grid) -> Result<(), SpaceError> {
        if self.shape() != source.shape() {
            return Err(SpaceError::SizeMismatch {
                expected: self.shape(),
                actual: source.shape(),
            });
        }
        self.cells.copy_from_slice(&source.cells);
        Ok(())
    }

    /// Deterministic FNV-1a hash over the shape and every cell kind.
    ///
    /// Equal grids always hash equal; used for cheap run-to-run comparison.
    pub fn fingerprint(&self) -> u64 {
        hash::grid_hash(self.width, self.height, &self.cells)
    }
}

/// Check that a `width * height` grid can be constructed, without allocating.
pub fn validate_shape(width: u32, height: u32) -> Result<(), SpaceError> {
    if width == 0 || height == 0 {
        return Err(SpaceError::EmptySpace);
    }
    if width > Grid::MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "width",
            value: width,
            max: Grid::MAX_DIM,
        });
    }
    if height > Grid::MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "height",
            value: height,
            max: Grid::MAX_DIM,
        });
    }
    Ok(())
}
