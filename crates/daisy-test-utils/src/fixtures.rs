//! Reusable grid and randomness fixtures.
//!
//! - [`grid_with`]: an empty grid with a few hand-placed daisies.
//! - [`checkerboard`]: alternating black and white daisies.
//! - [`always_draw_zero`] / [`always_draw_high`]: random sources whose
//!   every uniform draw is `0.0` or just below `1.0`, forcing every
//!   probabilistic rule to fire or to hold.

use daisy_core::Patch;
use daisy_space::Grid;
use rand::rngs::mock::StepRng;

/// An all-empty `width * height` grid with `placed` cells set.
///
/// Panics on a zero dimension; fixtures are for tests only.
pub fn grid_with(width: u32, height: u32, placed: &[(i32, i32, Patch)]) -> Grid {
    let mut grid = Grid::new(width, height).expect("fixture grid dimensions");
    for &(x, y, patch) in placed {
        grid.set(x, y, patch);
    }
    grid
}

/// Black on even `x + y`, white on odd.
pub fn checkerboard(width: u32, height: u32) -> Grid {
    Grid::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Patch::BlackDaisy
        } else {
            Patch::WhiteDaisy
        }
    })
    .expect("fixture grid dimensions")
}

/// Every `gen::<f64>()` returns exactly `0.0`.
pub fn always_draw_zero() -> StepRng {
    StepRng::new(0, 0)
}

/// Every `gen::<f64>()` returns the largest value below `1.0`.
pub fn always_draw_high() -> StepRng {
    StepRng::new(u64::MAX, 0)
}
