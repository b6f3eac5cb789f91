//! Plain-text rendering of a grid.

use daisy_core::Patch;
use daisy_space::Grid;

/// Glyph drawn for each occupant kind.
pub fn glyph(patch: Patch) -> char {
    match patch {
        Patch::Empty => '.',
        Patch::BlackDaisy => '#',
        Patch::WhiteDaisy => 'o',
    }
}

/// One line per row, `y = 0` first, each `width` glyphs long.
pub fn ascii_frame(grid: &Grid) -> String {
    let (width, height) = grid.shape();
    let mut out = String::with_capacity((width as usize + 1) * height as usize);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            out.push(glyph(grid.get(x, y)));
        }
        out.push('\n');
    }
    out
}
