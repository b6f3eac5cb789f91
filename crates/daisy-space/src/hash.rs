//! Hashing utilities for grid comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state.
//! These hashes are not cryptographically secure; they exist for cheap
//! equality checks between runs.

use daisy_core::Patch;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

fn patch_tag(patch: Patch) -> u8 {
    match patch {
        Patch::Empty => 0,
        Patch::BlackDaisy => 1,
        Patch::WhiteDaisy => 2,
    }
}

/// Hash a grid's shape followed by every cell tag in storage order.
///
/// Shape is folded in first so that grids with the same cell sequence
/// but transposed dimensions hash differently.
pub fn grid_hash(width: u32, height: u32, cells: &[Patch]) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, width);
    hash = fnv1a_u32(hash, height);
    for &cell in cells {
        hash = fnv1a_byte(hash, patch_tag(cell));
    }
    hash
}
