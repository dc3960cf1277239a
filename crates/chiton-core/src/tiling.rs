//! Seed tiling: build a larger cost grid by repeating a seed grid.
//!
//! The tile at block offset `(tx, ty)` holds the seed with every cost
//! advanced `tx + ty` steps around the cycle `1, 2, ..., 9, 1, ...`.

use crate::error::{GridError, InvalidGrid};
use crate::grid::{self, CostGrid, MAX_COST};

/// The cyclic successor over `1..=9`: `9` wraps back to `1`.
#[inline]
pub fn wrapping_increment(n: u8) -> u8 {
    if n >= MAX_COST { 1 } else { n + 1 }
}

/// Apply [`wrapping_increment`] `m` times to `n`, in closed form.
///
/// `n` must lie in `1..=9`; `m == 0` returns `n` unchanged.
#[inline]
pub fn wrapping_increment_by(n: u8, m: u32) -> u8 {
    debug_assert!((1..=MAX_COST).contains(&n), "cost {n} outside 1..=9");
    let cycle = u32::from(MAX_COST);
    // (n - 1 + m) mod 9 + 1, with n - 1 written as n + 8 to stay unsigned.
    ((u32::from(n) + cycle - 1 + m % cycle) % cycle + 1) as u8
}

/// Tile `seed` `factor` times along both axes.
///
/// The result is `factor` times wider and taller than the seed. A factor of
/// one returns a copy of the seed.
pub fn expand(seed: &CostGrid, factor: usize) -> Result<CostGrid, GridError> {
    if factor == 0 {
        return Err(InvalidGrid::ZeroFactor.into());
    }
    let sw = seed.width() as usize;
    let sh = seed.height() as usize;
    let too_large = || {
        GridError::from(InvalidGrid::TooLarge {
            width: sw.saturating_mul(factor),
            height: sh.saturating_mul(factor),
        })
    };
    let width = sw.checked_mul(factor).ok_or_else(too_large)?;
    let height = sh.checked_mul(factor).ok_or_else(too_large)?;
    let (w, h) = grid::checked_dims(width, height)?;

    let seed_rows: Vec<&[u8]> = seed.rows().collect();
    let cell = |i: usize| {
        let (r, c) = (i / width, i % width);
        let shift = (r / sh + c / sw) as u32;
        wrapping_increment_by(seed_rows[r % sh][c % sw], shift)
    };

    #[cfg(feature = "parallel")]
    let cells: Vec<u8> = {
        use rayon::prelude::*;
        (0..width * height).into_par_iter().map(cell).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let cells: Vec<u8> = (0..width * height).map(cell).collect();

    log::debug!("expanded {sw}x{sh} seed by {factor} to {width}x{height}");
    Ok(CostGrid::from_cells(w, h, cells))
}

impl CostGrid {
    /// Tile this grid `factor` times along both axes. See [`expand`].
    pub fn expand(&self, factor: usize) -> Result<CostGrid, GridError> {
        expand(self, factor)
    }
}
