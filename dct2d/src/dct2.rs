// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! In-place separable 2D transforms.
//!
//! Both entry points first run a 1D transform of length `n1` on each of the `n2` rows
//! (the fast dimension), then mix the rows with an `n2`x`n2` coefficient table (the slow
//! dimension). The slow pass writes into a scratch grid and copies it back, so no output
//! row ever sees partially updated input.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{instrument, trace};

use crate::{
    error::{Error, Result},
    grid::{Grid, Sample},
    row_transform::{Dct1d, DctIv1d, Direction},
    table::CoefficientTable,
};

/// In-place 2D DCT-II (`Direction::Forward`) or DCT-III (`Direction::Inverse`).
///
/// `x` must be `n1`x`n2`, `c1` the `n1`x`n1` table handed to `row_dct` for every row
/// and `c2` the `n2`x`n2` table used along the slow dimension.
#[instrument(level = "debug", skip_all, fields(n1 = n1, n2 = n2, direction = ?direction), err)]
pub fn dct_2<T: Sample, P: Dct1d<T>>(
    x: &mut Grid<T>,
    n1: usize,
    n2: usize,
    c1: &CoefficientTable<T>,
    c2: &CoefficientTable<T>,
    direction: Direction,
    row_dct: &P,
) -> Result<()> {
    check_shapes(x, n1, n2, c1, c2)?;
    // Allocated before `x` is touched: on failure the caller's data is unchanged.
    let mut tmp = Grid::new((n1, n2))?;

    transform_rows(x, |row| row_dct.dct(row, c1, direction));
    dct_row(x, &mut tmp, c2, direction)
}

/// In-place 2D DCT-IV. The transform has a single formula for both directions.
#[instrument(level = "debug", skip_all, fields(n1 = n1, n2 = n2), err)]
pub fn dctiv_2<T: Sample, P: DctIv1d<T>>(
    x: &mut Grid<T>,
    n1: usize,
    n2: usize,
    c1: &CoefficientTable<T>,
    c2: &CoefficientTable<T>,
    row_dctiv: &P,
) -> Result<()> {
    check_shapes(x, n1, n2, c1, c2)?;
    let mut tmp = Grid::new((n1, n2))?;

    transform_rows(x, |row| row_dctiv.dctiv(row, c1));
    dctiv_row(x, &mut tmp, c2)
}

fn check_shapes<T: Sample>(
    x: &Grid<T>,
    n1: usize,
    n2: usize,
    c1: &CoefficientTable<T>,
    c2: &CoefficientTable<T>,
) -> Result<()> {
    if n1 == 0 || n2 == 0 {
        return Err(Error::InvalidDimension(n1, n2));
    }
    let (w, h) = x.size();
    if (w, h) != (n1, n2) {
        return Err(Error::ShapeMismatch("signal", n1, n2, w, h));
    }
    c1.check_size("fast-dimension table", n1)?;
    c2.check_size("slow-dimension table", n2)
}

/// Fast-dimension pass: `f` is applied to every row independently.
fn transform_rows<T, F>(x: &mut Grid<T>, f: F)
where
    T: Sample,
    F: Fn(&mut [T]) + Sync + Send,
{
    #[cfg(feature = "parallel")]
    x.par_rows_mut().for_each(f);
    #[cfg(not(feature = "parallel"))]
    x.rows_mut().for_each(f);
}

/// Slow-dimension DCT-II/III: row `i` of the result is `sum_j x[j] * c[i][j]` going
/// forward and `sum_j x[j] * c[j][i]` going backward.
fn dct_row<T: Sample>(
    x: &mut Grid<T>,
    tmp: &mut Grid<T>,
    c: &CoefficientTable<T>,
    direction: Direction,
) -> Result<()> {
    match direction {
        Direction::Forward => mix_rows(x, tmp, |i, j| c.weight(i, j)),
        Direction::Inverse => mix_rows(x, tmp, |i, j| c.weight(j, i)),
    }
}

/// Slow-dimension DCT-IV: row `i` of the result is `sum_j x[j] * c[i][j]`.
fn dctiv_row<T: Sample>(
    x: &mut Grid<T>,
    tmp: &mut Grid<T>,
    c: &CoefficientTable<T>,
) -> Result<()> {
    mix_rows(x, tmp, |i, j| c.weight(i, j))
}

/// Writes `sum_j x[j] * weight(i, j)` into row `i` of `tmp` for every `i`, then copies
/// `tmp` back into `x`.
fn mix_rows<T, W>(x: &mut Grid<T>, tmp: &mut Grid<T>, weight: W) -> Result<()>
where
    T: Sample,
    W: Fn(usize, usize) -> T + Sync,
{
    let src = &*x;
    let accumulate = |i: usize, out: &mut [T]| {
        trace!("mixing output row {i}");
        out.fill(T::zero());
        // j ascending for every element, so the rounding matches a plain triple loop.
        for (j, row) in src.rows().enumerate() {
            let w = weight(i, j);
            for (o, &v) in out.iter_mut().zip(row) {
                *o = *o + v * w;
            }
        }
    };

    #[cfg(feature = "parallel")]
    tmp.par_rows_mut()
        .enumerate()
        .for_each(|(i, out)| accumulate(i, out));
    #[cfg(not(feature = "parallel"))]
    tmp.rows_mut()
        .enumerate()
        .for_each(|(i, out)| accumulate(i, out));

    x.copy_from(tmp)
}
