// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Orthonormal coefficient tables and direct matrix-product row transforms.
//!
//! These are slow but exact stand-ins for the table-driven 1D primitives of a real
//! compression pipeline. With these tables a forward transform followed by an inverse
//! one is the identity, and the DCT-IV is its own inverse.

use std::f64::consts::PI;

use crate::{
    error::Result,
    grid::Sample,
    row_transform::{Dct1d, DctIv1d, Direction},
    table::CoefficientTable,
};

#[inline(always)]
fn alpha(u: usize, n: usize) -> f64 {
    if u == 0 {
        (1.0 / n as f64).sqrt()
    } else {
        (2.0 / n as f64).sqrt()
    }
}

/// Orthonormal DCT-II table: `c[i][j] = alpha(i) * cos(pi * (2j + 1) * i / 2n)`.
pub fn dct_table<T: Sample>(n: usize) -> Result<CoefficientTable<T>> {
    CoefficientTable::from_fn(n, |i, j| {
        let angle = PI * (2 * j + 1) as f64 * i as f64 / (2 * n) as f64;
        T::from_f64(alpha(i, n) * angle.cos())
    })
}

/// Orthonormal DCT-IV table: `c[i][j] = sqrt(2 / n) * cos(pi * (2i + 1) * (2j + 1) / 4n)`.
///
/// The table is symmetric, so it is its own transpose and its own inverse.
pub fn dctiv_table<T: Sample>(n: usize) -> Result<CoefficientTable<T>> {
    let scale = (2.0 / n as f64).sqrt();
    CoefficientTable::from_fn(n, |i, j| {
        let angle = PI * ((2 * i + 1) * (2 * j + 1)) as f64 / (4 * n) as f64;
        T::from_f64(scale * angle.cos())
    })
}

/// Row transform computed as a direct product with the coefficient table.
///
/// Forward computes `y[i] = sum_j c[i][j] * x[j]`, inverse `y[i] = sum_j c[j][i] * x[j]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixDct;

impl<T: Sample> Dct1d<T> for MatrixDct {
    fn dct(&self, row: &mut [T], table: &CoefficientTable<T>, direction: Direction) {
        debug_assert_eq!(table.size(), row.len());
        let input = row.to_vec();
        for (i, out) in row.iter_mut().enumerate() {
            *out = match direction {
                Direction::Forward => table
                    .row(i)
                    .iter()
                    .zip(&input)
                    .fold(T::zero(), |acc, (&c, &x)| acc + c * x),
                Direction::Inverse => input
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (j, &x)| acc + table.weight(j, i) * x),
            };
        }
    }
}

impl<T: Sample> DctIv1d<T> for MatrixDct {
    fn dctiv(&self, row: &mut [T], table: &CoefficientTable<T>) {
        self.dct(row, table, Direction::Forward);
    }
}
