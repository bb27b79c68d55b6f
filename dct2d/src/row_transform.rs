// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::{grid::Sample, table::CoefficientTable};

/// Direction of a DCT-II/III transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// DCT-II: applies the coefficient table as stored.
    Forward,
    /// DCT-III: applies the transpose of the coefficient table.
    Inverse,
}

impl Direction {
    /// Maps the integer flag used by table-driven DCT libraries: `0` is forward,
    /// anything else inverse.
    pub fn from_flag(flag: u32) -> Direction {
        if flag == 0 {
            Direction::Forward
        } else {
            Direction::Inverse
        }
    }

    pub fn inverse(self) -> Direction {
        match self {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        }
    }
}

/// One-dimensional DCT-II/III applied in place to a single row along the fast dimension.
///
/// `table` is the `row.len()`x`row.len()` coefficient table the 2D entry points were given.
pub trait Dct1d<T: Sample>: Sync {
    fn dct(&self, row: &mut [T], table: &CoefficientTable<T>, direction: Direction);
}

/// One-dimensional DCT-IV applied in place to a single row. The same formula is used
/// for both directions.
pub trait DctIv1d<T: Sample>: Sync {
    fn dctiv(&self, row: &mut [T], table: &CoefficientTable<T>);
}
