// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt::Debug;

use crate::{
    error::{Error, Result},
    grid::{Grid, Sample},
};

/// Square `n`x`n` matrix of precomputed transform weights, indexed `weight(i, j)`.
#[derive(PartialEq)]
pub struct CoefficientTable<T: Sample> {
    grid: Grid<T>,
}

impl<T: Sample> Debug for CoefficientTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table {:?}", self.grid)
    }
}

impl<T: Sample> CoefficientTable<T> {
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<CoefficientTable<T>> {
        let grid = Grid::from_rows(rows)?;
        let (w, h) = grid.size();
        if w != h {
            return Err(Error::ShapeMismatch("coefficient table", h, h, w, h));
        }
        Ok(CoefficientTable { grid })
    }

    pub fn from_fn<F>(n: usize, mut f: F) -> Result<CoefficientTable<T>>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut grid = Grid::new((n, n))?;
        for (i, row) in grid.rows_mut().enumerate() {
            for (j, w) in row.iter_mut().enumerate() {
                *w = f(i, j);
            }
        }
        Ok(CoefficientTable { grid })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.grid.size().1
    }

    #[inline(always)]
    pub fn weight(&self, i: usize, j: usize) -> T {
        self.grid.row(i)[j]
    }

    pub fn row(&self, i: usize) -> &[T] {
        self.grid.row(i)
    }

    pub fn transposed(&self) -> Result<CoefficientTable<T>> {
        Self::from_fn(self.size(), |i, j| self.weight(j, i))
    }

    pub(crate) fn check_size(&self, what: &'static str, n: usize) -> Result<()> {
        let size = self.size();
        if size != n {
            return Err(Error::ShapeMismatch(what, n, n, size, size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn rejects_non_square() {
        assert!(matches!(
            CoefficientTable::from_rows(&[[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]]),
            Err(Error::ShapeMismatch("coefficient table", 2, 2, 3, 2))
        ));
    }

    #[test]
    fn transpose() -> Result<()> {
        let table = CoefficientTable::from_rows(&[[1.0f64, 2.0], [3.0, 4.0]])?;
        let t = table.transposed()?;
        assert_eq!(t.row(0), &[1.0, 3.0]);
        assert_eq!(t.row(1), &[2.0, 4.0]);
        assert_eq!(t.transposed()?, table);
        Ok(())
    }

    #[test]
    fn size_check() -> Result<()> {
        let table = CoefficientTable::<f32>::from_fn(3, |i, j| (i * 3 + j) as f32)?;
        assert_eq!(table.size(), 3);
        assert_eq!(table.weight(2, 1), 7.0);
        table.check_size("slow-dimension table", 3)?;
        assert!(matches!(
            table.check_size("slow-dimension table", 4),
            Err(Error::ShapeMismatch("slow-dimension table", 4, 4, 3, 3))
        ));
        Ok(())
    }

    #[test]
    fn empty_table_rejected() {
        assert!(matches!(
            CoefficientTable::<f32>::from_fn(0, |_, _| 0.0),
            Err(Error::InvalidDimension(0, 0))
        ));
    }
}
