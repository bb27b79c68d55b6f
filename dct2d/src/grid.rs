// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt::Debug;
use std::slice::{ChunksExact, ChunksExactMut};

use num_traits::Float;
use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};

mod private {
    pub trait Sealed {}
}

/// Real-valued sample type the transforms operate on.
pub trait Sample: private::Sealed + Float + Default + Debug + Send + Sync + 'static {
    fn from_f64(f: f64) -> Self;
    fn as_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($ty: ty) => {
        impl private::Sealed for $ty {}
        impl Sample for $ty {
            fn from_f64(f: f64) -> $ty {
                f as $ty
            }
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_sample!(f32);
impl_sample!(f64);

/// Dense row-major 2D array of samples.
///
/// `size()` is `(n1, n2)`: `n1` samples per row along the fast dimension,
/// `n2` rows along the slow dimension.
#[derive(PartialEq)]
pub struct Grid<T: Sample> {
    size: (usize, usize),
    data: Vec<T>,
}

impl<T: Sample> Debug for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}x{}",
            std::any::type_name::<T>(),
            self.size.0,
            self.size.1
        )
    }
}

impl<T: Sample> Grid<T> {
    /// Allocates a zero-filled grid.
    #[instrument(level = "debug", err)]
    pub fn new(size: (usize, usize)) -> Result<Grid<T>> {
        let (n1, n2) = size;
        if n1 == 0 || n2 == 0 {
            return Err(Error::InvalidDimension(n1, n2));
        }
        let total_size = n1.checked_mul(n2).ok_or(Error::SizeTooLarge(n1, n2))?;
        debug!("trying to allocate grid");
        let mut data = vec![];
        data.try_reserve_exact(total_size)?;
        data.resize(total_size, T::zero());
        Ok(Grid { size, data })
    }

    /// Builds a grid from `n2` rows of `n1` samples each.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Grid<T>> {
        let n2 = rows.len();
        let n1 = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::new((n1, n2))?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n1 {
                return Err(Error::ShapeMismatch("grid row", n1, 1, row.len(), 1));
            }
            grid.row_mut(y).copy_from_slice(row);
        }
        Ok(grid)
    }

    #[cfg(test)]
    pub fn new_random<R: rand::Rng>(size: (usize, usize), rng: &mut R) -> Result<Grid<T>> {
        let mut grid = Self::new(size)?;
        grid.data
            .iter_mut()
            .for_each(|v| *v = T::from_f64(rng.random_range(-1.0..1.0)));
        Ok(grid)
    }

    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    pub fn row(&self, row: usize) -> &[T] {
        debug_assert!(row < self.size.1);
        let start = row * self.size.0;
        &self.data[start..start + self.size.0]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        debug_assert!(row < self.size.1);
        let start = row * self.size.0;
        &mut self.data[start..start + self.size.0]
    }

    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.size.0)
    }

    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, T> {
        self.data.chunks_exact_mut(self.size.0)
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, T> {
        use rayon::slice::ParallelSliceMut;
        self.data.par_chunks_exact_mut(self.size.0)
    }

    /// All samples, row after row.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn fill(&mut self, v: T) {
        self.data.fill(v);
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    pub fn try_clone(&self) -> Result<Grid<T>> {
        let mut data = vec![];
        data.try_reserve_exact(self.data.len())?;
        data.extend_from_slice(&self.data);
        Ok(Grid {
            size: self.size,
            data,
        })
    }

    /// Overwrites every sample of `self` with the sample at the same position in `other`.
    #[instrument(level = "trace", skip_all, err)]
    pub fn copy_from(&mut self, other: &Grid<T>) -> Result<()> {
        if other.size != self.size {
            return Err(Error::ShapeMismatch(
                "copy source",
                self.size.0,
                self.size.1,
                other.size.0,
                other.size.1,
            ));
        }
        for (i, (dst, src)) in self.rows_mut().zip(other.rows()).enumerate() {
            trace!("copying row {i}");
            dst.copy_from_slice(src);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use arbtest::arbitrary::{Arbitrary, Unstructured};
    use rand::SeedableRng;
    use test_log::test;

    use super::*;

    #[test]
    fn new_is_zeroed() -> Result<()> {
        let grid = Grid::<f32>::new((3, 5))?;
        assert_eq!(grid.size(), (3, 5));
        assert_eq!(grid.rows().count(), 5);
        assert!(grid.as_slice().iter().all(|&v| v == 0.0));
        Ok(())
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Grid::<f32>::new((0, 4)),
            Err(Error::InvalidDimension(0, 4))
        ));
        assert!(matches!(
            Grid::<f64>::new((4, 0)),
            Err(Error::InvalidDimension(4, 0))
        ));
    }

    #[test]
    fn overflowing_size_rejected() {
        assert!(matches!(
            Grid::<f32>::new((usize::MAX, 2)),
            Err(Error::SizeTooLarge(_, 2))
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn huge_allocation_is_out_of_memory() {
        assert!(matches!(
            Grid::<f32>::new((1 << 31, 1 << 30)),
            Err(Error::OutOfMemory(_))
        ));
    }

    #[test]
    fn from_rows_layout() -> Result<()> {
        let grid = Grid::from_rows(&[[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        assert_eq!(grid.size(), (3, 2));
        assert_eq!(grid.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(grid.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(grid.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        Ok(())
    }

    #[test]
    fn from_rows_ragged() {
        let rows = vec![vec![1.0f32, 2.0], vec![3.0]];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(Error::ShapeMismatch("grid row", 2, 1, 1, 1))
        ));
        let empty: Vec<Vec<f32>> = vec![];
        assert!(matches!(
            Grid::from_rows(&empty),
            Err(Error::InvalidDimension(0, 0))
        ));
    }

    #[test]
    fn copy_from_checks_size() -> Result<()> {
        let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(0);
        let src = Grid::<f32>::new_random((4, 3), &mut rng)?;
        let mut dst = Grid::new((4, 3))?;
        dst.copy_from(&src)?;
        assert_eq!(dst, src);

        let mut other = Grid::new((3, 4))?;
        assert!(matches!(
            other.copy_from(&src),
            Err(Error::ShapeMismatch("copy source", 3, 4, 4, 3))
        ));
        Ok(())
    }

    #[test]
    fn try_clone_is_independent() -> Result<()> {
        let mut grid = Grid::from_rows(&[[1.0f32, 2.0]])?;
        let clone = grid.try_clone()?;
        grid.fill(7.0);
        assert_eq!(clone.row(0), &[1.0, 2.0]);
        assert_eq!(grid.row(0), &[7.0, 7.0]);
        Ok(())
    }

    #[test]
    fn rows_mut_touch_only_their_row() {
        arbtest::arbtest(|u: &mut Unstructured| {
            let n1 = u.int_in_range(1..=9)?;
            let n2 = u.int_in_range(1..=9)?;
            let target = u.int_in_range(0..=n2 - 1)?;
            let mut grid = Grid::<f64>::new((n1, n2)).unwrap();
            grid.rows_mut().nth(target).unwrap().fill(1.0);
            for y in 0..n2 {
                let expected = if y == target { 1.0 } else { 0.0 };
                assert!(grid.row(y).iter().all(|&v| v == expected));
            }
            Ok(())
        });
    }

    #[test]
    fn sample_f64_conversions() {
        arbtest::arbtest(|u| {
            let v = f32::arbitrary(u)?;
            if !v.is_nan() {
                assert_eq!(v, f32::from_f64(v.as_f64()));
            }
            Ok(())
        });
    }
}
