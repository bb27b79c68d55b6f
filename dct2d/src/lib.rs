// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Separable, in-place 2D DCT-II/III and DCT-IV operators.
//!
//! [`dct_2`] and [`dctiv_2`] run a caller-supplied 1D transform over every row of a
//! [`Grid`], then mix the rows with a precomputed [`CoefficientTable`].
//! [`reference`] provides orthonormal tables and a direct matrix-product row transform.

pub mod dct2;
pub mod error;
pub mod grid;
pub mod reference;
pub mod row_transform;
pub mod table;

pub use dct2::{dct_2, dctiv_2};
pub use error::{Error, Result};
pub use grid::{Grid, Sample};
pub use row_transform::{Dct1d, DctIv1d, Direction};
pub use table::CoefficientTable;
