// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid dimensions: {0}x{1}")]
    InvalidDimension(usize, usize),
    #[error("Shape mismatch for {0}: expected {1}x{2}, got {3}x{4}")]
    ShapeMismatch(&'static str, usize, usize, usize, usize),
    #[error("Grid size too large: {0}x{1}")]
    SizeTooLarge(usize, usize),
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
