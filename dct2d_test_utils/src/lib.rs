// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

/// Absolute difference that works for both signed and unsigned operands.
pub fn abs_delta<T: PartialOrd + std::ops::Sub<Output = T>>(left_val: T, right_val: T) -> T {
    if left_val > right_val {
        left_val - right_val
    } else {
        right_val - left_val
    }
}

#[macro_export]
macro_rules! assert_almost_eq {
    ($left:expr, $right:expr, $max_error:expr $(,)?) => {
        let (left_val, right_val, max_error) = (&$left, &$right, &$max_error);
        match $crate::abs_delta(*left_val, *right_val).partial_cmp(max_error) {
            Some(std::cmp::Ordering::Greater) | None => panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n max_error: `{:?}`",
                left_val, right_val, max_error
            ),
            _ => {}
        }
    };
}

#[macro_export]
macro_rules! assert_all_almost_eq {
    ($left:expr, $right:expr, $max_error:expr $(,)?) => {
        let (left_val, right_val, max_error) = (&$left, &$right, &$max_error);
        if left_val.len() != right_val.len() {
            panic!(
                "assertion failed: `(left ≈ right)`\n left.len(): `{}`,\n right.len(): `{}`",
                left_val.len(),
                right_val.len()
            );
        }
        for index in 0..left_val.len() {
            match $crate::abs_delta(left_val[index], right_val[index]).partial_cmp(max_error) {
                Some(std::cmp::Ordering::Greater) | None => panic!(
                    "assertion failed: `(left ≈ right)`\n left[{}]: `{:?}`,\n right[{}]: `{:?}`,\n max_error: `{:?}`",
                    index, left_val[index], index, right_val[index], max_error
                ),
                _ => {}
            }
        }
    };
}
