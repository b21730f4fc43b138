// SPDX-License-Identifier: GPL-3.0-only

/// Helper to scale some data from PokeApi such as weight...
/// scales a number down by dividing it by 10, converting it to a floating-point
pub fn scale_numbers(num: i64) -> f64 {
    (num as f64) / 10.0
}
