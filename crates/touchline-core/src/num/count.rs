// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Path Count Numeric Trait
//!
//! `PathCount` collects every bound a counter needs from its count type into
//! a single alias. It is implemented for the unsigned primitive integers and
//! for `num_bigint::BigUint`. A fixed-width type reports
//! `CountError::Overflow` once the number of paths leaves its range, while
//! `BigUint` counts every field exactly.

use num_traits::{CheckedAdd, One, ToPrimitive, Zero};

/// A trait alias for the types a path count can be stored in.
///
/// `checked_add` is the only arithmetic the counters use. It never fails for
/// arbitrary-precision integers.
///
/// # Examples
///
/// ```rust
/// # use touchline_core::num::count::PathCount;
/// fn total<C: PathCount>(counts: &[C]) -> Option<C> {
///     counts.iter().try_fold(C::zero(), |acc, c| acc.checked_add(c))
/// }
///
/// assert_eq!(total(&[1u8, 2, 3]), Some(6));
/// assert_eq!(total(&[200u8, 100]), None);
/// ```
pub trait PathCount:
    Zero
    + One
    + CheckedAdd
    + ToPrimitive
    + Clone
    + PartialEq
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
}

impl<T> PathCount for T where
    T: Zero
        + One
        + CheckedAdd
        + ToPrimitive
        + Clone
        + PartialEq
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + 'static
{
}
