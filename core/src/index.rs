//! Conversion of foreign index representations into `ArrayMap` slots.
//!
//! Native indices are `i64`. Anything else that can name a slot (other integer
//! widths, floats, numeric strings) goes through [`IntoIndex`], which is the
//! single place an [`Error::InvalidIndex`] can come from.

use crate::{Error, Result, String, ToString, format};

/// A value that can be interpreted as an `ArrayMap` index.
pub trait IntoIndex {
    fn into_index(self) -> Result<i64>;
}

macro_rules! impl_into_index_lossless {
    ($($ty:ty),*) => {
        $(
            impl IntoIndex for $ty {
                #[inline(always)]
                fn into_index(self) -> Result<i64> {
                    Ok(i64::from(self))
                }
            }
        )*
    };
}

macro_rules! impl_into_index_checked {
    ($($ty:ty),*) => {
        $(
            impl IntoIndex for $ty {
                #[inline]
                fn into_index(self) -> Result<i64> {
                    i64::try_from(self).map_err(|_| Error::invalid_index(self.to_string()))
                }
            }
        )*
    };
}

impl_into_index_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_into_index_checked!(isize, usize, u64, i128, u128);

impl IntoIndex for f64 {
    /// Finite values truncate toward zero. NaN, infinities and values outside
    /// the `i64` range are rejected.
    fn into_index(self) -> Result<i64> {
        // 2^63 is exactly representable; anything at or above it overflows.
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;

        if !self.is_finite() {
            return Err(Error::invalid_index(format!("{self}")));
        }
        // `as` saturates, so the range has to be checked before truncating.
        if self >= LIMIT || self < -LIMIT {
            return Err(Error::invalid_index(format!("{self}")));
        }
        Ok(self as i64)
    }
}

impl IntoIndex for f32 {
    fn into_index(self) -> Result<i64> {
        f64::from(self).into_index()
    }
}

impl IntoIndex for &str {
    fn into_index(self) -> Result<i64> {
        parse_integer_prefix(self).ok_or_else(|| Error::invalid_index(self))
    }
}

impl IntoIndex for String {
    fn into_index(self) -> Result<i64> {
        match parse_integer_prefix(&self) {
            Some(index) => Ok(index),
            None => Err(Error::invalid_index(self)),
        }
    }
}

impl IntoIndex for &String {
    fn into_index(self) -> Result<i64> {
        self.as_str().into_index()
    }
}

/// Reads the integer at the start of `input`.
///
/// Leading whitespace and a single sign are accepted, then the longest run of
/// ASCII digits. Whatever follows the digits is ignored, so `"12px"` is 12 and
/// `"-3.9"` is -3. Returns `None` when there are no digits or the value does
/// not fit in an `i64`.
fn parse_integer_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    // Accumulate negatively so that i64::MIN parses without overflow.
    let mut value: i64 = 0;
    for digit in rest[..digits].bytes() {
        value = value
            .checked_mul(10)?
            .checked_sub(i64::from(digit - b'0'))?;
    }

    if negative { Some(value) } else { value.checked_neg() }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
