//! Conversion of caller-supplied ranks into a checked `i64`.
//!
//! Any integer type is a valid rank, even a negative one: range checking
//! happens later against the sequence length and produces "no result", not
//! an error. Fractional or non-finite floats, text and a missing rank are
//! rejected up front with [`Error::InvalidArgument`].

use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// A value that can be presented as a selection rank.
pub trait IntoRank {
    /// Validates `self` and returns it as a signed rank.
    ///
    /// Integral values outside the `i64` range saturate; they are out of
    /// range for every sequence, never an error.
    fn into_rank(self) -> Result<i64>;
}

macro_rules! signed_rank {
    ($($t:ty),*) => {$(
        impl IntoRank for $t {
            #[inline]
            fn into_rank(self) -> Result<i64> {
                Ok(self.to_i64().unwrap_or(if self < 0 { i64::MIN } else { i64::MAX }))
            }
        }
    )*};
}

macro_rules! unsigned_rank {
    ($($t:ty),*) => {$(
        impl IntoRank for $t {
            #[inline]
            fn into_rank(self) -> Result<i64> {
                Ok(self.to_i64().unwrap_or(i64::MAX))
            }
        }
    )*};
}

signed_rank!(i8, i16, i32, i64, i128, isize);
unsigned_rank!(u8, u16, u32, u64, u128, usize);

fn float_rank(value: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(Error::invalid(format!("rank must be finite, got {value}")));
    }
    if value.fract() != 0.0 {
        return Err(Error::invalid(format!("rank must be an integer, got {value}")));
    }
    Ok(value
        .to_i64()
        .unwrap_or(if value < 0.0 { i64::MIN } else { i64::MAX }))
}

impl IntoRank for f64 {
    fn into_rank(self) -> Result<i64> {
        float_rank(self)
    }
}

impl IntoRank for f32 {
    fn into_rank(self) -> Result<i64> {
        float_rank(f64::from(self))
    }
}

impl IntoRank for &str {
    fn into_rank(self) -> Result<i64> {
        Err(Error::invalid(format!("rank must be an integer, got text {self:?}")))
    }
}

impl IntoRank for String {
    fn into_rank(self) -> Result<i64> {
        self.as_str().into_rank()
    }
}

impl<K: IntoRank> IntoRank for Option<K> {
    fn into_rank(self) -> Result<i64> {
        match self {
            Some(k) => k.into_rank(),
            None => Err(Error::invalid("rank is missing")),
        }
    }
}
