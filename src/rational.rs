//! Rational: an always-reduced fraction over `i32`.
//!
//! Two invariants hold for every value that escapes this module:
//! - the denominator is strictly positive (the sign lives in the
//!   numerator), and
//! - numerator and denominator share no common factor (`0` is stored as
//!   `0 / 1`).
//!
//! Arithmetic re-normalizes through the same path as construction, so
//! the invariants survive `+` and `*`. Equality cross-multiplies in
//! widened arithmetic rather than comparing fields, so it holds by value
//! even across independently constructed operands.

use core::fmt;
use core::ops::{Add, Mul};

/// Construction error: a fraction cannot have a zero denominator.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ZeroDenominator;

#[derive(Copy, Clone, Debug)]
pub struct Rational {
    numer: i32,
    denom: i32,
}

impl Rational {
    /// Build a reduced, sign-normalized fraction. Rejects a zero
    /// denominator; any nonzero one is accepted.
    pub fn new(numer: i32, denom: i32) -> Result<Self, ZeroDenominator> {
        if denom == 0 {
            return Err(ZeroDenominator);
        }
        Ok(Self::reduced(numer, denom))
    }

    // Shared normalization path for construction and arithmetic, where
    // the denominator is already known to be nonzero.
    fn reduced(mut numer: i32, mut denom: i32) -> Self {
        debug_assert!(denom != 0);
        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }
        let divisor = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i32;
        Self {
            numer: numer / divisor,
            denom: denom / divisor,
        }
    }

    pub fn numer(self) -> i32 {
        self.numer
    }

    pub fn denom(self) -> i32 {
        self.denom
    }
}

// Euclid's algorithm. `b` starts nonzero here, so the result is nonzero.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let tmp = a % b;
        a = b;
        b = tmp;
    }
    a
}

impl Add for Rational {
    type Output = Rational;

    /// `a/b + c/d = (ad + cb) / bd`; the product of nonzero denominators
    /// is nonzero, so the sum always exists.
    fn add(self, rhs: Rational) -> Rational {
        Rational::reduced(
            self.numer * rhs.denom + rhs.numer * self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::reduced(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl PartialEq for Rational {
    /// Equality by value: `a/b == c/d` iff `ad == cb`, compared in `i64`
    /// so the cross products cannot overflow.
    fn eq(&self, other: &Self) -> bool {
        i64::from(self.numer) * i64::from(other.denom)
            == i64::from(other.numer) * i64::from(self.denom)
    }
}

impl Eq for Rational {}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numer, self.denom)
    }
}
