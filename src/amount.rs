//! Arbitrary-precision sprinkle amounts.
//!
//! Balances and prices are non-negative integers in the game's smallest
//! currency unit ("cents"). A `BigUint` keeps long sessions exact well past
//! the u64 range; decimal-string serialization preserves that precision
//! through JSON saves.

use std::fmt;
use std::ops::{Add, AddAssign};

use num_bigint::BigUint;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed-point scale for price multipliers: four decimal digits.
const MULTIPLIER_SCALE: u64 = 10_000;

/// A non-negative amount of sprinkles (integer currency units).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sprinkles(BigUint);

impl Sprinkles {
    pub fn zero() -> Self {
        Self(BigUint::default())
    }

    pub fn is_zero(&self) -> bool {
        self.0 == BigUint::default()
    }

    /// Borrow the underlying big integer (for display formatting).
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Multiply by a non-negative integer factor.
    pub fn times(&self, factor: u64) -> Self {
        Self(&self.0 * factor)
    }

    /// Subtract `other` if the result stays non-negative.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.0 >= other.0 {
            Some(Self(&self.0 - &other.0))
        } else {
            None
        }
    }

    /// Multiply by a decimal multiplier, rounding half-up on the fractional
    /// unit. The multiplier is taken at four decimal digits of fixed-point
    /// precision, so the stored amount never carries float error forward.
    ///
    /// Multipliers below 1 (or non-finite) leave the amount unchanged; the
    /// catalog rejects such entries at load time.
    pub fn mul_decimal(&self, multiplier: f64) -> Self {
        if !(multiplier.is_finite() && multiplier >= 1.0) {
            return self.clone();
        }
        let scaled = (multiplier * MULTIPLIER_SCALE as f64).round() as u64;
        // (value * scaled + scale/2) / scale == round-half-up(value * multiplier)
        let numer = &self.0 * scaled + MULTIPLIER_SCALE / 2;
        Self(numer / MULTIPLIER_SCALE)
    }

    /// Plain decimal digits, no separators.
    pub fn to_decimal_string(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// Parse plain decimal digits. Rejects empty strings, signs, and any
    /// non-digit character.
    pub fn from_decimal_string(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        BigUint::parse_bytes(s.as_bytes(), 10).map(Self)
    }
}

impl From<u64> for Sprinkles {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Sprinkles {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl Add for Sprinkles {
    type Output = Sprinkles;

    fn add(self, rhs: Sprinkles) -> Sprinkles {
        Sprinkles(self.0 + rhs.0)
    }
}

impl AddAssign for Sprinkles {
    fn add_assign(&mut self, rhs: Sprinkles) {
        self.0 += rhs.0;
    }
}

impl AddAssign<&Sprinkles> for Sprinkles {
    fn add_assign(&mut self, rhs: &Sprinkles) {
        self.0 += &rhs.0;
    }
}

impl fmt::Display for Sprinkles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

// Saves encode amounts as decimal strings so values beyond 2^53 survive
// JSON number handling in every consumer.
impl Serialize for Sprinkles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Sprinkles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Sprinkles::from_decimal_string(&s)
            .ok_or_else(|| D::Error::custom(format!("invalid sprinkle amount: {s:?}")))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_decimal_roundtrip(n in 0u64..u64::MAX) {
            let v = Sprinkles::from(n);
            let s = v.to_decimal_string();
            prop_assert_eq!(Sprinkles::from_decimal_string(&s), Some(v));
        }

        #[test]
        fn prop_mul_decimal_monotone_nondecreasing(
            n in 0u64..1_000_000_000_000,
            m in 1.0f64..10.0,
        ) {
            let v = Sprinkles::from(n);
            prop_assert!(v.mul_decimal(m) >= v);
        }

        #[test]
        fn prop_checked_sub_never_negative(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            let r = Sprinkles::from(a).checked_sub(&Sprinkles::from(b));
            match r {
                Some(v) => {
                    prop_assert!(a >= b);
                    prop_assert_eq!(v, Sprinkles::from(a - b));
                }
                None => prop_assert!(a < b),
            }
        }
    }
}
