//! Exact rational arithmetic for frame rates and aspect ratios.
//!
//! ffprobe reports timing and geometry as exact fractions ("30000/1001",
//! "8:9"). Converting those to floating point too early loses the
//! distinction between "unknown" and "zero" and rounds away exactness
//! that the compatibility checks depend on, so the canonical descriptor
//! keeps fractions exact and only converts at comparison boundaries.

use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An exact fraction with an invalid sentinel.
///
/// The denominator sign is normalized to non-negative at construction.
/// A zero denominator marks the value as invalid ("unknown"); invalid
/// values propagate through arithmetic, convert to NaN, and render as
/// `"0/0"`. Callers distinguish unknown from zero with [`is_valid`],
/// never by comparing against zero.
///
/// [`is_valid`]: Rational::is_valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Canonical zero (0/1).
    pub const ZERO: Rational = Rational { num: 0, den: 1 };

    /// The invalid sentinel (0/0).
    pub const INVALID: Rational = Rational { num: 0, den: 0 };

    /// Creates a fraction without reducing it, normalizing the
    /// denominator sign to non-negative.
    pub fn new(num: i64, den: i64) -> Self {
        if den < 0 {
            Rational { num: -num, den: -den }
        } else {
            Rational { num, den }
        }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    /// False for the 0/0 sentinel and anything else with a zero
    /// denominator.
    pub fn is_valid(&self) -> bool {
        self.den != 0
    }

    /// Reduces to lowest terms via the Euclidean algorithm on absolute
    /// values. A zero denominator yields [`Rational::INVALID`]; a zero
    /// numerator yields [`Rational::ZERO`].
    pub fn reduce(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self::INVALID;
        }
        if num == 0 {
            return Self::ZERO;
        }
        let gcd = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        Rational::new(num / gcd, den / gcd)
    }

    /// Parses ffprobe-style fraction text.
    ///
    /// Accepts `"N/D"` (frame rates) and `"N:D"` (SAR/DAR); the `'/'`
    /// separator wins when both occur. Without a separator, tries a
    /// plain integer, then falls back to a decimal scaled by 1,000,000
    /// and reduced. The decimal path is lossy and exists only for odd
    /// inputs ffprobe should not emit for rational fields. Returns
    /// [`Rational::INVALID`] for anything unparseable; never errors.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::INVALID;
        }

        let separator = if text.contains('/') {
            '/'
        } else if text.contains(':') {
            ':'
        } else {
            if let Ok(int_value) = text.parse::<i64>() {
                return Rational::new(int_value, 1);
            }
            return match text.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    const SCALE: i64 = 1_000_000;
                    Self::reduce((value * SCALE as f64).round() as i64, SCALE)
                }
                _ => Self::INVALID,
            };
        };

        let mut parts = text.splitn(2, separator);
        let num = parts.next().unwrap_or("").trim().parse::<i64>();
        let den = parts.next().unwrap_or("").trim().parse::<i64>();
        match (num, den) {
            (Ok(num), Ok(den)) => Self::reduce(num, den),
            _ => Self::INVALID,
        }
    }

    /// NaN when invalid, else the exact quotient as floating point.
    pub fn to_f64(&self) -> f64 {
        if self.is_valid() {
            self.num as f64 / self.den as f64
        } else {
            f64::NAN
        }
    }

    /// Self if valid, else `fallback`. The primitive behind the
    /// normalization fallback chains.
    pub fn or_else(self, fallback: Rational) -> Rational {
        if self.is_valid() { self } else { fallback }
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::reduce(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div for Rational {
    type Output = Rational;

    /// Division by a zero-valued or invalid fraction yields
    /// [`Rational::INVALID`]: the cross-multiplied denominator is zero
    /// and reduction maps that to the sentinel.
    fn div(self, rhs: Rational) -> Rational {
        Rational::reduce(self.num * rhs.den, self.den * rhs.num)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}/{}", self.num, self.den)
        } else {
            write!(f, "0/0")
        }
    }
}

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Canonical textual form; a decimal here would lose exactness.
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accept both the canonical "N/D" string and the older
        // {num, den} object form.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Pair { num: i64, den: i64 },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Rational::parse(&text),
            Repr::Pair { num, den } => Rational::reduce(num, den),
        })
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    // Guard against a zero divisor downstream; both-zero never reaches
    // here through reduce().
    if a == 0 { 1 } else { a }
}
