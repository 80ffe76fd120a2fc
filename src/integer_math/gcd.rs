// src/integer_math/gcd.rs

use num::Integer;

pub struct GCD;

impl GCD {
    /// Always non-negative; gcd(0, 0) == 0.
    pub fn find_gcd_pair(left: i64, right: i64) -> i64 {
        left.gcd(&right)
    }

    /// Reduces n/d to lowest terms with the sign carried by the numerator.
    ///
    /// A zero denominator is passed through untouched, so callers can use
    /// `(n, 0)` as a sentinel for a division by zero.
    pub fn reduce(numerator: i64, denominator: i64) -> (i64, i64) {
        let (n, d) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        if d == 0 {
            return (n, d);
        }

        let divisor = Self::find_gcd_pair(n, d);
        (n / divisor, d / divisor)
    }
}
