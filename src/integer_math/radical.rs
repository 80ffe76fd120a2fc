// src/integer_math/radical.rs

use num::integer::Roots;
use crate::integer_math::gcd::GCD;

pub struct Radical;

impl Radical {
    /// √n is an integer
    pub fn is_perfect_square(n: i64) -> bool {
        if n < 0 {
            return false;
        }
        let root = n.sqrt();
        root * root == n
    }

    /// Largest k such that k² | n. Zero has no largest such k, so 0 is returned.
    pub fn square_part(n: i64) -> i64 {
        if n == 0 {
            return 0;
        }
        let magnitude = n.abs();
        (1..=magnitude.sqrt())
            .rev()
            .find(|k| magnitude % (k * k) == 0)
            .unwrap_or(1)
    }

    /// Reduces √n / d by pulling the largest i with i² | n and i | d out of both,
    /// giving √(n/i²) / (d/i).
    ///
    /// Only the denominator is sign-normalized; the radicand is a magnitude and
    /// keeps whatever sign it came in with. A zero denominator passes through.
    pub fn reduce(radicand: i64, denominator: i64) -> (i64, i64) {
        let d = denominator.abs();
        if d == 0 {
            return (radicand, d);
        }

        let factor = match Self::square_part(radicand) {
            0 => d,
            k => GCD::find_gcd_pair(k, d),
        };

        (radicand / (factor * factor), d / factor)
    }
}
