// src/quadratic/solver.rs

use std::fmt;
use num::integer::Roots;
use crate::integer_math::gcd::GCD;
use crate::integer_math::radical::Radical;
use crate::quadratic::solution::QuadraticSolution;

/// a·x² + b·x + c = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coefficients {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Coefficients {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Coefficients { a, b, c }
    }

    pub fn solve(&self) -> QuadraticSolution {
        Solver::solve(self.a, self.b, self.c)
    }
}

// Argument form handed to hole entries: "a b c"
impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.b, self.c)
    }
}

pub struct Solver;

impl Solver {
    /// b² - 4ac
    pub fn discriminant(a: i64, b: i64, c: i64) -> i64 {
        b * b - 4 * a * c
    }

    /// x = -b/2a ± √(b² - 4ac)/2a, or x = -c/b when a = 0.
    ///
    /// Arithmetic is plain i64; coefficients whose discriminant does not fit
    /// are outside the supported range (see `HoleConfig::validate`).
    pub fn solve(a: i64, b: i64, c: i64) -> QuadraticSolution {
        if a == 0 {
            let (n1, d1) = GCD::reduce(-c, b);
            return QuadraticSolution { n1, d1, n2: 0, d2: 0, sq: false, im: false };
        }

        let mut disc = Self::discriminant(a, b, c);
        let im = disc < 0;
        if im {
            disc = -disc;
        }

        let sq = !Radical::is_perfect_square(disc);
        let (n1, d1) = GCD::reduce(-b, 2 * a);
        let (n2, d2) = if sq {
            Radical::reduce(disc, 2 * a)
        } else {
            GCD::reduce(disc.sqrt(), 2 * a)
        };

        QuadraticSolution { n1, d1, n2, d2, sq, im }
    }
}
