// src/quadratic/solution.rs

use std::fmt;

/// Symbolic solution of a·x² + b·x + c = 0, read as
/// `n1/d1 ± [i][√]n2/d2`.
///
/// `d1 == 0` marks a linear equation with no x term: `n1 == 0` is 0 = 0
/// (indeterminate), anything else is c = 0 with c ≠ 0 (undefined).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadraticSolution {
    pub n1: i64,
    pub d1: i64,
    pub n2: i64,
    pub d2: i64,
    /// Second term is √n2 rather than n2
    pub sq: bool,
    /// Negative discriminant
    pub im: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolutionKind {
    Indeterminate,
    Undefined,
    Linear,
    Rational,
    Irrational,
    Complex,
}

impl QuadraticSolution {
    pub fn kind(&self) -> SolutionKind {
        if self.d1 == 0 {
            if self.n1 == 0 {
                SolutionKind::Indeterminate
            } else {
                SolutionKind::Undefined
            }
        } else if self.d2 == 0 {
            SolutionKind::Linear
        } else if self.im {
            SolutionKind::Complex
        } else if self.sq {
            SolutionKind::Irrational
        } else {
            SolutionKind::Rational
        }
    }
}

impl fmt::Display for QuadraticSolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.d1 == 0 {
            return if self.n1 == 0 {
                f.write_str("indeterminate")
            } else {
                f.write_str("undefined")
            };
        }

        let mut st = String::new();
        if self.n1 != 0 {
            st.push_str(&self.n1.to_string());
            if self.d1 != 1 {
                st.push_str(&format!("/{}", self.d1));
            }
        }
        if self.n2 != 0 {
            st.push_str(if st.is_empty() { "±" } else { " ± " });
        }
        if self.im {
            st.push('i');
        }
        if self.sq {
            st.push('√');
        }
        if self.n2 != 0 {
            // "i", not "i1"
            if !(self.n2 == 1 && self.d2 == 1 && self.im) {
                st.push_str(&self.n2.to_string());
            }
            if self.d2 != 1 {
                st.push_str(&format!("/{}", self.d2));
            }
        }

        if st.is_empty() {
            f.write_str("0")
        } else {
            f.write_str(&st)
        }
    }
}
