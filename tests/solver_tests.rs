// tests/solver_tests.rs
//
// Solve-then-format checks for every shape of coefficient triple.

use quadratic_hole::quadratic::{Solver, SolutionKind};

#[cfg(test)]
mod solver_tests {
    use super::*;

    fn answer(a: i64, b: i64, c: i64) -> String {
        Solver::solve(a, b, c).to_string()
    }

    #[test]
    fn test_linear_cases() {
        assert_eq!(answer(0, 0, 0), "indeterminate", "0 = 0 holds for every x");
        assert_eq!(answer(0, 0, 5), "undefined", "5 = 0 has no solution");
        assert_eq!(answer(0, 2, -4), "2");
        assert_eq!(answer(0, 3, 0), "0");
        assert_eq!(answer(0, -6, 4), "2/3");
    }

    #[test]
    fn test_rational_roots() {
        // Roots 1 and 2: -b/2a = 3/2, √1/2 = 1/2
        assert_eq!(answer(1, -3, 2), "3/2 ± 1/2");
        // Roots ±3
        assert_eq!(answer(1, 0, -9), "±3");
        // Double root at -1
        assert_eq!(answer(1, 2, 1), "-1");
        // x² = 0
        assert_eq!(answer(5, 0, 0), "0");
    }

    #[test]
    fn test_irrational_roots() {
        assert_eq!(answer(1, 0, -2), "±√2");
        // x² - 2x - 1 = 0: 1 ± √2
        assert_eq!(answer(1, -2, -1), "1 ± √2");
        // 2x² + x - 2 = 0: -1/4 ± √17/4
        assert_eq!(answer(2, 1, -2), "-1/4 ± √17/4");
    }

    #[test]
    fn test_complex_roots() {
        assert_eq!(answer(1, 0, 1), "±i");
        assert_eq!(answer(1, 0, 4), "±i2");
        // x² + 2x + 5 = 0: -1 ± 2i
        assert_eq!(answer(1, 2, 5), "-1 ± i2");
        // x² + x + 1 = 0: -1/2 ± i√3/2
        assert_eq!(answer(1, 1, 1), "-1/2 ± i√3/2");
        // 4x² + 1 = 0: ±i/2
        assert_eq!(answer(4, 0, 1), "±i1/2");
    }

    #[test]
    fn test_negative_leading_coefficient_with_radical_matches_positive() {
        for (a, b, c) in [(1, 0, -2), (1, 1, 1), (2, 1, -2), (1, -2, -1)] {
            assert_eq!(answer(a, b, c), answer(-a, -b, -c), "{}x² + {}x + {} scaled by -1", a, b, c);
        }
    }

    #[test]
    fn test_negative_leading_coefficient_with_rational_root_keeps_sign() {
        // √1 / -2 reduces to -1/2, and the sign is rendered after the ±
        assert_eq!(answer(-1, 3, -2), "3/2 ± -1/2");
        assert_eq!(answer(-1, 0, -1), "±i-1");
    }

    #[test]
    fn test_descriptor_denominators_non_negative() {
        for a in -10..10 {
            for b in -10..10 {
                for c in -25..25 {
                    let s = Solver::solve(a, b, c);
                    assert!(s.d1 >= 0 && s.d2 >= 0, "negative denominator for {} {} {}: {:?}", a, b, c, s);
                }
            }
        }
    }

    #[test]
    fn test_roots_satisfy_equation() {
        for a in -10..10 {
            for b in -10..10 {
                for c in -25..25 {
                    let s = Solver::solve(a, b, c);
                    let (af, bf, cf) = (a as f64, b as f64, c as f64);
                    let first = s.n1 as f64 / s.d1 as f64;
                    let second = if s.sq {
                        (s.n2 as f64).sqrt() / s.d2 as f64
                    } else {
                        s.n2 as f64 / s.d2 as f64
                    };

                    match s.kind() {
                        SolutionKind::Indeterminate | SolutionKind::Undefined => {
                            assert_eq!((a, b), (0, 0));
                        }
                        SolutionKind::Linear => {
                            assert!((bf * first + cf).abs() < 1e-9, "{} {} {}", a, b, c);
                        }
                        SolutionKind::Rational | SolutionKind::Irrational => {
                            for x in [first + second, first - second] {
                                let residual = af * x * x + bf * x + cf;
                                assert!(residual.abs() < 1e-6, "{} {} {}: x = {} leaves {}", a, b, c, x, residual);
                            }
                        }
                        SolutionKind::Complex => {
                            // (p + qi) is a root iff a(p² - q²) + bp + c = 0 and q(2ap + b) = 0
                            let real = af * (first * first - second * second) + bf * first + cf;
                            let imag = second * (2.0 * af * first + bf);
                            assert!(real.abs() < 1e-6 && imag.abs() < 1e-6, "{} {} {}", a, b, c);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_formatting_is_pure() {
        let s = Solver::solve(3, -7, 11);
        let first = s.to_string();
        assert_eq!(first, s.to_string());
        assert_eq!(first, format!("{}", s));
    }
}
