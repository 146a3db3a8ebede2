//! Closed-form strategies: degenerate, factorable, pure-square, and general.

use super::{Config, Solution};

/// Solves `bx + c = 0`, the shape left when `a ≈ 0`.
pub(super) fn linear(b: f64, c: f64, config: &Config) -> Solution {
    if config.is_zero(b) {
        return if config.is_zero(c) {
            Solution::InfiniteSolutions
        } else {
            Solution::NoSolution
        };
    }

    Solution::Linear { root: -c / b }
}

/// Solves `ax² + bx = 0` as `x(ax + b) = 0`.
pub(super) fn factor_out_x(a: f64, b: f64) -> Solution {
    Solution::Factorization {
        roots: [0.0, -b / a],
    }
}

/// Solves `ax² + c = 0` as `x² = -c/a`.
pub(super) fn direct_root(a: f64, c: f64) -> Solution {
    let square = -c / a;
    if square < 0.0 {
        return Solution::NoRealSolutions;
    }

    let root = square.sqrt();
    Solution::DirectRoot {
        roots: [root, -root],
    }
}

/// Solves the general equation with the quadratic formula.
pub(super) fn quadratic_formula(a: f64, b: f64, c: f64) -> Solution {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Solution::NoRealSolutions;
    }

    let sqrt_disc = discriminant.sqrt();
    let denominator = 2.0 * a;
    Solution::QuadraticFormula {
        roots: [(-b + sqrt_disc) / denominator, (-b - sqrt_disc) / denominator],
    }
}
