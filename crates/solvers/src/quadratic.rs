//! Real roots of quadratic equations.
//!
//! # Algorithm
//!
//! [`solve`] inspects the coefficients of `ax² + bx + c = 0` and picks exactly
//! one strategy, first match wins:
//!
//! 1. `a ≈ 0`: the equation is linear (or degenerate when `b ≈ 0` too).
//! 2. `c ≈ 0`: factor out `x`, giving roots `0` and `-b/a`.
//! 3. `b ≈ 0`: a pure square, roots `±√(-c/a)` when real.
//! 4. Otherwise compute the transformation parameter `A = ac/b²`:
//!    - `|A| > catalan_threshold`: the standard quadratic formula.
//!    - otherwise: the Catalan series. Substituting `x = -(c/b)·u` turns the
//!      equation into `1 - u + Au² = 0`, whose smaller root is
//!      `u = Σ C(n)·Aⁿ` where `C(n)` is the n-th Catalan number. The series
//!      gives one root; Vieta's product `x₁·x₂ = c/a` gives the other.
//!
//! "≈ 0" means a magnitude below the configured `zero_threshold`.
//!
//! # When the series applies
//!
//! The series converges for `|A| ≤ 1/4`. Convergence is geometric in `4|A|`,
//! so small parameters need only a handful of terms, while parameters near
//! the boundary converge slowly and may exhaust `max_terms`. That outcome is
//! reported through [`Status::MaxTerms`] rather than as an error.
//!
//! # Observer Events
//!
//! The series emits one [`Event`] per accumulated term, carrying the exact
//! Catalan coefficient, the term, the partial sum, and its distance from the
//! closed-form reference. Observers can return [`Action::StopEarly`] to keep
//! the partial sum computed so far. The closed-form strategies emit no events.

mod action;
mod closed_form;
mod config;
mod event;
mod series;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, StoppingRule};
pub use event::Event;
pub use solution::{Method, Series, Solution, Status};

use quadra_core::{Equation, Observer};

/// Solves the equation, choosing the strategy from the coefficient shape.
///
/// The observer receives an [`Event`] for each term of the Catalan series.
/// See the [module docs](self) for the dispatch order.
///
/// Every input resolves to a [`Solution`]; the absence of real roots is a
/// solution variant, not an error.
pub fn solve<Obs>(equation: &Equation, config: &Config, mut observer: Obs) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let Equation { a, b, c } = *equation;

    if config.is_zero(a) {
        return closed_form::linear(b, c, config);
    }
    if config.is_zero(c) {
        return closed_form::factor_out_x(a, b);
    }
    if config.is_zero(b) {
        return closed_form::direct_root(a, c);
    }

    let parameter = transformation_parameter(equation);

    // A NaN parameter fails this comparison and takes the closed form.
    let series_applies = parameter.abs() <= config.catalan_threshold();
    if !series_applies {
        return closed_form::quadratic_formula(a, b, c);
    }

    series::solve(equation, parameter, config, &mut observer)
        .unwrap_or_else(|_| closed_form::quadratic_formula(a, b, c))
}

/// Solves the equation without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved(equation: &Equation, config: &Config) -> Solution {
    solve(equation, config, ())
}

/// Returns the transformation parameter `A = ac/b²`.
///
/// The Catalan series applies when `|A| ≤ 1/4`.
#[must_use]
pub fn transformation_parameter(equation: &Equation) -> f64 {
    let Equation { a, b, c } = *equation;
    (a * c) / (b * b)
}
