//! The Catalan series strategy.
//!
//! With `A = ac/b²` and the substitution `x = -(c/b)·u`, the equation becomes
//! `1 - u + Au² = 0`. Its smaller root is the Catalan generating function
//! `u = (1 - √(1 - 4A)) / (2A) = Σ C(n)·Aⁿ`, which converges for `|A| ≤ 1/4`.

use num_traits::ToPrimitive;
use thiserror::Error;

use quadra_core::{Equation, Observer, catalan::CatalanSequence};

use super::{Action, Config, Event, Series, Solution, Status, StoppingRule};

/// Reasons the series strategy cannot run.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub(super) enum SeriesError {
    /// `1 - 4A < 0`, so the closed-form reference has no real value.
    ///
    /// Unreachable through [`super::solve`], which only calls the series when
    /// `|A| ≤ catalan_threshold ≤ 1/4`.
    #[error("negative discriminant 1 - 4A for A = {parameter}")]
    NegativeDiscriminant { parameter: f64 },
}

/// Solves the general equation with the Catalan series.
///
/// # Errors
///
/// Returns `SeriesError::NegativeDiscriminant` if `A > 1/4`.
pub(super) fn solve<Obs>(
    equation: &Equation,
    parameter: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, SeriesError>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let reference = reference_value(parameter)?;
    let series = accumulate(parameter, reference, config, observer);
    let roots = back_substitute(equation, series.sum);

    Ok(Solution::CatalanSeries { roots, series })
}

/// Returns the closed-form value the series converges to.
///
/// Evaluated as `2 / (1 + √(1 - 4A))`, which equals `(1 - √(1 - 4A)) / (2A)`
/// but does not cancel catastrophically for small `|A|` and gives exactly 1
/// at `A = 0`.
fn reference_value(parameter: f64) -> Result<f64, SeriesError> {
    let discriminant = 1.0 - 4.0 * parameter;
    if discriminant < 0.0 {
        return Err(SeriesError::NegativeDiscriminant { parameter });
    }

    Ok(2.0 / (1.0 + discriminant.sqrt()))
}

/// Sums `C(n)·Aⁿ` until the stopping rule, the observer, or the term cap ends it.
fn accumulate<Obs>(parameter: f64, reference: f64, config: &Config, observer: &mut Obs) -> Series
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut sum = 0.0;
    let mut error = reference.abs();
    let mut power = 1.0;

    for (n, catalan) in CatalanSequence::new()
        .take(config.max_terms())
        .enumerate()
    {
        // Finite for every index below `Config::MAX_TERMS_LIMIT`.
        let coefficient = catalan.to_f64().unwrap_or(f64::INFINITY);
        let term = coefficient * power;
        sum += term;
        power *= parameter;
        error = (sum - reference).abs();

        let event = Event {
            n,
            parameter,
            catalan: &catalan,
            term,
            partial_sum: sum,
            error,
        };

        let finish = |status| Series {
            status,
            parameter,
            sum,
            terms: n + 1,
            error,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(Status::StoppedByObserver);
        }

        let converged = match config.stopping() {
            StoppingRule::Reference => error < config.tolerance(),
            StoppingRule::TermMagnitude => term.abs() < config.tolerance(),
        };
        if converged {
            return finish(Status::Converged);
        }
    }

    Series {
        status: Status::MaxTerms,
        parameter,
        sum,
        terms: config.max_terms(),
        error,
    }
}

/// Maps the series sum back to both roots of the original equation.
///
/// `x₁ = -(c/b)·S`, then `x₂ = c/(a·x₁)` from Vieta's product relation. If
/// that quotient is not finite (`x₁` underflowed to zero or `a·x₁` is too
/// small), the sum relation `x₁ + x₂ = -b/a` supplies the second root.
fn back_substitute(equation: &Equation, sum: f64) -> [f64; 2] {
    let Equation { a, b, c } = *equation;

    let first = -(c / b) * sum;
    let second = c / (a * first);
    if second.is_finite() {
        [first, second]
    } else {
        [first, -b / a - first]
    }
}
