use approx::assert_relative_eq;
use proptest::prelude::*;

use quadra_core::Equation;

use super::{
    Action, Config, Event, Method, Solution, Status, StoppingRule, solve, solve_unobserved,
    transformation_parameter,
};

fn solve_default(a: f64, b: f64, c: f64) -> Solution {
    solve_unobserved(&Equation::new(a, b, c), &Config::default())
}

/// Asserts every root satisfies the equation to within `bound`.
fn assert_roots_satisfy(equation: &Equation, solution: &Solution, bound: f64) {
    for &root in solution.roots() {
        let residual = equation.evaluate(root);
        assert!(
            residual.abs() < bound,
            "root {root} of {equation} leaves residual {residual:e}"
        );
    }
}

// --- Dispatch scenarios ---

#[test]
fn favorable_equation_uses_catalan_series() {
    // x² + 4x + 1 = 0, A = 1/16
    let equation = Equation::new(1.0, 4.0, 1.0);
    let config = Config::default();
    let solution = solve_unobserved(&equation, &config);

    assert_eq!(solution.method(), Method::CatalanSeries);
    let [x1, x2] = solution.roots() else {
        panic!("expected two roots");
    };
    assert_relative_eq!(*x1, -0.267_949_19, epsilon = 1e-8);
    assert_relative_eq!(*x2, -3.732_050_81, epsilon = 1e-8);
    assert_roots_satisfy(&equation, &solution, 1e-8);

    let series = solution.series().expect("series diagnostics");
    assert_eq!(series.status, Status::Converged);
    assert_relative_eq!(series.parameter, 0.0625);
    assert!(series.error < config.tolerance());
    assert_eq!(solution.terms_used(), Some(series.terms));
}

#[test]
fn large_parameter_without_real_roots() {
    // x² + 2x + 2 = 0, A = 0.5, discriminant -4
    let solution = solve_default(1.0, 2.0, 2.0);

    assert_eq!(solution, Solution::NoRealSolutions);
    assert!(solution.roots().is_empty());
    assert_eq!(solution.terms_used(), None);
}

#[test]
fn large_parameter_with_real_roots_uses_formula() {
    // x² + x - 6 = (x - 2)(x + 3), A = -6
    let solution = solve_default(1.0, 1.0, -6.0);

    assert_eq!(solution.method(), Method::QuadraticFormula);
    assert_eq!(solution.roots(), [2.0, -3.0]);
}

#[test]
fn missing_linear_term_takes_direct_root() {
    let solution = solve_default(1.0, 0.0, -4.0);

    assert_eq!(solution.method(), Method::DirectRoot);
    assert_eq!(solution.roots(), [2.0, -2.0]);

    assert_eq!(solve_default(1.0, 0.0, 4.0), Solution::NoRealSolutions);
}

#[test]
fn missing_constant_factors_out_x() {
    let solution = solve_default(1.0, 5.0, 0.0);
    assert_eq!(solution.method(), Method::Factorization);
    assert_eq!(solution.roots(), [0.0, -5.0]);

    // b ≈ 0 as well: the roots coincide and are kept as a pair.
    let solution = solve_default(2.0, 0.0, 0.0);
    assert_eq!(solution.method(), Method::Factorization);
    assert_eq!(solution.roots().len(), 2);
}

#[test]
fn vanishing_quadratic_term_is_linear() {
    let solution = solve_default(0.0, 3.0, -6.0);
    assert_eq!(solution, Solution::Linear { root: 2.0 });

    let solution = solve_default(0.0, 3.0, 6.0);
    assert_relative_eq!(solution.roots()[0], -2.0, epsilon = 1e-10);
}

#[test]
fn degenerate_equations() {
    assert_eq!(solve_default(0.0, 0.0, 5.0), Solution::NoSolution);
    assert_eq!(solve_default(0.0, 0.0, 0.0), Solution::InfiniteSolutions);
    assert_eq!(
        solve_default(0.0, 0.0, 5.0).method().to_string(),
        "No solution"
    );
}

#[test]
fn tiny_quadratic_coefficient_is_treated_as_zero() {
    let solution = solve_default(1e-16, 1.0, 1.0);
    assert_eq!(solution.method(), Method::Linear);

    // Above the threshold the equation stays quadratic.
    let solution = solve_default(1e-14, 1.0, 1.0);
    assert_eq!(solution.method(), Method::CatalanSeries);
}

#[test]
fn negative_parameter_uses_series() {
    // x² + 4x - 1 = 0, A = -1/16, roots -2 ± √5
    let equation = Equation::new(1.0, 4.0, -1.0);
    let solution = solve_unobserved(&equation, &Config::default());

    assert_eq!(solution.method(), Method::CatalanSeries);
    let [x1, x2] = solution.roots() else {
        panic!("expected two roots");
    };
    assert_relative_eq!(*x1, -2.0 + 5.0_f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(*x2, -2.0 - 5.0_f64.sqrt(), epsilon = 1e-8);
    assert_roots_satisfy(&equation, &solution, 1e-8);
}

#[test]
fn parameter_at_boundary_reports_max_terms() {
    // (x - 2)² has A = 1/4 exactly; the series is too slow to converge there.
    let solution = solve_default(1.0, -4.0, 4.0);

    assert_eq!(solution.method(), Method::CatalanSeries);
    let series = solution.series().expect("series diagnostics");
    assert_eq!(series.status, Status::MaxTerms);
    assert_eq!(series.terms, Config::DEFAULT_MAX_TERMS);
    assert!(series.error >= Config::DEFAULT_TOLERANCE);

    // The degraded roots still straddle the double root.
    let [x1, x2] = solution.roots() else {
        panic!("expected two roots");
    };
    assert!(*x1 < 2.0 && *x2 > 2.0);
    assert_relative_eq!(x1 * x2, 4.0, epsilon = 1e-12);
}

#[test]
fn lower_catalan_threshold_moves_equation_to_formula() {
    // A = 1/16 is above a 0.05 cutoff.
    let config = Config::default()
        .with_catalan_threshold(0.05)
        .expect("valid cutoff");
    let solution = solve_unobserved(&Equation::new(1.0, 4.0, 1.0), &config);

    assert_eq!(solution.method(), Method::QuadraticFormula);
}

#[test]
fn coarse_zero_threshold_keeps_series_accurate() {
    // A = 1/16 sits below a 0.1 coefficient threshold but is not zero.
    let equation = Equation::new(1.0, 4.0, 1.0);
    let config = Config::default()
        .with_zero_threshold(0.1)
        .expect("valid threshold");
    let solution = solve_unobserved(&equation, &config);

    assert_eq!(solution.method(), Method::CatalanSeries);
    let series = solution.series().expect("series diagnostics");
    assert_eq!(series.status, Status::Converged);
    assert_eq!(series.terms, 14);
    assert!(series.error < config.tolerance());
    assert_roots_satisfy(&equation, &solution, 1e-8);
}

#[test]
fn tolerance_sweep_respects_each_target() {
    let equation = Equation::new(1.0, 4.0, 1.0);
    let mut previous_terms = 0;

    for tolerance in [1e-6, 1e-10, 1e-14] {
        let config = Config::new(tolerance).expect("valid tolerance");
        let solution = solve_unobserved(&equation, &config);
        let series = solution.series().expect("series diagnostics");

        assert_eq!(series.status, Status::Converged);
        assert!(series.error <= tolerance * 10.0);
        assert!(series.terms > previous_terms);
        previous_terms = series.terms;
    }
}

#[test]
fn smaller_parameters_converge_in_fewer_terms() {
    // A = 1/256, 1/64, 1/16, 0.16
    let equations = [
        Equation::new(1.0, 16.0, 1.0),
        Equation::new(1.0, 8.0, 1.0),
        Equation::new(1.0, 4.0, 1.0),
        Equation::new(1.0, 2.5, 1.0),
    ];

    let terms: Vec<usize> = equations
        .iter()
        .map(|eq| {
            solve_unobserved(eq, &Config::default())
                .terms_used()
                .expect("series applies")
        })
        .collect();

    assert!(terms.windows(2).all(|pair| pair[0] < pair[1]), "{terms:?}");
}

#[test]
fn term_cap_limits_the_series() {
    let config = Config::default().with_max_terms(5).expect("valid cap");
    let solution = solve_unobserved(&Equation::new(1.0, 4.0, 1.0), &config);
    let series = solution.series().expect("series diagnostics");

    assert_eq!(series.status, Status::MaxTerms);
    assert_eq!(series.terms, 5);
}

#[test]
fn term_magnitude_rule_still_reports_reference_error() {
    let config = Config::default().with_stopping(StoppingRule::TermMagnitude);
    let equation = Equation::new(1.0, 4.0, 1.0);
    let solution = solve_unobserved(&equation, &config);
    let series = solution.series().expect("series diagnostics");

    assert_eq!(series.status, Status::Converged);
    assert!(series.error < config.tolerance());
    assert_roots_satisfy(&equation, &solution, 1e-8);
}

#[test]
fn large_coefficients_keep_relative_residual_small() {
    let equation = Equation::new(1e6, 8e6, 1e6);
    let solution = solve_unobserved(&equation, &Config::default());

    assert_eq!(solution.method(), Method::CatalanSeries);
    for &root in solution.roots() {
        let scale = 1e6 * root * root + 8e6 * root.abs() + 1e6;
        assert!(equation.evaluate(root).abs() / scale < 1e-9);
    }
}

#[test]
fn transformation_parameter_is_ac_over_b_squared() {
    assert_relative_eq!(
        transformation_parameter(&Equation::new(2.0, 6.0, 1.0)),
        2.0 / 36.0
    );
    assert_relative_eq!(
        transformation_parameter(&Equation::new(1.0, 4.0, -1.0)),
        -0.0625
    );
}

// --- Observer behavior ---

#[test]
fn observer_sees_each_term_in_order() {
    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push((event.n, event.partial_sum, event.error));
        None
    };

    let solution = solve(&Equation::new(1.0, 4.0, 1.0), &Config::default(), observer);
    let terms = solution.terms_used().expect("series applies");

    assert_eq!(seen.len(), terms);
    assert!(seen.iter().enumerate().all(|(i, (n, _, _))| i == *n));
    let (_, last_sum, last_error) = seen[seen.len() - 1];
    let series = solution.series().expect("series diagnostics");
    assert_relative_eq!(last_sum, series.sum);
    assert_relative_eq!(last_error, series.error);
}

#[test]
fn observer_can_stop_early() {
    let mut calls = 0usize;
    let observer = |event: &Event<'_>| {
        calls += 1;
        (event.terms() >= 3).then_some(Action::StopEarly)
    };

    let solution = solve(&Equation::new(1.0, 4.0, 1.0), &Config::default(), observer);
    let series = solution.series().expect("series diagnostics");

    assert_eq!(series.status, Status::StoppedByObserver);
    assert_eq!(series.terms, 3);
    assert_eq!(calls, 3);
    // 1 + A + 2A² with A = 1/16
    assert_relative_eq!(series.sum, 1.0 + 0.0625 + 2.0 * 0.0625 * 0.0625);
}

#[test]
fn closed_forms_emit_no_events() {
    let mut calls = 0usize;
    for (a, b, c) in [(0.0, 3.0, -6.0), (1.0, 5.0, 0.0), (1.0, 0.0, -4.0), (1.0, 2.0, 2.0)] {
        solve(&Equation::new(a, b, c), &Config::default(), |_: &Event<'_>| {
            calls += 1;
            None
        });
    }
    assert_eq!(calls, 0);
}

#[test]
fn events_carry_exact_catalan_coefficients() {
    let mut coefficients = Vec::new();
    solve(
        &Equation::new(1.0, 8.0, 1.0),
        &Config::default(),
        |event: &Event<'_>| {
            coefficients.push(event.catalan.to_string());
            None
        },
    );

    assert_eq!(coefficients[..6], ["1", "1", "2", "5", "14", "42"]);
}

// --- Properties ---

proptest! {
    #[test]
    fn series_roots_satisfy_equation(
        a in 0.5f64..2.0,
        b in prop_oneof![-10.0f64..-2.0, 2.0f64..10.0],
        ratio in -0.15f64..0.15,
    ) {
        // Choose c so that A = ac/b² = ratio.
        let c = ratio * b * b / a;
        prop_assume!(c.abs() > 1e-6);

        let equation = Equation::new(a, b, c);
        let config = Config::new(1e-12).expect("valid tolerance");
        let solution = solve_unobserved(&equation, &config);

        prop_assert_eq!(solution.method(), Method::CatalanSeries);
        let series = solution.series().expect("series diagnostics");
        prop_assert_eq!(series.status, Status::Converged);
        prop_assert!(series.error < config.tolerance());
        for &root in solution.roots() {
            prop_assert!(equation.evaluate(root).abs() < 1e-8);
        }
    }

    #[test]
    fn linear_root_is_minus_c_over_b(
        b in prop_oneof![-100.0f64..-0.01, 0.01f64..100.0],
        c in -100.0f64..100.0,
    ) {
        let solution = solve_default(0.0, b, c);
        prop_assert_eq!(solution.method(), Method::Linear);
        prop_assert_eq!(solution.roots().len(), 1);
        prop_assert!((solution.roots()[0] - (-c / b)).abs() < 1e-10);
    }

    #[test]
    fn factorization_roots_are_zero_and_minus_b_over_a(
        a in prop_oneof![-100.0f64..-0.01, 0.01f64..100.0],
        b in -100.0f64..100.0,
    ) {
        let solution = solve_default(a, b, 0.0);
        prop_assert_eq!(solution.method(), Method::Factorization);
        let roots = solution.roots();
        prop_assert!(roots[0].abs() < 1e-10);
        prop_assert!((roots[1] - (-b / a)).abs() < 1e-10);
    }

    #[test]
    fn large_parameters_follow_discriminant_sign(
        a in prop_oneof![-10.0f64..-0.1, 0.1f64..10.0],
        b in prop_oneof![-10.0f64..-0.1, 0.1f64..10.0],
        c in prop_oneof![-10.0f64..-0.1, 0.1f64..10.0],
    ) {
        let equation = Equation::new(a, b, c);
        prop_assume!(transformation_parameter(&equation).abs() > 0.25);

        let solution = solve_unobserved(&equation, &Config::default());
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            prop_assert_eq!(solution.method(), Method::NoRealSolutions);
        } else {
            prop_assert_eq!(solution.method(), Method::QuadraticFormula);
        }
    }
}
