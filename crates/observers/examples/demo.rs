//! Walk-through of the quadratic solver.
//!
//! # Usage
//!
//! ```text
//! cargo run --example demo
//! ```
//!
//! Prints the first Catalan numbers, solves a handful of equations that
//! exercise every strategy, and shows how the transformation parameter
//! `A = ac/b²` governs how many series terms are needed.

use quadra_core::{Equation, catalan::catalan_number};
use quadra_observers::{Report, TraceObserver};
use quadra_solvers::quadratic::{self, Config, ConfigError, transformation_parameter};

fn main() -> Result<(), ConfigError> {
    catalan_table();
    examples()?;
    trace_example();
    convergence_analysis();
    Ok(())
}

// --- Catalan numbers ---------------------------------------------------------

fn catalan_table() {
    let meanings = [
        "the empty product",
        "one way to parenthesize ab",
        "((ab)c) and (a(bc))",
        "parenthesizations of abcd",
        "lattice paths under the diagonal of a 4x4 grid",
        "full binary trees with 6 leaves",
        "triangulations of an octagon",
        "balanced strings of 7 bracket pairs",
    ];

    println!("Catalan numbers");
    println!("{}", "=".repeat(50));
    println!(" n | C(n) | counts");
    println!("{}", "-".repeat(50));
    for (n, meaning) in (0u32..).zip(meanings) {
        println!("{n:>2} | {:>4} | {meaning}", catalan_number(n));
    }
    println!();
}

// --- Strategies --------------------------------------------------------------

fn examples() -> Result<(), ConfigError> {
    let config = Config::new(1e-10)?;
    let equations = [
        Equation::new(1.0, 4.0, 1.0),
        Equation::new(2.0, 6.0, 1.0),
        Equation::new(1.0, 2.0, 2.0),
        Equation::new(1.0, 0.0, -4.0),
        Equation::new(1.0, 5.0, 0.0),
        Equation::new(0.0, 3.0, -6.0),
    ];

    for (i, equation) in equations.iter().enumerate() {
        let solution = quadratic::solve_unobserved(equation, &config);
        println!("Example {}", i + 1);
        println!("{}", "-".repeat(50));
        println!("{}", Report::new(equation, &solution));
    }

    Ok(())
}

// --- Term-by-term trace ------------------------------------------------------

fn trace_example() {
    let equation = Equation::new(1.0, 6.0, 1.0);
    let mut trace = TraceObserver::new();
    quadratic::solve(&equation, &Config::default(), &mut trace);

    println!("Series terms for {equation}");
    println!("{}", trace.table().limit(10));
}

// --- Convergence vs. A -------------------------------------------------------

fn convergence_analysis() {
    let equations = [
        Equation::new(1.0, 16.0, 1.0),
        Equation::new(1.0, 8.0, 1.0),
        Equation::new(1.0, 4.0, 1.0),
        Equation::new(1.0, 2.5, 1.0),
        Equation::new(1.0, 2.0, 1.0),
    ];

    println!("Convergence vs. parameter A");
    println!(
        "{:<24} | {:>7} | {:>5} | {:>9} | method",
        "equation", "A", "terms", "error"
    );
    println!("{}", "-".repeat(70));

    for equation in &equations {
        let solution = quadratic::solve_unobserved(equation, &Config::default());
        let terms = solution
            .terms_used()
            .map_or_else(|| "n/a".to_owned(), |terms| terms.to_string());
        let error = solution
            .error()
            .map_or_else(|| "n/a".to_owned(), |error| format!("{error:.2e}"));

        println!(
            "{:<24} | {:>7.4} | {terms:>5} | {error:>9} | {}",
            equation.to_string(),
            transformation_parameter(equation),
            solution.method(),
        );
    }
}
