//! Interactive plot of Catalan series convergence.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- 1 2.5 1
//! ```
//!
//! The optional arguments are the coefficients `a b c` (default `1 4 1`).
//! The window shows the partial sums approaching their limit and, on a log
//! scale, the distance from the closed-form value. Try parameters close to
//! `A = 1/4` (e.g. `1 2.1 1`) to see the slowdown near the boundary.

use std::error::Error;

use quadra_core::Equation;
use quadra_observers::{PlotObserver, ShowConfig};
use quadra_solvers::quadratic::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    let args = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;

    let equation = match args.as_slice() {
        [] => Equation::new(1.0, 4.0, 1.0),
        &[a, b, c] => Equation::new(a, b, c),
        _ => {
            eprintln!("Usage: plot [a b c]");
            std::process::exit(1);
        }
    };

    let mut obs = PlotObserver::<2>::new(["Partial sum", "Error"]);
    let solution = quadratic::solve(&equation, &Config::default(), &mut obs);

    let Some(series) = solution.series() else {
        println!("{equation}: solved by {} without the series", solution.method());
        return Ok(());
    };

    obs.show(
        ShowConfig::new()
            .title(format!(
                "{equation}  (A = {:.4}, {} terms)",
                series.parameter, series.terms
            ))
            .legend()
            .log_y(),
    )?;

    Ok(())
}
