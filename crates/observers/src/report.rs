use std::fmt;

use quadra_core::Equation;
use quadra_solvers::quadratic::{Solution, Status};

/// Verbose, human-readable summary of a solve.
///
/// Lists the equation, the strategy used, each root with its residual after
/// substitution, and the series diagnostics when the Catalan series ran.
///
/// ```
/// use quadra_core::Equation;
/// use quadra_observers::Report;
/// use quadra_solvers::quadratic::{self, Config};
///
/// let equation = Equation::new(1.0, 0.0, -4.0);
/// let solution = quadratic::solve_unobserved(&equation, &Config::default());
///
/// let report = Report::new(&equation, &solution).to_string();
/// assert!(report.contains("Direct root (b=0)"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    equation: &'a Equation,
    solution: &'a Solution,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(equation: &'a Equation, solution: &'a Solution) -> Self {
        Self { equation, solution }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Equation: {}", self.equation)?;
        writeln!(f, "Method: {}", self.solution.method())?;

        if let Some(series) = self.solution.series() {
            writeln!(f, "Parameter A = ac/b²: {:.6}", series.parameter)?;
        }

        match self.solution {
            Solution::InfiniteSolutions => writeln!(f, "Every x satisfies the equation")?,
            Solution::NoSolution | Solution::NoRealSolutions => writeln!(f, "No real roots")?,
            _ => {
                for (i, &root) in self.solution.roots().iter().enumerate() {
                    let residual = self.equation.evaluate(root);
                    writeln!(
                        f,
                        "Root {}: x = {root:.10} (residual {residual:.2e})",
                        i + 1
                    )?;
                }
            }
        }

        if let Some(series) = self.solution.series() {
            let status = match series.status {
                Status::Converged => "converged",
                Status::MaxTerms => "term limit reached",
                Status::StoppedByObserver => "stopped by observer",
            };
            writeln!(f, "Series terms used: {} ({status})", series.terms)?;
            writeln!(f, "Approximation error: {:.2e}", series.error)?;
        }

        Ok(())
    }
}
