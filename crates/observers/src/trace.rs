//! Term-by-term recording of the Catalan series.

use std::fmt;

use num_bigint::BigUint;
use quadra_core::Observer;
use quadra_solvers::quadratic::{Action, Event};

/// One recorded series term.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub n: usize,
    pub catalan: BigUint,
    pub term: f64,
    pub partial_sum: f64,
    pub error: f64,
}

impl From<&Event<'_>> for Row {
    fn from(event: &Event<'_>) -> Self {
        Self {
            n: event.n,
            catalan: event.catalan.clone(),
            term: event.term,
            partial_sum: event.partial_sum,
            error: event.error,
        }
    }
}

/// An observer that records each series term for later inspection.
///
/// Optionally requests [`Action::StopEarly`] once a given number of terms has
/// been summed, which caps the series independently of the solver config.
///
/// # Example
///
/// ```
/// use quadra_core::Equation;
/// use quadra_observers::TraceObserver;
/// use quadra_solvers::quadratic::{self, Config};
///
/// let mut trace = TraceObserver::new();
/// let solution = quadratic::solve(&Equation::new(1.0, 4.0, 1.0), &Config::default(), &mut trace);
///
/// assert_eq!(trace.rows().len(), solution.terms_used().unwrap());
/// println!("{}", trace.table());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceObserver {
    rows: Vec<Row>,
    stop_after: Option<usize>,
}

impl TraceObserver {
    /// Creates an empty trace that never stops the solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests an early stop once `terms` terms have been recorded.
    #[must_use]
    pub fn stop_after(mut self, terms: usize) -> Self {
        self.stop_after = Some(terms);
        self
    }

    /// Returns the recorded rows in term order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns a displayable convergence table of the recorded rows.
    #[must_use]
    pub fn table(&self) -> Table<'_> {
        Table {
            rows: &self.rows,
            limit: None,
        }
    }
}

impl Observer<Event<'_>, Action> for TraceObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        self.rows.push(Row::from(event));

        match self.stop_after {
            Some(limit) if event.terms() >= limit => Some(Action::StopEarly),
            _ => None,
        }
    }
}

/// Allows `&mut TraceObserver` to be passed to [`quadra_solvers::quadratic::solve`],
/// so the rows can be read after the solve completes.
impl Observer<Event<'_>, Action> for &mut TraceObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        (**self).observe(event)
    }
}

/// Convergence table over recorded rows: `n | C(n) | term | sum | error`.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    rows: &'a [Row],
    limit: Option<usize>,
}

impl Table<'_> {
    /// Shows at most `rows` rows.
    #[must_use]
    pub fn limit(mut self, rows: usize) -> Self {
        self.limit = Some(rows);
        self
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>3} | {:>12} | {:>12} | {:>12} | {:>9}",
            "n", "C(n)", "term", "sum", "error"
        )?;
        writeln!(f, "{}", "-".repeat(60))?;

        let shown = self.limit.unwrap_or(self.rows.len());
        for row in self.rows.iter().take(shown) {
            writeln!(
                f,
                "{:>3} | {:>12} | {:>12.9} | {:>12.9} | {:>9.2e}",
                row.n, row.catalan, row.term, row.partial_sum, row.error
            )?;
        }
        Ok(())
    }
}
