use std::fmt;

/// The strategy that produced a [`Solution`].
///
/// `Display` renders the human-readable tag, e.g. `Catalan series`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Linear,
    InfiniteSolutions,
    NoSolution,
    Factorization,
    DirectRoot,
    NoRealSolutions,
    QuadraticFormula,
    CatalanSeries,
}

impl Method {
    /// Returns the human-readable tag for this method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::InfiniteSolutions => "Infinite solutions",
            Self::NoSolution => "No solution",
            Self::Factorization => "Factorization (c=0)",
            Self::DirectRoot => "Direct root (b=0)",
            Self::NoRealSolutions => "No real solutions",
            Self::QuadraticFormula => "Quadratic formula",
            Self::CatalanSeries => "Catalan series",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicates how the Catalan series finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Met the configured stopping rule.
    Converged,

    /// Summed `max_terms` terms without meeting the stopping rule.
    MaxTerms,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// Diagnostics of a Catalan series solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    /// Final series status.
    pub status: Status,

    /// The transformation parameter `A = ac/b²`.
    pub parameter: f64,

    /// The final partial sum `S ≈ Σ C(n)·Aⁿ`.
    pub sum: f64,

    /// Number of terms summed.
    pub terms: usize,

    /// Final distance between the partial sum and the closed-form value.
    pub error: f64,
}

/// The result of solving a quadratic equation.
///
/// One variant per strategy, each carrying exactly the data that strategy
/// produces. Use [`Solution::roots`] for a uniform view of the real roots.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solution {
    /// `bx + c = 0` with `b ≠ 0`.
    Linear { root: f64 },

    /// `0 = 0`: every x is a solution.
    InfiniteSolutions,

    /// `0x + c = 0` with `c ≠ 0`: nothing satisfies the equation.
    NoSolution,

    /// `ax² + bx = 0`, roots `[0, -b/a]`.
    Factorization { roots: [f64; 2] },

    /// `ax² + c = 0` with `-c/a ≥ 0`, roots `[√d, -√d]`.
    DirectRoot { roots: [f64; 2] },

    /// Negative discriminant.
    NoRealSolutions,

    /// Closed-form roots `[(-b + √D)/(2a), (-b - √D)/(2a)]`.
    QuadraticFormula { roots: [f64; 2] },

    /// Roots from the Catalan series and Vieta's product relation.
    CatalanSeries { roots: [f64; 2], series: Series },
}

impl Solution {
    /// Returns the strategy that produced this solution.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Linear { .. } => Method::Linear,
            Self::InfiniteSolutions => Method::InfiniteSolutions,
            Self::NoSolution => Method::NoSolution,
            Self::Factorization { .. } => Method::Factorization,
            Self::DirectRoot { .. } => Method::DirectRoot,
            Self::NoRealSolutions => Method::NoRealSolutions,
            Self::QuadraticFormula { .. } => Method::QuadraticFormula,
            Self::CatalanSeries { .. } => Method::CatalanSeries,
        }
    }

    /// Returns the real roots found, in the order the strategy produced them.
    #[must_use]
    pub fn roots(&self) -> &[f64] {
        match self {
            Self::Linear { root } => std::slice::from_ref(root),
            Self::Factorization { roots }
            | Self::DirectRoot { roots }
            | Self::QuadraticFormula { roots }
            | Self::CatalanSeries { roots, .. } => roots,
            Self::InfiniteSolutions | Self::NoSolution | Self::NoRealSolutions => &[],
        }
    }

    /// Returns the series diagnostics, if the Catalan series was used.
    #[must_use]
    pub fn series(&self) -> Option<&Series> {
        match self {
            Self::CatalanSeries { series, .. } => Some(series),
            _ => None,
        }
    }

    /// Returns the number of series terms summed, if the series was used.
    #[must_use]
    pub fn terms_used(&self) -> Option<usize> {
        self.series().map(|series| series.terms)
    }

    /// Returns the final series approximation error, if the series was used.
    #[must_use]
    pub fn error(&self) -> Option<f64> {
        self.series().map(|series| series.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_tags_are_human_readable() {
        let tags = [
            (Method::Linear, "Linear"),
            (Method::InfiniteSolutions, "Infinite solutions"),
            (Method::NoSolution, "No solution"),
            (Method::Factorization, "Factorization (c=0)"),
            (Method::DirectRoot, "Direct root (b=0)"),
            (Method::NoRealSolutions, "No real solutions"),
            (Method::QuadraticFormula, "Quadratic formula"),
            (Method::CatalanSeries, "Catalan series"),
        ];
        for (method, tag) in tags {
            assert_eq!(method.to_string(), tag);
        }
    }

    #[test]
    fn roots_view_matches_variant() {
        assert_eq!(Solution::Linear { root: 2.0 }.roots(), [2.0]);
        assert!(Solution::NoSolution.roots().is_empty());
        assert_eq!(
            Solution::Factorization { roots: [0.0, -5.0] }.roots(),
            [0.0, -5.0]
        );
    }

    #[test]
    fn series_fields_only_for_catalan() {
        let series = Series {
            status: Status::Converged,
            parameter: 0.0625,
            sum: 1.07,
            terms: 14,
            error: 5e-11,
        };
        let solution = Solution::CatalanSeries {
            roots: [-0.27, -3.73],
            series,
        };
        assert_eq!(solution.method(), Method::CatalanSeries);
        assert_eq!(solution.terms_used(), Some(14));
        assert_eq!(solution.error(), Some(5e-11));

        let solution = Solution::QuadraticFormula { roots: [1.0, 2.0] };
        assert_eq!(solution.terms_used(), None);
        assert_eq!(solution.error(), None);
        assert!(solution.series().is_none());
    }
}
