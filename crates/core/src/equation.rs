use std::fmt;

/// A real quadratic equation `ax² + bx + c = 0`.
///
/// No invariant is enforced on construction. Zero coefficients are legal and
/// select which solution strategy applies, so `Equation::new(0.0, 3.0, -6.0)`
/// is a perfectly good (linear) equation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equation {
    /// Quadratic coefficient.
    pub a: f64,

    /// Linear coefficient.
    pub b: f64,

    /// Constant term.
    pub c: f64,
}

impl Equation {
    /// Creates an equation from its three coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates `ax² + bx + c` at `x`.
    ///
    /// For a root this is the back-substitution residual.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Returns the coefficients as `[a, b, c]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<[f64; 3]> for Equation {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x² + {}x + {} = 0", self.a, self.b, self.c)
    }
}
