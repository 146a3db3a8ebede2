use num_bigint::BigUint;

/// Event emitted by the Catalan series after each accumulated term.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Term index (0-based); `n + 1` terms have been summed.
    pub n: usize,

    /// The transformation parameter `A = ac/b²`.
    pub parameter: f64,

    /// The exact Catalan coefficient `C(n)`.
    pub catalan: &'a BigUint,

    /// The term `C(n)·Aⁿ` just added.
    pub term: f64,

    /// The partial sum after adding the term.
    pub partial_sum: f64,

    /// Distance between the partial sum and the closed-form value.
    pub error: f64,
}

impl Event<'_> {
    /// Returns the number of terms summed so far.
    #[must_use]
    pub fn terms(&self) -> usize {
        self.n + 1
    }
}
