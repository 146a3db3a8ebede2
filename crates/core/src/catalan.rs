//! Exact Catalan numbers.
//!
//! `C(n) = (2n)! / ((n+1)! n!)` is the sequence 1, 1, 2, 5, 14, 42, 132, …
//! Values grow like `4ⁿ / n^{3/2}`, so they are returned as [`BigUint`]:
//! `u128` intermediates overflow well before the hundredth term.
//!
//! Use [`catalan_number`] for a single index and [`CatalanSequence`] to walk
//! the sequence in order without recomputing each term from scratch.

use num_bigint::BigUint;
use num_traits::One;

/// Returns the n-th Catalan number.
///
/// Uses the multiplicative recurrence `r ← r·(2n − i)/(i + 1)` for
/// `i = 0..n`, followed by a final division by `n + 1`. After step `i` the
/// running value equals the binomial coefficient `binom(2n, i + 1)`, so every
/// division is exact.
#[must_use]
pub fn catalan_number(n: u32) -> BigUint {
    if n == 0 {
        return BigUint::one();
    }

    let n = u64::from(n);
    let mut result = BigUint::one();
    for i in 0..n {
        result = result * (2 * n - i) / (i + 1);
    }

    result / (n + 1)
}

/// Iterator over the Catalan numbers `C(0), C(1), C(2), …`.
///
/// Each step applies the exact ratio `C(n+1) = C(n)·2(2n+1)/(n+2)`.
/// Yields bare values; `enumerate` or [`CatalanSequence::next_index`] supplies
/// the index. The iterator is unbounded; pair it with `take` or `zip`.
#[derive(Debug, Clone)]
pub struct CatalanSequence {
    index: u64,
    current: BigUint,
}

impl CatalanSequence {
    /// Creates a sequence starting at `C(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: 0,
            current: BigUint::one(),
        }
    }

    /// Returns the index of the next value the iterator will yield.
    #[must_use]
    pub fn next_index(&self) -> u64 {
        self.index
    }
}

impl Default for CatalanSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CatalanSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.index;
        let next = &self.current * (2 * (2 * n + 1)) / (n + 2);
        self.index += 1;
        Some(std::mem::replace(&mut self.current, next))
    }
}
