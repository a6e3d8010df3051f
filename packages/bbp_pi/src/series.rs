use std::iter::FusedIterator;
use std::ops::Range;

/// Calculates the contribution of term `n` of the BBP series.
///
/// The value is `(1/16ⁿ) · (4/(8n+1) − 2/(8n+4) − 1/(8n+5) − 1/(8n+6))`, evaluated in
/// double precision. The scale factor underflows to zero for large `n`, at which point the term
/// is exactly `0.0`; this is never an error.
///
/// # Example
///
/// ```
/// assert_eq!(bbp_pi::term(0), 4.0 / 1.0 - 2.0 / 4.0 - 1.0 / 5.0 - 1.0 / 6.0);
/// ```
#[must_use]
#[inline]
pub fn term(n: u32) -> f64 {
    // Lossless, and large enough that 8n + 6 is exact for every u32 index.
    let n = f64::from(n);
    let base = 8.0 * n;

    1.0 / 16.0_f64.powf(n)
        * (4.0 / (base + 1.0) - 2.0 / (base + 4.0) - 1.0 / (base + 5.0) - 1.0 / (base + 6.0))
}

/// Returns an iterator over the first `count` terms of the BBP series, in ascending index order.
#[must_use]
pub fn terms(count: u32) -> Terms {
    Terms { indexes: 0..count }
}

/// Sums the first `count` terms of the BBP series, yielding an approximation of π.
///
/// The accumulator starts at `0.0` and the terms are added one by one in ascending index order,
/// so `approximate_pi(0)` is `0.0` and the result for any given `count` is reproducible to the
/// bit.
///
/// # Example
///
/// ```
/// let pi = bbp_pi::approximate_pi(12);
///
/// assert_eq!(pi, std::f64::consts::PI);
/// ```
#[must_use]
pub fn approximate_pi(count: u32) -> f64 {
    let mut accumulator = 0.0;

    for term in terms(count) {
        accumulator += term;
    }

    accumulator
}

/// Returns an iterator over the running value of the accumulator after each of the first
/// `count` terms has been added.
///
/// The last item is bit-identical to [`approximate_pi(count)`][approximate_pi].
#[must_use]
pub fn partial_sums(count: u32) -> PartialSums {
    PartialSums {
        terms: terms(count),
        accumulator: 0.0,
    }
}

/// Iterator over the terms of the BBP series.
///
/// Returned by [`terms()`].
#[derive(Clone, Debug)]
pub struct Terms {
    indexes: Range<u32>,
}

impl Iterator for Terms {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        self.indexes.next().map(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indexes.size_hint()
    }
}

impl ExactSizeIterator for Terms {}

impl FusedIterator for Terms {}

/// Iterator over the partial sums of the BBP series.
///
/// Returned by [`partial_sums()`].
#[derive(Clone, Debug)]
pub struct PartialSums {
    terms: Terms,
    accumulator: f64,
}

impl Iterator for PartialSums {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let term = self.terms.next()?;
        self.accumulator += term;
        Some(self.accumulator)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.terms.size_hint()
    }
}

impl ExactSizeIterator for PartialSums {}

impl FusedIterator for PartialSums {}
