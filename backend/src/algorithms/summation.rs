//! Order-independent floating-point summation.
//!
//! Exposure totals and coordinate sums must not depend on the order in which
//! frames reach the fold. A plain `f64` accumulator rounds after every addition,
//! so two permutations of the same records can disagree in the last bits.
//!
//! [`ExactSum`] keeps the running total as a list of non-overlapping partials
//! (Shewchuk's algorithm). The partials represent the mathematically exact sum
//! of every value added so far, and [`ExactSum::value`] rounds that exact sum
//! once. The result is therefore identical for every permutation of the input.
//!
//! When finite inputs overflow the partials, the accumulator saturates to a
//! signed infinity instead of producing `NaN`. Past that point the result is
//! no longer exact.

/// Exact accumulator for finite `f64` values.
///
/// # Examples
///
/// ```
/// use observatory_stats::algorithms::ExactSum;
///
/// let mut sum = ExactSum::new();
/// sum.add(1e100);
/// sum.add(1.0);
/// sum.add(-1e100);
/// assert_eq!(sum.value(), 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExactSum {
    partials: Vec<f64>,
    /// Signed infinities from intermediate overflow of finite inputs.
    overflow: f64,
    /// Sum of non-finite inputs.
    special: f64,
}

impl ExactSum {
    /// Create an empty accumulator (value `0.0`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one value.
    ///
    /// Non-finite values are kept apart from the partials and dominate the
    /// result. An overflowing partial saturates the sum to `±inf`.
    #[allow(clippy::needless_range_loop)]
    pub fn add(&mut self, value: f64) {
        if !value.is_finite() {
            self.special += value;
            return;
        }

        let mut x = value;
        let mut kept = 0;

        for j in 0..self.partials.len() {
            let mut y = self.partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            if !hi.is_finite() {
                self.overflow += hi;
                self.partials.clear();
                return;
            }
            let lo = y - (hi - x);
            if lo != 0.0 {
                self.partials[kept] = lo;
                kept += 1;
            }
            x = hi;
        }

        self.partials.truncate(kept);
        self.partials.push(x);
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &ExactSum) {
        self.special += other.special;
        self.overflow += other.overflow;
        for &partial in &other.partials {
            self.add(partial);
        }
    }

    /// The exact sum, correctly rounded to the nearest `f64`.
    ///
    /// Returns `±inf` after overflow, and `NaN` only when the inputs
    /// themselves were `NaN` or overflowed in both directions.
    pub fn value(&self) -> f64 {
        if self.special != 0.0 || self.special.is_nan() {
            return self.special + self.overflow;
        }
        if self.overflow != 0.0 || self.overflow.is_nan() {
            return self.overflow;
        }

        let partials = &self.partials;
        let mut n = partials.len();
        if n == 0 {
            return 0.0;
        }

        n -= 1;
        let mut hi = partials[n];
        let mut lo = 0.0;

        // Sum from the top down until the remainder can no longer be represented.
        while n > 0 {
            let x = hi;
            n -= 1;
            let y = partials[n];
            hi = x + y;
            let y_rounded = hi - x;
            lo = y - y_rounded;
            if lo != 0.0 {
                break;
            }
        }

        // Half-way case: the next partial decides the rounding direction.
        if n > 0 && ((lo < 0.0 && partials[n - 1] < 0.0) || (lo > 0.0 && partials[n - 1] > 0.0)) {
            let y = lo * 2.0;
            let x = hi + y;
            let y_rounded = x - hi;
            if y == y_rounded {
                hi = x;
            }
        }

        hi
    }
}

impl FromIterator<f64> for ExactSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sum = ExactSum::new();
        for value in iter {
            sum.add(value);
        }
        sum
    }
}

impl Extend<f64> for ExactSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
