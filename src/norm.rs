//! Scalar statistics over a single vector.
//!
//! These are the building blocks the pairwise metrics lean on (covariance and
//! correlation center on [`mean`]), and they are selectable at runtime through
//! [`StdNorm`](crate::StdNorm).
//!
//! # NaN Handling
//!
//! Unlike the metrics, nothing here skips NaN. A NaN element poisons the
//! arithmetic reductions (`sum`, `mean`, `var`, `std`, `l1`, `l2`,
//! `sum_squares`). The comparison folds (`max`, `min` and their absolute
//! variants) compare strictly against the running value, so a NaN element is
//! never selected.
//!
//! # Empty Input
//!
//! | Function | Empty result |
//! |----------|--------------|
//! | `sum`, `l1`, `sum_squares`, `l2`, `n` | 0 |
//! | `mean`, `var`, `std` | NaN |
//! | `max` | most negative finite value |
//! | `min`, `min_abs` | largest finite value |
//! | `max_abs` | 0 |

use num_traits::Float;

/// Convert an element count into the scalar type.
#[inline]
pub(crate) fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Number of elements, as a scalar.
#[inline]
#[must_use]
pub fn n<T: Float>(v: &[T]) -> T {
    count(v.len())
}

/// Arithmetic sum: `Σ v[i]`.
///
/// ```rust
/// assert_eq!(pairwise::norm::sum(&[1.0_f32, 2.0, 3.0]), 6.0);
/// ```
#[inline]
#[must_use]
pub fn sum<T: Float>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Arithmetic mean: `sum(v) / len(v)`.
///
/// An empty slice yields NaN (`0 / 0`). Callers that can see empty input
/// must guard for it.
///
/// ```rust
/// use pairwise::norm::mean;
///
/// assert_eq!(mean(&[1.0_f64, 2.0, 3.0, 4.0]), 2.5);
/// assert!(mean::<f64>(&[]).is_nan());
/// ```
#[inline]
#[must_use]
pub fn mean<T: Float>(v: &[T]) -> T {
    sum(v) / n(v)
}

/// Population variance: mean of squared deviations from [`mean`] (divisor `n`).
///
/// ```rust
/// use pairwise::norm::var;
///
/// assert!((var(&[1.0_f64, 2.0, 3.0, 4.0]) - 1.25).abs() < 1e-12);
/// ```
#[must_use]
pub fn var<T: Float>(v: &[T]) -> T {
    let m = mean(v);
    let ss = v.iter().fold(T::zero(), |acc, &x| {
        let d = x - m;
        acc + d * d
    });
    ss / n(v)
}

/// Population standard deviation: `sqrt(var(v))`.
#[inline]
#[must_use]
pub fn std<T: Float>(v: &[T]) -> T {
    var(v).sqrt()
}

/// L1 norm: `Σ|v[i]|`.
#[inline]
#[must_use]
pub fn l1<T: Float>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x.abs())
}

/// Sum of squares: `Σ v[i]²`.
#[inline]
#[must_use]
pub fn sum_squares<T: Float>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x * x)
}

/// L2 (Euclidean) norm: `sqrt(Σ v[i]²)`.
///
/// ```rust
/// use pairwise::norm::l2;
///
/// assert!((l2(&[3.0_f32, 4.0]) - 5.0).abs() < 1e-6);
/// ```
#[inline]
#[must_use]
pub fn l2<T: Float>(v: &[T]) -> T {
    sum_squares(v).sqrt()
}

/// Largest element.
#[must_use]
pub fn max<T: Float>(v: &[T]) -> T {
    v.iter()
        .fold(T::min_value(), |m, &x| if x > m { x } else { m })
}

/// Largest absolute value.
#[must_use]
pub fn max_abs<T: Float>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |m, &x| {
        let a = x.abs();
        if a > m {
            a
        } else {
            m
        }
    })
}

/// Smallest element.
#[must_use]
pub fn min<T: Float>(v: &[T]) -> T {
    v.iter()
        .fold(T::max_value(), |m, &x| if x < m { x } else { m })
}

/// Smallest absolute value.
#[must_use]
pub fn min_abs<T: Float>(v: &[T]) -> T {
    v.iter().fold(T::max_value(), |m, &x| {
        let a = x.abs();
        if a < m {
            a
        } else {
            m
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_mean() {
        let v = [1.0_f32, 2.0, 3.0, 4.0];
        assert_eq!(sum(&v), 10.0);
        assert_eq!(mean(&v), 2.5);
        assert_eq!(n(&v), 4.0);
    }

    #[test]
    fn test_population_variance() {
        let v = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Classic example: mean 5, population variance 4, std 2.
        assert!((var(&v) - 4.0).abs() < 1e-12);
        assert!((std(&v) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_l1_l2() {
        let v = [3.0_f32, -4.0];
        assert_eq!(l1(&v), 7.0);
        assert_eq!(sum_squares(&v), 25.0);
        assert!((l2(&v) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_extrema() {
        let v = [-7.0_f64, 2.0, 0.5, 3.0];
        assert_eq!(max(&v), 3.0);
        assert_eq!(min(&v), -7.0);
        assert_eq!(max_abs(&v), 7.0);
        assert_eq!(min_abs(&v), 0.5);
    }

    #[test]
    fn test_extrema_all_negative() {
        let v = [-3.0_f32, -1.0, -2.0];
        assert_eq!(max(&v), -1.0);
        assert_eq!(min(&v), -3.0);
    }

    #[test]
    fn test_empty() {
        let e: [f64; 0] = [];
        assert_eq!(sum(&e), 0.0);
        assert_eq!(l2(&e), 0.0);
        assert!(mean(&e).is_nan());
        assert!(var(&e).is_nan());
        assert_eq!(max(&e), f64::MIN);
        assert_eq!(min(&e), f64::MAX);
        assert_eq!(max_abs(&e), 0.0);
    }

    #[test]
    fn test_nan_is_not_skipped() {
        let v = [1.0_f32, f32::NAN, 3.0];
        assert!(sum(&v).is_nan());
        assert!(mean(&v).is_nan());
        assert!(l1(&v).is_nan());
        // Comparison folds never select NaN.
        assert_eq!(max(&v), 3.0);
        assert_eq!(min(&v), 1.0);
    }
}
