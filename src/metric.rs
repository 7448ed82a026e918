//! Pairwise distance and similarity metrics.
//!
//! Every function takes two slices of the same length and reduces them to a
//! single scalar. Two rules apply to all of them:
//!
//! - **Equal lengths.** A length mismatch panics before anything is
//!   accumulated, in release builds too.
//! - **Per-pair NaN skipping.** An index where *either* value is NaN is dropped
//!   from every accumulator and from the pair count used as a divisor.
//!
//! Functions are generic over [`Float`], so the same code serves `f32` and
//! `f64`.

use num_traits::Float;

use crate::norm;

/// A pairwise metric over two equal-length slices.
///
/// Implemented by [`StdMetric`](crate::StdMetric), so a kind chosen from
/// configuration can be handed to code written against this trait.
pub trait Metric<T> {
    /// Compute the metric between `a` and `b`.
    fn distance(&self, a: &[T], b: &[T]) -> T;
}

impl<T, F> Metric<T> for F
where
    F: Fn(&[T], &[T]) -> T,
{
    #[inline]
    fn distance(&self, a: &[T], b: &[T]) -> T {
        self(a, b)
    }
}

/// Iterate the pairs of `a` and `b` that contain no NaN.
///
/// The length check runs eagerly, before the iterator is handed back.
#[inline]
fn valid_pairs<'a, T: Float>(a: &'a [T], b: &'a [T]) -> impl Iterator<Item = (T, T)> + 'a {
    assert_eq!(
        a.len(),
        b.len(),
        "metric: slice lengths do not match ({} vs {})",
        a.len(),
        b.len()
    );
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x, y))
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
}

/// Sum-of-squares distance: `Σ(a[i] - b[i])²`.
///
/// ```rust
/// use pairwise::sum_squares;
///
/// let a = [1.0_f32, 2.0, 3.0];
/// let b = [1.0_f32, 2.0, 5.0];
/// assert_eq!(sum_squares(&a, &b), 4.0);
///
/// // The NaN pair is skipped; the rest are equal.
/// let c = [1.0_f32, f32::NAN, 3.0];
/// assert_eq!(sum_squares(&c, &a), 0.0);
/// ```
#[inline]
#[must_use]
pub fn sum_squares<T: Float>(a: &[T], b: &[T]) -> T {
    valid_pairs(a, b).fold(T::zero(), |ss, (x, y)| {
        let d = x - y;
        ss + d * d
    })
}

/// Euclidean distance: `sqrt(sum_squares(a, b))`.
///
/// ```rust
/// use pairwise::euclidean;
///
/// let a = [1.0_f64, 2.0, 3.0];
/// let b = [1.0_f64, 2.0, 5.0];
/// assert_eq!(euclidean(&a, &b), 2.0);
/// ```
#[inline]
#[must_use]
pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    sum_squares(a, b).sqrt()
}

/// Covariance: `E[(A - E(A))(B - E(B))]`.
///
/// The means come from [`norm::mean`] over the full slices, while the
/// co-products and the divisor only count NaN-free pairs. With no valid pairs
/// the result is 0. A NaN anywhere in either slice therefore makes that
/// slice's mean NaN, and the result with it.
///
/// ```rust
/// use pairwise::covariance;
///
/// let a = [1.0_f64, 2.0, 3.0];
/// let b = [2.0_f64, 4.0, 6.0];
/// // Deviations (-1, 0, 1) and (-2, 0, 2): (2 + 0 + 2) / 3
/// assert!((covariance(&a, &b) - 4.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn covariance<T: Float>(a: &[T], b: &[T]) -> T {
    let pairs = valid_pairs(a, b);
    let am = norm::mean(a);
    let bm = norm::mean(b);
    let (ss, n) = pairs.fold((T::zero(), 0_usize), |(ss, n), (x, y)| {
        (ss + (x - am) * (y - bm), n + 1)
    });
    if n > 0 {
        ss / norm::count(n)
    } else {
        ss
    }
}

/// Pearson correlation in `[-1, 1]`: covariance normalized by the product of
/// the standard deviations, i.e. the cosine of the mean-centered vectors.
///
/// If either centered vector has no spread (denominator not > 0), the raw
/// co-product sum is returned undivided.
///
/// ```rust
/// use pairwise::correlation;
///
/// let a = [1.0_f32, 2.0, 3.0, 4.0];
/// let b = [10.0_f32, 20.0, 30.0, 40.0];
/// assert!((correlation(&a, &b) - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn correlation<T: Float>(a: &[T], b: &[T]) -> T {
    let pairs = valid_pairs(a, b);
    let am = norm::mean(a);
    let bm = norm::mean(b);
    let (ss, avar, bvar) = pairs.fold(
        (T::zero(), T::zero(), T::zero()),
        |(ss, avar, bvar), (x, y)| {
            let ad = x - am;
            let bd = y - bm;
            // between, then within
            (ss + ad * bd, avar + ad * ad, bvar + bd * bd)
        },
    );
    let vp = (avar * bvar).sqrt();
    if vp > T::zero() {
        ss / vp
    } else {
        ss
    }
}

/// Cosine similarity in `[-1, 1]`: `Σ(a[i]·b[i]) / sqrt(Σa[i]² · Σb[i]²)`.
///
/// With a zero-norm side the raw inner product (0 for a zero vector) is
/// returned undivided.
///
/// ```rust
/// use pairwise::cosine;
///
/// assert!(cosine(&[1.0_f32, 0.0], &[0.0, 1.0]).abs() < 1e-6);
/// assert!((cosine(&[1.0_f32, 0.0], &[2.0, 0.0]) - 1.0).abs() < 1e-6);
/// assert_eq!(cosine(&[1.0_f32, 2.0], &[0.0, 0.0]), 0.0);
/// ```
#[must_use]
pub fn cosine<T: Float>(a: &[T], b: &[T]) -> T {
    let (ss, ass, bss) = valid_pairs(a, b).fold(
        (T::zero(), T::zero(), T::zero()),
        |(ss, ass, bss), (x, y)| (ss + x * y, ass + x * x, bss + y * y),
    );
    let vp = (ass * bss).sqrt();
    if vp > T::zero() {
        ss / vp
    } else {
        ss
    }
}

/// Cosine distance: `1 - cosine(a, b)`.
#[inline]
#[must_use]
pub fn inv_cosine<T: Float>(a: &[T], b: &[T]) -> T {
    T::one() - cosine(a, b)
}

/// Correlation distance: `1 - correlation(a, b)`.
#[inline]
#[must_use]
pub fn inv_correlation<T: Float>(a: &[T], b: &[T]) -> T {
    T::one() - correlation(a, b)
}

/// Inner (dot) product: `Σ(a[i]·b[i])`, unnormalized.
///
/// ```rust
/// use pairwise::inner_product;
///
/// assert_eq!(inner_product(&[1.0_f32, 2.0, 3.0], &[1.0, 2.0, 5.0]), 20.0);
/// ```
#[inline]
#[must_use]
pub fn inner_product<T: Float>(a: &[T], b: &[T]) -> T {
    valid_pairs(a, b).fold(T::zero(), |ss, (x, y)| ss + x * y)
}

/// Absolute (Manhattan, L1) distance: `Σ|a[i] - b[i]|`.
///
/// ```rust
/// use pairwise::abs;
///
/// // |1-4| + |2-0| = 3 + 2
/// assert_eq!(abs(&[1.0_f64, 2.0], &[4.0, 0.0]), 5.0);
/// ```
#[inline]
#[must_use]
pub fn abs<T: Float>(a: &[T], b: &[T]) -> T {
    valid_pairs(a, b).fold(T::zero(), |ss, (x, y)| ss + (x - y).abs())
}

/// Hamming distance: number of NaN-free positions where `a[i] != b[i]`.
///
/// ```rust
/// use pairwise::hamming;
///
/// assert_eq!(hamming(&[1.0_f32, 0.0, 1.0, 1.0], &[1.0, 1.0, 0.0, 1.0]), 2.0);
/// ```
#[inline]
#[must_use]
pub fn hamming<T: Float>(a: &[T], b: &[T]) -> T {
    valid_pairs(a, b).fold(T::zero(), |ss, (x, y)| {
        if x != y {
            ss + T::one()
        } else {
            ss
        }
    })
}

/// Cross-entropy of `b` relative to the target distribution `a`:
/// `-Σ a[i]·ln(b[i])`.
///
/// Not symmetric: `a` holds the target probabilities and `b` the predicted
/// ones. No clamping is applied, so a zero prediction under positive target
/// mass yields `+inf`.
///
/// ```rust
/// use pairwise::cross_entropy;
///
/// let target = [1.0_f64, 0.0];
/// let pred = [0.5_f64, 0.5];
/// assert!((cross_entropy(&target, &pred) - std::f64::consts::LN_2).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn cross_entropy<T: Float>(a: &[T], b: &[T]) -> T {
    -valid_pairs(a, b).fold(T::zero(), |ss, (x, y)| ss + x * y.ln())
}
