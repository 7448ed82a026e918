//! Runtime selection of metrics and norms by symbolic name.
//!
//! [`StdMetric`] and [`StdNorm`] are closed enumerations with a static name
//! table and a static dispatch table. Configuration-driven callers parse a
//! name, then ask the kind for the function at the precision they work in:
//!
//! ```rust
//! use pairwise::StdMetric;
//!
//! let kind: StdMetric = "Euclidean".parse().unwrap();
//! let f = kind.func64();
//! assert_eq!(f(&[1.0, 2.0, 3.0], &[1.0, 2.0, 5.0]), 2.0);
//! ```
//!
//! Lookups keyed by raw text or raw tag ([`metric_by_name`], [`metric_by_repr`],
//! [`norm_by_name`]) return `None` for anything outside the table.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::error::ParseKindError;
use crate::metric::{self, Metric};
use crate::norm;

/// A pairwise metric function at precision `T`.
pub type MetricFn<T> = fn(&[T], &[T]) -> T;
/// [`MetricFn`] over `f32`.
pub type MetricFn32 = MetricFn<f32>;
/// [`MetricFn`] over `f64`.
pub type MetricFn64 = MetricFn<f64>;

/// A single-vector norm function at precision `T`.
pub type NormFn<T> = fn(&[T]) -> T;
/// [`NormFn`] over `f32`.
pub type NormFn32 = NormFn<f32>;
/// [`NormFn`] over `f64`.
pub type NormFn64 = NormFn<f64>;

// ─────────────────────────────────────────────────────────────────────────────
// StdMetric
// ─────────────────────────────────────────────────────────────────────────────

/// The standard pairwise metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StdMetric {
    /// [`metric::euclidean`]
    Euclidean = 0,
    /// [`metric::sum_squares`]
    SumSquares,
    /// [`metric::covariance`]
    Covariance,
    /// [`metric::correlation`]
    Correlation,
    /// [`metric::cosine`]
    Cosine,
    /// [`metric::inv_cosine`]
    InvCosine,
    /// [`metric::inv_correlation`]
    InvCorrelation,
    /// [`metric::inner_product`]
    InnerProduct,
    /// [`metric::abs`]
    Abs,
    /// [`metric::hamming`]
    Hamming,
    /// [`metric::cross_entropy`]
    CrossEntropy,
}

impl StdMetric {
    /// Every variant, in tag order.
    pub const ALL: [StdMetric; 11] = [
        StdMetric::Euclidean,
        StdMetric::SumSquares,
        StdMetric::Covariance,
        StdMetric::Correlation,
        StdMetric::Cosine,
        StdMetric::InvCosine,
        StdMetric::InvCorrelation,
        StdMetric::InnerProduct,
        StdMetric::Abs,
        StdMetric::Hamming,
        StdMetric::CrossEntropy,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StdMetric::Euclidean => "Euclidean",
            StdMetric::SumSquares => "SumSquares",
            StdMetric::Covariance => "Covariance",
            StdMetric::Correlation => "Correlation",
            StdMetric::Cosine => "Cosine",
            StdMetric::InvCosine => "InvCosine",
            StdMetric::InvCorrelation => "InvCorrelation",
            StdMetric::InnerProduct => "InnerProduct",
            StdMetric::Abs => "Abs",
            StdMetric::Hamming => "Hamming",
            StdMetric::CrossEntropy => "CrossEntropy",
        }
    }

    /// Variant for a raw tag, or `None` if the tag is out of range.
    #[must_use]
    pub fn from_repr(tag: u8) -> Option<Self> {
        Self::ALL.get(usize::from(tag)).copied()
    }

    /// The metric function for this kind at precision `T`.
    #[must_use]
    pub fn func<T: Float>(self) -> MetricFn<T> {
        match self {
            StdMetric::Euclidean => metric::euclidean,
            StdMetric::SumSquares => metric::sum_squares,
            StdMetric::Covariance => metric::covariance,
            StdMetric::Correlation => metric::correlation,
            StdMetric::Cosine => metric::cosine,
            StdMetric::InvCosine => metric::inv_cosine,
            StdMetric::InvCorrelation => metric::inv_correlation,
            StdMetric::InnerProduct => metric::inner_product,
            StdMetric::Abs => metric::abs,
            StdMetric::Hamming => metric::hamming,
            StdMetric::CrossEntropy => metric::cross_entropy,
        }
    }

    /// The `f32` metric function for this kind.
    #[inline]
    #[must_use]
    pub fn func32(self) -> MetricFn32 {
        self.func()
    }

    /// The `f64` metric function for this kind.
    #[inline]
    #[must_use]
    pub fn func64(self) -> MetricFn64 {
        self.func()
    }

    /// Whether larger values mean "more alike".
    ///
    /// True for the similarity kinds (correlation, cosine, inner product);
    /// false for the distances, where smaller is closer. Useful for picking a
    /// sort direction when ranking by a configured metric.
    #[must_use]
    pub const fn is_similarity(self) -> bool {
        matches!(
            self,
            StdMetric::Correlation | StdMetric::Cosine | StdMetric::InnerProduct
        )
    }
}

impl<T: Float> Metric<T> for StdMetric {
    #[inline]
    fn distance(&self, a: &[T], b: &[T]) -> T {
        (self.func::<T>())(a, b)
    }
}

impl fmt::Display for StdMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StdMetric {
    type Err = ParseKindError;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| ParseKindError::new("StdMetric", s))
    }
}

impl From<StdMetric> for u8 {
    fn from(k: StdMetric) -> u8 {
        k as u8
    }
}

/// Metric function for a textual name, or `None` if no kind has that name.
#[must_use]
pub fn metric_by_name<T: Float>(name: &str) -> Option<MetricFn<T>> {
    match name.parse::<StdMetric>() {
        Ok(k) => Some(k.func()),
        Err(_) => {
            tracing::debug!(name, "no metric registered under name");
            None
        }
    }
}

/// Metric function for a raw tag, or `None` if the tag is out of range.
#[must_use]
pub fn metric_by_repr<T: Float>(tag: u8) -> Option<MetricFn<T>> {
    let func = StdMetric::from_repr(tag).map(|k| k.func());
    if func.is_none() {
        tracing::debug!(tag, "no metric registered under tag");
    }
    func
}

// ─────────────────────────────────────────────────────────────────────────────
// StdNorm
// ─────────────────────────────────────────────────────────────────────────────

/// The standard single-vector norms and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StdNorm {
    /// [`norm::l1`]
    L1 = 0,
    /// [`norm::l2`]
    L2,
    /// [`norm::sum_squares`]
    SumSquares,
    /// [`norm::n`]
    N,
    /// [`norm::sum`]
    Sum,
    /// [`norm::mean`]
    Mean,
    /// [`norm::var`]
    Var,
    /// [`norm::std`]
    Std,
    /// [`norm::max`]
    Max,
    /// [`norm::max_abs`]
    MaxAbs,
    /// [`norm::min`]
    Min,
    /// [`norm::min_abs`]
    MinAbs,
}

impl StdNorm {
    /// Every variant, in tag order.
    pub const ALL: [StdNorm; 12] = [
        StdNorm::L1,
        StdNorm::L2,
        StdNorm::SumSquares,
        StdNorm::N,
        StdNorm::Sum,
        StdNorm::Mean,
        StdNorm::Var,
        StdNorm::Std,
        StdNorm::Max,
        StdNorm::MaxAbs,
        StdNorm::Min,
        StdNorm::MinAbs,
    ];

    /// Canonical name, as produced by [`Display`](fmt::Display).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StdNorm::L1 => "L1",
            StdNorm::L2 => "L2",
            StdNorm::SumSquares => "SumSquares",
            StdNorm::N => "N",
            StdNorm::Sum => "Sum",
            StdNorm::Mean => "Mean",
            StdNorm::Var => "Var",
            StdNorm::Std => "Std",
            StdNorm::Max => "Max",
            StdNorm::MaxAbs => "MaxAbs",
            StdNorm::Min => "Min",
            StdNorm::MinAbs => "MinAbs",
        }
    }

    /// Variant for a raw tag, or `None` if the tag is out of range.
    #[must_use]
    pub fn from_repr(tag: u8) -> Option<Self> {
        Self::ALL.get(usize::from(tag)).copied()
    }

    /// The norm function for this kind at precision `T`.
    #[must_use]
    pub fn func<T: Float>(self) -> NormFn<T> {
        match self {
            StdNorm::L1 => norm::l1,
            StdNorm::L2 => norm::l2,
            StdNorm::SumSquares => norm::sum_squares,
            StdNorm::N => norm::n,
            StdNorm::Sum => norm::sum,
            StdNorm::Mean => norm::mean,
            StdNorm::Var => norm::var,
            StdNorm::Std => norm::std,
            StdNorm::Max => norm::max,
            StdNorm::MaxAbs => norm::max_abs,
            StdNorm::Min => norm::min,
            StdNorm::MinAbs => norm::min_abs,
        }
    }

    /// The `f32` norm function for this kind.
    #[inline]
    #[must_use]
    pub fn func32(self) -> NormFn32 {
        self.func()
    }

    /// The `f64` norm function for this kind.
    #[inline]
    #[must_use]
    pub fn func64(self) -> NormFn64 {
        self.func()
    }
}

impl fmt::Display for StdNorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StdNorm {
    type Err = ParseKindError;

    /// Case-insensitive match: `"MaxAbs"`, `"maxabs"` and `"MAXABS"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError::new("StdNorm", s))
    }
}

impl From<StdNorm> for u8 {
    fn from(k: StdNorm) -> u8 {
        k as u8
    }
}

/// Norm function for a textual name (case-insensitive), or `None`.
#[must_use]
pub fn norm_by_name<T: Float>(name: &str) -> Option<NormFn<T>> {
    match name.parse::<StdNorm>() {
        Ok(k) => Some(k.func()),
        Err(_) => {
            tracing::debug!(name, "no norm registered under name");
            None
        }
    }
}

crate::impl_serde_by_name!(StdMetric);
crate::impl_serde_by_name!(StdNorm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_name_round_trip() {
        for k in StdMetric::ALL {
            assert_eq!(k.to_string().parse::<StdMetric>(), Ok(k));
        }
    }

    #[test]
    fn test_metric_parse_is_exact() {
        assert_eq!("SumSquares".parse::<StdMetric>(), Ok(StdMetric::SumSquares));
        assert!("sumsquares".parse::<StdMetric>().is_err());
        let err = "not-a-real-metric".parse::<StdMetric>().unwrap_err();
        assert_eq!(err.kind, "StdMetric");
        assert_eq!(err.name, "not-a-real-metric");
    }

    #[test]
    fn test_metric_tags_match_table_order() {
        for (i, k) in StdMetric::ALL.iter().enumerate() {
            assert_eq!(u8::from(*k) as usize, i);
            assert_eq!(StdMetric::from_repr(i as u8), Some(*k));
        }
        assert_eq!(StdMetric::from_repr(11), None);
        assert_eq!(StdMetric::from_repr(u8::MAX), None);
    }

    #[test]
    fn test_metric_dispatch() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [1.0_f64, 2.0, 5.0];
        assert_eq!(StdMetric::SumSquares.func64()(&a, &b), 4.0);
        assert_eq!(StdMetric::Euclidean.func::<f64>()(&a, &b), 2.0);
        assert_eq!(StdMetric::InnerProduct.distance(&a[..], &b[..]), 20.0);

        let a32 = [1.0_f32, 2.0, 3.0];
        let b32 = [1.0_f32, 2.0, 5.0];
        assert_eq!(StdMetric::Abs.func32()(&a32, &b32), 2.0);
    }

    #[test]
    fn test_every_metric_kind_dispatches_to_its_function() {
        let a = [0.2_f64, 0.3, 0.5];
        let b = [0.1_f64, 0.6, 0.3];
        let direct: [MetricFn64; 11] = [
            metric::euclidean,
            metric::sum_squares,
            metric::covariance,
            metric::correlation,
            metric::cosine,
            metric::inv_cosine,
            metric::inv_correlation,
            metric::inner_product,
            metric::abs,
            metric::hamming,
            metric::cross_entropy,
        ];
        for (k, f) in StdMetric::ALL.iter().zip(direct) {
            assert_eq!(k.func64()(&a, &b), f(&a, &b), "{k}");
        }
    }

    #[test]
    fn test_lookup_absence() {
        assert!(metric_by_name::<f32>("Cosine").is_some());
        assert!(metric_by_name::<f32>("cosine").is_none());
        assert!(metric_by_repr::<f64>(4).is_some());
        assert!(metric_by_repr::<f64>(42).is_none());
        assert!(norm_by_name::<f64>("std").is_some());
        assert!(norm_by_name::<f64>("median").is_none());
    }

    #[test]
    fn test_is_similarity() {
        let sims: Vec<_> = StdMetric::ALL
            .into_iter()
            .filter(|k| k.is_similarity())
            .collect();
        assert_eq!(
            sims,
            [
                StdMetric::Correlation,
                StdMetric::Cosine,
                StdMetric::InnerProduct
            ]
        );
    }

    #[test]
    fn test_norm_name_round_trip() {
        for k in StdNorm::ALL {
            assert_eq!(k.to_string().parse::<StdNorm>(), Ok(k));
            assert_eq!(k.name().to_lowercase().parse::<StdNorm>(), Ok(k));
            assert_eq!(k.name().to_uppercase().parse::<StdNorm>(), Ok(k));
        }
        assert!("L3".parse::<StdNorm>().is_err());
    }

    #[test]
    fn test_norm_dispatch() {
        let v = [1.0_f64, 2.0, 3.0, 4.0];
        assert_eq!(StdNorm::N.func64()(&v), 4.0);
        assert_eq!(StdNorm::Sum.func64()(&v), 10.0);
        assert_eq!(StdNorm::Mean.func64()(&v), 2.5);
        assert!((StdNorm::Var.func64()(&v) - 1.25).abs() < 1e-12);
        assert_eq!(StdNorm::MaxAbs.func::<f64>()(&[-5.0, 1.0]), 5.0);
        assert_eq!(StdNorm::L1.func32()(&[-1.0, 1.0]), 2.0);
        assert_eq!(StdNorm::from_repr(12), None);
    }
}
