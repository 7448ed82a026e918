//! NaN-aware pairwise vector metrics and norm statistics.
//!
//! `pairwise` reduces one or two equal-length `f32`/`f64` slices to a scalar:
//!
//! - **Metrics**: [`euclidean`], [`sum_squares`], [`covariance`],
//!   [`correlation`], [`cosine`], [`inv_cosine`], [`inv_correlation`],
//!   [`inner_product`], [`abs`], [`hamming`], [`cross_entropy`]
//! - **Norms**: [`norm::l1`], [`norm::l2`], [`norm::mean`], [`norm::var`],
//!   [`norm::std`] and the rest of the [`norm`] module
//! - **Runtime selection**: [`StdMetric`] and [`StdNorm`] map a symbolic name
//!   to the function at either precision
//!
//! # NaN Skipping
//!
//! Metrics drop any index where *either* slice holds NaN. The skip is per
//! pair, so a missing value in one vector only removes that one position from
//! the comparison:
//!
//! ```rust
//! use pairwise::sum_squares;
//!
//! let a = [1.0_f32, f32::NAN, 3.0];
//! let b = [1.0_f32, 2.0, 3.0];
//! assert_eq!(sum_squares(&a, &b), 0.0);
//! ```
//!
//! Norms do not skip NaN; see the [`norm`] module docs.
//!
//! # Length Checks
//!
//! Every metric panics on slices of different length, in all build profiles.
//!
//! # Example
//!
//! ```rust
//! use pairwise::{cosine, euclidean, inner_product, StdMetric};
//!
//! let a = [1.0_f64, 2.0, 3.0];
//! let b = [1.0_f64, 2.0, 5.0];
//!
//! assert_eq!(euclidean(&a, &b), 2.0);
//! assert_eq!(inner_product(&a, &b), 20.0);
//! assert!((cosine(&a, &a) - 1.0).abs() < 1e-12);
//!
//! // Same thing, chosen by name
//! let f = "InnerProduct".parse::<StdMetric>().unwrap().func64();
//! assert_eq!(f(&a, &b), 20.0);
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`StdMetric`], [`StdNorm`] and [`ElementType`] as
//!   their canonical name strings.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Implement `Serialize`/`Deserialize` through `Display`/`FromStr`.
macro_rules! impl_serde_by_name {
    ($ty:ty) => {
        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}
pub(crate) use impl_serde_by_name;

mod dtype;
mod error;
mod kind;
pub mod metric;
pub mod norm;

pub use dtype::ElementType;
pub use error::ParseKindError;
pub use kind::{
    metric_by_name, metric_by_repr, norm_by_name, MetricFn, MetricFn32, MetricFn64, NormFn,
    NormFn32, NormFn64, StdMetric, StdNorm,
};
pub use metric::{
    abs, correlation, cosine, covariance, cross_entropy, euclidean, hamming, inner_product,
    inv_correlation, inv_cosine, sum_squares, Metric,
};
