//! Error types.

use thiserror::Error;

/// Failure to parse a kind enumeration from its textual name.
///
/// Carries the enumeration's type name and the rejected text so that
/// configuration-driven callers can report exactly what was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} name: {name:?}")]
pub struct ParseKindError {
    /// Name of the enumeration that was being parsed (e.g. `"StdMetric"`).
    pub kind: &'static str,
    /// The text that matched no variant.
    pub name: String,
}

impl ParseKindError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        tracing::trace!(kind, name, "rejected enumeration name");
        Self {
            kind,
            name: name.to_owned(),
        }
    }
}
