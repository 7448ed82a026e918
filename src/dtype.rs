//! Tensor element type tags.
//!
//! A passive label for the numeric kind stored in a tensor column. Nothing in
//! this crate computes on it; it exists so callers can carry and round-trip the
//! name alongside the metric and norm kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;

/// Element type of a tensor.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ElementType {
    Null = 0,
    Bool,
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Uint64,
    Int64,
    Float16,
    Float32,
    Float64,
    String,
    Int,
}

impl ElementType {
    /// Every variant, in tag order.
    pub const ALL: [ElementType; 15] = [
        ElementType::Null,
        ElementType::Bool,
        ElementType::Uint8,
        ElementType::Int8,
        ElementType::Uint16,
        ElementType::Int16,
        ElementType::Uint32,
        ElementType::Int32,
        ElementType::Uint64,
        ElementType::Int64,
        ElementType::Float16,
        ElementType::Float32,
        ElementType::Float64,
        ElementType::String,
        ElementType::Int,
    ];

    /// Canonical uppercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ElementType::Null => "NULL",
            ElementType::Bool => "BOOL",
            ElementType::Uint8 => "UINT8",
            ElementType::Int8 => "INT8",
            ElementType::Uint16 => "UINT16",
            ElementType::Int16 => "INT16",
            ElementType::Uint32 => "UINT32",
            ElementType::Int32 => "INT32",
            ElementType::Uint64 => "UINT64",
            ElementType::Int64 => "INT64",
            ElementType::Float16 => "FLOAT16",
            ElementType::Float32 => "FLOAT32",
            ElementType::Float64 => "FLOAT64",
            ElementType::String => "STRING",
            ElementType::Int => "INT",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ElementType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| ParseKindError::new("ElementType", s))
    }
}

crate::impl_serde_by_name!(ElementType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for t in ElementType::ALL {
            assert_eq!(t.to_string().parse::<ElementType>(), Ok(t));
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!("FLOAT32".parse::<ElementType>(), Ok(ElementType::Float32));
        let err = "float32".parse::<ElementType>().unwrap_err();
        assert_eq!(err.kind, "ElementType");
        assert_eq!(err.name, "float32");
        // INT must not be matched as a prefix of INT8 and vice versa.
        assert_eq!("INT".parse::<ElementType>(), Ok(ElementType::Int));
        assert_eq!("INT8".parse::<ElementType>(), Ok(ElementType::Int8));
    }
}
