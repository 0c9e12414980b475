//! Identifier and numeric types shared across the MI engine, path ranker and
//! seed-bounded expander.
use std::fmt;
use std::sync::Arc;

/// Stable string identity of a node. Cheap to clone: internally an `Arc<str>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

/// Stable string identity of an edge. Cheap to clone: internally an `Arc<str>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(Arc<str>);

macro_rules! impl_string_id {
    ($ty:ident) => {
        impl $ty {
            pub fn new(value: impl Into<Arc<str>>) -> Self {
                $ty(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                $ty(Arc::from(value))
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                $ty(Arc::from(value.as_str()))
            }
        }

        impl std::borrow::Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_id!(NodeId);
impl_string_id!(EdgeId);

/// Numeric floor used throughout the MI engine and the path ranker to keep
/// logarithms and divisions finite. `10^-10` per the default of both
/// `MIConfig` and `PathRankingConfig`.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Edge weight, timestamp, sign or probability payload.
pub type WeightT = f64;

/// A priority value used by the seed-bounded expander's frontiers.
pub type PriorityT = f64;
