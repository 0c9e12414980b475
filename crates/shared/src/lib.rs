pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{EdgeId, NodeId, PriorityT, WeightT, DEFAULT_EPSILON};
