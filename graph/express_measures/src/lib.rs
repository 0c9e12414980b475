mod correlation;
mod types;

pub use correlation::*;
pub use types::*;
