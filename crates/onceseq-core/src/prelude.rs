//! Convenient re-exports for downstream crates.

pub use crate::config::TraceConfig;
pub use crate::error::{Error, Result};
pub use crate::nullable::{is_not_null, is_null};
pub use crate::ordered::{compare, equal, reverse, Comparator};
pub use crate::protocol::{iterator, IteratorLike, PullIter};
