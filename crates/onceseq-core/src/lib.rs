#![forbid(unsafe_code)]
//! onceseq-core: the shared kernel for single-pass sequence primitives.
//!
//! This crate contains only the pull protocol, the error type, and the small
//! collaborators (ordering, nullable detection, trace configuration) that the
//! stream and terminal crates build on. There is **no buffering** and **no
//! background work** here.
//!
//! Crates that use this:
//! - onceseq-stream: lazy transforms returning new iterators.
//! - onceseq-terminal: consumers that drain an iterator into a value.
//! - onceseq-compose: curried helpers and pipe/compose utilities.

pub mod config;
pub mod error;
pub mod nullable;
pub mod ordered;
pub mod prelude;
pub mod protocol;

pub use error::{Error, Result};
pub use protocol::{iterator, IteratorLike, PullIter};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
