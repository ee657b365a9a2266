#![forbid(unsafe_code)]
//! onceseq: single-pass sequence primitives over pull iterators.
//!
//! Every primitive accepts anything `IntoIterator` and pulls from it at most
//! once per element. Stream transforms are lazy and return new iterators;
//! terminal consumers drain (or short-circuit) into a value.
//!
//! ```
//! use onceseq::{sum, take_while, OnceIteratorExt};
//!
//! let evens = (1..).map_indexed(|n, _| n * 2);
//! assert_eq!(sum(take_while(evens, |n, _| *n < 10)), 20);
//! ```
//!
//! Each argument-taking primitive also has a curried `*_fn` sibling for use
//! with [`Pipe::pipe`], [`pipe!`] or [`compose`].

pub use onceseq_core::config::TraceConfig;
pub use onceseq_core::{iterator, nullable, ordered, Error, IteratorLike, PullIter, Result};

pub use onceseq_stream::*;
pub use onceseq_terminal::*;

pub use onceseq_compose::stream::*;
pub use onceseq_compose::terminal::*;
pub use onceseq_compose::{compose, pipe, OnceIteratorExt, Pipe};

/// Protocol types, collaborators and the chaining traits in one import.
pub mod prelude {
    pub use onceseq_compose::{OnceIteratorExt, Pipe};
    pub use onceseq_core::prelude::*;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
