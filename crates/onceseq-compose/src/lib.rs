#![forbid(unsafe_code)]
//! onceseq-compose: ways of chaining onceseq primitives.
//!
//! - [`stream`] and [`terminal`] hold a curried `*_fn` sibling for every
//!   primitive that takes arguments beyond its source. Each returns a
//!   one-shot closure over the source.
//! - [`Pipe`], [`pipe!`] and [`compose`] thread a value through such
//!   closures.
//! - [`OnceIteratorExt`] offers the stream transforms as iterator methods.

pub mod ext;
pub mod pipe;
pub mod stream;
pub mod terminal;

pub use ext::OnceIteratorExt;
pub use pipe::{compose, Pipe};
