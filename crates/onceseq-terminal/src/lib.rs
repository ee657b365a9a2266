#![forbid(unsafe_code)]
//! onceseq-terminal: consumers that drain a pull iterator into a value.
//!
//! Two result channels, used consistently:
//! - `Option` when the input may simply not contain an answer (`first` of an
//!   empty sequence, `index` past the end, `average` of nothing, ...).
//! - `onceseq_core::Result` only for contract violations: `fold1` of an
//!   empty sequence and `index` with a malformed argument.
//!
//! Consumers that can decide early (`first`, `find`, `any`, `equal`, ...)
//! stop pulling as soon as the answer is known.

pub mod access;
pub mod collect;
pub mod compare;
pub mod extremum;
pub mod fold;
pub mod group;
pub mod numeric;
pub mod search;

pub use access::{empty, first, index, last, not_empty, only, IndexArg};
pub use collect::{none_null, to_array, to_set};
pub use compare::{equal, equal_by, not_equal, not_equal_by, prefix_match, prefix_match_by};
pub use extremum::{maximum, maximum_by, maximum_with, minimum, minimum_by, minimum_with};
pub use fold::{fold, fold1};
pub use group::{key_by, key_first_by, key_last_by, map_key_by};
pub use numeric::{and, average, or, product, sum};
pub use search::{all, any, contains, find, find_index, index_of};
