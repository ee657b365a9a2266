//! Pass-through instrumentation for a point in a chain.
//!
//! `traced` never changes, reorders or buffers elements. It counts pulls and,
//! with the `tracing` feature, emits one trace event per element (up to
//! `TraceConfig::max_events`) and one debug event when the source runs out.

use std::iter::FusedIterator;

use onceseq_core::config::TraceConfig;

use crate::DONE_HINT;

#[derive(Debug, Clone)]
pub struct Traced<I> {
    iter: I,
    config: TraceConfig,
    pulled: usize,
    done: bool,
}

pub fn traced<I: IntoIterator>(iter: I, config: &TraceConfig) -> Traced<I::IntoIter> {
    Traced {
        iter: iter.into_iter(),
        config: config.clone(),
        pulled: 0,
        done: false,
    }
}

impl<I> Traced<I> {
    /// Elements handed downstream so far.
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<I: Iterator> Iterator for Traced<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(element) => {
                #[cfg(feature = "tracing")]
                if self.config.should_emit(self.pulled) {
                    tracing::trace!(label = %self.config.label, index = self.pulled, "pulled");
                }
                self.pulled += 1;
                Some(element)
            }
            None => {
                self.done = true;
                #[cfg(feature = "tracing")]
                if self.config.enabled {
                    tracing::debug!(label = %self.config.label, total = self.pulled, "exhausted");
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            DONE_HINT
        } else {
            self.iter.size_hint()
        }
    }
}

impl<I: Iterator> FusedIterator for Traced<I> {}
