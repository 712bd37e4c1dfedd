//! FIFO queue of deferred preload passes.
//!
//! Stands in for a host microtask queue: every `get()` that computes a window
//! enqueues one pass, and the host drains the queue after the current
//! callback returns and before it handles the next external event.
//!
//! ## Architecture
//!
//! ```text
//!   get(5) ──push──►┌──────────┬──────────┬──────────┐──pop──► run pass
//!   get(6) ──push──►│ pass@5   │ pass@6   │ pass@7   │          (oldest first)
//!   get(7) ──push──►└──────────┴──────────┴──────────┘
//! ```
//!
//! ## Behavior
//! - Passes run strictly in scheduling order.
//! - A pass holds only its window, not the items; the items are read when the
//!   pass runs.
//! - Nothing here cancels a pass implicitly. Resetting the owning cache leaves
//!   queued passes in place.
use std::collections::VecDeque;

use crate::window::Window;

/// One deferred preload pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadPass {
    /// Index whose `get()` scheduled this pass.
    pub origin: usize,
    /// Indices the pass will try to load.
    pub window: Window,
}

/// FIFO queue of [`PreloadPass`]es.
#[derive(Debug, Default)]
pub struct PreloadQueue {
    passes: VecDeque<PreloadPass>,
}

impl PreloadQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of queued passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Returns `true` if no pass is queued.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Enqueues a pass behind every pass already queued.
    pub fn push(&mut self, pass: PreloadPass) {
        self.passes.push_back(pass);
    }

    /// Removes and returns the oldest queued pass.
    pub fn pop(&mut self) -> Option<PreloadPass> {
        self.passes.pop_front()
    }

    /// Returns the oldest queued pass without removing it.
    pub fn peek(&self) -> Option<&PreloadPass> {
        self.passes.front()
    }

    /// Drops every queued pass, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.passes.len();
        self.passes.clear();
        dropped
    }

    /// Iterates queued passes, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PreloadPass> {
        self.passes.iter()
    }
}
