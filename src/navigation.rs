//! Windowed navigation cache.
//!
//! Keeps loaded representations of the items around a moving "current" index:
//! the current item is loaded synchronously on demand, its neighbours are
//! preloaded by a deferred pass, and anything that drifts out of the retain
//! window is unloaded.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────────┐
//! │                    NavigationCache<S, I, L> Layout                        │
//! │                                                                           │
//! │   source: S (ItemSource)      index: I (IndexSource)     loader: L        │
//! │                                                                           │
//! │   entries: FxHashMap<usize, L::Output>     (sparse: index -> loaded)      │
//! │                                                                           │
//! │        0     1     2     3     4     5     6     7     8     9            │
//! │       ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐                           │
//! │       │   │   │   │   │ ● │ ● │ ● │ ○ │   │   │   ● retained  ○ preloaded│
//! │       └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘                           │
//! │                             ▲                                             │
//! │                        previous (last observed index)                     │
//! │                                                                           │
//! │   pending: PreloadQueue   (FIFO of deferred preload passes)               │
//! └───────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithm
//!
//! ```text
//! GET():
//!   1. i = index.current_index(); None -> return None
//!   2. i == previous and entries[i] present -> return it (fast path)
//!   3. i >= source.len() -> return None (nothing touched)
//!   4. plan preload/retain windows from (previous, i, len)
//!   5. evict (unload) every entry outside the retain window
//!   6. entries[i] missing -> load(source[i], i), store if Some
//!   7. enqueue a preload pass over the preload window
//!   8. previous = i; return entries[i]
//!
//! RUN_PRELOADS():
//!   for each queued pass, oldest first:
//!     for j in pass.window: entries[j] missing and j < len -> load, store if Some
//!
//! RESET():
//!   entries.clear() (no unload), previous = None
//! ```
//!
//! ## Deferred Preloading
//!
//! Preload passes are not run by `get()`. The host drains them with
//! [`run_preloads`](NavigationCache::run_preloads) once the current callback
//! has returned and before it processes the next external event, the same
//! place a browser would run microtasks. Passes are never cancelled
//! implicitly: a pass queued before [`reset`](NavigationCache::reset) still
//! runs afterwards and may repopulate entries. Hosts that need a hard stop
//! call [`cancel_preloads`](NavigationCache::cancel_preloads).
//!
//! ## Example Usage
//!
//! ```
//! use navcache::config::NavigationConfig;
//! use navcache::navigation::NavigationCache;
//! use navcache::traits::{loader_fn, Cursor};
//!
//! let photos = vec!["a.jpg", "b.jpg", "c.jpg", "d.jpg"];
//! let cursor = Cursor::at(0);
//! let mut cache = NavigationCache::with_config(
//!     photos,
//!     cursor.clone(),
//!     loader_fn(|name: &&str, _idx: usize| Some(format!("/preview/{name}"))),
//!     NavigationConfig::new().preload_forward(2),
//! );
//!
//! assert_eq!(cache.current().map(String::as_str), Some("/preview/a.jpg"));
//! cache.flush();
//! assert!(cache.contains(1));
//!
//! cursor.advance();
//! assert_eq!(cache.current().map(String::as_str), Some("/preview/b.jpg"));
//! ```

use std::convert::Infallible;
use std::fmt;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::config::NavigationConfig;
use crate::ds::{PreloadPass, PreloadQueue};
use crate::error::{InvariantError, NavigationError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::NavigationMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::NavigationMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider, NavigationMetricsRecorder};
use crate::traits::{IndexSource, ItemSource, Loader};
use crate::window::{Window, WindowPlan};

type NavResult<T, E> = Result<T, NavigationError<E>>;

/// Preload/retain cache keyed by a moving index.
///
/// # Type Parameters
///
/// - `S`: backing sequence, read fresh on every call
/// - `I`: source of the current index
/// - `L`: loader producing the cached representation
pub struct NavigationCache<S, I, L>
where
    S: ItemSource,
    L: Loader<S::Item>,
{
    source: S,
    index: I,
    loader: L,
    config: NavigationConfig,
    entries: FxHashMap<usize, L::Output>,
    previous: Option<usize>,
    last_plan: Option<WindowPlan>,
    pending: PreloadQueue,
    #[cfg(feature = "metrics")]
    metrics: NavigationMetrics,
}

impl<S, I, L> NavigationCache<S, I, L>
where
    S: ItemSource,
    I: IndexSource,
    L: Loader<S::Item>,
{
    /// Creates a cache with the default window sizes (preload 1 each way).
    pub fn new(source: S, index: I, loader: L) -> Self {
        Self::with_config(source, index, loader, NavigationConfig::default())
    }

    /// Creates a cache with explicit window sizes.
    pub fn with_config(source: S, index: I, loader: L, config: NavigationConfig) -> Self {
        Self {
            source,
            index,
            loader,
            config,
            entries: FxHashMap::default(),
            previous: None,
            last_plan: None,
            pending: PreloadQueue::new(),
            #[cfg(feature = "metrics")]
            metrics: NavigationMetrics::default(),
        }
    }

    /// Returns the loaded representation for the current index.
    ///
    /// Loads the current item synchronously on a miss, unloads entries that
    /// fell out of the retain window and queues a preload pass for the
    /// neighbours (see [`run_preloads`](Self::run_preloads)).
    ///
    /// Returns `Ok(None)` when there is no current index, when it is out of
    /// range, or when the loader declined to produce a value.
    ///
    /// # Errors
    ///
    /// Forwards the first loader failure. Evictions that already happened
    /// stay done; the previous index is not updated and no preload pass is
    /// queued.
    pub fn get(&mut self) -> NavResult<Option<&L::Output>, L::Error> {
        #[cfg(feature = "metrics")]
        self.metrics.record_get_call();

        let Some(index) = self.index.current_index() else {
            trace!("navcache: no current index");
            #[cfg(feature = "metrics")]
            self.metrics.record_null_index();
            return Ok(None);
        };

        if self.previous == Some(index) && self.entries.contains_key(&index) {
            trace!("navcache: fast path at {index}");
            #[cfg(feature = "metrics")]
            self.metrics.record_fast_path_hit();
            return Ok(self.entries.get(&index));
        }

        let len = self.source.len();
        if index >= len {
            trace!("navcache: index {index} out of range (len {len})");
            #[cfg(feature = "metrics")]
            self.metrics.record_out_of_range();
            return Ok(None);
        }

        let plan = WindowPlan::compute(&self.config, self.previous, index, len);
        trace!(
            "navcache: {:?} -> {index} ({:?}), preload {}, retain {}",
            self.previous, plan.direction, plan.preload, plan.retain
        );

        self.evict_outside(plan.retain)?;

        if self.entries.contains_key(&index) {
            #[cfg(feature = "metrics")]
            self.metrics.record_cached_hit();
        } else {
            self.load_current(index)?;
        }

        self.pending.push(PreloadPass {
            origin: index,
            window: plan.preload,
        });
        #[cfg(feature = "metrics")]
        self.metrics.record_preload_scheduled();

        self.previous = Some(index);
        self.last_plan = Some(plan);
        Ok(self.entries.get(&index))
    }

    /// Drops every entry and forgets the previous index.
    ///
    /// Does not call `unload`; use [`take_entries`](Self::take_entries) to
    /// release resources yourself. Queued preload passes are kept.
    pub fn reset(&mut self) {
        debug!(
            "navcache: reset, dropping {} entries without unload",
            self.entries.len()
        );
        self.entries.clear();
        self.forget_position();
    }

    /// Resets the cache and hands the dropped entries to the caller,
    /// ordered by index.
    pub fn take_entries(&mut self) -> Vec<(usize, L::Output)> {
        let mut taken: Vec<(usize, L::Output)> = self.entries.drain().collect();
        taken.sort_unstable_by_key(|(index, _)| *index);
        debug!("navcache: reset, handing back {} entries", taken.len());
        self.forget_position();
        taken
    }

    fn forget_position(&mut self) {
        self.previous = None;
        self.last_plan = None;
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();
    }

    /// Runs every queued preload pass, oldest first.
    ///
    /// Returns the number of entries loaded.
    ///
    /// # Errors
    ///
    /// Stops at the first loader failure. The failing pass is consumed; passes
    /// queued behind it stay queued.
    pub fn run_preloads(&mut self) -> NavResult<usize, L::Error> {
        let mut loaded = 0;
        while let Some(pass) = self.pending.pop() {
            loaded += self.run_pass(pass)?;
        }
        Ok(loaded)
    }

    /// Runs the oldest queued preload pass, returning how many entries it
    /// loaded, or `None` if nothing was queued.
    pub fn run_next_preload(&mut self) -> NavResult<Option<usize>, L::Error> {
        match self.pending.pop() {
            Some(pass) => self.run_pass(pass).map(Some),
            None => Ok(None),
        }
    }

    /// Drops queued preload passes without running them.
    pub fn cancel_preloads(&mut self) -> usize {
        let dropped = self.pending.clear();
        if dropped > 0 {
            debug!("navcache: cancelled {dropped} preload passes");
        }
        dropped
    }

    /// Number of preload passes waiting to run.
    #[inline]
    pub fn pending_preloads(&self) -> usize {
        self.pending.len()
    }

    /// Returns the entry at `index` without loading, evicting or scheduling.
    #[inline]
    pub fn peek(&self, index: usize) -> Option<&L::Output> {
        self.entries.get(&index)
    }

    /// Returns `true` if `index` is cached.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of cached entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached indices in ascending order.
    pub fn cached_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.entries.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Index observed by the last `get()` that got past the range check.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.previous
    }

    /// Windows computed by the last `get()` that got past the range check.
    #[inline]
    pub fn last_plan(&self) -> Option<&WindowPlan> {
        self.last_plan.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the backing sequence. Only appending keeps cached
    /// entries valid; call [`reset`](Self::reset) after any other change.
    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    #[inline]
    pub fn index_source(&self) -> &I {
        &self.index
    }

    #[inline]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    #[inline]
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    /// Verifies that every cached entry lies in the retain window of the last
    /// planned `get()`.
    ///
    /// Holds right after such a `get()`. Preload passes fill the wider
    /// preload window, so run this before draining them.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        match (self.previous, self.last_plan.as_ref()) {
            (None, None) => Ok(()),
            (Some(previous), Some(plan)) => {
                if !plan.retain.contains(previous) {
                    return Err(InvariantError::new(format!(
                        "previous index {previous} outside retain window {}",
                        plan.retain
                    )));
                }
                match self.cached_indices().into_iter().find(|i| !plan.retain.contains(*i)) {
                    Some(stray) => Err(InvariantError::new(format!(
                        "entry {stray} outside retain window {}",
                        plan.retain
                    ))),
                    None => Ok(()),
                }
            },
            _ => Err(InvariantError::new(
                "previous index and window plan out of sync",
            )),
        }
    }

    fn evict_outside(&mut self, retain: Window) -> NavResult<(), L::Error> {
        let mut stale: Vec<usize> = self
            .entries
            .keys()
            .copied()
            .filter(|index| !retain.contains(*index))
            .collect();
        if stale.is_empty() {
            return Ok(());
        }
        stale.sort_unstable();
        debug!("navcache: evicting {stale:?} outside {retain}");

        for index in stale {
            if let Some(value) = self.entries.remove(&index) {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
                self.loader
                    .unload(value, index)
                    .map_err(|source| NavigationError::Unload { index, source })?;
            }
        }
        Ok(())
    }

    fn load_current(&mut self, index: usize) -> NavResult<(), L::Error> {
        let Some(item) = self.source.item_at(index) else {
            return Ok(());
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_current_load();

        match self
            .loader
            .load(&item, index)
            .map_err(|source| NavigationError::Load { index, source })?
        {
            Some(value) => {
                self.entries.insert(index, value);
            },
            None => {
                trace!("navcache: loader declined {index}");
                #[cfg(feature = "metrics")]
                self.metrics.record_current_load_miss();
            },
        }
        Ok(())
    }

    fn run_pass(&mut self, pass: PreloadPass) -> NavResult<usize, L::Error> {
        #[cfg(feature = "metrics")]
        self.metrics.record_preload_pass();

        let len = self.source.len();
        let mut loaded = 0;
        for index in pass.window {
            if index >= len {
                break;
            }
            if self.entries.contains_key(&index) {
                continue;
            }
            let Some(item) = self.source.item_at(index) else {
                continue;
            };
            match self
                .loader
                .load(&item, index)
                .map_err(|source| NavigationError::Load { index, source })?
            {
                Some(value) => {
                    self.entries.insert(index, value);
                    loaded += 1;
                    #[cfg(feature = "metrics")]
                    self.metrics.record_preload_load();
                },
                None => {
                    #[cfg(feature = "metrics")]
                    self.metrics.record_preload_skip();
                },
            }
        }
        debug!(
            "navcache: preload pass from {} over {} loaded {loaded}",
            pass.origin, pass.window
        );
        Ok(loaded)
    }
}

impl<S, I, L> NavigationCache<S, I, L>
where
    S: ItemSource,
    I: IndexSource,
    L: Loader<S::Item, Error = Infallible>,
{
    /// [`get`](Self::get) for loaders that cannot fail.
    pub fn current(&mut self) -> Option<&L::Output> {
        match self.get() {
            Ok(value) => value,
            Err(err) => match err.into_source() {},
        }
    }

    /// [`run_preloads`](Self::run_preloads) for loaders that cannot fail.
    pub fn flush(&mut self) -> usize {
        match self.run_preloads() {
            Ok(loaded) => loaded,
            Err(err) => match err.into_source() {},
        }
    }
}

#[cfg(feature = "metrics")]
impl<S, I, L> NavigationCache<S, I, L>
where
    S: ItemSource,
    L: Loader<S::Item>,
{
    pub fn metrics_snapshot(&self) -> NavigationMetricsSnapshot {
        NavigationMetricsSnapshot::capture(&self.metrics, self.entries.len(), self.pending.len())
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

#[cfg(feature = "metrics")]
impl<S, I, L> MetricsSnapshotProvider<NavigationMetricsSnapshot> for NavigationCache<S, I, L>
where
    S: ItemSource,
    L: Loader<S::Item>,
{
    fn snapshot(&self) -> NavigationMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<S, I, L> fmt::Debug for NavigationCache<S, I, L>
where
    S: ItemSource,
    L: Loader<S::Item>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut indices: Vec<&usize> = self.entries.keys().collect();
        indices.sort_unstable();
        f.debug_struct("NavigationCache")
            .field("config", &self.config)
            .field("len", &self.source.len())
            .field("previous", &self.previous)
            .field("cached", &indices)
            .field("pending_preloads", &self.pending.len())
            .finish()
    }
}
