use crate::metrics::traits::{MetricsReset, NavigationMetricsRecorder};

/// In-place counters updated by the cache on every operation.
///
/// `get_calls` counts every `get()`; the remaining `get`-side counters
/// classify how each call ended.
#[derive(Debug, Default, Clone)]
pub struct NavigationMetrics {
    pub get_calls: u64,
    pub null_index_calls: u64,
    pub fast_path_hits: u64,
    pub cached_hits: u64,
    pub out_of_range_calls: u64,
    pub current_loads: u64,
    pub current_load_misses: u64,
    pub evicted_entries: u64,
    pub preload_passes_scheduled: u64,
    pub preload_passes_run: u64,
    pub preload_loads: u64,
    pub preload_skips: u64,
    pub resets: u64,
}

impl NavigationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_get_call(&mut self) {
        self.get_calls += 1;
    }
}

impl NavigationMetricsRecorder for NavigationMetrics {
    fn record_null_index(&mut self) {
        self.null_index_calls += 1;
    }
    fn record_fast_path_hit(&mut self) {
        self.fast_path_hits += 1;
    }
    fn record_cached_hit(&mut self) {
        self.cached_hits += 1;
    }
    fn record_out_of_range(&mut self) {
        self.out_of_range_calls += 1;
    }
    fn record_current_load(&mut self) {
        self.current_loads += 1;
    }
    fn record_current_load_miss(&mut self) {
        self.current_load_misses += 1;
    }
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }
    fn record_preload_scheduled(&mut self) {
        self.preload_passes_scheduled += 1;
    }
    fn record_preload_pass(&mut self) {
        self.preload_passes_run += 1;
    }
    fn record_preload_load(&mut self) {
        self.preload_loads += 1;
    }
    // Loader declined an index of the pass. Indices past the end are not counted.
    fn record_preload_skip(&mut self) {
        self.preload_skips += 1;
    }
    fn record_reset(&mut self) {
        self.resets += 1;
    }
}

impl MetricsReset for NavigationMetrics {
    fn reset_metrics(&mut self) {
        *self = Self::default();
    }
}
