use crate::metrics::metrics_impl::NavigationMetrics;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavigationMetricsSnapshot {
    pub get_calls: u64,
    pub null_index_calls: u64,
    pub fast_path_hits: u64,
    pub cached_hits: u64, // planned get() that found the entry already loaded
    pub out_of_range_calls: u64,

    pub current_loads: u64,
    pub current_load_misses: u64, // load returned nothing for the current index

    pub evicted_entries: u64,

    pub preload_passes_scheduled: u64,
    pub preload_passes_run: u64,
    pub preload_loads: u64,
    pub preload_skips: u64,

    pub resets: u64,

    // gauges captured at snapshot time
    pub cached_entries: usize,
    pub pending_preloads: usize,
}

impl NavigationMetricsSnapshot {
    /// Builds a snapshot from live counters plus the current gauges.
    pub fn capture(
        metrics: &NavigationMetrics,
        cached_entries: usize,
        pending_preloads: usize,
    ) -> Self {
        Self {
            get_calls: metrics.get_calls,
            null_index_calls: metrics.null_index_calls,
            fast_path_hits: metrics.fast_path_hits,
            cached_hits: metrics.cached_hits,
            out_of_range_calls: metrics.out_of_range_calls,
            current_loads: metrics.current_loads,
            current_load_misses: metrics.current_load_misses,
            evicted_entries: metrics.evicted_entries,
            preload_passes_scheduled: metrics.preload_passes_scheduled,
            preload_passes_run: metrics.preload_passes_run,
            preload_loads: metrics.preload_loads,
            preload_skips: metrics.preload_skips,
            resets: metrics.resets,
            cached_entries,
            pending_preloads,
        }
    }

    /// Share of in-range `get()` calls served from an existing entry.
    ///
    /// Calls that failed before reaching the current index count as misses.
    pub fn hit_ratio(&self) -> f64 {
        let served = self
            .get_calls
            .saturating_sub(self.null_index_calls)
            .saturating_sub(self.out_of_range_calls);
        if served == 0 {
            return 0.0;
        }
        let hits = self.fast_path_hits + self.cached_hits;
        hits as f64 / served as f64
    }
}
