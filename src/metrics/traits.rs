//! # Metrics Traits
//!
//! Recorders only write counters, providers only read/snapshot, exporters
//! only publish. The cache owns a recorder and exposes a provider; hosts plug
//! in an exporter.

/// Counters for the navigation cache.
pub trait NavigationMetricsRecorder {
    fn record_null_index(&mut self);
    fn record_fast_path_hit(&mut self);
    fn record_cached_hit(&mut self);
    fn record_out_of_range(&mut self);
    fn record_current_load(&mut self);
    fn record_current_load_miss(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_preload_scheduled(&mut self);
    fn record_preload_pass(&mut self);
    fn record_preload_load(&mut self);
    fn record_preload_skip(&mut self);
    fn record_reset(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
