use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::NavigationMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for navigation cache snapshots.
///
/// Writes in the Prometheus text exposition format so the output can be
/// scraped directly or forwarded to a collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<NavigationMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &NavigationMetricsSnapshot) {
        let counters = [
            ("get_calls_total", snapshot.get_calls),
            ("null_index_calls_total", snapshot.null_index_calls),
            ("fast_path_hits_total", snapshot.fast_path_hits),
            ("cached_hits_total", snapshot.cached_hits),
            ("out_of_range_calls_total", snapshot.out_of_range_calls),
            ("current_loads_total", snapshot.current_loads),
            ("current_load_misses_total", snapshot.current_load_misses),
            ("evicted_entries_total", snapshot.evicted_entries),
            (
                "preload_passes_scheduled_total",
                snapshot.preload_passes_scheduled,
            ),
            ("preload_passes_run_total", snapshot.preload_passes_run),
            ("preload_loads_total", snapshot.preload_loads),
            ("preload_skips_total", snapshot.preload_skips),
            ("resets_total", snapshot.resets),
        ];
        for (suffix, value) in counters {
            self.write_metric("counter", suffix, value);
        }

        self.write_metric("gauge", "cached_entries", snapshot.cached_entries as u64);
        self.write_metric(
            "gauge",
            "pending_preloads",
            snapshot.pending_preloads as u64,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("gallery", Vec::new());
        let snapshot = NavigationMetricsSnapshot {
            get_calls: 12,
            evicted_entries: 3,
            cached_entries: 4,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE gallery_get_calls_total counter\ngallery_get_calls_total 12\n"));
        assert!(text.contains("gallery_evicted_entries_total 3\n"));
        assert!(text.contains("# TYPE gallery_cached_entries gauge\ngallery_cached_entries 4\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&NavigationMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("\nresets_total 0\n"));
        assert!(!text.contains("_resets_total"));
    }
}
