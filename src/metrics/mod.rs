//! Navigation cache metrics (enabled with the `metrics` feature).
//!
//! Recording, snapshotting and exporting are separate concerns:
//!
//! ```text
//!   NavigationCache ──record_*──► NavigationMetrics
//!                                       │
//!                     metrics_snapshot()│
//!                                       ▼
//!                          NavigationMetricsSnapshot ──export──► PrometheusTextExporter
//! ```

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::NavigationMetrics;
pub use snapshot::NavigationMetricsSnapshot;
pub use traits::{
    MetricsExporter, MetricsReset, MetricsSnapshotProvider, NavigationMetricsRecorder,
};
