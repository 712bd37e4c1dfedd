pub use crate::config::NavigationConfig;
pub use crate::ds::{PreloadPass, PreloadQueue};
pub use crate::error::{InvariantError, NavigationError};
pub use crate::navigation::NavigationCache;
pub use crate::traits::{
    Cursor, FnLoader, IndexSource, ItemSource, Loader, NoUnload, TryFnLoader, loader_fn,
    try_loader_fn,
};
pub use crate::window::{Direction, Window, WindowPlan};

#[cfg(feature = "metrics")]
pub use crate::metrics::{
    MetricsExporter, MetricsSnapshotProvider, NavigationMetricsSnapshot, PrometheusTextExporter,
};
