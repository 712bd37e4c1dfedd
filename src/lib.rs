//! navcache: windowed preload/retain cache for index-driven navigation.
//!
//! A [`NavigationCache`] keeps the loaded representation of the item under a
//! moving cursor, preloads its neighbours in the direction of travel and
//! unloads whatever falls out of the retain window. See
//! [`navigation`] for the algorithm and [`window`] for how the windows are
//! sized.

pub mod config;
pub mod ds;
pub mod error;
pub mod navigation;
pub mod prelude;
pub mod traits;
pub mod window;

#[cfg(feature = "metrics")]
pub mod metrics;

pub use crate::config::NavigationConfig;
pub use crate::error::{InvariantError, NavigationError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::NavigationMetricsSnapshot;
pub use crate::navigation::NavigationCache;
pub use crate::traits::{Cursor, IndexSource, ItemSource, Loader, loader_fn, try_loader_fn};
pub use crate::window::{Direction, Window, WindowPlan};
