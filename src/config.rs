//! Window size configuration.
//!
//! | Field              | Default            | Clamp                         |
//! |--------------------|--------------------|-------------------------------|
//! | `preload_forward`  | 1                  | -                             |
//! | `preload_backward` | 1                  | -                             |
//! | `retain_forward`   | `preload_forward`  | `<= preload_forward`          |
//! | `retain_backward`  | `preload_backward` | `<= preload_backward`         |
//!
//! Values are never rejected. A retain size larger than its preload size is
//! clamped down when read, so the cache can never retain further than it
//! preloads.
//!
//! ```
//! use navcache::config::NavigationConfig;
//!
//! let config = NavigationConfig::new()
//!     .preload_forward(2)
//!     .retain_forward(5)
//!     .retain_backward(0);
//!
//! assert_eq!(config.preload_forward_size(), 2);
//! assert_eq!(config.retain_forward_size(), 2);
//! assert_eq!(config.preload_backward_size(), 1);
//! assert_eq!(config.retain_backward_size(), 0);
//! ```

/// Default number of items preloaded in each direction.
pub const DEFAULT_PRELOAD: usize = 1;

/// Preload and retain window sizes for a
/// [`NavigationCache`](crate::navigation::NavigationCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationConfig {
    preload_forward: usize,
    preload_backward: usize,
    retain_forward: Option<usize>,
    retain_backward: Option<usize>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            preload_forward: DEFAULT_PRELOAD,
            preload_backward: DEFAULT_PRELOAD,
            retain_forward: None,
            retain_backward: None,
        }
    }
}

impl NavigationConfig {
    /// Creates a configuration with the default sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many items ahead of the direction of travel are preloaded.
    #[must_use]
    pub fn preload_forward(mut self, size: usize) -> Self {
        self.preload_forward = size;
        self
    }

    /// Sets how many items behind the direction of travel are preloaded.
    #[must_use]
    pub fn preload_backward(mut self, size: usize) -> Self {
        self.preload_backward = size;
        self
    }

    /// Sets how many items above the current index are retained.
    #[must_use]
    pub fn retain_forward(mut self, size: usize) -> Self {
        self.retain_forward = Some(size);
        self
    }

    /// Sets how many items below the current index are retained.
    #[must_use]
    pub fn retain_backward(mut self, size: usize) -> Self {
        self.retain_backward = Some(size);
        self
    }

    /// Sets both preload sizes.
    #[must_use]
    pub fn preload(self, size: usize) -> Self {
        self.preload_forward(size).preload_backward(size)
    }

    /// Sets both retain sizes.
    #[must_use]
    pub fn retain(self, size: usize) -> Self {
        self.retain_forward(size).retain_backward(size)
    }

    #[inline]
    pub fn preload_forward_size(&self) -> usize {
        self.preload_forward
    }

    #[inline]
    pub fn preload_backward_size(&self) -> usize {
        self.preload_backward
    }

    /// Effective forward retain size, clamped to the forward preload size.
    #[inline]
    pub fn retain_forward_size(&self) -> usize {
        self.retain_forward
            .unwrap_or(self.preload_forward)
            .min(self.preload_forward)
    }

    /// Effective backward retain size, clamped to the backward preload size.
    #[inline]
    pub fn retain_backward_size(&self) -> usize {
        self.retain_backward
            .unwrap_or(self.preload_backward)
            .min(self.preload_backward)
    }

    /// Symmetric preload size used before a direction of travel is known.
    #[inline]
    pub fn min_preload(&self) -> usize {
        self.preload_forward.min(self.preload_backward)
    }

    /// Symmetric retain size used before a direction of travel is known.
    #[inline]
    pub fn min_retain(&self) -> usize {
        self.retain_forward_size().min(self.retain_backward_size())
    }
}
