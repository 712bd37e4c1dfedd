//! Preload and retain window planning.
//!
//! Every `get()` that gets past the fast path derives two half-open index
//! ranges from the current index, the previously observed index, the window
//! sizes and the length of the backing sequence:
//!
//! ```text
//!   Forward travel (i > prev), preload 2 ahead / 1 behind, retain 1 / 1:
//!
//!   index:     3     4     5     6     7     8     9
//!                    ├─────┼─────┼─────┼─────┤           preload [i-1, i+2]
//!                    ├─────┼─────┼─────┤                 retain  [i-1, i+1]
//!                          ▲
//!                          i
//!
//!   Backward travel (i <= prev): the "ahead" size now extends below i.
//!
//!   index:     3     4     5     6     7
//!        ├─────┼─────┼─────┼─────┤                        preload [i-2, i+1]
//!              ├─────┼─────┼─────┤                        retain  [i-1, i+1]
//!                          ▲
//!                          i
//! ```
//!
//! The retain window is always `[i - retain_backward, i + retain_forward]`
//! regardless of direction; only the preload window flips. On the first call
//! (no previous index) both windows are symmetric, using the smaller of the
//! forward/backward sizes.
//!
//! Inclusive bounds are converted to end-exclusive ranges and clamped to
//! `[0, len)`.

use std::fmt;
use std::ops::Range;

use crate::config::NavigationConfig;

/// Direction of travel relative to the previously observed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No previous index (first call, or after a reset).
    Initial,
    /// Current index is greater than the previous one.
    Forward,
    /// Current index is less than or equal to the previous one.
    Backward,
}

impl Direction {
    /// Classifies a move from `previous` to `current`.
    #[inline]
    pub fn of(previous: Option<usize>, current: usize) -> Self {
        match previous {
            None => Direction::Initial,
            Some(prev) if current > prev => Direction::Forward,
            Some(_) => Direction::Backward,
        }
    }
}

/// Half-open index range `[lower, upper)`, clamped to a sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Window {
    lower: usize,
    upper: usize,
}

impl Window {
    /// Builds the window covering `behind` indices below `center` and `ahead`
    /// indices above it (both inclusive), clamped to `[0, len)`.
    ///
    /// ```
    /// use navcache::window::Window;
    ///
    /// let w = Window::around(1, 3, 2, 10);
    /// assert_eq!(w.range(), 0..4);
    ///
    /// let w = Window::around(9, 1, 5, 10);
    /// assert_eq!(w.range(), 8..10);
    /// ```
    pub fn around(center: usize, behind: usize, ahead: usize, len: usize) -> Self {
        let lower = center.saturating_sub(behind);
        let upper = center.saturating_add(ahead).saturating_add(1).min(len);
        Self {
            lower: lower.min(upper),
            upper,
        }
    }

    /// Lowest index in the window.
    #[inline]
    pub fn lower(&self) -> usize {
        self.lower
    }

    /// One past the highest index in the window.
    #[inline]
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Returns `true` if `index` lies inside the window.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.lower && index < self.upper
    }

    /// Number of indices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.upper - self.lower
    }

    /// Returns `true` if the window covers no index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    /// Returns the window as a `Range`.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.lower..self.upper
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lower, self.upper)
    }
}

impl IntoIterator for Window {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Range<usize> {
        self.range()
    }
}

/// Preload and retain windows for one `get()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlan {
    /// Direction of travel from the previous index.
    pub direction: Direction,
    /// Indices the deferred pass will try to load.
    pub preload: Window,
    /// Indices kept on eviction. Never wider than `preload`.
    pub retain: Window,
}

impl WindowPlan {
    /// Plans the windows for a move from `previous` to `current` over a
    /// sequence of `len` items.
    ///
    /// ```
    /// use navcache::config::NavigationConfig;
    /// use navcache::window::{Direction, WindowPlan};
    ///
    /// let config = NavigationConfig::new().preload_forward(3).preload_backward(1);
    ///
    /// // First call: symmetric, sized by the smaller preload.
    /// let first = WindowPlan::compute(&config, None, 5, 10);
    /// assert_eq!(first.direction, Direction::Initial);
    /// assert_eq!(first.preload.range(), 4..7);
    ///
    /// // Moving forward looks further ahead.
    /// let fwd = WindowPlan::compute(&config, Some(4), 5, 10);
    /// assert_eq!(fwd.preload.range(), 4..9);
    ///
    /// // Moving backward looks further behind.
    /// let back = WindowPlan::compute(&config, Some(6), 5, 10);
    /// assert_eq!(back.preload.range(), 2..7);
    /// ```
    pub fn compute(
        config: &NavigationConfig,
        previous: Option<usize>,
        current: usize,
        len: usize,
    ) -> Self {
        let direction = Direction::of(previous, current);
        let (preload_behind, preload_ahead, retain_behind, retain_ahead) = match direction {
            Direction::Initial => {
                let preload = config.min_preload();
                let retain = config.min_retain();
                (preload, preload, retain, retain)
            },
            Direction::Forward => (
                config.preload_backward_size(),
                config.preload_forward_size(),
                config.retain_backward_size(),
                config.retain_forward_size(),
            ),
            Direction::Backward => (
                config.preload_forward_size(),
                config.preload_backward_size(),
                config.retain_backward_size(),
                config.retain_forward_size(),
            ),
        };

        Self {
            direction,
            preload: Window::around(current, preload_behind, preload_ahead, len),
            retain: Window::around(current, retain_behind, retain_ahead, len),
        }
    }
}
