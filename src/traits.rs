//! # Navigation Cache Seams
//!
//! This module defines the three collaborator traits a
//! [`NavigationCache`](crate::navigation::NavigationCache) is built from. The
//! cache itself is pure bookkeeping; everything it knows about the outside world
//! comes through these seams.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────┐   ┌──────────────────────────┐   ┌──────────────────────────────┐
//!   │     ItemSource           │   │     IndexSource          │   │       Loader<T>              │
//!   │                          │   │                          │   │                              │
//!   │  len() → usize           │   │  current_index()         │   │  load(&T, idx)               │
//!   │  item_at(idx) → Item     │   │     → Option<usize>      │   │     → Result<Option<Out>, E> │
//!   │                          │   │                          │   │  unload(Out, idx)            │
//!   │  backing sequence        │   │  "where the user is"     │   │     → Result<(), E>          │
//!   └────────────┬─────────────┘   └────────────┬─────────────┘   └──────────────┬───────────────┘
//!                │                              │                                │
//!                └──────────────────────────────┼────────────────────────────────┘
//!                                               ▼
//!                              NavigationCache<S, I, L>
//!                              get() / reset() / run_preloads()
//! ```
//!
//! ## Provided Implementations
//!
//! | Trait         | Implemented for                                                   |
//! |---------------|-------------------------------------------------------------------|
//! | `ItemSource`  | `[T]`, `Vec<T>`, `Rc<[T]>`, `Rc<RefCell<Vec<T>>>`, `&S`            |
//! | `IndexSource` | any `Fn() -> Option<usize>`, [`Cursor`]                           |
//! | `Loader<T>`   | [`FnLoader`] via [`loader_fn`], [`TryFnLoader`] via [`try_loader_fn`] |
//!
//! ## Stability Contract
//!
//! Sources are read fresh on every `get()`. Appending to an item source is
//! always safe. Reordering or removing items breaks the `index → item`
//! identity the cache relies on; call
//! [`reset`](crate::navigation::NavigationCache::reset) when that happens.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// ItemSource
// ---------------------------------------------------------------------------

/// Ordered, index-addressable backing sequence.
///
/// `item_at` hands out an owned item so that sources living behind interior
/// mutability (`Rc<RefCell<Vec<T>>>`) can be read without holding a borrow
/// across the loader call. Items are expected to be cheap handles.
///
/// # Example
///
/// ```
/// use navcache::traits::ItemSource;
///
/// let photos = vec!["a.jpg", "b.jpg"];
/// assert_eq!(photos.len(), 2);
/// assert_eq!(ItemSource::item_at(&photos, 1), Some("b.jpg"));
/// assert_eq!(ItemSource::item_at(&photos, 2), None);
/// ```
pub trait ItemSource {
    /// Item type handed to the loader.
    type Item;

    /// Returns the current length of the sequence.
    fn len(&self) -> usize;

    /// Returns the item at `index`, or `None` if out of range.
    fn item_at(&self, index: usize) -> Option<Self::Item>;

    /// Returns `true` if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> ItemSource for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> ItemSource for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> ItemSource for Rc<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

/// Shared sequence that may grow while the cache holds it.
impl<T: Clone> ItemSource for Rc<RefCell<Vec<T>>> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.borrow().len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.borrow().get(index).cloned()
    }
}

impl<S: ItemSource + ?Sized> ItemSource for &S {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<S::Item> {
        (**self).item_at(index)
    }
}

// ---------------------------------------------------------------------------
// IndexSource
// ---------------------------------------------------------------------------

/// Reports the currently selected position, or `None` when nothing is selected.
pub trait IndexSource {
    fn current_index(&self) -> Option<usize>;
}

impl<F> IndexSource for F
where
    F: Fn() -> Option<usize>,
{
    #[inline]
    fn current_index(&self) -> Option<usize> {
        self()
    }
}

/// Shared, cloneable selection cursor.
///
/// Clones observe the same position, so a navigation controller can keep one
/// handle and give another to the cache.
///
/// ```
/// use navcache::traits::{Cursor, IndexSource};
///
/// let cursor = Cursor::new();
/// let seen_by_cache = cursor.clone();
/// assert_eq!(seen_by_cache.current_index(), None);
///
/// cursor.set(4);
/// cursor.advance();
/// assert_eq!(seen_by_cache.current_index(), Some(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cursor(Rc<Cell<Option<usize>>>);

impl Cursor {
    /// Creates a cursor with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cursor positioned at `index`.
    pub fn at(index: usize) -> Self {
        Self(Rc::new(Cell::new(Some(index))))
    }

    /// Returns the current position.
    #[inline]
    pub fn get(&self) -> Option<usize> {
        self.0.get()
    }

    /// Moves to `index`.
    #[inline]
    pub fn set(&self, index: usize) {
        self.0.set(Some(index));
    }

    /// Clears the selection.
    #[inline]
    pub fn clear(&self) {
        self.0.set(None);
    }

    /// Moves one position forward. No-op without a selection.
    pub fn advance(&self) {
        if let Some(index) = self.0.get() {
            self.0.set(Some(index.saturating_add(1)));
        }
    }

    /// Moves one position backward, stopping at 0. No-op without a selection.
    pub fn retreat(&self) {
        if let Some(index) = self.0.get() {
            self.0.set(Some(index.saturating_sub(1)));
        }
    }
}

impl IndexSource for Cursor {
    #[inline]
    fn current_index(&self) -> Option<usize> {
        self.get()
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Builds (and optionally tears down) the cached representation of an item.
///
/// `load` returning `Ok(None)` means "nothing to cache": the result is not
/// stored and the next request for that index calls `load` again.
///
/// `unload` receives ownership of an evicted entry exactly once, after the
/// entry has left the cache. It is not called by
/// [`reset`](crate::navigation::NavigationCache::reset).
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use navcache::traits::Loader;
///
/// struct Thumbnails;
///
/// impl Loader<String> for Thumbnails {
///     type Output = String;
///     type Error = Infallible;
///
///     fn load(&mut self, name: &String, _index: usize) -> Result<Option<String>, Infallible> {
///         Ok(Some(format!("/thumbnail/{name}")))
///     }
/// }
///
/// let mut loader = Thumbnails;
/// assert_eq!(
///     loader.load(&"cat.webp".to_string(), 0),
///     Ok(Some("/thumbnail/cat.webp".to_string()))
/// );
/// ```
pub trait Loader<T> {
    /// Loaded representation stored in the cache.
    type Output;
    /// Failure type reported through [`NavigationError`](crate::error::NavigationError).
    type Error;

    fn load(&mut self, item: &T, index: usize) -> Result<Option<Self::Output>, Self::Error>;

    fn unload(&mut self, value: Self::Output, index: usize) -> Result<(), Self::Error> {
        let _ = (value, index);
        Ok(())
    }
}

/// Placeholder unload hook that simply drops the evicted value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUnload;

/// Infallible unload callback.
pub trait UnloadHook<O> {
    fn unload(&mut self, value: O, index: usize);
}

impl<O> UnloadHook<O> for NoUnload {
    #[inline]
    fn unload(&mut self, _value: O, _index: usize) {}
}

impl<O, F> UnloadHook<O> for F
where
    F: FnMut(O, usize),
{
    #[inline]
    fn unload(&mut self, value: O, index: usize) {
        self(value, index)
    }
}

/// Fallible unload callback.
pub trait TryUnloadHook<O, E> {
    fn try_unload(&mut self, value: O, index: usize) -> Result<(), E>;
}

impl<O, E> TryUnloadHook<O, E> for NoUnload {
    #[inline]
    fn try_unload(&mut self, _value: O, _index: usize) -> Result<(), E> {
        Ok(())
    }
}

impl<O, E, F> TryUnloadHook<O, E> for F
where
    F: FnMut(O, usize) -> Result<(), E>,
{
    #[inline]
    fn try_unload(&mut self, value: O, index: usize) -> Result<(), E> {
        self(value, index)
    }
}

/// [`Loader`] built from infallible closures. See [`loader_fn`].
#[derive(Debug, Clone)]
pub struct FnLoader<L, U = NoUnload> {
    load: L,
    unload: U,
}

/// Wraps `load` as an infallible [`Loader`].
///
/// ```
/// use navcache::traits::{loader_fn, Loader};
///
/// let mut unloaded = Vec::new();
/// let mut loader = loader_fn(|n: &u32, _idx: usize| Some(n * 10))
///     .with_unload(|v: u32, idx: usize| unloaded.push((idx, v)));
///
/// assert_eq!(loader.load(&4, 0), Ok(Some(40)));
/// Loader::<u32>::unload(&mut loader, 40, 0).unwrap();
/// drop(loader);
/// assert_eq!(unloaded, vec![(0, 40)]);
/// ```
pub fn loader_fn<L>(load: L) -> FnLoader<L, NoUnload> {
    FnLoader {
        load,
        unload: NoUnload,
    }
}

impl<L> FnLoader<L, NoUnload> {
    /// Attaches an unload callback.
    pub fn with_unload<U>(self, unload: U) -> FnLoader<L, U> {
        FnLoader {
            load: self.load,
            unload,
        }
    }
}

impl<T, O, L, U> Loader<T> for FnLoader<L, U>
where
    L: FnMut(&T, usize) -> Option<O>,
    U: UnloadHook<O>,
{
    type Output = O;
    type Error = Infallible;

    #[inline]
    fn load(&mut self, item: &T, index: usize) -> Result<Option<O>, Infallible> {
        Ok((self.load)(item, index))
    }

    #[inline]
    fn unload(&mut self, value: O, index: usize) -> Result<(), Infallible> {
        self.unload.unload(value, index);
        Ok(())
    }
}

/// [`Loader`] built from fallible closures. See [`try_loader_fn`].
#[derive(Debug, Clone)]
pub struct TryFnLoader<L, U = NoUnload> {
    load: L,
    unload: U,
}

/// Wraps a fallible `load` closure as a [`Loader`].
///
/// ```
/// use navcache::traits::{try_loader_fn, Loader};
///
/// let mut loader = try_loader_fn(|name: &&str, _idx: usize| {
///     if name.ends_with(".jpg") { Ok(Some(name.len())) } else { Err("unsupported") }
/// });
///
/// assert_eq!(loader.load(&"cat.jpg", 0), Ok(Some(7)));
/// assert_eq!(loader.load(&"notes.txt", 1), Err("unsupported"));
/// ```
pub fn try_loader_fn<L>(load: L) -> TryFnLoader<L, NoUnload> {
    TryFnLoader {
        load,
        unload: NoUnload,
    }
}

impl<L> TryFnLoader<L, NoUnload> {
    /// Attaches a fallible unload callback.
    pub fn with_unload<U>(self, unload: U) -> TryFnLoader<L, U> {
        TryFnLoader {
            load: self.load,
            unload,
        }
    }
}

impl<T, O, E, L, U> Loader<T> for TryFnLoader<L, U>
where
    L: FnMut(&T, usize) -> Result<Option<O>, E>,
    U: TryUnloadHook<O, E>,
{
    type Output = O;
    type Error = E;

    #[inline]
    fn load(&mut self, item: &T, index: usize) -> Result<Option<O>, E> {
        (self.load)(item, index)
    }

    #[inline]
    fn unload(&mut self, value: O, index: usize) -> Result<(), E> {
        self.unload.try_unload(value, index)
    }
}
