// ==============================================
// NAVIGATION CACHE SCENARIOS (integration)
// ==============================================
//
// End-to-end behavior of NavigationCache through its public API: window
// shapes for each direction of travel, eviction, deferred preloading,
// reset semantics and the null/out-of-range short circuits.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use navcache::prelude::*;

/// Loader that logs every call so tests can assert on load/unload order.
#[derive(Debug, Default, Clone)]
struct Journal {
    loads: Rc<RefCell<Vec<usize>>>,
    unloads: Rc<RefCell<Vec<usize>>>,
    declined: Rc<RefCell<Vec<usize>>>,
}

impl Journal {
    fn loads(&self) -> Vec<usize> {
        self.loads.borrow().clone()
    }

    fn unloads(&self) -> Vec<usize> {
        self.unloads.borrow().clone()
    }

    fn decline(&self, index: usize) {
        self.declined.borrow_mut().push(index);
    }
}

impl Loader<String> for Journal {
    type Output = String;
    type Error = Infallible;

    fn load(&mut self, item: &String, index: usize) -> Result<Option<String>, Infallible> {
        self.loads.borrow_mut().push(index);
        if self.declined.borrow().contains(&index) {
            return Ok(None);
        }
        Ok(Some(format!("preview:{item}")))
    }

    fn unload(&mut self, _value: String, index: usize) -> Result<(), Infallible> {
        self.unloads.borrow_mut().push(index);
        Ok(())
    }
}

fn photos(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("img{i}.jpg")).collect()
}

fn cache_over(
    n: usize,
    config: NavigationConfig,
) -> (NavigationCache<Vec<String>, Cursor, Journal>, Cursor, Journal) {
    let cursor = Cursor::new();
    let journal = Journal::default();
    let cache = NavigationCache::with_config(photos(n), cursor.clone(), journal.clone(), config);
    (cache, cursor, journal)
}

// ==============================================
// Forward travel
// ==============================================

mod forward {
    use super::*;

    fn config() -> NavigationConfig {
        NavigationConfig::new()
            .preload_forward(2)
            .preload_backward(1)
            .retain_forward(1)
            .retain_backward(1)
    }

    #[test]
    fn consecutive_gets_evict_behind_retain_window() {
        let (mut cache, cursor, journal) = cache_over(10, config());

        for i in [5, 6, 7] {
            cursor.set(i);
            assert_eq!(cache.current().cloned(), Some(format!("preview:img{i}.jpg")));
        }

        assert!(cache.contains(7));
        assert!(cache.contains(6));
        assert!(!cache.contains(5));
        assert_eq!(journal.unloads(), vec![5]);
        cache.check_invariants().unwrap();

        // Deferred passes from 5, 6 and 7 run in scheduling order.
        assert_eq!(cache.pending_preloads(), 3);
        cache.flush();
        assert!(cache.contains(8));
        assert!(cache.contains(9));
    }

    #[test]
    fn draining_between_gets_preloads_ahead() {
        let (mut cache, cursor, journal) = cache_over(10, config());

        cursor.set(5);
        cache.current();
        cache.flush();
        assert_eq!(cache.cached_indices(), vec![4, 5, 6]);

        cursor.set(6);
        cache.current();
        cache.flush();
        assert_eq!(cache.cached_indices(), vec![5, 6, 7, 8]);

        cursor.set(7);
        cache.current();
        assert_eq!(cache.cached_indices(), vec![6, 7, 8]);
        cache.flush();
        assert_eq!(cache.cached_indices(), vec![6, 7, 8, 9]);

        assert_eq!(journal.unloads(), vec![4, 5]);
    }

    #[test]
    fn strictly_increasing_scan_loads_each_index_once() {
        let (mut cache, cursor, journal) = cache_over(20, config());

        for i in 0..20 {
            cursor.set(i);
            assert_eq!(cache.current().cloned(), Some(format!("preview:img{i}.jpg")));
            cache.flush();
        }

        let mut loads = journal.loads();
        loads.sort_unstable();
        assert_eq!(loads, (0..20).collect::<Vec<_>>());
    }
}

// ==============================================
// Backward travel and first call
// ==============================================

mod direction {
    use super::*;

    #[test]
    fn first_call_uses_symmetric_minimum_window() {
        let (mut cache, cursor, journal) = cache_over(10, NavigationConfig::new().preload(3));

        cursor.set(5);
        cache.current();
        cache.flush();
        assert_eq!(cache.cached_indices(), vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(journal.loads().len(), 7);
    }

    #[test]
    fn first_call_ignores_larger_side() {
        let config = NavigationConfig::new().preload_forward(4).preload_backward(1);
        let (mut cache, cursor, _journal) = cache_over(10, config);

        cursor.set(5);
        cache.current();
        assert_eq!(cache.last_plan().map(|p| p.preload.range()), Some(4..7));
        assert_eq!(cache.last_plan().map(|p| p.direction), Some(Direction::Initial));
    }

    #[test]
    fn backward_travel_preloads_further_behind() {
        let config = NavigationConfig::new().preload_forward(2).preload_backward(1);
        let (mut cache, cursor, journal) = cache_over(10, config);

        cursor.set(5);
        cache.current();
        cache.flush();
        assert_eq!(cache.cached_indices(), vec![4, 5, 6]);

        cursor.set(4);
        cache.current();
        let plan = cache.last_plan().copied().unwrap();
        assert_eq!(plan.direction, Direction::Backward);
        assert_eq!(plan.preload.range(), 2..6);
        assert_eq!(plan.retain.range(), 3..7);

        cache.flush();
        assert_eq!(cache.cached_indices(), vec![2, 3, 4, 5, 6]);
        assert!(journal.unloads().is_empty());
    }

    #[test]
    fn retain_larger_than_preload_is_clamped() {
        let clamped = NavigationConfig::new().preload(1).retain(5);
        let exact = NavigationConfig::new().preload(1).retain(1);
        let (mut a, cursor_a, journal_a) = cache_over(12, clamped);
        let (mut b, cursor_b, journal_b) = cache_over(12, exact);

        for i in [3, 4, 8, 7, 7, 0, 11] {
            cursor_a.set(i);
            cursor_b.set(i);
            a.current();
            b.current();
            assert_eq!(a.cached_indices(), b.cached_indices());
            a.check_invariants().unwrap();
            a.flush();
            b.flush();
        }
        assert_eq!(journal_a.unloads(), journal_b.unloads());
    }
}

// ==============================================
// Short circuits
// ==============================================

mod short_circuit {
    use super::*;

    #[test]
    fn null_index_has_no_side_effects() {
        let (mut cache, cursor, journal) = cache_over(4, NavigationConfig::new());

        cursor.set(1);
        cache.current();
        cursor.clear();

        assert_eq!(cache.current(), None);
        assert_eq!(cache.previous_index(), Some(1));
        assert_eq!(cache.pending_preloads(), 1);
        assert_eq!(journal.loads(), vec![1]);
    }

    #[test]
    fn out_of_range_has_no_side_effects() {
        let (mut cache, cursor, journal) = cache_over(4, NavigationConfig::new());

        cursor.set(2);
        cache.current();
        cache.flush();
        let cached = cache.cached_indices();

        cursor.set(4);
        assert_eq!(cache.current(), None);
        cursor.set(usize::MAX);
        assert_eq!(cache.current(), None);

        assert_eq!(cache.cached_indices(), cached);
        assert_eq!(cache.previous_index(), Some(2));
        assert_eq!(cache.pending_preloads(), 0);
        assert!(journal.unloads().is_empty());
    }

    #[test]
    fn declined_load_is_retried() {
        let (mut cache, cursor, journal) = cache_over(6, NavigationConfig::new().preload(0));
        journal.decline(3);

        cursor.set(3);
        assert_eq!(cache.current(), None);
        assert!(!cache.contains(3));
        assert_eq!(cache.current(), None);
        assert_eq!(journal.loads(), vec![3, 3]);
    }

    #[test]
    fn closure_index_source() {
        let selected = Rc::new(Cell::new(None));
        let handle = Rc::clone(&selected);
        let mut cache = NavigationCache::new(
            photos(3),
            move || handle.get(),
            loader_fn(|name: &String, _: usize| Some(name.len())),
        );

        assert_eq!(cache.current(), None);
        selected.set(Some(2));
        assert_eq!(cache.current(), Some(&8));
    }
}

// ==============================================
// Reset and deferred-pass races
// ==============================================

mod reset {
    use super::*;

    #[test]
    fn reset_then_get_behaves_like_first_call() {
        let (mut cache, cursor, journal) = cache_over(10, NavigationConfig::new().preload(2));

        cursor.set(4);
        cache.current();
        cache.flush();
        cursor.set(5);
        cache.current();
        cache.cancel_preloads();

        // Moving to 5 evicted 2; the reset itself must not unload anything.
        assert_eq!(journal.unloads(), vec![2]);
        cache.reset();
        assert!(cache.is_empty());
        assert_eq!(journal.unloads(), vec![2]);
        let loads_before = journal.loads().len();

        assert!(cache.current().is_some());
        assert_eq!(journal.loads().len(), loads_before + 1);
        assert_eq!(cache.last_plan().map(|p| p.direction), Some(Direction::Initial));
        assert_eq!(journal.unloads(), vec![2]);
    }

    #[test]
    fn pass_queued_before_reset_still_runs() {
        // Accepted behavior: reset does not cancel deferred passes.
        let (mut cache, cursor, _journal) = cache_over(10, NavigationConfig::new());

        cursor.set(5);
        cache.current();
        cache.reset();
        assert_eq!(cache.flush(), 3);
        assert_eq!(cache.cached_indices(), vec![4, 5, 6]);
        assert_eq!(cache.previous_index(), None);
    }

    #[test]
    fn stale_pass_can_reload_evicted_entry() {
        // Accepted behavior: an older pass may reload an index a later get() evicted.
        let config = NavigationConfig::new()
            .preload_forward(2)
            .preload_backward(1)
            .retain(1);
        let (mut cache, cursor, journal) = cache_over(10, config);

        for i in [5, 6, 7] {
            cursor.set(i);
            cache.current();
        }
        assert!(!cache.contains(5));
        cache.flush();
        assert!(cache.contains(5));
        assert_eq!(journal.unloads(), vec![5]);
    }

    #[test]
    fn take_entries_lets_caller_release() {
        let (mut cache, cursor, journal) = cache_over(5, NavigationConfig::new());

        cursor.set(0);
        cache.current();
        cache.flush();
        let released: Vec<usize> = cache.take_entries().into_iter().map(|(i, _)| i).collect();
        assert_eq!(released, vec![0, 1]);
        assert!(journal.unloads().is_empty());
    }
}
