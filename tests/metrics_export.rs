// ==============================================
// METRICS (integration, `metrics` feature)
// ==============================================

#![cfg(feature = "metrics")]

use navcache::prelude::*;

#[test]
fn walk_is_reflected_in_exported_counters() {
    let cursor = Cursor::new();
    let mut cache = NavigationCache::with_config(
        (0..10u32).collect::<Vec<_>>(),
        cursor.clone(),
        loader_fn(|item: &u32, _: usize| Some(*item)),
        NavigationConfig::new().preload_forward(2).preload_backward(1).retain(1),
    );

    for i in [5, 6, 7] {
        cursor.set(i);
        cache.current();
        cache.flush();
    }

    let snapshot = cache.snapshot();
    assert_eq!(snapshot.get_calls, 3);
    assert_eq!(snapshot.current_loads, 1);
    assert_eq!(snapshot.cached_hits, 2);
    assert_eq!(snapshot.evicted_entries, 2);
    assert_eq!(snapshot.preload_passes_run, 3);
    assert_eq!(snapshot.cached_entries, 4);

    let exporter = PrometheusTextExporter::new("gallery_nav", Vec::new());
    exporter.export(&snapshot);
    let text = String::from_utf8(exporter.into_inner()).unwrap();
    assert!(text.contains("gallery_nav_evicted_entries_total 2\n"));
    assert!(text.contains("gallery_nav_cached_entries 4\n"));
}
