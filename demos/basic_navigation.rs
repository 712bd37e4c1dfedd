use navcache::prelude::*;

fn main() {
    env_logger::init();

    let pages: Vec<String> = (1..=8).map(|n| format!("page-{n}")).collect();
    let cursor = Cursor::at(0);

    // Preload two pages ahead, keep one behind for quick back-navigation.
    let mut cache = NavigationCache::with_config(
        pages,
        cursor.clone(),
        loader_fn(|page: &String, idx: usize| {
            println!("  load   #{idx} {page}");
            Some(page.to_uppercase())
        })
        .with_unload(|rendered: String, idx: usize| println!("  unload #{idx} {rendered}")),
        NavigationConfig::new()
            .preload_forward(2)
            .preload_backward(1)
            .retain_backward(1),
    );

    for step in ["next", "next", "next", "prev", "next"] {
        if let Some(page) = cache.current() {
            println!("showing {page}");
        }
        // Host event loop: drain deferred preloads before the next input.
        cache.flush();
        println!("cached {:?}", cache.cached_indices());

        match step {
            "next" => cursor.advance(),
            _ => cursor.retreat(),
        }
    }
}
