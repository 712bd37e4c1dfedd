//! Photo viewer that keeps decoded previews around the selected photo.
//!
//! Switching folders replaces the item list, so the previews are taken out
//! of the cache and released by the viewer before browsing restarts.
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use navcache::prelude::*;

#[derive(Debug, Clone)]
struct Photo {
    name: String,
    width: u32,
}

#[derive(Debug)]
struct Preview {
    path: String,
    thumbnail: String,
}

fn folder(prefix: &str, count: usize) -> Vec<Photo> {
    (0..count)
        .map(|i| Photo {
            name: format!("{prefix}_{i:03}.jpg"),
            width: 1200 + (i as u32) * 40,
        })
        .collect()
}

type Gallery = Rc<RefCell<Vec<Photo>>>;

fn browse<L>(cache: &mut NavigationCache<Gallery, Cursor, L>, selection: &Cursor, path: &[usize])
where
    L: Loader<Photo, Output = Preview, Error = Infallible>,
{
    for &i in path {
        selection.set(i);
        if let Some(preview) = cache.current() {
            println!("show {}", preview.path);
        }
        cache.flush();
    }
}

fn release(preview: Preview) {
    println!("  release {} ({})", preview.path, preview.thumbnail);
}

fn main() {
    env_logger::init();

    let photos: Gallery = Rc::new(RefCell::new(folder("beach", 12)));
    let selection = Cursor::new();

    let mut cache = NavigationCache::with_config(
        Rc::clone(&photos),
        selection.clone(),
        loader_fn(|photo: &Photo, idx: usize| {
            println!("  decode #{idx} {}", photo.name);
            Some(Preview {
                path: format!("/previews/{}", photo.name),
                thumbnail: format!("/thumbs/{}@{}w", photo.name, photo.width / 4),
            })
        })
        .with_unload(|preview: Preview, _: usize| release(preview)),
        NavigationConfig::new()
            .preload_forward(3)
            .preload_backward(1)
            .retain_forward(2)
            .retain_backward(1),
    );

    browse(&mut cache, &selection, &[0, 1, 2, 3, 2]);
    println!("cached {:?}", cache.cached_indices());

    // Folder change: previews belong to the old list.
    for (_, preview) in cache.take_entries() {
        release(preview);
    }
    *photos.borrow_mut() = folder("city", 5);
    selection.clear();

    browse(&mut cache, &selection, &[4, 3]);
    println!("cached {:?}", cache.cached_indices());
    println!("{cache:?}");
}
