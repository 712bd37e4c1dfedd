pub mod preload_queue;

pub use preload_queue::{PreloadPass, PreloadQueue};
