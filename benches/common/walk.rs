//! Cursor walks for navigation benchmarks.
//!
//! Deterministic index streams without pulling in external RNG crates.

#[derive(Debug, Clone, Copy)]
pub enum Walk {
    /// 0, 1, 2, ... wrapping at the end of the sequence.
    Scan,
    /// Mostly forward, stepping back with probability `back_prob`.
    Browse { back_prob: f64 },
    /// Uniform jumps anywhere in `[0, len)`.
    Jump,
}

#[derive(Debug, Clone)]
pub struct WalkGenerator {
    len: usize,
    walk: Walk,
    rng: XorShift64,
    pos: usize,
}

impl WalkGenerator {
    pub fn new(len: usize, walk: Walk, seed: u64) -> Self {
        Self {
            len: len.max(1),
            walk,
            rng: XorShift64::new(seed),
            pos: 0,
        }
    }

    pub fn next_index(&mut self) -> usize {
        self.pos = match self.walk {
            Walk::Scan => (self.pos + 1) % self.len,
            Walk::Browse { back_prob } => {
                if self.rng.next_f64() < back_prob {
                    self.pos.saturating_sub(1)
                } else {
                    (self.pos + 1) % self.len
                }
            },
            Walk::Jump => (self.rng.next_u64() % self.len as u64) as usize,
        };
        self.pos
    }
}

#[derive(Debug, Clone)]
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}
