//! The only impure inputs of the engine: randomness, time and id generation.
//!
//! Everything else in this crate is a pure function of its arguments, so
//! swapping these for the deterministic fakes below pins every draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces a fresh sample in `[0, 1)` per call.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Current wall-clock time in epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Process-wide unique opaque identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    index: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            index: 0,
        }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples handed out so far.
    pub fn calls(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// `prefix-1`, `prefix-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("prize")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Bundle of injected capabilities handed to every impure operation.
pub struct Capabilities {
    pub random: Box<dyn RandomSource>,
    pub clock: Box<dyn Clock>,
    pub ids: Box<dyn IdGenerator>,
}

impl Capabilities {
    /// Entropy-seeded RNG, system clock and UUID v4 ids.
    pub fn system() -> Self {
        Self {
            random: Box::new(RngSource::from_entropy()),
            clock: Box::new(SystemClock),
            ids: Box::new(UuidGenerator),
        }
    }

    /// Fully deterministic set: replayed samples, fixed time, sequential ids.
    pub fn fixed(samples: impl Into<Vec<f64>>, now_millis: i64) -> Self {
        Self {
            random: Box::new(SequenceSource::new(samples)),
            clock: Box::new(FixedClock(now_millis)),
            ids: Box::new(SequentialIds::default()),
        }
    }

    pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities").finish_non_exhaustive()
    }
}
