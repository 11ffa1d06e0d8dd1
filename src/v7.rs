//! UUIDv7 generator

use crate::sequencer::{Sequence, V7_POLICY};
use crate::source::{Adapter, OsRandSource, RandSource, StdSystemTime, TimeSource};
use crate::{Error, Uuid};

/// Represents a UUIDv7 generator that encapsulates a counter and guarantees the monotonic order of
/// UUIDs generated by the same instance.
///
/// The 48-bit `unix_ts_ms` field holds the Unix timestamp in milliseconds, the 12-bit `rand_a`
/// field holds the sequence counter, and the remaining 62 bits are filled with random data. The
/// counter is randomly initialized whenever the timestamp changes and incremented for each UUID
/// generated within the same millisecond. When the counter overflows, the generator waits for the
/// next millisecond and restarts the counter from zero.
///
/// The following example guarantees the process-wide (cross-thread) monotonicity using Rust's
/// standard synchronization mechanism, which is what [`uuid7`](crate::uuid7) does internally.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuid9562::V7Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V7Generator::new()));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Generator<R = OsRandSource, T = StdSystemTime> {
    sequence: Sequence,

    /// The random number source used by the generator.
    rng: R,

    /// The system clock used by the generator.
    clock: T,
}

impl V7Generator {
    /// Creates a generator instance reading the operating system's entropy source and clock.
    pub const fn new() -> Self {
        Self::with_sources(Adapter(rand::rngs::OsRng), StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> V7Generator<R, T> {
    /// Creates a generator instance with a specified random number source and clock.
    pub const fn with_sources(rng: R, clock: T) -> Self {
        Self {
            sequence: Sequence::new(),
            rng,
            clock,
        }
    }

    /// Generates a new UUIDv7 object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the random number source fails, or
    /// [`Error::TimestampOverflow`] if the counter is exhausted while the clock reads the largest
    /// 48-bit timestamp. The generator state is left as it was before the call.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        let rand_b = self.rng.try_next_u64()? & ((1 << 62) - 1);
        let (unix_ts_ms, counter) = self
            .sequence
            .next(&V7_POLICY, &mut self.rng, &mut self.clock)?;
        Ok(Uuid::from_fields_v7(unix_ts_ms, counter as u16, rand_b))
    }
}
