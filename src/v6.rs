//! UUIDv6 generator

use crate::node::node_id;
use crate::sequencer::{Sequence, V6_POLICY};
use crate::source::{Adapter, OsRandSource, RandSource, StdSystemTime, TimeSource};
use crate::{Error, Uuid};

/// Represents a UUIDv6 generator that guarantees the monotonic order of UUIDs generated by the
/// same instance.
///
/// UUIDv6 carries the same information as UUIDv1 (a 60-bit Gregorian timestamp in 100-nanosecond
/// ticks, a 14-bit clock sequence, and a 48-bit node id) but stores the timestamp most
/// significant bits first, so that the byte and string order follows the creation time. The clock
/// sequence serves as the counter: it is randomly initialized on every new tick and incremented
/// for each UUID generated within the same tick. When it overflows, the generator waits for the
/// next tick and draws a fresh random clock sequence.
///
/// # Examples
///
/// ```rust
/// use uuid9562::V6Generator;
///
/// let mut g = V6Generator::new().with_node([0x02, 0x00, 0x5e, 0x10, 0x00, 0x01]);
/// let x = g.generate()?;
/// let y = g.generate()?;
/// assert!(x < y);
/// assert_eq!(&x.encode()[24..], "02005e100001");
/// # Ok::<(), uuid9562::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V6Generator<R = OsRandSource, T = StdSystemTime> {
    sequence: Sequence,

    /// Node id override; the process-wide node id is used if `None`.
    node: Option<[u8; 6]>,

    /// The random number source used by the generator.
    rng: R,

    /// The system clock used by the generator.
    clock: T,
}

impl V6Generator {
    /// Creates a generator instance reading the operating system's entropy source and clock.
    pub const fn new() -> Self {
        Self::with_sources(Adapter(rand::rngs::OsRng), StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> V6Generator<R, T> {
    /// Creates a generator instance with a specified random number source and clock.
    pub const fn with_sources(rng: R, clock: T) -> Self {
        Self {
            sequence: Sequence::new(),
            node: None,
            rng,
            clock,
        }
    }

    /// Replaces the process-wide node id with `node` for UUIDs generated by this instance.
    pub fn with_node(mut self, node: [u8; 6]) -> Self {
        self.node = Some(node);
        self
    }

    /// Generates a new UUIDv6 object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the random number source fails, including when the
    /// process-wide node id has to be generated randomly and that fails. Returns
    /// [`Error::TimestampOverflow`] if the clock sequence is exhausted at the largest 60-bit
    /// timestamp.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        let node = match self.node {
            Some(node) => node,
            None => node_id()?,
        };
        let (timestamp, clock_seq) = self
            .sequence
            .next(&V6_POLICY, &mut self.rng, &mut self.clock)?;
        Ok(Uuid::from_fields_v6(timestamp, clock_seq as u16, node))
    }
}
