//! UUIDv1-related functionality

use crate::node::node_id;
use crate::source::{gregorian_ticks, OsRandSource, RandSource, StdSystemTime, TimeSource};
use crate::{Error, Uuid};

/// Generates a UUIDv1 object from the current time, a random clock sequence, and the
/// process-wide node id.
///
/// UUIDv1 is kept for compatibility; prefer [`uuid7`](crate::uuid7) or [`uuid6`](crate::uuid6)
/// when the sort order matters.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid9562::uuid1()?;
/// assert_eq!(uuid.version(), 1);
/// println!("{uuid}"); // e.g., "c232ab00-9414-11ec-b3c8-9f6bdeced846"
/// # Ok::<(), uuid9562::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid, Error> {
    generate_v1(&mut OsRandSource::default(), &mut StdSystemTime, node_id()?)
}

/// Generates a UUIDv1 object from the given sources and node id.
pub fn generate_v1<R: RandSource, T: TimeSource>(
    rng: &mut R,
    clock: &mut T,
    node: [u8; 6],
) -> Result<Uuid, Error> {
    let clock_seq = rng.try_next_u16()? & 0x3fff;
    let timestamp = gregorian_ticks(clock.now());
    Ok(Uuid::from_fields_v1(timestamp, clock_seq, node))
}
