//! UUIDv4-related functionality

use crate::source::{OsRandSource, RandSource};
use crate::{Error, Uuid};

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid9562::uuid4()?;
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuid9562::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    generate_v4(&mut OsRandSource::default())
}

/// Generates a UUIDv4 object from the given random number source.
pub fn generate_v4<R: RandSource>(rng: &mut R) -> Result<Uuid, Error> {
    let mut bytes = [0u8; 16];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(Uuid::from(bytes).stamped(4))
}

/// Generates a UUIDv4 object, panicking if the entropy source fails.
///
/// This is a shortcut for callers that have no way to handle the error. Use [`uuid4`] wherever
/// a `Result` can be propagated.
///
/// # Panics
///
/// Panics if the operating system's entropy source cannot be read.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid9562::new();
/// assert_eq!(uuid.version(), 4);
/// ```
pub fn new() -> Uuid {
    match uuid4() {
        Ok(uuid) => uuid,
        Err(err) => panic!("uuid9562: could not generate UUID: {err}"),
    }
}
