//! Random number and clock sources consumed by the generators.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::{rngs::OsRng, RngCore};

use crate::Error;

/// A trait that defines the minimum random number source interface for the generators.
///
/// Failures are reported to the caller of the generation request and never retried.
pub trait RandSource {
    /// Fills `dest` with cryptographically strong random data.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;

    /// Returns the next random `u16`.
    fn try_next_u16(&mut self) -> Result<u16, Error> {
        let mut buffer = [0u8; 2];
        self.try_fill_bytes(&mut buffer)?;
        Ok(u16::from_be_bytes(buffer))
    }

    /// Returns the next random `u64`.
    fn try_next_u64(&mut self) -> Result<u64, Error> {
        let mut buffer = [0u8; 8];
        self.try_fill_bytes(&mut buffer)?;
        Ok(u64::from_be_bytes(buffer))
    }
}

/// A trait that defines the minimum system clock interface for the generators.
pub trait TimeSource {
    /// Returns the current wall-clock time as the duration since the Unix epoch.
    fn now(&mut self) -> Duration;
}

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest).map_err(Error::from)
    }
}

/// The default random number source that reads the operating system's entropy source.
pub type OsRandSource = Adapter<OsRng>;

/// [`TimeSource`] implementation backed by [`SystemTime`].
///
/// A system clock set before 1970 is reported as the Unix epoch; the sequencers treat the
/// resulting backward jump as a clock rollback.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn now(&mut self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// Number of 100-nanosecond intervals between 1582-10-15 and 1970-01-01.
const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// Converts a duration since the Unix epoch to 100-nanosecond ticks since the Gregorian
/// calendar reform (1582-10-15), truncated to the 60-bit timestamp field.
pub(crate) fn gregorian_ticks(since_unix_epoch: Duration) -> u64 {
    let ticks = (since_unix_epoch.as_nanos() / 100) as u64;
    ticks.wrapping_add(GREGORIAN_OFFSET) & ((1 << 60) - 1)
}

/// Converts a duration since the Unix epoch to milliseconds, truncated to the 48-bit timestamp
/// field.
pub(crate) fn unix_millis(since_unix_epoch: Duration) -> u64 {
    (since_unix_epoch.as_millis() as u64) & ((1 << 48) - 1)
}
