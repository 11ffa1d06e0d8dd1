//! Monotonic (timestamp, counter) sequencing for the time-ordered UUID versions.
//!
//! A [`Sequence`] turns coarse clock readings into strictly increasing (timestamp, counter)
//! pairs:
//!
//! | Clock reading     | Counter                                                        |
//! | ----------------- | -------------------------------------------------------------- |
//! | Newer than stored | Drawn at random, masked to the field width                     |
//! | Same as stored    | Incremented; on overflow waits for the clock to advance        |
//! | Older than stored | Incremented against the stored time; on overflow time + 1      |
//!
//! The two users differ in what happens after waiting out a same-tick overflow: UUIDv6
//! re-randomizes the counter like on any new tick, while UUIDv7 restarts it from zero. See
//! [`Overflow`].

use std::{thread, time::Duration};

use tracing::{debug, trace, warn};

use crate::source::{gregorian_ticks, unix_millis, RandSource, TimeSource};
use crate::Error;

/// Counter handling once the clock has moved past a tick whose counter overflowed.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) enum Overflow {
    /// Draw a fresh random counter.
    Reseed,
    /// Restart the counter from zero.
    Reset,
}

/// Field width, clock resolution, and overflow behavior of a sequence.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Policy {
    pub max_counter: u64,
    pub max_timestamp: u64,
    pub overflow: Overflow,
    /// Converts a duration since the Unix epoch to the timestamp unit.
    pub read_clock: fn(Duration) -> u64,
}

/// 100-nanosecond Gregorian ticks with a 14-bit clock sequence.
pub(crate) const V6_POLICY: Policy = Policy {
    max_counter: 0x3fff,
    max_timestamp: (1 << 60) - 1,
    overflow: Overflow::Reseed,
    read_clock: gregorian_ticks,
};

/// Unix milliseconds with a 12-bit counter.
pub(crate) const V7_POLICY: Policy = Policy {
    max_counter: 0x0fff,
    max_timestamp: (1 << 48) - 1,
    overflow: Overflow::Reset,
    read_clock: unix_millis,
};

/// Upper bound of clock polls while waiting out a counter overflow.
pub(crate) const MAX_OVERFLOW_POLLS: u32 = 1_000;

/// Sleep between clock polls while waiting out a counter overflow.
pub(crate) const OVERFLOW_POLL_INTERVAL: Duration = Duration::from_micros(10);

/// The last issued (timestamp, counter) pair.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub(crate) struct Sequence {
    timestamp: u64,
    counter: u64,
    /// Whether any pair has been issued; the first call always starts a new tick.
    started: bool,
}

impl Sequence {
    pub(crate) const fn new() -> Self {
        Self {
            timestamp: 0,
            counter: 0,
            started: false,
        }
    }

    /// Reads the clock and returns the next (timestamp, counter) pair, which is strictly
    /// greater than the pair returned by the previous call.
    ///
    /// The state is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the random number source fails, or
    /// [`Error::TimestampOverflow`] if the counter is exhausted at the largest timestamp the
    /// field can hold.
    pub(crate) fn next<R: RandSource, T: TimeSource>(
        &mut self,
        policy: &Policy,
        rng: &mut R,
        clock: &mut T,
    ) -> Result<(u64, u64), Error> {
        let now = (policy.read_clock)(clock.now());
        if now > self.timestamp || !self.started {
            let counter = rng.try_next_u64()? & policy.max_counter;
            self.timestamp = now;
            self.counter = counter;
            self.started = true;
        } else if now == self.timestamp {
            if self.counter < policy.max_counter {
                self.counter += 1;
            } else {
                self.wait_for_next_tick(policy, rng, clock)?;
            }
        } else {
            debug!(
                now,
                last = self.timestamp,
                "clock moved backwards; going on with previous timestamp"
            );
            self.increment_or_carry(policy)?;
        }
        Ok((self.timestamp, self.counter))
    }

    /// Increments the counter against the stored timestamp, carrying into the timestamp and
    /// restarting the counter from zero at overflow.
    ///
    /// Fails without touching the state if the carry would push the timestamp past its field.
    fn increment_or_carry(&mut self, policy: &Policy) -> Result<(), Error> {
        if self.counter < policy.max_counter {
            self.counter += 1;
        } else if self.timestamp < policy.max_timestamp {
            self.timestamp += 1;
            self.counter = 0;
        } else {
            warn!(
                timestamp = self.timestamp,
                "counter exhausted at the largest representable timestamp"
            );
            return Err(Error::TimestampOverflow);
        }
        Ok(())
    }

    /// Sleeps until the clock passes the stored timestamp, then starts a new tick.
    ///
    /// Gives up after [`MAX_OVERFLOW_POLLS`] polls and carries into the timestamp instead, so a
    /// stalled clock never blocks the caller indefinitely.
    fn wait_for_next_tick<R: RandSource, T: TimeSource>(
        &mut self,
        policy: &Policy,
        rng: &mut R,
        clock: &mut T,
    ) -> Result<(), Error> {
        trace!(timestamp = self.timestamp, "counter overflowed; waiting for clock");
        for _ in 0..MAX_OVERFLOW_POLLS {
            thread::sleep(OVERFLOW_POLL_INTERVAL);
            let now = (policy.read_clock)(clock.now());
            if now > self.timestamp {
                let counter = match policy.overflow {
                    Overflow::Reseed => rng.try_next_u64()? & policy.max_counter,
                    Overflow::Reset => 0,
                };
                self.timestamp = now;
                self.counter = counter;
                return Ok(());
            }
        }

        warn!(
            timestamp = self.timestamp,
            "clock did not advance after counter overflow; incrementing timestamp"
        );
        self.increment_or_carry(policy)
    }
}
