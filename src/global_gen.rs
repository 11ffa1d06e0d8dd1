//! Process-wide generators and entry point functions for the time-ordered versions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::{Error, Uuid, V6Generator, V7Generator};
use inner::PidGuarded;

/// Returns the lock handle of a process-wide generator, creating one if none exists.
///
/// A poisoned lock is recovered; the sequence state is written only after every fallible step
/// of a generation call has succeeded.
fn lock<G: Default>(
    cell: &'static OnceLock<Mutex<PidGuarded<G>>>,
) -> MutexGuard<'static, PidGuarded<G>> {
    cell.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Generates a UUIDv6 object.
///
/// This function employs a global generator and guarantees the process-wide monotonic order of
/// UUIDs generated within the same 100-nanosecond tick. On Unix, this function resets the
/// generator when the process ID changes (i.e., upon process forks) to prevent collisions across
/// processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid9562::uuid6()?;
/// println!("{uuid}"); // e.g., "1ec9414c-232a-6b00-b3c8-9f6bdeced846"
/// # Ok::<(), uuid9562::Error>(())
/// ```
pub fn uuid6() -> Result<Uuid, Error> {
    static G: OnceLock<Mutex<PidGuarded<V6Generator>>> = OnceLock::new();
    lock(&G).get_mut().generate()
}

/// Generates a UUIDv7 object.
///
/// This function employs a global generator and guarantees the process-wide monotonic order of
/// UUIDs generated within the same millisecond. On Unix, this function resets the generator when
/// the process ID changes (i.e., upon process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid9562::uuid7()?;
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid9562::uuid7()?.to_string();
/// # Ok::<(), uuid9562::Error>(())
/// ```
pub fn uuid7() -> Result<Uuid, Error> {
    static G: OnceLock<Mutex<PidGuarded<V7Generator>>> = OnceLock::new();
    lock(&G).get_mut().generate()
}

mod inner {
    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug, Default)]
    pub struct PidGuarded<G> {
        #[cfg(unix)]
        pid: Pid,
        generator: G,
    }

    #[cfg(unix)]
    #[derive(Debug)]
    struct Pid(u32);

    #[cfg(unix)]
    impl Default for Pid {
        fn default() -> Self {
            Self(std::process::id())
        }
    }

    impl<G: Default> PidGuarded<G> {
        /// Returns a mutable reference to the inner generator, resetting the generator state on
        /// Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut G {
            #[cfg(unix)]
            if self.pid.0 != std::process::id() {
                tracing::debug!(
                    previous = self.pid.0,
                    current = std::process::id(),
                    "process id changed; resetting global generator"
                );
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
