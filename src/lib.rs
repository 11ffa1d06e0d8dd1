//! Universally Unique IDentifiers as specified by RFC 9562
//!
//! ```rust
//! use uuid9562::{uuid4, uuid7};
//!
//! let uuid = uuid7()?;
//! println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid4()?;
//! println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! # Ok::<(), uuid9562::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Supported versions
//!
//! | Version | Entry point                         | Contents                                    |
//! | ------- | ----------------------------------- | ------------------------------------------- |
//! | 1       | [`uuid1`]                           | Gregorian time, clock sequence, node id     |
//! | 2       | [`uuid2`]                           | UUIDv1 with a DCE domain and local id       |
//! | 3       | [`uuid3`]                           | MD5 of a namespace and a name               |
//! | 4       | [`uuid4`], [`new`]                  | random                                      |
//! | 5       | [`uuid5`]                           | SHA-1 of a namespace and a name             |
//! | 6       | [`uuid6`], [`V6Generator`]          | reordered Gregorian time, monotonic         |
//! | 7       | [`uuid7`], [`V7Generator`]          | Unix time in milliseconds, monotonic        |
//!
//! # Field and bit layout
//!
//! UUIDv7 values produced by this library have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        counter        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `counter` field is randomly initialized whenever `unix_ts_ms`
//!   changes and incremented by one for each UUID generated within the same
//!   millisecond.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 62 `rand` bits are filled with a cryptographically strong
//!   random number.
//!
//! UUIDv6 values follow the same scheme with a 60-bit timestamp in
//! 100-nanosecond ticks since 1582-10-15 in place of `unix_ts_ms`, and the
//! 14-bit clock sequence following `var` in place of `counter`. The 48-bit node
//! id fills the last six bytes.
//!
//! If the counter reaches its maximum value within the same timestamp, the
//! generator waits briefly for the clock to advance; if it does not, the
//! timestamp is incremented so that the monotonic order is kept. A clock that
//! moves backwards is treated the same way: the last timestamp is reused with
//! an incremented counter until the clock catches up.
//!
//! # Text notations
//!
//! [`Uuid::parse`] accepts the canonical hyphenated form, the `urn:uuid:`
//! form, the braced form, and the 32-digit compact form, in either letter case:
//!
//! ```rust
//! use uuid9562::Uuid;
//!
//! let x: Uuid = "urn:uuid:6BA7B810-9DAD-11D1-80B4-00C04FD430C8".parse()?;
//! assert_eq!(x, Uuid::NAMESPACE_DNS);
//! assert_eq!(x.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
//! # Ok::<(), uuid9562::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide generators behind [`uuid6`] and
//!   [`uuid7`].
//! - `host`: derives the node id from a network interface hardware address
//!   and enables [`uuid2_person`] and [`uuid2_group`] on Unix. Without it the
//!   node id is random.
//!
//! Optional features:
//!
//! - `serde` enables serialization/deserialization of [`Uuid`] via serde.
//! - `uuid` enables conversion from/to the [uuid] crate's Uuid type.
//!
//! [uuid]: https://crates.io/crates/uuid
//!
//! # Logging
//!
//! Node id resolution, clock rollbacks, and counter overflows emit [tracing]
//! events at the `debug`, `trace`, and `warn` levels. No subscriber is
//! installed by this crate.
//!
//! [tracing]: https://crates.io/crates/tracing

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, ParseError};

mod id;
pub use id::{Uuid, Variant};

mod parse;

mod source;
pub use source::{Adapter, OsRandSource, RandSource, StdSystemTime, TimeSource};

mod sequencer;

mod node;
pub use node::node_id;

mod v1;
pub use v1::{generate_v1, uuid1};

mod v2;
pub use v2::{generate_v2, uuid2, Domain};
#[cfg(all(unix, feature = "host"))]
pub use v2::{uuid2_group, uuid2_person};

mod hash;
pub use hash::{uuid3, uuid5};

mod v4;
pub use v4::{generate_v4, new, uuid4};

mod v6;
pub use v6::V6Generator;

mod v7;
pub use v7::V7Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid6, uuid7};
