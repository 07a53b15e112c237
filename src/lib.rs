//! A Rust implementation of UUID version 6 (and version 4)
//!
//! ```rust
//! use uuid6::uuid6;
//!
//! let uuid = uuid6();
//! println!("{}", uuid); // e.g., "1ef3b2a4-6c59-6e1a-b2c7-5b1f0e3d4a96"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562.html#name-uuid-version-6).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp (`time_high`, `time_mid`, and `time_low`, most significant bits first)
//!   counts 100-nanosecond intervals since 1582-10-15T00:00:00Z, the start of the Gregorian
//!   calendar.
//! - The 4-bit `ver` field is set at `0110`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field accommodates the sequence counter that ensures the monotonic
//!   order of IDs generated within the same 100-nanosecond tick. The counter is randomly
//!   initialized once per generator and incremented by one whenever the clock does not advance.
//! - The 48-bit `node` field is filled with a random number whose multicast bit is set, unless a
//!   node ID is given explicitly.
//!
//! Because the timestamp is stored most significant bits first, the byte-wise order of UUIDv6
//! values follows their creation time.
//!
//! When the system clock stalls or moves back, the generator reuses the timestamp of the
//! preceding UUID and increments the counter instead. In the very rare circumstances where the
//! counter wraps around within the same timestamp, the generator increments the timestamp;
//! therefore, the timestamp may have a slightly larger value than that of the real-time clock.
//!
//! # Field extraction
//!
//! ```rust
//! use uuid6::{TimeOrdered, Uuid};
//!
//! let uuid: Uuid = "1ec9414c-232a-6b00-b3c8-9f6bdeced846".parse()?;
//! let fields = uuid.components::<TimeOrdered>().unwrap();
//! assert_eq!(fields.timestamp().unwrap().as_secs(), 1_645_557_742);
//! assert_eq!(fields.sequence(), 0x33c8);
//! assert_eq!(fields.node(), 0x9f6b_dece_d846);
//! # Ok::<(), uuid6::ParseError>(())
//! ```
//!
//! # Other features
//!
//! This library also supports the generation of UUID version 4:
//!
//! ```rust
//! use uuid6::uuid4;
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:#X}", uuid); // e.g., "2CA4B2CE6C1340D4BCCF37D222820F6F"
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables, among others, the default timestamp source for [`V6Generator`] using
//!   [`std::time`].
//! - `global_gen` (implies `std`) provides the process-wide default generator and enables
//!   [`uuid6()`], [`uuid6_with_node()`], [`uuid4()`], and `Uuid::new()`.
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables the conversion between [`Uuid`] and `uuid::Uuid`.
//! - `tracing` emits diagnostic events from the default generator.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod components;
mod hex;
mod id;
mod timestamp;
pub use components::{Components, TimeOrdered};
pub use hex::{Case, ParseError};
pub use id::{Uuid, Variant};

pub mod generator;
#[doc(inline)]
pub use generator::V6Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid4, uuid6, uuid6_with_node};
