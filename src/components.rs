//! Typed views that decode the fields of a particular UUID version.

#[cfg(not(feature = "std"))]
use core as std;

use std::time::Duration;

use crate::{timestamp, Uuid};

/// A trait for typed views of a UUID that decode the fields of one UUID version.
///
/// A view is constructed only from a UUID that carries the matching version; see
/// [`Uuid::components()`].
pub trait Components: Sized {
    /// Interprets `uuid` as this view, returning `None` if the UUID is not of the expected
    /// version.
    fn from_uuid(uuid: Uuid) -> Option<Self>;
}

impl Uuid {
    /// Decodes the UUID into the typed view `T`, returning `None` if the UUID is not of the
    /// version `T` expects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::{TimeOrdered, Uuid};
    ///
    /// let x = "1ec9414c-232a-6b00-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// let c = x.components::<TimeOrdered>().unwrap();
    /// assert_eq!(c.sequence(), 0x33c8);
    /// assert_eq!(c.node(), 0x9f6b_dece_d846);
    ///
    /// let y = "550e8400-e29b-41d4-a716-446655440000".parse::<Uuid>()?;
    /// assert!(y.components::<TimeOrdered>().is_none());
    /// # Ok::<(), uuid6::ParseError>(())
    /// ```
    pub fn components<T: Components>(self) -> Option<T> {
        T::from_uuid(self)
    }
}

/// The fields of a UUIDv6: timestamp, clock sequence, and node.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TimeOrdered(Uuid);

impl TimeOrdered {
    /// Creates a view of `uuid`, or returns `None` if `uuid` is not a UUIDv6.
    pub const fn new(uuid: Uuid) -> Option<Self> {
        match uuid.version() {
            Some(6) => Some(Self(uuid)),
            _ => None,
        }
    }

    /// Returns the underlying UUID.
    pub const fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the 60-bit timestamp as the number of 100-nanosecond intervals since
    /// 1582-10-15T00:00:00Z.
    pub const fn raw_timestamp(&self) -> u64 {
        let b = self.0.as_bytes();
        (b[0] as u64) << 52
            | (b[1] as u64) << 44
            | (b[2] as u64) << 36
            | (b[3] as u64) << 28
            | (b[4] as u64) << 20
            | (b[5] as u64) << 12
            | ((b[6] & 0x0f) as u64) << 8
            | b[7] as u64
    }

    /// Returns the timestamp as a duration since the Unix epoch, or `None` if the timestamp
    /// precedes 1970-01-01T00:00:00Z.
    pub const fn timestamp(&self) -> Option<Duration> {
        timestamp::unix_from_ticks(self.raw_timestamp())
    }

    /// Returns the timestamp as a [`SystemTime`](std::time::SystemTime).
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn system_time(&self) -> std::time::SystemTime {
        use std::time::UNIX_EPOCH;
        match self.timestamp() {
            Some(since_epoch) => UNIX_EPOCH + since_epoch,
            None => UNIX_EPOCH - timestamp::unix_from_ticks_before_epoch(self.raw_timestamp()),
        }
    }

    /// Returns the 14-bit clock sequence.
    pub const fn sequence(&self) -> u16 {
        let b = self.0.as_bytes();
        ((b[8] & 0x3f) as u16) << 8 | b[9] as u16
    }

    /// Returns the 48-bit node identifier.
    pub const fn node(&self) -> u64 {
        let b = self.0.as_bytes();
        (b[10] as u64) << 40
            | (b[11] as u64) << 32
            | (b[12] as u64) << 24
            | (b[13] as u64) << 16
            | (b[14] as u64) << 8
            | b[15] as u64
    }
}

impl Components for TimeOrdered {
    fn from_uuid(uuid: Uuid) -> Option<Self> {
        Self::new(uuid)
    }
}

impl From<TimeOrdered> for Uuid {
    fn from(src: TimeOrdered) -> Self {
        src.0
    }
}
