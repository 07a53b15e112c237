//! UUIDv6 generator and related types.

#[cfg(not(feature = "std"))]
use core as std;

use std::time::Duration;

use crate::timestamp::{self, MAX_TIMESTAMP};
use crate::Uuid;

pub mod with_rand08;


/// Maximum value of the 14-bit clock sequence field.
const MAX_SEQUENCE: u16 = (1 << 14) - 1;

/// Maximum value of the 48-bit node field.
const MAX_NODE: u64 = (1 << 48) - 1;

/// The IEEE 802 multicast bit of a node ID, which marks the node as randomly generated.
const MULTICAST_BIT: u64 = 1 << 40;

/// A trait that defines the minimum random number generator interface for [`V6Generator`].
pub trait RandSource {
    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

/// A trait that defines the minimum system clock interface for [`V6Generator`].
pub trait TimeSource {
    /// Returns the current time as a duration since the Unix epoch.
    fn unix_time(&mut self) -> Duration;
}

/// The default [`TimeSource`] that reads the current time from [`std::time::SystemTime`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl TimeSource for StdSystemTime {
    fn unix_time(&mut self) -> Duration {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
    }
}

/// The last timestamp and clock sequence issued by a generator.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct ClockSequence {
    timestamp: u64,
    sequence: u16,
}

impl ClockSequence {
    /// Creates a state that starts the clock sequence at the lower 14 bits of `seed`.
    pub(crate) const fn new(seed: u64) -> Self {
        Self {
            timestamp: 0,
            sequence: seed as u16 & MAX_SEQUENCE,
        }
    }

    /// Returns the timestamp and clock sequence for a new UUID created at `timestamp`.
    ///
    /// The returned pair is greater than the one previously returned unless the 60-bit timestamp
    /// wraps around. A `timestamp` that does not exceed the stored one, whether the clock stalled
    /// or went backwards, reuses the stored timestamp with an incremented sequence.
    pub(crate) fn advance(&mut self, timestamp: u64) -> (u64, u16) {
        debug_assert!(timestamp <= MAX_TIMESTAMP);
        if timestamp > self.timestamp {
            self.timestamp = timestamp;
        } else {
            self.sequence = (self.sequence + 1) & MAX_SEQUENCE;
            if self.sequence == 0 {
                // increment timestamp at sequence overflow
                self.timestamp = (self.timestamp + 1) & MAX_TIMESTAMP;
            }
        }
        (self.timestamp, self.sequence)
    }
}

/// Returns a random 48-bit node ID with the multicast bit set.
pub(crate) fn random_node(rand: &mut impl RandSource) -> u64 {
    (rand.next_u64() & MAX_NODE) | MULTICAST_BIT
}

/// Generates a UUIDv4 object from two random `u64` values.
pub(crate) fn random_v4(rand: &mut impl RandSource) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&rand.next_u64().to_be_bytes());
    bytes[8..].copy_from_slice(&rand.next_u64().to_be_bytes());
    Uuid::from_random_bytes_v4(bytes)
}

/// Asserts that `node` fits in the 48-bit node field.
pub(crate) fn check_node(node: u64) {
    assert!(node <= MAX_NODE, "`node` must be a 48-bit unsigned integer");
}

/// Represents a UUIDv6 generator that encapsulates a clock sequence and guarantees the monotonic
/// order of UUIDs generated within the same 100-nanosecond tick.
///
/// This type provides the interface to customize the random number generator and system clock of
/// a UUIDv6 generator. Each instance keeps its own clock sequence, so it also helps control the
/// scope of guaranteed order of the generated UUIDs. The following example guarantees the
/// process-wide (cross-thread) monotonicity using Rust's standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuid6::V6Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V6Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Clock sequence
///
/// The 14-bit clock sequence starts at a random value when the generator is created and is not
/// reset when the clock moves forward. Whenever the clock reports a timestamp that is not greater
/// than the one of the immediately preceding UUID (because of a stalled or rewound clock), the
/// generator reuses the preceding timestamp and increments the clock sequence instead. When the
/// clock sequence wraps around, the generator advances the timestamp by one tick; therefore, the
/// timestamp may be slightly ahead of the real-time clock.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V6Generator<R, T = StdSystemTime> {
    clock: ClockSequence,

    /// The random number generator used by the generator.
    rand: R,

    /// The system clock used by the generator.
    time: T,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> V6Generator<R> {
    /// Creates a generator object with a specified random number generator and the system clock.
    pub fn new(rand: R) -> Self {
        Self::with_rand_and_time_sources(rand, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> V6Generator<R, T> {
    /// Creates a generator object with specified random number generator and system clock,
    /// seeding the clock sequence from the random number generator.
    pub fn with_rand_and_time_sources(mut rand: R, time: T) -> Self {
        Self {
            clock: ClockSequence::new(rand.next_u64()),
            rand,
            time,
        }
    }

    /// Generates a new UUIDv6 object from the current timestamp and a random node ID.
    ///
    /// The node ID has the multicast bit set to distinguish it from IEEE 802 MAC addresses.
    pub fn generate(&mut self) -> Uuid {
        let node = random_node(&mut self.rand);
        self.generate_with_node(node)
    }

    /// Generates a new UUIDv6 object from the current timestamp and the `node` passed.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a 48-bit unsigned integer.
    pub fn generate_with_node(&mut self, node: u64) -> Uuid {
        let timestamp = timestamp::ticks_from_unix(self.time.unix_time());
        self.generate_core(timestamp, node)
    }

    /// Generates a new UUIDv6 object from the `timestamp` and `node` passed.
    ///
    /// `timestamp` counts 100-nanosecond intervals since 1582-10-15T00:00:00Z. The UUID carries
    /// the preceding UUID's timestamp instead if `timestamp` is not greater than it.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit or `node` is not a 48-bit unsigned integer.
    pub fn generate_core(&mut self, timestamp: u64, node: u64) -> Uuid {
        assert!(
            timestamp <= MAX_TIMESTAMP,
            "`timestamp` must be a 60-bit unsigned integer"
        );
        check_node(node);
        let (timestamp, sequence) = self.clock.advance(timestamp);
        Uuid::from_fields_v6(timestamp, sequence, node)
    }

    /// Generates a new UUIDv4 object utilizing the random number generator inside.
    pub fn generate_v4(&mut self) -> Uuid {
        random_v4(&mut self.rand)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv6 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid6::V6Generator;
///
/// V6Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for V6Generator<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> std::iter::FusedIterator for V6Generator<R, T> {}

#[cfg(feature = "std")]
#[cfg(test)]
mod tests_generate_core {
    use super::tests::{ConstRand, FixedTime};
    use super::{V6Generator, MAX_SEQUENCE};
    use crate::TimeOrdered;

    const TS: u64 = 0x01ec_9414_c232_ab00;
    const NODE: u64 = 0x9f6b_dece_d846;

    fn fields(g: &mut V6Generator<ConstRand, FixedTime>, timestamp: u64) -> (u64, u16) {
        let e = TimeOrdered::new(g.generate_core(timestamp, NODE)).unwrap();
        assert_eq!(e.node(), NODE);
        (e.raw_timestamp(), e.sequence())
    }

    /// Generates increasing UUIDs even with decreasing or constant timestamp
    #[test]
    fn generates_increasing_uuids_even_with_decreasing_or_constant_timestamp() {
        let mut g = V6Generator::for_testing();
        let mut prev = g.generate_core(TS, NODE);
        assert_eq!(TimeOrdered::new(prev).unwrap().raw_timestamp(), TS);
        for i in 0..100_000u64 {
            let curr = g.generate_core(TS - i.min(4_000), NODE);
            assert!(prev < curr);
            prev = curr;
        }
        assert!(TimeOrdered::new(prev).unwrap().raw_timestamp() >= TS);
    }

    /// Recovers the timestamp, seeded sequence, and node passed
    #[test]
    fn recovers_the_timestamp_seeded_sequence_and_node_passed() {
        let mut g = V6Generator::with_rand_and_time_sources(ConstRand(0x33c8), FixedTime::EPOCH);
        let e = g.generate_core(TS, NODE);
        assert_eq!(&e.to_string(), "1ec9414c-232a-6b00-b3c8-9f6bdeced846");
        assert_eq!(fields(&mut g, TS + 1), (TS + 1, 0x33c8));
    }

    /// Keeps sequence while timestamp advances
    #[test]
    fn keeps_sequence_while_timestamp_advances() {
        let mut g = V6Generator::with_rand_and_time_sources(ConstRand(100), FixedTime::EPOCH);
        assert_eq!(fields(&mut g, TS), (TS, 100));
        assert_eq!(fields(&mut g, TS + 5), (TS + 5, 100));
        assert_eq!(fields(&mut g, TS + 5), (TS + 5, 101));
        assert_eq!(fields(&mut g, TS + 6), (TS + 6, 101));
    }

    /// Reuses previous timestamp upon clock rollback
    #[test]
    fn reuses_previous_timestamp_upon_clock_rollback() {
        let mut g = V6Generator::with_rand_and_time_sources(ConstRand(100), FixedTime::EPOCH);
        assert_eq!(fields(&mut g, TS), (TS, 100));
        assert_eq!(fields(&mut g, TS - 10_000_000), (TS, 101));
        assert_eq!(fields(&mut g, TS - 1), (TS, 102));
        assert_eq!(fields(&mut g, TS), (TS, 103));
        assert_eq!(fields(&mut g, TS + 1), (TS + 1, 103));
    }

    /// Increments timestamp at sequence overflow
    #[test]
    fn increments_timestamp_at_sequence_overflow() {
        let seed = MAX_SEQUENCE as u64;
        let mut g = V6Generator::with_rand_and_time_sources(ConstRand(seed), FixedTime::EPOCH);
        assert_eq!(fields(&mut g, TS), (TS, MAX_SEQUENCE));
        assert_eq!(fields(&mut g, TS), (TS + 1, 0));
        assert_eq!(fields(&mut g, TS + 1), (TS + 1, 1));
        assert_eq!(fields(&mut g, TS + 2), (TS + 2, 1));
    }

    /// Seeds sequence with the lower 14 bits of a random number
    #[test]
    fn seeds_sequence_with_the_lower_14_bits_of_a_random_number() {
        let mut g = V6Generator::with_rand_and_time_sources(ConstRand(u64::MAX), FixedTime::EPOCH);
        assert_eq!(fields(&mut g, TS), (TS, MAX_SEQUENCE));
    }

    /// Panics on out-of-range arguments
    #[test]
    #[should_panic(expected = "`node` must be a 48-bit unsigned integer")]
    fn panics_on_out_of_range_node() {
        V6Generator::for_testing().generate_core(TS, 1 << 48);
    }

    /// Panics on out-of-range timestamp
    #[test]
    #[should_panic(expected = "`timestamp` must be a 60-bit unsigned integer")]
    fn panics_on_out_of_range_timestamp() {
        V6Generator::for_testing().generate_core(1 << 60, NODE);
    }
}
