//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::generator::{self, StdSystemTime, TimeSource};
use crate::{timestamp, Uuid};
use inner::{GlobalClock, GlobalRng};

/// Returns the lock handle of process-wide clock sequence, creating one if none exists.
fn lock_global_clock() -> sync::MutexGuard<'static, GlobalClock> {
    static G: sync::OnceLock<sync::Mutex<GlobalClock>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("uuid6: could not lock global generator")
}

/// Generates a UUIDv6 object with a random node ID.
///
/// This function employs a global generator and guarantees the process-wide monotonic order of
/// UUIDs generated within the same 100-nanosecond tick. On Unix, this function reseeds the clock
/// sequence when the process ID changes (i.e., upon process forks) to prevent collisions across
/// processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid6::uuid6();
/// println!("{}", uuid); // e.g., "1ef3b2a4-6c59-6e1a-b2c7-5b1f0e3d4a96"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid6::uuid6().to_string();
/// ```
pub fn uuid6() -> Uuid {
    uuid6_with_node(generator::random_node(&mut GlobalRng))
}

/// Generates a UUIDv6 object with the `node` passed.
///
/// # Panics
///
/// Panics if `node` is not a 48-bit unsigned integer.
///
/// # Examples
///
/// ```rust
/// use uuid6::TimeOrdered;
///
/// let uuid = uuid6::uuid6_with_node(0x0242_ac11_0002);
/// assert_eq!(TimeOrdered::new(uuid).unwrap().node(), 0x0242_ac11_0002);
/// ```
pub fn uuid6_with_node(node: u64) -> Uuid {
    generator::check_node(node);
    let observed = timestamp::ticks_from_unix(StdSystemTime.unix_time());
    let (timestamp, sequence) = lock_global_clock().get_mut().advance(observed);

    #[cfg(feature = "tracing")]
    if timestamp != observed {
        tracing::trace!(observed, timestamp, sequence, "uuid6: clock did not advance");
    }

    Uuid::from_fields_v6(timestamp, sequence, node)
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid6::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    generator::random_v4(&mut GlobalRng)
}

impl Uuid {
    /// Generates a random UUID (UUIDv4).
    ///
    /// Unlike [`Default::default()`], which returns the Nil UUID, this function returns a new
    /// random value on each call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// assert_ne!(Uuid::new(), Uuid::new());
    /// assert_eq!(Uuid::new().version(), Some(4));
    /// ```
    pub fn new() -> Self {
        uuid4()
    }
}

mod inner {
    use rand::rngs::OsRng;
    use rand::RngCore;

    use crate::generator::{ClockSequence, RandSource};

    /// The random number generator of the global generator, which reads from the operating
    /// system's random data source.
    #[derive(Debug)]
    pub struct GlobalRng;

    impl RandSource for GlobalRng {
        fn next_u64(&mut self) -> u64 {
            OsRng.next_u64()
        }
    }

    /// A thin wrapper to reseed the clock sequence when the process ID changes (i.e., upon Unix
    /// forks).
    #[derive(Debug)]
    pub struct GlobalClock {
        #[cfg(unix)]
        pid: u32,
        clock: ClockSequence,
    }

    impl Default for GlobalClock {
        fn default() -> Self {
            let clock = ClockSequence::new(GlobalRng.next_u64());
            #[cfg(feature = "tracing")]
            tracing::debug!(?clock, "uuid6: initialized global clock sequence");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                clock,
            }
        }
    }

    impl GlobalClock {
        /// Returns a mutable reference to the inner [`ClockSequence`] instance, reseeding the
        /// clock sequence on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut ClockSequence {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.clock
        }
    }
}


#[cfg(test)]
mod tests_v4 {
    use super::uuid4;
    use crate::{Uuid, Variant};

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| uuid4().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..10_000 {
            let e = uuid4();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(4));
        }
    }

    /// Creates random UUIDs with the no-argument constructor
    #[test]
    fn creates_random_uuids_with_the_no_argument_constructor() {
        let e = Uuid::new();
        assert_eq!(e.version(), Some(4));
        assert_ne!(e, Uuid::new());
        assert_eq!(Uuid::default(), Uuid::NIL);
    }
}
