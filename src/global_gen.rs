//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of the process-wide global generator, creating one
/// if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("uuid014: could not lock global generator")
}

/// Generates a version 0 UUID object.
///
/// Version 0 packs the current time as 100-nanosecond intervals since the
/// Unix epoch together with the low 16 bits of the process ID and the host's
/// 48-bit node address (0 when none is found). This function employs a global
/// generator guarded by a mutex, so ticks never decrease across threads.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid014::uuid0();
/// println!("{}", uuid); // e.g., "c5e29f05-d13c-003f-8d51-28d244aadb75"
/// ```
pub fn uuid0() -> Uuid {
    lock_global_gen().get_mut().generate_v0()
}

/// Generates a version 1 UUID object.
///
/// Version 1 packs the current time as 100-nanosecond intervals since the
/// Gregorian reform epoch together with a tick-derived 14-bit clock sequence
/// and the host's 48-bit node address (0 when none is found). This function
/// employs a global generator guarded by a mutex, so ticks never decrease
/// across threads.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid014::uuid1();
/// println!("{}", uuid); // e.g., "d9428fa3-b3c4-11f2-a9f3-28d244aadb75"
///
/// let uuid_string: String = uuid014::uuid1().to_string();
/// ```
pub fn uuid1() -> Uuid {
    lock_global_gen().get_mut().generate_v1()
}

/// Generates a version 4 UUID object.
///
/// All 122 non-version, non-variant bits are drawn from the global random
/// number generator. On Unix, this function resets the generator when the
/// process ID changes (i.e., upon process forks) to prevent collisions across
/// processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid014::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate_v4()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::UuidGenerator;
    use crate::node::HostNode;

    /// The type alias for the random number generator of the global
    /// generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with the
    /// [`ReseedingRng`] wrapper to emulate the strategy used by
    /// [`rand::rngs::ThreadRng`].
    pub type GlobalGenRng = ReseedingRng<ChaCha12Core, OsRng>;

    /// A thin wrapper to reset the state when the process ID changes (i.e.,
    /// upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: UuidGenerator<GlobalGenRng, HostNode>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let rng = ReseedingRng::new(
                ChaCha12Core::from_rng(OsRng)
                    .expect("uuid014: could not initialize global generator"),
                1024 * 64,
                OsRng,
            );
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: UuidGenerator::new(rng, HostNode),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`UuidGenerator`]
        /// instance, resetting the generator state on Unix if the process ID
        /// has changed.
        pub fn get_mut(&mut self) -> &mut UuidGenerator<GlobalGenRng, HostNode> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}

#[cfg(test)]
mod tests_v1 {
    use super::uuid1;
    use crate::clock::GREGORIAN_UNIX_OFFSET;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<crate::Uuid> = (0..N_SAMPLES).map(|_| uuid1()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-1[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(&e.to_string()));
            }
        });
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        SAMPLES.with(|samples| {
            for e in samples {
                assert_eq!(e.version(), 1);
                assert_eq!(e.variant(), 0b10);
            }
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use crate::clock::unix_100ns_now;
        for _ in 0..10_000 {
            let now = unix_100ns_now() as i64;
            let timestamp = (uuid1().timestamp_100ns() - GREGORIAN_UNIX_OFFSET) as i64;
            // within ten seconds; the monotonic fallback may hold ticks back
            assert!((now - timestamp).abs() < 100_000_000);
        }
    }

    /// Derives the clock sequence from the low bits of the tick
    #[test]
    fn derives_the_clock_sequence_from_the_low_bits_of_the_tick() {
        SAMPLES.with(|samples| {
            for e in samples {
                let expected = ((e.timestamp_100ns() & 0x3fff) | 0x8000) as u16;
                assert_eq!(e.clock_seq_or_pid(), expected);
            }
        });
    }

    /// Shares one node value across every identifier
    #[test]
    fn shares_one_node_value_across_every_identifier() {
        let node = crate::node::mac48();
        SAMPLES.with(|samples| {
            for e in samples {
                assert_eq!(e.node(), node);
            }
        });
    }

    /// Yields non-decreasing timestamps in generation order
    #[test]
    fn yields_non_decreasing_timestamps_in_generation_order() {
        SAMPLES.with(|samples| {
            for i in 1..samples.len() {
                assert!(samples[i - 1].timestamp_100ns() <= samples[i].timestamp_100ns());
            }
        });
    }

    /// Round-trips both textual encodings
    #[test]
    fn round_trips_both_textual_encodings() {
        SAMPLES.with(|samples| {
            for e in samples.iter().take(10_000) {
                assert_eq!(crate::rebuild(&e.encode()).unwrap(), *e);
                assert_eq!(crate::rebuild(&e.base62()).unwrap(), *e);
            }
        });
    }
}
