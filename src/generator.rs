//! UUID generator and related types.

use rand::RngCore;

use crate::clock::{TickClock, GREGORIAN_UNIX_OFFSET};
use crate::node::Node;
use crate::Uuid;

/// Represents a UUID generator that bundles the tick clock, the random number
/// source, and the node identity source consumed by the three construction
/// algorithms.
///
/// This type provides the interface to customize each input of the
/// generators: substitute the random number generator, feed fake clock
/// readings through the `_core` methods, and replace the node source with a
/// fixed address (a plain `u64` implements [`Node`]). It also helps control
/// the scope of the non-decreasing tick guarantee, which holds per instance.
/// The following example shares one instance process-wide (cross-thread)
/// using Rust's standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuid014::{node::HostNode, UuidGenerator};
///
/// let g = sync::Arc::new(sync::Mutex::new(UuidGenerator::new(
///     rand::rngs::OsRng,
///     HostNode,
/// )));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate_v1(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct UuidGenerator<R, N> {
    clock: TickClock,

    /// Random number generator used by `generate_v4`.
    rng: R,

    /// Node identity source used by the time-based generators.
    node: N,
}

impl<R: RngCore, N: Node> UuidGenerator<R, N> {
    /// Creates a generator instance.
    pub const fn new(rng: R, node: N) -> Self {
        Self {
            clock: TickClock::new(),
            rng,
            node,
        }
    }

    /// Generates a new version 4 UUID from two random words.
    ///
    /// No clock or node state is touched; concurrent use only needs the
    /// random number source to be safe for it.
    pub fn generate_v4(&mut self) -> Uuid {
        Uuid::from_words_v4(self.rng.next_u64(), self.rng.next_u64())
    }

    /// Generates a new version 1 UUID from the current wall-clock reading.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn generate_v1(&mut self) -> Uuid {
        self.generate_v1_core(crate::clock::unix_100ns_now())
    }

    /// Generates a new version 1 UUID from the `unix_100ns` reading passed.
    ///
    /// The tick is the reading shifted to the Gregorian epoch, filtered
    /// through the monotonic clock; the 14-bit clock sequence is re-derived
    /// from the low bits of the tick rather than an independent counter. The
    /// result is deterministic given the tick and the node value.
    pub fn generate_v1_core(&mut self, unix_100ns: u64) -> Uuid {
        let tick = self.clock.next_tick_core(unix_100ns + GREGORIAN_UNIX_OFFSET);
        Uuid::from_fields(1, tick, (tick & 0x3fff) as u16, self.node.node48())
    }

    /// Generates a new version 0 UUID from the current wall-clock reading
    /// and the calling process ID.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn generate_v0(&mut self) -> Uuid {
        self.generate_v0_core(crate::clock::unix_100ns_now(), std::process::id() as u16)
    }

    /// Generates a new version 0 UUID from the `unix_100ns` reading and
    /// `pid` passed.
    ///
    /// Version 0 packs time exactly like version 1 but counts ticks from the
    /// Unix epoch, which wraps centuries later, and carries the low 16 bits
    /// of the process ID where version 1 carries the tick-derived clock
    /// sequence.
    pub fn generate_v0_core(&mut self, unix_100ns: u64, pid: u16) -> Uuid {
        let tick = self.clock.next_tick_core(unix_100ns);
        Uuid::from_fields(0, tick, pid, self.node.node48())
    }
}
