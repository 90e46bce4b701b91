//! Node identity source: link-layer address discovery and the 48-bit `node`
//! field.

/// Largest value representable in the 48-bit `node` field.
pub const MAX_NODE: u64 = (1 << 48) - 1;

/// A trait that defines the node identity source interface for
/// [`UuidGenerator`](crate::UuidGenerator).
///
/// The time-based generators read the 48-bit `node` field value through this
/// trait, so the discovery mechanism can be swapped for a fixed address in
/// tests.
pub trait Node {
    /// Returns the 48-bit `node` field value, or 0 when no address is
    /// available.
    fn node48(&mut self) -> u64;
}

/// A fixed node value, masked to the low 48 bits; mainly for testing.
impl Node for u64 {
    fn node48(&mut self) -> u64 {
        *self & MAX_NODE
    }
}

/// Folds a raw address into the 48-bit `node` value: the first six bytes
/// interpreted as a big-endian integer, with shorter sequences left-padded
/// with zeros.
pub const fn fold48(bytes: &[u8]) -> u64 {
    let mut node = 0;
    let mut i = 0;
    while i < bytes.len() && i < 6 {
        node = (node << 8) | bytes[i] as u64;
        i += 1;
    }
    node
}

/// A node source backed by the host's first link-layer address, discovered
/// once per process and cached.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct HostNode;

#[cfg(feature = "std")]
impl Node for HostNode {
    fn node48(&mut self) -> u64 {
        mac48()
    }
}

/// Looks for the first link-layer address of any network interface.
///
/// Loopback interfaces and all-zero addresses are skipped. Every failure mode
/// (no adapters, no usable address, enumeration error) collapses to `None`;
/// this lookup never raises an error.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn discover_mac() -> Option<Vec<u8>> {
    for iface in pnet_datalink::interfaces() {
        if iface.is_loopback() {
            continue;
        }
        if let Some(mac) = iface.mac {
            let octets = mac.octets();
            if octets.iter().any(|&b| b != 0) {
                return Some(octets.to_vec());
            }
        }
    }
    None
}

/// Returns the host's 48-bit node address, or 0 when discovery fails.
///
/// The first call performs the interface lookup and the result is cached for
/// the life of the process; the absence of an address degrades the value to
/// 0 rather than reporting an error.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn mac48() -> u64 {
    static NODE: std::sync::OnceLock<u64> = std::sync::OnceLock::new();
    *NODE.get_or_init(|| discover_mac().map_or(0, |bytes| fold48(&bytes)))
}
