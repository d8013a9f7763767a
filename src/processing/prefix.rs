//! Prefix length arithmetic.
//!
//! Masks, network and broadcast IDs, usable address range and subnet size,
//! all derived from an address and a [`PrefixLength`].

use crate::models::{BitAddress, PrefixLength, MAX_LENGTH};

/// Convert a prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use cidr_brewer::models::PrefixLength;
/// use cidr_brewer::processing::subnet_mask;
/// let mask = subnet_mask(PrefixLength::new(28).unwrap());
/// assert_eq!(mask.to_string(), "11111111111111111111111111110000");
/// ```
pub fn subnet_mask(len: PrefixLength) -> BitAddress {
    let right_len = MAX_LENGTH - len.get();
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    BitAddress::new(mask as u32)
}

fn host_mask(len: PrefixLength) -> u32 {
    !subnet_mask(len).bits()
}

/// Keep the first `len` bits of `addr` and clear the rest.
pub fn network_id(addr: BitAddress, len: PrefixLength) -> BitAddress {
    BitAddress::new(addr.bits() & subnet_mask(len).bits())
}

/// Keep the first `len` bits of `addr` and set the rest.
pub fn broadcast_id(addr: BitAddress, len: PrefixLength) -> BitAddress {
    BitAddress::new(addr.bits() | host_mask(len))
}

/// Network ID with the last bit set.
pub fn first_available(addr: BitAddress, len: PrefixLength) -> BitAddress {
    BitAddress::new(network_id(addr, len).bits() | 1)
}

/// Broadcast ID with the last bit cleared.
pub fn last_available(addr: BitAddress, len: PrefixLength) -> BitAddress {
    BitAddress::new(broadcast_id(addr, len).bits() & !1)
}

/// Number of usable hosts, `2^(32 - len) - 2`.
///
/// Not clamped: a /31 gives 0 and a /32 gives -1.
pub fn subnet_size(len: PrefixLength) -> i64 {
    (1i64 << len.host_bits()) - 2
}

/// True if the host part of `addr` is all ones or all zeros.
///
/// A /32 has an empty host part, which counts as reserved.
pub fn is_reserved(addr: BitAddress, len: PrefixLength) -> bool {
    let host_mask = host_mask(len);
    let host_bits = addr.bits() & host_mask;
    host_bits == 0 || host_bits == host_mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(bits: &str) -> BitAddress {
        BitAddress::from_bit_str(bits).unwrap()
    }

    fn len(len: u8) -> PrefixLength {
        PrefixLength::new(len).unwrap()
    }

    fn all_lengths() -> impl Iterator<Item = PrefixLength> {
        (0..=MAX_LENGTH).map(len)
    }

    const SAMPLE: &str = "11001000000101110001000001011100";

    #[test]
    fn test_subnet_mask() {
        assert_eq!(
            subnet_mask(len(28)).to_string(),
            "11111111111111111111111111110000"
        );
        assert_eq!(subnet_mask(len(0)).bits(), 0x00000000);
        assert_eq!(subnet_mask(len(8)).bits(), 0xFF000000);
        assert_eq!(subnet_mask(len(24)).bits(), 0xFFFFFF00);
        assert_eq!(subnet_mask(len(32)).bits(), 0xFFFFFFFF);
        for p in all_lengths() {
            let mask = subnet_mask(p);
            assert_eq!(mask.count_ones(), p.get() as u32);
            assert_eq!(mask.bits().leading_ones(), p.get() as u32);
        }
    }

    #[test]
    fn test_network_id() {
        assert_eq!(
            network_id(addr(SAMPLE), len(28)).to_string(),
            "11001000000101110001000001010000"
        );
        assert_eq!(network_id(addr(SAMPLE), len(0)).bits(), 0);
        assert_eq!(network_id(addr(SAMPLE), len(32)), addr(SAMPLE));
    }

    #[test]
    fn test_network_id_properties() {
        let a = addr(SAMPLE);
        for p in all_lengths() {
            let net = network_id(a, p);
            let shift = p.host_bits() as u32;
            assert_eq!(
                net.bits().checked_shr(shift).unwrap_or(0),
                a.bits().checked_shr(shift).unwrap_or(0)
            );
            assert_eq!(net.bits() & !subnet_mask(p).bits(), 0);
            assert_eq!(network_id(net, p), net);
        }
    }

    #[test]
    fn test_broadcast_id() {
        assert_eq!(
            broadcast_id(addr(SAMPLE), len(28)).to_string(),
            "11001000000101110001000001011111"
        );
        assert_eq!(broadcast_id(addr(SAMPLE), len(0)).bits(), u32::MAX);
        assert_eq!(broadcast_id(addr(SAMPLE), len(32)), addr(SAMPLE));
        for p in all_lengths() {
            let host = !subnet_mask(p).bits();
            assert_eq!(broadcast_id(addr(SAMPLE), p).bits() & host, host);
        }
    }

    #[test]
    fn test_first_available() {
        assert_eq!(
            first_available(addr(SAMPLE), len(28)).to_string(),
            "11001000000101110001000001010001"
        );
    }

    #[test]
    fn test_last_available() {
        assert_eq!(
            last_available(addr(SAMPLE), len(28)).to_string(),
            "11001000000101110001000001011110"
        );
    }

    #[test]
    fn test_subnet_size() {
        assert_eq!(subnet_size(len(28)), 14);
        assert_eq!(subnet_size(len(24)), 254);
        assert_eq!(subnet_size(len(0)), 4294967294);
        // /31 and /32 keep the raw formula
        assert_eq!(subnet_size(len(31)), 0);
        assert_eq!(subnet_size(len(32)), -1);
    }

    #[test]
    fn test_is_reserved_addr() {
        assert!(!is_reserved(addr(SAMPLE), len(28)));
    }

    #[test]
    fn test_is_reserved_network_id() {
        assert!(is_reserved(addr("11001000000101110001000001010000"), len(28)));
    }

    #[test]
    fn test_is_reserved_broadcast_id() {
        assert!(is_reserved(addr("01111101001011110010000000101111"), len(28)));
    }

    #[test]
    fn test_is_reserved_ids_for_all_lengths() {
        let a = addr(SAMPLE);
        for p in (0..MAX_LENGTH).map(len) {
            assert!(is_reserved(network_id(a, p), p));
            assert!(is_reserved(broadcast_id(a, p), p));
        }
    }

    #[test]
    fn test_is_reserved_host_prefixes() {
        // empty host part is always reserved
        assert!(is_reserved(addr(SAMPLE), len(32)));
        // a single host bit is always uniform
        assert!(is_reserved(addr(SAMPLE), len(31)));
        assert!(is_reserved(addr(SAMPLE), len(30)));
        assert!(!is_reserved(addr(SAMPLE), len(29)));
    }
}
