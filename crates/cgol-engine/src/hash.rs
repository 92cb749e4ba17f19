//! Grid fingerprinting.
//!
//! Uses FNV-1a for fast, deterministic hashing of grid state. The hash
//! is not cryptographically secure; it exists for cheap equality checks
//! in determinism tests and host-side change detection.

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a grid's dimensions and cells.
///
/// Dimensions are folded in first so that grids with the same bytes but
/// different shapes (3x4 vs 4x3) hash differently. Cell bytes are
/// normalised to 0/1 before hashing.
pub fn fingerprint(width: u32, height: u32, cells: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, width);
    hash = fnv1a_u32(hash, height);
    for &c in cells {
        hash = fnv1a_byte(hash, u8::from(c != 0));
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_is_part_of_the_hash() {
        let cells = [0u8; 12];
        assert_ne!(fingerprint(3, 4, &cells), fingerprint(4, 3, &cells));
    }

    #[test]
    fn single_cell_change_changes_hash() {
        let a = [0u8, 0, 0, 0];
        let b = [0u8, 0, 1, 0];
        assert_ne!(fingerprint(2, 2, &a), fingerprint(2, 2, &b));
    }

    #[test]
    fn nonzero_bytes_hash_like_one() {
        assert_eq!(fingerprint(2, 1, &[1, 0]), fingerprint(2, 1, &[200, 0]));
    }

    #[test]
    fn empty_grid_hash_is_stable() {
        assert_eq!(fingerprint(0, 0, &[]), fingerprint(0, 0, &[]));
        assert_ne!(fingerprint(0, 0, &[]), 0);
    }
}
