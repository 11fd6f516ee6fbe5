//! Square roots modulo 2^32.
//!
//! Inverting one checksum step means solving `u * u ≡ v - c (mod 2^32)`.
//! Whether `x` squares to `a` modulo `2^(k+1)` depends only on `x mod 2^(k+1)`,
//! and every root modulo `2^(k+1)` reduces to a root modulo `2^k`. Roots are
//! therefore found by lifting candidates one bit at a time, keeping those
//! whose square still agrees with `a` on the low `k + 1` bits.

use alloc::vec::Vec;

use crate::checksum::step;

/// Every `x` with `x * x ≡ a (mod 2^32)`, in ascending order.
///
/// Odd `a` has roots only when `a ≡ 1 (mod 8)`, and then exactly four.
/// Zero has 65536 roots, the multiples of `2^16`.
pub fn sqrt_mod_2_32(a: u32) -> Vec<u32> {
    let mut roots: Vec<u32> = Vec::from([0]);
    let mut next = Vec::new();

    for bit in 0..u32::BITS {
        let mask = u32::MAX >> (u32::BITS - 1 - bit);
        let target = a & mask;
        next.clear();
        for &r in &roots {
            for x in [r, r | (1 << bit)] {
                if x.wrapping_mul(x) & mask == target {
                    next.push(x);
                }
            }
        }
        core::mem::swap(&mut roots, &mut next);
        if roots.is_empty() {
            break;
        }
    }

    roots.sort_unstable();
    roots
}

/// Every accumulator `u` with `step(u, byte) == v`, in ascending unsigned order.
pub fn predecessors(v: i32, byte: u8) -> Vec<i32> {
    let square = v.wrapping_sub(i32::from(byte as i8)) as u32;
    let roots = sqrt_mod_2_32(square);
    debug_assert!(roots.iter().all(|&u| step(u as i32, byte) == v));
    roots.into_iter().map(|u| u as i32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::SEED;

    #[test]
    fn roots_of_one() {
        assert_eq!(
            sqrt_mod_2_32(1),
            vec![1, 0x7FFF_FFFF, 0x8000_0001, 0xFFFF_FFFF]
        );
    }

    #[test]
    fn odd_residues_need_one_mod_eight() {
        for a in [3u32, 5, 7, 11, 13, 15, 0xFFFF_FFFF] {
            assert!(sqrt_mod_2_32(a).is_empty(), "{a} should have no roots");
        }
        for a in [9u32, 17, 25, 0x1234_5671] {
            let roots = sqrt_mod_2_32(a);
            assert_eq!(roots.len(), 4, "{a}");
            for r in roots {
                assert_eq!(r.wrapping_mul(r), a);
            }
        }
    }

    #[test]
    fn even_residues() {
        // 2 = 2 * odd: odd power of two, no roots.
        assert!(sqrt_mod_2_32(2).is_empty());
        let roots = sqrt_mod_2_32(4);
        assert_eq!(roots.len(), 8);
        assert_eq!(roots[0], 2);
        assert!(roots.iter().all(|r| r.wrapping_mul(*r) == 4));
    }

    #[test]
    fn zero_has_all_multiples_of_two_pow_sixteen() {
        let roots = sqrt_mod_2_32(0);
        assert_eq!(roots.len(), 1 << 16);
        assert!(roots.iter().all(|r| r % (1 << 16) == 0));
    }

    #[test]
    fn squares_always_have_their_root() {
        let mut x: u32 = 0x9E37_79B9;
        for _ in 0..256 {
            x = x.wrapping_mul(0x0001_0DCD).wrapping_add(0x3C6E_F372);
            let roots = sqrt_mod_2_32(x.wrapping_mul(x));
            assert!(roots.contains(&x), "{x:#x} missing from its own square's roots");
        }
    }

    #[test]
    fn predecessors_invert_step() {
        let v = step(SEED, b'h');
        let preds = predecessors(v, b'h');
        assert!(preds.contains(&SEED));
        for u in preds {
            assert_eq!(step(u, b'h'), v);
        }
    }

    #[test]
    fn predecessors_with_signed_byte() {
        let v = step(-77_777, 0xF0);
        assert!(predecessors(v, 0xF0).contains(&-77_777));
    }
}
