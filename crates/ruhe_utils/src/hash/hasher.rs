//! `FixedHasher` is `foldhash` with a fixed seed, so results are stable
//! across runs. `NoOpHasher` passes an already well-distributed `u64`
//! (such as a `TypeId`) straight through.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5255_4845_0D1F_3A77);

/// Hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state with a fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use ruhe_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("member");
/// let b = FixedHashState.hash_one("member");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// Hasher produced by [`NoOpHashState`].
///
/// `write_u64` stores the value as the hash. Other writes fold their bytes
/// in, so a single `write_u32(n)` and `write_u64(n)` agree.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(u64::from(*byte));
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Hash state whose hashers do not mix their input.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use ruhe_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(42_u64), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, Hasher};

    use super::{FixedHashState, NoOpHashState};

    #[test]
    fn noop_width_agnostic() {
        let mut a = NoOpHashState.build_hasher();
        a.write_u32(1234);
        let mut b = NoOpHashState.build_hasher();
        b.write_u64(1234);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn fixed_is_stable() {
        assert_eq!(
            FixedHashState.hash_one((1_u8, "a")),
            FixedHashState.hash_one((1_u8, "a")),
        );
        assert_ne!(FixedHashState.hash_one("a"), FixedHashState.hash_one("b"));
    }
}
