//! Hash containers on top of *hashbrown* and *foldhash*.
//!
//! The default state is [`FixedHashState`], so iteration order and hash
//! values only depend on the inserted data.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

pub use hashbrown::Equivalent;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

#[cfg(test)]
mod tests {
    use core::hash::{Hash, Hasher};

    use super::{Equivalent, HashMap};

    #[derive(PartialEq, Eq)]
    struct Owned([u8; 4], u16);

    impl Hash for Owned {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.0.as_slice().hash(state);
            self.1.hash(state);
        }
    }

    struct Borrowed<'a>(&'a [u8], u16);

    impl Hash for Borrowed<'_> {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.0.hash(state);
            self.1.hash(state);
        }
    }

    impl Equivalent<Owned> for Borrowed<'_> {
        fn equivalent(&self, key: &Owned) -> bool {
            self.0 == key.0.as_slice() && self.1 == key.1
        }
    }

    #[test]
    fn lookup_by_equivalent_key() {
        let mut map: HashMap<_, _> = HashMap::default();
        map.insert(Owned(*b"name", 1), 'a');
        map.insert(Owned(*b"name", 2), 'b');

        assert_eq!(map.get(&Borrowed(b"name", 2)), Some(&'b'));
        assert_eq!(map.get(&Borrowed(b"name", 3)), None);
        assert!(map.contains_key(&Borrowed(b"name", 1)));
    }
}
