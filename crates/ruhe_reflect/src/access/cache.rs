use alloc::boxed::Box;
use core::any::TypeId;
use core::hash::{Hash, Hasher};
use std::sync::{PoisonError, RwLock};

use ruhe_utils::hash::{Equivalent, HashMap};

use crate::access::MemberKind;
use crate::info::StructInfo;

// -----------------------------------------------------------------------------
// Resolution

/// Where a member lives relative to the type it was looked up on.
///
/// `hops` are the base field indices to follow, `owner` is the struct
/// declaring the member and `index` its position among the owner's
/// fields or properties.
#[derive(Clone, Debug)]
pub(crate) struct Resolution {
    pub hops: Box<[usize]>,
    pub owner: &'static StructInfo,
    pub index: usize,
}

// -----------------------------------------------------------------------------
// Keys

#[derive(PartialEq, Eq)]
struct MemberKey {
    type_id: TypeId,
    kind: MemberKind,
    name: Box<str>,
}

// Borrowed form of `MemberKey`, so lookups do not allocate.
struct MemberKeyRef<'a> {
    type_id: TypeId,
    kind: MemberKind,
    name: &'a str,
}

// Both keys must hash identically.
impl Hash for MemberKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        MemberKeyRef {
            type_id: self.type_id,
            kind: self.kind,
            name: &self.name,
        }
        .hash(state);
    }
}

impl Hash for MemberKeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.kind.hash(state);
        self.name.hash(state);
    }
}

impl Equivalent<MemberKey> for MemberKeyRef<'_> {
    #[inline]
    fn equivalent(&self, key: &MemberKey) -> bool {
        self.type_id == key.type_id && self.kind == key.kind && self.name == &*key.name
    }
}

// -----------------------------------------------------------------------------
// MemberCache

/// Memoized member resolutions, misses included.
///
/// Type information is static, so entries never go stale.
pub(crate) struct MemberCache {
    table: RwLock<HashMap<MemberKey, Option<Resolution>>>,
}

impl MemberCache {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(HashMap::default()),
        }
    }

    /// Returns the cached resolution, or runs `resolve` and caches its result.
    pub fn get_or_resolve(
        &self,
        type_id: TypeId,
        kind: MemberKind,
        name: &str,
        resolve: impl FnOnce() -> Option<Resolution>,
    ) -> Option<Resolution> {
        let key = MemberKeyRef {
            type_id,
            kind,
            name,
        };

        if let Some(hit) = self
            .table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            log::trace!("member cache hit: {kind} `{name}`");
            return hit.clone();
        }

        log::trace!("member cache miss: {kind} `{name}`");
        let resolved = resolve();
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                MemberKey {
                    type_id,
                    kind,
                    name: name.into(),
                },
                resolved.clone(),
            );
        resolved
    }

    pub fn len(&self) -> usize {
        self.table.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::MemberCache;
    use crate::access::MemberKind;

    #[test]
    fn misses_are_cached() {
        let cache = MemberCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            let found = cache.get_or_resolve(TypeId::of::<u8>(), MemberKind::Field, "x", || {
                calls += 1;
                None
            });
            assert!(found.is_none());
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_are_distinct() {
        let cache = MemberCache::new();
        let id = TypeId::of::<u8>();
        cache.get_or_resolve(id, MemberKind::Field, "x", || None);
        cache.get_or_resolve(id, MemberKind::Property, "x", || None);
        cache.get_or_resolve(id, MemberKind::Field, "y", || None);
        cache.get_or_resolve(TypeId::of::<u16>(), MemberKind::Field, "x", || None);
        assert_eq!(cache.len(), 4);
    }
}
