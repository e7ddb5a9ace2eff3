use crate::Maybe;
use alloc::collections::BTreeMap;
use core::borrow::Borrow;
#[cfg(feature = "std")]
use core::hash::{BuildHasher, Hash};
#[cfg(feature = "std")]
use std::collections::HashMap;

/// A keyed collection that a [`Maybe`] can look into with [`Maybe::get`].
pub trait Lookup<Q: ?Sized> {
    /// The type stored under each key.
    type Value;

    /// Returns the value stored under `key`, if there is one.
    fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

#[cfg(feature = "std")]
impl<K, V, S, Q> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<M> Maybe<M> {
    /// Looks up `key` in the held map.
    ///
    /// Returns `None` if there is no map, or if the key is missing.
    ///
    /// ```rust
    /// use option_result::Maybe;
    /// use std::collections::HashMap;
    ///
    /// let headers = Maybe::Some(HashMap::from([("accept", "text/html")]));
    /// assert_eq!(headers.get("accept"), Maybe::Some(&"text/html"));
    /// assert_eq!(headers.get("cookie"), Maybe::None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Maybe<&<M as Lookup<Q>>::Value>
    where
        M: Lookup<Q>,
        Q: ?Sized,
    {
        self.as_ref().and_then(|map| Maybe::from(map.lookup(key)))
    }

    /// Looks up `key` in the held map, falling back to `default`.
    ///
    /// Always returns `Some`: the stored value if there is one, otherwise `default`.
    pub fn get_or<'a, Q>(
        &'a self,
        key: &Q,
        default: &'a <M as Lookup<Q>>::Value,
    ) -> Maybe<&'a <M as Lookup<Q>>::Value>
    where
        M: Lookup<Q>,
        Q: ?Sized,
    {
        Maybe::Some(self.get(key).unwrap_or(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn looks_up_btree_keys_by_borrowed_form() {
        let map: BTreeMap<String, i32> = [(String::from("a"), 1)].into_iter().collect();
        let held = Maybe::Some(map);
        assert_eq!(held.get("a"), Maybe::Some(&1));
        assert_eq!(held.get("b"), Maybe::None);
    }

    #[test]
    fn missing_map_yields_none() {
        let empty: Maybe<BTreeMap<&str, i32>> = Maybe::None;
        assert_eq!(empty.get("a"), Maybe::None);
        assert_eq!(empty.get_or("a", &5), Maybe::Some(&5));
    }

    #[test]
    fn get_or_prefers_the_stored_value() {
        let held = Maybe::Some(BTreeMap::from([("hi", 1)]));
        assert_eq!(held.get_or("hi", &12), Maybe::Some(&1));
        assert_eq!(held.get_or("bye", &12), Maybe::Some(&12));
    }

    #[cfg(feature = "std")]
    #[test]
    fn looks_up_hash_map_keys() {
        use alloc::vec::Vec;

        let held = Maybe::Some(HashMap::from([(1u8, Vec::from([1, 2]))]));
        assert_eq!(held.get(&1u8).map(Vec::len), Maybe::Some(2));
        assert_eq!(held.get(&2u8), Maybe::None);
    }
}
