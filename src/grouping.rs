//! Insertion-ordered grouping store.
//!
//! [`Grouping`] keeps groups in the order their keys were first seen, and the
//! elements of each group in the order they arrived. Keys only need
//! [`PartialEq`]; lookup is a linear scan over the groups.
//!
//! # Examples
//!
//! ```rust
//! use iterables::prelude::*;
//!
//! let words = vec!["apple", "bean", "avocado", "corn", "beet"];
//! let by_letter = lazy(words).group_by(|w: &&str| w.chars().next());
//!
//! let keys: Vec<_> = by_letter.keys().cloned().collect();
//! assert_eq!(keys, vec![Some('a'), Some('b'), Some('c')]);
//! assert_eq!(by_letter.get(&Some('b')).map(|g| g.items()), Some(&["bean", "beet"][..]));
//! ```

use std::{convert::Infallible, fmt, slice, vec};

use crate::{cursor::Cursor, fault::fail_abort};

/// A key with the elements that share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    key: K,
    items: Vec<T>,
}

impl<K, T> Group<K, T> {
    /// Create an empty group.
    pub fn new(key: K) -> Self {
        Self {
            key,
            items: Vec::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Append an element at the end of the group.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split into key and elements.
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.items)
    }
}

impl<K, T> IntoIterator for Group<K, T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Groups in first-seen key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, T> {
    groups: Vec<Group<K, T>>,
}

impl<K, T> Default for Grouping<K, T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<K, T> Grouping<K, T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Group<K, T>> {
        self.groups.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.iter().map(Group::key)
    }

    /// Append a group at the end, without merging it into an existing group
    /// with an equal key. Lookups return the first match.
    pub fn add(&mut self, group: Group<K, T>) {
        self.groups.push(group);
    }
}

impl<K, T> Grouping<K, T>
where
    K: PartialEq,
{
    fn position(&self, key: &K) -> Option<usize> {
        self.groups.iter().position(|group| group.key == *key)
    }

    /// First group whose key equals `key`.
    pub fn get(&self, key: &K) -> Option<&Group<K, T>> {
        self.position(key).map(|index| &self.groups[index])
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Group<K, T>> {
        let index = self.position(key)?;
        self.groups.get_mut(index)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Append `item` to the group for `key`, opening a new group at the end
    /// when the key has not been seen yet.
    pub fn push(&mut self, key: K, item: T) {
        let index = match self.position(&key) {
            Some(index) => index,
            None => {
                self.groups.push(Group::new(key));
                self.groups.len() - 1
            }
        };
        self.groups[index].push(item);
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = Group<K, T>;
    type IntoIter = vec::IntoIter<Group<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a Group<K, T>;
    type IntoIter = slice::Iter<'a, Group<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<K, T> FromIterator<(K, T)> for Grouping<K, T>
where
    K: PartialEq,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut grouping = Grouping::new();
        for (key, item) in iter {
            grouping.push(key, item);
        }
        grouping
    }
}

/// Drain `cursor`, grouping its elements by `key_fn`.
pub fn group_cursor<C, K, F>(cursor: C, mut key_fn: F) -> Grouping<K, C::Item>
where
    C: Cursor,
    K: PartialEq,
    F: FnMut(&C::Item) -> K,
{
    match try_group_cursor(cursor, |item| Ok::<_, Infallible>(key_fn(item))) {
        Ok(grouping) => grouping,
        Err(never) => match never {},
    }
}

/// Drain `cursor`, grouping its elements by the fallible `key_fn`.
///
/// The first key failure aborts the whole grouping and is returned (see
/// [`FaultPolicy::FailAbort`](crate::fault::FaultPolicy::FailAbort)).
pub fn try_group_cursor<C, K, E, F>(mut cursor: C, mut key_fn: F) -> Result<Grouping<K, C::Item>, E>
where
    C: Cursor,
    K: PartialEq,
    E: fmt::Debug,
    F: FnMut(&C::Item) -> Result<K, E>,
{
    let mut grouping = Grouping::new();
    let mut count = 0usize;
    while cursor.has_next() {
        let Ok(item) = cursor.try_next() else {
            break;
        };
        let key = fail_abort(key_fn(&item))?;
        grouping.push(key, item);
        count += 1;
    }
    tracing::debug!(elements = count, groups = grouping.len(), "grouping complete");
    Ok(grouping)
}
