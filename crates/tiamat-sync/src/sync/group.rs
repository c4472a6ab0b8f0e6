use std::fmt;

use super::resource::Synchronizable;

/// Aggregation view over same-kind synchronizable resources.
///
/// The group borrows its members; the concrete storage (a scene's resource
/// table, a material cache) stays with the caller. Its job is sizing: a
/// batched upload wants one shared staging allocation big enough for the
/// largest staged member, which [`max_sync_size`](SyncGroup::max_sync_size)
/// computes.
///
/// Membership is rebuilt or mutated by a single writer per frame; the group
/// performs no caching, so repeated queries over unchanged membership return
/// the same value.
pub struct SyncGroup<'a, T: Synchronizable> {
    members: Vec<&'a T>,
}

impl<T: Synchronizable> fmt::Debug for SyncGroup<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncGroup")
            .field("len", &self.members.len())
            .finish()
    }
}

impl<T: Synchronizable> Default for SyncGroup<'_, T> {
    #[inline]
    fn default() -> Self {
        Self { members: Vec::new() }
    }
}

impl<'a, T: Synchronizable> SyncGroup<'a, T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { members: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn insert(&mut self, member: &'a T) {
        self.members.push(member);
    }

    /// Drops all members. Keeps allocated capacity for per-frame reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.members.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.members.iter().copied()
    }

    /// Maximum staging size over members that currently have sync data.
    ///
    /// Members without data are skipped entirely, not counted as zero.
    /// Returns 0 for an empty group or when no member is staged. The result
    /// is ≥ every staged member's size, so a staging allocation of this size
    /// fits any member of the batch.
    pub fn max_sync_size(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.has_sync_data())
            .map(|m| m.sync_data_size())
            .max()
            .unwrap_or(0)
    }
}

impl<'a, T: Synchronizable> Extend<&'a T> for SyncGroup<'a, T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<'a, T: Synchronizable> FromIterator<&'a T> for SyncGroup<'a, T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        Self { members: iter.into_iter().collect() }
    }
}
