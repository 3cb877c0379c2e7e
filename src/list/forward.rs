use std::marker::PhantomData;

use super::arena::Arena;
use super::dynamic_list::DynamicList;
use super::node::Link;
#[doc(inline)]
pub use crate::util::error::{CursorError, NoCurrentElement, StaleCursor};

// The cursors here are detached: they borrow nothing between calls and take the list as an
// explicit argument on every call. A cursor must only ever be used with the list that created it
// (the same discipline as any index into external storage); indices are never reused, so the
// worst a stale cursor can observe is a tombstone, and tombstones are what the correction rules
// below resolve.

/// Resolves a cursor position against the arena, skipping tombstoned nodes via their stale
/// forward indices. Pure: a function of the position and the node table only, shared by every
/// correcting traversal in the crate.
///
/// A singly removed node offers one stale hop towards what was its next live neighbor; chained
/// removals resolve hop by hop. A severed node (bulk clear) has no forward index left, which ends
/// the walk.
pub(crate) fn skip_dead<T>(arena: &Arena<T>, mut position: Link) -> Link {
    while let Some(index) = position {
        let node = arena.node(index);
        if !node.is_removed() {
            return Some(index);
        }
        position = node.next();
    }
    None
}

/// Fail-fast counterpart of [`skip_dead`]: a tombstoned position is an illegal-state error, never
/// a silent skip.
pub(crate) fn require_live<T>(arena: &Arena<T>, position: Link) -> Result<Link, StaleCursor> {
    match position {
        Some(index) if arena.node(index).is_removed() => Err(StaleCursor),
        other => Ok(other),
    }
}

/// A tombstone-skipping forward cursor. See [`DynamicList::forward_cursor`].
///
/// `current` is the next node to yield; before answering [`has_next`](ForwardCursor::has_next) or
/// [`next`](ForwardCursor::next) the cursor corrects itself past any tombstones it is parked on.
/// Tolerates reentrant structural mutation only; this is not a concurrency mechanism.
pub struct ForwardCursor<T> {
    current: Link,
    last_returned: Link,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> ForwardCursor<T> {
    pub(crate) const fn new(start: Link) -> ForwardCursor<T> {
        ForwardCursor {
            current: start,
            last_returned: None,
            _phantom: PhantomData,
        }
    }

    pub fn has_next(&mut self, list: &DynamicList<T>) -> bool {
        self.current = skip_dead(&list.arena, self.current);
        self.current.is_some()
    }

    pub fn next<'a>(&mut self, list: &'a DynamicList<T>) -> Option<&'a T> {
        self.current = skip_dead(&list.arena, self.current);
        let index = self.current?;
        let node = list.arena.node(index);
        self.last_returned = Some(index);
        // Advance over the raw forward index; if it goes stale before the next call, correction
        // handles it then.
        self.current = node.next();
        Some(node.value())
    }

    /// Unlinks and tombstones the node most recently yielded by [`next`](ForwardCursor::next).
    /// Without a prior `next`, or if the container removed that node in the meantime, there is
    /// nothing to remove.
    pub fn remove(&mut self, list: &mut DynamicList<T>) -> Result<T, NoCurrentElement> {
        let index = self.last_returned.take().ok_or(NoCurrentElement)?;
        if list.arena.node(index).is_removed() {
            return Err(NoCurrentElement);
        }
        Ok(list.unlink(index))
    }
}

/// A fail-fast forward cursor. See [`DynamicList::checked_cursor`].
///
/// Where [`ForwardCursor`] silently recovers past a tombstone, this cursor reports
/// [`StaleCursor`] instead. A cursor that raised it must be discarded by the caller; the list
/// itself remains fully usable.
pub struct CheckedCursor<T> {
    current: Link,
    last_returned: Link,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> CheckedCursor<T> {
    pub(crate) const fn new(start: Link) -> CheckedCursor<T> {
        CheckedCursor {
            current: start,
            last_returned: None,
            _phantom: PhantomData,
        }
    }

    pub fn has_next(&self, list: &DynamicList<T>) -> Result<bool, StaleCursor> {
        Ok(require_live(&list.arena, self.current)?.is_some())
    }

    pub fn next<'a>(&mut self, list: &'a DynamicList<T>) -> Result<Option<&'a T>, StaleCursor> {
        let Some(index) = require_live(&list.arena, self.current)? else {
            return Ok(None);
        };
        let node = list.arena.node(index);
        self.last_returned = Some(index);
        self.current = node.next();
        Ok(Some(node.value()))
    }

    /// As [`ForwardCursor::remove`].
    pub fn remove(&mut self, list: &mut DynamicList<T>) -> Result<T, NoCurrentElement> {
        let index = self.last_returned.take().ok_or(NoCurrentElement)?;
        if list.arena.node(index).is_removed() {
            return Err(NoCurrentElement);
        }
        Ok(list.unlink(index))
    }
}
