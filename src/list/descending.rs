use std::marker::PhantomData;

use super::arena::Arena;
use super::dynamic_list::DynamicList;
use super::node::Link;
#[doc(inline)]
pub use crate::util::error::NoCurrentElement;

/// Backward counterpart of [`skip_dead`](super::forward::skip_dead). Asymmetric, because only the
/// *forward* stale index survives a removal: recovery goes forward to a neighbor first, then
/// reads that neighbor's backward index, which the removal logic kept pointing correctly past the
/// tombstone. One extra hop through the live side.
///
/// A tombstone with no forward index left (it was the tail when orphaned, or was severed by a
/// clear) falls back to the container's present tail. If the forward neighbor is itself a
/// tombstone, the rule re-applies from there.
pub(crate) fn skip_dead_backward<T>(arena: &Arena<T>, tail: Link, mut position: Link) -> Link {
    while let Some(index) = position {
        let node = arena.node(index);
        if !node.is_removed() {
            return Some(index);
        }
        position = match node.next() {
            None => tail,
            Some(neighbor) if arena.node(neighbor).is_removed() => Some(neighbor),
            Some(neighbor) => arena.node(neighbor).prev(),
        };
    }
    None
}

/// A tail-to-head cursor. See [`DynamicList::descending_cursor`].
///
/// Corrects itself with the backward recovery rule above; like the forward family it is detached,
/// taking the list as an explicit argument on every call.
pub struct DescendingCursor<T> {
    current: Link,
    last_returned: Link,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> DescendingCursor<T> {
    pub(crate) const fn new(start: Link) -> DescendingCursor<T> {
        DescendingCursor {
            current: start,
            last_returned: None,
            _phantom: PhantomData,
        }
    }

    pub fn has_next(&mut self, list: &DynamicList<T>) -> bool {
        self.current = skip_dead_backward(&list.arena, list.tail, self.current);
        self.current.is_some()
    }

    pub fn next<'a>(&mut self, list: &'a DynamicList<T>) -> Option<&'a T> {
        self.current = skip_dead_backward(&list.arena, list.tail, self.current);
        let index = self.current?;
        let node = list.arena.node(index);
        self.last_returned = Some(index);
        self.current = node.prev();
        Some(node.value())
    }

    /// As [`ForwardCursor::remove`](super::forward::ForwardCursor::remove).
    pub fn remove(&mut self, list: &mut DynamicList<T>) -> Result<T, NoCurrentElement> {
        let index = self.last_returned.take().ok_or(NoCurrentElement)?;
        if list.arena.node(index).is_removed() {
            return Err(NoCurrentElement);
        }
        Ok(list.unlink(index))
    }
}
