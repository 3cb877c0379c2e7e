use std::marker::PhantomData;

use super::dynamic_list::DynamicList;
use super::forward::skip_dead;
use super::node::Link;
#[doc(inline)]
pub use crate::util::error::NoCurrentElement;

/// A bidirectional cursor with position-anchored mutation. See [`DynamicList::cursor`].
///
/// The cursor sits *between* elements: `current` is the node the next forward step will yield
/// (`None` meaning past the end), and a backward step yields the node before it. Corrections use
/// the forward tombstone-skipping rule, so like [`ForwardCursor`](super::forward::ForwardCursor)
/// this cursor transparently recovers past removals performed underneath it.
///
/// Indices are not cached: [`next_index`](Cursor::next_index) re-derives the position by an O(n)
/// scan, because any cached counter would be invalidated by exactly the mutation this cursor is
/// built to survive.
pub struct Cursor<T> {
    current: Link,
    last_returned: Link,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(crate) const fn new(start: Link) -> Cursor<T> {
        Cursor {
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
        self.current = node.next();
        Some(node.value())
    }

    pub fn has_previous(&mut self, list: &DynamicList<T>) -> bool {
        self.current = skip_dead(&list.arena, self.current);
        match self.current {
            None => list.tail.is_some(),
            Some(index) => list.arena.node(index).prev().is_some(),
        }
    }

    /// Mirrors [`next`](Cursor::next), moving backward: yields the element before the cursor and
    /// anchors on it, so alternating `next`/`previous` returns the same element repeatedly. Past
    /// the end, the cursor re-enters at the tail.
    pub fn previous<'a>(&mut self, list: &'a DynamicList<T>) -> Option<&'a T> {
        self.current = skip_dead(&list.arena, self.current);
        let target = match self.current {
            None => list.tail?,
            Some(index) => list.arena.node(index).prev()?,
        };
        let node = list.arena.node(target);
        self.last_returned = Some(target);
        self.current = Some(target);
        Some(node.value())
    }

    /// The index a [`next`](Cursor::next) call would yield from, re-derived by scanning the live
    /// chain from the head. `len` when the cursor is past the end. O(n).
    pub fn next_index(&mut self, list: &DynamicList<T>) -> usize {
        self.current = skip_dead(&list.arena, self.current);
        match self.current {
            None => list.len(),
            Some(index) => list.position_of(index),
        }
    }

    /// The index a [`previous`](Cursor::previous) call would yield from, or `None` at the front.
    /// O(n).
    pub fn previous_index(&mut self, list: &DynamicList<T>) -> Option<usize> {
        self.next_index(list).checked_sub(1)
    }

    /// Replaces the payload of the most recently returned element in place. No structural
    /// change. If the container removed that element in the meantime, the write has nowhere
    /// visible to land and is dropped.
    pub fn set(&mut self, list: &mut DynamicList<T>, value: T) -> Result<(), NoCurrentElement> {
        let index = self.last_returned.ok_or(NoCurrentElement)?;
        let node = list.arena.node_mut(index);
        if !node.is_removed() {
            *node.value_mut() = value;
        }
        Ok(())
    }

    /// Splices `value` immediately before the cursor without moving it: the next forward step
    /// still yields the element the cursor was already pointing at, and the next backward step
    /// yields `value`. Clears the mutation anchor, as insertion does.
    pub fn add(&mut self, list: &mut DynamicList<T>, value: T) {
        self.current = skip_dead(&list.arena, self.current);
        match self.current {
            None => list.push_back(value),
            Some(index) => list.splice_before(index, value),
        }
        self.last_returned = None;
    }

    /// Unlinks and tombstones the most recently returned element, whichever direction it was
    /// returned from.
    pub fn remove(&mut self, list: &mut DynamicList<T>) -> Result<T, NoCurrentElement> {
        let index = self.last_returned.take().ok_or(NoCurrentElement)?;
        if list.arena.node(index).is_removed() {
            return Err(NoCurrentElement);
        }
        Ok(list.unlink(index))
    }
}
