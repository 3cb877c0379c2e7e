use std::fmt::{self, Debug, Formatter};

use crate::list::DynamicList;
#[doc(inline)]
pub use crate::util::error::EmptyList;

/// FIFO vocabulary over a [`DynamicList`]: elements enter at the back and leave at the front.
///
/// Removal and inspection each come in a poll-style form where absent is `None`
/// ([`dequeue`](Queue::dequeue), [`peek`](Queue::peek)) and a strict form where absent is an
/// error ([`take`](Queue::take), [`require`](Queue::require)), per conventional queue semantics.
pub struct Queue<T> {
    list: DynamicList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            list: DynamicList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    pub fn take(&mut self) -> Result<T, EmptyList> {
        self.list.take_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    pub fn require(&self) -> Result<&T, EmptyList> {
        self.list.require_front()
    }

    pub fn into_list(self) -> DynamicList<T> {
        self.list
    }
}

impl<T> From<DynamicList<T>> for Queue<T> {
    fn from(list: DynamicList<T>) -> Queue<T> {
        Queue { list }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.list).finish()
    }
}
