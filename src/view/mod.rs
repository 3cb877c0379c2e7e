//! Consumption-style views over [`DynamicList`](crate::list::DynamicList).
//!
//! The list itself exposes the union of sequence, deque and queue operations; these thin wrappers
//! let a call site commit to one vocabulary. Both convert losslessly to and from the underlying
//! list.

pub mod deque;
pub mod queue;

#[doc(inline)]
pub use deque::Deque;
#[doc(inline)]
pub use queue::Queue;
