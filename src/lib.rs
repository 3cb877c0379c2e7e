//! A doubly linked list that stays traversable while it is being torn apart.
//!
//! # Purpose
//! The centerpiece of this crate is [`DynamicList`](list::DynamicList): an ordered sequence with
//! list-, deque- and queue-style operations whose cursors survive structural mutation. Removing an
//! element (through the container or through another cursor) does not invalidate cursors parked
//! on it; they observe the tombstone left behind and recover on their next step. No locks, no
//! reference counting, just a carefully maintained convention on the node graph.
//!
//! # Method
//! Nodes live in an append-only arena and are addressed by integer index, so a cursor is nothing
//! but a pair of indices plus a recovery mode. A removed node keeps its last known forward index,
//! which is exactly the breadcrumb a parked cursor needs to take one hop back onto the live chain.
//! Cursors take the list as an explicit argument on every call; the borrow checker therefore never
//! has to know that a cursor and a mutation coexist, because between calls the cursor borrows
//! nothing.
//!
//! # Error Handling
//! Lookups that fail are errors, not sentinels: `index_of` on an absent value and positional
//! access out of bounds both return typed [`Result`]s, in a strongly typed style using enums for
//! static dispatch with structs (often ZSTs) that implement [`Error`](std::error::Error). Nothing
//! is retried or swallowed, and the container remains fully usable after any error.
//!
//! # Concurrency
//! None. The structure is strictly single-threaded and cooperative: "self-correcting" tolerates
//! reentrant mutation from the same call stack, not access from another thread. Cross-thread use
//! must be serialized entirely by the caller.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod list;
pub mod view;

pub(crate) mod util;
