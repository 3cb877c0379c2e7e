//! The self-correcting linked list and its traversal family. Revolves around [`DynamicList`],
//! with [`ForwardCursor`], [`CheckedCursor`], [`DescendingCursor`] and [`Cursor`] for traversal
//! that survives structural mutation.

mod arena;
mod cursor;
mod descending;
mod dynamic_list;
mod forward;
mod iter;
mod node;


pub use cursor::*;
pub use descending::*;
pub use dynamic_list::*;
pub use forward::*;
pub use iter::*;
