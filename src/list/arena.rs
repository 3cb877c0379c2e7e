use super::node::{Node, NodeIndex};

/// Append-only slot storage for nodes.
///
/// Slots are never freed or reused while the arena is alive: a removed node stays behind as a
/// tombstone so that cursors holding its index can still interrogate it. Payloads are dropped at
/// removal time; the slot bookkeeping itself is reclaimed only when the list is dropped or the
/// arena is reset wholesale.
pub(crate) struct Arena<T> {
    slots: Vec<Node<T>>,
}

impl<T> Arena<T> {
    pub const fn new() -> Arena<T> {
        Arena { slots: Vec::new() }
    }

    pub fn alloc(&mut self, node: Node<T>) -> NodeIndex {
        let index = self.slots.len();
        self.slots.push(node);
        index
    }

    pub fn node(&self, index: NodeIndex) -> &Node<T> {
        &self.slots[index]
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        &mut self.slots[index]
    }
}
