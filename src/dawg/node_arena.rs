//! Index arena owning every node of a DAWG under construction.
//!
//! Edges hold [`NodeId`]s instead of references, so merging a duplicate node into its
//! canonical twin is a plain index rewrite in the parent. The duplicate's slot goes on a
//! free list and is handed out again by the next allocation.

use super::char_trait::DawgChar;
use super::node::{Node, NodeId};

pub(crate) struct NodeArena<C: DawgChar> {
    slots: Vec<Node<C>>,
    free_list: Vec<NodeId>,
    next_serial: u64,
}

impl<C: DawgChar> NodeArena<C> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free_list: Vec::new(),
            next_serial: 1,
        }
    }

    /// Allocates a fresh non-terminal, childless node.
    pub fn alloc(&mut self, label: C) -> NodeId {
        let node = Node::new(self.next_serial, label);
        self.next_serial += 1;
        match self.free_list.pop() {
            Some(id) => {
                self.slots[id.index()] = node;
                id
            }
            None => {
                self.slots.push(node);
                NodeId::new(self.slots.len() - 1)
            }
        }
    }

    /// Allocates a node and links it under `parent` with edge `label`, replacing any
    /// edge `parent` already had with that label.
    pub fn add_child(&mut self, parent: NodeId, label: C) -> NodeId {
        let child = self.alloc(label);
        self.node_mut(parent).set_child(label, child);
        child
    }

    /// Returns the slot of `id` to the free list.
    ///
    /// The caller guarantees no edge points at `id` anymore.
    pub fn release(&mut self, id: NodeId) {
        debug_assert!(!self.free_list.contains(&id), "node released twice");
        self.slots[id.index()] = Node::new(0, C::default());
        self.free_list.push(id);
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<C> {
        &self.slots[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<C> {
        &mut self.slots[id.index()]
    }

    /// Number of slots holding a live node.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Number of slots currently waiting for reuse.
    pub fn released(&self) -> usize {
        self.free_list.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_child_links_new_node() {
        let mut arena = NodeArena::new();
        let root = arena.alloc('\0');
        let child = arena.add_child(root, 'a');
        assert_ne!(root, child);
        assert_eq!(arena.node(root).child('a'), Some(child));
        assert_eq!(arena.node(child).label(), 'a');
        assert_eq!(arena.live(), 2);
    }

    #[test]
    fn add_child_overwrites_same_label() {
        let mut arena = NodeArena::new();
        let root = arena.alloc('\0');
        let first = arena.add_child(root, 'a');
        let second = arena.add_child(root, 'a');
        assert_ne!(first, second);
        assert_eq!(arena.node(root).child_count(), 1);
        assert_eq!(arena.node(root).child('a'), Some(second));
    }

    #[test]
    fn released_slots_are_reused_with_fresh_serials() {
        let mut arena = NodeArena::new();
        let _root = arena.alloc('\0');
        let a = arena.alloc('a');
        let old_serial = arena.node(a).id();
        arena.release(a);
        assert_eq!(arena.live(), 1);
        assert_eq!(arena.released(), 1);

        let b = arena.alloc('b');
        assert_eq!(a, b);
        assert!(arena.node(b).id() > old_serial);
        assert_eq!(arena.node(b).label(), 'b');
        assert_eq!(arena.live(), 2);
        assert_eq!(arena.released(), 0);
    }
}
