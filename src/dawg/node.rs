use std::fmt;

use smallvec::SmallVec;

use super::char_trait::DawgChar;
use super::node_arena::NodeArena;

/// Index of a node inside the builder's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the arena slot this id points at.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A compact representation of the outgoing edges of a [`Node`] that doesn't allocate
/// until there are at least three of them.
///
/// Edges are kept in insertion order. Labels are unique within one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children<C: DawgChar> {
    /// No children.
    None,
    /// Exactly one child (letter, node).
    One((C, NodeId)),
    /// Exactly two children (letter1, node1, letter2, node2).
    Two((C, NodeId, C, NodeId)),
    /// Three or more children stored in a vector.
    Many(Vec<(C, NodeId)>),
}

impl<C: DawgChar> Children<C> {
    /// Gets the edge at the specified position, in insertion order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(C, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the node that `letter`'s edge leads to.
    #[inline]
    pub fn find(&self, letter: C) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => {
                // Unrolling by 2 exposes load-level parallelism and beats both binary
                // search and a scalar loop on the small fan-outs typical of word graphs.
                let chunks = children.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == letter {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == letter {
                        return Some(chunk[1].1);
                    }
                }
                remainder
                    .iter()
                    .find(|&&(ch, _)| ch == letter)
                    .map(|&(_, node)| node)
            }
        }
    }

    /// Points the edge labeled `letter` at `node`.
    ///
    /// An existing edge with the same label keeps its position and is overwritten,
    /// otherwise the edge is appended.
    pub(crate) fn set(&mut self, letter: C, node: NodeId) {
        match self {
            Children::None => *self = Children::One((letter, node)),
            Children::One((c1, n1)) => {
                if *c1 == letter {
                    *n1 = node;
                } else {
                    *self = Children::Two((*c1, *n1, letter, node));
                }
            }
            Children::Two((c1, n1, c2, n2)) => {
                if *c1 == letter {
                    *n1 = node;
                } else if *c2 == letter {
                    *n2 = node;
                } else {
                    *self = Children::Many(vec![(*c1, *n1), (*c2, *n2), (letter, node)]);
                }
            }
            Children::Many(children) => {
                match children.iter_mut().find(|(c, _)| *c == letter) {
                    Some(edge) => edge.1 = node,
                    None => children.push((letter, node)),
                }
            }
        }
    }

    /// Returns the number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    /// Returns true if there are no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Returns an iterator over `(letter, node)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_, C> {
        ChildIter {
            children: self,
            index: Some(0),
        }
    }
}

/// An iterator over the edges of a [`Node`].
#[derive(Clone)]
pub struct ChildIter<'a, C: DawgChar> {
    children: &'a Children<C>,
    index: Option<usize>,
}

impl<C: DawgChar> Iterator for ChildIter<'_, C> {
    type Item = (C, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index?;
        let next_child = self.children.get(index);
        self.index = if next_child.is_some() {
            index.checked_add(1)
        } else {
            None
        };
        next_child
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.index {
            Some(i) => self.children.len().saturating_sub(i),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<C: DawgChar> ExactSizeIterator for ChildIter<'_, C> {}

/// Structural identity of a node whose children are all canonical.
///
/// Since nodes are confirmed bottom-up, two nodes with equal signatures accept the
/// same set of suffixes, so one level of child ids stands in for the whole subtree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Signature<C: DawgChar> {
    terminal: bool,
    edges: SmallVec<[(C, NodeId); 4]>,
}

/// A vertex of the automaton.
#[derive(Clone, Debug)]
pub struct Node<C: DawgChar> {
    id: u64,
    label: C,
    children: Children<C>,
    terminal: bool,
    canonical: bool,
}

impl<C: DawgChar> Node<C> {
    /// Creates a non-terminal node without children.
    pub(crate) fn new(id: u64, label: C) -> Self {
        Node {
            id,
            label,
            children: Children::None,
            terminal: false,
            canonical: false,
        }
    }

    /// Construction-time serial number. Only useful for debugging.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The label of the edge this node was first reached by.
    pub fn label(&self) -> C {
        self.label
    }

    /// True if a word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the child reached over `letter`, if any.
    #[inline]
    pub fn child(&self, letter: C) -> Option<NodeId> {
        self.children.find(letter)
    }

    /// Returns the outgoing edges of this node.
    #[inline]
    pub fn children(&self) -> &Children<C> {
        &self.children
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn set_child(&mut self, letter: C, node: NodeId) {
        self.children.set(letter, node);
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    /// True once the node has been registered as the representative of its signature.
    pub(crate) fn is_canonical(&self) -> bool {
        self.canonical
    }

    pub(crate) fn set_canonical(&mut self) {
        self.canonical = true;
    }

    /// Computes the registry key of this node.
    pub(crate) fn signature(&self) -> Signature<C> {
        let mut edges: SmallVec<[(C, NodeId); 4]> = self.children.iter().collect();
        edges.sort_unstable_by_key(|&(ch, _)| ch);
        Signature {
            terminal: self.terminal,
            edges,
        }
    }
}

/// A read-only handle to a node of a built automaton.
///
/// Two handles compare equal when they point at the same arena slot of the same
/// builder, which after [`finalize`](super::builder::Builder::finalize) means the same
/// shared node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a, C: DawgChar> {
    arena: &'a NodeArena<C>,
    id: NodeId,
}

impl<'a, C: DawgChar> NodeRef<'a, C> {
    pub(crate) fn new(arena: &'a NodeArena<C>, id: NodeId) -> Self {
        NodeRef { arena, id }
    }

    fn node(&self) -> &'a Node<C> {
        self.arena.node(self.id)
    }

    /// The arena slot of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The label of the edge this node was first reached by.
    pub fn label(&self) -> C {
        self.node().label()
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<NodeRef<'a, C>> {
        self.node()
            .child(letter)
            .map(|id| NodeRef::new(self.arena, id))
    }

    /// True if this node corresponds to the end of a word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.node().is_terminal()
    }

    /// Returns true if following `suffix` from this node ends on a word.
    #[inline]
    pub fn has_suffix<I: Iterator<Item = C>>(&self, suffix: &mut I) -> bool {
        suffix
            .try_fold(*self, |node, ch| node.get(ch))
            .is_some_and(|n| n.is_word())
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.node().child_count()
    }

    /// Returns an iterator over all children of this node.
    pub fn children(&self) -> impl Iterator<Item = (C, NodeRef<'a, C>)> + 'a {
        let arena = self.arena;
        self.node()
            .children()
            .iter()
            .map(move |(ch, id)| (ch, NodeRef::new(arena, id)))
    }
}

impl<C: DawgChar> PartialEq for NodeRef<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl<C: DawgChar> Eq for NodeRef<'_, C> {}

impl<C: DawgChar> fmt::Debug for NodeRef<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("label", &node.label())
            .field("terminal", &node.is_terminal())
            .field("children", &node.children().iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(i: usize) -> NodeId {
        NodeId::new(i)
    }

    #[test]
    fn no_children() {
        let n = Node::<char>::new(1, 'x');
        assert_eq!(n.children().iter().next(), None);
        assert_eq!(n.child_count(), 0);
        assert!(n.children().is_empty());
    }

    #[test]
    fn one_child() {
        let mut n = Node::new(1, 'x');
        n.set_child('a', id(2));
        let mut children = n.children().iter();
        assert_eq!(children.next(), Some(('a', id(2))));
        assert_eq!(children.next(), None);
        assert_eq!(n.child_count(), 1);
    }

    #[test]
    fn three_children_keep_insertion_order() {
        let mut n = Node::new(1, 'x');
        n.set_child('c', id(2));
        n.set_child('a', id(3));
        n.set_child('b', id(4));
        let children: Vec<_> = n.children().iter().collect();
        assert_eq!(children, vec![('c', id(2)), ('a', id(3)), ('b', id(4))]);
        assert_eq!(n.children().iter().len(), 3);
        assert_eq!(n.child('a'), Some(id(3)));
        assert_eq!(n.child('d'), None);
    }

    #[test]
    fn setting_existing_label_overwrites() {
        for count in 1..=5 {
            let mut n = Node::new(1, 'x');
            let letters: Vec<char> = ('a'..).take(count).collect();
            for (i, &ch) in letters.iter().enumerate() {
                n.set_child(ch, id(i));
            }
            let last = letters[count - 1];
            n.set_child(last, id(100));
            assert_eq!(n.child_count(), count);
            assert_eq!(n.child(last), Some(id(100)));
            assert_eq!(n.children().get(count - 1), Some((last, id(100))));
        }
    }

    #[test]
    fn a_thousand_children() {
        let mut n = Node::new(1, '\0');
        let letters = (0..).filter_map(std::char::from_u32).take(1000);
        for (i, ch) in letters.clone().enumerate() {
            n.set_child(ch, id(i));
        }
        for (i, ch) in letters.enumerate() {
            assert_eq!(n.child(ch), Some(id(i)));
        }
        assert_eq!(n.child_count(), 1000);
    }

    #[test]
    fn signature_ignores_insertion_order() {
        let mut n1 = Node::new(1, 'x');
        n1.set_child('a', id(5));
        n1.set_child('b', id(6));
        let mut n2 = Node::new(2, 'y');
        n2.set_child('b', id(6));
        n2.set_child('a', id(5));
        assert_eq!(n1.signature(), n2.signature());
    }

    #[test]
    fn signature_depends_on_terminal_flag_and_targets() {
        let mut n1 = Node::new(1, 'x');
        n1.set_child('a', id(5));
        let mut n2 = n1.clone();
        n2.set_terminal();
        assert_ne!(n1.signature(), n2.signature());

        let mut n3 = Node::new(3, 'x');
        n3.set_child('a', id(7));
        assert_ne!(n1.signature(), n3.signature());
    }
}
