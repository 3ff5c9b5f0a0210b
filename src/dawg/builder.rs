use std::fmt;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::char_trait::DawgChar;
use super::node::{NodeId, NodeRef, Signature};
use super::node_arena::NodeArena;
use crate::error::BuilderError;

/// Trait for types that can be used as a word when building a DAWG.
///
/// Implemented for common string and sequence types so that [`Builder::add`]
/// and [`build_dawg`] accept them directly without manual conversion.
pub trait IntoWord<C: DawgChar> {
    /// Collects this word into a character buffer.
    fn collect_word(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: DawgChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: DawgChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: DawgChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// An edge created for the most recent word whose target has not been confirmed yet.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry<C: DawgChar> {
    parent: NodeId,
    label: C,
    child: NodeId,
}

/// Incremental builder of a minimal DAWG.
///
/// Words must be added in strictly increasing lexicographic order. Each new word
/// confirms the part of the previous word's path it diverges from: a confirmed node
/// either becomes the canonical node for its signature or is replaced by the existing
/// canonical node and released. After [`finalize`](Builder::finalize) the graph is the
/// unique minimal automaton for the words added.
///
/// ```
/// use lexdawg::dawg::builder::Builder;
///
/// let mut builder = Builder::new();
/// builder.add("cat").unwrap();
/// builder.add("cats").unwrap();
/// builder.add("dog").unwrap();
/// builder.finalize();
///
/// assert!(builder.contains("cats"));
/// assert!(!builder.contains("ca"));
/// assert_eq!(builder.word_count(), 3);
/// assert_eq!(builder.node_count(), 7);
/// ```
pub struct Builder<C: DawgChar = char> {
    arena: NodeArena<C>,
    root: NodeId,
    previous_word: SmallVec<[C; 32]>,
    frontier: Vec<FrontierEntry<C>>,
    registry: HashMap<Signature<C>, NodeId>,
    word_count: usize,
    finalized: bool,
}

impl<C: DawgChar> Builder<C> {
    /// Creates a builder holding only the root node.
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(C::default());
        Builder {
            arena,
            root,
            previous_word: SmallVec::new(),
            frontier: Vec::new(),
            registry: HashMap::new(),
            word_count: 0,
            finalized: false,
        }
    }

    /// Adds a word to the DAWG being constructed.
    ///
    /// The word can be any type that implements [`IntoWord`], including `&str`,
    /// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`. The empty
    /// word is accepted as the first word only.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::OrderViolation`] if the word does not sort strictly after
    /// the previously added word, and [`BuilderError::Finalized`] after
    /// [`finalize`](Builder::finalize). The builder is left unchanged in both cases.
    pub fn add(&mut self, word: impl IntoWord<C>) -> Result<(), BuilderError<C>> {
        let word = word.collect_word();
        self.add_word_slice(&word)
    }

    /// Adds every word of `words` in order, stopping at the first rejected one.
    pub fn add_all<W: IntoWord<C>>(
        &mut self,
        words: impl IntoIterator<Item = W>,
    ) -> Result<(), BuilderError<C>> {
        for word in words {
            self.add(word)?;
        }
        Ok(())
    }

    fn add_word_slice(&mut self, word: &[C]) -> Result<(), BuilderError<C>> {
        if self.finalized {
            return Err(BuilderError::Finalized {
                word: word.to_vec(),
            });
        }
        let prefix_length = self.prefix_length(word)?;
        self.confirm_frontier(prefix_length);

        let mut cursor = self.frontier.last().map_or(self.root, |entry| entry.child);
        for &ch in &word[prefix_length..] {
            let child = self.arena.add_child(cursor, ch);
            self.frontier.push(FrontierEntry {
                parent: cursor,
                label: ch,
                child,
            });
            cursor = child;
        }
        self.arena.node_mut(cursor).set_terminal();

        self.word_count += 1;
        self.previous_word.clear();
        self.previous_word.extend_from_slice(word);
        Ok(())
    }

    /// Length of the prefix `word` shares with the previous word.
    ///
    /// Fails before anything is mutated if `word` is out of order.
    fn prefix_length(&self, word: &[C]) -> Result<usize, BuilderError<C>> {
        if self.word_count > 0 && word <= &self.previous_word[..] {
            return Err(BuilderError::OrderViolation {
                previous: self.previous_word.to_vec(),
                word: word.to_vec(),
            });
        }
        Ok(self
            .previous_word
            .iter()
            .zip(word)
            .take_while(|(a, b)| a == b)
            .count())
    }

    /// Confirms frontier entries, deepest first, until `depth` entries remain.
    fn confirm_frontier(&mut self, depth: usize) {
        while self.frontier.len() > depth {
            let Some(entry) = self.frontier.pop() else {
                break;
            };
            self.confirm(entry);
        }
    }

    fn confirm(&mut self, entry: FrontierEntry<C>) {
        debug_assert!(
            self.arena
                .node(entry.child)
                .children()
                .iter()
                .all(|(_, child)| self.arena.node(child).is_canonical()),
            "Cannot confirm a node unless all its children are canonical"
        );

        let signature = self.arena.node(entry.child).signature();
        match self.registry.entry(signature) {
            Entry::Occupied(canonical) => {
                let canonical = *canonical.get();
                trace!(
                    label = ?entry.label,
                    duplicate = entry.child.index(),
                    canonical = canonical.index(),
                    "merging duplicate node"
                );
                self.arena
                    .node_mut(entry.parent)
                    .set_child(entry.label, canonical);
                self.arena.release(entry.child);
            }
            Entry::Vacant(slot) => {
                self.arena.node_mut(entry.child).set_canonical();
                slot.insert(entry.child);
            }
        }
    }

    /// Confirms every node still pending on the frontier.
    ///
    /// After this call the graph is minimal and the builder rejects further words.
    /// Calling it again has no effect.
    pub fn finalize(&mut self) {
        self.confirm_frontier(0);
        if !self.finalized {
            self.finalized = true;
            debug!(
                words = self.word_count,
                nodes = self.node_count(),
                released = self.arena.released(),
                "finalized DAWG"
            );
        }
    }

    /// True once [`finalize`](Builder::finalize) has run.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// The root plus every canonical node.
    ///
    /// Nodes still pending on the frontier are not counted, so the value is only
    /// the size of the automaton after [`finalize`](Builder::finalize).
    pub fn node_count(&self) -> usize {
        1 + self.registry.len()
    }

    /// Number of words accepted so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes currently allocated, pending ones included.
    ///
    /// Equals [`node_count`](Builder::node_count) after finalization.
    pub fn live_node_count(&self) -> usize {
        self.arena.live()
    }

    /// Returns a handle to the root node.
    pub fn root(&self) -> NodeRef<'_, C> {
        NodeRef::new(&self.arena, self.root)
    }

    /// Returns true if `word` was added.
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        word.collect_word()
            .iter()
            .try_fold(self.root(), |node, &ch| node.get(ch))
            .is_some_and(|node| node.is_word())
    }
}

impl<C: DawgChar> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DawgChar> fmt::Debug for Builder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("words", &self.word_count)
            .field("nodes", &self.node_count())
            .field("pending", &self.frontier.len())
            .field("previous_word", &self.previous_word)
            .field("finalized", &self.finalized)
            .finish()
    }
}

/// Builds and finalizes a DAWG from an iterator of words.
///
/// Words **must** be provided in strictly increasing lexicographic order, or this
/// function returns the first [`BuilderError::OrderViolation`].
///
/// # Examples
///
/// Building from byte sequences:
///
/// ```
/// use lexdawg::dawg::builder::build_dawg;
///
/// let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
/// let dawg = build_dawg(words).unwrap();
///
/// assert!(dawg.contains([1, 2, 3]));
/// assert!(!dawg.contains([1, 2, 5]));
/// ```
///
/// Building from strings:
///
/// ```
/// use lexdawg::dawg::builder::build_dawg;
///
/// let dawg = build_dawg(["APPLE", "BANANA", "CHERRY"]).unwrap();
/// assert!(dawg.contains("BANANA"));
/// assert!(!dawg.contains("APRICOT"));
/// ```
pub fn build_dawg<C, W>(words: impl IntoIterator<Item = W>) -> Result<Builder<C>, BuilderError<C>>
where
    C: DawgChar,
    W: IntoWord<C>,
{
    let mut builder = Builder::new();
    builder.add_all(words)?;
    builder.finalize();
    Ok(builder)
}
