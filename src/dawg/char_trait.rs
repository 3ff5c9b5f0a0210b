use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can label the edges of a DAWG.
///
/// Blanket-implemented for every type with the required bounds, so `char`, `u8`,
/// `u16` and `u32` all work out of the box.
///
/// - `Copy`: labels are stored by value in edges, signatures and the frontier
/// - `Eq + Ord`: word ordering checks and sorted node signatures
/// - `Hash`: signatures are keys of the canonical registry
/// - `Debug`: error messages and debug printing of nodes
/// - `Default`: label of the root and of released arena slots
pub trait DawgChar: Copy + Eq + Ord + Hash + Debug + Default {}

impl<T: Copy + Eq + Ord + Hash + Debug + Default> DawgChar for T {}
