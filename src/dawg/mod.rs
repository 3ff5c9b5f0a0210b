/// Incremental builder turning sorted words into a minimal DAWG.
pub mod builder;
/// Trait for types that can serve as DAWG edge labels.
pub mod char_trait;
/// Line-oriented bulk loading of word lists.
pub mod loader;
/// Node types, compact child storage and read-only node handles.
pub mod node;
/// Index arena owning the nodes of a builder.
pub(crate) mod node_arena;

pub use builder::{build_dawg, Builder, IntoWord};
pub use char_trait::DawgChar;
pub use loader::{build_dawg_from_file, build_from_lines, LineSource, LoadOptions};
pub use node::{NodeId, NodeRef};
