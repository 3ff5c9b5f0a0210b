//! # lexdawg
//!
//! Incremental construction of a minimal
//! [DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Directed Acyclic Word Graph) from a sorted stream of words.
//!
//! A DAWG is a minimal acyclic deterministic automaton: a trie that shares common
//! suffixes as well as common prefixes. Words are added in sorted order. Each addition
//! confirms the nodes the previous word no longer shares with the new one, merging
//! every confirmed node into an earlier node with the same structure when one exists.
//! This is the algorithm of [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1).
//!
//! ## Features
//!
//! - **Generic over character type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`DawgChar`](dawg::DawgChar)
//! - **Arena ownership**: nodes live in one arena and edges are indices, so merging is an
//!   index rewrite and merged-away slots are reused
//! - **Strict ordering**: out-of-order or repeated words are rejected without touching
//!   the builder
//!
//! ## Quick Start
//!
//! ```
//! use lexdawg::dawg::Builder;
//!
//! let mut builder = Builder::new();
//! for word in ["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"] {
//!     builder.add(word).unwrap();
//! }
//! builder.finalize();
//!
//! assert!(builder.contains("CAKE"));
//! assert!(!builder.contains("AKE"));
//! // root, one node shared by all first letters, then A, K, E
//! assert_eq!(builder.node_count(), 5);
//! ```
//!
//! Words that arrive out of order are refused:
//!
//! ```
//! use lexdawg::dawg::build_dawg;
//! use lexdawg::error::BuilderError;
//!
//! let err = build_dawg(["b", "a"]).unwrap_err();
//! assert!(matches!(err, BuilderError::OrderViolation { .. }));
//! ```
//!
//! ## Generic Usage
//!
//! The DAWG is generic over the edge label type:
//!
//! ```
//! use lexdawg::dawg::build_dawg;
//!
//! let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
//! let dawg = build_dawg(words).unwrap();
//!
//! let root = dawg.root();
//! let contains = |seq: &[u8]| seq.iter().try_fold(root, |n, &ch| n.get(ch)).is_some_and(|n| n.is_word());
//! assert!(contains(&[1, 2, 3]));
//! assert!(!contains(&[1, 2, 5]));
//! ```

#![warn(missing_docs)]

/// Core DAWG data structure: nodes, arena, builder and bulk loader.
pub mod dawg;
/// Error types.
pub mod error;

pub use dawg::{build_dawg, Builder, DawgChar, IntoWord, NodeRef};
pub use error::{BuilderError, LoadError};
