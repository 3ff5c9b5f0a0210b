//! Example: building a Wordlist wrapper around a finished DAWG.
//!
//! Builds from the file given as the first argument (one sorted word per line, `#`
//! comments allowed) or from a small built-in list, then shows lookups and sizes.
//!
//! Run with: RUST_LOG=debug cargo run --example wordlist [words.txt]

use std::process::ExitCode;

use lexdawg::dawg::{build_dawg, build_dawg_from_file, Builder, NodeRef};
use tracing_subscriber::EnvFilter;

/// A convenient wrapper around a DAWG root node for word validation.
struct Wordlist<'w> {
    root: NodeRef<'w, char>,
}

impl<'w> Wordlist<'w> {
    fn new(dawg: &'w Builder<char>) -> Self {
        Wordlist { root: dawg.root() }
    }

    /// Returns true if the word is in the wordlist.
    fn is_word(&self, word: &str) -> bool {
        word.chars()
            .try_fold(self.root, |node, ch| node.get(ch))
            .is_some_and(|n| n.is_word())
    }

    /// Returns true if any word in the wordlist starts with the given prefix.
    fn has_prefix(&self, prefix: &str) -> bool {
        prefix
            .chars()
            .try_fold(self.root, |node, ch| node.get(ch))
            .is_some()
    }

    /// Returns all words in the wordlist.
    fn all_words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut stack = Vec::new();
        Self::collect_words(self.root, &mut stack, &mut words);
        words
    }

    fn collect_words(node: NodeRef<'_, char>, prefix: &mut Vec<char>, words: &mut Vec<String>) {
        if node.is_word() {
            words.push(prefix.iter().collect());
        }
        for (ch, child) in node.children() {
            prefix.push(ch);
            Self::collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dawg = match std::env::args().nth(1) {
        Some(path) => build_dawg_from_file(&path).map_err(|e| e.to_string()),
        None => build_dawg(["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"])
            .map_err(|e| e.to_string()),
    };
    let dawg = match dawg {
        Ok(dawg) => dawg,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let wordlist = Wordlist::new(&dawg);

    println!("Words: {}, nodes: {}", dawg.word_count(), dawg.node_count());

    println!("\nWord lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if wordlist.is_word(word) { "yes" } else { "no" });
    }

    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {}", if wordlist.has_prefix(prefix) { "yes" } else { "no" });
    }

    let words = wordlist.all_words();
    if words.len() <= 20 {
        println!("\nAll words: {words:?}");
    }
    ExitCode::SUCCESS
}
