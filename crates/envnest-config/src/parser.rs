use envnest_core::Tree;
use tracing::debug;

use crate::infer::infer_value;
use crate::path::{Separators, tokenize};

/// Converts flat key/value pairs into a nested [`Tree`].
///
/// Each pair is handled independently: the value is inferred, the key is
/// tokenized, and the result is written at that path. Pairs are applied in
/// iteration order, so on a path collision the later pair wins.
#[derive(Debug, Clone, Default)]
pub struct EnvParser {
    separators: Separators,
}

impl EnvParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separators(separators: Separators) -> Self {
        Self { separators }
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Build a fresh tree from `pairs`.
    pub fn parse<I, K, V>(&self, pairs: I) -> Tree
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut tree = Tree::new();
        let mut count = 0usize;
        for (key, value) in pairs {
            let path = tokenize(key.as_ref(), &self.separators);
            tree.insert_at_path(&path, infer_value(value.as_ref()));
            count += 1;
        }
        debug!(pairs = count, top_level = tree.len(), "converted flat pairs into tree");
        tree
    }
}

/// Convert `pairs` using the default `__` / `_` separators.
pub fn parse_env_vars<I, K, V>(pairs: I) -> Tree
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    EnvParser::new().parse(pairs)
}
