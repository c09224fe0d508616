use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};

use crate::value::Scalar;

/// A node in a [`Tree`]: either a typed leaf or a nested mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(Scalar),
    Map(Tree),
}

impl Node {
    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Leaf(s) => Some(s),
            Node::Map(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Node::Map(t) => Some(t),
            Node::Leaf(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Node::Leaf(Scalar::Boolean(b)) => serde_json::Value::Bool(*b),
            // Without arbitrary precision a Value cannot hold integers beyond
            // 64 bits; those become floats here. Serializing the tree is exact.
            Node::Leaf(Scalar::Integer(i)) => i64::try_from(*i)
                .map(serde_json::Value::from)
                .or_else(|_| u64::try_from(*i).map(serde_json::Value::from))
                .unwrap_or_else(|_| serde_json::Value::from(*i as f64)),
            // Non-finite floats have no JSON form and become null.
            Node::Leaf(Scalar::Float(f)) => serde_json::Value::from(*f),
            Node::Leaf(Scalar::Text(s)) => serde_json::Value::String(s.clone()),
            Node::Map(t) => t.to_json(),
        }
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::Leaf(s)
    }
}

impl From<Tree> for Node {
    fn from(t: Tree) -> Self {
        Node::Map(t)
    }
}

/// An insertion-ordered mapping from segment name to [`Node`].
///
/// The root of every conversion result is a `Tree`. Keys keep the position of
/// their first insertion; overwriting a key replaces its node in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree(IndexMap<String, Node>);

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, segment: &str) -> Option<&Node> {
        self.0.get(segment)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Node> {
        self.0.iter()
    }

    /// Follow `path` from this tree. An empty path yields `None`.
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get(segment.as_ref())?.as_tree()?;
        }
        current.get(last.as_ref())
    }

    /// Dotted-path lookup, e.g. `tree.lookup("app.db.port")`.
    pub fn lookup(&self, dotted: &str) -> Option<&Node> {
        let path: Vec<&str> = dotted.split('.').collect();
        self.get_path(&path)
    }

    /// Typed leaf at a dotted path.
    pub fn scalar(&self, dotted: &str) -> Option<&Scalar> {
        self.lookup(dotted)?.as_scalar()
    }

    /// Write `value` at `path`, creating intermediate mappings as needed.
    ///
    /// Last write wins: a leaf standing where a mapping is required is
    /// replaced by an empty mapping, and whatever sits at the final segment
    /// (leaf or subtree) is replaced by the new leaf. An empty path is a no-op.
    pub fn insert_at_path<S: AsRef<str>>(&mut self, path: &[S], value: Scalar) {
        match path {
            [] => {}
            [leaf] => {
                self.0.insert(leaf.as_ref().to_string(), Node::Leaf(value));
            }
            [head, rest @ ..] => {
                let node = self
                    .0
                    .entry(head.as_ref().to_string())
                    .or_insert_with(|| Node::Map(Tree::new()));
                match node {
                    Node::Map(child) => child.insert_at_path(rest, value),
                    Node::Leaf(_) => {
                        let mut child = Tree::new();
                        child.insert_at_path(rest, value);
                        *node = Node::Map(child);
                    }
                }
            }
        }
    }

    /// Convert into a `serde_json::Value` object, keeping key order.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a String, &'a Node);
    type IntoIter = Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Tree {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
