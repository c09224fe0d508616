//! # envnest-core
//!
//! Core types for envnest: the typed scalar produced by value inference, the
//! nested tree those scalars are written into, and the shared error type.
//! This crate defines the vocabulary used by every other crate in the workspace.

pub mod error;
pub mod tree;
pub mod value;

pub use error::{EnvnestError, Result};
pub use tree::{Node, Tree};
pub use value::{Scalar, ScalarKind};
