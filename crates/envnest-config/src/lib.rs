//! # envnest-config
//!
//! Converts flat, environment-style key/value pairs into a nested [`Tree`]
//! with inferred scalar types, and loads envnest's own configuration from
//! `envnest.toml`, environment variables, and CLI overrides — in that
//! precedence order.
//!
//! ```text
//! APP_DB__PORT=5432  ->  {"app": {"db": {"port": 5432}}}
//! ```

pub mod infer;
pub mod loader;
pub mod parser;
pub mod path;
pub mod schema;

pub use envnest_core::{Node, Scalar, Tree};
pub use infer::infer_value;
pub use loader::ConfigLoader;
pub use parser::{EnvParser, parse_env_vars};
pub use path::{Separators, tokenize};
pub use schema::{ConfigWarning, EnvnestConfig, WarningSeverity};
