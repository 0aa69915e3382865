//! basetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof:
//! `basetris::{core, input, term, types}`. The implementation lives in
//! dedicated crates under `crates/`.

pub use basetris_core as core;
pub use basetris_input as input;
pub use basetris_term as term;
pub use basetris_types as types;
