//! Cotton (workspace facade crate).
//!
//! Re-exports the workspace crates as `cotton::{core,engine,input,term,types}`
//! so the binaries and integration tests depend on one package while the
//! implementation lives in dedicated crates under `crates/`.

pub use cotton_core as core;
pub use cotton_engine as engine;
pub use cotton_input as input;
pub use cotton_term as term;
pub use cotton_types as types;
