//! Fallblock (workspace facade crate).
//!
//! Re-exports the workspace crates as `fallblock::{core,input,runtime,term,types}` so the
//! binary, the integration tests and the benchmarks share one import path.

pub use fallblock_core as core;
pub use fallblock_input as input;
pub use fallblock_runtime as runtime;
pub use fallblock_term as term;
pub use fallblock_types as types;
