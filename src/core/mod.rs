// Public modules
pub mod artifact;
pub mod cmake;
pub mod colors;
pub mod defaults;
pub mod error;
pub mod executor;
pub mod frontend;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod toolchain;
pub mod wasm;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use executor::{Invocation, LineSink, StreamKind, TaggedLine};
pub use pipeline::{BuildStep, RunReport, RunStatus};
