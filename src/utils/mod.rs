//! Generic utility primitives with zero domain knowledge.
//!
//! - `fs` - Filesystem staging with consistent error handling

pub mod fs;
