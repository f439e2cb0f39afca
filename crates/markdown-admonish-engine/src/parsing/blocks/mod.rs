//! # Block Processing
//!
//! Chunked block parsing driven by a priority-ordered processor chain.
//!
//! ## Parsing Phases
//!
//! 1. **Chunking** (`parsing::split_blocks`): the normalized source is split
//!    into blank-line separated chunks
//!
//! 2. **Claiming** (`processor`): for each chunk, the highest-priority
//!    registered [`BlockProcessor`] whose `test` passes gets to `run`,
//!    mutating the element tree and optionally pushing a remainder chunk
//!    back for reprocessing
//!
//! ## Modules
//!
//! - **`processor`**: the `BlockProcessor` contract, the `Processors`
//!   registry, and the `BlockParser` driver loop
//! - **`kinds`**: the built-in processors (admonition, fenced code, ATX
//!   heading, blockquote, paragraph), each owning its own syntax knowledge
//!
//! ## Key Invariants
//!
//! - A processor whose `test` passed must consume at least the front chunk
//! - Container processors recurse through the parser, so nesting depth is
//!   unbounded
//! - Fenced code bodies are raw zones: no block or inline parsing inside

pub mod kinds;
pub mod processor;

pub use processor::{BlockParser, BlockProcessor, Processors, detab};
