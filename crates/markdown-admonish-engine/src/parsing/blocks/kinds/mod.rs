pub mod admonition;
pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod paragraph;

pub use admonition::{AdmonitionProcessor, CLASSNAME, CLASSNAME_TITLE, KNOWN_TYPES};
pub use block_quote::{BlockQuote, BlockQuoteProcessor};
pub use code_fence::{CodeFence, FenceKind, FencedCodeProcessor};
pub use heading::{HashHeading, HashHeadingProcessor};
pub use paragraph::ParagraphProcessor;
