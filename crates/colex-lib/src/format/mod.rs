//! Pretty printer.
//!
//! Only ever runs on input that lints clean. Parentheses from the source are
//! kept as written, unary minus hugs its operand, and long binary chains or
//! call argument lists are broken across lines based on a per-decision
//! width estimate.

mod options;
mod printer;
mod writer;


pub use options::FormatOptions;
pub use printer::{Formatter, compact_width};
