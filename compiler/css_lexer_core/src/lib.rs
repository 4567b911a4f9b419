//! Low-level building blocks for the style-sheet tokenizer.
//!
//! This crate has no dependency on the tokenizer itself. It provides:
//!
//! - [`char_class`]: pure code-point predicates and the three-code-point
//!   lookahead checks (number start, identifier start, valid escape).
//! - [`SourceBuffer`]: the preprocessed, sentinel-terminated code-point buffer
//!   (newline normalization, NUL/surrogate replacement, optional trailing
//!   newline) together with the issues found while preprocessing.
//! - [`Cursor`]: a forward-only reader with two code points of lookahead and
//!   line tracking.
//! - [`Span`]: half-open code-point ranges into the preprocessed input.
//!
//! ```
//! use css_lexer_core::{char_class, SourceBuffer};
//!
//! let buf = SourceBuffer::new("-a\r\nb");
//! let mut cursor = buf.cursor();
//! assert!(char_class::is_identifier_start(
//!     cursor.current(),
//!     cursor.peek(),
//!     cursor.peek2(),
//! ));
//! cursor.advance_n(2);
//! assert_eq!(cursor.advance(), '\n');
//! assert_eq!(cursor.line(), 2);
//! ```

pub mod char_class;
mod cursor;
mod source_buffer;
mod span;

pub use cursor::Cursor;
pub use source_buffer::{PreprocessIssue, PreprocessIssueKind, SourceBuffer};
pub use span::Span;
