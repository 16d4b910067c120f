//! The ordered rewriting passes.
//!
//! Each pass is a pure function from a buffer (plus the read-only tables)
//! to a new buffer. A pass whose directive never occurs in the buffer is a
//! no-op for that construct; only label resolution can fail. Passes are not
//! designed for re-invocation on their own output —
//! [`Converter::run`](crate::Converter::run) applies each exactly once, in
//! the documented order.

pub mod formatting;
pub mod macros;
pub mod math;
pub mod references;
pub mod structure;

pub use formatting::convert_formatting;
pub use macros::substitute_macros;
pub use math::{convert_aligned, convert_equations, convert_inline_math};
pub use references::convert_references;
pub use structure::{convert_sections, extract_body, strip_title_elements};
