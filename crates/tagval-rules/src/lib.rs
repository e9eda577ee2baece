//! # tagval-rules: The Annotation Rule Language
//!
//! Turns a raw annotation such as `"len:5"` or `"in: admin, staff"` into a
//! typed [`Rule`] and evaluates it against a [`Value`](tagval_core::Value).
//!
//! ## Grammar
//!
//! ```text
//! annotation := rule ":" parameter
//! rule       := "len" | "in" | "min" | "max"
//! ```
//!
//! Both sides are trimmed. A missing separator, an empty parameter, an
//! unknown rule name or an unparsable number is an
//! [`InvalidSyntax`](tagval_core::ErrorKind::InvalidSyntax) error, detected
//! before any value is examined.
//!
//! ## Rules
//!
//! | Rule | Text | Sequence | Integer |
//! |------|------|----------|---------|
//! | `len:n` | codepoints == n | elements == n | type error |
//! | `in:a,b` | equals a trimmed entry | type error | equals a parsed entry |
//! | `min:n` | codepoints >= n | elements >= n | value >= n |
//! | `max:n` | codepoints <= n | elements <= n | value <= n |
//!
//! Numeric parameters are parsed once, at construction.

pub mod literal;
pub mod parse;
pub mod rule;

// Re-export primary types.
pub use literal::{parse_decimal, parse_prefixed};
pub use parse::parse_annotation;
pub use rule::{Membership, Rule, RuleName};
