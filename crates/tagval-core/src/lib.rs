//! # tagval-core: Value Model & Error Hierarchy
//!
//! This crate is the leaf of the tagval workspace. It defines the
//! capability-based view of runtime values that the validation engine walks,
//! and the error types every other crate reports through.
//!
//! ## Key Design Principles
//!
//! 1. **Capabilities instead of reflection.** A value answers a small set of
//!    questions through [`Reflect`]: its [`Kind`], its text, integer or
//!    sequence content, and for records the ordered list of [`Field`]
//!    descriptors. The traversal never names concrete types.
//!
//! 2. **Accessibility is data.** Whether a field may be validated is a flag on
//!    its descriptor (`exported || embedded`), not a special case in the
//!    engine.
//!
//! 3. **Closed error taxonomy.** Callers classify failures with
//!    [`ErrorKind`] and [`ValidationErrors::matches`], never by string
//!    comparison.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tagval-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod impls;
pub mod record;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{
    Cause, ErrorKind, Measure, RuleViolation, SyntaxError, ValidationError, ValidationErrors,
};
pub use record::{is_public, Field, Record, SKIP_MARKER};
pub use value::{Kind, Reflect, Sequence, Value};
