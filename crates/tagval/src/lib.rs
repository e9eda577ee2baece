//! # tagval: Declarative Record Validation
//!
//! Validates records whose fields carry `rule:param` annotations, walking
//! into pointers, sequences and nested records, and reporting every failure
//! in one ordered aggregate.
//!
//! ```
//! use tagval::ErrorKind;
//!
//! tagval::record! {
//!     pub struct Signup {
//!         pub login: String => "len:5",
//!         pub role: String => "in:admin, staff",
//!         pub age: u32 => "min:18",
//!         pub referrer: Option<String>,
//!     }
//! }
//!
//! let ok = Signup { login: "alice".into(), role: "staff".into(), age: 30, referrer: None };
//! assert!(tagval::validate(&ok).is_ok());
//!
//! let bad = Signup { login: "bob".into(), role: "guest".into(), age: 30, referrer: None };
//! let errors = tagval::validate(&bad).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert!(errors.matches(ErrorKind::NotInList));
//! ```
//!
//! ## Crate Structure
//!
//! - [`field`]: applies one annotation to one field.
//! - [`config`]: [`ValidatorConfig`], serde-friendly traversal settings.
//! - [`validator`]: [`Validator`], the configured entry point.
//! - The rule language lives in `tagval-rules`, the value model and error
//!   types in `tagval-core`; both are re-exported here.
//!
//! ## Logging
//!
//! The crate emits `tracing` events and spans but never installs a
//! subscriber.

pub mod config;
pub mod field;
mod traverse;
pub mod validator;

pub use config::{ValidatorConfig, DEFAULT_MAX_DEPTH};
pub use field::check_field;
pub use validator::Validator;

pub use tagval_core::{
    impl_reflect_for_record, record, Cause, ErrorKind, Field, Kind, Measure, Record, Reflect,
    RuleViolation, Sequence, SyntaxError, ValidationError, ValidationErrors, Value, SKIP_MARKER,
};
pub use tagval_rules::{parse_annotation, Membership, Rule, RuleName};

/// Validate `value` with the default configuration.
///
/// # Errors
///
/// Returns the ordered aggregate of every failure; see [`Validator::validate`].
pub fn validate<T: Reflect + ?Sized>(value: &T) -> Result<(), ValidationErrors> {
    Validator::default().validate(value)
}
