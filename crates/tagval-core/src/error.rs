//! # Error Types: Structured Validation Failures
//!
//! Defines the error hierarchy reported by the validation engine. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - A [`ValidationError`] pairs one [`Cause`] with the path of the value it
//!   is about (`""` for the root, `items[2].name` for nested values).
//! - [`ValidationErrors`] is the ordered aggregate of one validation call.
//!   Order is traversal order: field declaration order, then element index.
//! - Callers classify failures through the closed [`ErrorKind`] enumeration
//!   and [`ValidationErrors::matches`]. The three sentinel kinds are
//!   [`ErrorKind::NotRecord`], [`ErrorKind::InvalidSyntax`] and
//!   [`ErrorKind::UnexportedField`].

use std::fmt;

use thiserror::Error;

use crate::value::Kind;

/// Closed classification of every failure the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value is not a record, a pointer to one, or a traversable sequence.
    NotRecord,
    /// An annotation could not be parsed.
    InvalidSyntax,
    /// An annotated field is not accessible to the validator.
    UnexportedField,
    /// The rule does not apply to the field's kind.
    InvalidFieldType,
    /// `len` mismatch.
    InvalidLength,
    /// `in` membership failure.
    NotInList,
    /// `min` violation.
    BelowMin,
    /// `max` violation.
    AboveMax,
    /// Nesting exceeded the configured depth limit.
    TooDeep,
}

impl ErrorKind {
    /// Returns true for the structural kinds (`NotRecord`, `TooDeep`).
    pub fn is_structural(self) -> bool {
        matches!(self, Self::NotRecord | Self::TooDeep)
    }

    /// Returns true for kinds produced by evaluating a rule against a value.
    pub fn is_rule_violation(self) -> bool {
        matches!(
            self,
            Self::InvalidFieldType
                | Self::InvalidLength
                | Self::NotInList
                | Self::BelowMin
                | Self::AboveMax
        )
    }
}

/// Reason an annotation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The annotation has no `:` between rule name and parameter.
    #[error("annotation {0:?} is missing the ':' separator")]
    MissingSeparator(String),

    /// The parameter is empty after trimming.
    #[error("rule `{0}` has an empty parameter")]
    EmptyParameter(String),

    /// The rule name is not one of `len`, `in`, `min`, `max`.
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    /// A numeric parameter could not be parsed.
    #[error("rule `{rule}` parameter {param:?} is not a valid integer")]
    InvalidInteger {
        /// Rule whose parameter failed.
        rule: &'static str,
        /// The offending parameter text.
        param: String,
    },

    /// `len` was given a negative length.
    #[error("rule `len` requires a non-negative length, got {0}")]
    NegativeLength(i64),
}

/// Which quantity a `min`/`max` rule compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Number of Unicode scalar values in a text value.
    TextLength,
    /// Number of elements in a sequence.
    SequenceLength,
    /// The integer value itself.
    IntegerValue,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextLength => write!(f, "string length"),
            Self::SequenceLength => write!(f, "sequence length"),
            Self::IntegerValue => write!(f, "int value"),
        }
    }
}

/// A value failed its rule's predicate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// The rule does not understand the value's kind.
    #[error("invalid type of field for rule {rule}: got {found}")]
    InvalidFieldType {
        /// Rule name.
        rule: &'static str,
        /// Kind of the value after pointer resolution.
        found: Kind,
    },

    /// Length differs from the one required by `len`.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },

    /// Value is not among the entries of `in`.
    #[error("field value {value} is not in the allowed list")]
    NotInList {
        /// Rendered value.
        value: String,
    },

    /// Measured quantity is below `min`.
    #[error("{measure} {actual} is less than min {min}")]
    BelowMin {
        /// What was measured.
        measure: Measure,
        /// Observed quantity.
        actual: i64,
        /// Lower bound.
        min: i64,
    },

    /// Measured quantity is above `max`.
    #[error("{measure} {actual} is greater than max {max}")]
    AboveMax {
        /// What was measured.
        measure: Measure,
        /// Observed quantity.
        actual: i64,
        /// Upper bound.
        max: i64,
    },
}

impl RuleViolation {
    /// Classification of this violation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFieldType { .. } => ErrorKind::InvalidFieldType,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::NotInList { .. } => ErrorKind::NotInList,
            Self::BelowMin { .. } => ErrorKind::BelowMin,
            Self::AboveMax { .. } => ErrorKind::AboveMax,
        }
    }
}

/// The underlying failure wrapped by a [`ValidationError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    /// The value is not something the engine can traverse.
    #[error("wrong argument given, should be a record, got {found}")]
    NotRecord {
        /// Kind that was found instead.
        found: Kind,
    },

    /// The annotation is malformed.
    #[error("invalid validator syntax: {0}")]
    InvalidSyntax(#[from] SyntaxError),

    /// A rule was attached to an inaccessible field.
    #[error("validation for unexported field is not allowed")]
    UnexportedField,

    /// The value failed its rule.
    #[error(transparent)]
    Violation(#[from] RuleViolation),

    /// Nesting went deeper than the configured limit.
    #[error("nesting exceeds the maximum depth of {limit}")]
    TooDeep {
        /// Configured limit.
        limit: usize,
    },
}

impl Cause {
    /// Classification of this cause.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotRecord { .. } => ErrorKind::NotRecord,
            Self::InvalidSyntax(_) => ErrorKind::InvalidSyntax,
            Self::UnexportedField => ErrorKind::UnexportedField,
            Self::Violation(v) => v.kind(),
            Self::TooDeep { .. } => ErrorKind::TooDeep,
        }
    }
}

/// One failure, attributed to a single field path or structural decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    path: String,
    cause: Cause,
}

impl ValidationError {
    /// Create an error for the value at `path`.
    pub fn new(path: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            path: path.into(),
            cause: cause.into(),
        }
    }

    /// Path of the offending value; empty for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The underlying cause.
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }

    /// Returns true if this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.cause)
        } else {
            write!(f, "{}: {}", self.path, self.cause)
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Ordered aggregate of every failure found by one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Separator placed between rendered errors.
    pub const SEPARATOR: &'static str = "; ";

    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error, preserving encounter order.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Append every error of `other` after the existing ones.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no error was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all errors in encounter order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterate over the errors in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Returns true iff any contained error is of the given kind.
    pub fn matches(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.is(kind))
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.errors
    }

    /// `Ok(())` when empty, otherwise the aggregate itself.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(Self::SEPARATOR)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
