//! # Rule Library
//!
//! The four built-in rules as a tagged variant. A [`Rule`] is built once per
//! annotation, with its parameter already parsed, and is then evaluated as a
//! plain predicate through [`Rule::check`].

use std::fmt;

use tagval_core::{Cause, Kind, Measure, RuleViolation, SyntaxError, Value};

use crate::literal::{parse_decimal, parse_prefixed};

/// Names of the built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    /// Exact length.
    Len,
    /// Membership.
    In,
    /// Lower bound.
    Min,
    /// Upper bound.
    Max,
}

impl RuleName {
    /// All rule names in canonical order.
    pub const ALL: [RuleName; 4] = [Self::Len, Self::In, Self::Min, Self::Max];

    /// Look up a rule by its annotation name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "len" => Some(Self::Len),
            "in" => Some(Self::In),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            _ => None,
        }
    }

    /// The name as written in annotations.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Len => "len",
            Self::In => "in",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The allowed values of an `in` rule.
///
/// Entries are trimmed once. The integer reading of the list is also computed
/// once: when an entry is not an integer literal, checking an integer value
/// reports the syntax error, while text values still compare against the
/// trimmed entries.
///
/// Unlike every other syntax error, this one surfaces only when an integer
/// reaches the rule. A value of another kind, including a null pointer,
/// gets `InvalidFieldType` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    entries: Vec<String>,
    integers: Result<Vec<i64>, SyntaxError>,
}

impl Membership {
    /// Build the membership list from a comma-separated parameter.
    pub fn from_param(param: &str) -> Self {
        let entries: Vec<String> = param.split(',').map(|e| e.trim().to_string()).collect();
        let integers = entries
            .iter()
            .map(|entry| {
                parse_prefixed(entry).ok_or_else(|| SyntaxError::InvalidInteger {
                    rule: RuleName::In.as_str(),
                    param: entry.clone(),
                })
            })
            .collect();
        Self { entries, integers }
    }

    /// Trimmed entries in declaration order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Parsed integer entries, or the error for the first unparsable one.
    pub fn integers(&self) -> Result<&[i64], &SyntaxError> {
        self.integers.as_deref()
    }

    fn check(&self, value: &Value<'_>) -> Result<(), Cause> {
        match *value {
            Value::Text(text) => {
                if self.entries.iter().any(|e| e == text) {
                    Ok(())
                } else {
                    Err(RuleViolation::NotInList {
                        value: format!("{text:?}"),
                    }
                    .into())
                }
            }
            Value::Integer(int) => {
                let allowed = self.integers.as_ref().map_err(|e| Cause::InvalidSyntax(e.clone()))?;
                if allowed.contains(&int) {
                    Ok(())
                } else {
                    Err(RuleViolation::NotInList {
                        value: int.to_string(),
                    }
                    .into())
                }
            }
            _ => Err(type_mismatch(RuleName::In, value)),
        }
    }
}

/// One parsed, ready-to-evaluate rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Text codepoint count or sequence length must equal the parameter.
    Len(usize),
    /// Value must be one of the listed entries.
    In(Membership),
    /// Measured quantity must not be below the parameter.
    Min(i64),
    /// Measured quantity must not be above the parameter.
    Max(i64),
}

impl Rule {
    /// Build a rule from its name and an already-trimmed, non-empty parameter.
    ///
    /// # Errors
    ///
    /// Returns `SyntaxError::InvalidInteger` when a numeric parameter does not
    /// parse, and `SyntaxError::NegativeLength` for `len` below zero.
    pub fn build(name: RuleName, param: &str) -> Result<Self, SyntaxError> {
        let invalid = || SyntaxError::InvalidInteger {
            rule: name.as_str(),
            param: param.to_string(),
        };

        match name {
            RuleName::Len => {
                let length = parse_decimal(param).ok_or_else(invalid)?;
                usize::try_from(length)
                    .map(Self::Len)
                    .map_err(|_| SyntaxError::NegativeLength(length))
            }
            RuleName::In => Ok(Self::In(Membership::from_param(param))),
            RuleName::Min => parse_prefixed(param).map(Self::Min).ok_or_else(invalid),
            RuleName::Max => parse_prefixed(param).map(Self::Max).ok_or_else(invalid),
        }
    }

    /// The rule's name.
    pub fn name(&self) -> RuleName {
        match self {
            Self::Len(_) => RuleName::Len,
            Self::In(_) => RuleName::In,
            Self::Min(_) => RuleName::Min,
            Self::Max(_) => RuleName::Max,
        }
    }

    /// Evaluate the rule against a value whose pointers are already resolved.
    ///
    /// # Errors
    ///
    /// Returns `Cause::Violation` when the value fails the predicate or has a
    /// kind the rule does not understand, and `Cause::InvalidSyntax` when an
    /// integer is checked against an `in` list with non-integer entries.
    pub fn check(&self, value: &Value<'_>) -> Result<(), Cause> {
        match self {
            Self::Len(expected) => {
                let actual = match *value {
                    Value::Text(text) => text.chars().count(),
                    Value::Sequence(seq) => seq.len(),
                    _ => return Err(type_mismatch(RuleName::Len, value)),
                };
                if actual == *expected {
                    Ok(())
                } else {
                    Err(RuleViolation::InvalidLength {
                        expected: *expected,
                        actual,
                    }
                    .into())
                }
            }
            Self::In(membership) => membership.check(value),
            Self::Min(min) => {
                let (measure, actual) = measure(RuleName::Min, value)?;
                if actual < *min {
                    Err(RuleViolation::BelowMin {
                        measure,
                        actual,
                        min: *min,
                    }
                    .into())
                } else {
                    Ok(())
                }
            }
            Self::Max(max) => {
                let (measure, actual) = measure(RuleName::Max, value)?;
                if actual > *max {
                    Err(RuleViolation::AboveMax {
                        measure,
                        actual,
                        max: *max,
                    }
                    .into())
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Len(n) => write!(f, "len:{n}"),
            Self::In(m) => write!(f, "in:{}", m.entries.join(",")),
            Self::Min(n) => write!(f, "min:{n}"),
            Self::Max(n) => write!(f, "max:{n}"),
        }
    }
}

fn measure(rule: RuleName, value: &Value<'_>) -> Result<(Measure, i64), Cause> {
    match *value {
        Value::Text(text) => Ok((Measure::TextLength, saturate(text.chars().count()))),
        Value::Sequence(seq) => Ok((Measure::SequenceLength, saturate(seq.len()))),
        Value::Integer(int) => Ok((Measure::IntegerValue, int)),
        _ => Err(type_mismatch(rule, value)),
    }
}

fn saturate(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

fn type_mismatch(rule: RuleName, value: &Value<'_>) -> Cause {
    let found: Kind = value.kind();
    RuleViolation::InvalidFieldType {
        rule: rule.as_str(),
        found,
    }
    .into()
}
