//! # Annotation Parser
//!
//! Splits `rule:param` on the first `:` and hands the trimmed halves to
//! [`Rule::build`]. Everything after the first `:` belongs to the parameter,
//! so `in:a:b,c` lists the entries `a:b` and `c`.

use std::str::FromStr;

use tagval_core::SyntaxError;

use crate::rule::{Rule, RuleName};

/// Parse a raw annotation into a ready-to-evaluate rule.
///
/// # Errors
///
/// - `SyntaxError::MissingSeparator` when there is no `:` at all.
/// - `SyntaxError::EmptyParameter` when the parameter trims to nothing,
///   whatever the rule name.
/// - `SyntaxError::UnknownRule` for names other than `len`, `in`, `min`, `max`.
/// - Any construction error from [`Rule::build`].
pub fn parse_annotation(annotation: &str) -> Result<Rule, SyntaxError> {
    let Some((name, param)) = annotation.split_once(':') else {
        return Err(SyntaxError::MissingSeparator(annotation.to_string()));
    };

    let name = name.trim();
    let param = param.trim();
    if param.is_empty() {
        return Err(SyntaxError::EmptyParameter(name.to_string()));
    }

    let rule = RuleName::from_name(name).ok_or_else(|| SyntaxError::UnknownRule(name.to_string()))?;
    Rule::build(rule, param)
}

impl Rule {
    /// Parse a raw annotation, logging rejected ones at debug level.
    pub fn parse(annotation: &str) -> Result<Self, SyntaxError> {
        parse_annotation(annotation).map_err(|e| {
            tracing::debug!(annotation, error = %e, "rejected validation annotation");
            e
        })
    }
}

impl FromStr for Rule {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
