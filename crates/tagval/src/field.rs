//! # Field Validator
//!
//! Applies one field's annotation to its value. The steps run in a fixed
//! order and each one can end the check:
//!
//! 1. No annotation, or `-`: nothing to do.
//! 2. Inaccessible field: `UnexportedField`. The annotation is not parsed.
//! 3. Parse the annotation: a syntax error is reported and the value is never
//!    read.
//! 4. Follow non-null pointers; a null pointer reaches the rule unchanged.
//! 5. Evaluate the rule.

use tagval_core::{Cause, Field, ValidationError};
use tagval_rules::Rule;

/// Check one field against its annotation, reporting at most one error.
///
/// `path` is the full path of the field and is attached to the error.
///
/// # Errors
///
/// Returns the single [`ValidationError`] describing why the field failed.
pub fn check_field(field: &Field<'_>, path: &str) -> Result<(), ValidationError> {
    if field.is_unannotated() {
        return Ok(());
    }

    let annotation = field.annotation();
    tracing::trace!(path, annotation, "checking field");

    if !field.is_accessible() {
        return Err(ValidationError::new(path, Cause::UnexportedField));
    }

    let rule = Rule::parse(annotation).map_err(|e| ValidationError::new(path, e))?;
    let value = field.value().reflect().resolve();
    rule.check(&value).map_err(|cause| ValidationError::new(path, cause))
}
