//! # Traversal Engine
//!
//! Walks a value looking for records to validate and collects every failure
//! into one [`ValidationErrors`] aggregate.
//!
//! ## Dispatch
//!
//! Non-null pointers are followed first. Then:
//!
//! | Value | Action |
//! |-------|--------|
//! | null pointer | nothing |
//! | record | check every field in declaration order, then descend |
//! | sequence of records, pointers or sequences | walk each element in index order |
//! | anything else | `NotRecord` on the root chain, ignored below a field |
//!
//! The root argument and the sequences and pointers it is made of form the
//! *root chain*, where a non-record is a caller error. Values reached through
//! a record field are optional structure: a scalar there is a leaf, not a
//! mistake.
//!
//! ## Paths
//!
//! Field names are joined with `.`, sequence indices appended as `[i]`. The
//! root has the empty path.

use tagval_core::{Cause, Record, Sequence, ValidationError, ValidationErrors, Value};

use crate::config::ValidatorConfig;
use crate::field::check_field;

/// How to treat values that cannot be traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Root chain: report `NotRecord`.
    Strict,
    /// Below a record field: skip silently.
    Nested,
}

/// Single-use walker holding the configuration and the growing aggregate.
pub(crate) struct Walker<'c> {
    config: &'c ValidatorConfig,
    errors: ValidationErrors,
}

impl<'c> Walker<'c> {
    pub(crate) fn new(config: &'c ValidatorConfig) -> Self {
        Self {
            config,
            errors: ValidationErrors::new(),
        }
    }

    /// Walk `root` and return everything found.
    pub(crate) fn run(mut self, root: Value<'_>) -> ValidationErrors {
        self.walk(root, "", 0, Mode::Strict);
        self.errors
    }

    fn walk(&mut self, value: Value<'_>, path: &str, depth: usize, mode: Mode) {
        match value.resolve() {
            Value::Pointer(_) => {}
            Value::Record(record) => {
                if self.enter(path, depth) {
                    self.walk_record(record, path, depth);
                }
            }
            Value::Sequence(seq) if seq.element_kind().is_traversable() => {
                if self.enter(path, depth) {
                    self.walk_sequence(seq, path, depth, mode);
                }
            }
            other => {
                if mode == Mode::Strict {
                    self.errors.push(ValidationError::new(
                        path,
                        Cause::NotRecord { found: other.kind() },
                    ));
                }
            }
        }
    }

    fn walk_record(&mut self, record: &dyn Record, path: &str, depth: usize) {
        for field in record.fields() {
            let field_path = join_field(path, field.name());
            if let Err(e) = check_field(&field, &field_path) {
                self.errors.push(e);
            }

            if self.config.descend_into_fields && field.is_accessible() && !field.is_skipped() {
                self.walk(field.value().reflect(), &field_path, depth + 1, Mode::Nested);
            }
        }
    }

    fn walk_sequence(&mut self, seq: &dyn Sequence, path: &str, depth: usize, mode: Mode) {
        for index in 0..seq.len() {
            if let Some(element) = seq.element(index) {
                self.walk(element.reflect(), &join_index(path, index), depth + 1, mode);
            }
        }
    }

    /// Depth guard. Returns false, after recording `TooDeep`, past the limit.
    fn enter(&mut self, path: &str, depth: usize) -> bool {
        let limit = self.config.max_depth;
        if depth <= limit {
            return true;
        }
        tracing::warn!(path, limit, "validation depth limit reached");
        self.errors
            .push(ValidationError::new(path, Cause::TooDeep { limit }));
        false
    }
}

fn join_field(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn join_index(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
