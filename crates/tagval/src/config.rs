//! # Validator Configuration
//!
//! Knobs that shape the traversal. The defaults reproduce the documented
//! behavior of [`crate::validate`]; hosts that embed the validator can carry a
//! `ValidatorConfig` inside their own JSON/YAML/TOML settings, where every
//! missing key falls back to its default.

use serde::{Deserialize, Serialize};

/// Default nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Traversal settings for a [`crate::Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Deepest record or sequence nesting the walk enters. The root value is
    /// at depth 0; anything deeper than this limit is reported as `TooDeep`.
    pub max_depth: usize,

    /// Whether accessible fields holding records (directly, behind pointers
    /// or inside sequences) are validated too. When off, only the root
    /// record chain is checked.
    pub descend_into_fields: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            descend_into_fields: true,
        }
    }
}

impl ValidatorConfig {
    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable descent into nested field records.
    pub fn with_field_descent(mut self, enabled: bool) -> Self {
        self.descend_into_fields = enabled;
        self
    }
}
