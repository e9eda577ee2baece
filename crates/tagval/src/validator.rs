//! # Validator
//!
//! The configured entry point. A [`Validator`] owns its [`ValidatorConfig`]
//! and can be shared freely; every call builds its own traversal state.

use tagval_core::{Reflect, ValidationErrors};

use crate::config::ValidatorConfig;
use crate::traverse::Walker;

/// Validates values under a fixed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `value` and every record reachable from it.
    ///
    /// `value` must be a record, a pointer to one, or a sequence whose
    /// elements are records, pointers or sequences. A null pointer at the
    /// top is accepted without inspection.
    ///
    /// # Errors
    ///
    /// Returns every failure found, in traversal order. Validation never
    /// stops at the first failure.
    pub fn validate<T: Reflect + ?Sized>(&self, value: &T) -> Result<(), ValidationErrors> {
        let span = tracing::debug_span!("validate", type_name = std::any::type_name::<T>());
        let _enter = span.enter();

        let errors = Walker::new(&self.config).run(value.reflect());
        tracing::debug!(error_count = errors.len(), "validation finished");
        errors.into_result()
    }
}

impl From<ValidatorConfig> for Validator {
    fn from(config: ValidatorConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagval_core::ErrorKind;

    tagval_core::record! {
        struct Login {
            pub user: String => "min:1",
        }
    }

    #[test]
    fn valid_record_is_ok() {
        let login = Login { user: "root".into() };
        assert_eq!(Validator::default().validate(&login), Ok(()));
    }

    #[test]
    fn failures_are_aggregated() {
        let logins = vec![Login { user: String::new() }, Login { user: String::new() }];
        let errors = Validator::default().validate(&logins).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.matches(ErrorKind::BelowMin));
    }

    #[test]
    fn keeps_its_config() {
        let config = ValidatorConfig::default().with_max_depth(3);
        let validator = Validator::from(config);
        assert_eq!(validator.config(), &config);
    }
}
