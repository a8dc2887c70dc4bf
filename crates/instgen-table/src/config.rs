//! Generator configuration and validation.
//!
//! [`GeneratorConfig`] is the input of a generation run. [`validate()`]
//! checks it before any file is touched.
//!
//! [`validate()`]: GeneratorConfig::validate

use std::path::PathBuf;

use instgen_core::{DerivativeOrder, InstantiationError};

// ── GeneratorConfig ────────────────────────────────────────────────

/// Inputs of one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed file listing the physical spaces to support.
    pub config_file: PathBuf,
    /// Highest derivative order to enumerate, inclusive. Kept signed
    /// as it comes from the build system unchecked.
    pub max_der_order: i64,
}

impl GeneratorConfig {
    /// Create a configuration.
    pub fn new(config_file: impl Into<PathBuf>, max_der_order: i64) -> Self {
        Self {
            config_file: config_file.into(),
            max_der_order,
        }
    }

    /// Check the configuration, returning the validated derivative order.
    pub fn validate(&self) -> Result<DerivativeOrder, InstantiationError> {
        DerivativeOrder::try_from(self.max_der_order)
    }
}
