// Path: crates/types/src/service_configs/mod.rs
//! Configuration structures for services and their lifecycle capabilities.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// The smallest accepted `interval_to_execute`, in blocks.
pub const MIN_INTERVAL_TO_EXECUTE: u64 = 1;

/// Configuration parameters for the multisig call service.
///
/// Supplied by the host's configuration or genesis mechanism; the service
/// only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultisigParams {
    /// The maximum age, in blocks since submission, that a pending call may
    /// reach before it is rejected.
    #[serde(default = "default_interval_to_execute")]
    pub interval_to_execute: u64,
}

fn default_interval_to_execute() -> u64 {
    100
}

impl Default for MultisigParams {
    fn default() -> Self {
        Self {
            interval_to_execute: default_interval_to_execute(),
        }
    }
}

impl MultisigParams {
    /// Creates parameters with the given execution interval.
    pub fn with_interval(interval_to_execute: u64) -> Self {
        Self {
            interval_to_execute,
        }
    }

    /// Checks the parameters against their accepted bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_to_execute < MIN_INTERVAL_TO_EXECUTE {
            return Err(ConfigError::IntervalTooShort {
                got: self.interval_to_execute,
                min: MIN_INTERVAL_TO_EXECUTE,
            });
        }
        Ok(())
    }
}

bitflags::bitflags! {
    /// A bitmask representing the lifecycle hooks a service exposes.
    /// This is distinct from the service's callable methods.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Capabilities: u32 {
        /// Implements the `OnEndBlock` trait and its `on_end_block` hook.
        const ON_END_BLOCK = 0b0010;
    }
}
