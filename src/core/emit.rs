//! Warning emission through the `tracing` diagnostic channel.
//!
//! This crate is a pure producer into the host's warning channel: it emits
//! one WARN event per wrapper invocation and never installs, configures, or
//! filters a subscriber. Consumers that want deprecations escalated,
//! deduplicated, or silenced do so in their subscriber the same way they
//! would for any other event.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Event target under which every deprecation warning is emitted.
///
/// Useful for subscriber filters, e.g. an `EnvFilter` directive of
/// `movewarn::deprecation=off`.
pub const DEPRECATION_TARGET: &str = "movewarn::deprecation";

/// Category tag recorded on emitted warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningCategory {
    /// An API already deprecated; the default category
    Deprecation,

    /// An API scheduled for deprecation in an upcoming release
    PendingDeprecation,

    /// A behavior change coming in a future release
    Future,

    /// A consumer-defined category tag
    Custom(String),
}

/// Default implementation for [`WarningCategory`].
impl Default for WarningCategory {
    fn default() -> Self {
        Self::Deprecation
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deprecation => f.write_str("deprecation"),
            Self::PendingDeprecation => f.write_str("pending-deprecation"),
            Self::Future => f.write_str("future"),
            Self::Custom(tag) => f.write_str(tag),
        }
    }
}

/// Emit a single deprecation warning through the host diagnostic channel.
///
/// The message is the event text; `stacklevel` and the category tag travel as
/// structured fields. `stacklevel` is an advisory hint for subscribers that
/// re-report warning origins; it is recorded, not interpreted here. A `None`
/// category falls back to [`WarningCategory::Deprecation`].
///
/// This function has no return value and never panics; thread safety is the
/// subscriber's concern.
pub fn deprecation(message: &str, stacklevel: u32, category: Option<&WarningCategory>) {
    let default = WarningCategory::Deprecation;
    let category = category.unwrap_or(&default);
    tracing::warn!(
        target: DEPRECATION_TARGET,
        category = %category,
        stacklevel = stacklevel,
        "{message}"
    );
}
