//! Shared configuration options for the wrapper constructors.
//!
//! Every wrapper accepts the same small option record. The defaults match
//! what most call sites want: no custom message, no version metadata, the
//! warning attributed three frames above the emission point, and the plain
//! deprecation category.

use serde::{Deserialize, Serialize};

use crate::core::emit::WarningCategory;

/// Default stack-level hint, pointing the warning at the caller of the
/// wrapped entity rather than at the wrapper internals.
pub const DEFAULT_STACKLEVEL: u32 = 3;

/// Options shared by every wrapper constructor.
///
/// Built with [`Default`] plus the `with_*` methods:
///
/// ```rust
/// use movewarn::{MoveOpts, WarningCategory};
///
/// let opts = MoveOpts::default()
///     .with_message("use the batch API instead")
///     .with_version("1.4")
///     .with_removal_version("2.0")
///     .with_category(WarningCategory::PendingDeprecation);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOpts {
    /// Optional custom message appended after the move notice
    pub message: Option<String>,

    /// Version the deprecation was introduced in
    pub version: Option<String>,

    /// Version the old name will be removed in; the literal `"?"` renders as
    /// "a future version"
    pub removal_version: Option<String>,

    /// Stack-level hint recorded on the emitted warning
    pub stacklevel: u32,

    /// Warning category tag recorded on the emitted warning
    pub category: WarningCategory,
}

/// Default implementation for [`MoveOpts`].
impl Default for MoveOpts {
    fn default() -> Self {
        Self {
            message: None,
            version: None,
            removal_version: None,
            stacklevel: DEFAULT_STACKLEVEL,
            category: WarningCategory::Deprecation,
        }
    }
}

impl MoveOpts {
    /// Append a custom message after the move notice.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Record the version the deprecation was introduced in.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Record the version the old name will be removed in.
    pub fn with_removal_version(mut self, removal_version: impl Into<String>) -> Self {
        self.removal_version = Some(removal_version.into());
        self
    }

    /// Override the stack-level hint recorded on the warning.
    pub fn with_stacklevel(mut self, stacklevel: u32) -> Self {
        self.stacklevel = stacklevel;
        self
    }

    /// Override the warning category tag.
    pub fn with_category(mut self, category: WarningCategory) -> Self {
        self.category = category;
        self
    }
}
