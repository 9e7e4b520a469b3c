//! # Movewarn: Runtime Deprecation Shims for Relocated APIs
//!
//! A small library for library authors performing API renames. Each wrapper
//! re-exposes an old name, emits a deprecation notice through [`tracing`] at
//! call time, and forwards to the real implementation with all arguments and
//! the return value passed through unchanged:
//!
//! - **Moved functions**: a forwarding wrapper around the relocated function
//! - **Moved methods and properties**: an announcer embedded in the retained
//!   old accessor, qualified with the owning type at call time
//! - **Moved read-only properties**: a dual-dispatch accessor for instance
//!   and type-level reads
//! - **Moved types**: a constructor-intercepting wrapper for a relocated type
//!
//! ## Quick Start
//!
//! ```rust
//! use movewarn::{MoveOpts, MovedFunction};
//!
//! fn frobnicate(x: i64) -> i64 {
//!     x + 1
//! }
//!
//! // `frobnicate` used to be `mylib::util::frob`. Keep the old entry point
//! // alive for the deprecation window:
//! let frob = MovedFunction::with_opts(
//!     frobnicate,
//!     "frob",
//!     "mylib::util",
//!     MoveOpts::default().with_version("1.4").with_removal_version("2.0"),
//! );
//!
//! // Emits one warning, then forwards:
//! assert_eq!(frob.call((41,)), 42);
//! ```
//!
//! ## Architecture
//!
//! - [`core`](crate::core) - name resolution, message rendering, warning
//!   emission, shared options
//! - [`moves`](crate::moves) - the four wrapper constructors
//!
//! Warnings are plain `tracing` WARN events under the target
//! `movewarn::deprecation`; escalation, filtering, and deduplication policy
//! belong to the consumer's subscriber.

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Shared infrastructure
pub mod core {
    //! Name resolution, message rendering, and warning emission.

    pub mod config;
    pub mod emit;
    pub mod errors;
    pub mod message;
    pub mod reflect;
}

// The four wrapper constructors
pub mod moves {
    //! Forwarding wrappers for moved functions, methods, properties, and types.

    pub mod attribute;
    pub mod class;
    pub mod function;
    pub mod read_only;
}

// Re-export primary types for convenience
pub use crate::core::config::MoveOpts;
pub use crate::core::emit::{deprecation, WarningCategory, DEPRECATION_TARGET};
pub use crate::core::errors::{MovewarnError, Result};
pub use crate::core::message::{generate_message, Kind, MoveDescriptor};
pub use crate::moves::attribute::{
    moved_method, moved_method_with_opts, moved_property, moved_property_with_opts, MovedAttribute,
};
pub use crate::moves::class::MovedClass;
pub use crate::moves::function::{MoveTarget, MovedFunction};
pub use crate::moves::read_only::MovedReadOnlyProperty;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
