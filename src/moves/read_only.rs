//! Dual-dispatch accessors for read-only properties that moved elsewhere.

use std::fmt;

use crate::core::config::MoveOpts;
use crate::core::emit::deprecation;
use crate::core::message::{Kind, MoveDescriptor};

/// A property-like accessor standing in for a read-only value that moved.
///
/// The accessor is polymorphic over how the value is reached: a bound read
/// goes through the instance accessor, an unbound read through the type-level
/// accessor. Every read emits the precomputed warning first. No setter
/// exists; the value is read-only by construction.
///
/// ```rust
/// use movewarn::MovedReadOnlyProperty;
///
/// struct Platter {
///     extent: u32,
/// }
///
/// impl Platter {
///     const DEFAULT_EXTENT: u32 = 12;
///
///     fn extent(&self) -> u32 {
///         self.extent
///     }
/// }
///
/// let size = MovedReadOnlyProperty::new(
///     "size",
///     "extent",
///     |platter: &Platter| platter.extent(),
///     || Platter::DEFAULT_EXTENT,
/// );
///
/// let platter = Platter { extent: 7 };
/// assert_eq!(size.get(Some(&platter)), 7); // bound read
/// assert_eq!(size.get(None), 12); // unbound, type-level read
/// ```
pub struct MovedReadOnlyProperty<T: ?Sized, R> {
    descriptor: MoveDescriptor,
    message: String,
    on_instance: fn(&T) -> R,
    on_type: fn() -> R,
}

impl<T: ?Sized, R> MovedReadOnlyProperty<T, R> {
    /// Build an accessor with default options.
    ///
    /// `on_instance` reads the relocated value from a live receiver;
    /// `on_type` reads the type-level fallback used for unbound access.
    pub fn new(
        old_name: &str,
        new_name: &str,
        on_instance: fn(&T) -> R,
        on_type: fn() -> R,
    ) -> Self {
        Self::with_opts(old_name, new_name, on_instance, on_type, MoveOpts::default())
    }

    /// Build an accessor with explicit options.
    pub fn with_opts(
        old_name: &str,
        new_name: &str,
        on_instance: fn(&T) -> R,
        on_type: fn() -> R,
        opts: MoveOpts,
    ) -> Self {
        let descriptor = MoveDescriptor::new(Kind::ReadOnlyProperty, old_name, new_name, opts);
        let message = descriptor.render();
        Self {
            descriptor,
            message,
            on_instance,
            on_type,
        }
    }

    /// Emit the warning, then read the relocated value.
    ///
    /// `Some(instance)` reads through the instance accessor; `None` reads the
    /// type-level value. Exactly one warning is emitted per access.
    pub fn get(&self, receiver: Option<&T>) -> R {
        deprecation(
            &self.message,
            self.descriptor.opts.stacklevel,
            Some(&self.descriptor.opts.category),
        );
        match receiver {
            Some(instance) => (self.on_instance)(instance),
            None => (self.on_type)(),
        }
    }

    /// The old property name this accessor re-exposes.
    pub fn old_name(&self) -> &str {
        &self.descriptor.old_name
    }

    /// The new property name reads are forwarded to.
    pub fn new_name(&self) -> &str {
        &self.descriptor.new_name
    }

    /// The precomputed deprecation message.
    pub fn deprecation_message(&self) -> &str {
        &self.message
    }
}

impl<T: ?Sized, R> fmt::Debug for MovedReadOnlyProperty<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovedReadOnlyProperty")
            .field("old_name", &self.descriptor.old_name)
            .field("new_name", &self.descriptor.new_name)
            .finish_non_exhaustive()
    }
}
