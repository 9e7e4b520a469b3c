//! Constructor-intercepting wrappers for types that moved to a new location.

use std::fmt;
use std::marker::PhantomData;

use crate::core::config::MoveOpts;
use crate::core::emit::deprecation;
use crate::core::errors::{MovewarnError, Result};
use crate::core::message::{Kind, MoveDescriptor};
use crate::core::reflect;
use crate::moves::function::MoveTarget;

/// A wrapper re-exposing a relocated type under its old name.
///
/// Rust has no runtime type synthesis, so the old name is not a subclass of
/// the new type but a thin composing wrapper: every instantiation routed
/// through it emits the precomputed warning and then delegates to the real
/// constructor with all arguments forwarded unchanged. The wrapper reports
/// the old class name and module through [`name`](MovedClass::name) and
/// [`module`](MovedClass::module) so tooling sees the old origin.
///
/// ```rust
/// use movewarn::MovedClass;
///
/// struct Platter {
///     extent: u32,
/// }
///
/// impl Platter {
///     fn new(extent: u32) -> Self {
///         Self { extent }
///     }
/// }
///
/// // `Platter` used to be `mylib::Disc`:
/// let disc: MovedClass<Platter> = MovedClass::new("Disc", "mylib").unwrap();
///
/// let platter = disc.construct(Platter::new, (12,));
/// assert_eq!(platter.extent, 12);
/// ```
pub struct MovedClass<T> {
    descriptor: MoveDescriptor,
    message: String,
    old_class_name: String,
    old_module: String,
    _target: PhantomData<fn() -> T>,
}

impl<T> MovedClass<T> {
    /// Wrap type `T` under its old name with default options.
    pub fn new(old_class_name: &str, old_module_name: &str) -> Result<Self> {
        Self::with_opts(old_class_name, old_module_name, MoveOpts::default())
    }

    /// Wrap type `T` under its old name with explicit options.
    ///
    /// Fails with [`MovewarnError::UnexpectedClassType`] when `T` is not a
    /// nominal type (a closure, function pointer, reference, tuple, slice,
    /// or trait object); nothing is constructed in that case.
    pub fn with_opts(old_class_name: &str, old_module_name: &str, opts: MoveOpts) -> Result<Self> {
        let new_name = reflect::qualified_type_name::<T>();
        if !reflect::is_nominal_type_name(new_name) {
            return Err(MovewarnError::unexpected_class_type(new_name));
        }
        let descriptor = MoveDescriptor::new(
            Kind::Class,
            format!("{old_module_name}{}{old_class_name}", reflect::SEPARATOR),
            new_name,
            opts,
        );
        let message = descriptor.render();
        Ok(Self {
            descriptor,
            message,
            old_class_name: old_class_name.to_string(),
            old_module: old_module_name.to_string(),
            _target: PhantomData,
        })
    }

    /// Emit the warning, then build a `T` through `constructor`.
    ///
    /// Arguments travel as a tuple, exactly as in
    /// [`MovedFunction::call`](crate::moves::function::MovedFunction::call).
    pub fn construct<C, Args>(&self, constructor: C, args: Args) -> T
    where
        C: MoveTarget<Args, Output = T>,
    {
        self.emit();
        constructor.invoke(args)
    }

    /// Emit the warning, then build a `T` with a one-off closure.
    ///
    /// Convenient when the constructor call is more naturally written at the
    /// call site, e.g. struct literals or builder chains.
    pub fn construct_with(&self, constructor: impl FnOnce() -> T) -> T {
        self.emit();
        constructor()
    }

    fn emit(&self) {
        deprecation(
            &self.message,
            self.descriptor.opts.stacklevel,
            Some(&self.descriptor.opts.category),
        );
    }

    /// The old class name this wrapper re-exposes.
    pub fn name(&self) -> &str {
        &self.old_class_name
    }

    /// The old module the type was reachable from.
    pub fn module(&self) -> &str {
        &self.old_module
    }

    /// The old path, joined from module and class name.
    pub fn old_path(&self) -> &str {
        &self.descriptor.old_name
    }

    /// The move descriptor backing this wrapper.
    pub fn descriptor(&self) -> &MoveDescriptor {
        &self.descriptor
    }

    /// The precomputed deprecation message.
    pub fn deprecation_message(&self) -> &str {
        &self.message
    }
}

impl<T> fmt::Debug for MovedClass<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovedClass")
            .field("old_name", &self.descriptor.old_name)
            .field("new_name", &self.descriptor.new_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Platter {
        extent: u32,
    }

    impl Platter {
        fn new(extent: u32) -> Self {
            Self { extent }
        }
    }

    fn moved_class_for<T>(_witness: &T) -> Result<MovedClass<T>> {
        MovedClass::new("Disc", "mylib")
    }

    #[test]
    fn test_construct_delegates_to_real_constructor() {
        let disc: MovedClass<Platter> = MovedClass::new("Disc", "mylib").unwrap();
        let platter = disc.construct(Platter::new, (12,));
        assert_eq!(platter.extent, 12);
    }

    #[test]
    fn test_construct_with_closure() {
        let disc: MovedClass<Platter> = MovedClass::new("Disc", "mylib").unwrap();
        let platter = disc.construct_with(|| Platter { extent: 7 });
        assert_eq!(platter.extent, 7);
    }

    #[test]
    fn test_old_identity_metadata() {
        let disc: MovedClass<Platter> = MovedClass::new("Disc", "mylib").unwrap();
        assert_eq!(disc.name(), "Disc");
        assert_eq!(disc.module(), "mylib");
        assert_eq!(disc.old_path(), "mylib::Disc");
    }

    #[test]
    fn test_message_names_both_locations() {
        let disc: MovedClass<Platter> = MovedClass::new("Disc", "mylib").unwrap();
        let message = disc.deprecation_message();
        assert!(message.starts_with("Class 'mylib::Disc' has moved to '"));
        assert!(message.contains("Platter"));
    }

    #[test]
    fn test_non_nominal_type_is_rejected() {
        let err = MovedClass::<fn(u32) -> u32>::new("Disc", "mylib").unwrap_err();
        assert!(matches!(err, MovewarnError::UnexpectedClassType { .. }));

        let closure = |x: u32| x;
        assert!(moved_class_for(&closure).is_err());

        assert!(MovedClass::<&str>::new("Disc", "mylib").is_err());
        assert!(MovedClass::<(u32, u32)>::new("Disc", "mylib").is_err());
    }

    #[test]
    fn test_primitive_types_pass_validation() {
        assert!(MovedClass::<u32>::new("Count", "mylib").is_ok());
        assert!(MovedClass::<String>::new("Name", "mylib").is_ok());
    }
}
