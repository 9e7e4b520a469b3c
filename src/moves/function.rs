//! Forwarding wrappers for free functions that moved to a new location.

use std::fmt;

use crate::core::config::MoveOpts;
use crate::core::emit::deprecation;
use crate::core::message::{Kind, MoveDescriptor, CALLABLE_POSTFIX};
use crate::core::reflect;

/// Callable targets a [`MovedFunction`] can forward to.
///
/// Implemented for plain functions and `Fn` closures of arity 0 through 8.
/// Arguments travel as a tuple so a single [`MovedFunction::call`] entry
/// point can forward any supported signature unchanged.
pub trait MoveTarget<Args> {
    /// The target's return type.
    type Output;

    /// Invoke the target with the given argument tuple.
    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_move_target {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> MoveTarget<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_move_target!();
impl_move_target!(A);
impl_move_target!(A, B);
impl_move_target!(A, B, C);
impl_move_target!(A, B, C, D);
impl_move_target!(A, B, C, D, E);
impl_move_target!(A, B, C, D, E, F);
impl_move_target!(A, B, C, D, E, F, G);
impl_move_target!(A, B, C, D, E, F, G, H);

/// A forwarding wrapper that re-exposes a relocated function under its old
/// name.
///
/// The deprecation message is formatted once at construction time; every
/// [`call`](MovedFunction::call) emits it and then forwards to the target.
/// The wrapper reports the OLD name and module through [`name`] and
/// [`module`], so introspection-style consumers see the old origin.
///
/// ```rust
/// use movewarn::MovedFunction;
///
/// fn frobnicate(x: i64) -> i64 {
///     x + 1
/// }
///
/// let frob = MovedFunction::new(frobnicate, "frob", "mylib::util");
/// assert_eq!(frob.call((41,)), 42);
/// assert_eq!(frob.name(), "frob");
/// assert_eq!(frob.module(), "mylib::util");
/// ```
///
/// [`name`]: MovedFunction::name
/// [`module`]: MovedFunction::module
pub struct MovedFunction<F> {
    target: F,
    descriptor: MoveDescriptor,
    message: String,
    old_name: String,
    old_module: String,
}

impl<F> MovedFunction<F> {
    /// Wrap `target` under its old name with default options.
    pub fn new(target: F, old_func_name: &str, old_module_name: &str) -> Self {
        Self::with_opts(target, old_func_name, old_module_name, MoveOpts::default())
    }

    /// Wrap `target` under its old name with explicit options.
    ///
    /// The new name is resolved from the target's type; closures and other
    /// callables without a path degrade to the `<unknown>` sentinel rather
    /// than failing. No validation is performed on the target's shape.
    pub fn with_opts(target: F, old_func_name: &str, old_module_name: &str, opts: MoveOpts) -> Self {
        let new_name = reflect::callable_name::<F>().unwrap_or(reflect::UNKNOWN_NAME);
        let descriptor = MoveDescriptor::new(
            Kind::Function,
            format!(
                "{old_module_name}{}{old_func_name}{CALLABLE_POSTFIX}",
                reflect::SEPARATOR
            ),
            format!("{new_name}{CALLABLE_POSTFIX}"),
            opts,
        );
        let message = descriptor.render();
        Self {
            target,
            descriptor,
            message,
            old_name: old_func_name.to_string(),
            old_module: old_module_name.to_string(),
        }
    }

    /// Emit the deprecation warning, then forward to the target.
    ///
    /// Arguments are passed as a tuple (`()` for a nullary target, `(x,)` for
    /// unary) and the target's return value comes back unchanged. Panics from
    /// the target propagate as-is.
    pub fn call<Args>(&self, args: Args) -> F::Output
    where
        F: MoveTarget<Args>,
    {
        deprecation(
            &self.message,
            self.descriptor.opts.stacklevel,
            Some(&self.descriptor.opts.category),
        );
        self.target.invoke(args)
    }

    /// The old function name this wrapper re-exposes.
    pub fn name(&self) -> &str {
        &self.old_name
    }

    /// The old module the function was reachable from.
    pub fn module(&self) -> &str {
        &self.old_module
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

impl<F> fmt::Debug for MovedFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovedFunction")
            .field("old_name", &self.old_name)
            .field("old_module", &self.old_module)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
